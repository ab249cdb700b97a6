// Command bar component - 하단 커맨드 바
//
// 액션 레지스트리의 커맨드바 항목을 우선순위 순으로 표시

use crate::core::actions::{action_def, command_bar_entries, Action, CommandBarEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    entries: Vec<&'static CommandBarEntry>,
    /// 확정 불가 상태 (목록이 비어 있음)
    accept_disabled: bool,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
    disabled_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            entries: command_bar_entries(),
            accept_disabled: false,
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
            disabled_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept_disabled(mut self, disabled: bool) -> Self {
        self.accept_disabled = disabled;
        self
    }

    fn is_enabled(&self, entry: &CommandBarEntry) -> bool {
        if !self.accept_disabled {
            return true;
        }
        let accept = action_def(Action::Accept).and_then(|def| def.command_bar.as_ref());
        !accept.is_some_and(|accept| std::ptr::eq(accept, entry))
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::raw(" ")];
        for (i, entry) in self.entries.iter().enumerate() {
            let (key_style, label_style) = if self.is_enabled(entry) {
                (
                    Style::default()
                        .fg(self.key_fg_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_fg_color),
                )
            } else {
                let dim = Style::default().fg(self.disabled_color);
                (dim, dim)
            };

            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(entry.key, key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(entry.label, label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
