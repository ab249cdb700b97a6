//! 파일 선택기 프롬프트 위젯
//!
//! 시작 디렉토리와 필터 설명을 보여주고 경로 입력 줄을 그린다.

use crate::app::PromptState;
use crate::utils::path_display::{truncate_middle, truncate_path_buf};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use std::path::Path;
use unicode_width::UnicodeWidthChar;

const DIALOG_H_PADDING: u16 = 2;
const DIALOG_HEIGHT: u16 = 9;

/// 경로 입력 프롬프트
pub struct PathPromptView<'a> {
    prompt: &'a PromptState,
    initial_directory: &'a Path,
    filter_description: &'a str,
    bg_color: Color,
    fg_color: Color,
    dim_color: Color,
    border_color: Color,
    title_color: Color,
    input_bg: Color,
}

impl<'a> PathPromptView<'a> {
    pub fn new(
        prompt: &'a PromptState,
        initial_directory: &'a Path,
        filter_description: &'a str,
    ) -> Self {
        Self {
            prompt,
            initial_directory,
            filter_description,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(128, 128, 128),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            input_bg: Color::Rgb(30, 30, 30),
        }
    }

    fn calculate_area(screen: Rect) -> Rect {
        let width = 72u16.min(screen.width.saturating_sub(4)).max(24).min(screen.width);
        let height = DIALOG_HEIGHT.min(screen.height);
        Rect {
            x: screen.x + screen.width.saturating_sub(width) / 2,
            y: screen.y + screen.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn render_input(&self, buf: &mut Buffer, x: u16, y: u16, width: u16) {
        for cx in x..x + width {
            if let Some(cell) = buf.cell_mut((cx, y)) {
                cell.set_bg(self.input_bg);
            }
        }
        if width < 3 {
            return;
        }

        let value = self.prompt.value();
        let cursor_pos = self.prompt.cursor_pos();
        let field = width as usize - 2;
        let (start, cursor_col) = visible_window(value, cursor_pos, field);

        let style = Style::default().fg(self.fg_color).bg(self.input_bg);
        let shown: String = take_width(&value[start..], field);
        buf.set_string(x + 1, y, shown, style);

        let cursor_x = x + 1 + cursor_col as u16;
        if cursor_x >= x + width - 1 {
            return;
        }
        if let Some(cell) = buf.cell_mut((cursor_x, y)) {
            if cursor_pos < value.len() {
                cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
            } else {
                cell.set_char('▏');
                cell.set_style(style);
            }
        }
    }
}

/// 커서가 입력 필드 안에 오도록 표시 시작 바이트와 커서 열을 계산
fn visible_window(value: &str, cursor_pos: usize, field: usize) -> (usize, usize) {
    let cursor_col: usize = value[..cursor_pos].chars().map(char_width).sum();
    if cursor_col < field {
        return (0, cursor_col);
    }

    let skip = cursor_col + 1 - field;
    let mut skipped = 0;
    for (i, c) in value.char_indices() {
        if skipped >= skip {
            return (i, cursor_col - skipped);
        }
        skipped += char_width(c);
    }
    (value.len(), cursor_col - skipped)
}

fn take_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|c| {
            width += char_width(*c);
            width <= max_width
        })
        .collect()
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

impl Widget for PathPromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = Self::calculate_area(area);
        Clear.render(dialog_area, buf);

        Block::default()
            .title(" Add raw images ")
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(dialog_area, buf);

        let inner = Rect {
            x: dialog_area.x + DIALOG_H_PADDING,
            y: dialog_area.y + 1,
            width: dialog_area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: dialog_area.height.saturating_sub(2),
        };
        if inner.height < 5 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let fg = Style::default().fg(self.fg_color).bg(self.bg_color);
        let dim = Style::default().fg(self.dim_color).bg(self.bg_color);

        let from = format!(
            "From: {}",
            truncate_path_buf(self.initial_directory, width.saturating_sub(6))
        );
        buf.set_string(inner.x, inner.y, from, fg);
        buf.set_string(
            inner.x,
            inner.y + 1,
            truncate_middle(self.filter_description, width),
            dim,
        );

        self.render_input(buf, inner.x, inner.y + 3, inner.width);

        let hint = "Enter: add file or directory   Esc: cancel   Ctrl+W: up";
        buf.set_string(inner.x, inner.y + 5, truncate_middle(hint, width), dim);
    }
}
