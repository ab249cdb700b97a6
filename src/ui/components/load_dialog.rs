//! 로드 옵션 다이얼로그 위젯
//!
//! 파일 목록, 옵션 체크박스, Accept/Cancel 버튼을 그린다.

use crate::app::ListViewState;
use crate::models::{FileSelectionList, OptionsState};
use crate::utils::path_display::{truncate_middle, truncate_path_buf};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩
const DIALOG_H_PADDING: u16 = 2;
/// 목록 아래 고정 영역 높이 (경로, 빈 줄, 체크박스 2줄, 빈 줄, 버튼)
const FOOTER_HEIGHT: u16 = 6;

pub const DIALOG_TITLE: &str = "Open raw images";
pub const ALIGN_LABEL: &str = "Align source images.";
pub const CROP_LABEL: &str = "Crop result image to optimal size.";

/// 다이얼로그 위젯
pub struct LoadDialogView<'a> {
    files: &'a FileSelectionList,
    options: &'a OptionsState,
    view: &'a ListViewState,
    bg_color: Color,
    fg_color: Color,
    dim_color: Color,
    border_color: Color,
    title_color: Color,
    cursor_bg: Color,
    marked_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
}

impl<'a> LoadDialogView<'a> {
    pub fn new(
        files: &'a FileSelectionList,
        options: &'a OptionsState,
        view: &'a ListViewState,
    ) -> Self {
        Self {
            files,
            options,
            view,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(128, 128, 128),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            cursor_bg: Color::Rgb(38, 79, 120),
            marked_color: Color::Rgb(255, 215, 0),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
        }
    }

    /// 주어진 화면에서 목록이 차지할 수 있는 줄 수
    pub fn list_height(screen: Rect) -> usize {
        Self::calculate_area(screen)
            .height
            .saturating_sub(2 + FOOTER_HEIGHT) as usize
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 화면 크기에 맞춤)
    fn calculate_area(screen: Rect) -> Rect {
        let width = 70u16.min(screen.width.saturating_sub(4)).max(30);
        let height = 20u16.min(screen.height.saturating_sub(2)).max(10);
        let width = width.min(screen.width);
        let height = height.min(screen.height);

        Rect {
            x: screen.x + (screen.width.saturating_sub(width)) / 2,
            y: screen.y + (screen.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn render_button(&self, buf: &mut Buffer, x: u16, y: u16, label: &str, selected: bool) -> u16 {
        let (bg, fg) = if selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };
        let padded = format!(" {} ", label);
        buf.set_string(x, y, &padded, Style::default().fg(fg).bg(bg));
        padded.width() as u16
    }

    fn render_list(&self, buf: &mut Buffer, area: Rect) {
        if self.files.is_empty() {
            let hint = "No files. Press 'a' to add raw images.";
            buf.set_string(
                area.x,
                area.y,
                truncate_middle(hint, area.width as usize),
                Style::default().fg(self.dim_color).bg(self.bg_color),
            );
            return;
        }

        let visible = area.height as usize;
        let rows = self
            .files
            .entries()
            .iter()
            .enumerate()
            .skip(self.view.scroll_offset)
            .take(visible);

        for (row, (index, entry)) in rows.enumerate() {
            let y = area.y + row as u16;
            let is_cursor = index == self.view.selected_index;
            let is_marked = self.view.marked.contains(&index);

            let bg = if is_cursor { self.cursor_bg } else { self.bg_color };
            let fg = if is_marked {
                self.marked_color
            } else {
                self.fg_color
            };
            let mut style = Style::default().fg(fg).bg(bg);
            if is_marked {
                style = style.add_modifier(Modifier::BOLD);
            }

            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(bg);
                }
            }

            let marker = if is_marked { "* " } else { "  " };
            let name_width = (area.width as usize).saturating_sub(marker.width());
            let line = format!("{}{}", marker, truncate_middle(&entry.name, name_width));
            buf.set_string(area.x, y, line, style);
        }
    }

    fn render_checkbox(&self, buf: &mut Buffer, x: u16, y: u16, label: &str, checked: bool) {
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_string(x, y, format!("{} {}", mark, label), style);
    }
}

impl Widget for LoadDialogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = Self::calculate_area(area);
        Clear.render(dialog_area, buf);

        let title = format!(" {} ({}) ", DIALOG_TITLE, self.files.count());
        Block::default()
            .title(title)
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
        if inner.height <= FOOTER_HEIGHT {
            return;
        }

        let list_area = Rect {
            height: inner.height - FOOTER_HEIGHT,
            ..inner
        };
        self.render_list(buf, list_area);

        let mut y = list_area.y + list_area.height;
        let dim = Style::default().fg(self.dim_color).bg(self.bg_color);
        if let Some(entry) = self.files.get(self.view.selected_index) {
            buf.set_string(
                inner.x,
                y,
                truncate_path_buf(&entry.path, inner.width as usize),
                dim,
            );
        }

        y += 2;
        self.render_checkbox(buf, inner.x, y, ALIGN_LABEL, self.options.align());
        y += 1;
        self.render_checkbox(buf, inner.x, y, CROP_LABEL, self.options.crop());

        y += 2;
        let accept_width = 10u16;
        let cancel_width = 10u16;
        let buttons_width = accept_width + 2 + cancel_width;
        let x = inner.x + inner.width.saturating_sub(buttons_width) / 2;
        let w = self.render_button(buf, x, y, "Accept", !self.files.is_empty());
        self.render_button(buf, x + w + 2, y, "Cancel", false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_entries_and_options() {
        let mut files = FileSelectionList::new();
        files.add(["/a/b/img1.cr2", "/a/b/img2.cr2"]);
        let mut options = OptionsState::new();
        options.toggle_align();
        let view = ListViewState::new();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        LoadDialogView::new(&files, &options, &view).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Open raw images (2)"));
        assert!(text.contains("img1.cr2"));
        assert!(text.contains("img2.cr2"));
        assert!(text.contains("[ ] Align source images."));
        assert!(text.contains("[x] Crop result image to optimal size."));
        assert!(text.contains("Accept"));
    }

    #[test]
    fn test_renders_empty_hint() {
        let files = FileSelectionList::new();
        let options = OptionsState::new();
        let view = ListViewState::new();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        LoadDialogView::new(&files, &options, &view).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("No files."));
    }

    #[test]
    fn test_tiny_screen_does_not_panic() {
        let files = FileSelectionList::new();
        let options = OptionsState::new();
        let view = ListViewState::new();

        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        LoadDialogView::new(&files, &options, &view).render(area, &mut buf);
        assert_eq!(LoadDialogView::list_height(area), 0);
    }
}
