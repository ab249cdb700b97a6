// UI Layer
pub mod components;
pub mod layout;

pub use components::{CommandBar, LoadDialogView, PathPromptView};
pub use layout::{fits, ScreenAreas};

use crate::app::{ListViewState, PromptState};
use crate::models::{FileSelectionList, OptionsState};
use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::path::Path;

const SCREEN_BG: Color = Color::Rgb(30, 30, 30);
const WARNING_FG: Color = Color::Rgb(255, 215, 0);

/// 로드 옵션 다이얼로그 화면
pub fn draw_dialog(
    frame: &mut Frame,
    files: &FileSelectionList,
    options: &OptionsState,
    view: &ListViewState,
) {
    let area = frame.area();
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(SCREEN_BG)),
        area,
    );
    if !fits(area) {
        draw_too_small(frame);
        return;
    }

    let areas = ScreenAreas::split(area);
    frame.render_widget(LoadDialogView::new(files, options, view), areas.body);
    frame.render_widget(
        CommandBar::new().accept_disabled(files.is_empty()),
        areas.command_bar,
    );
}

/// 파일 선택기 프롬프트 화면
pub fn draw_prompt(
    frame: &mut Frame,
    prompt: &PromptState,
    initial_directory: &Path,
    filter_description: &str,
) {
    let area = frame.area();
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(SCREEN_BG)),
        area,
    );
    if !fits(area) {
        draw_too_small(frame);
        return;
    }
    frame.render_widget(
        PathPromptView::new(prompt, initial_directory, filter_description),
        area,
    );
}

fn draw_too_small(frame: &mut Frame) {
    let area = frame.area();
    let message = format!("Terminal too small ({}x{})", area.width, area.height);
    frame.render_widget(
        Paragraph::new(message).style(Style::default().fg(WARNING_FG).bg(SCREEN_BG)),
        area,
    );
}

/// 현재 화면 크기에서 목록에 보이는 줄 수
pub fn visible_list_height(width: u16, height: u16) -> usize {
    let body = ScreenAreas::split(ratatui::layout::Rect::new(0, 0, width, height)).body;
    LoadDialogView::list_height(body)
}
