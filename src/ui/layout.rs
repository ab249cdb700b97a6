// Layout - 화면 분할
//
// 본문 영역과 하단 커맨드 바 한 줄

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 10;

/// 화면 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub body: Rect,
    pub command_bar: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        Self {
            body: chunks[0],
            command_bar: chunks[1],
        }
    }
}

/// 터미널이 다이얼로그를 그리기에 충분한지
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reserves_command_bar() {
        let areas = ScreenAreas::split(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.body.height, 23);
        assert_eq!(areas.command_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_fits() {
        assert!(fits(Rect::new(0, 0, 80, 24)));
        assert!(!fits(Rect::new(0, 0, 20, 24)));
        assert!(!fits(Rect::new(0, 0, 80, 5)));
    }
}
