use std::collections::HashSet;

/// 파일 목록 화면 상태 (커서, 마킹, 스크롤)
#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    /// 커서 위치
    pub selected_index: usize,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
    /// 마킹된 항목 인덱스
    pub marked: HashSet<usize>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn go_to_bottom(&mut self, len: usize) {
        self.selected_index = len.saturating_sub(1);
    }

    /// 커서 위치 항목 마킹 토글 후 다음 항목으로 이동
    pub fn toggle_mark(&mut self, len: usize) {
        if self.selected_index >= len {
            return;
        }
        if !self.marked.remove(&self.selected_index) {
            self.marked.insert(self.selected_index);
        }
        self.move_down(len);
    }

    /// 제거 대상
    ///
    /// 마킹된 항목이 있으면 그것들, 없으면 커서 위치의 항목
    pub fn removal_selection(&self, len: usize) -> HashSet<usize> {
        if !self.marked.is_empty() {
            return self.marked.clone();
        }
        if self.selected_index < len {
            HashSet::from([self.selected_index])
        } else {
            HashSet::new()
        }
    }

    /// 목록이 바뀐 뒤 마킹 해제 및 커서 보정
    pub fn reset_after_change(&mut self, len: usize) {
        self.marked.clear();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// 커서가 보이도록 스크롤 오프셋 조정
    pub fn adjust_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index + 1 - visible_height;
        }
    }
}
