//! 경로 입력 프롬프트 상태
//!
//! 터미널 파일 선택기가 사용하는 한 줄 입력 버퍼.
//! `cursor_pos`는 항상 UTF-8 문자 경계의 바이트 인덱스다.

use crossterm::event::{KeyCode, KeyModifiers};

/// 키 입력 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// 계속 입력 중
    Editing,
    /// 입력 확정
    Submit(String),
    /// 입력 취소
    Cancel,
}

/// 경로 입력 상태
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    value: String,
    cursor_pos: usize,
}

impl PromptState {
    /// 초기 값을 채우고 커서를 끝에 둔다
    pub fn new(initial: impl Into<String>) -> Self {
        let value: String = initial.into();
        let cursor_pos = value.len();
        Self { value, cursor_pos }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// 키 입력 반영
    pub fn handle_key(&mut self, modifiers: KeyModifiers, code: KeyCode) -> PromptOutcome {
        match (modifiers, code) {
            (_, KeyCode::Enter) => return PromptOutcome::Submit(self.value.clone()),
            (_, KeyCode::Esc) => return PromptOutcome::Cancel,
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return PromptOutcome::Cancel,
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => self.delete_prev_segment(),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.clear(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => self.insert(c),
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.left(),
            (_, KeyCode::Right) => self.right(),
            (_, KeyCode::Home) => self.cursor_pos = 0,
            (_, KeyCode::End) => self.cursor_pos = self.value.len(),
            _ => {}
        }
        PromptOutcome::Editing
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor_pos = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor_pos = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(c) = self.value[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// 커서 앞의 경로 구성 요소 하나 삭제 (끝의 `/`는 함께 지움)
    pub fn delete_prev_segment(&mut self) {
        let head = &self.value[..self.cursor_pos];
        let trimmed = head.trim_end_matches('/');
        let start = trimmed.rfind('/').map(|i| i + 1).unwrap_or(0);
        self.value.replace_range(start..self.cursor_pos, "");
        self.cursor_pos = start;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(prompt: &mut PromptState, text: &str) {
        for c in text.chars() {
            prompt.handle_key(KeyModifiers::NONE, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_initial_value_cursor_at_end() {
        let prompt = PromptState::new("/photos/");
        assert_eq!(prompt.value(), "/photos/");
        assert_eq!(prompt.cursor_pos(), "/photos/".len());
    }

    #[test]
    fn test_typing_and_submit() {
        let mut prompt = PromptState::new("/photos/");
        type_str(&mut prompt, "day1");

        assert_eq!(
            prompt.handle_key(KeyModifiers::NONE, KeyCode::Enter),
            PromptOutcome::Submit("/photos/day1".to_string())
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = PromptState::new("/x");
        assert_eq!(
            prompt.handle_key(KeyModifiers::NONE, KeyCode::Esc),
            PromptOutcome::Cancel
        );
    }

    #[test]
    fn test_utf8_editing() {
        let mut prompt = PromptState::new("/사진");
        prompt.handle_key(KeyModifiers::NONE, KeyCode::Left);
        prompt.handle_key(KeyModifiers::NONE, KeyCode::Backspace);
        assert_eq!(prompt.value(), "/진");
        assert_eq!(prompt.cursor_pos(), 1);

        prompt.handle_key(KeyModifiers::NONE, KeyCode::Delete);
        assert_eq!(prompt.value(), "/");

        prompt.handle_key(KeyModifiers::NONE, KeyCode::Home);
        prompt.handle_key(KeyModifiers::NONE, KeyCode::Right);
        assert_eq!(prompt.cursor_pos(), 1);
    }

    #[test]
    fn test_delete_prev_segment() {
        let mut prompt = PromptState::new("/photos/day1/");
        prompt.handle_key(KeyModifiers::CONTROL, KeyCode::Char('w'));
        assert_eq!(prompt.value(), "/photos/");

        prompt.handle_key(KeyModifiers::CONTROL, KeyCode::Char('w'));
        assert_eq!(prompt.value(), "/");

        prompt.handle_key(KeyModifiers::CONTROL, KeyCode::Char('w'));
        assert_eq!(prompt.value(), "");
    }

    #[test]
    fn test_clear_line() {
        let mut prompt = PromptState::new("/photos");
        prompt.handle_key(KeyModifiers::CONTROL, KeyCode::Char('u'));
        assert_eq!(prompt.value(), "");
        assert_eq!(prompt.cursor_pos(), 0);
    }
}
