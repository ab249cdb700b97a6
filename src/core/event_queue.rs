//! 단일 스레드 이벤트 큐
//!
//! 현재 핸들러가 끝난 뒤에 실행할 작업을 쌓아 둔다.
//! 이벤트 루프는 매 입력 처리 후 큐를 비운다.

use std::collections::VecDeque;

/// 지연 실행 작업 큐 (FIFO)
#[derive(Debug)]
pub struct EventQueue<T> {
    tasks: VecDeque<T>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지연 없이 실행할 작업 등록 (다음 드레인 때 실행)
    pub fn post(&mut self, task: T) {
        self.tasks.push_back(task);
    }

    /// 가장 먼저 등록된 작업 꺼내기
    pub fn pop(&mut self) -> Option<T> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.post(1);
        queue.post(2);
        queue.post(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
