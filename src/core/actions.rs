//! 액션 시스템
//!
//! 로드 옵션 다이얼로그의 키 바인딩과 커맨드바 항목이
//! 이 모듈의 레지스트리를 참조한다.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 다이얼로그에서 가능한 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    // Selection
    ToggleMark,
    // File list
    AddFiles,
    RemoveFiles,
    // Options
    ToggleAlign,
    ToggleCrop,
    // Dialog
    Accept,
    Cancel,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up",
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "Top",
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Bottom",
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleMark,
        id: "toggle_mark",
        label: "Mark",
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Mark",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::AddFiles,
        id: "add_files",
        label: "Add",
        command_bar: Some(CommandBarEntry {
            key: "a",
            label: "Add",
            priority: 1,
        }),
    },
    ActionDef {
        action: Action::RemoveFiles,
        id: "remove_files",
        label: "Remove",
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Remove",
            priority: 2,
        }),
    },
    ActionDef {
        action: Action::ToggleAlign,
        id: "toggle_align",
        label: "Align source images.",
        command_bar: Some(CommandBarEntry {
            key: "l",
            label: "Align",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::ToggleCrop,
        id: "toggle_crop",
        label: "Crop result image to optimal size.",
        command_bar: Some(CommandBarEntry {
            key: "c",
            label: "Crop",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::Accept,
        id: "accept",
        label: "Accept",
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Accept",
            priority: 3,
        }),
    },
    ActionDef {
        action: Action::Cancel,
        id: "cancel",
        label: "Cancel",
        command_bar: Some(CommandBarEntry {
            key: "Esc",
            label: "Cancel",
            priority: 4,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 이동
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::GoToBottom,
        },
        // 선택
        KeyBinding {
            code: KeyCode::Char(' '),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleMark,
        },
        // 파일 목록
        KeyBinding {
            code: KeyCode::Char('a'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::AddFiles,
        },
        KeyBinding {
            code: KeyCode::Insert,
            modifiers: None,
            action: Action::AddFiles,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::RemoveFiles,
        },
        KeyBinding {
            code: KeyCode::Delete,
            modifiers: None,
            action: Action::RemoveFiles,
        },
        // 옵션
        KeyBinding {
            code: KeyCode::Char('l'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleAlign,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleCrop,
        },
        // 다이얼로그
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::Accept,
        },
        KeyBinding {
            code: KeyCode::Esc,
            modifiers: None,
            action: Action::Cancel,
        },
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Cancel,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Cancel,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

/// 액션 메타데이터 조회
pub fn action_def(action: Action) -> Option<&'static ActionDef> {
    ACTION_DEFS.iter().find(|def| def.action == action)
}

/// 커맨드바 항목 (우선순위 순)
pub fn command_bar_entries() -> Vec<&'static CommandBarEntry> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();
    entries.sort_by_key(|entry| entry.priority);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_basic_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('a')),
            Some(Action::AddFiles)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Delete),
            Some(Action::RemoveFiles)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::Accept)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Esc),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_find_action_modifier_distinguishes() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('c')),
            Some(Action::ToggleCrop)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Cancel)
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_every_action_has_definition() {
        for binding in key_bindings() {
            assert!(
                action_def(binding.action).is_some(),
                "missing def: {:?}",
                binding.action
            );
        }
    }

    #[test]
    fn test_command_bar_sorted_by_priority() {
        let entries = command_bar_entries();
        assert_eq!(entries.first().map(|e| e.key), Some("a"));
        assert!(entries.windows(2).all(|w| w[0].priority <= w[1].priority));
    }
}
