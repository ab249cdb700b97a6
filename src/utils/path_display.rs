//! 화면 너비에 맞춘 문자열/경로 축약

use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 문자열 가운데를 `...`로 생략해 `max_width` 안에 맞춘다
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.len() + 1 {
        return prefix_within(text, max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let head = prefix_within(text, budget - budget / 2);
    let tail = suffix_within(text, budget / 2);
    format!("{}{}{}", head, ELLIPSIS, tail)
}

/// 경로를 `max_width` 안에 맞춘다
///
/// 홈 디렉토리는 `~`로 줄이고, 그래도 길면 앞부분을 `...`로 생략해
/// 파일 이름 쪽을 남긴다.
pub fn truncate_path_buf(path: &Path, max_width: usize) -> String {
    let display = with_home_tilde(path);
    if display.width() <= max_width {
        return display;
    }
    if max_width <= ELLIPSIS.len() {
        return prefix_within(&display, max_width);
    }
    format!(
        "{}{}",
        ELLIPSIS,
        suffix_within(&display, max_width - ELLIPSIS.len())
    )
}

fn with_home_tilde(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

fn prefix_within(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        width += UnicodeWidthChar::width(c).unwrap_or(1);
        if width > max_width {
            break;
        }
        out.push(c);
    }
    out
}

fn suffix_within(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        width += UnicodeWidthChar::width(c).unwrap_or(1);
        if width > max_width {
            break;
        }
        start = i;
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("IMG_0001.CR2", 20), "IMG_0001.CR2");
        assert_eq!(truncate_middle("IMG_0001_bracket.CR2", 10), "IMG_...CR2");
        assert_eq!(truncate_middle("IMG_0001.CR2", 3), "IMG");
        assert_eq!(truncate_middle("abc", 0), "");
    }

    #[test]
    fn test_truncate_middle_wide_chars() {
        let truncated = truncate_middle("가나다라마바사아자차카타파하.nef", 12);
        assert!(truncated.width() <= 12);
        assert!(truncated.contains(ELLIPSIS));
    }

    #[test]
    fn test_truncate_path_keeps_tail() {
        let path = Path::new("/mnt/card/DCIM/100CANON/bracket/IMG_0001.CR2");
        let truncated = truncate_path_buf(path, 20);
        assert!(truncated.starts_with(ELLIPSIS));
        assert!(truncated.ends_with("IMG_0001.CR2"));
        assert!(truncated.width() <= 20);
    }

    #[test]
    fn test_truncate_path_short() {
        assert_eq!(truncate_path_buf(Path::new("/mnt/a.nef"), 40), "/mnt/a.nef");
    }
}
