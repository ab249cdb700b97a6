//! 파일 선택기 포트와 Raw 이미지 필터

use std::fs;
use std::path::{Path, PathBuf};

/// 허용되는 Raw 이미지 확장자
pub const RAW_IMAGE_EXTENSIONS: &[&str] = &[
    "3fr", "ari", "arw", "bay", "crw", "cr2", "cap", "dcs", "dcr", "dng", "drf", "eip", "erf",
    "fff", "iiq", "k25", "kdc", "mdc", "mef", "mos", "mrw", "nef", "nrw", "obm", "orf", "pef",
    "ptx", "pxn", "r3d", "raf", "raw", "rwl", "rw2", "rwz", "sr2", "srf", "srw", "x3f",
];

/// 파일 선택기에 넘기는 확장자 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawImageFilter {
    extensions: &'static [&'static str],
}

impl Default for RawImageFilter {
    fn default() -> Self {
        Self {
            extensions: RAW_IMAGE_EXTENSIONS,
        }
    }
}

impl RawImageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// 확장자 일치 여부 (대소문자 무시)
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    /// 선택기에 표시할 필터 설명 (`Raw images (*.3fr *.ari ...)`)
    pub fn description(&self) -> String {
        let patterns: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| format!("*.{}", ext))
            .collect();
        format!("Raw images ({})", patterns.join(" "))
    }
}

/// 외부 파일 선택기
///
/// 사용자가 파일을 고를 때까지 호출자 입장에서는 동기적으로 블록된다.
/// 사용자가 취소하면 빈 목록을 반환한다.
pub trait FilePicker {
    fn choose(&mut self, initial_directory: &Path, filter: &RawImageFilter) -> Vec<PathBuf>;
}

/// 입력된 경로 문자열을 선택 결과로 변환
///
/// - 디렉토리: 필터에 맞는 파일들을 이름순으로
/// - 필터에 맞는 파일: 그 파일 하나
/// - 그 외: 빈 목록
///
/// 상대 경로는 `base` 기준, `~`는 홈 디렉토리로 해석한다.
pub fn resolve_selection(input: &str, base: &Path, filter: &RawImageFilter) -> Vec<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let path = resolve_input_path(trimmed, base);

    if path.is_dir() {
        let Ok(read_dir) = fs::read_dir(&path) else {
            log::warn!("Cannot read directory: {}", path.display());
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = read_dir
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && filter.matches(p))
            .collect();
        files.sort();
        log::debug!("{} raw image(s) in {}", files.len(), path.display());
        return files;
    }

    if filter.matches(&path) {
        return vec![path];
    }

    log::debug!("Not a raw image or directory: {}", path.display());
    Vec::new()
}

fn resolve_input_path(input: &str, base: &Path) -> PathBuf {
    let expanded = if input == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(input))
    } else if let Some(rest) = input.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(input),
        }
    } else {
        PathBuf::from(input)
    };

    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"raw").unwrap();
        path
    }

    #[test]
    fn test_filter_matches_case_insensitive() {
        let filter = RawImageFilter::new();
        assert!(filter.matches(Path::new("/a/IMG_0001.CR2")));
        assert!(filter.matches(Path::new("/a/shot.nef")));
        assert!(filter.matches(Path::new("/a/shot.Rw2")));
        assert!(!filter.matches(Path::new("/a/shot.jpg")));
        assert!(!filter.matches(Path::new("/a/cr2")));
    }

    #[test]
    fn test_filter_extension_count() {
        assert_eq!(RawImageFilter::new().extensions().len(), 38);
    }

    #[test]
    fn test_filter_description() {
        let description = RawImageFilter::new().description();
        assert!(description.starts_with("Raw images (*.3fr *.ari *.arw"));
        assert!(description.ends_with("*.x3f)"));
    }

    #[test]
    fn test_resolve_directory_lists_raw_files_sorted() {
        let temp = TempDir::new().unwrap();
        let b = touch(temp.path(), "b.nef");
        let a = touch(temp.path(), "a.NEF");
        touch(temp.path(), "preview.jpg");
        fs::create_dir(temp.path().join("sub.dng")).unwrap();

        let files = resolve_selection(
            &temp.path().to_string_lossy(),
            Path::new("/"),
            &RawImageFilter::new(),
        );

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_resolve_single_file() {
        let temp = TempDir::new().unwrap();
        let file = touch(temp.path(), "img.arw");

        let files = resolve_selection(
            &file.to_string_lossy(),
            Path::new("/"),
            &RawImageFilter::new(),
        );

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_resolve_relative_to_base() {
        let temp = TempDir::new().unwrap();
        let file = touch(temp.path(), "img.raf");

        let files = resolve_selection("img.raf", temp.path(), &RawImageFilter::new());

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_resolve_rejects_non_raw_and_blank() {
        let temp = TempDir::new().unwrap();
        let jpg = touch(temp.path(), "img.jpg");
        let filter = RawImageFilter::new();

        assert!(resolve_selection(&jpg.to_string_lossy(), Path::new("/"), &filter).is_empty());
        assert!(resolve_selection("   ", temp.path(), &filter).is_empty());
    }

    #[test]
    fn test_resolve_does_not_check_existence() {
        let files = resolve_selection(
            "/does/not/exist/img.cr2",
            Path::new("/"),
            &RawImageFilter::new(),
        );
        assert_eq!(files, vec![PathBuf::from("/does/not/exist/img.cr2")]);
    }
}
