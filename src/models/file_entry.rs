use std::path::{Path, PathBuf};

/// 선택된 Raw 이미지 파일 엔트리
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 표시 이름 (경로의 마지막 구성 요소)
    pub name: String,
    /// 전체 경로
    pub path: PathBuf,
}

impl FileEntry {
    /// 경로로부터 엔트리 생성. 표시 이름은 마지막 경로 구성 요소에서 유도
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { name, path }
    }

    /// 파이프라인에 넘길 UTF-8 경로 문자열
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// 마지막 `/` 뒤의 구간. 구성 요소가 없으면 경로 전체를 그대로 사용
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_creation() {
        let entry = FileEntry::new("/a/b/img1.cr2");

        assert_eq!(entry.name, "img1.cr2");
        assert_eq!(entry.path, PathBuf::from("/a/b/img1.cr2"));
        assert_eq!(entry.path_string(), "/a/b/img1.cr2");
    }

    #[test]
    fn test_display_name_without_file_name() {
        let entry = FileEntry::new("/");
        assert_eq!(entry.name, "/");
    }

    #[test]
    fn test_display_name_unicode() {
        let entry = FileEntry::new("/사진/브라켓/노출_01.nef");
        assert_eq!(entry.name, "노출_01.nef");
    }
}
