use crate::models::file_entry::FileEntry;
use std::collections::HashSet;
use std::path::PathBuf;

/// 선택된 파일 목록
///
/// 추가 순서를 그대로 유지하며 중복 경로를 걸러내지 않는다.
/// 같은 경로가 두 번 추가되면 서로 다른 두 엔트리가 된다.
#[derive(Debug, Clone, Default)]
pub struct FileSelectionList {
    entries: Vec<FileEntry>,
}

impl FileSelectionList {
    /// 빈 목록 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로들을 주어진 순서대로 목록 끝에 추가
    pub fn add<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.entries.extend(paths.into_iter().map(FileEntry::new));
    }

    /// 선택된 인덱스의 엔트리 제거
    ///
    /// 나머지 엔트리의 상대 순서는 유지되고, 범위 밖 인덱스는 무시된다.
    /// 실제로 제거된 엔트리 수를 반환한다.
    pub fn remove(&mut self, selected: &HashSet<usize>) -> usize {
        if selected.is_empty() {
            return 0;
        }

        let before = self.entries.len();
        let mut index = 0;
        self.entries.retain(|_| {
            let keep = !selected.contains(&index);
            index += 1;
            keep
        });
        before - self.entries.len()
    }

    /// 엔트리 개수
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 읽기 전용 엔트리 목록
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// 목록 순서대로 경로 문자열 수집
    pub fn path_strings(&self) -> Vec<String> {
        self.entries.iter().map(FileEntry::path_string).collect()
    }
}
