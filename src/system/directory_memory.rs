//! 마지막으로 연 디렉토리 기억
//!
//! 파일 선택기를 다시 열 때 직전에 파일을 고른 디렉토리에서 시작하도록
//! 설정 저장소의 `lastOpenDirectory` 값을 읽고 쓴다.

use crate::system::settings::SettingsStore;
use std::env;
use std::path::{Path, PathBuf};

/// 설정 저장소 키
pub const LAST_OPEN_DIRECTORY_KEY: &str = "lastOpenDirectory";

/// 저장소 위의 "마지막 디렉토리" 뷰
#[derive(Debug)]
pub struct DirectoryMemory<S> {
    store: S,
}

impl<S: SettingsStore> DirectoryMemory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 저장된 디렉토리. 없거나 빈 문자열이면 None
    pub fn get(&self) -> Option<PathBuf> {
        self.store
            .get(LAST_OPEN_DIRECTORY_KEY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// 디렉토리 저장. 저장소 쓰기 실패는 경고만 남긴다
    pub fn set(&mut self, dir: &Path) {
        let value = dir.to_string_lossy();
        match self.store.set(LAST_OPEN_DIRECTORY_KEY, &value) {
            Ok(()) => log::debug!("Remembered last open directory: {}", value),
            Err(e) => log::warn!("Failed to remember last open directory: {}", e),
        }
    }

    /// 선택된 첫 파일의 상위 디렉토리를 저장
    ///
    /// 상위 디렉토리를 구할 수 없는 경로(루트 등)면 아무것도 하지 않는다.
    /// 저장한 디렉토리를 반환한다.
    pub fn remember_parent_of(&mut self, first_path: &Path) -> Option<PathBuf> {
        let absolute = absolutize(first_path);
        let parent = absolute.parent()?.to_path_buf();
        self.set(&parent);
        Some(parent)
    }

    /// 파일 선택기의 시작 디렉토리
    ///
    /// 저장된 디렉토리를 현재 작업 디렉토리 기준 절대 경로로 바꿔 반환하고,
    /// 저장된 값이 없으면 현재 작업 디렉토리를 반환한다.
    pub fn initial_directory(&self) -> PathBuf {
        match self.get() {
            Some(dir) => absolutize(&dir),
            None => current_dir(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::settings::MemorySettingsStore;

    #[test]
    fn test_get_unset() {
        let memory = DirectoryMemory::new(MemorySettingsStore::new());
        assert_eq!(memory.get(), None);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let mut store = MemorySettingsStore::new();
        store.set(LAST_OPEN_DIRECTORY_KEY, "").unwrap();

        let memory = DirectoryMemory::new(store);
        assert_eq!(memory.get(), None);
    }

    #[test]
    fn test_remember_parent_of_first_path() {
        let mut memory = DirectoryMemory::new(MemorySettingsStore::new());

        let stored = memory.remember_parent_of(Path::new("/a/b/img1.cr2"));

        assert_eq!(stored, Some(PathBuf::from("/a/b")));
        assert_eq!(memory.get(), Some(PathBuf::from("/a/b")));
        assert_eq!(
            memory.store().get(LAST_OPEN_DIRECTORY_KEY),
            Some("/a/b".to_string())
        );
    }

    #[test]
    fn test_remember_file_in_root() {
        let mut memory = DirectoryMemory::new(MemorySettingsStore::new());
        memory.remember_parent_of(Path::new("/img.cr2"));
        assert_eq!(memory.get(), Some(PathBuf::from("/")));
    }

    #[test]
    fn test_remember_root_is_noop() {
        let mut memory = DirectoryMemory::new(MemorySettingsStore::new());
        assert_eq!(memory.remember_parent_of(Path::new("/")), None);
        assert_eq!(memory.get(), None);
    }

    #[test]
    fn test_initial_directory_defaults_to_cwd() {
        let memory = DirectoryMemory::new(MemorySettingsStore::new());
        assert_eq!(memory.initial_directory(), current_dir());
    }

    #[test]
    fn test_initial_directory_absolute() {
        let mut memory = DirectoryMemory::new(MemorySettingsStore::new());
        memory.set(Path::new("/photos"));
        assert_eq!(memory.initial_directory(), PathBuf::from("/photos"));
    }

    #[test]
    fn test_initial_directory_relative_is_resolved() {
        let mut memory = DirectoryMemory::new(MemorySettingsStore::new());
        memory.set(Path::new("shots"));
        assert_eq!(memory.initial_directory(), current_dir().join("shots"));
    }
}
