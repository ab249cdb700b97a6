//! 로드 옵션 다이얼로그
//!
//! 파일 목록, 처리 옵션, 마지막 디렉토리 기억을 소유하고
//! `Created → Presented → {Cancelled, Finalized}` 상태 전이를 관리한다.
//! 화면 표시와 입력 전달은 별도의 프레젠테이션 어댑터가 맡는다.

use crate::core::EventQueue;
use crate::models::{FileSelectionList, LoadOptions, OptionsState};
use crate::system::{DirectoryMemory, FilePicker, RawImageFilter, SettingsStore};
use std::collections::HashSet;
use std::path::PathBuf;

mod path_prompt;
mod view_state;

pub use path_prompt::{PromptOutcome, PromptState};
pub use view_state::ListViewState;

/// 다이얼로그 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// 생성 직후 (첫 표시 전)
    Created,
    /// 표시됨, 사용자 입력 대기
    Presented,
    /// 취소됨 (종료 상태)
    Cancelled,
    /// 확정됨 (종료 상태)
    Finalized,
}

impl DialogState {
    /// 종료 상태 여부
    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogState::Cancelled | DialogState::Finalized)
    }
}

/// 이벤트 큐에 올려 나중에 실행하는 다이얼로그 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTask {
    /// 빈 목록으로 표시된 다이얼로그 자동 취소
    AutoCancel,
}

/// 로드 옵션 다이얼로그 상태
pub struct LoadOptionsDialog<S> {
    /// 선택된 파일 목록
    files: FileSelectionList,
    /// 처리 옵션
    options: OptionsState,
    /// 마지막으로 연 디렉토리
    directory_memory: DirectoryMemory<S>,
    /// 파일 선택기 필터
    filter: RawImageFilter,
    /// 현재 상태
    state: DialogState,
}

impl<S: SettingsStore> LoadOptionsDialog<S> {
    /// 다이얼로그 생성
    ///
    /// 첫 표시 전에 파일 선택기를 한 번 호출해 목록을 채운다.
    pub fn new(store: S, picker: &mut dyn FilePicker) -> Self {
        let mut dialog = Self::without_files(store);
        dialog.add_files(picker);
        dialog
    }

    /// 파일 선택 없이 빈 목록으로 생성
    pub fn without_files(store: S) -> Self {
        Self {
            files: FileSelectionList::new(),
            options: OptionsState::default(),
            directory_memory: DirectoryMemory::new(store),
            filter: RawImageFilter::default(),
            state: DialogState::Created,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn files(&self) -> &FileSelectionList {
        &self.files
    }

    pub fn options(&self) -> &OptionsState {
        &self.options
    }

    pub fn filter(&self) -> &RawImageFilter {
        &self.filter
    }

    pub fn directory_memory(&self) -> &DirectoryMemory<S> {
        &self.directory_memory
    }

    /// 다음 선택기 호출의 시작 디렉토리
    pub fn initial_directory(&self) -> PathBuf {
        self.directory_memory.initial_directory()
    }

    // === 파일 목록 ===

    /// 파일 선택기로 파일 추가
    ///
    /// 한 개 이상 선택되면 첫 파일의 상위 디렉토리를 기억한 뒤
    /// 선택 순서대로 목록 끝에 붙인다. 추가된 파일 수를 반환한다.
    pub fn add_files(&mut self, picker: &mut dyn FilePicker) -> usize {
        if self.ignore_if_terminal("add files") {
            return 0;
        }

        let initial_dir = self.directory_memory.initial_directory();
        let paths = picker.choose(&initial_dir, &self.filter);
        let Some(first) = paths.first() else {
            log::debug!("File picker returned no files");
            return 0;
        };

        self.directory_memory.remember_parent_of(first);
        let count = paths.len();
        self.files.add(paths);
        log::info!("Added {} file(s), {} total", count, self.files.count());
        count
    }

    /// 선택된 엔트리 제거. 제거된 수를 반환한다
    pub fn remove_files(&mut self, selected: &HashSet<usize>) -> usize {
        if self.ignore_if_terminal("remove files") {
            return 0;
        }
        let removed = self.files.remove(selected);
        if removed > 0 {
            log::info!("Removed {} file(s), {} left", removed, self.files.count());
        }
        removed
    }

    // === 옵션 ===

    pub fn toggle_align(&mut self) {
        if !self.ignore_if_terminal("toggle align") {
            self.options.toggle_align();
        }
    }

    pub fn toggle_crop(&mut self) {
        if !self.ignore_if_terminal("toggle crop") {
            self.options.toggle_crop();
        }
    }

    pub fn set_align(&mut self, align: bool) {
        if !self.ignore_if_terminal("set align") {
            self.options.set_align(align);
        }
    }

    pub fn set_crop(&mut self, crop: bool) {
        if !self.ignore_if_terminal("set crop") {
            self.options.set_crop(crop);
        }
    }

    // === 표시/확정/취소 ===

    /// 다이얼로그가 처음 화면에 표시됨
    ///
    /// 최초 1회만 `Presented`로 전이한다. 목록이 비어 있으면 표시 처리가
    /// 끝난 뒤 실행되도록 자동 취소 작업을 큐에 올린다.
    pub fn on_shown(&mut self, queue: &mut EventQueue<DialogTask>) {
        if self.state != DialogState::Created {
            return;
        }
        self.state = DialogState::Presented;
        log::debug!("Dialog presented with {} file(s)", self.files.count());

        if self.files.is_empty() {
            log::info!("No files selected; scheduling cancel");
            queue.post(DialogTask::AutoCancel);
        }
    }

    /// 큐에서 꺼낸 작업 실행
    pub fn run_task(&mut self, task: DialogTask) {
        match task {
            DialogTask::AutoCancel => self.cancel(),
        }
    }

    /// 확정: 현재 옵션과 파일 목록으로 결과 생성
    ///
    /// `Presented` 상태이고 목록이 비어 있지 않을 때만 결과를 만든다.
    pub fn confirm(&mut self) -> Option<LoadOptions> {
        if self.state != DialogState::Presented {
            log::warn!("Confirm ignored in state {:?}", self.state);
            return None;
        }
        if self.files.is_empty() {
            log::warn!("Confirm ignored: file list is empty");
            return None;
        }

        let result = LoadOptions::new(self.options, self.files.path_strings());
        self.state = DialogState::Finalized;
        log::info!(
            "Load options finalized: {} file(s), align={}, crop={}",
            result.file_names().len(),
            result.align(),
            result.crop()
        );
        Some(result)
    }

    /// 취소
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = DialogState::Cancelled;
        log::info!("Dialog cancelled");
    }

    /// 설정 저장소 반환 (다이얼로그 종료 후)
    pub fn into_store(self) -> S {
        self.directory_memory.into_store()
    }

    fn ignore_if_terminal(&self, operation: &str) -> bool {
        if self.state.is_terminal() {
            log::debug!("Ignoring {} in state {:?}", operation, self.state);
            true
        } else {
            false
        }
    }
}
