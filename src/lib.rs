//! hdrmerge-loader - HDR 병합 파이프라인의 로드 옵션 단계
//!
//! Raw 이미지 파일 목록과 처리 옵션(정렬/크롭)을 수집해
//! 병합 파이프라인에 넘길 [`LoadOptions`]를 만든다.
//!
//! # 모듈
//! - `app` - 로드 옵션 다이얼로그 상태 머신
//! - `core` - 이벤트 큐, 키 바인딩
//! - `models` - 파일 목록, 옵션, 결과 값
//! - `system` - 설정 저장소, 디렉토리 기억, 파일 선택기
//! - `ui` - 터미널 위젯
//! - `utils` - 에러 타입, 경로 표시

pub mod app;
pub mod core;
pub mod models;
pub mod system;
pub mod ui;
pub mod utils;

pub use app::{DialogState, DialogTask, LoadOptionsDialog};
pub use models::{FileEntry, FileSelectionList, LoadOptions, OptionsState};
pub use system::{FilePicker, RawImageFilter, SettingsStore};
pub use utils::error::{LoaderError, Result};
