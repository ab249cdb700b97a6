//! 로드 옵션 모델
//!
//! 다이얼로그가 편집하는 옵션 상태와, 확정 시 한 번 만들어지는 결과 값

use serde::Serialize;

/// 편집 중인 처리 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsState {
    /// 원본 이미지 정렬
    align: bool,
    /// 결과 이미지를 최적 크기로 크롭
    crop: bool,
}

impl Default for OptionsState {
    fn default() -> Self {
        Self {
            align: true,
            crop: true,
        }
    }
}

impl OptionsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(&self) -> bool {
        self.align
    }

    pub fn crop(&self) -> bool {
        self.crop
    }

    pub fn toggle_align(&mut self) {
        self.align = !self.align;
    }

    pub fn toggle_crop(&mut self) {
        self.crop = !self.crop;
    }

    pub fn set_align(&mut self, align: bool) {
        self.align = align;
    }

    pub fn set_crop(&mut self, crop: bool) {
        self.crop = crop;
    }
}

/// 병합 파이프라인에 넘기는 확정된 로드 옵션
///
/// 다이얼로그 확정 시에만 생성되며 이후 변경할 수 없다.
/// `file_names`는 항상 비어 있지 않다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadOptions {
    align: bool,
    crop: bool,
    #[serde(rename = "fileNames")]
    file_names: Vec<String>,
}

impl LoadOptions {
    pub(crate) fn new(options: OptionsState, file_names: Vec<String>) -> Self {
        debug_assert!(!file_names.is_empty());
        Self {
            align: options.align,
            crop: options.crop,
            file_names,
        }
    }

    pub fn align(&self) -> bool {
        self.align
    }

    pub fn crop(&self) -> bool {
        self.crop
    }

    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    /// 파이프라인 전달용 TOML 문자열
    pub fn to_toml(&self) -> crate::utils::error::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_all_enabled() {
        let options = OptionsState::new();
        assert!(options.align());
        assert!(options.crop());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut options = OptionsState::new();

        options.toggle_align();
        assert!(!options.align());
        assert!(options.crop());

        options.toggle_crop();
        options.toggle_align();
        assert!(options.align());
        assert!(!options.crop());
    }

    #[test]
    fn test_setters() {
        let mut options = OptionsState::new();
        options.set_align(false);
        options.set_crop(false);
        options.set_crop(true);

        assert!(!options.align());
        assert!(options.crop());
    }

    #[test]
    fn test_load_options_snapshot() {
        let mut state = OptionsState::new();
        state.toggle_crop();

        let result = LoadOptions::new(state, vec!["/a/1.cr2".to_string()]);
        state.toggle_crop();

        assert!(result.align());
        assert!(!result.crop());
        assert_eq!(result.file_names(), ["/a/1.cr2".to_string()]);
    }

    #[test]
    fn test_load_options_toml() {
        let result = LoadOptions::new(
            OptionsState::new(),
            vec!["/a/b/img1.cr2".to_string(), "/a/b/img2.cr2".to_string()],
        );

        let text = result.to_toml().unwrap();

        assert!(text.contains("align = true"));
        assert!(text.contains("crop = true"));
        assert!(text.contains("fileNames"));
        assert!(text.contains("/a/b/img2.cr2"));
    }
}
