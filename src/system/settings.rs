//! 설정 저장소
//!
//! 다이얼로그가 사용하는 키-값 저장소 포트와 구현체.
//! 파일 기반 구현은 버전이 붙은 TOML 문서로 저장한다.

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로 override 환경변수
pub const SETTINGS_FILE_ENV: &str = "HDRMERGE_SETTINGS_FILE";

/// 문자열 키-값 저장소
pub trait SettingsStore {
    /// 저장된 값 조회. 없으면 None
    fn get(&self, key: &str) -> Option<String>;

    /// 값 저장 (기존 값 덮어쓰기)
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// 메모리 저장소 (테스트, 설정 파일 경로가 없을 때)
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    version: u32,
    values: BTreeMap<String, String>,
}

/// TOML 파일 저장소
///
/// 열 때 한 번 읽고, `set` 할 때마다 파일 전체를 다시 쓴다.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlSettingsStore {
    const SETTINGS_VERSION: u32 = 1;

    /// 설정 파일 열기. 파일이 없거나 읽을 수 없는 형식이면 빈 저장소
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(data) => Self::decode(&data).unwrap_or_else(|| {
                log::warn!("Ignoring unreadable settings file: {}", path.display());
                BTreeMap::new()
            }),
            Err(_) => {
                log::debug!("No settings file at {}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self) -> Result<String> {
        let payload = PersistedSettings {
            version: Self::SETTINGS_VERSION,
            values: self.values.clone(),
        };
        Ok(toml::to_string_pretty(&payload)?)
    }

    fn decode(data: &str) -> Option<BTreeMap<String, String>> {
        let parsed: PersistedSettings = toml::from_str(data).ok()?;
        if parsed.version != Self::SETTINGS_VERSION {
            return None;
        }
        Some(parsed.values)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.encode()?)?;
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// 설정 파일 경로 결정
///
/// 환경변수 override가 우선이고, 없으면 `~/.hdrmerge/settings.toml`
pub fn settings_file_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var(SETTINGS_FILE_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir().map(|home| home.join(".hdrmerge").join("settings.toml"))
}

/// 기본 설정 저장소. 경로를 정할 수 없으면 메모리 저장소로 대체
pub fn open_default_store() -> Box<dyn SettingsStore> {
    match settings_file_path() {
        Some(path) => {
            log::info!("Using settings file: {}", path.display());
            Box::new(TomlSettingsStore::open(path))
        }
        None => {
            log::warn!("No home directory; settings will not be persisted");
            Box::new(MemorySettingsStore::new())
        }
    }
}
