// System Layer
pub mod directory_memory;
pub mod file_picker;
pub mod settings;

pub use directory_memory::{DirectoryMemory, LAST_OPEN_DIRECTORY_KEY};
pub use file_picker::{resolve_selection, FilePicker, RawImageFilter, RAW_IMAGE_EXTENSIONS};
pub use settings::{
    open_default_store, settings_file_path, MemorySettingsStore, SettingsStore,
    TomlSettingsStore, SETTINGS_FILE_ENV,
};
