// Data Models
pub mod file_entry;
pub mod file_list;
pub mod load_options;

pub use file_entry::FileEntry;
pub use file_list::FileSelectionList;
pub use load_options::{LoadOptions, OptionsState};
