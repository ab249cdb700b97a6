// Utilities
pub mod error;
pub mod path_display;
