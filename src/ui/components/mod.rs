// UI Components
pub mod command_bar;
pub mod load_dialog;
pub mod path_prompt;

pub use command_bar::CommandBar;
pub use load_dialog::LoadDialogView;
pub use path_prompt::PathPromptView;
