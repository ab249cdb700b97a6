// Core
pub mod actions;
pub mod event_queue;

pub use actions::{command_bar_entries, find_action, Action};
pub use event_queue::EventQueue;
