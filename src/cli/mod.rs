//! Command-line interface module
//!
//! This module handles all CLI argument parsing and command definitions.

pub mod args;
pub mod catalog;
pub mod compose;
pub mod init;
pub mod suggest;

pub use args::*;
pub use catalog::{handle_categories_command, handle_tones_command};
pub use compose::handle_compose_command;
pub use init::handle_init_command;
pub use suggest::handle_suggest_command;
