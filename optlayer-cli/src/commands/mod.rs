//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `dump`: Print every setting as a resource file
//! - `list`: List every setting with its type, value and source
//! - `help_keys`: Print help lines for keybinding-style settings
//! - `get`: Show the value and source of one setting
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod dump;
pub mod get;
pub mod help_keys;
pub mod list;

pub use completions::CompletionsCommand;
pub use dump::DumpCommand;
pub use get::GetCommand;
pub use help_keys::HelpKeysCommand;
pub use list::ListCommand;
