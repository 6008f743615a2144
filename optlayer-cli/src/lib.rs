//! Library exports for optlayer-cli.
//!
//! This module exports the CLI structure and commands so the binary and
//! the tests share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod keybindings;
pub mod utils;

pub use cli::Cli;
