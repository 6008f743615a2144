//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DumpCommand, GetCommand, HelpKeysCommand, ListCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect layered settings and where each value came from.
#[derive(Parser)]
#[command(name = "optlayer")]
#[command(
    version,
    about = "Inspect layered settings and where each value came from",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Engine configuration file (namespace, help prefix, column)
    #[arg(long, value_name = "PATH", global = true, env = "OPTLAYER_ENGINE_CONFIG")]
    pub engine_config: Option<PathBuf>,

    /// Resource database file, applied first; must exist
    #[arg(long, value_name = "PATH", global = true)]
    pub resources: Option<PathBuf>,

    /// Resource file applied after the database [default: ~/.config/<namespace>/config]
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// YAML theme properties, applied after the resource file
    #[arg(long, value_name = "PATH", global = true)]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every setting as a resource file
    Dump(DumpCommand),

    /// List every setting with its type, value and source
    List(ListCommand),

    /// Print help lines for keybinding-style settings
    HelpKeys(HelpKeysCommand),

    /// Show the value and source of one setting
    Get(GetCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
