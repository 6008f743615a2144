//! List command implementation.
//!
//! This module implements the `list` command, which displays every setting
//! with its flag syntax, type, description, value and source, as text or
//! JSON.

use crate::error::CliError;
use crate::utils::{build_registry, GlobalOptions, Overrides};
use clap::{Args, ValueEnum};
use optlayer::ListStyle;
use std::io::{self, Write};

/// List every setting with its type, value and source.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "OPTLAYER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Never use terminal styling
    #[arg(long)]
    pub plain: bool,

    #[command(flatten)]
    pub overrides: Overrides,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flag listing (human-readable)
    Text,
    /// JSON array of settings
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = build_registry(global, &self.overrides.options)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Text => {
                let style = if self.plain {
                    ListStyle::Plain
                } else {
                    ListStyle::detect()
                };
                registry.list(&mut out, style)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &registry.snapshot())
                    .map_err(optlayer::Error::from)?;
                writeln!(out)?;
            }
        }
        out.flush()?;

        registry.teardown();
        Ok(())
    }
}
