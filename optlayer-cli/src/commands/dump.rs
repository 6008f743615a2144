//! Dump command implementation.
//!
//! This module implements the `dump` command, which prints every setting
//! in resource-file syntax. Settings still at their default are commented
//! out, so the output can be saved as a starting configuration.

use crate::error::CliError;
use crate::utils::{build_registry, GlobalOptions, Overrides};
use clap::Args;
use std::io::{self, Write};

/// Print every setting as a resource file.
#[derive(Args)]
pub struct DumpCommand {
    #[command(flatten)]
    pub overrides: Overrides,
}

impl DumpCommand {
    /// Execute the dump command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = build_registry(global, &self.overrides.options)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        registry.dump(&mut out)?;
        out.flush()?;

        registry.teardown();
        Ok(())
    }
}
