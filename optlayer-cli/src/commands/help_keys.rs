//! Help-keys command implementation.
//!
//! Prints one markup line per setting whose name starts with the help
//! prefix (keybindings by default), the way a launcher shows its key
//! help. The number of lines goes to stderr.

use crate::error::CliError;
use crate::utils::{build_registry, GlobalOptions, Overrides};
use clap::Args;
use std::io::{self, Write};

/// Print help lines for keybinding-style settings.
#[derive(Args)]
pub struct HelpKeysCommand {
    /// Name prefix to select [default: the engine's help prefix]
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub overrides: Overrides,
}

impl HelpKeysCommand {
    /// Execute the help-keys command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = build_registry(global, &self.overrides.options)?;
        let prefix = self
            .prefix
            .unwrap_or_else(|| registry.config().help_prefix.clone());

        let help = registry.help_strings(&prefix);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in &help {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        if !global.quiet {
            eprintln!("{} entries", help.len());
        }

        registry.teardown();
        Ok(())
    }
}
