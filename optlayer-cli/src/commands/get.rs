//! Get command implementation.

use crate::error::CliError;
use crate::utils::{build_registry, format_value, GlobalOptions, Overrides};
use clap::Args;

/// Show the value and source of one setting.
#[derive(Args)]
pub struct GetCommand {
    /// Setting name, e.g. `lines`
    pub name: String,

    #[command(flatten)]
    pub overrides: Overrides,
}

impl GetCommand {
    /// Execute the get command.
    ///
    /// Prints `value (source)`; an unknown name is a semantic failure.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut registry = build_registry(global, &self.overrides.options)?;

        let Some(descriptor) = registry.find(&self.name) else {
            return Err(CliError::SemanticFailure(format!(
                "Unknown setting: {}",
                self.name
            )));
        };
        let value = registry
            .slot_value(descriptor.slot())
            .map(format_value)
            .unwrap_or_default();
        println!("{value} ({})", descriptor.source());

        registry.teardown();
        Ok(())
    }
}
