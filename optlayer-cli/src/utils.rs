//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across commands: global options,
//! engine configuration loading and the resolution pass that turns every
//! configured source into a populated registry.

use crate::error::CliError;
use crate::keybindings::register_keybindings;
use clap::Args;
use optlayer::config::ConfigLoader;
use optlayer::output::display_char;
use optlayer::source::{ArgVector, PropertySet, ResourceDatabase};
use optlayer::{EngineConfig, Registry, Value};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit engine configuration file.
    pub engine_config: Option<PathBuf>,

    /// Resource database file.
    pub resources: Option<PathBuf>,

    /// Resource file; falls back to the namespace default.
    pub config: Option<PathBuf>,

    /// Theme property file.
    pub theme: Option<PathBuf>,
}

/// Setting overrides given after `--`, in the application's own flag
/// syntax (`-lines 10`, `-no-sort`).
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Setting flags, e.g. `-- -lines 10 -no-sort`
    #[arg(last = true, value_name = "OPTIONS")]
    pub options: Vec<String>,
}

/// Load the engine configuration.
///
/// Configuration is layered with precedence:
/// 1. Environment variables (highest priority)
/// 2. `--engine-config` or the user's engine file
/// 3. Built-in defaults (lowest priority)
pub fn load_engine_config(global: &GlobalOptions) -> Result<EngineConfig, CliError> {
    EngineConfig::load(global.engine_config.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Build a registry and apply every source in precedence order.
///
/// Resource database, resource file, theme properties, then `options`.
/// The resource database must exist when given; the resource file is
/// skipped silently when missing.
pub fn build_registry(global: &GlobalOptions, options: &[String]) -> Result<Registry, CliError> {
    let config = load_engine_config(global)?;
    let resource_file = global
        .config
        .clone()
        .or_else(|| ConfigLoader::default_resource_file(&config.namespace));

    let mut registry = Registry::new(config)?;
    register_keybindings(&mut registry)?;

    if let Some(path) = &global.resources {
        log::debug!("reading resource database {}", path.display());
        let db = ResourceDatabase::from_file(path)?;
        registry.resolve_from_resource_db(&db);
    }

    if let Some(path) = &resource_file {
        log::debug!("reading resource file {}", path.display());
        registry.resolve_from_resource_file(path);
    }

    if let Some(path) = &global.theme {
        log::debug!("reading theme {}", path.display());
        let properties = PropertySet::load_file(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        for property in &properties {
            registry.resolve_from_property(property);
        }
    }

    registry.resolve_from_cmdline(&ArgVector::new(options.iter().cloned()));
    Ok(registry)
}

/// Render a value the way `get` prints it.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Str(Some(s)) => s.clone(),
        Value::Str(None) => "(unset)".to_string(),
        Value::Unsigned(n) => n.to_string(),
        Value::Signed(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Char(c) => display_char(*c),
    }
}
