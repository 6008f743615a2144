//! Configuration of the resolution engine.
//!
//! The engine's own settings are layered the same way the settings it
//! resolves are, lowest to highest:
//!
//! 1. Built-in defaults
//! 2. User file (`~/.config/optlayer/engine.yaml`) or an explicit file
//! 3. Environment variables (`OPTLAYER_*`)
//!
//! The result is validated before use.
//!
//! # Examples
//!
//! ```no_run
//! use optlayer::config::EngineConfig;
//!
//! let config = EngineConfig::load(None).unwrap();
//! println!("resources are read from {}.*", config.namespace);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

use std::path::Path;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::EngineConfig;

use crate::error::Result;

impl EngineConfig {
    /// Build the effective engine configuration.
    ///
    /// With `explicit` set, that file replaces the user file and must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// override is malformed, or the merged configuration is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ConfigLoader::load_user_config()?.unwrap_or_default(),
        };

        EnvironmentConfig::apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }
}
