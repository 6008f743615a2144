//! Environment variable overrides for the engine configuration.

use std::env;

use crate::config::schema::EngineConfig;
use crate::error::{Error, Result};

/// Overrides `namespace`.
pub const NAMESPACE_ENV: &str = "OPTLAYER_NAMESPACE";
/// Overrides `help_prefix`.
pub const HELP_PREFIX_ENV: &str = "OPTLAYER_HELP_PREFIX";
/// Overrides `name_column`.
pub const NAME_COLUMN_ENV: &str = "OPTLAYER_NAME_COLUMN";

/// Handles environment variable overrides for the engine configuration.
///
/// # Examples
///
/// ```no_run
/// use optlayer::config::{EngineConfig, EnvironmentConfig};
///
/// let mut config = EngineConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `OPTLAYER_*` environment overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPTLAYER_NAME_COLUMN` is not a number.
    pub fn apply_overrides(config: &mut EngineConfig) -> Result<()> {
        if let Ok(namespace) = env::var(NAMESPACE_ENV) {
            config.namespace = namespace;
        }

        if let Ok(prefix) = env::var(HELP_PREFIX_ENV) {
            config.help_prefix = prefix;
        }

        if let Ok(column) = env::var(NAME_COLUMN_ENV) {
            config.name_column = column.trim().parse().map_err(|_| Error::Validation {
                field: NAME_COLUMN_ENV.into(),
                message: format!("Must be a positive integer, got '{column}'"),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::env;

    /// RAII guard for setting and restoring environment variables.
    pub(crate) struct EnvGuard {
        key: &'static str,
        old_value: Option<String>,
    }

    impl EnvGuard {
        pub(crate) fn new(key: &'static str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self { key, old_value }
        }

        pub(crate) fn remove(key: &'static str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self { key, old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}
