//! Engine configuration schema.
//!
//! These are settings about the resolution engine itself, not the settings
//! it resolves: the resource namespace, the help-entry prefix and the
//! alignment column of the text views.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default resource namespace.
pub const DEFAULT_NAMESPACE: &str = "rofi";

/// Default name prefix selecting entries for the help strings.
pub const DEFAULT_HELP_PREFIX: &str = "kb";

/// Default alignment column for dump and listing output.
pub const DEFAULT_NAME_COLUMN: usize = 30;

/// Largest accepted alignment column.
pub const MAX_NAME_COLUMN: usize = 120;

/// Configuration of the resolution engine.
///
/// # Examples
///
/// ```
/// use optlayer::config::EngineConfig;
///
/// let config: EngineConfig = serde_yaml::from_str("namespace: demo\n").unwrap();
/// assert_eq!(config.namespace, "demo");
/// assert_eq!(config.help_prefix, "kb");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Resource key prefix: a setting `lines` is looked up as `namespace.lines`.
    pub namespace: String,

    /// Two-character name prefix of the settings listed by the help strings.
    pub help_prefix: String,

    /// Column the value is aligned to in dump and listing output.
    pub name_column: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            help_prefix: DEFAULT_HELP_PREFIX.to_string(),
            name_column: DEFAULT_NAME_COLUMN,
        }
    }
}

impl EngineConfig {
    /// Checks the configuration for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::config::EngineConfig;
    ///
    /// assert!(EngineConfig::default().validate().is_ok());
    ///
    /// let bad = EngineConfig { namespace: "a.b".to_string(), ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(Error::Validation {
                field: "namespace".into(),
                message: "must not be empty".into(),
            });
        }
        if let Some(c) = self
            .namespace
            .chars()
            .find(|c| matches!(c, '.' | ':' | '*') || c.is_whitespace())
        {
            return Err(Error::Validation {
                field: "namespace".into(),
                message: format!("must not contain {c:?}"),
            });
        }

        if self.help_prefix.chars().count() != 2 {
            return Err(Error::Validation {
                field: "help_prefix".into(),
                message: format!(
                    "must be exactly two characters, got '{}'",
                    self.help_prefix
                ),
            });
        }

        if self.name_column == 0 || self.name_column > MAX_NAME_COLUMN {
            return Err(Error::Validation {
                field: "name_column".into(),
                message: format!("must be between 1 and {MAX_NAME_COLUMN}"),
            });
        }

        Ok(())
    }
}
