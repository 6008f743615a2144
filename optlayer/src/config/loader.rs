//! Engine configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::EngineConfig;
use crate::error::{Error, Result};

/// Directory under the home directory holding optlayer's own files.
const CONFIG_DIR: &str = ".config";

/// Loads engine configuration and locates default files.
///
/// # Examples
///
/// ```no_run
/// use optlayer::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("engine.yaml")).unwrap();
/// println!("namespace: {}", config.namespace);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML engine configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<EngineConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Load the user's engine configuration if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<EngineConfig>> {
        let Some(path) = Self::user_config_path() else {
            return Ok(None);
        };

        if !path.exists() {
            return Ok(None);
        }

        log::debug!("loading engine configuration from {}", path.display());
        Self::load_file(&path).map(Some)
    }

    /// Path of the user's engine configuration, `~/.config/optlayer/engine.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(CONFIG_DIR).join("optlayer").join("engine.yaml"))
    }

    /// Default resource file for a namespace, `~/.config/<namespace>/config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::config::ConfigLoader;
    ///
    /// if let Some(path) = ConfigLoader::default_resource_file("rofi") {
    ///     assert!(path.ends_with("rofi/config"));
    /// }
    /// ```
    #[must_use]
    pub fn default_resource_file(namespace: &str) -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(CONFIG_DIR).join(namespace).join("config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/engine.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("engine.yaml");
        fs::write(&config_path, "namespace: launcher\nhelp_prefix: ks\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.namespace, "launcher");
        assert_eq!(config.help_prefix, "ks");
        assert_eq!(config.name_column, 30);
    }

    #[test]
    fn test_default_resource_file_uses_namespace() {
        if let Some(path) = ConfigLoader::default_resource_file("launcher") {
            assert!(path.ends_with(Path::new("launcher").join("config")));
        }
    }
}
