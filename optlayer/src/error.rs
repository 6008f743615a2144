//! Error types for the optlayer library.
//!
//! Resolution itself never fails: a missing key, an unreadable resource file
//! or a mistyped property all leave the setting untouched. The errors here
//! cover the edges around it, such as loading collaborator data, registering
//! against a bad slot and writing introspection output.

use std::path::PathBuf;

use thiserror::Error;

use crate::option::OptionType;

/// Result type alias for operations that may fail with an optlayer error.
///
/// # Examples
///
/// ```
/// use optlayer::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(15)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the optlayer library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A registration referenced a slot that was never allocated.
    #[error("unknown slot {slot}")]
    UnknownSlot {
        /// The slot index.
        slot: usize,
    },

    /// A registration bound a setting to a slot holding another type.
    #[error("option '{name}' is declared as {expected} but its slot holds a {found}")]
    SlotTypeMismatch {
        /// The option being registered.
        name: String,
        /// The declared option type.
        expected: OptionType,
        /// The type of the value currently in the slot.
        found: OptionType,
    },

    /// A property document contained a value no property kind can carry.
    #[error("unsupported property '{name}': {reason}")]
    UnsupportedProperty {
        /// The property name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}
