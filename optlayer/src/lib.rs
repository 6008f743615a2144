#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # optlayer
//!
//! A layered settings engine.
//!
//! Settings are typed descriptors in a [`Registry`]: a builtin table plus
//! entries registered at runtime. Values arrive from several sources, each
//! applied by its own resolver, and every setting remembers which source
//! set it last. Later sources override earlier ones:
//!
//! 1. builtin defaults
//! 2. a live resource store ([`Registry::resolve_from_resource_db`])
//! 3. a resource file ([`Registry::resolve_from_resource_file`])
//! 4. theme properties ([`Registry::resolve_from_property`])
//! 5. the command line ([`Registry::resolve_from_cmdline`])
//!
//! ## Core Types
//!
//! - [`Registry`], [`Descriptor`] and [`SlotId`]: settings and their storage
//! - [`ConfigSource`], [`OptionType`] and [`Value`]: provenance and values
//! - [`source`]: the interfaces sources are read through
//! - [`EngineConfig`]: namespace and layout of the engine itself
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use optlayer::source::{ArgVector, ResourceDatabase};
//! use optlayer::{ConfigSource, EngineConfig, Registry};
//!
//! let mut registry = Registry::new(EngineConfig::default()).unwrap();
//!
//! registry.resolve_from_resource_db(&ResourceDatabase::parse("rofi.lines: 8\nrofi.sort: true\n"));
//! registry.resolve_from_cmdline(&ArgVector::new(["-lines", "12"]));
//!
//! assert_eq!(registry.unsigned("lines"), Some(12));
//! assert_eq!(registry.find("lines").unwrap().source(), ConfigSource::CommandLine);
//! assert_eq!(registry.find("sort").unwrap().source(), ConfigSource::ResourceDb);
//!
//! registry.teardown();
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod option;
pub mod output;
mod resolve;
pub mod source;

// Re-export key types at crate root for convenience
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use option::{ConfigSource, Descriptor, OptionId, OptionType, Registry, SlotId, Value};
pub use output::{ListStyle, OptionSnapshot};
pub use source::{ArgumentSource, Property, PropertySet, ResourceLookup};
