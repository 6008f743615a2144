//! Interfaces to the external sources settings are read from.
//!
//! The resolvers only need narrow views of each source: a key to text
//! lookup for resource stores, a flag search over the argument vector, and
//! one structured property at a time for theme files. This module defines
//! those views as traits, plus small implementations good enough to drive
//! the engine from files and tests.

mod args;
mod escape;
mod property;
mod resource;

pub use args::ArgVector;
pub use escape::parse_char;
pub use property::{Property, PropertyKind, PropertySet, PropertyValue};
pub use resource::ResourceDatabase;

/// Key to text lookup over a resource store.
///
/// Keys are fully qualified, e.g. `rofi.lines`.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceLookup {
    /// The raw text stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Search over the command-line argument vector.
///
/// Keys include the leading dash, e.g. `-lines` or `-no-sort`.
#[cfg_attr(test, mockall::automock)]
pub trait ArgumentSource {
    /// Whether the flag is present.
    fn find_flag(&self, key: &str) -> bool;

    /// The unsigned number following `key`.
    fn find_uint(&self, key: &str) -> Option<u32>;

    /// The signed number following `key`.
    fn find_int(&self, key: &str) -> Option<i32>;

    /// The text following `key`.
    fn find_str(&self, key: &str) -> Option<String>;

    /// The character following `key`.
    fn find_char(&self, key: &str) -> Option<char>;
}
