//! Typed settings, their descriptors and the registry holding them.
//!
//! A [`Registry`] combines a fixed builtin table with settings registered
//! at runtime. Each [`Descriptor`] binds a name to a value slot and tracks
//! the [`ConfigSource`] that last wrote it; aliases are descriptors sharing
//! a slot.

mod builtin;
mod descriptor;
mod parse;
mod registry;
mod types;

#[cfg(test)]
mod proptests;

pub use builtin::{BuiltinOption, Init, BUILTIN_OPTIONS};
pub use descriptor::{Descriptor, OptionId, SlotId};
pub use parse::{parse_signed, parse_unsigned, saturate_i32, saturate_u32};
pub use registry::Registry;
pub use types::{ConfigSource, OptionType, Value};
