//! Option descriptors and the handles that address them.

use std::borrow::Cow;

use super::types::{ConfigSource, OptionType, Value};

/// Handle to a value slot inside a [`Registry`](crate::Registry).
///
/// Two descriptors holding the same `SlotId` are aliases of one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Position of the slot in the registry's slot arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handle to a descriptor: either a row of the builtin table or an extra
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionId {
    /// Index into the builtin table.
    Builtin(usize),
    /// Index into the runtime registrations.
    Extra(usize),
}

/// A named, typed binding between a configuration key and a value slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub(crate) kind: OptionType,
    pub(crate) name: Cow<'static, str>,
    pub(crate) slot: SlotId,
    pub(crate) comment: Cow<'static, str>,
    pub(crate) source: ConfigSource,
}

impl Descriptor {
    pub(crate) fn new(
        kind: OptionType,
        name: Cow<'static, str>,
        slot: SlotId,
        comment: Cow<'static, str>,
    ) -> Self {
        Self {
            kind,
            name,
            slot,
            comment,
            source: ConfigSource::Default,
        }
    }

    /// The setting's type.
    #[must_use]
    pub const fn kind(&self) -> OptionType {
        self.kind
    }

    /// The configuration key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The slot holding the live value.
    #[must_use]
    pub const fn slot(&self) -> SlotId {
        self.slot
    }

    /// Human-readable description.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The source that last set this descriptor.
    #[must_use]
    pub const fn source(&self) -> ConfigSource {
        self.source
    }
}

/// A value slot and the descriptor owning its string, if any.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) value: Value,
    pub(crate) owner: Option<OptionId>,
}

impl Slot {
    pub(crate) const fn new(value: Value) -> Self {
        Self { value, owner: None }
    }
}
