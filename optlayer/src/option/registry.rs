//! The option registry: builtin table plus runtime registrations.

use std::borrow::Cow;

use super::builtin::{BuiltinOption, Init, BUILTIN_OPTIONS};
use super::descriptor::{Descriptor, OptionId, Slot, SlotId};
use super::types::{ConfigSource, OptionType, Value};
use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// The combined set of descriptors and the slots they write to.
///
/// The builtin table is fixed at construction; extra descriptors are
/// appended by [`register`](Self::register). Every lookup and every
/// resolution pass visits the builtin table first, then the extras in
/// registration order.
///
/// String slots record which descriptor owns their current text. A
/// descriptor owns a string it wrote or captured at registration, and
/// [`teardown`](Self::teardown) releases every owned string exactly once.
///
/// # Examples
///
/// ```
/// use optlayer::{ConfigSource, EngineConfig, Registry};
///
/// let mut registry = Registry::new(EngineConfig::default()).unwrap();
/// let id = registry.find_id("lines").unwrap();
/// registry.set_from_text(id, "20", ConfigSource::CommandLine);
///
/// assert_eq!(registry.unsigned("lines"), Some(20));
/// assert_eq!(registry.find("lines").unwrap().source(), ConfigSource::CommandLine);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    config: EngineConfig,
    slots: Vec<Slot>,
    builtin_slots: usize,
    builtin: Box<[Descriptor]>,
    extra: Vec<Descriptor>,
}

impl Registry {
    /// Create a registry holding the standard builtin settings.
    ///
    /// # Errors
    ///
    /// Fails only if the builtin table is inconsistent (see
    /// [`from_table`](Self::from_table)).
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::from_table(config, BUILTIN_OPTIONS)
    }

    /// Create a registry from an arbitrary builtin table.
    ///
    /// Alias rows may point forward or backward in the table.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an alias names a row that does not
    /// exist or is itself an alias.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::option::{BuiltinOption, Init};
    /// use optlayer::{EngineConfig, Registry};
    ///
    /// let table = [
    ///     BuiltinOption { name: "monitor", init: Init::Str(None), comment: "" },
    ///     BuiltinOption { name: "m", init: Init::AliasOf("monitor"), comment: "Monitor" },
    /// ];
    /// let registry = Registry::from_table(EngineConfig::default(), &table).unwrap();
    /// assert_eq!(registry.find("m").unwrap().slot(), registry.find("monitor").unwrap().slot());
    /// ```
    pub fn from_table(config: EngineConfig, table: &[BuiltinOption]) -> Result<Self> {
        let mut slots = Vec::with_capacity(table.len());
        let mut row_slots: Vec<Option<SlotId>> = Vec::with_capacity(table.len());

        // First pass: every concrete row gets its own slot.
        for row in table {
            row_slots.push(row.init.value().map(|value| {
                slots.push(Slot::new(value));
                SlotId(slots.len() - 1)
            }));
        }

        let mut builtin = Vec::with_capacity(table.len());
        for (row, slot) in table.iter().zip(&row_slots) {
            let slot = match (slot, row.init) {
                (Some(slot), _) => *slot,
                (None, Init::AliasOf(target)) => table
                    .iter()
                    .zip(&row_slots)
                    .find(|(candidate, _)| candidate.name == target)
                    .and_then(|(_, slot)| *slot)
                    .ok_or_else(|| Error::Validation {
                        field: row.name.to_string(),
                        message: format!("alias target '{target}' is not a concrete option"),
                    })?,
                (None, _) => unreachable!("only alias rows lack a slot"),
            };
            let kind = slots[slot.0].value.kind();
            builtin.push(Descriptor::new(
                kind,
                Cow::Borrowed(row.name),
                slot,
                Cow::Borrowed(row.comment),
            ));
        }

        Ok(Self {
            config,
            builtin_slots: slots.len(),
            slots,
            builtin: builtin.into_boxed_slice(),
            extra: Vec::new(),
        })
    }

    /// The engine configuration this registry was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Allocate a new slot holding `value`.
    ///
    /// The slot is not owned by any descriptor until one writes to it or is
    /// registered against it.
    pub fn alloc_slot(&mut self, value: Value) -> SlotId {
        self.slots.push(Slot::new(value));
        SlotId(self.slots.len() - 1)
    }

    /// Register an extra setting bound to an existing slot.
    ///
    /// A set string already in the slot becomes owned by the new
    /// descriptor. Names are not checked for uniqueness: a duplicate stays
    /// listed but is shadowed for name lookups by the earlier entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot does not exist or holds a value of a
    /// different type than `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::{EngineConfig, OptionType, Registry, Value};
    ///
    /// let mut registry = Registry::new(EngineConfig::default()).unwrap();
    /// let slot = registry.alloc_slot(Value::Str(Some("Control+j".into())));
    /// let id = registry
    ///     .register(OptionType::String, "kb-accept-entry", slot, "Accept entry")
    ///     .unwrap();
    /// assert!(registry.owns_value(id));
    /// ```
    pub fn register(
        &mut self,
        kind: OptionType,
        name: impl Into<Cow<'static, str>>,
        slot: SlotId,
        comment: impl Into<Cow<'static, str>>,
    ) -> Result<OptionId> {
        let name = name.into();
        let current = self
            .slots
            .get_mut(slot.0)
            .ok_or(Error::UnknownSlot { slot: slot.0 })?;

        let found = current.value.kind();
        if found != kind {
            return Err(Error::SlotTypeMismatch {
                name: name.into_owned(),
                expected: kind,
                found,
            });
        }

        let id = OptionId::Extra(self.extra.len());
        if matches!(current.value, Value::Str(Some(_))) {
            current.owner = Some(id);
        }

        log::debug!("registered option '{name}' ({kind})");
        self.extra
            .push(Descriptor::new(kind, name, slot, comment.into()));
        Ok(id)
    }

    /// Allocate a slot for `initial` and register `name` against it.
    pub fn add_option(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        initial: Value,
        comment: impl Into<Cow<'static, str>>,
    ) -> OptionId {
        let kind = initial.kind();
        let owned = matches!(initial, Value::Str(Some(_)));
        let slot = self.alloc_slot(initial);
        let id = OptionId::Extra(self.extra.len());
        if owned {
            self.slots[slot.0].owner = Some(id);
        }
        self.extra
            .push(Descriptor::new(kind, name.into(), slot, comment.into()));
        id
    }

    /// Builtin descriptors in table order.
    #[must_use]
    pub fn builtin(&self) -> &[Descriptor] {
        &self.builtin
    }

    /// Runtime registrations in registration order.
    #[must_use]
    pub fn extra(&self) -> &[Descriptor] {
        &self.extra
    }

    /// Every descriptor: builtin first, then extras.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.builtin.iter().chain(self.extra.iter())
    }

    /// Every descriptor with its id, in resolution order.
    pub fn entries(&self) -> impl Iterator<Item = (OptionId, &Descriptor)> {
        let builtin = self
            .builtin
            .iter()
            .enumerate()
            .map(|(i, d)| (OptionId::Builtin(i), d));
        let extra = self
            .extra
            .iter()
            .enumerate()
            .map(|(i, d)| (OptionId::Extra(i), d));
        builtin.chain(extra)
    }

    /// Descriptors as the text views render them.
    ///
    /// A builtin row is skipped when the row after it shares its slot, so
    /// each alias run shows up once under its last name. Extras are always
    /// included.
    pub fn visible(&self) -> impl Iterator<Item = &Descriptor> {
        self.visible_sources().map(|(d, _)| d)
    }

    /// Visible descriptors with the provenance the views report.
    ///
    /// A collapsed alias run reports the highest-precedence source among
    /// its rows, so a value set through a hidden name is not shown as a
    /// default.
    pub fn visible_sources(&self) -> impl Iterator<Item = (&Descriptor, ConfigSource)> {
        let builtin = &self.builtin;
        builtin
            .iter()
            .enumerate()
            .filter(move |(i, d)| builtin.get(i + 1).map_or(true, |next| next.slot != d.slot))
            .map(move |(i, d)| {
                let source = builtin[..=i]
                    .iter()
                    .rev()
                    .take_while(|row| row.slot == d.slot)
                    .map(Descriptor::source)
                    .fold(ConfigSource::Default, Ord::max);
                (d, source)
            })
            .chain(self.extra.iter().map(|d| (d, d.source())))
    }

    pub(crate) fn ids(&self) -> Vec<OptionId> {
        (0..self.builtin.len())
            .map(OptionId::Builtin)
            .chain((0..self.extra.len()).map(OptionId::Extra))
            .collect()
    }

    /// Look up a descriptor by id.
    #[must_use]
    pub fn descriptor(&self, id: OptionId) -> Option<&Descriptor> {
        match id {
            OptionId::Builtin(i) => self.builtin.get(i),
            OptionId::Extra(i) => self.extra.get(i),
        }
    }

    /// First descriptor named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Descriptor> {
        self.iter().find(|d| d.name() == name)
    }

    /// Id of the first descriptor named `name`.
    #[must_use]
    pub fn find_id(&self, name: &str) -> Option<OptionId> {
        self.entries()
            .find(|(_, d)| d.name() == name)
            .map(|(id, _)| id)
    }

    /// Value stored in a slot.
    #[must_use]
    pub fn slot_value(&self, slot: SlotId) -> Option<&Value> {
        self.slots.get(slot.0).map(|s| &s.value)
    }

    /// Current value of the setting named `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.find(name).and_then(|d| self.slot_value(d.slot))
    }

    /// Current value of a string setting; `None` if unknown, unset or not a string.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_str)
    }

    /// Current value of an unsigned setting.
    #[must_use]
    pub fn unsigned(&self, name: &str) -> Option<u32> {
        match self.value(name) {
            Some(Value::Unsigned(n)) => Some(*n),
            _ => None,
        }
    }

    /// Current value of a signed setting.
    #[must_use]
    pub fn signed(&self, name: &str) -> Option<i32> {
        match self.value(name) {
            Some(Value::Signed(n)) => Some(*n),
            _ => None,
        }
    }

    /// Current value of a boolean setting.
    #[must_use]
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.value(name) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Current value of a character setting.
    #[must_use]
    pub fn character(&self, name: &str) -> Option<char> {
        match self.value(name) {
            Some(Value::Char(c)) => Some(*c),
            _ => None,
        }
    }

    /// Whether the descriptor owns the string currently in its slot.
    #[must_use]
    pub fn owns_value(&self, id: OptionId) -> bool {
        self.descriptor(id)
            .and_then(|d| self.slots.get(d.slot.0))
            .is_some_and(|slot| slot.owner == Some(id))
    }

    /// Number of slots whose string is owned by a descriptor.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.slots.iter().filter(|s| s.owner.is_some()).count()
    }

    /// Parse `text` according to the descriptor's type and store it.
    ///
    /// Unknown ids are ignored.
    pub fn set_from_text(&mut self, id: OptionId, text: &str, source: ConfigSource) {
        let Some(kind) = self.descriptor(id).map(Descriptor::kind) else {
            return;
        };
        self.store(id, Value::parse(kind, text), source);
    }

    /// Write a value of the descriptor's type and stamp its provenance.
    ///
    /// A set string becomes owned by `id`; the text it replaces is released.
    pub(crate) fn store(&mut self, id: OptionId, value: Value, source: ConfigSource) {
        let descriptor = match id {
            OptionId::Builtin(i) => self.builtin.get_mut(i),
            OptionId::Extra(i) => self.extra.get_mut(i),
        };
        let Some(descriptor) = descriptor else {
            return;
        };
        let Some(slot) = self.slots.get_mut(descriptor.slot.0) else {
            return;
        };
        debug_assert_eq!(descriptor.kind, value.kind());

        log::debug!("option '{}' set from {source}", descriptor.name);
        descriptor.source = source;
        slot.owner = matches!(value, Value::Str(Some(_))).then_some(id);
        slot.value = value;
    }

    /// Release every owned string and drop the runtime registrations.
    ///
    /// Released builtin string slots become unset. Slots allocated with
    /// [`alloc_slot`](Self::alloc_slot) are freed along with the extras, and
    /// their ids are no longer valid. Calling this again is a no-op.
    pub fn teardown(&mut self) {
        let mut released = 0usize;
        for slot in &mut self.slots {
            if slot.owner.take().is_some() {
                if let Value::Str(text) = &mut slot.value {
                    *text = None;
                }
                released += 1;
            }
        }
        self.extra = Vec::new();
        self.slots.truncate(self.builtin_slots);
        log::debug!("teardown released {released} owned value(s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_builtin_defaults() {
        let registry = registry();
        assert_eq!(registry.unsigned("lines"), Some(15));
        assert_eq!(registry.signed("dpi"), Some(-1));
        assert_eq!(registry.boolean("cycle"), Some(true));
        assert_eq!(registry.string("modi"), Some("window,run,ssh"));
        assert_eq!(registry.string("filter"), None);
        assert_eq!(registry.character("sep"), Some('\n'));
        assert!(registry
            .iter()
            .all(|d| d.source() == ConfigSource::Default));
    }

    #[test]
    fn test_defaults_are_not_owned() {
        assert_eq!(registry().owned_count(), 0);
    }

    #[test]
    fn test_aliases_share_slot_and_type() {
        let registry = registry();
        let monitor = registry.find("monitor").unwrap();
        let m = registry.find("m").unwrap();
        assert_eq!(monitor.slot(), m.slot());
        assert_eq!(m.kind(), OptionType::String);

        let switchers = registry.find("switchers").unwrap();
        assert_eq!(switchers.slot(), registry.find("modi").unwrap().slot());
    }

    #[test]
    fn test_alias_write_visible_through_both_names() {
        let mut registry = registry();
        let id = registry.find_id("m").unwrap();
        registry.set_from_text(id, "2", ConfigSource::CommandLine);
        assert_eq!(registry.string("monitor"), Some("2"));
        assert_eq!(registry.find("monitor").unwrap().source(), ConfigSource::Default);
    }

    #[test]
    fn test_unknown_alias_target_rejected() {
        let table = [BuiltinOption {
            name: "m",
            init: Init::AliasOf("monitor"),
            comment: "",
        }];
        let err = Registry::from_table(EngineConfig::default(), &table).unwrap_err();
        assert!(format!("{err}").contains("monitor"));
    }

    #[test]
    fn test_visible_collapses_adjacent_aliases() {
        let registry = registry();
        let names: Vec<_> = registry.visible().map(Descriptor::name).collect();
        assert!(names.contains(&"m"));
        assert!(!names.contains(&"monitor"));
        assert!(names.contains(&"modi"));
        assert!(!names.contains(&"switchers"));
        assert_eq!(names.len(), registry.builtin().len() - 2);
    }

    #[test]
    fn test_register_appends_extra() {
        let mut registry = registry();
        let slot = registry.alloc_slot(Value::Bool(false));
        let id = registry
            .register(OptionType::Boolean, "hover-select", slot, "Hover select")
            .unwrap();
        assert_eq!(id, OptionId::Extra(0));
        assert_eq!(registry.extra().len(), 1);
        assert_eq!(registry.boolean("hover-select"), Some(false));
        assert!(!registry.owns_value(id));
    }

    #[test]
    fn test_register_unknown_slot() {
        let mut registry = registry();
        let err = registry
            .register(OptionType::Boolean, "x", SlotId(10_000), "")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSlot { slot: 10_000 }));
    }

    #[test]
    fn test_register_type_mismatch() {
        let mut registry = registry();
        let slot = registry.alloc_slot(Value::Unsigned(3));
        let err = registry
            .register(OptionType::String, "x", slot, "")
            .unwrap_err();
        assert!(matches!(err, Error::SlotTypeMismatch { .. }));
        assert!(registry.extra().is_empty());
    }

    #[test]
    fn test_register_captures_string_ownership() {
        let mut registry = registry();
        let slot = registry.alloc_slot(Value::Str(Some("Escape".into())));
        let id = registry
            .register(OptionType::String, "kb-cancel", slot, "Quit")
            .unwrap();
        assert!(registry.owns_value(id));
        assert_eq!(registry.owned_count(), 1);
    }

    #[test]
    fn test_duplicate_registration_shadowed_but_listed() {
        let mut registry = registry();
        let first = registry.add_option("kb-dup", Value::Str(Some("a".into())), "first");
        let second = registry.add_option("kb-dup", Value::Str(Some("b".into())), "second");

        assert_eq!(registry.find_id("kb-dup"), Some(first));
        assert_eq!(registry.string("kb-dup"), Some("a"));
        assert_eq!(registry.descriptor(second).unwrap().comment(), "second");
        assert_eq!(
            registry.visible().filter(|d| d.name() == "kb-dup").count(),
            2
        );
    }

    #[test]
    fn test_store_transfers_ownership_between_aliases() {
        let mut registry = registry();
        let monitor = registry.find_id("monitor").unwrap();
        let m = registry.find_id("m").unwrap();

        registry.set_from_text(monitor, "1", ConfigSource::ResourceDb);
        assert!(registry.owns_value(monitor));

        registry.set_from_text(m, "2", ConfigSource::CommandLine);
        assert!(registry.owns_value(m));
        assert!(!registry.owns_value(monitor));
        assert_eq!(registry.owned_count(), 1);
    }

    #[test]
    fn test_string_set_twice_keeps_single_owner() {
        let mut registry = registry();
        let font = registry.find_id("font").unwrap();
        registry.set_from_text(font, "Sans 10", ConfigSource::ResourceDb);
        registry.set_from_text(font, "Sans 12  ", ConfigSource::ResourceFile);

        assert_eq!(registry.string("font"), Some("Sans 12"));
        assert_eq!(registry.owned_count(), 1);
    }

    #[test]
    fn test_teardown_releases_and_is_idempotent() {
        let mut registry = registry();
        let font = registry.find_id("font").unwrap();
        registry.set_from_text(font, "Sans 10", ConfigSource::ResourceDb);
        registry.add_option("kb-x", Value::Str(Some("x".into())), "");

        registry.teardown();
        assert_eq!(registry.owned_count(), 0);
        assert_eq!(registry.string("font"), None);
        assert!(registry.extra().is_empty());
        // Builtin defaults that were never owned survive.
        assert_eq!(registry.string("terminal"), Some("rofi-sensible-terminal"));

        registry.teardown();
        assert_eq!(registry.owned_count(), 0);
    }

    #[test]
    fn test_registered_value_released_without_resolution() {
        let mut registry = registry();
        let slot = registry.alloc_slot(Value::Str(Some("X".into())));
        registry
            .register(OptionType::String, "kb-x", slot, "")
            .unwrap();

        registry.teardown();
        assert_eq!(registry.slot_value(slot), None);
        assert_eq!(registry.owned_count(), 0);
    }

    #[test]
    fn test_teardown_frees_allocated_slots() {
        let mut registry = registry();
        let baseline = registry.alloc_slot(Value::Bool(false));
        registry.teardown();

        for _ in 0..3 {
            registry.add_option("kb-x", Value::Str(Some("x".into())), "");
            let slot = registry.alloc_slot(Value::Unsigned(1));
            registry
                .register(OptionType::UnsignedNumber, "extra-count", slot, "")
                .unwrap();
            registry.teardown();
        }

        assert_eq!(registry.alloc_slot(Value::Bool(true)), baseline);
        let err = registry
            .register(OptionType::Boolean, "stale", SlotId(baseline.0 + 1), "")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSlot { .. }));
    }

    #[test]
    fn test_visible_sources_report_hidden_alias_write() {
        let mut registry = registry();
        let monitor = registry.find_id("monitor").unwrap();
        registry.set_from_text(monitor, "1", ConfigSource::ResourceDb);

        let (descriptor, source) = registry
            .visible_sources()
            .find(|(d, _)| d.name() == "m")
            .unwrap();
        assert_eq!(descriptor.source(), ConfigSource::Default);
        assert_eq!(source, ConfigSource::ResourceDb);
    }

    #[test]
    fn test_set_from_text_unknown_id_ignored() {
        let mut registry = registry();
        registry.set_from_text(OptionId::Extra(5), "1", ConfigSource::CommandLine);
        assert_eq!(registry.owned_count(), 0);
    }

    #[test]
    fn test_typed_getters_reject_other_types() {
        let registry = registry();
        assert_eq!(registry.unsigned("font"), None);
        assert_eq!(registry.string("lines"), None);
        assert_eq!(registry.boolean("nonexistent"), None);
    }
}
