//! Serializable view of the registry.

use serde::Serialize;

use crate::option::{ConfigSource, OptionType, Registry, Value};

/// One setting as it currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSnapshot {
    /// Configuration key.
    pub name: String,
    /// Setting type.
    #[serde(rename = "type")]
    pub kind: OptionType,
    /// Current value; `null` for an unset string.
    pub value: Value,
    /// Description.
    pub comment: String,
    /// Source that last set the value.
    pub source: ConfigSource,
}

impl Registry {
    /// Capture the visible settings in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OptionSnapshot> {
        self.visible_sources()
            .filter_map(|(d, source)| {
                Some(OptionSnapshot {
                    name: d.name().to_string(),
                    kind: d.kind(),
                    value: self.slot_value(d.slot())?.clone(),
                    comment: d.comment().to_string(),
                    source,
                })
            })
            .collect()
    }
}
