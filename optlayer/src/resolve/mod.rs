//! Source resolvers.
//!
//! Each resolver walks the registry (builtin table first, then runtime
//! registrations), asks one source for a value under that setting's key and
//! stores whatever it finds, stamped with the source's [`ConfigSource`].
//! A key the source does not know leaves the setting untouched. None of the
//! resolvers fail: unreadable files and mistyped properties are logged and
//! skipped.

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::path::Path;

use crate::option::{saturate_i32, saturate_u32, ConfigSource, OptionType, Registry, Value};
use crate::source::{ArgumentSource, Property, PropertyValue, ResourceDatabase, ResourceLookup};

impl Registry {
    /// Apply values from a live resource store.
    ///
    /// Keys are `namespace.name`, e.g. `rofi.lines`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::source::ResourceDatabase;
    /// use optlayer::{ConfigSource, EngineConfig, Registry};
    ///
    /// let mut registry = Registry::new(EngineConfig::default()).unwrap();
    /// let db = ResourceDatabase::parse("rofi.lines: 12\n");
    /// registry.resolve_from_resource_db(&db);
    ///
    /// assert_eq!(registry.unsigned("lines"), Some(12));
    /// assert_eq!(registry.find("lines").unwrap().source(), ConfigSource::ResourceDb);
    /// ```
    pub fn resolve_from_resource_db(&mut self, db: &impl ResourceLookup) {
        self.resolve_from_lookup(db, ConfigSource::ResourceDb);
    }

    /// Apply values from a resource file.
    ///
    /// A file that cannot be read is treated like an empty one.
    pub fn resolve_from_resource_file(&mut self, path: &Path) {
        match ResourceDatabase::from_file(path) {
            Ok(db) => self.resolve_from_lookup(&db, ConfigSource::ResourceFile),
            Err(e) => log::debug!("skipping resource file {}: {e}", path.display()),
        }
    }

    fn resolve_from_lookup(&mut self, db: &impl ResourceLookup, source: ConfigSource) {
        let namespace = self.config().namespace.clone();
        for id in self.ids() {
            let Some(key) = self
                .descriptor(id)
                .map(|d| format!("{namespace}.{}", d.name()))
            else {
                continue;
            };
            if let Some(text) = db.lookup(&key) {
                self.set_from_text(id, &text, source);
            }
        }
    }

    /// Apply one theme property.
    ///
    /// The first setting with the property's name receives it, provided the
    /// property kind fits the setting's type. Integers saturate into the
    /// setting's range. A misfit is logged as a warning and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::source::{Property, PropertyValue};
    /// use optlayer::{ConfigSource, EngineConfig, Registry};
    ///
    /// let mut registry = Registry::new(EngineConfig::default()).unwrap();
    /// registry.resolve_from_property(&Property::new("sort", PropertyValue::Boolean(true)));
    /// registry.resolve_from_property(&Property::new("lines", PropertyValue::Boolean(true)));
    ///
    /// assert_eq!(registry.boolean("sort"), Some(true));
    /// assert_eq!(registry.unsigned("lines"), Some(15));
    /// assert_eq!(registry.find("lines").unwrap().source(), ConfigSource::Default);
    /// ```
    pub fn resolve_from_property(&mut self, property: &Property) {
        let Some(id) = self.find_id(&property.name) else {
            return;
        };
        let Some(kind) = self.descriptor(id).map(|d| d.kind()) else {
            return;
        };

        let value = match (kind, &property.value) {
            (OptionType::String, PropertyValue::String(s)) => Value::Str(Some(s.clone())),
            (OptionType::UnsignedNumber, PropertyValue::Integer(n)) => {
                Value::Unsigned(saturate_u32(*n))
            }
            (OptionType::SignedNumber, PropertyValue::Integer(n)) => {
                Value::Signed(saturate_i32(*n))
            }
            (OptionType::Boolean, PropertyValue::Boolean(b)) => Value::Bool(*b),
            _ => {
                log::warn!(
                    "Option: {} needs to be set with a {kind}.",
                    property.name
                );
                return;
            }
        };
        self.store(id, value, ConfigSource::ThemeProperty);
    }

    /// Apply values from the command line.
    ///
    /// Settings are looked up as `-name`. A boolean is set by `-name` and
    /// cleared by `-no-name`; when both are given `-name` wins.
    pub fn resolve_from_cmdline(&mut self, args: &impl ArgumentSource) {
        for id in self.ids() {
            let Some((kind, name)) = self
                .descriptor(id)
                .map(|d| (d.kind(), d.name().to_owned()))
            else {
                continue;
            };
            let key = format!("-{name}");

            let value = match kind {
                OptionType::String => args.find_str(&key).map(|s| Value::Str(Some(s))),
                OptionType::UnsignedNumber => args.find_uint(&key).map(Value::Unsigned),
                OptionType::SignedNumber => args.find_int(&key).map(Value::Signed),
                OptionType::Character => args.find_char(&key).map(Value::Char),
                OptionType::Boolean => {
                    if args.find_flag(&key) {
                        Some(Value::Bool(true))
                    } else if args.find_flag(&format!("-no-{name}")) {
                        Some(Value::Bool(false))
                    } else {
                        None
                    }
                }
            };

            if let Some(value) = value {
                self.store(id, value, ConfigSource::CommandLine);
            }
        }
    }
}
