//! Xresources-style dump.

use std::io::Write;

use super::display_char;
use crate::error::Result;
use crate::option::{ConfigSource, Descriptor, Registry, Value};

impl Registry {
    /// Write every visible setting as a commented resource entry.
    ///
    /// Each entry is a `!` comment with the description and provenance,
    /// followed by `namespace.name: value`. Settings still at their default
    /// are commented out so the dump can be loaded back without pinning
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::{EngineConfig, Registry};
    ///
    /// let registry = Registry::new(EngineConfig::default()).unwrap();
    /// let mut out = Vec::new();
    /// registry.dump(&mut out).unwrap();
    ///
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("! \"Number of lines\" Set from: Default\n! rofi.lines: "));
    /// ```
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        for (descriptor, source) in self.visible_sources() {
            self.dump_entry(out, descriptor, source)?;
        }
        Ok(())
    }

    fn dump_entry(
        &self,
        out: &mut impl Write,
        descriptor: &Descriptor,
        source: ConfigSource,
    ) -> Result<()> {
        let name = descriptor.name();
        writeln!(out, "! \"{}\" Set from: {source}", descriptor.comment())?;
        if source == ConfigSource::Default {
            write!(out, "! ")?;
        }

        let pad = self.config().name_column.saturating_sub(name.chars().count());
        write!(out, "{}.{name}: {:pad$}", self.config().namespace, "")?;

        match self.slot_value(descriptor.slot()) {
            Some(Value::Str(Some(s))) => write!(out, "{s}")?,
            Some(Value::Unsigned(n)) => write!(out, "{n}")?,
            Some(Value::Signed(n)) => write!(out, "{n}")?,
            Some(Value::Bool(b)) => write!(out, "{b}")?,
            Some(Value::Char(c)) => write!(out, "{}", display_char(*c))?,
            Some(Value::Str(None)) | None => {}
        }
        writeln!(out)?;
        Ok(())
    }
}
