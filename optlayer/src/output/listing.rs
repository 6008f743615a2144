//! Human-readable option listing.

use std::io::Write;

use super::{display_char, ListStyle};
use crate::error::Result;
use crate::option::{ConfigSource, Descriptor, OptionType, Registry, Value};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[2m\x1b[3m";
const GREEN: &str = "\x1b[0;32m";
const RESET: &str = "\x1b[0m";

impl Registry {
    /// Write every visible setting as a command-line flag with its type,
    /// description, current value and provenance.
    ///
    /// Booleans are shown as `-[no-]name`. Characters outside printable
    /// ASCII are shown as `\xHH` escapes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::output::ListStyle;
    /// use optlayer::{EngineConfig, Registry};
    ///
    /// let registry = Registry::new(EngineConfig::default()).unwrap();
    /// let mut out = Vec::new();
    /// registry.list(&mut out, ListStyle::Plain).unwrap();
    ///
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("\t-[no-]sort "));
    /// assert!(text.contains("\t\t15 (Default)\n"));
    /// ```
    pub fn list(&self, out: &mut impl Write, style: ListStyle) -> Result<()> {
        for (descriptor, source) in self.visible_sources() {
            self.list_entry(out, descriptor, source, style)?;
        }
        Ok(())
    }

    fn list_entry(
        &self,
        out: &mut impl Write,
        descriptor: &Descriptor,
        source: ConfigSource,
        style: ListStyle,
    ) -> Result<()> {
        let name = descriptor.name();
        let len = name.chars().count();
        let column = self.config().name_column;

        let (flag, pad) = if descriptor.kind() == OptionType::Boolean {
            (format!("-[no-]{name}"), (column + 3).saturating_sub(len).max(1))
        } else {
            (format!("-{name}"), column.saturating_sub(len).max(1))
        };
        let annotation = descriptor.kind().annotation();

        let value = match self.slot_value(descriptor.slot()) {
            Some(Value::Str(Some(s))) => s.clone(),
            Some(Value::Unsigned(n)) => n.to_string(),
            Some(Value::Signed(n)) => n.to_string(),
            Some(Value::Bool(true)) => "True".to_string(),
            Some(Value::Bool(false)) => "False".to_string(),
            Some(Value::Char(c)) => display_char(*c),
            Some(Value::Str(None)) | None => "(unset)".to_string(),
        };
        let comment = descriptor.comment();

        match style {
            ListStyle::Plain => {
                writeln!(out, "\t{flag} {annotation}{:pad$}{comment}", "")?;
                writeln!(out, "\t\t{value} ({source})")?;
            }
            ListStyle::Styled => {
                writeln!(
                    out,
                    "\t{BOLD}{flag}{RESET} {annotation}{:pad$}{comment}",
                    ""
                )?;
                writeln!(out, "\t{ITALIC}{value}{RESET} {GREEN}({source}){RESET}")?;
            }
        }
        Ok(())
    }
}
