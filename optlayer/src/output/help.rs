//! Markup help strings for a class of settings.

use super::display_char;
use crate::option::{Registry, Value};

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Registry {
    /// Build one markup line for each visible setting whose name starts
    /// with `prefix`.
    ///
    /// The prefix and one following `-` are dropped from the displayed name,
    /// which is padded to the longest setting name in the registry. Names,
    /// values and descriptions are markup-escaped. The number of entries is
    /// the length of the returned vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use optlayer::{EngineConfig, Registry, Value};
    ///
    /// let mut registry = Registry::new(EngineConfig::default()).unwrap();
    /// registry.add_option("kb-cancel", Value::Str(Some("Escape".into())), "Quit");
    ///
    /// let help = registry.help_strings("kb");
    /// assert_eq!(help.len(), 1);
    /// assert!(help[0].starts_with("<b>cancel "));
    /// assert!(help[0].ends_with("</b> (Escape) <span style='italic' size='small'>Quit</span>"));
    /// ```
    #[must_use]
    pub fn help_strings(&self, prefix: &str) -> Vec<String> {
        let width = self
            .iter()
            .map(|d| d.name().chars().count())
            .max()
            .unwrap_or(0);

        self.visible()
            .filter_map(|d| {
                let rest = d.name().strip_prefix(prefix)?;
                let short = rest.strip_prefix('-').unwrap_or(rest);

                let value = match self.slot_value(d.slot())? {
                    Value::Str(Some(s)) => s.clone(),
                    Value::Str(None) => "null".to_string(),
                    Value::Unsigned(n) => n.to_string(),
                    Value::Signed(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Char(c) => display_char(*c),
                };

                Some(format!(
                    "<b>{:<width$}</b> ({}) <span style='italic' size='small'>{}</span>",
                    escape_markup(short),
                    escape_markup(&value),
                    escape_markup(d.comment()),
                ))
            })
            .collect()
    }
}
