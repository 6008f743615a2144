//! Introspection views over a [`Registry`](crate::Registry).
//!
//! All views are read-only. The text views (dump and listing) collapse
//! adjacent builtin aliases so each shared setting shows up once; the help
//! strings and the snapshot are built from the same visible set.

mod dump;
mod help;
mod listing;
mod snapshot;

use std::io::IsTerminal;

pub use snapshot::OptionSnapshot;

/// How the option listing is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// Plain text suitable for pipes and files.
    #[default]
    Plain,
    /// Bold, italic and colored text for an interactive terminal.
    Styled,
}

impl ListStyle {
    /// Pick [`Styled`](Self::Styled) when stdout is a terminal.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Styled
        } else {
            Self::Plain
        }
    }
}

/// Render a character for display: printable ASCII as-is, anything else
/// as a `\xHH` escape.
///
/// # Examples
///
/// ```
/// use optlayer::output::display_char;
///
/// assert_eq!(display_char('|'), "|");
/// assert_eq!(display_char('\t'), "\\x09");
/// ```
#[must_use]
pub fn display_char(c: char) -> String {
    if (' '..='~').contains(&c) {
        c.to_string()
    } else {
        format!("\\x{:02X}", u32::from(c))
    }
}
