//! Core option types: value kinds, provenance and typed values.

use std::fmt;

use serde::Serialize;

/// The type of a setting, selecting how raw text is parsed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Free text.
    String,
    /// Base-10 unsigned number.
    #[serde(rename = "unsigned")]
    UnsignedNumber,
    /// Base-10 signed number.
    #[serde(rename = "signed")]
    SignedNumber,
    /// `true`/`false` switch.
    Boolean,
    /// A single character, escapes allowed.
    Character,
}

impl OptionType {
    /// The annotation shown next to a flag in the option listing.
    #[must_use]
    pub const fn annotation(self) -> &'static str {
        match self {
            Self::String => "[string]",
            Self::UnsignedNumber | Self::SignedNumber => "[number]",
            Self::Boolean => "",
            Self::Character => "[character]",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::UnsignedNumber | Self::SignedNumber => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// Which source last determined a setting's value.
///
/// Variants are ordered by precedence, lowest first.
///
/// # Examples
///
/// ```
/// use optlayer::ConfigSource;
///
/// assert!(ConfigSource::Default < ConfigSource::CommandLine);
/// assert_eq!(ConfigSource::ResourceDb.label(), "XResources");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum ConfigSource {
    /// Built-in default; nothing has overridden it.
    #[default]
    Default,
    /// The live resource database.
    ResourceDb,
    /// A resource file.
    ResourceFile,
    /// A theme/style property.
    ThemeProperty,
    /// The command line.
    CommandLine,
}

impl ConfigSource {
    /// All sources in precedence order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::ResourceDb,
        Self::ResourceFile,
        Self::ThemeProperty,
        Self::CommandLine,
    ];

    /// Human-readable label used by the dump and listing views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::ResourceDb => "XResources",
            Self::ResourceFile => "File",
            Self::ThemeProperty => "Rasi File",
            Self::CommandLine => "Commandline",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The live value held in a slot.
///
/// # Examples
///
/// ```
/// use optlayer::{OptionType, Value};
///
/// let value = Value::parse(OptionType::UnsignedNumber, "42abc");
/// assert_eq!(value, Value::Unsigned(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Text; `None` means unset.
    Str(Option<String>),
    /// Unsigned number.
    Unsigned(u32),
    /// Signed number.
    Signed(i32),
    /// Switch.
    Bool(bool),
    /// Single character.
    Char(char),
}

impl Value {
    /// The option type this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> OptionType {
        match self {
            Self::Str(_) => OptionType::String,
            Self::Unsigned(_) => OptionType::UnsignedNumber,
            Self::Signed(_) => OptionType::SignedNumber,
            Self::Bool(_) => OptionType::Boolean,
            Self::Char(_) => OptionType::Character,
        }
    }

    /// Parse raw source text as a value of `kind`.
    ///
    /// Parsing never fails: strings lose trailing whitespace, numbers take
    /// the longest valid decimal prefix (zero when there is none), booleans
    /// are true only for a case-insensitive `true`, and characters go
    /// through [`parse_char`](crate::source::parse_char).
    #[must_use]
    pub fn parse(kind: OptionType, text: &str) -> Self {
        match kind {
            OptionType::String => Self::Str(Some(text.trim_end().to_owned())),
            OptionType::UnsignedNumber => Self::Unsigned(super::parse::parse_unsigned(text)),
            OptionType::SignedNumber => Self::Signed(super::parse::parse_signed(text)),
            OptionType::Boolean => Self::Bool(text.eq_ignore_ascii_case("true")),
            OptionType::Character => Self::Char(crate::source::parse_char(text)),
        }
    }

    /// The string content, if this is a set string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => s.as_deref(),
            _ => None,
        }
    }
}
