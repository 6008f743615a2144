//! Structured properties as produced by a theme parser.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_yaml::Value as Yaml;

use crate::error::{Error, Result};

/// The kind of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Text.
    String,
    /// Whole number.
    Integer,
    /// Switch.
    Boolean,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Text.
    String(String),
    /// Whole number.
    Integer(i64),
    /// Switch.
    Boolean(bool),
}

impl PropertyValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::String(_) => PropertyKind::String,
            Self::Integer(_) => PropertyKind::Integer,
            Self::Boolean(_) => PropertyKind::Boolean,
        }
    }
}

/// One named property record.
///
/// # Examples
///
/// ```
/// use optlayer::source::{Property, PropertyKind, PropertyValue};
///
/// let property = Property::new("lines", PropertyValue::Integer(12));
/// assert_eq!(property.value.kind(), PropertyKind::Integer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Setting name the property targets.
    pub name: String,
    /// Typed value.
    pub value: PropertyValue,
}

impl Property {
    /// Create a property.
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Properties in document order.
///
/// Loaded from a YAML mapping whose keys are setting names and whose values
/// are strings, integers or booleans.
///
/// # Examples
///
/// ```
/// use optlayer::source::{PropertySet, PropertyValue};
///
/// let set = PropertySet::from_yaml_str("lines: 8\nsort: true\nfont: Sans 9\n").unwrap();
/// let names: Vec<_> = set.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["lines", "sort", "font"]);
/// assert_eq!(set.iter().next().unwrap().value, PropertyValue::Integer(8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    properties: Vec<Property>,
}

impl PropertySet {
    /// Parse a YAML property document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, the document is not a
    /// mapping, a key is not a string, or a value is not a string, integer
    /// or boolean.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let document: Yaml = serde_yaml::from_str(text)?;
        let mapping = match document {
            Yaml::Null => return Ok(Self::default()),
            Yaml::Mapping(mapping) => mapping,
            _ => {
                return Err(Error::Validation {
                    field: "<document>".into(),
                    message: "property document must be a mapping".into(),
                })
            }
        };

        let mut properties = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let Yaml::String(name) = key else {
                return Err(Error::Validation {
                    field: "<document>".into(),
                    message: format!("property names must be strings, got {key:?}"),
                });
            };
            let value = Self::convert(&name, value)?;
            properties.push(Property { name, value });
        }

        Ok(Self { properties })
    }

    /// Read and parse a YAML property file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read property file: {e}"),
        })?;
        Self::from_yaml_str(&text)
    }

    fn convert(name: &str, value: Yaml) -> Result<PropertyValue> {
        let unsupported = |reason: &str| Error::UnsupportedProperty {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        match value {
            Yaml::Bool(b) => Ok(PropertyValue::Boolean(b)),
            Yaml::String(s) => Ok(PropertyValue::String(s)),
            Yaml::Number(n) => n
                .as_i64()
                .map(PropertyValue::Integer)
                .ok_or_else(|| unsupported("only whole numbers in the 64-bit signed range")),
            Yaml::Null => Err(unsupported("missing value")),
            Yaml::Sequence(_) => Err(unsupported("lists are not supported")),
            Yaml::Mapping(_) => Err(unsupported("nested mappings are not supported")),
            Yaml::Tagged(_) => Err(unsupported("tagged values are not supported")),
        }
    }

    /// Iterate the properties in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
