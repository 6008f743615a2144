//! Argument-vector search.

use super::{escape::parse_char, ArgumentSource};
use crate::option::{parse_signed, parse_unsigned};

/// A stored argument vector searched by exact flag name.
///
/// Flags match ASCII case-insensitively. Value-taking searches read the
/// argument right after the first matching flag.
///
/// # Examples
///
/// ```
/// use optlayer::source::{ArgVector, ArgumentSource};
///
/// let args = ArgVector::new(["-lines", "10", "-no-sort"]);
/// assert_eq!(args.find_uint("-lines"), Some(10));
/// assert!(args.find_flag("-no-sort"));
/// assert!(!args.find_flag("-sort"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<String>,
}

impl ArgVector {
    /// Store an argument vector. The program name must not be included.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The stored arguments.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.args.iter().position(|arg| arg.eq_ignore_ascii_case(key))
    }

    fn value_after(&self, key: &str) -> Option<&str> {
        self.position(key)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl ArgumentSource for ArgVector {
    fn find_flag(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn find_uint(&self, key: &str) -> Option<u32> {
        self.value_after(key).map(parse_unsigned)
    }

    fn find_int(&self, key: &str) -> Option<i32> {
        self.value_after(key).map(parse_signed)
    }

    fn find_str(&self, key: &str) -> Option<String> {
        self.value_after(key).map(str::to_owned)
    }

    fn find_char(&self, key: &str) -> Option<char> {
        self.value_after(key)
            .filter(|value| !value.is_empty())
            .map(parse_char)
    }
}
