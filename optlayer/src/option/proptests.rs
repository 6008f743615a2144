//! Property-based tests for parsing and the value setter.

use super::parse::{parse_signed, parse_unsigned};
use super::{ConfigSource, OptionType, Registry, Value};
use crate::config::EngineConfig;
use proptest::prelude::*;

fn source_strategy() -> impl Strategy<Value = ConfigSource> {
    prop::sample::select(ConfigSource::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Any decimal number followed by non-digit garbage parses to the number
    #[test]
    fn unsigned_prefix_parse(n in any::<u32>(), tail in "[a-z ]{0,8}") {
        prop_assert_eq!(parse_unsigned(&format!("{n}{tail}")), n);
    }

    #[test]
    fn signed_prefix_parse(n in any::<i32>(), tail in "[a-z ]{0,8}") {
        prop_assert_eq!(parse_signed(&format!("{n}{tail}")), n);
    }

    // Text without a leading digit run is zero
    #[test]
    fn non_numeric_is_zero(text in "[a-zA-Z][a-zA-Z0-9]{0,10}") {
        prop_assert_eq!(parse_unsigned(&text), 0);
        prop_assert_eq!(parse_signed(&text), 0);
    }

    // Parsing never panics and always yields the requested kind
    #[test]
    fn parse_total(text in ".{0,24}") {
        for kind in [
            OptionType::String,
            OptionType::UnsignedNumber,
            OptionType::SignedNumber,
            OptionType::Boolean,
            OptionType::Character,
        ] {
            prop_assert_eq!(Value::parse(kind, &text).kind(), kind);
        }
    }

    // The provenance left behind is the last source that wrote the setting
    #[test]
    fn last_writer_wins(writes in prop::collection::vec((source_strategy(), "[a-z]{1,6}"), 0..8)) {
        let mut registry = Registry::new(EngineConfig::default()).unwrap();
        let id = registry.find_id("font").unwrap();

        for (source, text) in &writes {
            registry.set_from_text(id, text, *source);
        }

        let expected_source = writes.last().map_or(ConfigSource::Default, |(s, _)| *s);
        prop_assert_eq!(registry.find("font").unwrap().source(), expected_source);
        if let Some((_, text)) = writes.last() {
            prop_assert_eq!(registry.string("font"), Some(text.as_str()));
        }
        prop_assert!(registry.owned_count() <= 1);

        registry.teardown();
        prop_assert_eq!(registry.owned_count(), 0);
    }
}
