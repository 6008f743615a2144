//! Property-based tests for resolution order.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use crate::config::EngineConfig;
use crate::option::{ConfigSource, Registry};
use crate::source::{ArgVector, Property, PropertyValue, ResourceDatabase};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    // After a full pass the provenance is the last source that had the key
    #[test]
    fn last_matching_source_wins(
        db in proptest::option::of(0u32..1000),
        file in proptest::option::of(0u32..1000),
        theme in proptest::option::of(0i64..1000),
        cmdline in proptest::option::of(0u32..1000),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        let file_text = file.map(|n| format!("rofi.lines: {n}\n")).unwrap_or_default();
        fs::write(&path, file_text).unwrap();

        let mut registry = Registry::new(EngineConfig::default()).unwrap();
        let db_text = db.map(|n| format!("rofi.lines: {n}\n")).unwrap_or_default();
        registry.resolve_from_resource_db(&ResourceDatabase::parse(&db_text));
        registry.resolve_from_resource_file(&path);
        if let Some(n) = theme {
            registry.resolve_from_property(&Property::new("lines", PropertyValue::Integer(n)));
        }
        let args: Vec<String> = cmdline
            .map(|n| vec!["-lines".to_string(), n.to_string()])
            .unwrap_or_default();
        registry.resolve_from_cmdline(&ArgVector::new(args));

        let expected = [
            (cmdline.map(i64::from), ConfigSource::CommandLine),
            (theme, ConfigSource::ThemeProperty),
            (file.map(i64::from), ConfigSource::ResourceFile),
            (db.map(i64::from), ConfigSource::ResourceDb),
        ]
        .into_iter()
        .find_map(|(value, source)| value.map(|v| (v, source)))
        .unwrap_or((15, ConfigSource::Default));

        prop_assert_eq!(registry.unsigned("lines").map(i64::from), Some(expected.0));
        prop_assert_eq!(registry.find("lines").unwrap().source(), expected.1);
    }
}
