//! Integration tests for flag registration and parsing through the public API.

use flagset_core::{
    AliasRegistry, ArgumentSet, FlagError, ParseDiagnostic, Value, ValueType,
};

/// Builds a registry with one group of each type.
fn registry_with_all_types() -> AliasRegistry {
    let mut registry = AliasRegistry::new();
    registry
        .register(&["a", "b"], "integer group", ValueType::Integer)
        .unwrap();
    registry
        .register(&["name", "n"], "string group", ValueType::String)
        .unwrap();
    registry
        .register(&["ratio", "r", "q"], "float group", ValueType::Float)
        .unwrap();
    registry
        .register(&["v", "verbose"], "boolean group", ValueType::Boolean)
        .unwrap();
    registry
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[test]
fn register_then_set_reads_same_value_through_every_alias() {
    let mut registry = registry_with_all_types();
    let id = registry.group_of("q").unwrap();
    registry.set(id, Value::Float(1.25)).unwrap();

    for alias in ["ratio", "r", "q"] {
        assert_eq!(registry.get(alias), Some(&Value::Float(1.25)));
    }
}

#[test]
fn duplicate_registration_is_rejected_every_time() {
    let mut args = ArgumentSet::new();
    args.add_int_arg(&["a", "b"], "ints").unwrap();
    args.add_bool_param(&["v"], "flag", false).unwrap();

    for _ in 0..3 {
        assert_eq!(
            args.add_str_arg(&["c", "b"], "strings"),
            Err(FlagError::DuplicateAlias("b".to_string()))
        );
        assert_eq!(
            args.add_str_param(&["v"], "strings", "x"),
            Err(FlagError::DuplicateAlias("v".to_string()))
        );
    }
    assert!(!args.has_alias("c"));
    assert_eq!(args.required().len(), 1);
    assert_eq!(args.parameters().len(), 1);
}

#[test]
fn invalid_alias_names_are_rejected() {
    let mut args = ArgumentSet::new();
    for bad in ["", "9lives", "-x", "has space", "semi;colon"] {
        assert_eq!(
            args.add_bool_arg(&[bad], "bad"),
            Err(FlagError::InvalidAliasName(bad.to_string()))
        );
    }
    assert!(args.required().is_empty());
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn later_alias_overwrites_earlier_alias() {
    let mut registry = registry_with_all_types();
    registry.parse(&["-a", "1", "--b=2"]);
    assert_eq!(registry.get_int("a").unwrap(), 2);
    assert_eq!(registry.get_int("b").unwrap(), 2);
}

#[test]
fn bare_boolean_at_end_of_input_is_true() {
    let mut registry = registry_with_all_types();
    registry.parse(&["--v"]);
    assert!(registry.get_bool("v").unwrap());
}

#[test]
fn boolean_inline_values() {
    let mut registry = registry_with_all_types();
    registry.parse(&["--v=false"]);
    assert!(!registry.get_bool("v").unwrap());

    let mut registry = registry_with_all_types();
    registry.parse(&["--v=yes"]);
    assert!(registry.get_bool("verbose").unwrap());
}

#[test]
fn non_numeric_integer_is_left_unset_and_scan_continues() {
    let mut registry = registry_with_all_types();
    let report = registry.parse(&["-a", "notanumber", "--name", "kept", "-r=0.5"]);

    assert_eq!(
        registry.get_int("a"),
        Err(FlagError::KeyNotFound("a".to_string()))
    );
    assert_eq!(registry.get_str("n").unwrap(), "kept");
    assert!((registry.get_float("q").unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(
        report.diagnostics,
        vec![ParseDiagnostic::InvalidValue {
            label: "a".to_string(),
            value: "notanumber".to_string(),
            expected: ValueType::Integer,
        }]
    );
}

#[test]
fn repeated_parse_calls_keep_last_write() {
    let mut registry = registry_with_all_types();
    registry.parse(&["--name=first"]);
    registry.parse(&["-v=false"]);
    assert_eq!(registry.get_str("name").unwrap(), "first");
    registry.parse(&["-n", "second"]);
    assert_eq!(registry.get_str("name").unwrap(), "second");
    assert!(!registry.get_bool("verbose").unwrap());
}

#[test]
fn round_trip_every_type_through_every_alias() {
    let mut args = ArgumentSet::new();
    args.add_int_arg(&["count", "c"], "count").unwrap();
    args.add_float_param(&["ratio", "r"], "ratio", 1.0).unwrap();
    args.add_str_param(&["label", "l"], "label", "none").unwrap();
    args.add_bool_arg(&["dry-run", "d"], "dry run").unwrap();

    let report = args.parse(&[
        "--count", "42", "-r=6.5", "--l", "release_v2", "-dry-run=true",
    ]);
    assert!(report.is_clean(), "{report:?}");

    for alias in ["count", "c"] {
        assert_eq!(args.get_int(alias).unwrap(), 42);
    }
    for alias in ["ratio", "r"] {
        assert!((args.get_float(alias).unwrap() - 6.5).abs() < 1e-9);
    }
    for alias in ["label", "l"] {
        assert_eq!(args.get_str(alias).unwrap(), "release_v2");
    }
    for alias in ["dry-run", "d"] {
        assert!(args.get_bool(alias).unwrap());
    }
}

#[test]
fn positional_tokens_are_ignored() {
    let mut args = ArgumentSet::new();
    args.add_str_arg(&["s"], "string").unwrap();
    let report = args.parse(&["loose", "words", "-s", "value", "trailing"]);
    assert!(report.is_clean());
    assert_eq!(args.get_str("s").unwrap(), "value");
}
