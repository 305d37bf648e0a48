//! Unit tests for the document store.
//!
//! Everything here goes through `from_toml_str` and in-memory mutation;
//! filesystem behavior is covered by the integration suite.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::path::Path;

use toml::Value;

use crate::{TomlsetError, document::Document};

fn parse(content: &str) -> Document {
    Document::from_toml_str(content, Path::new("test.toml")).unwrap()
}

#[test]
fn empty_input_yields_empty_document() {
    let doc = parse("");

    assert!(doc.top_level().is_empty());
    assert_eq!(doc, Document::default());
}

#[test]
fn invalid_toml_is_a_decode_error() {
    let result = Document::from_toml_str("[broken\nkey = ", Path::new("bad.toml"));

    match result {
        Err(TomlsetError::Decode { path, .. }) => {
            assert_eq!(path, Path::new("bad.toml"));
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[test]
fn get_section_does_not_create() {
    let doc = parse("top = \"level\"");

    assert!(doc.get_section("missing").is_none());
    assert!(!doc.has_section("missing"));
}

#[test]
fn scalar_entry_is_not_a_section() {
    let doc = parse("drinks = \"lemonade\"");

    assert!(doc.get_section("drinks").is_none());
    assert!(!doc.has_section("drinks"));
}

#[test]
fn ensure_section_creates_once() {
    let mut doc = parse("");

    doc.ensure_section("drinks");
    assert!(doc.has_section("drinks"));

    doc.ensure_section("drinks")
        .insert("fav".to_string(), Value::String("lemonade".to_string()));

    let section = doc.get_section("drinks").unwrap();
    assert_eq!(section.get("fav").and_then(Value::as_str), Some("lemonade"));
}

#[test]
fn ensure_section_replaces_scalar_entry() {
    let mut doc = parse("drinks = \"lemonade\"");

    let section = doc.ensure_section("drinks");
    assert!(section.is_empty());
    assert!(doc.has_section("drinks"));
}

#[test]
fn remove_section_reports_presence() {
    let mut doc = parse("[drinks]\nfav = \"lemonade\"");

    assert!(doc.remove_section("drinks"));
    assert!(!doc.has_section("drinks"));
    assert!(!doc.remove_section("drinks"));
}

#[test]
fn serialization_round_trips_own_mutations() {
    let mut doc = parse("");
    doc.ensure_section("drinks")
        .insert("fav".to_string(), Value::String("lemonade".to_string()));
    doc.top_level_mut()
        .insert("title".to_string(), Value::String("menu".to_string()));

    let rendered = doc.to_toml_string(Path::new("test.toml")).unwrap();
    let reloaded = parse(&rendered);

    assert_eq!(doc, reloaded);
}

#[test]
fn serialization_preserves_untouched_value_types() {
    let mut doc = parse("[database]\nport = 8080\nenabled = true");
    doc.ensure_section("database")
        .insert("host".to_string(), Value::String("localhost".to_string()));

    let rendered = doc.to_toml_string(Path::new("test.toml")).unwrap();
    let reloaded = parse(&rendered);

    let section = reloaded.get_section("database").unwrap();
    assert_eq!(section.get("port").and_then(Value::as_integer), Some(8080));
    assert_eq!(section.get("enabled").and_then(Value::as_bool), Some(true));
}
