//! Tests for fetch, normalize and variant subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_fetch() {
    match parse(&["wxr", "fetch", "42"]) {
        CliCommand::Fetch { id } => assert_eq!(id, 42),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_fetch_rejects_negative_id() {
    assert!(Cli::try_parse_from(["wxr", "fetch", "-3"]).is_err());
    assert!(Cli::try_parse_from(["wxr", "fetch", "abc"]).is_err());
}

#[test]
fn cli_parse_normalize() {
    match parse(&["wxr", "normalize", "//cdn.example.com/e.xml"]) {
        CliCommand::Normalize { value } => assert_eq!(value, "//cdn.example.com/e.xml"),
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_variant_show() {
    match parse(&["wxr", "variant"]) {
        CliCommand::Variant { value } => assert!(value.is_none()),
        _ => panic!("expected Variant"),
    }
}

#[test]
fn cli_parse_variant_set() {
    match parse(&["wxr", "variant", "ai"]) {
        CliCommand::Variant { value } => assert_eq!(value.as_deref(), Some("ai")),
        _ => panic!("expected Variant with value"),
    }
}
