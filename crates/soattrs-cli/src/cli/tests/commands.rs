//! Tests for origin, suffix and completions parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_origin_many() {
    match parse(&["soattrs", "origin", "https://a.test", "https://b.test^userContextId=1"]) {
        CliCommand::Origin { origins } => {
            assert_eq!(origins, vec!["https://a.test", "https://b.test^userContextId=1"])
        }
        _ => panic!("expected Origin"),
    }
}

#[test]
fn cli_parse_origin_stdin() {
    match parse(&["soattrs", "origin"]) {
        CliCommand::Origin { origins } => assert!(origins.is_empty()),
        _ => panic!("expected Origin"),
    }
}

#[test]
fn cli_parse_suffix() {
    match parse(&["soattrs", "suffix", "^userContextId=2&inBrowser=1"]) {
        CliCommand::Suffix { suffix } => assert_eq!(suffix, "^userContextId=2&inBrowser=1"),
        _ => panic!("expected Suffix"),
    }
}

#[test]
fn cli_parse_empty_suffix() {
    match parse(&["soattrs", "suffix", ""]) {
        CliCommand::Suffix { suffix } => assert!(suffix.is_empty()),
        _ => panic!("expected Suffix"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["soattrs", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_suffix_requires_argument() {
    assert!(Cli::try_parse_from(["soattrs", "suffix"]).is_err());
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["soattrs", "serialize"]).is_err());
}
