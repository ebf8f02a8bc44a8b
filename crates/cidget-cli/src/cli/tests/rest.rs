//! Tests for url and checksum.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_url() {
    match parse(&["cidget", "url", "QmFoo"]) {
        CliCommand::Url { cid, gateway } => {
            assert_eq!(cid, "QmFoo");
            assert!(gateway.is_none());
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_gateway() {
    match parse(&["cidget", "url", "QmFoo", "--gateway", "http://127.0.0.1:8081"]) {
        CliCommand::Url { cid, gateway } => {
            assert_eq!(cid, "QmFoo");
            assert_eq!(gateway.as_deref(), Some("http://127.0.0.1:8081"));
        }
        _ => panic!("expected Url with --gateway"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["cidget", "checksum", "downloaded_QmFoo.txt"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, Path::new("downloaded_QmFoo.txt"));
        }
        _ => panic!("expected Checksum"),
    }
}
