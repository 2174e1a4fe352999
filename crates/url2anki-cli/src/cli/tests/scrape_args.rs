//! Tests for the default scrape flags and request building.

use super::{env_lock, parse};
use crate::cli::commands::build_request;
use crate::cli::Cli;
use clap::Parser;
use std::path::PathBuf;
use url2anki_core::config::Url2AnkiConfig;

const URL: &str = "https://kubernetes.io/docs/reference/glossary/?all=true";

#[test]
fn cli_parse_short_flags() {
    let cli = parse(&[
        "url2anki", "-u", URL, "-q", "div.term-name", "-a", "div.term-definition", "-o",
        "k8s.json", "-p",
    ]);
    assert!(cli.command.is_none());
    assert_eq!(cli.scrape.url.as_deref(), Some(URL));
    assert_eq!(cli.scrape.question_selector.as_deref(), Some("div.term-name"));
    assert_eq!(cli.scrape.answer_selector.as_deref(), Some("div.term-definition"));
    assert_eq!(cli.scrape.output_file, Some(PathBuf::from("k8s.json")));
    assert_eq!(cli.scrape.preview, Some(true));
}

#[test]
fn cli_parse_long_flags() {
    let _env = env_lock();
    let cli = parse(&[
        "url2anki",
        "--url",
        URL,
        "--question-selector",
        "dt",
        "--answer-selector",
        "dd",
        "--debug",
    ]);
    assert_eq!(cli.debug, Some(true));
    assert!(cli.scrape.preview.is_none());
    assert!(cli.scrape.output_file.is_none());
}

#[test]
fn cli_requires_url_and_selectors() {
    assert!(Cli::try_parse_from(["url2anki", "-q", "dt", "-a", "dd"]).is_err());
    assert!(Cli::try_parse_from(["url2anki", "-u", URL, "-a", "dd"]).is_err());
    assert!(Cli::try_parse_from(["url2anki", "-u", URL, "-q", "dt"]).is_err());
}

#[test]
fn cli_rejects_relative_url() {
    let err = Cli::try_parse_from(["url2anki", "-u", "glossary.html", "-q", "dt", "-a", "dd"])
        .unwrap_err();
    assert!(err.to_string().contains("invalid URL"));
    let no_host = ["url2anki", "-u", "mailto:me@example.com", "-q", "dt", "-a", "dd"];
    assert!(Cli::try_parse_from(no_host).is_err());
}

#[test]
fn build_request_uses_config_defaults() {
    let _env = env_lock();
    let cli = parse(&["url2anki", "-u", URL, "-q", "dt", "-a", "dd"]);
    let cfg = Url2AnkiConfig {
        output_file: PathBuf::from("from-config.csv"),
        preview: true,
        debug: false,
    };
    let req = build_request(cli.scrape, &cfg).unwrap();
    assert_eq!(req.output_file, PathBuf::from("from-config.csv"));
    assert!(req.preview);
    assert_eq!(req.question_selector, "dt");
}

#[test]
fn build_request_flags_override_config() {
    let _env = env_lock();
    let cli = parse(&["url2anki", "-u", URL, "-q", "dt", "-a", "dd", "-o", "deck.json"]);
    let req = build_request(cli.scrape, &Url2AnkiConfig::default()).unwrap();
    assert_eq!(req.output_file, PathBuf::from("deck.json"));
    assert!(!req.preview);
    assert_eq!(req.url, URL);
}

#[test]
fn cli_parse_explicit_false() {
    let cli = parse(&[
        "url2anki",
        "-u",
        URL,
        "-q",
        "dt",
        "-a",
        "dd",
        "--preview=false",
        "--debug=false",
    ]);
    assert_eq!(cli.scrape.preview, Some(false));
    assert_eq!(cli.debug, Some(false));
}

#[test]
fn build_request_flag_false_beats_config_true() {
    let cli = parse(&["url2anki", "-u", URL, "-q", "dt", "-a", "dd", "--preview=false"]);
    let cfg = Url2AnkiConfig {
        preview: true,
        ..Url2AnkiConfig::default()
    };
    let req = build_request(cli.scrape, &cfg).unwrap();
    assert!(!req.preview);
}

#[test]
fn build_request_env_false_beats_config_true() {
    let _env = env_lock();
    std::env::set_var("URL2ANKI_PREVIEW", "false");
    let parsed = Cli::try_parse_from(["url2anki", "-u", URL, "-q", "dt", "-a", "dd"]);
    std::env::remove_var("URL2ANKI_PREVIEW");

    let cfg = Url2AnkiConfig {
        preview: true,
        ..Url2AnkiConfig::default()
    };
    let req = build_request(parsed.unwrap().scrape, &cfg).unwrap();
    assert!(!req.preview);
}

#[test]
fn build_request_flag_beats_env() {
    let _env = env_lock();
    std::env::set_var("URL2ANKI_PREVIEW", "false");
    let parsed = Cli::try_parse_from(["url2anki", "-u", URL, "-q", "dt", "-a", "dd", "-p"]);
    std::env::remove_var("URL2ANKI_PREVIEW");

    let req = build_request(parsed.unwrap().scrape, &Url2AnkiConfig::default()).unwrap();
    assert!(req.preview);
}
