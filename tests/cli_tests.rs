#![cfg(feature = "cli")]

use clap::Parser;
use sentiment_hue::cli::{render_labels, run, Cli, OutputFormat};
use sentiment_hue::config::Config;
use sentiment_hue::errors::{CliError, SentimentHueError};
use sentiment_hue::swatch::SwatchFormat;
use tempfile::tempdir;

#[test]
fn test_cli_parses_labels_and_format() {
    let cli = Cli::parse_from(["sentiment-hue", "positive", "NEGATIVE", "-f", "json"]);

    assert_eq!(cli.labels, vec!["positive", "NEGATIVE"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.server.is_none());
}

#[test]
fn test_cli_server_flag_with_and_without_address() {
    let cli = Cli::parse_from(["sentiment-hue", "--server"]);
    assert_eq!(cli.server, Some(None));

    let cli = Cli::parse_from(["sentiment-hue", "--server", "0.0.0.0:3000"]);
    assert_eq!(cli.server, Some(Some("0.0.0.0:3000".to_string())));
}

#[test]
fn test_cli_overrides() {
    let cli = Cli::parse_from(["sentiment-hue", "--host", "::1", "-p", "9090"]);
    let overrides = cli.overrides();

    assert_eq!(overrides.host, Some("::1".parse().unwrap()));
    assert_eq!(overrides.port, Some(9090));
}

#[test]
fn test_render_labels_text() {
    let labels = vec![
        "positive".to_string(),
        "NEGATIVE".to_string(),
        "Neutral".to_string(),
    ];
    let rendered = render_labels(&labels, SwatchFormat::Text, &Config::default()).unwrap();

    assert_eq!(
        rendered,
        "positive\t#B0F0B9\nNEGATIVE\t#C34244\nNeutral\t#F5BE6B"
    );
}

#[test]
fn test_render_labels_requires_labels() {
    let result = render_labels(&[], SwatchFormat::Text, &Config::default());
    assert!(matches!(
        result,
        Err(SentimentHueError::Cli(CliError::NoLabels))
    ));
}

#[test]
fn test_run_writes_output_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("swatch.svg");
    let cli = Cli::parse_from([
        "sentiment-hue",
        "Positive",
        "-f",
        "svg",
        "-o",
        path.to_str().unwrap(),
    ]);

    run(cli, &Config::default()).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains(r##"fill="#B0F0B9""##));
}

#[test]
fn test_run_rejects_output_with_many_labels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let cli = Cli::parse_from([
        "sentiment-hue",
        "positive",
        "negative",
        "-o",
        path.to_str().unwrap(),
    ]);

    let result = run(cli, &Config::default());
    assert!(matches!(
        result,
        Err(SentimentHueError::Cli(CliError::OutputRequiresSingleLabel(2)))
    ));
    assert!(!path.exists());
}
