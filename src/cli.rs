//! Command-line interface for sentiment-hue.
//!
//! Handles CLI argument parsing and rendering resolved colors to stdout or a file.

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::Level;

use crate::config::{CliOverrides, Config};
use crate::errors::{CliError, Result};
use crate::swatch::{self, SwatchFormat};

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Svg,
    Text,
}

impl From<OutputFormat> for SwatchFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => SwatchFormat::Json,
            OutputFormat::Svg => SwatchFormat::Svg,
            OutputFormat::Text => SwatchFormat::Text,
        }
    }
}

/// Command-line arguments for sentiment-hue.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sentiment labels to resolve (e.g. `positive`, `NEGATIVE`, `neutral`).
    pub labels: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered swatch to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Start the HTTP server.
    #[arg(
        short,
        long,
        value_name = "HOST:PORT",
        num_args = 0..=1,
        require_equals = false
    )]
    pub server: Option<Option<String>>,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", default_value_t = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })]
    pub log_level: Level,

    /// Host to bind the server to (defaults to 127.0.0.1).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to use for the server (defaults to 8080).
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Configuration overrides carried by these arguments
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides::from_cli_args(self.host, self.port)
    }
}

/// Renders every label, one per line.
pub fn render_labels(labels: &[String], format: SwatchFormat, config: &Config) -> Result<String> {
    if labels.is_empty() {
        return Err(CliError::NoLabels.into());
    }

    let rendered = labels
        .iter()
        .map(|label| swatch::render(label, format, config.swatch_config()))
        .collect::<Result<Vec<_>>>()?;

    Ok(rendered.join("\n"))
}

/// Executes the CLI command to resolve and render labels.
///
/// # Errors
/// Fails when no labels are given, when `--output` is combined with more
/// than one label, or when the output cannot be written.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    if cli.output.is_some() && cli.labels.len() != 1 {
        return Err(CliError::OutputRequiresSingleLabel(cli.labels.len()).into());
    }

    let start_time = std::time::Instant::now();
    let rendered = render_labels(&cli.labels, cli.format.into(), config)?;

    tracing::debug!(
        labels = cli.labels.len(),
        format = ?cli.format,
        duration = ?start_time.elapsed(),
        "Rendered labels"
    );

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            tracing::info!("Successfully wrote {}.", path.to_string_lossy());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
        }
    }

    Ok(())
}
