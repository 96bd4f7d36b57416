//! Rendering of resolved sentiment colors.
//!
//! A swatch is the resolved color presented in one of a few output formats:
//! a JSON report, a plain text line, or an SVG tile for embedding in a UI.

use serde::Serialize;

use crate::colors::Sentiment;
use crate::config::SwatchConfig;
use crate::errors::Result;

/// Supported swatch output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchFormat {
    #[default]
    Json,
    Svg,
    Text,
}

impl SwatchFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            SwatchFormat::Json => "application/json",
            SwatchFormat::Svg => "image/svg+xml",
            SwatchFormat::Text => "text/plain; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SwatchFormat::Json => "json",
            SwatchFormat::Svg => "svg",
            SwatchFormat::Text => "txt",
        }
    }

    /// Parses a file extension to determine the swatch format.
    ///
    /// # Returns
    /// Some(SwatchFormat) if the extension is supported, None otherwise
    pub fn parse_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(SwatchFormat::Json),
            "svg" => Some(SwatchFormat::Svg),
            "txt" | "text" => Some(SwatchFormat::Text),
            _ => None,
        }
    }
}

/// A resolved label, as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchReport {
    /// The label exactly as it was given
    pub label: String,
    pub sentiment: Sentiment,
    pub color: &'static str,
}

impl SwatchReport {
    pub fn new(label: &str) -> Self {
        let sentiment = Sentiment::classify(label);
        Self {
            label: label.to_string(),
            sentiment,
            color: sentiment.color(),
        }
    }
}

/// Escapes text for use inside SVG attributes and text nodes.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_svg_template(report: &SwatchReport, config: &SwatchConfig) -> String {
    let svg_template = include_str!("../swatch.svg");

    svg_template
        .replace("{{width}}", &config.width.to_string())
        .replace("{{height}}", &config.height.to_string())
        .replace("{{color}}", report.color)
        // Label last so user text is never treated as a placeholder
        .replace("{{label}}", &escape_xml(&report.label))
}

/// Renders the swatch for a label in the requested format.
///
/// # Errors
/// Only JSON serialization can fail.
pub fn render(label: &str, format: SwatchFormat, config: &SwatchConfig) -> Result<String> {
    let report = SwatchReport::new(label);

    let rendered = match format {
        SwatchFormat::Json => serde_json::to_string(&report)?,
        SwatchFormat::Text => format!("{}\t{}", report.label, report.color),
        SwatchFormat::Svg => format_svg_template(&report, config),
    };

    Ok(rendered)
}
