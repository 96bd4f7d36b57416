//! Sentiment classification and the colors used to display it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::Serialize;

pub const POSITIVE_COLOR: &str = "#B0F0B9";
pub const NEGATIVE_COLOR: &str = "#C34244";
/// Color for neutral, unknown, empty or malformed labels.
pub const DEFAULT_COLOR: &str = "#F5BE6B";

/// Recognized labels, keyed by their lowercase form.
static LABELS: phf::Map<&'static str, Sentiment> = phf_map! {
    "positive" => Sentiment::Positive,
    "negative" => Sentiment::Negative,
};

/// Polarity of a sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    /// Anything that isn't a recognized label.
    Neutral,
}

impl Sentiment {
    /// Classifies a label, ignoring case. Never fails: unrecognized input is `Neutral`.
    pub fn classify(label: &str) -> Self {
        LABELS
            .get(label.to_lowercase().as_str())
            .copied()
            .unwrap_or(Sentiment::Neutral)
    }

    pub fn color(self) -> &'static str {
        match self {
            Sentiment::Positive => POSITIVE_COLOR,
            Sentiment::Negative => NEGATIVE_COLOR,
            Sentiment::Neutral => DEFAULT_COLOR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Sentiment::classify(s))
    }
}

/// Resolves a sentiment label to its hex color code.
///
/// Matching is case-insensitive. `"positive"` maps to `#B0F0B9`, `"negative"`
/// to `#C34244`, and every other string (including `""`) to `#F5BE6B`.
pub fn resolve_color(sentiment: &str) -> &'static str {
    Sentiment::classify(sentiment).color()
}

/// Looks up the color of a recognized label, returning `None` for anything else.
pub fn get_color(label: &str) -> Option<&'static str> {
    LABELS
        .get(label.to_lowercase().as_str())
        .map(|sentiment| sentiment.color())
}

pub fn count_labels() -> usize {
    LABELS.len()
}

/// Every sentiment with its color, in display order.
pub fn palette() -> [(Sentiment, &'static str); 3] {
    [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
    ]
    .map(|sentiment| (sentiment, sentiment.color()))
}
