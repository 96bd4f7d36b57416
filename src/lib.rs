//! sentiment-hue - Resolve sentiment labels to display colors.
//!
//! The core is [`colors::resolve_color`], a total, case-insensitive lookup.
//! A command-line tool and HTTP server render the result as JSON, text or SVG.

pub mod colors;
pub mod config;
pub mod errors;
pub mod swatch;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

pub use colors::{resolve_color, Sentiment};
