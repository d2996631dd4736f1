//! `notbr` is a library to emphasize the leading letters of words, guiding the
//! eye through a text for faster reading.
//!
//! The main entry point of this crate is [`transform`], a pure function taking
//! the text, the selection frequency, the fraction of each word to emphasize and
//! the output encoding.
//!
//! If you need more control, the [`transforms`] module exposes the `Emphasizer`
//! as a composable `Transform` and the `TransformRegistry` chaining them, and
//! [`controller::Controller`] runs a whole read/transform/write cycle.
//!
//! "Hello world" example:
//! ```
//! use notbr::markup::OutputType;
//!
//! let html = notbr::transform("Hello <world>", 1, 0.5, OutputType::Html).unwrap();
//! assert_eq!(html, "<b>Hel</b>lo &lt;<b>wor</b>ld&gt;");
//!
//! let markdown = notbr::transform_str("Hello world", 2, 1.0, "md").unwrap();
//! assert_eq!(markdown, "**Hello** world");
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod log;
pub mod markup;
pub mod options;
pub mod reader;
pub mod transforms;
pub mod writer;

#[doc(hidden)]
pub use nu_ansi_term;

use crate::error::Result;
use crate::markup::OutputType;
use crate::options::TransformOptions;
use crate::transforms::Emphasizer;

/// Emphasizes the leading part of every `frequency`-th word of `text`.
///
/// Words are delimited by Unicode word boundaries; for each selected word the
/// first `ceil(graphemes * bold_percentage)` graphemes are wrapped in the
/// emphasis markers of `output_type`. A frequency of 0 selects no word. Every
/// character significant to the output encoding is escaped.
///
/// # Errors
/// Returns `Error::InvalidArgument` when `bold_percentage` is outside `[0, 1]`.
pub fn transform(
    text: &str,
    frequency: u64,
    bold_percentage: f64,
    output_type: OutputType,
) -> Result<String> {
    let options = TransformOptions::new(frequency, bold_percentage, output_type)?;
    Ok(Emphasizer::new(options).emphasize(text))
}

/// Same as [`transform`], with the output type given as a tag (`"HTML"`, `"md"`, ...).
///
/// # Errors
/// Returns `Error::InvalidArgument` for an unknown tag or an out of range percentage.
pub fn transform_str(
    text: &str,
    frequency: u64,
    bold_percentage: f64,
    output_type: &str,
) -> Result<String> {
    transform(text, frequency, bold_percentage, output_type.parse()?)
}

/// The notbr prelude
///
/// This module re-exports the most commonly used items from notbr.
/// You can use it with `use notbr::prelude::*;` to bring all common items into scope.
pub mod prelude {
    pub use crate::transforms::Transform;

    pub use crate::error::{Error, Result};
    pub use crate::markup::OutputType;
    pub use crate::options::TransformOptions;

    pub use crate::{transform, transform_str};
}
