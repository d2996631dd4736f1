use std::borrow::Cow;
use std::str::FromStr;

use console::strip_ansi_codes;
use nu_ansi_term::Style;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use strum_macros::Display;

use crate::constants::markers;
use crate::error::*;

// CommonMark allows a backslash escape for any ASCII punctuation, only the
// characters able to open or close inline markup are escaped.
static MARKDOWN_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\`*_\[\]<>#~|]").unwrap());

// Markers opening a list item or closing a setext heading at the start of a line
static MARKDOWN_LINE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)([-+=]|\d{1,9}[.)])([ \t=\-]|$)").unwrap());

static ANSI_OPEN: Lazy<String> = Lazy::new(|| Style::new().bold().prefix().to_string());
static ANSI_CLOSE: Lazy<String> = Lazy::new(|| Style::new().bold().suffix().to_string());

/// Target encoding of the transformed text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Display)]
pub enum OutputType {
    #[default]
    #[strum(serialize = "html")]
    #[serde(rename = "html", alias = "HTML")]
    Html,
    #[strum(serialize = "markdown")]
    #[serde(rename = "markdown", alias = "Markdown", alias = "md")]
    Markdown,
    #[strum(serialize = "ansi")]
    #[serde(rename = "ansi", alias = "ANSI", alias = "terminal")]
    Ansi,
}

impl OutputType {
    /// Tag names accepted on the command line
    pub const VARIANTS: [&'static str; 5] = ["html", "markdown", "md", "ansi", "terminal"];

    /// Marker opening an emphasized run
    pub fn open_tag(&self) -> &'static str {
        match self {
            OutputType::Html => markers::HTML_OPEN,
            OutputType::Markdown => markers::MARKDOWN_OPEN,
            OutputType::Ansi => ANSI_OPEN.as_str(),
        }
    }

    /// Marker closing an emphasized run
    pub fn close_tag(&self) -> &'static str {
        match self {
            OutputType::Html => markers::HTML_CLOSE,
            OutputType::Markdown => markers::MARKDOWN_CLOSE,
            OutputType::Ansi => ANSI_CLOSE.as_str(),
        }
    }

    /// Removes multi-character sequences of this encoding that word segmentation
    /// would split apart. Must run on the whole text before it is segmented.
    ///
    /// # Examples
    ///
    /// ```
    /// use notbr::markup::OutputType;
    ///
    /// assert_eq!(OutputType::Ansi.sanitize("\x1b[31mred\x1b[0m"), "red");
    /// assert_eq!(OutputType::Html.sanitize("\x1b[31mred"), "\x1b[31mred");
    /// ```
    pub fn sanitize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            OutputType::Ansi => strip_ansi_codes(text),
            OutputType::Html | OutputType::Markdown => Cow::Borrowed(text),
        }
    }

    /// Escapes every character of `text` that is significant to this encoding.
    ///
    /// Input without such characters is returned borrowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use notbr::markup::OutputType;
    ///
    /// assert_eq!(OutputType::Html.escape("a < b & c"), "a &lt; b &amp; c");
    /// assert_eq!(OutputType::Markdown.escape("2*3"), "2\\*3");
    /// assert_eq!(OutputType::Ansi.escape("a\x1bb"), "ab");
    /// ```
    pub fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            OutputType::Html => escape_html(text),
            OutputType::Markdown => MARKDOWN_SPECIAL.replace_all(text, r"\$0"),
            OutputType::Ansi => escape_ansi(text),
        }
    }

    /// Escapes the block markers left at the start of a line once the whole
    /// text has been emphasized. Only Markdown has such markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use notbr::markup::OutputType;
    ///
    /// let text = "- item\n2) next".to_string();
    /// assert_eq!(OutputType::Markdown.escape_line_starts(text.clone()), "\\- item\n2\\) next");
    /// assert_eq!(OutputType::Html.escape_line_starts(text.clone()), text);
    /// ```
    pub fn escape_line_starts(&self, text: String) -> String {
        match self {
            OutputType::Markdown if MARKDOWN_LINE_START.is_match(&text) => MARKDOWN_LINE_START
                .replace_all(&text, |caps: &Captures| {
                    let (digits, marker) = caps[2].split_at(caps[2].len() - 1);
                    format!("{}{}\\{}{}", &caps[1], digits, marker, &caps[3])
                })
                .into_owned(),
            _ => text,
        }
    }
}

impl FromStr for OutputType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputType::Html),
            "markdown" | "md" => Ok(OutputType::Markdown),
            "ansi" | "terminal" => Ok(OutputType::Ansi),
            _ => Err(Error::InvalidArgument(format!(
                "unknown output type \"{}\" (expected one of: {})",
                s,
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn escape_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('\x1b', ""))
}
