use crate::constants::defaults;
use crate::error::*;
use crate::markup::OutputType;

// Absorbs the rounding error of products such as 25 * 0.28 = 7.000000000000001
const BOLD_LEN_TOLERANCE: f64 = 1e-9;

/// Validated parameters of a transformation.
///
/// Can only be built through [`TransformOptions::new`], so a value of this type
/// always carries a bold percentage inside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOptions {
    frequency: u64,
    bold_percentage: f64,
    output_type: OutputType,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            frequency: defaults::FREQUENCY,
            bold_percentage: defaults::BOLD_PERCENTAGE,
            output_type: OutputType::default(),
        }
    }
}

impl TransformOptions {
    /// Creates the options after validating the bold percentage.
    ///
    /// # Arguments
    /// * `frequency` - Every `frequency`-th word is emphasized (0 disables emphasis)
    /// * `bold_percentage` - Fraction of each selected word to emphasize, in `[0, 1]`
    /// * `output_type` - Target encoding
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` when the percentage is out of range or NaN.
    pub fn new(frequency: u64, bold_percentage: f64, output_type: OutputType) -> Result<Self> {
        if !(0.0..=1.0).contains(&bold_percentage) {
            return Err(Error::InvalidArgument(format!(
                "bold percentage has to be in range [0,1], got {}",
                bold_percentage
            )));
        }
        Ok(Self {
            frequency,
            bold_percentage,
            output_type,
        })
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn bold_percentage(&self) -> f64 {
        self.bold_percentage
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// Whether the word at `word_index` (0-based) is selected for emphasis
    pub fn is_selected(&self, word_index: u64) -> bool {
        self.frequency != 0 && word_index % self.frequency == 0
    }

    /// Number of leading graphemes to emphasize in a word of `grapheme_count` graphemes,
    /// `grapheme_count * bold_percentage` rounded up.
    ///
    /// # Examples
    ///
    /// ```
    /// use notbr::markup::OutputType;
    /// use notbr::options::TransformOptions;
    ///
    /// let options = TransformOptions::new(1, 0.5, OutputType::Html).unwrap();
    /// assert_eq!(options.bold_len(5), 3);
    /// assert_eq!(options.bold_len(2), 1);
    /// assert_eq!(options.bold_len(0), 0);
    /// ```
    pub fn bold_len(&self, grapheme_count: usize) -> usize {
        let exact = grapheme_count as f64 * self.bold_percentage;
        let len = (exact - BOLD_LEN_TOLERANCE).ceil() as usize;
        len.min(grapheme_count)
    }
}

/// Normalizes a bold percentage given either as a fraction or as a percent.
///
/// Values in `[0, 1]` are fractions, values in `(1, 100]` are percents.
///
/// # Errors
/// Returns `Error::InvalidArgument` for negative values, values above 100 and NaN.
pub fn normalize_percentage(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else if value > 1.0 && value <= 100.0 {
        Ok(value / 100.0)
    } else {
        Err(Error::InvalidArgument(format!(
            "bold percentage has to be in range [0,1] or (1,100], got {}",
            value
        )))
    }
}

/// Parses a bold percentage such as `"0.5"`, `"50"` or `"50%"`.
///
/// A trailing `%` always means percent, so `"1%"` is `0.01`.
///
/// # Examples
///
/// ```
/// use notbr::options::parse_percentage;
///
/// assert_eq!(parse_percentage("0.25").unwrap(), 0.25);
/// assert_eq!(parse_percentage("25").unwrap(), 0.25);
/// assert_eq!(parse_percentage("25%").unwrap(), 0.25);
/// assert!(parse_percentage("-1").is_err());
/// ```
pub fn parse_percentage(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let (number, is_percent) = match trimmed.strip_suffix('%') {
        Some(number) => (number.trim_end(), true),
        None => (trimmed, false),
    };
    let parsed = number.parse::<f64>().map_err(|e| {
        Error::InvalidArgument(format!("invalid bold percentage \"{}\" ({})", value, e))
    })?;

    if is_percent {
        if (0.0..=100.0).contains(&parsed) {
            Ok(parsed / 100.0)
        } else {
            Err(Error::InvalidArgument(format!(
                "bold percentage has to be in range [0%,100%], got {}",
                value
            )))
        }
    } else {
        normalize_percentage(parsed)
    }
}
