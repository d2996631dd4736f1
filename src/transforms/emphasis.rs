use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::markup::OutputType;
use crate::options::TransformOptions;
use crate::transforms::Transform;

/// Emphasizes the leading graphemes of every selected word.
///
/// The text is split at Unicode word boundaries. Segments holding at least one
/// Unicode word are counted from 0 and the ones matching the frequency are
/// selected; whitespace and punctuation segments are copied (escaped) as is and
/// do not advance the count. The text is sanitized for the output type first
/// and every character goes through its escaping before markers are inserted.
pub struct Emphasizer {
    options: TransformOptions,
}

impl Emphasizer {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Emphasizes the given text
    ///
    /// # Arguments
    /// * `text` - The raw text
    ///
    /// # Returns
    /// The escaped text with the selected words emphasized
    pub fn emphasize(&self, text: &str) -> String {
        let output_type = self.options.output_type();
        let text = output_type.sanitize(text);
        let mut result = String::with_capacity(text.len() + text.len() / 2);
        let mut word_index: u64 = 0;

        for segment in text.split_word_bounds() {
            if !is_word(segment) {
                result.push_str(&output_type.escape(segment));
                continue;
            }

            if self.options.is_selected(word_index) {
                self.emphasize_word(segment, &mut result);
            } else {
                result.push_str(&output_type.escape(segment));
            }
            word_index += 1;
        }

        output_type.escape_line_starts(result)
    }

    fn emphasize_word(&self, word: &str, result: &mut String) {
        let output_type = self.options.output_type();
        let graphemes = word.graphemes(true).collect::<Vec<&str>>();
        let mut bold_len = self.options.bold_len(graphemes.len());

        // A closing `**` between punctuation and a letter does not close the run
        if output_type == OutputType::Markdown {
            while bold_len > 0 && !is_alphanumeric(graphemes[bold_len - 1]) {
                bold_len -= 1;
            }
        }

        if bold_len == 0 {
            result.push_str(&output_type.escape(word));
            return;
        }

        let (head, tail) = graphemes.split_at(bold_len);
        result.push_str(output_type.open_tag());
        result.push_str(&output_type.escape(&head.concat()));
        result.push_str(output_type.close_tag());
        result.push_str(&output_type.escape(&tail.concat()));
    }
}

fn is_word(segment: &str) -> bool {
    segment.unicode_words().next().is_some()
}

fn is_alphanumeric(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(char::is_alphanumeric)
}

impl Transform for Emphasizer {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(self.emphasize(text))
    }
}
