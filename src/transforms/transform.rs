use crate::error::Result;

/// Trait for text transformations in the processing chain
///
/// Each transform is responsible for a specific aspect of text processing, such as:
/// - Emphasizing the leading part of words
/// - Line ending handling
///
/// # Examples
///
/// ```
/// use notbr::markup::OutputType;
/// use notbr::options::TransformOptions;
/// use notbr::transforms::{Emphasizer, Transform};
///
/// let options = TransformOptions::new(1, 0.5, OutputType::Markdown).unwrap();
/// let emphasizer = Emphasizer::new(options);
/// assert_eq!(emphasizer.transform("Hello").unwrap(), "**Hel**lo");
/// ```
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text or an error if transformation fails
    fn transform(&self, text: &str) -> Result<String>;
}
