use super::{Emphasizer, LineHandler, Transform};
use crate::error::Result;
use crate::options::TransformOptions;
use std::collections::HashMap;
use std::sync::Arc;

pub struct TransformRegistry {
    transforms: HashMap<String, Arc<Box<dyn Transform>>>,
    order: Vec<Arc<Box<dyn Transform>>>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a registry with the default transforms
    /// - Emphasizer: Escapes the text and emphasizes the selected words
    /// - LineHandler: Handles the trailing line ending
    pub fn with_options(options: TransformOptions, skip_newline: bool) -> Self {
        let mut registry = Self::new();
        registry.register("emphasizer", Emphasizer::new(options));
        registry.register("line_handler", LineHandler::new(skip_newline));
        registry
    }

    pub fn register<T: Transform + 'static>(&mut self, name: &str, transform: T) {
        let boxed = Arc::new(Box::new(transform) as Box<dyn Transform>);
        if let Some(previous) = self.transforms.insert(name.to_string(), Arc::clone(&boxed)) {
            self.order.retain(|t| !Arc::ptr_eq(t, &previous));
        }
        self.order.push(boxed);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Box<dyn Transform>>> {
        self.transforms.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Process the text through all registered transforms in sequence
    ///
    /// # Arguments
    /// * `text` - The text to process
    ///
    /// # Returns
    /// The processed text after applying all transforms or an error if any transform fails
    pub fn process(&self, text: &str) -> Result<String> {
        self.order
            .iter()
            .try_fold(text.to_string(), |acc, transform| transform.transform(&acc))
    }
}
