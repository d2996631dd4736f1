use crate::error::Result;
use crate::transforms::Transform;

/// Handles the trailing line ending of the output
pub struct LineHandler {
    skip_newline: bool,
}

impl LineHandler {
    pub fn new(skip_newline: bool) -> Self {
        Self { skip_newline }
    }
}

/// Ensures the output ends with a single newline unless skipping was requested.
/// Text already ending with a newline (e.g. read from a file) is left untouched.
impl Transform for LineHandler {
    fn transform(&self, text: &str) -> Result<String> {
        if self.skip_newline || text.is_empty() || text.ends_with('\n') {
            Ok(text.to_string())
        } else {
            Ok(format!("{}\n", text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_newline() {
        let handler = LineHandler::new(false);
        assert_eq!(handler.transform("text").unwrap(), "text\n");
        assert_eq!(handler.transform("text\n").unwrap(), "text\n");
        assert_eq!(handler.transform("").unwrap(), "");
    }

    #[test]
    fn test_skip_newline() {
        let handler = LineHandler::new(true);
        assert_eq!(handler.transform("text").unwrap(), "text");
        assert_eq!(handler.transform("text\n").unwrap(), "text\n");
    }
}
