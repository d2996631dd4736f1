use std::io::{stdin, Read};
use std::path::PathBuf;

use nu_ansi_term::Color::Yellow;

use crate::{error::*, log};

/// Where the text to transform comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Text given directly (e.g. as command line arguments)
    Inline(String),
    /// A file on disk
    File(PathBuf),
    /// The standard input
    Stdin,
}

pub struct InputReader {}

impl InputReader {
    /// Reads the whole input as UTF-8 text.
    ///
    /// # Arguments
    /// * `source` - The input source.
    ///
    /// # Errors
    /// Returns `Error::InputReadError` if the source cannot be read or is not valid UTF-8.
    ///
    /// # Examples
    /// ```
    /// use notbr::reader::{InputReader, InputSource};
    ///
    /// let temp_dir = tempfile::tempdir().unwrap();
    /// let path = temp_dir.path().join("input.txt");
    /// std::fs::write(&path, "Hello world\n").unwrap();
    ///
    /// let text = InputReader::read(&InputSource::File(path)).unwrap();
    /// assert_eq!(text, "Hello world\n");
    /// ```
    pub fn read(source: &InputSource) -> Result<String> {
        match source {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => InputReader::read_file(path),
            InputSource::Stdin => InputReader::read_from(stdin().lock(), "stdin"),
        }
    }

    /// Reads the whole content of any reader.
    ///
    /// # Arguments
    /// * `reader` - The reader to consume.
    /// * `name` - The name of the input used in error messages.
    pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| Error::InputReadError {
                file: name.to_string(),
                cause: e.to_string(),
            })?;
        Ok(content)
    }

    fn read_file(path: &PathBuf) -> Result<String> {
        let file = std::fs::File::open(path).map_err(|e| Error::InputReadError {
            file: path.to_string_lossy().to_string(),
            cause: log::debug_message(
                e.to_string(),
                Yellow
                    .paint(format!("\n[Input path] {}", path.to_string_lossy()))
                    .to_string(),
            ),
        })?;
        InputReader::read_from(file, &path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_inline() {
        let text = InputReader::read(&InputSource::Inline("inline text".to_string())).unwrap();
        assert_eq!(text, "inline text");
    }

    #[test]
    fn test_read_from_reader() {
        let text = InputReader::read_from("Büß du ja".as_bytes(), "bytes").unwrap();
        assert_eq!(text, "Büß du ja");
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: &[u8] = &[0x66, 0x6f, 0xff, 0x6f];
        let err = InputReader::read_from(bytes, "bytes").unwrap_err();
        assert!(matches!(err, Error::InputReadError { ref file, .. } if file == "bytes"));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let err = InputReader::read(&InputSource::File(path)).unwrap_err();
        assert!(matches!(err, Error::InputReadError { .. }));
    }
}
