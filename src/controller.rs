use std::path::PathBuf;

use crate::{
    debug,
    error::*,
    options::TransformOptions,
    reader::{InputReader, InputSource},
    transforms::TransformRegistry,
    writer::OutputWriter,
};

/// A single run of the tool: where to read, how to transform, where to write
#[derive(Debug, Clone)]
pub struct Request {
    pub input: InputSource,
    pub output: Option<PathBuf>,
    pub options: TransformOptions,
    pub skip_newline: bool,
    pub overwrite: bool,
}

pub struct Controller {
    registry: TransformRegistry,
}

/// Runs the read, transform and write cycle for a request.
impl Controller {
    pub fn new(options: TransformOptions, skip_newline: bool) -> Self {
        Self {
            registry: TransformRegistry::with_options(options, skip_newline),
        }
    }

    /// Transforms the given text through the registered transforms
    pub fn process(&self, text: &str) -> Result<String> {
        self.registry.process(text)
    }

    /// Runs the request end to end.
    ///
    /// # Returns
    /// The number of bytes written.
    ///
    /// # Examples
    /// ```
    /// use notbr::controller::{Controller, Request};
    /// use notbr::markup::OutputType;
    /// use notbr::options::TransformOptions;
    /// use notbr::reader::InputSource;
    ///
    /// let temp_dir = tempfile::tempdir().unwrap();
    /// let output = temp_dir.path().join("out.md");
    /// let request = Request {
    ///     input: InputSource::Inline("Lorem ipsum".to_string()),
    ///     output: Some(output.clone()),
    ///     options: TransformOptions::new(1, 0.5, OutputType::Markdown).unwrap(),
    ///     skip_newline: false,
    ///     overwrite: false,
    /// };
    ///
    /// Controller::run(&request).unwrap();
    /// assert_eq!(std::fs::read_to_string(output).unwrap(), "**Lor**em **ips**um\n");
    /// ```
    pub fn run(request: &Request) -> Result<usize> {
        let controller = Controller::new(request.options, request.skip_newline);

        debug!("Reading input from {:?}", request.input);
        let text = InputReader::read(&request.input)?;
        debug!("Read {} bytes, transforming with {:?}", text.len(), request.options);

        let output = controller.process(&text)?;

        debug!("Writing {} bytes to {:?}", output.len(), request.output);
        let mut sink = OutputWriter::open(request.output.as_deref(), request.overwrite)?;
        OutputWriter::write_all(&mut sink, &output)?;

        Ok(output.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::OutputType;

    fn request(input: InputSource, output: PathBuf, options: TransformOptions) -> Request {
        Request {
            input,
            output: Some(output),
            options,
            skip_newline: false,
            overwrite: false,
        }
    }

    #[test]
    fn test_process() {
        let options = TransformOptions::new(2, 1.0, OutputType::Html).unwrap();
        let controller = Controller::new(options, true);
        assert_eq!(
            controller.process("one two three").unwrap(),
            "<b>one</b> two <b>three</b>"
        );
    }

    #[test]
    fn test_run_file_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.html");
        std::fs::write(&input, "Lorem ipsum dolor.\n").unwrap();

        let options = TransformOptions::new(2, 0.5, OutputType::Html).unwrap();
        let written = Controller::run(&request(
            InputSource::File(input),
            output.clone(),
            options,
        ))
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "<b>Lor</b>em ipsum <b>dol</b>or.\n");
        assert_eq!(written, content.len());
    }

    #[test]
    fn test_run_refuses_existing_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("out.html");
        std::fs::write(&output, "keep").unwrap();

        let mut req = request(
            InputSource::Inline("text".to_string()),
            output.clone(),
            TransformOptions::default(),
        );
        assert!(matches!(Controller::run(&req), Err(Error::OutputExists(_))));

        req.overwrite = true;
        Controller::run(&req).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "<b>te</b>xt\n");
    }
}
