use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument. Cause : {0}")]
    InvalidArgument(String),
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to create default configuration file in {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse configuration file {file:?}. Cause : {cause}")]
    SerdeTomlError { file: String, cause: String },
    #[error("unable to expand path. Cause : {cause}")]
    InterpolationError { cause: String },
    #[error("unable to read input {file:?}. Cause : {cause}")]
    InputReadError { file: String, cause: String },
    #[error("output file already exists : \"{0}\" (use --force to overwrite)")]
    OutputExists(String),
    #[error("unable to write output {file:?}. Cause : {cause}")]
    OutputWriteError { file: String, cause: String },
    #[error(transparent)]
    Fmt(#[from] ::std::fmt::Error),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError { file: _, cause: _ }
        | Error::InterpolationError { cause: _ }
        | Error::ConfigError(_) => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::InvalidArgument(_) | Error::ArgsProcessingError(_) => {
            writeln!(output, "{}: {}", Red.paint("[argument error]"), error).ok();
        }
        Error::InputReadError { file: _, cause: _ }
        | Error::OutputExists(_)
        | Error::OutputWriteError { file: _, cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[io error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[notbr error]"), error).ok();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handler_tags() {
        let mut out = Vec::new();
        default_error_handler(
            &Error::InvalidArgument("bold percentage out of range".to_string()),
            &mut out,
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[argument error]"));
        assert!(text.contains("bold percentage out of range"));

        let mut out = Vec::new();
        default_error_handler(&Error::OutputExists("out.html".to_string()), &mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[io error]"));
        assert!(text.contains("out.html"));
    }

    #[test]
    fn test_from_strings() {
        assert!(matches!(Error::from("boom"), Error::Msg(m) if m == "boom"));
        assert!(matches!(Error::from("boom".to_string()), Error::Msg(m) if m == "boom"));
    }
}
