use std::io::IsTerminal;
use std::path::PathBuf;

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use notbr::{
    config::MainConfig,
    controller::{Controller, Request},
    debug,
    error::*,
    markup::OutputType,
    options::{normalize_percentage, TransformOptions},
    reader::InputSource,
};

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: clap_app::build_app(interactive_output).get_matches(),
        })
    }

    /// Resolves the transformation options, command line arguments taking
    /// precedence over the configured defaults.
    fn build_options(&self, config: &MainConfig) -> Result<TransformOptions> {
        let frequency = self
            .matches
            .get_one::<u64>("frequency")
            .copied()
            .unwrap_or(config.defaults.frequency);

        let bold_percentage = match self.matches.get_one::<f64>("bold") {
            Some(pct) => *pct,
            None => normalize_percentage(config.defaults.bold_percentage)?,
        };

        let output_type = match self.matches.get_one::<String>("output-type") {
            Some(tag) => tag.parse::<OutputType>()?,
            None => config.defaults.output_type,
        };

        TransformOptions::new(frequency, bold_percentage, output_type)
    }

    /// Creates the request with the matched information supplied in the command
    /// line arguments (input, output, options and flags).
    fn build_request(&self, config: &MainConfig) -> Result<Request> {
        let input = if let Some(text) = self.matches.get_many::<String>("text") {
            InputSource::Inline(text.map(|s| s.as_str()).collect::<Vec<_>>().join(" "))
        } else if let Some(path) = self.matches.get_one::<PathBuf>("input") {
            InputSource::File(path.clone())
        } else {
            InputSource::Stdin
        };

        let output = self
            .matches
            .get_one::<PathBuf>("output")
            .map(|path| config.resolve_output(path))
            .transpose()?;

        Ok(Request {
            input,
            output,
            options: self.build_options(config)?,
            skip_newline: self.matches.get_flag("no-newline") || config.defaults.skip_newline,
            overwrite: self.matches.get_flag("force") || config.defaults.overwrite,
        })
    }

    /// Runs any of the config subcommands. Currently supported :
    /// - path : prints the location of the configuration file
    /// - show : prints the contents of the configuration file
    fn run_config_subcommand(&self, bootstrap: &BootStrap, params: &ArgMatches) -> Result<()> {
        match params.subcommand_name() {
            Some("path") => {
                println!("{}", bootstrap.config_file().display());
                Ok(())
            }
            Some("show") => {
                print!("{}", bootstrap.config_data()?);
                Ok(())
            }
            _ => Err(Error::ArgsProcessingError(
                "Invalid subcommand provided".to_string(),
            )),
        }
    }

    /// Start the application, bootstraps the configuration and forwards the request to the controller.
    pub fn start(&self) -> Result<()> {
        let bootstrap = BootStrap::new()?;

        match self.matches.subcommand() {
            Some(("config", params)) => self.run_config_subcommand(&bootstrap, params),
            _ => {
                let request = self.build_request(&bootstrap.get_config()?)?;
                let written = Controller::run(&request)?;
                debug!("Done, {} bytes written", written);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(args: &[&str]) -> App {
        let mut argv = vec!["notbr"];
        argv.extend_from_slice(args);
        App {
            matches: clap_app::build_app(false)
                .try_get_matches_from(argv)
                .unwrap(),
        }
    }

    fn config(toml_data: &str) -> MainConfig {
        MainConfig::from_toml(toml_data, "notbr.toml").unwrap()
    }

    #[test]
    fn test_builtin_defaults() {
        let request = app(&["hello"]).build_request(&config("")).unwrap();
        assert_eq!(request.options, TransformOptions::default());
        assert_eq!(request.input, InputSource::Inline("hello".to_string()));
        assert_eq!(request.output, None);
        assert!(!request.skip_newline);
        assert!(!request.overwrite);
    }

    #[test]
    fn test_config_overrides_defaults() {
        let config = config(
            "[defaults]\nfrequency = 3\nbold_percentage = 25\noutput_type = \"md\"\n",
        );
        let options = app(&["hello"]).build_options(&config).unwrap();
        assert_eq!(
            options,
            TransformOptions::new(3, 0.25, OutputType::Markdown).unwrap()
        );
    }

    #[test]
    fn test_command_line_overrides_config() {
        let config = config(
            "[defaults]\nfrequency = 3\nbold_percentage = 0.25\noutput_type = \"md\"\n",
        );
        let options = app(&["-f", "2", "-b", "75%", "-t", "ANSI", "hello"])
            .build_options(&config)
            .unwrap();
        assert_eq!(options, TransformOptions::new(2, 0.75, OutputType::Ansi).unwrap());

        // Only the given arguments override the configured values
        let options = app(&["-f", "0"]).build_options(&config).unwrap();
        assert_eq!(
            options,
            TransformOptions::new(0, 0.25, OutputType::Markdown).unwrap()
        );
    }

    #[test]
    fn test_invalid_configured_percentage() {
        let config = config("[defaults]\nbold_percentage = 150\n");
        assert!(matches!(
            app(&["hello"]).build_options(&config),
            Err(Error::InvalidArgument(_))
        ));
        // A valid command line value is used instead
        assert!(app(&["-b", "0.5", "hello"]).build_options(&config).is_ok());
    }

    #[test]
    fn test_flags_are_combined_with_config() {
        let enabled = config("[defaults]\nskip_newline = true\noverwrite = true\n");
        let disabled = config("");

        let request = app(&["hello"]).build_request(&enabled).unwrap();
        assert!(request.skip_newline);
        assert!(request.overwrite);

        let request = app(&["-n", "--force", "hello"]).build_request(&disabled).unwrap();
        assert!(request.skip_newline);
        assert!(request.overwrite);

        let request = app(&["hello"]).build_request(&disabled).unwrap();
        assert!(!request.skip_newline);
        assert!(!request.overwrite);
    }

    #[test]
    fn test_input_and_output_sources() {
        let request = app(&["Hello", "big", "world"]).build_request(&config("")).unwrap();
        assert_eq!(request.input, InputSource::Inline("Hello big world".to_string()));

        let request = app(&["-i", "in.txt", "-o", "out.html"])
            .build_request(&config("[defaults]\noutput_dir = \"/tmp/notbr\"\n"))
            .unwrap();
        assert_eq!(request.input, InputSource::File(PathBuf::from("in.txt")));
        assert_eq!(request.output, Some(PathBuf::from("/tmp/notbr/out.html")));

        let request = app(&[]).build_request(&config("")).unwrap();
        assert_eq!(request.input, InputSource::Stdin);
    }
}
