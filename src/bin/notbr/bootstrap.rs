use chrono::prelude::*;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use notbr::{config::MainConfig, constants::defaults, debug, error::*};

use crate::directories::PROJECT_DIRS;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            # Emphasize every n-th word (0 disables emphasis)\n\
                            frequency       = ${frequency}\n\
                            # Fraction (0.5) or percent (50) of each word to emphasize\n\
                            bold_percentage = ${bold_percentage}\n\
                            # One of: html, markdown, ansi\n\
                            output_type     = \"${output_type}\"\n\
                            skip_newline    = false\n\
                            overwrite       = false\n\
                            # output_dir    = \"~/notbr\"\n";

/// Locates the configuration file. The file is only read (and created with
/// default values when missing) once its contents are requested.
#[derive(Debug)]
pub struct BootStrap {
    config_file: PathBuf,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        Ok(BootStrap {
            config_file: config_file()?,
        })
    }

    pub fn get_config(&self) -> Result<MainConfig> {
        parse_main_config(&self.config_file)
    }

    /// Raw contents of the configuration file, not validated
    pub fn config_data(&self) -> Result<String> {
        read_main_config(&self.config_file)
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}

/// Location of the main configuration file inside the config directory
fn config_file() -> Result<PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join(defaults::CONFIG_FILE))
        .ok_or_else(|| {
            Error::ConfigError("unable to locate the configuration directory".to_string())
        })
}

/// Creates the default main configuration file
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file cannot be created
/// * `IoError` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &Path) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF
        .replacen("${date}", &current_date.to_string(), 1)
        .replacen("${frequency}", &defaults::FREQUENCY.to_string(), 1)
        .replacen(
            "${bold_percentage}",
            &format!("{:?}", defaults::BOLD_PERCENTAGE),
            1,
        )
        .replacen("${output_type}", defaults::OUTPUT_TYPE, 1);

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    debug!("Created default configuration in {}", config_file.display());
    Ok(config_data)
}

/// Reads the main configuration file, creating a default one if it does not exist.
fn read_main_config(conf_file: &Path) -> Result<String> {
    match notbr::config::parse(conf_file) {
        Ok(data) => Ok(data),
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(conf_file)
        }
        Err(Error::Io(e)) => Err(Error::ConfigReadError {
            file: String::from(defaults::CONFIG_FILE),
            cause: e.to_string(),
        }),
        Err(e) => Err(e),
    }
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// If the file does not exist, a default configuration file is created first.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config(conf_file: &Path) -> Result<MainConfig> {
    MainConfig::from_toml(&read_main_config(conf_file)?, defaults::CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notbr::markup::OutputType;

    #[test]
    fn test_default_config_is_created_and_parsed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_file = temp_dir.path().join("nested").join(defaults::CONFIG_FILE);

        let config = parse_main_config(&config_file).unwrap();
        assert_eq!(config.defaults.frequency, defaults::FREQUENCY);
        assert_eq!(config.defaults.bold_percentage, defaults::BOLD_PERCENTAGE);
        assert_eq!(config.defaults.output_type, OutputType::Html);
        assert!(!config.defaults.skip_newline);
        assert!(!config.defaults.overwrite);
        assert!(config.defaults.output_dir.is_none());

        let data = std::fs::read_to_string(&config_file).unwrap();
        assert!(data.starts_with("# File automatically generated on "));
        assert!(!data.contains("${"));
    }

    #[test]
    fn test_existing_config_is_kept() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_file = temp_dir.path().join(defaults::CONFIG_FILE);
        std::fs::write(&config_file, "[defaults]\nfrequency = 4\n").unwrap();

        let config = parse_main_config(&config_file).unwrap();
        assert_eq!(config.defaults.frequency, 4);
        assert_eq!(
            std::fs::read_to_string(&config_file).unwrap(),
            "[defaults]\nfrequency = 4\n"
        );
    }

    #[test]
    fn test_malformed_config_is_still_readable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_file = temp_dir.path().join(defaults::CONFIG_FILE);
        std::fs::write(&config_file, "[defaults\n").unwrap();

        assert!(matches!(
            parse_main_config(&config_file),
            Err(Error::SerdeTomlError { .. })
        ));
        assert_eq!(read_main_config(&config_file).unwrap(), "[defaults\n");
    }
}
