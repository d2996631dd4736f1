use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::defaults;
use crate::error::*;
use crate::markup::OutputType;
use crate::options::{normalize_percentage, TransformOptions};

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Defaults {
    pub frequency: u64,
    pub bold_percentage: f64,
    pub output_type: OutputType,
    pub skip_newline: bool,
    pub overwrite: bool,
    pub output_dir: Option<String>,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            frequency: defaults::FREQUENCY,
            bold_percentage: defaults::BOLD_PERCENTAGE,
            output_type: OutputType::default(),
            skip_newline: false,
            overwrite: false,
            output_dir: None,
        }
    }
}

impl MainConfig {
    /// Parses the configuration from its TOML representation
    ///
    /// # Arguments
    /// * `toml_data` - The TOML contents
    /// * `file` - The file name used in error messages
    ///
    /// # Examples
    /// ```
    /// use notbr::config::MainConfig;
    /// use notbr::markup::OutputType;
    ///
    /// let config = MainConfig::from_toml("[defaults]\noutput_type = \"md\"", "notbr.toml").unwrap();
    /// assert_eq!(config.defaults.output_type, OutputType::Markdown);
    /// assert_eq!(config.defaults.frequency, 1);
    /// ```
    pub fn from_toml(toml_data: &str, file: &str) -> Result<Self> {
        toml::from_str::<MainConfig>(toml_data).map_err(|e| Error::SerdeTomlError {
            file: file.to_string(),
            cause: e.to_string(),
        })
    }

    /// Reads and parses the configuration file at the given path
    pub fn load(path: &Path) -> Result<Self> {
        let file_name = path.to_string_lossy().to_string();
        let toml_data = match parse(path) {
            Ok(data) => data,
            Err(Error::Io(e)) => {
                return Err(Error::ConfigReadError {
                    file: file_name,
                    cause: e.to_string(),
                })
            }
            Err(e) => return Err(e),
        };
        Self::from_toml(&toml_data, &file_name)
    }

    /// Builds the transformation options out of the configured defaults.
    /// The bold percentage may be written either as a fraction or as a percent.
    pub fn options(&self) -> Result<TransformOptions> {
        TransformOptions::new(
            self.defaults.frequency,
            normalize_percentage(self.defaults.bold_percentage)?,
            self.defaults.output_type,
        )
    }

    /// Resolves an output path against the configured output directory.
    /// Absolute paths and relative paths without a configured directory are kept as is.
    pub fn resolve_output(&self, output: &Path) -> Result<PathBuf> {
        match &self.defaults.output_dir {
            Some(dir) if output.is_relative() => {
                let expanded = shellexpand::full(dir).map_err(|e| Error::InterpolationError {
                    cause: e.to_string(),
                })?;
                Ok(PathBuf::from(expanded.as_ref()).join(output))
            }
            _ => Ok(output.to_path_buf()),
        }
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = MainConfig::from_toml("", "notbr.toml").unwrap();
        assert_eq!(config.defaults.frequency, 1);
        assert_eq!(config.defaults.bold_percentage, 0.5);
        assert_eq!(config.defaults.output_type, OutputType::Html);
        assert!(!config.defaults.skip_newline);
        assert!(!config.defaults.overwrite);
        assert!(config.defaults.output_dir.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml_data = "[defaults]\n\
                         frequency = 2\n\
                         bold_percentage = 40\n\
                         output_type = \"ansi\"\n\
                         skip_newline = true\n\
                         overwrite = true\n\
                         output_dir = \"/tmp/notbr\"\n";
        let config = MainConfig::from_toml(toml_data, "notbr.toml").unwrap();
        let options = config.options().unwrap();
        assert_eq!(options.frequency(), 2);
        assert_eq!(options.bold_percentage(), 0.4);
        assert_eq!(options.output_type(), OutputType::Ansi);
        assert!(config.defaults.skip_newline);
        assert!(config.defaults.overwrite);
    }

    #[test]
    fn test_invalid_config() {
        let err = MainConfig::from_toml("[defaults]\noutput_type = \"pdf\"", "notbr.toml")
            .unwrap_err();
        assert!(matches!(err, Error::SerdeTomlError { .. }));

        let config = MainConfig::from_toml("[defaults]\nbold_percentage = 250.0", "notbr.toml")
            .unwrap();
        assert!(matches!(config.options(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("notbr.toml");
        std::fs::write(&path, "[defaults]\nfrequency = 3\n").unwrap();

        let config = MainConfig::load(&path).unwrap();
        assert_eq!(config.defaults.frequency, 3);

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            MainConfig::load(&missing),
            Err(Error::ConfigReadError { .. })
        ));
    }

    #[test]
    fn test_resolve_output() {
        let mut config = MainConfig::default();
        assert_eq!(
            config.resolve_output(Path::new("out.html")).unwrap(),
            PathBuf::from("out.html")
        );

        config.defaults.output_dir = Some("/srv/notbr".to_string());
        assert_eq!(
            config.resolve_output(Path::new("out.html")).unwrap(),
            PathBuf::from("/srv/notbr/out.html")
        );
        assert_eq!(
            config.resolve_output(Path::new("/abs/out.html")).unwrap(),
            PathBuf::from("/abs/out.html")
        );
    }
}
