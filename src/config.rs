use crate::error::Error;
use crate::output::OutputOptions;
use serde::{Deserialize, Serialize};
use std::fs;


/// Configuration options for the decoder
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Set the log level to use.
    /// Accepted values are "error", "warn", "info" and "debug".
    #[serde(skip_serializing_if = "str::is_empty", default = "default_log_level")]
    pub log_level: String,
    /// Output configuration
    #[serde(default)]
    pub output: OutputOptions,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputOptions::default(),
        }
    }
}

impl Configuration {
    /// Load the configuration from a file
    pub fn load(path: &str) -> Result<Self, Error> {
        let contents =
            fs::read_to_string(path).map_err(|e| Error::ReadConfigFile(path.to_string(), e))?;

        let config: Self = serde_yaml::from_str(&contents)
            .map_err(|e| Error::ParseConfigFile(path.to_string(), e))?;

        config.validate().map_err(Error::InvalidConfig)?;
        Ok(config)
    }

    /// Load the configuration from the given file, or fall back to the defaults
    pub fn load_or_default(path: Option<&str>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), &'static str> {
        self.output.validate()?;
        Ok(())
    }
}
