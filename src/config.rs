//! Runtime configuration read from the environment (and an optional `.env` file).

use std::env;
use std::error::Error;
use std::str::FromStr;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Report output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    pub output: OutputFormat,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the `NET_NOTATION_*` variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup("NET_NOTATION_LOG_CONFIG") {
            config.log_config = path;
        }
        if let Some(output) = lookup("NET_NOTATION_OUTPUT") {
            config.output = output.parse()?;
        }
        if let Some(color) = lookup("NET_NOTATION_COLOR") {
            config.color = color
                .trim()
                .parse()
                .map_err(|_| format!("NET_NOTATION_COLOR must be true or false, got {color}"))?;
        }
        Ok(config)
    }
}
