use crate::domain::{ParseLevelError, Severity, parse_level};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    Level(#[from] ParseLevelError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Output channel selected on the command line: a named severity, or the
/// always-on success channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Severity(Severity),
    Success,
}

impl FromStr for Channel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("success") {
            Ok(Channel::Success)
        } else {
            Ok(Channel::Severity(s.parse()?))
        }
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about = "Leveled colorized console logger", long_about = None)]
pub struct Config {
    /// Application name shown in the log prefix
    #[arg(long, env = "GLOGGER_APP_NAME", default_value = "Glogger")]
    pub app_name: String,

    /// Minimum level that gets printed (name or number, e.g. "warn" or "2")
    #[arg(long, env = "GLOGGER_LOG_LEVEL", default_value = "debug")]
    pub level: String,

    /// Channel to emit on (debug|info|warn|error|fatal|panic|success)
    #[arg(long, default_value = "info")]
    pub severity: String,

    /// Context label shown in the prefix (defaults to the app name)
    #[arg(long, env = "GLOGGER_CONTEXT")]
    pub context: Option<String>,

    /// Configuration file path (optional)
    #[arg(long, env = "GLOGGER_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// The message to log
    pub message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Glogger".to_string(),
            level: "debug".to_string(),
            severity: "info".to_string(),
            context: None,
            config_file: None,
            message: String::new(),
        }
    }
}

/// Subset of [`Config`] loadable from a TOML file. File values fill in only
/// the fields the command line left at their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub app_name: Option<String>,
    pub level: Option<String>,
    pub context: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::parse_from(args);
        config.apply_config_file()?;
        config.validate()?;
        Ok(config)
    }

    /// Merges in the TOML file named by `--config-file`, if any. Explicit
    /// command-line or environment values win over file values.
    pub fn apply_config_file(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.config_file else {
            return Ok(());
        };
        let file = FileConfig::from_file(path)?;
        let defaults = Config::default();

        if self.app_name == defaults.app_name
            && let Some(app_name) = file.app_name
        {
            self.app_name = app_name;
        }
        if self.level == defaults.level
            && let Some(level) = file.level
        {
            self.level = level;
        }
        if self.context.is_none() {
            self.context = file.context;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "app name must not be empty".to_string(),
            ));
        }
        parse_level(self.level.as_str())?;
        self.severity.parse::<Channel>()?;
        Ok(())
    }

    pub fn min_severity(&self) -> Result<Severity, ConfigError> {
        Ok(parse_level(self.level.as_str())?)
    }

    pub fn channel(&self) -> Result<Channel, ConfigError> {
        Ok(self.severity.parse()?)
    }
}
