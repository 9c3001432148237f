pub mod config;

pub use config::{Channel, Config, ConfigError, FileConfig};

use crate::domain::Severity;
use crate::logger::{LevelLogger, LoggerOptions};
use anyhow::Result;

/// Binary entry point: parse configuration, build a logger, emit the message.
pub fn main() -> Result<()> {
    let config = Config::from_args(std::env::args())?;
    let logger = LevelLogger::new(
        LoggerOptions::new()
            .app_name(config.app_name.clone())
            .min_severity(config.min_severity()?),
    );
    emit(&config, &logger)
}

/// Dispatches the configured message onto the selected channel.
pub fn emit(config: &Config, logger: &LevelLogger) -> Result<()> {
    let context = config.context.as_deref();
    match config.channel()? {
        Channel::Success => logger.success(&config.message, context),
        Channel::Severity(Severity::Debug) => logger.debug(&config.message, context),
        Channel::Severity(Severity::Info) => logger.info(&config.message, context),
        Channel::Severity(Severity::Warn) => logger.warn(&config.message, context),
        Channel::Severity(Severity::Error) => logger.error(&config.message, context),
        Channel::Severity(Severity::Fatal) => logger.fatal(&config.message, context),
        Channel::Severity(Severity::Panic) => logger.panic_(&config.message, context),
    }
    Ok(())
}
