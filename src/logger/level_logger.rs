use super::color::{Color, color_of, colorize};
use crate::domain::Severity;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// App name used when none is configured.
pub const DEFAULT_APP_NAME: &str = "Glogger";

/// Minimum level used when none is configured (Debug, i.e. everything prints).
pub const DEFAULT_MIN_LEVEL: i64 = 0;

/// Optional overrides for [`LevelLogger::new`]. Missing fields fall back to
/// [`DEFAULT_APP_NAME`] and [`DEFAULT_MIN_LEVEL`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerOptions {
    pub app_name: Option<String>,
    pub min_level: Option<i64>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Raw numeric threshold. Any integer is accepted; out-of-range values
    /// suppress every named-level method while `success` keeps emitting.
    pub fn min_level(mut self, level: i64) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn min_severity(self, severity: Severity) -> Self {
        self.min_level(severity.value())
    }
}

/// Leveled console logger.
///
/// Holds an application name and a numeric minimum level; each emission method
/// prints a colorized, bracket-prefixed line to standard output when the
/// message severity meets the threshold. Construction never fails and the
/// configuration is immutable afterwards. The sink mutex serializes writes, so
/// a shared instance is safe to use from multiple threads without interleaving
/// within a line.
pub struct LevelLogger {
    app_name: String,
    min_level: i64,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("app_name", &self.app_name)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl LevelLogger {
    /// Creates a logger writing to standard output.
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_sink(options, Box::new(io::stdout()))
    }

    /// Same as [`LevelLogger::new`] but writing to `sink` instead of stdout.
    /// Tests use this to capture output.
    pub fn with_sink(options: LoggerOptions, sink: Box<dyn Write + Send>) -> Self {
        Self {
            app_name: options
                .app_name
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            min_level: options.min_level.unwrap_or(DEFAULT_MIN_LEVEL),
            sink: Mutex::new(sink),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn min_level(&self) -> i64 {
        self.min_level
    }

    /// `[<appName>-<LEVEL>#<context>]: `, context defaulting to the app name.
    fn prefix(&self, label: &str, context: Option<&str>) -> String {
        let ctx = context.unwrap_or(&self.app_name);
        format!("[{}-{}#{}]: ", self.app_name, label, ctx)
    }

    fn emit(&self, severity: Severity, message: &str, context: Option<&str>) {
        if severity.value() < self.min_level {
            return;
        }
        self.write_line(severity.as_str(), color_of(severity), message, context);
    }

    fn write_line(&self, label: &str, color: Color, message: &str, context: Option<&str>) {
        let line = colorize(
            &format!("{}{}", self.prefix(label, context), message),
            color,
        );
        let mut sink = self.sink.lock();
        // Console writes are assumed to succeed; failures are not surfaced.
        let _ = writeln!(sink, "{line}");
        let _ = sink.flush();
    }

    pub fn debug(&self, message: &str, context: Option<&str>) {
        self.emit(Severity::Debug, message, context);
    }

    pub fn info(&self, message: &str, context: Option<&str>) {
        self.emit(Severity::Info, message, context);
    }

    pub fn warn(&self, message: &str, context: Option<&str>) {
        self.emit(Severity::Warn, message, context);
    }

    pub fn error(&self, message: &str, context: Option<&str>) {
        self.emit(Severity::Error, message, context);
    }

    pub fn fatal(&self, message: &str, context: Option<&str>) {
        self.emit(Severity::Fatal, message, context);
    }

    /// Named with a trailing underscore to stay clear of the `panic!` macro.
    pub fn panic_(&self, message: &str, context: Option<&str>) {
        self.emit(Severity::Panic, message, context);
    }

    /// Always emits, bypassing the threshold. Intended for final
    /// positive-outcome confirmations distinct from informational logging.
    pub fn success(&self, message: &str, context: Option<&str>) {
        self.write_line("SUCCESS", Color::BrightGreen, message, context);
    }

    // Formatted variants. Same guard and same bracket prefix as the plain
    // methods; context falls back to the app name.

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.debug(&args.to_string(), None);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.info(&args.to_string(), None);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.warn(&args.to_string(), None);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.error(&args.to_string(), None);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(&args.to_string(), None);
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) {
        self.panic_(&args.to_string(), None);
    }

    pub fn successf(&self, args: fmt::Arguments<'_>) {
        self.success(&args.to_string(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let logger = LevelLogger::default();
        assert_eq!(logger.app_name(), "Glogger");
        assert_eq!(logger.min_level(), 0);
    }

    #[test]
    fn test_options_override_defaults() {
        let logger = LevelLogger::new(
            LoggerOptions::new()
                .app_name("Svc")
                .min_severity(Severity::Warn),
        );
        assert_eq!(logger.app_name(), "Svc");
        assert_eq!(logger.min_level(), 2);
    }

    #[test]
    fn test_prefix_context_default() {
        let logger = LevelLogger::new(LoggerOptions::new().app_name("Svc"));
        assert_eq!(logger.prefix("WARN", None), "[Svc-WARN#Svc]: ");
        assert_eq!(logger.prefix("WARN", Some("diskmon")), "[Svc-WARN#diskmon]: ");
    }
}
