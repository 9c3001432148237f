pub mod color;
pub mod level_logger;

pub use color::{Color, color_of, colorize};
pub use level_logger::{DEFAULT_APP_NAME, DEFAULT_MIN_LEVEL, LevelLogger, LoggerOptions};
