pub mod error;
pub mod severity;

pub use error::ParseLevelError;
pub use severity::{LevelArg, Severity, parse_level};
