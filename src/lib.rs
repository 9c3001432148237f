#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::module_name_repetitions  // e.g. LevelLogger in logger module
)]

pub mod app;
pub mod domain;
pub mod logger;

// Re-export main types for easy access
pub use domain::{LevelArg, ParseLevelError, Severity, parse_level};
pub use logger::{LevelLogger, LoggerOptions};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
