use crate::domain::Severity;
use colored::Colorize;

/// Color tags assigned to output channels. Fixed per level, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    BrightBlue,
    Cyan,
    BrightYellow,
    BrightRed,
    BrightGreen,
}

/// The fixed color assignment for a severity.
pub fn color_of(severity: Severity) -> Color {
    match severity {
        Severity::Debug => Color::BrightBlue,
        Severity::Info => Color::Cyan,
        Severity::Warn => Color::BrightYellow,
        Severity::Error | Severity::Fatal | Severity::Panic => Color::BrightRed,
    }
}

/// Renders `text` in the given color via ANSI escape sequences.
///
/// Terminal-capability detection (TTY checks, `NO_COLOR`, forced overrides)
/// lives entirely in the `colored` crate, not here.
pub fn colorize(text: &str, color: Color) -> String {
    match color {
        Color::BrightBlue => text.bright_blue().to_string(),
        Color::Cyan => text.cyan().to_string(),
        Color::BrightYellow => text.bright_yellow().to_string(),
        Color::BrightRed => text.bright_red().to_string(),
        Color::BrightGreen => text.bright_green().to_string(),
    }
}
