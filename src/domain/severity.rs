use super::error::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity of a log message.
///
/// The numeric discriminant is the filtering key: lower means more verbose.
/// `SUCCESS` is intentionally not a variant; it is an always-on channel handled
/// by the logger and exempt from threshold comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];

    /// Uppercase label shown in the log prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Panic => "PANIC",
        }
    }

    /// Numeric value used in the threshold comparison.
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Maps a raw numeric level back to a severity, if it names one.
    pub fn from_repr(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Error),
            4 => Some(Severity::Fatal),
            5 => Some(Severity::Panic),
            _ => None,
        }
    }

    /// Label for a raw numeric level. Values outside the enumeration degrade
    /// to `"UNKNOWN"` instead of erroring.
    pub fn name_of(level: i64) -> &'static str {
        Self::from_repr(level).map_or("UNKNOWN", Severity::as_str)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    /// Case-insensitive; accepts the `WARNING` alias and numeric strings
    /// (`"3"` parses as `Error`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::from_repr(n).ok_or_else(|| ParseLevelError::new(s));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            "PANIC" => Ok(Severity::Panic),
            _ => Err(ParseLevelError::new(s)),
        }
    }
}

/// The two input shapes accepted by [`parse_level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelArg {
    Name(String),
    Number(i64),
}

impl From<&str> for LevelArg {
    fn from(s: &str) -> Self {
        LevelArg::Name(s.to_string())
    }
}

impl From<String> for LevelArg {
    fn from(s: String) -> Self {
        LevelArg::Name(s)
    }
}

impl From<i64> for LevelArg {
    fn from(n: i64) -> Self {
        LevelArg::Number(n)
    }
}

impl From<i32> for LevelArg {
    fn from(n: i32) -> Self {
        LevelArg::Number(i64::from(n))
    }
}

impl From<u8> for LevelArg {
    fn from(n: u8) -> Self {
        LevelArg::Number(i64::from(n))
    }
}

impl From<Severity> for LevelArg {
    fn from(severity: Severity) -> Self {
        LevelArg::Number(severity.value())
    }
}

/// Converts a level given either as a name (`"WARN"`, `"warning"`, `"3"`) or
/// as a number into a [`Severity`].
///
/// Unrecognized input is an explicit error rather than a silent empty value.
pub fn parse_level<A: Into<LevelArg>>(arg: A) -> Result<Severity, ParseLevelError> {
    match arg.into() {
        LevelArg::Name(name) => name.parse(),
        LevelArg::Number(n) => {
            Severity::from_repr(n).ok_or_else(|| ParseLevelError::new(n.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_discriminants() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(Severity::Fatal < Severity::Panic);
    }

    #[test]
    fn test_name_number_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
            assert_eq!(Severity::from_repr(severity.value()), Some(severity));
            assert_eq!(Severity::name_of(severity.value()), severity.as_str());
        }
    }

    #[test]
    fn test_warning_alias_and_case() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_numeric_strings_parse() {
        assert_eq!("0".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("3".parse::<Severity>().unwrap(), Severity::Error);
        assert!("99".parse::<Severity>().is_err());
    }

    #[test]
    fn test_parse_level_polymorphic() {
        assert_eq!(parse_level("error").unwrap(), Severity::Error);
        assert_eq!(parse_level(4_i64).unwrap(), Severity::Fatal);
        assert_eq!(parse_level(1_u8).unwrap(), Severity::Info);
        assert_eq!(parse_level(Severity::Panic).unwrap(), Severity::Panic);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("verbose").unwrap_err();
        assert_eq!(err.input(), "verbose");
        assert!(parse_level(99_i64).is_err());
        assert!(parse_level(-1_i64).is_err());
    }

    #[test]
    fn test_name_of_out_of_range() {
        assert_eq!(Severity::name_of(99), "UNKNOWN");
        assert_eq!(Severity::name_of(-1), "UNKNOWN");
        assert_eq!(Severity::name_of(6), "UNKNOWN");
    }
}
