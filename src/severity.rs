use std::str::FromStr;

use crate::Error;

/// Syslog Severities from RFC 5424.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

/// Convert an int (as used in the wire serialization) into a `Severity`
impl TryFrom<i32> for Severity {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let severity = match value {
            0 => Severity::EMERG,
            1 => Severity::ALERT,
            2 => Severity::CRIT,
            3 => Severity::ERR,
            4 => Severity::WARNING,
            5 => Severity::NOTICE,
            6 => Severity::INFO,
            7 => Severity::DEBUG,
            _ => return Err(Error::OutOfRangeSeverity(value)),
        };

        Ok(severity)
    }
}

/// Case-insensitive lookup by name. `panic`, `error` and `warn` are the
/// spellings syslog.h shipped before the canonical ones settled.
impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let severity = match s.to_ascii_lowercase().as_str() {
            "emerg" | "panic" => Severity::EMERG,
            "alert" => Severity::ALERT,
            "crit" => Severity::CRIT,
            "err" | "error" => Severity::ERR,
            "warning" | "warn" => Severity::WARNING,
            "notice" => Severity::NOTICE,
            "info" => Severity::INFO,
            "debug" => Severity::DEBUG,
            _ => return Err(Error::UnknownSeverity(s.to_string())),
        };

        Ok(severity)
    }
}

impl TryFrom<&str> for Severity {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Severity {
    /// Convert a syslog severity into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::EMERG => "emerg",
            Severity::ALERT => "alert",
            Severity::CRIT => "crit",
            Severity::ERR => "err",
            Severity::WARNING => "warning",
            Severity::NOTICE => "notice",
            Severity::INFO => "info",
            Severity::DEBUG => "debug",
        }
    }
}
