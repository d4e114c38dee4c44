use std::fmt;
use std::str::FromStr;

/// The eight standard severity levels.
///
/// Lower numeric codes are more severe: `Emergency` is `0`, `Debug` is `7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Informational,
    Debug,
}

impl Priority {
    pub const ALL: [Priority; 8] = [
        Priority::Emergency,
        Priority::Alert,
        Priority::Critical,
        Priority::Error,
        Priority::Warning,
        Priority::Notice,
        Priority::Informational,
        Priority::Debug,
    ];

    /// Look up a level by its numeric code. Returns `None` outside `0..=7`.
    pub fn from_code(code: i64) -> Option<Priority> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Short name written into rendered lines, e.g. `ERR` or `WARN`.
    pub fn name(self) -> &'static str {
        match self {
            Priority::Emergency => "EMERG",
            Priority::Alert => "ALERT",
            Priority::Critical => "CRIT",
            Priority::Error => "ERR",
            Priority::Warning => "WARN",
            Priority::Notice => "NOTICE",
            Priority::Informational => "INFO",
            Priority::Debug => "DEBUG",
        }
    }

    fn long_name(self) -> &'static str {
        match self {
            Priority::Emergency => "EMERGENCY",
            Priority::Alert => "ALERT",
            Priority::Critical => "CRITICAL",
            Priority::Error => "ERROR",
            Priority::Warning => "WARNING",
            Priority::Notice => "NOTICE",
            Priority::Informational => "INFORMATIONAL",
            Priority::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown priority name: {0}")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == upper || p.long_name() == upper)
            .ok_or_else(|| UnknownPriority(s.to_string()))
    }
}

impl From<tracing::Level> for Priority {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::ERROR {
            Priority::Error
        } else if level == tracing::Level::WARN {
            Priority::Warning
        } else if level == tracing::Level::INFO {
            Priority::Informational
        } else {
            // DEBUG and TRACE both collapse onto the least severe level.
            Priority::Debug
        }
    }
}
