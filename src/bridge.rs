use std::error::Error;
use std::fmt;

use crate::priority::Priority;

/// Error raised by a bridge channel. Passed through to callers untouched.
pub type BridgeError = Box<dyn Error + Send + Sync>;

/// Destination for rendered log lines, typically a browser developer
/// console reached through some transport.
///
/// Each method targets a distinct console channel. Implementations decide
/// how the line travels; writers only pick the channel.
pub trait ConsoleBridge: Send + Sync {
    fn error(&self, line: &str) -> Result<(), BridgeError>;

    fn warn(&self, line: &str) -> Result<(), BridgeError>;

    fn info(&self, line: &str) -> Result<(), BridgeError>;

    fn trace(&self, line: &str) -> Result<(), BridgeError>;

    /// Plain log channel, used for severities outside the standard eight.
    fn log(&self, line: &str) -> Result<(), BridgeError>;
}

/// The five console channels a bridge exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleChannel {
    Error,
    Warn,
    Info,
    Trace,
    Log,
}

impl ConsoleChannel {
    /// Pick the channel for a raw severity code.
    pub fn for_priority(priority: i64) -> ConsoleChannel {
        match Priority::from_code(priority) {
            Some(Priority::Emergency | Priority::Alert | Priority::Critical | Priority::Error) => {
                ConsoleChannel::Error
            }
            Some(Priority::Warning) => ConsoleChannel::Warn,
            Some(Priority::Notice | Priority::Informational) => ConsoleChannel::Info,
            Some(Priority::Debug) => ConsoleChannel::Trace,
            None => ConsoleChannel::Log,
        }
    }

    /// Deliver `line` on this channel of `bridge`.
    pub fn send(self, bridge: &dyn ConsoleBridge, line: &str) -> Result<(), BridgeError> {
        match self {
            ConsoleChannel::Error => bridge.error(line),
            ConsoleChannel::Warn => bridge.warn(line),
            ConsoleChannel::Info => bridge.info(line),
            ConsoleChannel::Trace => bridge.trace(line),
            ConsoleChannel::Log => bridge.log(line),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleChannel::Error => "error",
            ConsoleChannel::Warn => "warn",
            ConsoleChannel::Info => "info",
            ConsoleChannel::Trace => "trace",
            ConsoleChannel::Log => "log",
        }
    }
}

impl fmt::Display for ConsoleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
