use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// Point in time attached to a [`LogEvent`].
///
/// Upstream producers either hand over a structured value, which the
/// formatter renders with its configured pattern, or text that is used
/// verbatim.
///
/// In serialized form a bare string is always text, whatever it looks
/// like. Structured values are written as `{"datetime": "<rfc3339>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TimestampRepr", into = "TimestampRepr")]
pub enum Timestamp {
    DateTime(DateTime<Utc>),
    Text(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Text(String),
    Structured { datetime: DateTime<Utc> },
}

impl From<TimestampRepr> for Timestamp {
    fn from(repr: TimestampRepr) -> Self {
        match repr {
            TimestampRepr::Text(text) => Timestamp::Text(text),
            TimestampRepr::Structured { datetime } => Timestamp::DateTime(datetime),
        }
    }
}

impl From<Timestamp> for TimestampRepr {
    fn from(timestamp: Timestamp) -> Self {
        match timestamp {
            Timestamp::Text(text) => TimestampRepr::Text(text),
            Timestamp::DateTime(datetime) => TimestampRepr::Structured { datetime },
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Text(String::new())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::DateTime(value)
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Text(value)
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

/// One call-site in a stack trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackFrame {
    pub file: String,
    pub line: Option<u32>,
    pub function: String,
    pub class: String,
    /// Call-kind marker: `"::"` for static calls, `"->"` for instance calls.
    #[serde(rename = "type")]
    pub call_type: String,
    pub args: Vec<serde_json::Value>,
}

impl StackFrame {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        StackFrame {
            file: file.into(),
            line: Some(line),
            ..Default::default()
        }
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn call_type(mut self, call_type: impl Into<String>) -> Self {
        self.call_type = call_type.into();
        self
    }

    pub fn args(mut self, args: Vec<serde_json::Value>) -> Self {
        self.args = args;
        self
    }
}

/// Location data carried alongside an event raised from an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventExtra {
    pub file: String,
    pub line: Option<u32>,
    /// Frames in outer-to-inner call order.
    pub trace: Vec<StackFrame>,
}

/// A single log event as handed to formatters and writers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogEvent {
    pub timestamp: Timestamp,
    /// Raw severity code. Normally one of [`Priority`]'s codes, but any
    /// value is representable so unknown levels can still be routed.
    pub priority: i64,
    pub priority_name: String,
    pub message: String,
    pub extra: EventExtra,
}

impl LogEvent {
    /// Build an event stamped with the current time.
    pub fn new(priority: Priority, message: impl Into<String>) -> Self {
        LogEvent {
            timestamp: Timestamp::DateTime(Utc::now()),
            priority: priority.code(),
            priority_name: priority.name().to_string(),
            message: message.into(),
            extra: EventExtra::default(),
        }
    }

    pub fn at(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn in_file(mut self, file: impl Into<String>, line: u32) -> Self {
        self.extra.file = file.into();
        self.extra.line = Some(line);
        self
    }

    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.extra.trace.push(frame);
        self
    }

    pub fn with_trace(mut self, trace: Vec<StackFrame>) -> Self {
        self.extra.trace = trace;
        self
    }

    /// The standard level for this event, if its code is one.
    pub fn level(&self) -> Option<Priority> {
        Priority::from_code(self.priority)
    }
}
