use std::borrow::Cow;
use std::fmt::Write as _;

use serde_json::Value;

use crate::record::{LogEvent, Timestamp};

/// Line separator used between rendered lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line separator used between rendered lines.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Pattern applied to structured timestamps unless reconfigured.
///
/// Uses `chrono` strftime syntax.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns a [`LogEvent`] into a single piece of text.
///
/// Writers hold a boxed formatter and call [`Formatter::format`] once per
/// event. Implementations must be total: every event renders to some
/// string.
pub trait Formatter: Send + Sync {
    fn format(&self, event: &LogEvent) -> String;

    /// Pattern used to render structured timestamps.
    fn date_time_format(&self) -> &str;

    /// Replace the timestamp pattern, returning the formatter for chaining.
    fn set_date_time_format(&mut self, pattern: String) -> &mut dyn Formatter;
}

/// Renders an event raised from an error, followed by its stack trace.
///
/// Output is a header line
///
/// ```text
/// <timestamp> <priorityName> (<priority>) <message> in <file> on line <line>
/// ```
///
/// and, when the event carries frames, a `[Trace]` block with six labeled
/// lines per frame.
#[derive(Debug, Clone)]
pub struct ExceptionFormatter {
    date_time_format: String,
}

impl Default for ExceptionFormatter {
    fn default() -> Self {
        ExceptionFormatter {
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
        }
    }
}

impl ExceptionFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_time_format(&self) -> &str {
        &self.date_time_format
    }

    /// Replace the timestamp pattern. Never fails; returns `self` so
    /// configuration calls can be chained.
    pub fn set_date_time_format(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.date_time_format = pattern.into();
        self
    }

    pub fn format(&self, event: &LogEvent) -> String {
        let mut output = format!(
            "{} {} ({}) {} in {} on line {}",
            self.render_timestamp(&event.timestamp),
            event.priority_name,
            event.priority,
            event.message,
            event.extra.file,
            render_line(event.extra.line),
        );

        if event.extra.trace.is_empty() {
            return output;
        }

        output.push_str(LINE_SEPARATOR);
        output.push_str("[Trace]");
        output.push_str(LINE_SEPARATOR);

        for frame in &event.extra.trace {
            push_labeled(&mut output, "File  : ", &frame.file);
            push_labeled(&mut output, "Line  : ", &render_line(frame.line));
            push_labeled(&mut output, "Func  : ", &frame.function);
            push_labeled(&mut output, "Class : ", &frame.class);
            push_labeled(&mut output, "Type  : ", render_call_type(&frame.call_type));
            push_labeled(&mut output, "Args  : ", &render_args(&frame.args));
        }

        output
    }

    fn render_timestamp<'a>(&self, timestamp: &'a Timestamp) -> Cow<'a, str> {
        match timestamp {
            Timestamp::Text(text) => Cow::Borrowed(text),
            Timestamp::DateTime(dt) => {
                let mut rendered = String::new();
                // chrono reports malformed patterns as a fmt error.
                if write!(rendered, "{}", dt.format(&self.date_time_format)).is_err() {
                    rendered = dt.to_rfc3339();
                }
                Cow::Owned(rendered)
            }
        }
    }
}

impl Formatter for ExceptionFormatter {
    fn format(&self, event: &LogEvent) -> String {
        ExceptionFormatter::format(self, event)
    }

    fn date_time_format(&self) -> &str {
        ExceptionFormatter::date_time_format(self)
    }

    fn set_date_time_format(&mut self, pattern: String) -> &mut dyn Formatter {
        ExceptionFormatter::set_date_time_format(self, pattern)
    }
}

/// Map a call-kind marker to a readable word.
pub fn render_call_type(marker: &str) -> &str {
    match marker {
        "::" => "static",
        "->" => "method",
        other => other,
    }
}

fn render_line(line: Option<u32>) -> String {
    line.map(|l| l.to_string()).unwrap_or_default()
}

fn push_labeled(output: &mut String, label: &str, value: &str) {
    output.push_str(label);
    output.push_str(value);
    output.push_str(LINE_SEPARATOR);
}

/// Render frame arguments as an indented `Array ( [i] => v )` listing.
pub fn render_args(args: &[Value]) -> String {
    let mut out = String::new();
    render_array(args.iter().enumerate().map(|(i, v)| (i.to_string(), v)), 0, &mut out);
    out
}

fn render_value(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => out.push('1'),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => render_array(
            items.iter().enumerate().map(|(i, v)| (i.to_string(), v)),
            indent,
            out,
        ),
        Value::Object(map) => render_array(map.iter().map(|(k, v)| (k.clone(), v)), indent, out),
    }
}

// Whole floats print without a fractional part, as integers would.
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

fn render_array<'a>(
    entries: impl Iterator<Item = (String, &'a Value)>,
    indent: usize,
    out: &mut String,
) {
    let pad = " ".repeat(indent);
    out.push_str("Array");
    out.push_str(LINE_SEPARATOR);
    out.push_str(&pad);
    out.push('(');
    out.push_str(LINE_SEPARATOR);
    for (key, value) in entries {
        out.push_str(&pad);
        out.push_str("    [");
        out.push_str(&key);
        out.push_str("] => ");
        render_value(value, indent + 8, out);
        out.push_str(LINE_SEPARATOR);
    }
    out.push_str(&pad);
    out.push(')');
    out.push_str(LINE_SEPARATOR);
}
