use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::bridge::{ConsoleBridge, ConsoleChannel};
use crate::config::WriterConfig;
use crate::error::WriterError;
use crate::formatter::{ExceptionFormatter, Formatter};
use crate::record::LogEvent;
use crate::writer::LogWriter;

/// Writer that renders events and forwards each line to a
/// [`ConsoleBridge`] channel picked by severity:
///
/// | priority                              | channel |
/// |---------------------------------------|---------|
/// | EMERGENCY, ALERT, CRITICAL, ERROR     | `error` |
/// | WARNING                               | `warn`  |
/// | NOTICE, INFORMATIONAL                 | `info`  |
/// | DEBUG                                 | `trace` |
/// | anything else                         | `log`   |
///
/// The bridge is always supplied by the caller. A writer built without one
/// is unbound and rejects writes with [`WriterError::Unbound`] until
/// [`ConsoleBridgeWriter::set_bridge`] is called.
pub struct ConsoleBridgeWriter {
    bridge: Option<Arc<dyn ConsoleBridge>>,
    formatter: Box<dyn Formatter>,
}

impl ConsoleBridgeWriter {
    /// Create a writer bound to `bridge`, rendering with an
    /// [`ExceptionFormatter`].
    pub fn new(bridge: Arc<dyn ConsoleBridge>) -> Self {
        ConsoleBridgeWriter {
            bridge: Some(bridge),
            formatter: Box::new(ExceptionFormatter::new()),
        }
    }

    /// Create a writer with no bridge.
    pub fn unbound() -> Self {
        ConsoleBridgeWriter {
            bridge: None,
            formatter: Box::new(ExceptionFormatter::new()),
        }
    }

    /// Build a writer from a [`WriterConfig`].
    ///
    /// **Errors**
    /// - [`WriterError::InvalidArgument`] if `instance` names no built-in
    ///   bridge.
    pub fn from_config(config: &WriterConfig) -> Result<Self, WriterError> {
        let mut writer = ConsoleBridgeWriter::unbound();
        writer.bridge = config.bridge()?;
        if let Some(pattern) = &config.date_time_format {
            writer.formatter.set_date_time_format(pattern.clone());
        }

        tracing::debug!(
            instance = config.instance.as_deref().unwrap_or("<unbound>"),
            date_time_format = writer.formatter.date_time_format(),
            "console bridge writer configured"
        );
        Ok(writer)
    }

    /// Build a writer from a loosely typed configuration value.
    ///
    /// Accepts `null` (unbound), a bridge name string, or a mapping with an
    /// `instance` key and optional `date_time_format`. Anything else is
    /// rejected with [`WriterError::InvalidArgument`].
    pub fn from_json(value: &Value) -> Result<Self, WriterError> {
        match value {
            Value::Null => Ok(ConsoleBridgeWriter::unbound()),
            Value::String(name) => ConsoleBridgeWriter::from_config(&WriterConfig {
                instance: Some(name.clone()),
                date_time_format: None,
            }),
            Value::Object(_) => {
                let config = WriterConfig::deserialize(value).map_err(|e| {
                    WriterError::InvalidArgument(format!("invalid console writer config: {e}"))
                })?;
                ConsoleBridgeWriter::from_config(&config)
            }
            other => Err(WriterError::InvalidArgument(format!(
                "expected a console bridge name or config mapping, got {other}"
            ))),
        }
    }

    /// The bridge currently in use, if any.
    pub fn bridge(&self) -> Option<Arc<dyn ConsoleBridge>> {
        self.bridge.clone()
    }

    pub fn set_bridge(&mut self, bridge: Arc<dyn ConsoleBridge>) -> &mut Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    pub fn formatter_mut(&mut self) -> &mut dyn Formatter {
        self.formatter.as_mut()
    }

    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) -> &mut Self {
        self.formatter = Box::new(formatter);
        self
    }
}

impl Default for ConsoleBridgeWriter {
    fn default() -> Self {
        ConsoleBridgeWriter::unbound()
    }
}

impl fmt::Debug for ConsoleBridgeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleBridgeWriter")
            .field("bound", &self.bridge.is_some())
            .field("date_time_format", &self.formatter.date_time_format())
            .finish()
    }
}

impl LogWriter for ConsoleBridgeWriter {
    fn write(&self, event: &LogEvent) -> Result<(), WriterError> {
        let bridge = self.bridge.as_deref().ok_or(WriterError::Unbound)?;
        let line = self.formatter.format(event);
        let channel = ConsoleChannel::for_priority(event.priority);

        tracing::trace!(%channel, priority = event.priority, "dispatching line to console bridge");
        channel.send(bridge, &line).map_err(WriterError::Bridge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeError;
    use crate::noop_bridge::NoopBridge;
    use crate::priority::Priority;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(ConsoleChannel, String)>>,
    }

    impl Recorder {
        fn push(&self, channel: ConsoleChannel, line: &str) -> Result<(), BridgeError> {
            self.calls.lock().unwrap().push((channel, line.to_string()));
            Ok(())
        }

        fn take(&self) -> Vec<(ConsoleChannel, String)> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    impl ConsoleBridge for Recorder {
        fn error(&self, line: &str) -> Result<(), BridgeError> {
            self.push(ConsoleChannel::Error, line)
        }
        fn warn(&self, line: &str) -> Result<(), BridgeError> {
            self.push(ConsoleChannel::Warn, line)
        }
        fn info(&self, line: &str) -> Result<(), BridgeError> {
            self.push(ConsoleChannel::Info, line)
        }
        fn trace(&self, line: &str) -> Result<(), BridgeError> {
            self.push(ConsoleChannel::Trace, line)
        }
        fn log(&self, line: &str) -> Result<(), BridgeError> {
            self.push(ConsoleChannel::Log, line)
        }
    }

    #[test]
    fn routes_error_line_verbatim() {
        let recorder = Arc::new(Recorder::default());
        let writer = ConsoleBridgeWriter::new(recorder.clone());

        let event = LogEvent::new(Priority::Error, "boom")
            .at("2024-01-01 00:00:00")
            .in_file("a.php", 10);
        writer.write(&event).unwrap();

        assert_eq!(
            recorder.take(),
            vec![(
                ConsoleChannel::Error,
                "2024-01-01 00:00:00 ERR (3) boom in a.php on line 10".to_string()
            )]
        );
    }

    #[test]
    fn each_write_hits_exactly_one_channel() {
        let recorder = Arc::new(Recorder::default());
        let writer = ConsoleBridgeWriter::new(recorder.clone());

        for priority in Priority::ALL {
            writer.write(&LogEvent::new(priority, "m")).unwrap();
            let calls = recorder.take();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].0, ConsoleChannel::for_priority(priority.code()));
        }

        let mut odd = LogEvent::new(Priority::Debug, "m");
        odd.priority = 99;
        writer.write(&odd).unwrap();
        assert_eq!(recorder.take()[0].0, ConsoleChannel::Log);
    }

    #[test]
    fn formatter_settings_chain_from_writer() {
        let mut writer = ConsoleBridgeWriter::unbound();
        let pattern = writer
            .formatter_mut()
            .set_date_time_format("%d.%m.%Y".to_string())
            .date_time_format()
            .to_string();
        assert_eq!(pattern, "%d.%m.%Y");
        assert_eq!(writer.formatter().date_time_format(), "%d.%m.%Y");
    }

    #[test]
    fn unbound_writer_fails_fast() {
        let writer = ConsoleBridgeWriter::unbound();
        assert!(writer.bridge().is_none());
        let err = writer.write(&LogEvent::new(Priority::Error, "lost")).unwrap_err();
        assert!(matches!(err, WriterError::Unbound));
    }

    #[test]
    fn set_bridge_binds_and_chains() {
        let mut writer = ConsoleBridgeWriter::default();
        writer
            .set_bridge(Arc::new(NoopBridge))
            .set_formatter(ExceptionFormatter::new());
        assert!(writer.bridge().is_some());
        writer.write(&LogEvent::new(Priority::Notice, "ok")).unwrap();
    }

    #[test]
    fn from_json_accepts_null_names_and_mappings() {
        assert!(ConsoleBridgeWriter::from_json(&Value::Null).unwrap().bridge().is_none());
        assert!(ConsoleBridgeWriter::from_json(&json!("noop")).unwrap().bridge().is_some());

        let writer = ConsoleBridgeWriter::from_json(&json!({
            "instance": "tracing",
            "date_time_format": "%H:%M"
        }))
        .unwrap();
        assert!(writer.bridge().is_some());
        assert_eq!(writer.formatter().date_time_format(), "%H:%M");

        let writer = ConsoleBridgeWriter::from_json(&json!({ "instance": null })).unwrap();
        assert!(writer.bridge().is_none());
    }

    #[test]
    fn from_json_rejects_non_conforming_values() {
        for bad in [
            json!(42),
            json!(["noop"]),
            json!({ "instance": 1 }),
            json!({ "instance": "firebug" }),
            json!("firebug"),
        ] {
            let err = ConsoleBridgeWriter::from_json(&bad).unwrap_err();
            assert!(matches!(err, WriterError::InvalidArgument(_)), "{bad}");
        }
    }
}
