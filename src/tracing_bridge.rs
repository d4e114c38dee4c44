use crate::bridge::{BridgeError, ConsoleBridge};

/// Target under which [`TracingBridge`] emits its events.
pub const TRACING_TARGET: &str = "console_bridge";

/// Bridge that re-emits console lines as `tracing` events.
///
/// Lets the writer run in processes with no browser attached: whatever
/// subscriber the host installed (fmt, json, an exporter) receives the
/// lines. The `log` channel has no `tracing` counterpart and is emitted at
/// `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBridge;

impl ConsoleBridge for TracingBridge {
    fn error(&self, line: &str) -> Result<(), BridgeError> {
        tracing::error!(target: TRACING_TARGET, channel = "error", "{}", line);
        Ok(())
    }

    fn warn(&self, line: &str) -> Result<(), BridgeError> {
        tracing::warn!(target: TRACING_TARGET, channel = "warn", "{}", line);
        Ok(())
    }

    fn info(&self, line: &str) -> Result<(), BridgeError> {
        tracing::info!(target: TRACING_TARGET, channel = "info", "{}", line);
        Ok(())
    }

    fn trace(&self, line: &str) -> Result<(), BridgeError> {
        tracing::trace!(target: TRACING_TARGET, channel = "trace", "{}", line);
        Ok(())
    }

    fn log(&self, line: &str) -> Result<(), BridgeError> {
        tracing::debug!(target: TRACING_TARGET, channel = "log", "{}", line);
        Ok(())
    }
}
