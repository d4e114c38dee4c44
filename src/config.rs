use std::sync::Arc;

use serde::Deserialize;

use crate::bridge::ConsoleBridge;
use crate::env::{env_opt, LOG_CONSOLE_BRIDGE_ENV, LOG_CONSOLE_DATE_FORMAT_ENV};
use crate::error::WriterError;
use crate::noop_bridge::NoopBridge;
use crate::tracing_bridge::TracingBridge;

/// Built-in bridges that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeKind {
    Tracing,
    Noop,
}

/// Parse a bridge name, case-insensitively.
///
/// Accepted names:
/// - "tracing"
/// - "noop" or "null"
pub fn parse_bridge_kind(name: &str) -> Result<BridgeKind, WriterError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "tracing" => Ok(BridgeKind::Tracing),
        "noop" | "null" => Ok(BridgeKind::Noop),
        _ => Err(WriterError::InvalidArgument(format!(
            "unknown console bridge: {name:?}"
        ))),
    }
}

/// Create the bridge implementation for a [`BridgeKind`].
pub fn make_bridge(kind: BridgeKind) -> Arc<dyn ConsoleBridge> {
    match kind {
        BridgeKind::Tracing => Arc::new(TracingBridge),
        BridgeKind::Noop => Arc::new(NoopBridge),
    }
}

/// Writer configuration as it appears in config files.
///
/// ```json
/// { "instance": "tracing", "date_time_format": "%H:%M:%S" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Name of a built-in bridge. `None` leaves the writer unbound.
    pub instance: Option<String>,
    /// Overrides the formatter's timestamp pattern.
    pub date_time_format: Option<String>,
}

impl WriterConfig {
    /// Build a config from `LOG_CONSOLE_BRIDGE` / `LOG_CONSOLE_DATE_FORMAT`.
    /// Unset or blank variables stay `None`.
    pub fn from_env() -> Self {
        WriterConfig {
            instance: env_opt(LOG_CONSOLE_BRIDGE_ENV),
            date_time_format: env_opt(LOG_CONSOLE_DATE_FORMAT_ENV),
        }
    }

    /// Resolve the configured bridge, if any.
    pub fn bridge(&self) -> Result<Option<Arc<dyn ConsoleBridge>>, WriterError> {
        self.instance
            .as_deref()
            .map(|name| parse_bridge_kind(name).map(make_bridge))
            .transpose()
    }
}
