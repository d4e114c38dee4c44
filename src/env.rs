//! Environment variable names used by this crate for convenient
//! configuration of writers.
//!
//! These are purely helpers; nothing in the crate reads the environment
//! unless [`crate::config::WriterConfig::from_env`] is called.

/// Name of the built-in bridge to bind, e.g. `tracing` or `noop`.
pub const LOG_CONSOLE_BRIDGE_ENV: &str = "LOG_CONSOLE_BRIDGE";

/// chrono strftime pattern for structured timestamps.
pub const LOG_CONSOLE_DATE_FORMAT_ENV: &str = "LOG_CONSOLE_DATE_FORMAT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WriterConfig;

    #[test]
    fn env_or_falls_back_when_unset() {
        assert_eq!(env_or("LOG_CONSOLE_SURELY_UNSET_VAR", "tracing"), "tracing");
    }

    #[test]
    fn writer_config_reads_environment() {
        std::env::set_var(LOG_CONSOLE_BRIDGE_ENV, "noop");
        std::env::set_var(LOG_CONSOLE_DATE_FORMAT_ENV, "  ");
        let cfg = WriterConfig::from_env();
        std::env::remove_var(LOG_CONSOLE_BRIDGE_ENV);
        std::env::remove_var(LOG_CONSOLE_DATE_FORMAT_ENV);

        assert_eq!(cfg.instance.as_deref(), Some("noop"));
        assert_eq!(cfg.date_time_format, None);
    }
}
