use crate::bridge::{BridgeError, ConsoleBridge};

/// Bridge whose five channels accept every line and discard it.
///
/// Selected by the `noop` (or `null`) bridge name, it lets a configured
/// writer stay bound while no browser console is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBridge;

impl ConsoleBridge for NoopBridge {
    fn error(&self, _line: &str) -> Result<(), BridgeError> {
        Ok(())
    }

    fn warn(&self, _line: &str) -> Result<(), BridgeError> {
        Ok(())
    }

    fn info(&self, _line: &str) -> Result<(), BridgeError> {
        Ok(())
    }

    fn trace(&self, _line: &str) -> Result<(), BridgeError> {
        Ok(())
    }

    fn log(&self, _line: &str) -> Result<(), BridgeError> {
        Ok(())
    }
}
