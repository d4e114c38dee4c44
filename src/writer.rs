use crate::error::WriterError;
use crate::record::LogEvent;

/// Synchronous destination for [`LogEvent`]s dispatched by a logger.
///
/// Implementations render the event and hand it to a concrete transport
/// (browser console, stream, etc). Failures are returned to the caller
/// as-is; writers neither retry nor swallow them.
pub trait LogWriter: Send + Sync {
    /// Write a single event.
    ///
    /// **Returns**
    /// - `Ok(())` if the transport accepted the event.
    /// - `Err(..)` if the writer is misconfigured or the transport failed.
    fn write(&self, event: &LogEvent) -> Result<(), WriterError>;

    /// Flush any buffered output. Default implementation is a no-op.
    fn flush(&self) -> Result<(), WriterError> {
        Ok(())
    }
}
