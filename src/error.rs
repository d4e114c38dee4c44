use crate::bridge::BridgeError;

/// Errors produced while building or driving a writer.
#[derive(thiserror::Error, Debug)]
pub enum WriterError {
    /// Construction input was neither absent nor a usable bridge.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `write` was called before any bridge was assigned.
    #[error("no console bridge is set on this writer")]
    Unbound,

    /// The bridge rejected the line.
    #[error("console bridge failed: {0}")]
    Bridge(#[source] BridgeError),
}
