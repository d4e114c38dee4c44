pub mod priority;
pub mod record;
pub mod formatter;
pub mod bridge;
pub mod writer;
pub mod console;
pub mod error;

pub mod config;
pub mod env;
pub mod noop_bridge;
pub mod tracing_bridge;

pub use bridge::{BridgeError, ConsoleBridge, ConsoleChannel};
pub use console::ConsoleBridgeWriter;
pub use error::WriterError;
pub use formatter::{ExceptionFormatter, Formatter};
pub use priority::Priority;
pub use record::{EventExtra, LogEvent, StackFrame, Timestamp};
pub use writer::LogWriter;
