use std::sync::Arc;

use console_log_bridge::{
    BridgeError, ConsoleBridge, ConsoleBridgeWriter, LogEvent, LogWriter, Priority,
};

/// Example of plugging in a custom console transport by implementing
/// `ConsoleBridge` directly. Imagine this forwards lines to a devtools
/// websocket; for the sake of example it prints them with a console-style
/// prefix.
struct PrefixBridge;

impl PrefixBridge {
    fn emit(&self, method: &str, line: &str) -> Result<(), BridgeError> {
        println!("console.{}({:?})", method, line);
        Ok(())
    }
}

impl ConsoleBridge for PrefixBridge {
    fn error(&self, line: &str) -> Result<(), BridgeError> {
        self.emit("error", line)
    }

    fn warn(&self, line: &str) -> Result<(), BridgeError> {
        self.emit("warn", line)
    }

    fn info(&self, line: &str) -> Result<(), BridgeError> {
        self.emit("info", line)
    }

    fn trace(&self, line: &str) -> Result<(), BridgeError> {
        self.emit("trace", line)
    }

    fn log(&self, line: &str) -> Result<(), BridgeError> {
        self.emit("log", line)
    }
}

fn main() {
    let writer = ConsoleBridgeWriter::new(Arc::new(PrefixBridge));

    for priority in Priority::ALL {
        let event = LogEvent::new(priority, "custom bridge example").in_file(file!(), line!());
        if let Err(e) = writer.write(&event) {
            eprintln!("console write failed: {}", e);
        }
    }
}
