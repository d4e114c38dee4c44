use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use console_log_bridge::tracing_bridge::TracingBridge;
use console_log_bridge::{ConsoleBridgeWriter, LogEvent, LogWriter, Priority, StackFrame};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Print whatever the bridge emits, including TRACE-level lines.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut writer = ConsoleBridgeWriter::new(Arc::new(TracingBridge));
    writer.formatter_mut().set_date_time_format("%H:%M:%S".to_string());

    writer.write(&LogEvent::new(Priority::Informational, "service started").in_file(file!(), line!()))?;

    let failure = LogEvent::new(Priority::Critical, "payment declined")
        .at(Utc::now())
        .in_file("src/billing.rs", 142)
        .with_frame(
            StackFrame::new("src/billing.rs", 142)
                .function("charge")
                .class("Billing")
                .call_type("->")
                .args(vec![json!("order-17"), json!({ "amount": 4200, "currency": "EUR" })]),
        )
        .with_frame(
            StackFrame::new("src/main.rs", 30)
                .function("run")
                .class("App")
                .call_type("::"),
        );
    writer.write(&failure)?;

    Ok(())
}
