use std::sync::{Arc, Mutex};

use console_log_bridge::tracing_bridge::{TracingBridge, TRACING_TARGET};
use console_log_bridge::{ConsoleBridgeWriter, LogEvent, LogWriter, Priority};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Registry;

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    level: Level,
    channel: Option<String>,
    message: Option<String>,
}

/// Layer that keeps every event emitted under the bridge target.
#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

struct FieldVisitor<'a> {
    channel: &'a mut Option<String>,
    message: &'a mut Option<String>,
}

impl<'a> Visit for FieldVisitor<'a> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "channel" {
            *self.channel = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
        if event.metadata().target() != TRACING_TARGET {
            return;
        }

        let mut channel = None;
        let mut message = None;
        event.record(&mut FieldVisitor { channel: &mut channel, message: &mut message });

        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            channel,
            message,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = Registry::default().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[test]
fn lines_become_tracing_events_at_matching_levels() {
    let writer = ConsoleBridgeWriter::new(Arc::new(TracingBridge));

    let captured = capture(|| {
        for priority in [Priority::Alert, Priority::Warning, Priority::Notice, Priority::Debug] {
            let event = LogEvent::new(priority, "hello")
                .at("t")
                .in_file("main.rs", 1);
            writer.write(&event).unwrap();
        }
        let mut unknown = LogEvent::new(Priority::Debug, "hello").at("t").in_file("main.rs", 1);
        unknown.priority = 12;
        writer.write(&unknown).unwrap();
    });

    let summary: Vec<_> = captured
        .iter()
        .map(|c| (c.level, c.channel.as_deref().unwrap_or("")))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Level::ERROR, "error"),
            (Level::WARN, "warn"),
            (Level::INFO, "info"),
            (Level::TRACE, "trace"),
            (Level::DEBUG, "log"),
        ]
    );
    assert_eq!(
        captured[0].message.as_deref(),
        Some("t ALERT (1) hello in main.rs on line 1")
    );
}
