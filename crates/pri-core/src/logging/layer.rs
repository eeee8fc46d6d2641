//! `tracing` layer writing to a console sink.

use std::fmt::Write as FmtWrite;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::entry::LogEntry;

/// Destination for formatted lines.
pub trait ConsoleSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// A tracing Layer that formats events and forwards them to a sink.
pub struct ConsoleLayer<W> {
    sink: W,
}

impl<W: ConsoleSink> ConsoleLayer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: ConsoleSink + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let level = metadata.level().as_str().to_lowercase();
        let mut entry = LogEntry::new(level, metadata.target(), visitor.message.unwrap_or_default());
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        self.sink.write(*metadata.level(), &entry.to_console_line());
    }
}

/// Visitor that extracts fields from tracing events.
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut text = String::new();
        let _ = write!(text, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(text);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(text));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }
}

/// Sink collecting lines in memory, for tests and diagnostics.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl ConsoleSink for MemorySink {
    fn write(&self, level: Level, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::prelude::*;

    #[test]
    fn formats_message_and_fields() {
        let sink = MemorySink::new();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(section = "vision", visible = true, "section changed");
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.starts_with("WARN "));
        assert!(lines[0].1.contains("section changed"));
        assert!(lines[0].1.contains(r#""section":"vision""#));
        assert!(lines[0].1.contains(r#""visible":true"#));
    }

    #[test]
    fn respects_filter() {
        let sink = MemorySink::new();
        let subscriber = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new("warn"))
            .with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("dropped");
            tracing::error!("kept");
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::ERROR);
    }
}
