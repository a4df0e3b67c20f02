//! Colored console output for filter diagnostics.
//!
//! Provides a `tracing` layer that prints the events emitted at the strict
//! boundary (unsupported elements, bulk application summaries).

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Verbosity
/// follows `RUST_LOG`, defaulting to `trifilter_core=trace`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("trifilter_core=trace"));

        // Another subscriber may already be installed by the host binary.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FilterConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats filter events with colors.
pub struct FilterConsoleLayer;

impl<S: Subscriber> Layer<S> for FilterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("trifilter") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_filter_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    chain: Option<String>,
    operation: Option<String>,
    kept: Option<u64>,
    dropped: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "chain" => self.chain = Some(s.trim_matches('"').to_string()),
            "operation" => self.operation = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "kept" => self.kept = Some(value),
            "dropped" => self.dropped = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "chain" => self.chain = Some(value.to_string()),
            "operation" => self.operation = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_filter_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("unsupported_element") => format!(
            "{} {} unsupported element in {}",
            "WARN".bright_yellow(),
            "[Filter]".bright_cyan(),
            v.chain.as_deref().unwrap_or("?").white().bold()
        ),
        Some("apply") => format!(
            "{} {} {}: kept ({}), dropped ({})",
            "INFO".bright_green(),
            "[Filter]".bright_cyan(),
            v.operation.as_deref().unwrap_or("apply"),
            v.kept.unwrap_or(0).to_string().yellow(),
            v.dropped.unwrap_or(0).to_string().yellow()
        ),
        _ => String::new(),
    }
}
