//! Tracing integration
//!
//! Forwards `tracing` events into a [`Logger`] so library code that logs
//! through `tracing` lands in the same console stream and session file.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use super::level::LogLevel;
use super::logger::Logger;

/// A tracing layer that emits each event's message through a [`Logger`]
pub struct SessionLayer {
    logger: Arc<Logger>,
}

impl SessionLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for SessionLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        // Field-only events have no line to write
        let Some(message) = visitor.message else {
            return;
        };

        let level = LogLevel::from(*event.metadata().level());
        self.logger.emit(level, &message);
    }
}

/// Pulls the `message` field out of an event; other fields are dropped
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let mut buf = String::new();
            let _ = write!(&mut buf, "{:?}", value);
            self.message = Some(buf);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }
}

/// Install a global tracing subscriber that forwards every event to `logger`
pub fn init_tracing(logger: Arc<Logger>) -> Result<()> {
    tracing_subscriber::registry()
        .with(SessionLayer::new(logger))
        .try_init()
        .context("Failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfig;
    use crate::logging::test_support::{may_first_2pm, FixedClock, SharedBuffer};
    use tempfile::TempDir;

    fn logger_in(temp_dir: &TempDir, console: &SharedBuffer) -> Arc<Logger> {
        Arc::new(
            Logger::builder(LoggerConfig {
                logs_dir: temp_dir.path().join("logs"),
                ..LoggerConfig::default()
            })
            .console_writer(console.clone())
            .clock(FixedClock(may_first_2pm()))
            .build(),
        )
    }

    #[test]
    fn test_layer_forwards_events() {
        let temp_dir = TempDir::new().unwrap();
        let console = SharedBuffer::default();
        let logger = logger_in(&temp_dir, &console);

        let subscriber =
            tracing_subscriber::registry().with(SessionLayer::new(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("room {} opened", 7);
            tracing::trace!(user = "ann", "joined");
            tracing::warn!("slow client");
            tracing::error!("socket closed");
        });

        let expected = "[14:05:02] [INFO] room 7 opened\n\
                        [14:05:02] [DEBUG] joined\n\
                        [14:05:02] [WARN] slow client\n\
                        [14:05:02] [ERROR] socket closed\n";
        assert_eq!(console.contents(), expected);
        assert_eq!(
            std::fs::read_to_string(logger.session_path().unwrap()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_layer_skips_events_without_message() {
        let temp_dir = TempDir::new().unwrap();
        let console = SharedBuffer::default();
        let logger = logger_in(&temp_dir, &console);

        let subscriber =
            tracing_subscriber::registry().with(SessionLayer::new(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(user = "ann");
            tracing::info!("kept");
        });

        assert_eq!(console.contents(), "[14:05:02] [INFO] kept\n");
    }
}
