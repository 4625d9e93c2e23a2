use crate::logger::ConsoleLoggerFactory;
use crate::severity::Severity;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// `tracing_subscriber` layer printing each event's `message` field through a
/// logger named after the event target.
///
/// Filtering happens per event against the threshold rather than through
/// `Layer::enabled`, so lowering the threshold later still reaches callsites
/// that were first hit while disabled.
#[derive(Debug, Clone, Default)]
pub struct PrintLayer {
    factory: ConsoleLoggerFactory,
}

impl PrintLayer {
    pub fn new(factory: ConsoleLoggerFactory) -> Self {
        Self { factory }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

impl<S> Layer<S> for PrintLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Severity::from(metadata.level());
        if !self.factory.threshold().enables(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.factory
            .create(metadata.target())
            .write_unfiltered(level, &visitor.message, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Threshold;
    use crate::logger::test_support::SharedBuffer;
    use tracing_subscriber::prelude::*;

    fn layer(threshold: &Threshold) -> (PrintLayer, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let factory =
            ConsoleLoggerFactory::new(threshold.clone()).with_writer(buffer.make_writer());
        (PrintLayer::new(factory), buffer)
    }

    #[test]
    fn test_event_routed_by_target() {
        let threshold = Threshold::new(Severity::Info);
        let (layer, buffer) = layer(&threshold);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "sync", "copied {} files", 12);
            tracing::debug!(target: "sync", "hidden");
        });

        let out = buffer.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with("] [INFO] sync - copied 12 files\n"));
    }

    #[test]
    fn test_threshold_change_reaches_existing_callsite() {
        let threshold = Threshold::new(Severity::Error);
        let (layer, buffer) = layer(&threshold);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..2 {
                tracing::warn!(target: "late", "now visible");
                threshold.set(Severity::Warn);
            }
        });

        let out = buffer.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("[WARN] late - now visible"));
    }
}
