use super::{stdout_writer, ConsoleLogger};
use crate::config::Threshold;
use crate::traits::{Logger, LoggerFactory};
use std::fmt;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Builds a fresh [`ConsoleLogger`] per request.
///
/// Every logger shares the factory's threshold cell and output sink, so one
/// `Threshold::set` reconfigures all of them at once.
#[derive(Clone)]
pub struct ConsoleLoggerFactory {
    threshold: Threshold,
    writer: Arc<BoxMakeWriter>,
}

impl Default for ConsoleLoggerFactory {
    fn default() -> Self {
        Self::new(Threshold::global().clone())
    }
}

impl ConsoleLoggerFactory {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            writer: stdout_writer(),
        }
    }

    pub fn with_writer<M>(mut self, make_writer: M) -> Self
    where
        M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        self.writer = Arc::new(BoxMakeWriter::new(make_writer));
        self
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Concrete counterpart of [`LoggerFactory::get_logger`].
    pub fn create(&self, name: &str) -> ConsoleLogger {
        ConsoleLogger::new(name)
            .with_threshold(self.threshold.clone())
            .with_shared_writer(Arc::clone(&self.writer))
    }
}

impl LoggerFactory for ConsoleLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(self.create(name))
    }
}

impl fmt::Debug for ConsoleLoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLoggerFactory")
            .field("threshold", &self.threshold.get())
            .finish_non_exhaustive()
    }
}
