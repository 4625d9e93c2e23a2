//! The console sink: level filtering, rendering and the write itself.

mod factory;
mod macros;
mod record;

pub use factory::ConsoleLoggerFactory;
pub use record::{LogRecord, TIMESTAMP_FORMAT};

use crate::config::Threshold;
use crate::severity::Severity;
use crate::traits::Logger;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

pub(crate) fn stdout_writer() -> Arc<BoxMakeWriter> {
    Arc::new(BoxMakeWriter::new(io::stdout))
}

/// A named logger printing `[timestamp] [LEVEL] name - message` lines.
///
/// The name is fixed at construction. The threshold is not owned: the
/// logger holds a handle to a shared [`Threshold`] cell (the process-wide
/// one unless another is injected) and reads it on every call.
///
/// # Example
///
/// ```
/// use print_logger::{ConsoleLogger, Logger, Severity, Threshold};
///
/// let threshold = Threshold::new(Severity::Warn);
/// let logger = ConsoleLogger::new("billing").with_threshold(threshold.clone());
///
/// assert!(!logger.is_enabled(Severity::Info));
/// threshold.set(Severity::Debug);
/// assert!(logger.is_enabled(Severity::Info));
/// ```
#[derive(Clone)]
pub struct ConsoleLogger {
    name: String,
    threshold: Threshold,
    writer: Arc<BoxMakeWriter>,
}

impl ConsoleLogger {
    /// Creates a logger bound to the process-wide threshold, writing to stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: Threshold::global().clone(),
            writer: stdout_writer(),
        }
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Redirects output, e.g. to a buffer in tests.
    pub fn with_writer<M>(mut self, make_writer: M) -> Self
    where
        M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        self.writer = Arc::new(BoxMakeWriter::new(make_writer));
        self
    }

    pub(crate) fn with_shared_writer(mut self, writer: Arc<BoxMakeWriter>) -> Self {
        self.writer = writer;
        self
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Renders and writes without consulting the threshold. Callers that
    /// already made the filter decision use this to read the cell only once.
    pub(crate) fn write_unfiltered(
        &self,
        level: Severity,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        self.emit(&LogRecord::new(level, &self.name, message, cause));
    }

    /// Writes the rendered record in one `write_all`, so the line and its
    /// trace reach the stream together.
    ///
    /// # Panics
    ///
    /// Panics if the output stream rejects the write, as `println!` does.
    fn emit(&self, record: &LogRecord<'_>) {
        let rendered = record.to_string();
        let mut writer = self.writer.make_writer();
        if let Err(err) = writer
            .write_all(rendered.as_bytes())
            .and_then(|()| writer.flush())
        {
            panic!("failed writing log record for '{}': {}", self.name, err);
        }
    }
}

impl Logger for ConsoleLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Severity) -> bool {
        self.threshold.enables(level)
    }

    fn log_with_cause(&self, level: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) {
        if !self.threshold.enables(level) {
            return;
        }
        self.write_unfiltered(level, message, cause);
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("name", &self.name)
            .field("threshold", &self.threshold.get())
            .finish_non_exhaustive()
    }
}
