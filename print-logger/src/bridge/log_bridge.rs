use crate::logger::ConsoleLoggerFactory;
use crate::severity::Severity;
use log::{Metadata, Record};

/// `log::Log` backend: each record is printed by a logger named after the
/// record's target.
#[derive(Debug, Clone, Default)]
pub struct LogBridge {
    factory: ConsoleLoggerFactory,
}

impl LogBridge {
    pub fn new(factory: ConsoleLoggerFactory) -> Self {
        Self { factory }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.factory
            .threshold()
            .enables(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = Severity::from(record.level());
        let message = record.args().to_string();
        self.factory
            .create(record.target())
            .write_unfiltered(level, &message, None);
    }

    fn flush(&self) {}
}
