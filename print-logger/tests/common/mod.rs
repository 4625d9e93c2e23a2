#![allow(dead_code)]

use print_logger::{ConsoleLogger, Severity, Threshold};
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory sink shared by every clone.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn writer(&self) -> impl Fn() -> Capture + Send + Sync + 'static {
        let capture = self.clone();
        move || capture.clone()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capturing_logger(name: &str, threshold: &Threshold) -> (ConsoleLogger, Capture) {
    let capture = Capture::default();
    let logger = ConsoleLogger::new(name)
        .with_threshold(threshold.clone())
        .with_writer(capture.writer());
    (logger, capture)
}

/// Splits `[ts] [LEVEL] name - message` into its four parts.
pub fn parse_line(line: &str) -> Option<(String, String, String, String)> {
    let rest = line.strip_prefix('[')?;
    let (timestamp, rest) = rest.split_once("] [")?;
    let (level, rest) = rest.split_once("] ")?;
    let (name, message) = rest.split_once(" - ")?;
    Some((
        timestamp.to_string(),
        level.to_string(),
        name.to_string(),
        message.to_string(),
    ))
}

pub fn emitted_levels(threshold: Severity) -> Vec<Severity> {
    Severity::ALL
        .into_iter()
        .filter(|level| level.rank() >= threshold.rank())
        .collect()
}
