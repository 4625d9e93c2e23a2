use crate::severity::Severity;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fmt;

/// Local wall-clock format of the leading `[...]` field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log call, captured at the instant it passed the threshold.
///
/// Displays as `[yyyy-MM-dd HH:mm:ss] [LEVEL] name - message` plus a newline,
/// followed by the cause's trace when present.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Severity,
    pub logger_name: &'a str,
    pub message: &'a str,
    pub cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        level: Severity,
        logger_name: &'a str,
        message: &'a str,
        cause: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            logger_name,
            message,
            cause,
        }
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{}] [{}] {} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.logger_name,
            self.message
        )?;

        if let Some(cause) = self.cause {
            write_trace(f, cause)?;
        }
        Ok(())
    }
}

/// The error itself, then one `Caused by:` line per `source()` link.
fn write_trace(f: &mut fmt::Formatter<'_>, cause: &(dyn Error + 'static)) -> fmt::Result {
    writeln!(f, "{}", cause)?;
    let mut source = cause.source();
    while let Some(err) = source {
        writeln!(f, "Caused by: {}", err)?;
        source = err.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug)]
    struct Wrapped {
        inner: std::io::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.inner)
        }
    }

    fn fixed_record<'a>(cause: Option<&'a (dyn Error + 'static)>) -> LogRecord<'a> {
        LogRecord {
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap(),
            level: Severity::Warn,
            logger_name: "app.db",
            message: "pool exhausted",
            cause,
        }
    }

    #[test]
    fn test_render_line_shape() {
        assert_eq!(
            fixed_record(None).to_string(),
            "[2024-03-09 07:05:01] [WARN] app.db - pool exhausted\n"
        );
    }

    #[test]
    fn test_render_cause_chain() {
        let err = Wrapped {
            inner: std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timed out"),
        };
        let rendered = fixed_record(Some(&err)).to_string();

        assert_eq!(
            rendered,
            "[2024-03-09 07:05:01] [WARN] app.db - pool exhausted\n\
             request failed\n\
             Caused by: socket timed out\n"
        );
    }

    #[test]
    fn test_new_uses_current_time() {
        let before = Local::now();
        let record = LogRecord::new(Severity::Info, "n", "m", None);
        assert!(record.timestamp >= before);
        assert_eq!(record.level, Severity::Info);
    }
}
