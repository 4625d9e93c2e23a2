/// Logs a `format!`-style message at an explicit level.
///
/// The message is only built when the level is enabled.
///
/// ```
/// use print_logger::{log_at, ConsoleLogger, Severity};
///
/// let logger = ConsoleLogger::new("jobs");
/// log_at!(logger, Severity::Debug, "skipped {} entries", 3);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, &::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}
