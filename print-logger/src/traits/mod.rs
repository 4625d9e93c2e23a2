use crate::error::FormatError;
use crate::marker::Marker;
use crate::severity::Severity;
use crate::utils::{format_template, FormatArg};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// Named, leveled logging sink.
///
/// Implementations provide [`Logger::log_with_cause`]; every other arity
/// (plain message, printf template, marker-qualified, per-level shorthand)
/// funnels into it.
pub trait Logger: Send + Sync {
    /// The name given at construction.
    fn name(&self) -> &str;

    /// Whether a call at `level` would be written right now.
    fn is_enabled(&self, level: Severity) -> bool;

    /// Writes `message` at `level` if enabled, followed by the diagnostic
    /// trace of `cause` when one is given.
    fn log_with_cause(&self, level: Severity, message: &str, cause: Option<&(dyn Error + 'static)>);

    fn log(&self, level: Severity, message: &str) {
        self.log_with_cause(level, message, None);
    }

    /// Substitutes `args` into the printf-style `template`, then logs it.
    ///
    /// The template is rendered before the threshold check, so a mismatch is
    /// reported even for a disabled level.
    fn log_fmt(&self, level: Severity, template: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        let message = format_template(template, args)?;
        self.log(level, &message);
        Ok(())
    }

    /// Markers are accepted and ignored.
    fn is_enabled_with_marker(&self, _marker: &Marker, level: Severity) -> bool {
        self.is_enabled(level)
    }

    /// Markers are accepted and ignored.
    fn log_with_marker(
        &self,
        _marker: &Marker,
        level: Severity,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        self.log_with_cause(level, message, cause);
    }

    fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

pub trait LoggerFactory: Send + Sync {
    /// Returns a logger carrying `name`. Safe to call from any thread.
    fn get_logger(&self, name: &str) -> Arc<dyn Logger>;
}

pub trait MarkerFactory: Send + Sync {
    /// Returns the shared marker for `name`, creating it on first use.
    fn get_marker(&self, name: &str) -> Arc<Marker>;

    fn exists(&self, name: &str) -> bool;

    /// Forgets the shared marker for `name`. Returns whether one existed.
    fn detach_marker(&self, name: &str) -> bool;

    /// Creates a marker that is not registered with the factory.
    fn get_detached_marker(&self, name: &str) -> Arc<Marker>;
}

/// Per-context key-value store for diagnostic metadata.
pub trait MdcAdapter: Send + Sync {
    fn put(&self, key: &str, value: &str);

    fn get(&self, key: &str) -> Option<String>;

    fn remove(&self, key: &str);

    fn clear(&self);

    fn copy_of_context_map(&self) -> Option<HashMap<String, String>>;

    fn set_context_map(&self, context: HashMap<String, String>);

    fn push_by_key(&self, key: &str, value: &str);

    fn pop_by_key(&self, key: &str) -> Option<String>;

    fn copy_of_deque_by_key(&self, key: &str) -> Option<Vec<String>>;

    fn clear_deque_by_key(&self, key: &str);
}

/// Registration point handing the facade its factories and adapters.
pub trait ServiceProvider: Send + Sync {
    fn initialize(&self);

    fn logger_factory(&self) -> &dyn LoggerFactory;

    fn marker_factory(&self) -> &dyn MarkerFactory;

    fn mdc_adapter(&self) -> &dyn MdcAdapter;

    /// Facade API version this provider was built against.
    fn requested_api_version(&self) -> &str;
}
