use crate::severity::Severity;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

/// Shared, thread-safe cell holding the minimum severity that gets written.
///
/// Cloning yields another handle to the same cell. Every logger reads the
/// cell once per call, so a change is picked up by the next call on any
/// thread without locking.
#[derive(Debug, Clone)]
pub struct Threshold {
    rank: Arc<AtomicU8>,
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl Threshold {
    /// Creates an independent cell, detached from the process-wide one.
    pub fn new(level: Severity) -> Self {
        Self {
            rank: Arc::new(AtomicU8::new(level.rank())),
        }
    }

    /// The process-wide cell, initialized to `INFO` on first access.
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<Threshold> = OnceLock::new();
        INSTANCE.get_or_init(Threshold::default)
    }

    pub fn get(&self) -> Severity {
        Severity::from_rank(self.rank.load(Ordering::SeqCst))
    }

    pub fn set(&self, level: Severity) {
        self.rank.store(level.rank(), Ordering::SeqCst);
    }

    /// Case-insensitive update; absent or unrecognized names store `INFO`.
    pub fn set_from_name(&self, name: Option<&str>) {
        self.set(Severity::from_name_or_default(name));
    }

    /// Whether a record at `level` passes the current threshold.
    pub fn enables(&self, level: Severity) -> bool {
        level.rank() >= self.rank.load(Ordering::SeqCst)
    }

    /// Whether both handles point at the same cell.
    pub fn shares_cell_with(&self, other: &Threshold) -> bool {
        Arc::ptr_eq(&self.rank, &other.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_info() {
        assert_eq!(Threshold::default().get(), Severity::Info);
    }

    #[test]
    fn test_clones_share_the_cell() {
        let threshold = Threshold::new(Severity::Debug);
        let handle = threshold.clone();
        handle.set(Severity::Error);

        assert_eq!(threshold.get(), Severity::Error);
        assert!(threshold.shares_cell_with(&handle));
        assert!(!threshold.shares_cell_with(&Threshold::default()));
    }

    #[test]
    fn test_enables_by_rank() {
        let threshold = Threshold::new(Severity::Warn);
        assert!(!threshold.enables(Severity::Trace));
        assert!(!threshold.enables(Severity::Info));
        assert!(threshold.enables(Severity::Warn));
        assert!(threshold.enables(Severity::Error));
    }

    #[test]
    fn test_set_from_name() {
        let threshold = Threshold::new(Severity::Error);
        threshold.set_from_name(Some("dEbUg"));
        assert_eq!(threshold.get(), Severity::Debug);

        threshold.set_from_name(Some("nonsense"));
        assert_eq!(threshold.get(), Severity::Info);

        threshold.set(Severity::Trace);
        threshold.set_from_name(None);
        assert_eq!(threshold.get(), Severity::Info);
    }
}
