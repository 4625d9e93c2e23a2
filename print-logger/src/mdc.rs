//! No-operation diagnostic context adapter.

use crate::traits::MdcAdapter;
use std::collections::HashMap;

/// A diagnostic-context adapter that stores nothing.
///
/// Every write is dropped and every read comes back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopMdcAdapter;

impl MdcAdapter for NopMdcAdapter {
    #[inline]
    fn put(&self, _key: &str, _value: &str) {}

    #[inline]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    #[inline]
    fn remove(&self, _key: &str) {}

    #[inline]
    fn clear(&self) {}

    #[inline]
    fn copy_of_context_map(&self) -> Option<HashMap<String, String>> {
        None
    }

    #[inline]
    fn set_context_map(&self, _context: HashMap<String, String>) {}

    #[inline]
    fn push_by_key(&self, _key: &str, _value: &str) {}

    #[inline]
    fn pop_by_key(&self, _key: &str) -> Option<String> {
        None
    }

    #[inline]
    fn copy_of_deque_by_key(&self, _key: &str) -> Option<Vec<String>> {
        None
    }

    #[inline]
    fn clear_deque_by_key(&self, _key: &str) {}
}
