//! Named markers and the caching marker factory.
//!
//! Loggers accept markers on every marker-qualified call and ignore them;
//! the types exist so facade callers have something real to pass.

use crate::traits::MarkerFactory;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, RwLock};

/// A named tag that may reference other markers.
///
/// Equality and hashing use the name only.
#[derive(Debug)]
pub struct Marker {
    name: String,
    references: RwLock<Vec<Arc<Marker>>>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            references: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a reference unless it is already present or it already
    /// (transitively) contains this marker, which would form a cycle.
    pub fn add(&self, reference: Arc<Marker>) {
        if reference.contains(self) || self.has_direct_reference(&reference) {
            return;
        }
        self.write_refs().push(reference);
    }

    /// Returns whether a direct reference with the same name was removed.
    pub fn remove(&self, reference: &Marker) -> bool {
        let mut refs = self.write_refs();
        match refs.iter().position(|r| r.name == reference.name) {
            Some(index) => {
                refs.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_references(&self) -> bool {
        !self.read_refs().is_empty()
    }

    pub fn references(&self) -> Vec<Arc<Marker>> {
        self.read_refs().clone()
    }

    /// True if `other` is this marker or is reachable through references.
    pub fn contains(&self, other: &Marker) -> bool {
        self.contains_name(&other.name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.name == name || self.read_refs().iter().any(|r| r.contains_name(name))
    }

    fn has_direct_reference(&self, reference: &Marker) -> bool {
        self.read_refs().iter().any(|r| r.name == reference.name)
    }

    fn read_refs(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<Marker>>> {
        self.references.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_refs(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<Marker>>> {
        self.references.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        let refs = self.read_refs();
        if refs.is_empty() {
            return Ok(());
        }
        f.write_str(" [ ")?;
        for (i, reference) in refs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", reference.name)?;
        }
        f.write_str(" ]")
    }
}

/// Caches one [`Marker`] per name.
#[derive(Debug, Default)]
pub struct BasicMarkerFactory {
    markers: Mutex<HashMap<String, Arc<Marker>>>,
}

impl BasicMarkerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Marker>>> {
        self.markers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MarkerFactory for BasicMarkerFactory {
    fn get_marker(&self, name: &str) -> Arc<Marker> {
        Arc::clone(
            self.cache()
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Marker::new(name))),
        )
    }

    fn exists(&self, name: &str) -> bool {
        self.cache().contains_key(name)
    }

    fn detach_marker(&self, name: &str) -> bool {
        self.cache().remove(name).is_some()
    }

    fn get_detached_marker(&self, name: &str) -> Arc<Marker> {
        Arc::new(Marker::new(name))
    }
}
