//! The in-memory pain annotation map.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::persist::{deserialize_entries, serialize_entries};
use crate::{PainLevel, StorageBackend};

/// Mapping from keypoint name to pain level, persisted best-effort.
///
/// Every mutation updates the in-memory map synchronously and then
/// hands a serialized snapshot to the [`StorageBackend`]. Backend
/// failures are logged and swallowed; the map is authoritative for the
/// session either way. The renderer consults the map on every frame to
/// recolor connections whose endpoints carry an entry.
///
/// Absence of a key means "no pain recorded". An explicit
/// [`PainLevel::NONE`] entry is a recorded zero-pain rating and is kept.
///
/// # Example
///
/// ```
/// use annotate_store::{MemoryBackend, PainAnnotationStore, PainLevel};
///
/// let mut store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
/// store.assign(["left_shoulder", "left_elbow"], PainLevel::try_from(6).unwrap());
/// assert_eq!(store.len(), 2);
///
/// store.clear();
/// assert!(store.is_empty());
/// ```
pub struct PainAnnotationStore {
    levels: HashMap<String, PainLevel>,
    backend: Box<dyn StorageBackend>,
}

impl std::fmt::Debug for PainAnnotationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PainAnnotationStore")
            .field("levels", &self.levels)
            .finish_non_exhaustive()
    }
}

impl PainAnnotationStore {
    /// Create an empty store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            levels: HashMap::new(),
            backend,
        }
    }

    /// Create a store and populate it from the backend's persisted
    /// payload.
    ///
    /// A missing or unreadable payload yields an empty store; corrupted
    /// entries are dropped with a warning. Startup never fails on bad
    /// storage.
    #[must_use]
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let levels = match backend.read() {
            Ok(Some(payload)) => deserialize_entries(&payload).into_iter().collect(),
            Ok(None) => HashMap::new(),
            Err(err) => {
                warn!("failed to read pain annotations: {err}");
                HashMap::new()
            }
        };
        debug!("loaded {} pain annotations", levels.len());
        Self { levels, backend }
    }

    /// Set `level` for every name in `names`, overwriting existing
    /// entries, then persist a snapshot best-effort.
    pub fn assign<I, S>(&mut self, names: I, level: PainLevel)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.levels.insert(name.into(), level);
        }
        self.persist();
    }

    /// The recorded level for a keypoint, `None` if none was recorded.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<PainLevel> {
        self.levels.get(name).copied()
    }

    /// Remove a single keypoint's entry, persisting the change.
    pub fn remove(&mut self, name: &str) -> Option<PainLevel> {
        let removed = self.levels.remove(name);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Number of recorded annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over `(name, level)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PainLevel)> {
        self.levels.iter().map(|(name, level)| (name.as_str(), *level))
    }

    /// Empty the store and delete the persisted payload, for starting a
    /// fresh assessment.
    pub fn clear(&mut self) {
        self.levels.clear();
        if let Err(err) = self.backend.clear() {
            warn!("failed to clear persisted pain annotations: {err}");
        }
    }

    /// Serialize the current map and hand it to the backend; failures
    /// are logged and swallowed.
    fn persist(&self) {
        let entries: Vec<(String, u8)> = self
            .levels
            .iter()
            .map(|(name, level)| (name.clone(), level.value()))
            .collect();
        let Some(payload) = serialize_entries(entries) else {
            return;
        };
        match self.backend.write(&payload) {
            Ok(()) => debug!("persisted {} pain annotations", self.levels.len()),
            Err(err) => warn!("failed to persist pain annotations: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use std::io;

    #[allow(clippy::unwrap_used)]
    fn level(v: u8) -> PainLevel {
        PainLevel::new(v).unwrap()
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn assign_overwrites_and_persists() {
        let backend = MemoryBackend::new();
        let mut store = PainAnnotationStore::new(Box::new(backend.clone()));

        store.assign(["left_knee", "right_hip"], level(7));
        store.assign(["right_hip"], level(3));

        assert_eq!(store.get("left_knee"), Some(level(7)));
        assert_eq!(store.get("right_hip"), Some(level(3)));
        assert_eq!(store.get("left_hip"), None);

        let payload = backend.payload().unwrap();
        assert!(payload.contains(r#"["left_knee",7]"#));
        assert!(payload.contains(r#"["right_hip",3]"#));
    }

    #[test]
    fn round_trip_through_backend() {
        let backend = MemoryBackend::new();
        {
            let mut store = PainAnnotationStore::new(Box::new(backend.clone()));
            store.assign(["left_knee"], level(7));
            store.assign(["right_hip"], level(3));
        }

        let reloaded = PainAnnotationStore::load(Box::new(backend));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("left_knee"), Some(level(7)));
        assert_eq!(reloaded.get("right_hip"), Some(level(3)));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn loads_legacy_format() {
        let backend = MemoryBackend::new();
        StorageBackend::write(&backend, r#"[["left_knee",7],["right_hip",3]]"#).unwrap();

        let store = PainAnnotationStore::load(Box::new(backend));
        assert_eq!(store.get("left_knee"), Some(level(7)));
        assert_eq!(store.get("right_hip"), Some(level(3)));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn corrupt_payload_loads_empty() {
        let backend = MemoryBackend::new();
        StorageBackend::write(&backend, "{{{ not json").unwrap();

        let store = PainAnnotationStore::load(Box::new(backend));
        assert!(store.is_empty());
    }

    #[test]
    fn explicit_zero_differs_from_absent() {
        let mut store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
        store.assign(["left_wrist"], PainLevel::NONE);
        assert_eq!(store.get("left_wrist"), Some(PainLevel::NONE));
        assert_eq!(store.get("right_wrist"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_empties_memory_and_backend() {
        let backend = MemoryBackend::new();
        let mut store = PainAnnotationStore::new(Box::new(backend.clone()));
        store.assign(["left_knee"], level(5));
        assert!(backend.payload().is_some());

        store.clear();
        assert!(store.is_empty());
        assert!(backend.payload().is_none());
    }

    /// Backend that always fails, to prove failures are swallowed.
    struct BrokenBackend;

    impl StorageBackend for BrokenBackend {
        fn read(&self) -> io::Result<Option<String>> {
            Err(io::Error::other("disk on fire"))
        }
        fn write(&self, _payload: &str) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
        fn clear(&self) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn write_failures_leave_memory_authoritative() {
        let mut store = PainAnnotationStore::new(Box::new(BrokenBackend));
        store.assign(["left_knee"], level(8));
        assert_eq!(store.get("left_knee"), Some(level(8)));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn read_failure_loads_empty() {
        let store = PainAnnotationStore::load(Box::new(BrokenBackend));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_entry() {
        let mut store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
        store.assign(["left_knee"], level(4));
        assert_eq!(store.remove("left_knee"), Some(level(4)));
        assert_eq!(store.remove("left_knee"), None);
        assert!(store.is_empty());
    }
}
