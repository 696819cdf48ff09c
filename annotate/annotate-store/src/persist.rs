//! Persistence backends and the on-disk format.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::PainLevel;

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Where the store reads and writes its serialized snapshot.
///
/// The store treats writes as best-effort: an `Err` from either method
/// is logged and swallowed, and the in-memory mapping stays
/// authoritative. Implementations must be cheap to call from the
/// interactive path or hand the payload off to a background writer.
pub trait StorageBackend {
    /// Read the persisted payload, `None` if nothing was ever written.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the persisted payload.
    fn write(&self, payload: &str) -> io::Result<()>;

    /// Remove the persisted payload entirely.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed storage at a fixed path.
///
/// Missing files read as `None`; clearing a missing file succeeds.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend storing at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Cloning shares the underlying slot, which lets a test keep a handle
/// to inspect what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently persisted payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Versioned envelope around the `[name, level]` pair list.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    entries: Vec<(String, u8)>,
}

/// Serialize entries into the current on-disk format.
///
/// Entries are written sorted by name so snapshots are byte-stable
/// regardless of assignment order.
pub(crate) fn serialize_entries(mut entries: Vec<(String, u8)>) -> Option<String> {
    entries.sort();
    let envelope = Envelope {
        version: FORMAT_VERSION,
        entries,
    };
    match serde_json::to_string(&envelope) {
        Ok(payload) => Some(payload),
        Err(err) => {
            warn!("failed to serialize pain annotations: {err}");
            None
        }
    }
}

/// Parse a persisted payload into validated `(name, level)` pairs.
///
/// Accepts the current versioned envelope and the legacy bare-array
/// format. Entries with out-of-range levels are dropped with a warning;
/// a payload that parses as neither format yields an empty list.
pub(crate) fn deserialize_entries(payload: &str) -> Vec<(String, PainLevel)> {
    let raw = if let Ok(envelope) = serde_json::from_str::<Envelope>(payload) {
        envelope.entries
    } else if let Ok(legacy) = serde_json::from_str::<Vec<(String, u8)>>(payload) {
        legacy
    } else {
        warn!("unparseable pain annotation payload; starting empty");
        return Vec::new();
    };

    raw.into_iter()
        .filter_map(|(name, value)| match PainLevel::new(value) {
            Ok(level) => Some((name, level)),
            Err(_) => {
                warn!("dropping `{name}`: stored level {value} is out of range");
                None
            }
        })
        .collect()
}
