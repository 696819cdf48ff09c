//! Pain annotation storage.
//!
//! The final sink of the annotation pipeline: a mapping from keypoint
//! name to a validated pain level, mirrored synchronously in memory and
//! persisted best-effort through a pluggable backend.
//!
//! - [`PainLevel`] - integer severity in `[0, 10]`; absence of a key
//!   means "no pain recorded", which is distinct from an explicit 0
//! - [`PainAnnotationStore`] - the in-memory map plus persistence
//! - [`StorageBackend`] - the persistence seam ([`FileBackend`] for
//!   devices, [`MemoryBackend`] for tests and ephemeral sessions)
//! - [`pain_color`] - the green→orange→red render color scale
//!
//! # Persistence policy
//!
//! The in-memory map is authoritative: every mutation lands in memory
//! synchronously, then a serialized snapshot is handed to the backend.
//! Backend failures are logged and swallowed; an annotation session
//! never fails because a disk write did. Unparseable stored data loads
//! as an empty mapping, with a warning.
//!
//! The on-disk format is a JSON list of `[name, level]` pairs wrapped
//! in a versioned envelope; the unversioned bare-array format written
//! by earlier releases is still read transparently.
//!
//! # Example
//!
//! ```
//! use annotate_store::{MemoryBackend, PainAnnotationStore, PainLevel};
//!
//! let mut store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
//! let level = PainLevel::try_from(7).unwrap();
//! store.assign(["left_knee", "left_shin"], level);
//!
//! assert_eq!(store.get("left_knee"), Some(level));
//! assert_eq!(store.get("right_knee"), None); // no pain recorded
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod error;
mod level;
mod persist;
mod store;

pub use error::{Result, StoreError};
pub use level::{pain_color, PainLevel};
pub use persist::{FileBackend, MemoryBackend, StorageBackend};
pub use store::PainAnnotationStore;
