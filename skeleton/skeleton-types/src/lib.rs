//! Anatomical landmark types for the pain-annotation engine.
//!
//! This crate provides the foundational types shared by the procedural
//! skeleton generator, the region hit tester, and the pain annotation
//! store:
//!
//! - [`landmark`] - canonical snake_case landmark names (~90 of them)
//! - [`Keypoint3D`] - a named landmark position with a confidence score
//! - [`SkeletonConnection`] - an unordered pair of landmark names
//! - [`CONNECTIONS`] - the fixed anatomical adjacency graph
//! - [`Pose`] - an owned keypoint set with name lookup
//!
//! # Layer 0 Crate
//!
//! This crate has **zero UI-toolkit dependencies**. It can be used from:
//!
//! - Mobile renderer hosts
//! - CLI tools
//! - Servers
//! - Test harnesses
//!
//! # Names Are Open
//!
//! The canonical names in [`landmark`] cover the procedural skeleton.
//! External pose sources (camera-based trackers) may carry their own
//! names; [`Pose`] accepts any name, and only the confidence score is
//! validated at the boundary.
//!
//! # Example
//!
//! ```
//! use skeleton_types::{landmark, Keypoint3D, Pose};
//!
//! let pose = Pose::new(vec![
//!     Keypoint3D::procedural(landmark::LEFT_SHOULDER, 120.0, 210.0, 0.0),
//!     Keypoint3D::procedural(landmark::LEFT_ELBOW, 105.0, 260.0, 4.0),
//! ]);
//!
//! let shoulder = pose.get(landmark::LEFT_SHOULDER).unwrap();
//! assert!((shoulder.position.x - 120.0).abs() < 1e-10);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod connection;
mod error;
mod keypoint;
pub mod landmark;
mod pose;

pub use connection::{SkeletonConnection, CONNECTIONS};
pub use error::{Result, SkeletonError};
pub use keypoint::Keypoint3D;
pub use pose::Pose;
