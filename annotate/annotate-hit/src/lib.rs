//! Region hit-testing for drawn annotations.
//!
//! Given a closed polygon drawn over the full viewport and a skeleton
//! pose expressed in the skeleton container's local coordinates, this
//! crate answers one question: **which named keypoints lie inside the
//! drawn region?**
//!
//! - [`LayerFrame`] - the explicit coordinate reconciliation between
//!   the full-viewport drawing layer and the centered skeleton container
//! - [`point_in_polygon`] - ray-casting containment test
//! - [`nodes_in_region`] - the reconciled region query
//!
//! # Degenerate input
//!
//! A polygon with fewer than three vertices (or one that encloses no
//! area) yields an empty result, never an error: callers treat "no
//! region matched" as a normal outcome.
//!
//! # Example
//!
//! ```
//! use annotate_hit::{nodes_in_region, LayerFrame};
//! use nalgebra::Point2;
//! use skeleton_types::{Keypoint3D, Pose};
//!
//! // container vertically centered in the viewport: offset (0, 80)
//! let frame = LayerFrame::centered(400.0, 800.0, 400.0, 640.0);
//!
//! let pose = Pose::new(vec![Keypoint3D::procedural("left_knee", 100.0, 100.0, 0.0)]);
//! let polygon = vec![
//!     Point2::new(80.0, 160.0),
//!     Point2::new(120.0, 160.0),
//!     Point2::new(120.0, 200.0),
//!     Point2::new(80.0, 200.0),
//! ];
//!
//! // viewport y=180 reconciles to container y=100
//! assert_eq!(nodes_in_region(&polygon, &pose, &frame), vec!["left_knee"]);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod frame;
mod raycast;
mod region;

pub use frame::LayerFrame;
pub use raycast::point_in_polygon;
pub use region::nodes_in_region;
