//! Freehand annotation strokes.
//!
//! This crate turns a continuous touch-drag gesture into a closed
//! polygon suitable for region hit-testing:
//!
//! - [`FreehandPathCapture`] - distance-decimated point accumulation
//!   with an explicit begin/extend/end/cancel state machine
//! - [`smooth`] - Catmull-Rom spline interpolation over a raw sequence
//! - [`close_loop`] - two-tier loop closing (direct append for small
//!   gaps, synthesized linear segments for large ones)
//! - [`DrawingPoint`] / [`DrawingPath`] - the captured stroke types
//!
//! # Pipeline
//!
//! ```text
//! touch events → FreehandPathCapture → DrawingPath → close_loop → polygon
//! ```
//!
//! Capture is O(1) per touch event and the smoothing pass is O(n) in
//! captured points, so the whole pipeline stays comfortably inside a
//! touch-event budget.
//!
//! # Example
//!
//! ```
//! use annotate_stroke::FreehandPathCapture;
//! use nalgebra::Point2;
//!
//! let mut capture = FreehandPathCapture::new();
//! capture.begin(Point2::new(0.0, 0.0));
//! for i in 1..8 {
//!     capture.extend(Point2::new(f64::from(i) * 10.0, 0.0));
//! }
//!
//! let path = capture.end().unwrap();
//! let polygon = path.close();
//! assert!(polygon.is_closed_loop());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::suboptimal_flops
)]

mod capture;
mod error;
mod path;
mod smooth;

pub use capture::{FreehandPathCapture, MIN_POINT_DISTANCE, MIN_PROMOTION_POINTS};
pub use error::{PathError, Result};
pub use path::{DrawingPath, DrawingPoint, PathId};
pub use smooth::{close_loop, smooth, CLOSE_GAP_THRESHOLD, CLOSE_STEP_LENGTH};
