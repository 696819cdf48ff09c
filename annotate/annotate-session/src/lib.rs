//! Pain-assessment session facade.
//!
//! This crate wires the annotation pipeline together: touch events feed
//! a mode-gated dispatcher, strokes are smoothed and closed, the closed
//! polygon is hit-tested against the projected skeleton, and committed
//! intensities land in the persisted pain store. Hosts embed
//! [`AssessmentSession`] and drive it from their own timer and input
//! loop:
//!
//! - [`InteractionMode`] - whether drags rotate the figure or draw
//! - [`AssessmentSession`] - all interaction state for one sitting
//! - [`PendingRegion`] - a closed stroke awaiting an intensity choice
//! - [`connection_styles`] - per-segment colors and opacity for rendering
//!
//! # Example
//!
//! ```
//! use annotate_hit::LayerFrame;
//! use annotate_session::{AssessmentSession, InteractionMode};
//! use annotate_store::{MemoryBackend, PainAnnotationStore};
//! use nalgebra::Point2;
//! use skeleton_anim::SkeletonLayout;
//!
//! let mut session = AssessmentSession::new(
//!     SkeletonLayout::new(400.0, 640.0),
//!     LayerFrame::centered(400.0, 800.0, 400.0, 640.0),
//!     PainAnnotationStore::new(Box::new(MemoryBackend::new())),
//! );
//!
//! // a horizontal drag in rotate mode spins the figure
//! session.touch_began(Point2::new(100.0, 300.0));
//! session.touch_moved(Point2::new(160.0, 300.0));
//! session.touch_ended().unwrap();
//! assert!(session.animation().rotation_y_degrees() > 0.0);
//!
//! // drawing happens only after an explicit mode switch
//! session.set_mode(InteractionMode::Draw);
//! assert!(session.pending_region().is_none());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod error;
mod mode;
mod render;
mod session;

pub use error::{Result, SessionError};
pub use mode::InteractionMode;
pub use render::{connection_styles, node_color, node_style, ConnectionStyle};
pub use session::{AssessmentSession, PendingRegion};
