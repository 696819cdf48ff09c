//! Procedural skeleton animation and projection.
//!
//! This crate turns a walk-phase angle into a full skeleton frame and
//! projects it through a user-controlled 3D rotation:
//!
//! - [`SkeletonLayout`] - viewport geometry and figure scale
//! - [`generate_keypoints`] - pure walk-phase → [`Pose`] generation
//! - [`transform`] - Y-then-X rotation with perspective projection
//! - [`AnimationState`] - walk phase + rotation state, advanced by a
//!   single update function per tick
//! - [`depth_opacity`] - render-facing opacity from projected depth
//!
//! # Determinism
//!
//! [`generate_keypoints`] is a pure function of its arguments: the same
//! layout and phase always produce the same pose, restartable at any
//! phase value. No timer lives in this crate; the host owns scheduling
//! and calls [`AnimationState::tick`].
//!
//! # Example
//!
//! ```
//! use skeleton_anim::{generate_keypoints, AnimationState, SkeletonLayout};
//! use skeleton_types::landmark;
//!
//! let layout = SkeletonLayout::new(400.0, 640.0);
//! let mut state = AnimationState::new();
//!
//! let pose = generate_keypoints(&layout, state.walk_phase()).unwrap();
//! assert!(pose.get(landmark::LEFT_SHOULDER).is_some());
//!
//! // advance one animation tick (150 ms timer in the host)
//! state.tick(0.15);
//! ```
//!
//! [`Pose`]: skeleton_types::Pose

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::suboptimal_flops
)]

mod error;
mod layout;
mod project;
mod state;
mod walk;

pub use error::{AnimError, Result};
pub use layout::SkeletonLayout;
pub use project::{depth_opacity, project_pose, transform, FOCAL_DISTANCE};
pub use state::{AnimationState, DRAG_SENSITIVITY, PHASE_STEP, RESET_DURATION};
pub use walk::generate_keypoints;
