//! Captured stroke types.

use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::smooth::close_loop;
use crate::{PathError, Result};

static NEXT_PATH_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, generation-time-unique stroke identifier.
///
/// Identifiers are unique within a process run; they are not persisted
/// (completed strokes are transient; only per-keypoint pain levels
/// survive annotation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathId(String);

impl PathId {
    pub(crate) fn next() -> Self {
        let n = NEXT_PATH_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("path-{n}"))
    }

    /// The identifier as a string token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single screen-space point of a stroke.
///
/// `body_part` and `pain_level` start out `None`; the session layer
/// fills them in after hit-testing and intensity selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawingPoint {
    /// Screen-space position (full-viewport coordinates).
    pub position: Point2<f64>,
    /// Keypoint name this point was matched to, if any.
    pub body_part: Option<String>,
    /// Pain level assigned to this point's region, if any.
    pub pain_level: Option<u8>,
}

impl DrawingPoint {
    /// A bare point with no annotation attached.
    #[must_use]
    pub const fn new(position: Point2<f64>) -> Self {
        Self {
            position,
            body_part: None,
            pain_level: None,
        }
    }
}

/// A completed freehand stroke.
///
/// Produced by [`FreehandPathCapture::end`] once a gesture accumulates
/// more than three decimated points; promoted to a closed polygon by
/// [`close`](Self::close). The path is transient input to hit-testing
/// and is dropped once pain levels are written to the store.
///
/// [`FreehandPathCapture::end`]: crate::FreehandPathCapture::end
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawingPath {
    /// Unique stroke identifier.
    pub id: PathId,
    /// Ordered stroke points.
    pub points: Vec<DrawingPoint>,
    /// Keypoint name the whole region was attributed to, if any.
    pub body_part: Option<String>,
    /// Pain level assigned to the region, if any.
    pub pain_level: Option<u8>,
    is_closed_loop: bool,
}

impl DrawingPath {
    pub(crate) fn from_raw(points: Vec<Point2<f64>>) -> Self {
        Self {
            id: PathId::next(),
            points: points.into_iter().map(DrawingPoint::new).collect(),
            body_part: None,
            pain_level: None,
            is_closed_loop: false,
        }
    }

    /// Whether the path has been closed into a polygon.
    #[must_use]
    pub fn is_closed_loop(&self) -> bool {
        self.is_closed_loop
    }

    /// The raw positions of the stroke, in order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Smooth the stroke and force it into a closed polygon.
    ///
    /// Applies Catmull-Rom smoothing followed by the two-tier closing
    /// policy of [`close_loop`]. Annotation metadata carries over;
    /// per-point metadata is reset because the point set changes.
    #[must_use]
    pub fn close(self) -> Self {
        let closed = close_loop(&self.positions());
        Self {
            id: self.id,
            points: closed.into_iter().map(DrawingPoint::new).collect(),
            body_part: self.body_part,
            pain_level: self.pain_level,
            is_closed_loop: true,
        }
    }

    /// Attach a validated pain level to the whole region.
    pub fn with_pain_level(mut self, level: u8) -> Result<Self> {
        if level > 10 {
            return Err(PathError::PainLevelOutOfRange(level));
        }
        self.pain_level = Some(level);
        Ok(self)
    }
}
