//! The assessment session facade.

use nalgebra::Point2;
use tracing::{debug, info};

use annotate_hit::{nodes_in_region, LayerFrame};
use annotate_store::{PainAnnotationStore, PainLevel};
use annotate_stroke::{DrawingPath, FreehandPathCapture};
use skeleton_anim::{generate_keypoints, project_pose, AnimationState, SkeletonLayout};
use skeleton_types::Pose;

use crate::render::{connection_styles, ConnectionStyle};
use crate::{InteractionMode, Result, SessionError};

/// A closed, smoothed stroke waiting for the user to pick an intensity.
///
/// Holds the polygon for preview rendering and the keypoint names it
/// enclosed at the moment the gesture ended. Both are dropped once an
/// intensity is committed; only the per-keypoint levels survive.
#[derive(Debug, Clone)]
pub struct PendingRegion {
    path: DrawingPath,
    nodes: Vec<String>,
}

impl PendingRegion {
    /// The closed polygon, in full-viewport coordinates.
    #[must_use]
    pub fn polygon(&self) -> Vec<Point2<f64>> {
        self.path.positions()
    }

    /// The underlying closed stroke.
    #[must_use]
    pub fn path(&self) -> &DrawingPath {
        &self.path
    }

    /// Names of the keypoints the region enclosed.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns `true` if the region enclosed no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Everything one pain-assessment sitting owns.
///
/// The session wires the capture, smoothing, hit-testing and store
/// crates into the full flow: touch events come in, per-keypoint pain
/// levels come out. Touch dispatch is gated by [`InteractionMode`] so a
/// drag feeds either the rotation state or the stroke capture, never
/// both. The host owns the timer and the renderer; the session owns all
/// interaction state.
///
/// # Example
///
/// ```
/// use annotate_hit::LayerFrame;
/// use annotate_session::{AssessmentSession, InteractionMode};
/// use annotate_store::{MemoryBackend, PainAnnotationStore};
/// use skeleton_anim::SkeletonLayout;
///
/// let store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
/// let mut session = AssessmentSession::new(
///     SkeletonLayout::new(400.0, 640.0),
///     LayerFrame::centered(400.0, 800.0, 400.0, 640.0),
///     store,
/// );
///
/// session.set_mode(InteractionMode::Draw);
/// session.tick(0.15);
/// assert!(session.pending_region().is_none());
/// ```
pub struct AssessmentSession {
    layout: SkeletonLayout,
    frame: LayerFrame,
    state: AnimationState,
    capture: FreehandPathCapture,
    store: PainAnnotationStore,
    mode: InteractionMode,
    pending: Option<PendingRegion>,
    last_touch: Option<Point2<f64>>,
}

impl AssessmentSession {
    /// Create a session over the given geometry and store.
    #[must_use]
    pub fn new(layout: SkeletonLayout, frame: LayerFrame, store: PainAnnotationStore) -> Self {
        Self {
            layout,
            frame,
            state: AnimationState::new(),
            capture: FreehandPathCapture::new(),
            store,
            mode: InteractionMode::default(),
            pending: None,
            last_touch: None,
        }
    }

    /// The active gesture mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switch gesture modes, cancelling any in-flight gesture.
    ///
    /// A pending region survives the switch; the intensity picker stays
    /// valid while the user toggles modes.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode != self.mode {
            self.cancel_gesture();
            self.mode = mode;
        }
    }

    /// A touch landed.
    ///
    /// In drawing mode this starts a new stroke and discards any region
    /// still waiting for an intensity.
    pub fn touch_began(&mut self, point: Point2<f64>) {
        match self.mode {
            InteractionMode::Rotate => {
                self.last_touch = Some(point);
            }
            InteractionMode::Draw => {
                if self.pending.take().is_some() {
                    debug!("new stroke discards the pending region");
                }
                self.capture.begin(point);
            }
        }
    }

    /// A touch moved.
    pub fn touch_moved(&mut self, point: Point2<f64>) {
        match self.mode {
            InteractionMode::Rotate => {
                if let Some(last) = self.last_touch {
                    self.state.drag(point.x - last.x, point.y - last.y);
                }
                self.last_touch = Some(point);
            }
            InteractionMode::Draw => {
                self.capture.extend(point);
            }
        }
    }

    /// The touch lifted.
    ///
    /// In drawing mode a stroke long enough to promote is smoothed,
    /// closed, and hit-tested against the current projected pose; the
    /// result is held as the pending region until the user commits or
    /// cancels an intensity. Short strokes dissolve silently.
    pub fn touch_ended(&mut self) -> Result<()> {
        match self.mode {
            InteractionMode::Rotate => {
                self.last_touch = None;
            }
            InteractionMode::Draw => {
                if let Some(path) = self.capture.end() {
                    let closed = path.close();
                    let pose = self.projected_pose()?;
                    let nodes = nodes_in_region(&closed.positions(), &pose, &self.frame);
                    debug!(
                        stroke = closed.id.as_str(),
                        hits = nodes.len(),
                        "stroke closed and hit-tested"
                    );
                    self.pending = Some(PendingRegion {
                        path: closed,
                        nodes,
                    });
                }
            }
        }
        Ok(())
    }

    /// Abort the in-flight gesture without promoting anything.
    pub fn cancel_gesture(&mut self) {
        self.capture.cancel();
        self.last_touch = None;
    }

    /// The region awaiting an intensity choice, if any.
    #[must_use]
    pub fn pending_region(&self) -> Option<&PendingRegion> {
        self.pending.as_ref()
    }

    /// Assign `level` to every keypoint the pending region enclosed.
    ///
    /// Consumes the pending region; the drawn polygon is gone after
    /// this and only the keypoint-to-level mapping survives. Returns
    /// the names that were annotated (possibly empty).
    ///
    /// # Errors
    ///
    /// [`SessionError::NoPendingRegion`] when nothing is pending;
    /// [`SessionError::Store`] when `level` exceeds 10.
    pub fn commit_intensity(&mut self, level: u8) -> Result<Vec<String>> {
        let level = PainLevel::new(level)?;
        let region = self.pending.take().ok_or(SessionError::NoPendingRegion)?;
        if region.nodes.is_empty() {
            debug!("committed region enclosed no keypoints");
            return Ok(Vec::new());
        }
        self.store.assign(region.nodes.iter().cloned(), level);
        info!(keypoints = region.nodes.len(), %level, "pain level assigned");
        Ok(region.nodes)
    }

    /// Drop the pending region without annotating anything.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Annotate one keypoint directly, the tap-on-node path.
    ///
    /// # Errors
    ///
    /// [`SessionError::Store`] when `level` exceeds 10.
    pub fn annotate_single(&mut self, name: impl Into<String>, level: u8) -> Result<()> {
        let level = PainLevel::new(level)?;
        self.store.assign([name.into()], level);
        Ok(())
    }

    /// Advance the walk animation and any reset transition.
    pub fn tick(&mut self, dt: f64) {
        self.state.tick(dt);
    }

    /// Start the eased return to the front-facing rotation.
    pub fn reset_rotation(&mut self) {
        self.state.begin_reset();
    }

    /// The current pose, generated from the walk phase and projected
    /// through the user's rotation.
    pub fn projected_pose(&self) -> Result<Pose> {
        let pose = generate_keypoints(&self.layout, self.state.walk_phase())?;
        let projected = project_pose(
            &pose,
            self.state.rotation_x_radians(),
            self.state.rotation_y_radians(),
            &self.layout,
        )?;
        Ok(projected)
    }

    /// Per-connection styling for the current frame.
    pub fn frame_styles(&self) -> Result<Vec<ConnectionStyle>> {
        Ok(connection_styles(&self.projected_pose()?, &self.store))
    }

    /// The animation and rotation state, read-only.
    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.state
    }

    /// The pain store, read-only.
    #[must_use]
    pub fn store(&self) -> &PainAnnotationStore {
        &self.store
    }

    /// The coordinate frame mapping viewport to container space.
    #[must_use]
    pub fn frame(&self) -> &LayerFrame {
        &self.frame
    }

    /// Replace the coordinate frame after a viewport resize.
    pub fn set_frame(&mut self, frame: LayerFrame) {
        self.frame = frame;
    }

    /// Wipe all recorded pain levels, memory and storage both.
    pub fn clear_annotations(&mut self) {
        self.store.clear();
    }
}
