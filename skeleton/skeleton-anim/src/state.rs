//! Animation and rotation state.

use std::f64::consts::TAU;

/// Walk-phase advance per animation tick, radians.
///
/// The host fires a periodic timer (~150 ms) and calls
/// [`AnimationState::tick`]; the phase step is fixed per tick rather
/// than scaled by elapsed time, matching the original cadence.
pub const PHASE_STEP: f64 = 0.15;

/// Degrees of rotation per screen unit of drag.
pub const DRAG_SENSITIVITY: f64 = 0.5;

/// Duration of the eased rotation reset, seconds.
pub const RESET_DURATION: f64 = 0.3;

/// Vertical rotation clamp, degrees.
const ROTATION_X_LIMIT: f64 = 90.0;

/// An in-flight eased reset back to the neutral rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResetTween {
    from_x: f64,
    from_y: f64,
    elapsed: f64,
}

/// Walk phase plus user-controlled rotation, advanced one tick at a time.
///
/// This is a plain value: no timer, no interior mutability. The host
/// owns scheduling, calls [`tick`](Self::tick) from its animation timer,
/// and routes drag gestures to [`drag`](Self::drag). Tearing the timer
/// down when the view is hidden is the host's responsibility; the state
/// can be resumed at any later point.
///
/// Rotation is held in degrees: `rotation_x` clamps to ±90°, and
/// `rotation_y` accumulates without bound but is reported wrapped to
/// `[0°, 360°)`.
///
/// # Example
///
/// ```
/// use skeleton_anim::AnimationState;
///
/// let mut state = AnimationState::new();
/// state.drag(90.0, 0.0); // horizontal drag → Y rotation at 0.5°/unit
/// assert!((state.rotation_y_degrees() - 45.0).abs() < 1e-10);
///
/// state.begin_reset();
/// state.tick(1.0); // longer than the reset duration
/// assert!((state.rotation_y_degrees()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    walk_phase: f64,
    rotation_x: f64,
    rotation_y: f64,
    reset: Option<ResetTween>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Neutral state: zero phase, zero rotation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            walk_phase: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            reset: None,
        }
    }

    /// Current walk phase in `[0, 2π)`.
    #[must_use]
    pub fn walk_phase(&self) -> f64 {
        self.walk_phase
    }

    /// Vertical-drag rotation in degrees, clamped to ±90°.
    #[must_use]
    pub fn rotation_x_degrees(&self) -> f64 {
        self.rotation_x
    }

    /// Horizontal-drag rotation in degrees, wrapped to `[0°, 360°)`.
    #[must_use]
    pub fn rotation_y_degrees(&self) -> f64 {
        self.rotation_y.rem_euclid(360.0)
    }

    /// Vertical-drag rotation in radians, for [`crate::transform`].
    #[must_use]
    pub fn rotation_x_radians(&self) -> f64 {
        self.rotation_x.to_radians()
    }

    /// Horizontal-drag rotation in radians, for [`crate::transform`].
    #[must_use]
    pub fn rotation_y_radians(&self) -> f64 {
        self.rotation_y.to_radians()
    }

    /// Returns `true` while an eased reset is in flight.
    #[must_use]
    pub fn is_resetting(&self) -> bool {
        self.reset.is_some()
    }

    /// Apply a drag delta: horizontal drag rotates about Y, vertical
    /// drag about X, both scaled by [`DRAG_SENSITIVITY`].
    ///
    /// A drag cancels any in-flight reset.
    pub fn drag(&mut self, delta_x: f64, delta_y: f64) {
        self.reset = None;
        self.rotation_y += delta_x * DRAG_SENSITIVITY;
        self.rotation_x =
            (self.rotation_x + delta_y * DRAG_SENSITIVITY).clamp(-ROTATION_X_LIMIT, ROTATION_X_LIMIT);
    }

    /// Start an eased transition of both rotations back to zero.
    ///
    /// The Y rotation takes the short way around (a figure spun to 350°
    /// eases back through 360°, not backwards through 180°).
    pub fn begin_reset(&mut self) {
        let mut from_y = self.rotation_y.rem_euclid(360.0);
        if from_y > 180.0 {
            from_y -= 360.0;
        }
        if self.rotation_x == 0.0 && from_y == 0.0 {
            return;
        }
        self.reset = Some(ResetTween {
            from_x: self.rotation_x,
            from_y,
            elapsed: 0.0,
        });
    }

    /// Advance one animation tick.
    ///
    /// The walk phase advances by [`PHASE_STEP`] and wraps modulo 2π;
    /// an in-flight reset advances by `dt` seconds along an
    /// ease-in-out-cubic curve and lands exactly on zero.
    pub fn tick(&mut self, dt: f64) {
        self.walk_phase = (self.walk_phase + PHASE_STEP).rem_euclid(TAU);

        if let Some(mut tween) = self.reset.take() {
            tween.elapsed += dt.max(0.0);
            let t = (tween.elapsed / RESET_DURATION).min(1.0);
            let eased = ease_in_out_cubic(t);
            self.rotation_x = tween.from_x * (1.0 - eased);
            self.rotation_y = tween.from_y * (1.0 - eased);
            if t < 1.0 {
                self.reset = Some(tween);
            }
        }
    }
}

/// Standard ease-in-out cubic over `[0, 1]`.
fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn drag_scales_by_sensitivity() {
        let mut state = AnimationState::new();
        state.drag(10.0, -4.0);
        assert_relative_eq!(state.rotation_y_degrees(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(state.rotation_x_degrees(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_x_clamps_at_ninety() {
        let mut state = AnimationState::new();
        state.drag(0.0, 500.0);
        assert_relative_eq!(state.rotation_x_degrees(), 90.0, epsilon = 1e-12);
        state.drag(0.0, -5000.0);
        assert_relative_eq!(state.rotation_x_degrees(), -90.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_y_wraps() {
        let mut state = AnimationState::new();
        state.drag(1000.0, 0.0); // 500°
        assert_relative_eq!(state.rotation_y_degrees(), 140.0, epsilon = 1e-12);
    }

    #[test]
    fn phase_advances_and_wraps() {
        let mut state = AnimationState::new();
        for _ in 0..100 {
            state.tick(0.15);
        }
        let expected = (100.0 * PHASE_STEP).rem_euclid(TAU);
        assert_relative_eq!(state.walk_phase(), expected, epsilon = 1e-9);
        assert!(state.walk_phase() < TAU);
    }

    #[test]
    fn reset_eases_to_exact_zero() {
        let mut state = AnimationState::new();
        state.drag(100.0, 30.0);
        state.begin_reset();
        assert!(state.is_resetting());

        // halfway: rotation reduced but nonzero
        state.tick(RESET_DURATION / 2.0);
        let halfway = state.rotation_y_degrees();
        assert!(halfway > 0.0 && halfway < 50.0);

        state.tick(RESET_DURATION);
        assert!(!state.is_resetting());
        assert_relative_eq!(state.rotation_x_degrees(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(state.rotation_y_degrees(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn reset_takes_short_way_around() {
        let mut state = AnimationState::new();
        state.drag(700.0, 0.0); // 350°
        state.begin_reset();
        state.tick(RESET_DURATION / 2.0);
        // easing from -10° toward 0, reported wrapped
        assert!(state.rotation_y_degrees() > 350.0);
    }

    #[test]
    fn drag_cancels_reset() {
        let mut state = AnimationState::new();
        state.drag(100.0, 0.0);
        state.begin_reset();
        state.drag(2.0, 0.0);
        assert!(!state.is_resetting());
    }
}
