//! Gesture mode gating.

/// What a touch drag currently means.
///
/// A drag either rotates the skeleton or draws an annotation stroke,
/// never both. The session dispatches every touch event according to
/// the active mode, so a stray event can never feed both subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Drags rotate the skeleton view.
    #[default]
    Rotate,
    /// Drags capture an annotation stroke.
    Draw,
}

impl InteractionMode {
    /// Returns `true` in drawing mode.
    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(self, Self::Draw)
    }
}
