//! Drag input samples and gesture phases.

use infinipage_core::math::Vec2;

/// A drag event from the host's input system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Translation since the gesture started.
    pub translation: Vec2,
    /// Projected settling translation, only present on gesture end.
    pub predicted_end_translation: Option<Vec2>,
}

impl DragSample {
    /// A drag-changed sample.
    pub fn changed(translation: Vec2) -> Self {
        Self {
            translation,
            predicted_end_translation: None,
        }
    }

    /// A drag-ended sample with the velocity-projected translation.
    pub fn ended(translation: Vec2, predicted_end_translation: Vec2) -> Self {
        Self {
            translation,
            predicted_end_translation: Some(predicted_end_translation),
        }
    }

    /// The translation used to decide commit vs cancel.
    ///
    /// Falls back to the raw translation when the host supplies no prediction.
    pub fn settling_translation(&self) -> Vec2 {
        self.predicted_end_translation.unwrap_or(self.translation)
    }
}

/// Where the engine is in a gesture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture and no animation.
    #[default]
    Idle,
    /// Samples are being received.
    Dragging,
    /// A page snap is animating; the index updates when it completes.
    AnimatingCommit,
    /// The stack is springing back to rest.
    AnimatingCancel,
}
