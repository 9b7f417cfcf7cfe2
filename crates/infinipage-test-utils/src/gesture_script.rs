//! Scripted drag gestures.

use infinipage::{DragSample, PagerGestureEngine, TransitionId, TransitionOutcome};
use infinipage_core::math::Vec2;

/// Frame delta used by [`settle`].
pub const FRAME_TIME: f32 = 1.0 / 60.0;

/// Upper bound on frames [`settle_with`] will tick before giving up.
pub const MAX_SETTLE_FRAMES: usize = 10_000;

/// How a scripted gesture finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// Release with a predicted end translation.
    Release { predicted: Vec2 },
    /// The input system steals the gesture.
    Interrupt,
    /// Leave the gesture open.
    Hold,
}

/// A sequence of cumulative drag translations plus an ending.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureScript {
    samples: Vec<Vec2>,
    end: GestureEnd,
}

impl GestureScript {
    /// Start from explicit cumulative translations.
    pub fn new(samples: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            end: GestureEnd::Hold,
        }
    }

    /// A straight drag from the origin to `translation` in `steps` samples.
    ///
    /// Releases with no fling: the prediction equals the final translation.
    pub fn swipe(translation: Vec2, steps: usize) -> Self {
        let steps = steps.max(1);
        let samples = (1..=steps).map(|i| translation * (i as f32 / steps as f32));
        Self {
            samples: samples.collect(),
            end: GestureEnd::Release {
                predicted: translation,
            },
        }
    }

    /// Append a sample.
    pub fn then(mut self, translation: Vec2) -> Self {
        self.samples.push(translation);
        self
    }

    pub fn release_with_prediction(mut self, predicted: Vec2) -> Self {
        self.end = GestureEnd::Release { predicted };
        self
    }

    pub fn interrupted(mut self) -> Self {
        self.end = GestureEnd::Interrupt;
        self
    }

    pub fn held(mut self) -> Self {
        self.end = GestureEnd::Hold;
        self
    }

    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// The translation of the last sample, or zero for an empty script.
    pub fn last_translation(&self) -> Vec2 {
        self.samples.last().copied().unwrap_or(Vec2::ZERO)
    }

    /// Feed the script into `engine`.
    ///
    /// Returns the transition dispatched by the release, if any.
    pub fn play(&self, engine: &mut PagerGestureEngine) -> Option<TransitionId> {
        self.drag(engine);
        self.finish(engine)
    }

    /// Feed only the drag samples, leaving the gesture open.
    pub fn drag(&self, engine: &mut PagerGestureEngine) {
        for &translation in &self.samples {
            engine.drag_changed(DragSample::changed(translation));
        }
    }

    /// Send only the ending of the script.
    pub fn finish(&self, engine: &mut PagerGestureEngine) -> Option<TransitionId> {
        match self.end {
            GestureEnd::Release { predicted } => {
                engine.drag_ended(DragSample::ended(self.last_translation(), predicted))
            }
            GestureEnd::Interrupt => {
                engine.drag_cancelled();
                engine.transition().map(|t| t.id())
            }
            GestureEnd::Hold => None,
        }
    }
}

/// Tick `engine` at 60 fps until its transition completes.
pub fn settle(engine: &mut PagerGestureEngine) -> Option<TransitionOutcome> {
    settle_with(engine, FRAME_TIME)
}

/// Tick `engine` with a fixed `frame_time` until its transition completes.
///
/// Returns `None` if nothing was in flight or it never completed.
pub fn settle_with(engine: &mut PagerGestureEngine, frame_time: f32) -> Option<TransitionOutcome> {
    if engine.transition().is_none() {
        return None;
    }
    for frame in 0..MAX_SETTLE_FRAMES {
        if let Some(outcome) = engine.tick(frame_time) {
            tracing::trace!(frame, ?outcome, "settled");
            return Some(outcome);
        }
    }
    tracing::warn!(MAX_SETTLE_FRAMES, "transition did not settle");
    None
}
