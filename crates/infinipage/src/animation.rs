//! Offset animations for snapping the cell stack.
//!
//! A commit slides the stack to a full page along the locked axis; a cancel
//! springs it back to rest. Both are fixed-duration tweens over a [`Vec2`],
//! advanced by the host's frame delta.
//!
//! # Example
//!
//! ```
//! use infinipage::animation::{EasingFunction, OffsetAnimation};
//! use infinipage_core::math::Vec2;
//!
//! let mut anim = OffsetAnimation::new(Vec2::new(-120.0, 0.0), Vec2::new(-300.0, 0.0))
//!     .duration(0.22)
//!     .easing(EasingFunction::EaseOut);
//!
//! while anim.update(1.0 / 60.0) {}
//! assert_eq!(anim.value(), Vec2::new(-300.0, 0.0));
//! ```

use infinipage_core::math::Vec2;

/// Angular frequency of [`EasingFunction::Spring`] over normalized time.
const SPRING_OMEGA: f32 = 10.0;

/// Damping ratio of [`EasingFunction::Spring`]; below 1.0 so it overshoots a little.
const SPRING_DAMPING: f32 = 0.75;

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Under-damped spring that settles with a slight overshoot
    Spring,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::Spring => {
                if t >= 1.0 {
                    return 1.0;
                }
                let decay = SPRING_DAMPING * SPRING_OMEGA;
                let damped = SPRING_OMEGA * (1.0 - SPRING_DAMPING * SPRING_DAMPING).sqrt();
                let envelope = (-decay * t).exp();
                1.0 - envelope * ((damped * t).cos() + (decay / damped) * (damped * t).sin())
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is completed
    Completed,
}

/// A tween between two offsets.
#[derive(Debug, Clone)]
pub struct OffsetAnimation {
    from: Vec2,
    to: Vec2,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl OffsetAnimation {
    /// Create a new linear, one-second animation.
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self {
            from,
            to,
            duration: 1.0,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    /// Set the duration in seconds. Negative values are treated as zero.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn to_value(&self) -> Vec2 {
        self.to
    }

    pub fn duration_seconds(&self) -> f32 {
        self.duration
    }

    pub fn easing_function(&self) -> EasingFunction {
        self.easing
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.is_complete() || self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Get the current value. Exactly `to` once completed.
    pub fn value(&self) -> Vec2 {
        if self.is_complete() {
            return self.to;
        }
        let eased_t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased_t
    }

    /// Get the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == AnimationState::Completed
    }

    /// Jump to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
        self.state = AnimationState::Completed;
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.is_complete() {
            return false;
        }

        if delta_time.is_finite() && delta_time > 0.0 {
            self.elapsed += delta_time;
        }

        if self.elapsed >= self.duration {
            self.finish();
            return false;
        }

        true
    }
}
