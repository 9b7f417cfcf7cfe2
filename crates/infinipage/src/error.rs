//! Error types for the pager engine.

use std::fmt;

use crate::axis::Axis;
use crate::transition::TransitionId;

/// Errors reported by the pager engine.
///
/// Gesture processing never fails; these only surface from construction and
/// from host-driven transition completion.
#[derive(Debug, Clone, PartialEq)]
pub enum PagerError {
    /// A threshold ratio is outside `(0, 1]` or not finite.
    InvalidThresholdRatio {
        /// The axis the ratio belongs to.
        axis: Axis,
        /// The rejected value.
        ratio: f32,
    },

    /// An animation duration is negative or not finite.
    InvalidDuration {
        /// Which duration was rejected.
        name: &'static str,
        /// The rejected value in seconds.
        seconds: f32,
    },

    /// The host tried to finish a transition that has been superseded.
    StaleTransition {
        /// The id passed in by the host.
        requested: TransitionId,
        /// The id of the transition currently in flight.
        current: TransitionId,
    },

    /// The host tried to finish a transition while none is in flight.
    NoTransitionInFlight {
        /// The id passed in by the host.
        requested: TransitionId,
    },
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagerError::InvalidThresholdRatio { axis, ratio } => {
                write!(f, "{axis} threshold ratio must be in (0, 1], got {ratio}")
            }
            PagerError::InvalidDuration { name, seconds } => {
                write!(f, "{name} must be finite and >= 0 seconds, got {seconds}")
            }
            PagerError::StaleTransition { requested, current } => {
                write!(f, "Transition {requested} is stale, {current} is in flight")
            }
            PagerError::NoTransitionInFlight { requested } => {
                write!(f, "Transition {requested} cannot finish: none in flight")
            }
        }
    }
}

impl std::error::Error for PagerError {}

/// Result type alias for pager operations.
pub type PagerResult<T> = Result<T, PagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PagerError::InvalidThresholdRatio {
            axis: Axis::Vertical,
            ratio: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "vertical threshold ratio must be in (0, 1], got 1.5"
        );

        let err = PagerError::StaleTransition {
            requested: TransitionId::new(1),
            current: TransitionId::new(2),
        };
        assert_eq!(err.to_string(), "Transition #1 is stale, #2 is in flight");
    }
}
