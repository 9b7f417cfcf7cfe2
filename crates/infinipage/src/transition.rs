//! In-flight commit/cancel transitions.
//!
//! Every snap animation gets a fresh [`TransitionId`]. The page index update
//! of a commit is tied to that id: it runs when the animation completes, or
//! when the host reports completion for the same id. Starting a new
//! transition or retiring the current one makes any older id stale.

use std::fmt;

use crate::animation::OffsetAnimation;
use crate::axis::Axis;
use crate::error::{PagerError, PagerResult};
use crate::page_index::PageDirection;

/// Identifier of a dispatched transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a transition resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Slide a full page and then advance the locked axis.
    Commit {
        axis: Axis,
        direction: PageDirection,
    },
    /// Spring back to rest without changing pages.
    Cancel { axis: Option<Axis> },
}

/// Result of a completed transition, reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The page index on `axis` moved from `from` to `to`.
    Committed { axis: Axis, from: i64, to: i64 },
    /// The gesture was abandoned; no page changed.
    Cancelled { axis: Option<Axis> },
}

/// A dispatched snap animation.
#[derive(Debug, Clone)]
pub struct Transition {
    id: TransitionId,
    kind: TransitionKind,
    animation: OffsetAnimation,
}

impl Transition {
    pub fn id(&self) -> TransitionId {
        self.id
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn is_commit(&self) -> bool {
        matches!(self.kind, TransitionKind::Commit { .. })
    }

    /// The animation driving the live offset; hosts running their own
    /// animation system read its endpoints, duration and easing from here.
    pub fn animation(&self) -> &OffsetAnimation {
        &self.animation
    }
}

/// Holds the single in-flight transition and hands out ids.
#[derive(Debug, Default)]
pub struct TransitionSlot {
    next_id: u64,
    current: Option<Transition>,
}

impl TransitionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a transition, superseding whatever was in flight.
    pub fn begin(&mut self, kind: TransitionKind, animation: OffsetAnimation) -> TransitionId {
        self.next_id += 1;
        let id = TransitionId(self.next_id);
        if let Some(previous) = self.current.take() {
            tracing::debug!(previous = %previous.id, next = %id, "superseding transition");
        }
        self.current = Some(Transition {
            id,
            kind,
            animation,
        });
        id
    }

    pub fn current(&self) -> Option<&Transition> {
        self.current.as_ref()
    }

    /// Drop the in-flight transition without completing it.
    pub fn retire(&mut self) -> Option<Transition> {
        let retired = self.current.take();
        if let Some(transition) = &retired {
            tracing::debug!(id = %transition.id, "retired transition");
        }
        retired
    }

    /// Advance the animation. Returns the transition once it completes.
    pub fn tick(&mut self, delta_time: f32) -> Option<Transition> {
        let transition = self.current.as_mut()?;
        if transition.animation.update(delta_time) {
            return None;
        }
        self.current.take()
    }

    /// Take the in-flight transition if it matches `id`, finishing its animation.
    pub fn take_matching(&mut self, id: TransitionId) -> PagerResult<Transition> {
        match self.current.take() {
            None => Err(PagerError::NoTransitionInFlight { requested: id }),
            Some(transition) if transition.id != id => {
                let current = transition.id;
                self.current = Some(transition);
                Err(PagerError::StaleTransition {
                    requested: id,
                    current,
                })
            }
            Some(mut transition) => {
                transition.animation.finish();
                Ok(transition)
            }
        }
    }
}
