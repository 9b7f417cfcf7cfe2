//! The pager gesture engine.
//!
//! [`PagerGestureEngine`] turns a stream of drag samples into a live offset
//! for the cell stack and, on release, into either a page snap (commit) or a
//! spring back (cancel).
//!
//! ```text
//!            drag_changed              drag_ended: commit
//!   Idle ─────────────────▶ Dragging ─────────────────────▶ AnimatingCommit
//!    ▲                        │                                   │
//!    │                        │ drag_ended: cancel                │ complete:
//!    │                        │ drag_cancelled                    │ advance page
//!    │                        ▼                                   │
//!    └──────────────── AnimatingCancel ◀──────────────────────────┘ (to Idle)
//!         complete
//! ```
//!
//! All methods take `&mut self`, so callbacks from the host are processed one
//! at a time to completion.

use infinipage_core::geometry::ViewportSize;
use infinipage_core::math::Vec2;
use infinipage_core::profiling::{self, profile_function};

use crate::animation::OffsetAnimation;
use crate::axis::{Axis, resolve_axis};
use crate::cells::{self, CellRenderer, CellSet, NeighborMask, PageCoord};
use crate::config::PagerConfig;
use crate::damper::bounded_offset;
use crate::error::PagerResult;
use crate::gesture::{DragSample, GesturePhase};
use crate::page_index::{self, PageDirection};
use crate::transition::{
    Transition, TransitionId, TransitionKind, TransitionOutcome, TransitionSlot,
};
use crate::visibility::VisibilityInfo;

/// Mutable pager state, owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PagerState {
    current_page: PageCoord,
    locked_axis: Option<Axis>,
    live_offset: Vec2,
    is_dragging: bool,
    phase: GesturePhase,
}

impl PagerState {
    pub fn current_page(&self) -> PageCoord {
        self.current_page
    }

    pub fn locked_axis(&self) -> Option<Axis> {
        self.locked_axis
    }

    pub fn live_offset(&self) -> Vec2 {
        self.live_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn reset_gesture(&mut self) {
        self.live_offset = Vec2::ZERO;
        self.locked_axis = None;
        self.is_dragging = false;
        self.phase = GesturePhase::Idle;
    }
}

/// Gesture-driven two-axis pager.
///
/// # Example
///
/// ```
/// use infinipage::{DragSample, PagerConfig, PagerGestureEngine, TransitionOutcome};
/// use infinipage_core::geometry::ViewportSize;
/// use infinipage_core::math::Vec2;
///
/// let config = PagerConfig::default().total_horizontal_pages(Some(5));
/// let mut pager = PagerGestureEngine::new(config)?;
/// pager.set_viewport(ViewportSize::new(300.0, 600.0));
///
/// pager.drag_changed(DragSample::changed(Vec2::new(-60.0, 0.0)));
/// pager.drag_ended(DragSample::ended(Vec2::new(-80.0, 0.0), Vec2::new(-150.0, 0.0)));
///
/// let mut outcome = None;
/// while outcome.is_none() {
///     outcome = pager.tick(1.0 / 60.0);
/// }
/// assert!(matches!(outcome, Some(TransitionOutcome::Committed { from: 0, to: 1, .. })));
/// assert_eq!(pager.current_horizontal_page(), 1);
/// # Ok::<(), infinipage::PagerError>(())
/// ```
#[derive(Debug)]
pub struct PagerGestureEngine {
    config: PagerConfig,
    viewport: ViewportSize,
    state: PagerState,
    transitions: TransitionSlot,
}

static_assertions::assert_impl_all!(PagerGestureEngine: Send, Sync);

impl PagerGestureEngine {
    /// Create an engine at page `(0, 0)`.
    pub fn new(config: PagerConfig) -> PagerResult<Self> {
        Self::with_initial_page(config, PageCoord::default())
    }

    /// Create an engine at `page`, wrapped into range on bounded axes.
    pub fn with_initial_page(config: PagerConfig, page: PageCoord) -> PagerResult<Self> {
        config.validate()?;
        let state = PagerState {
            current_page: Self::wrap_page(&config, page),
            ..PagerState::default()
        };
        tracing::debug!(
            ?config,
            page = %state.current_page,
            profiling = profiling::ENABLED,
            "created pager engine"
        );
        Ok(Self {
            config,
            viewport: ViewportSize::ZERO,
            state,
            transitions: TransitionSlot::new(),
        })
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Record the latest container size. Negative or non-finite extents are
    /// treated as zero.
    pub fn set_viewport(&mut self, size: ViewportSize) {
        let size = size.sanitized();
        if size != self.viewport {
            tracing::trace!(width = size.width, height = size.height, "viewport resized");
            self.viewport = size;
        }
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn current_page(&self) -> PageCoord {
        self.state.current_page
    }

    pub fn current_horizontal_page(&self) -> i64 {
        self.state.current_page.horizontal
    }

    pub fn current_vertical_page(&self) -> i64 {
        self.state.current_page.vertical
    }

    /// Translation the host applies to the cell stack this frame.
    pub fn live_offset(&self) -> Vec2 {
        self.state.live_offset
    }

    pub fn locked_axis(&self) -> Option<Axis> {
        self.state.locked_axis
    }

    /// True from the first sample of a gesture until it fully resolves.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    /// The in-flight snap animation, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.transitions.current()
    }

    /// How far the current cell is scrolled out, when reporting is enabled.
    pub fn visibility(&self) -> Option<VisibilityInfo> {
        if !self.config.visibility_reporting() {
            return None;
        }
        let state = &self.state;
        let info = VisibilityInfo::compute(state.live_offset, state.locked_axis, self.viewport);
        Some(info)
    }

    /// Neighbor slots around the current page that hold a page.
    pub fn neighbor_mask(&self) -> NeighborMask {
        cells::neighbor_mask(self.state.current_page, &self.config)
    }

    /// Render the current cell and its existing neighbors.
    pub fn render_cells<R: CellRenderer>(&self, renderer: &mut R) -> CellSet<R::Content> {
        cells::render_cells(
            renderer,
            &self.config,
            self.state.current_page,
            self.state.is_dragging,
            self.visibility(),
        )
    }

    /// Feed a drag-changed sample.
    pub fn drag_changed(&mut self, sample: DragSample) {
        profile_function!();

        match self.state.phase {
            GesturePhase::AnimatingCommit => {
                tracing::trace!("ignoring drag sample while a commit is animating");
                return;
            }
            GesturePhase::AnimatingCancel => {
                tracing::debug!("new gesture interrupts cancel animation");
                self.transitions.retire();
                self.state.reset_gesture();
                self.begin_gesture();
            }
            GesturePhase::Idle => self.begin_gesture(),
            GesturePhase::Dragging => {}
        }

        if self.state.locked_axis.is_none() {
            self.state.locked_axis = resolve_axis(sample.translation, &self.config);
            if let Some(axis) = self.state.locked_axis {
                tracing::debug!(%axis, translation = ?sample.translation, "axis locked");
            }
        }

        let Some(axis) = self.state.locked_axis else {
            return;
        };

        let offset = self.damped(axis, axis.component(sample.translation));
        self.state.live_offset = axis.vector(offset);
        tracing::trace!(%axis, offset, "drag offset");
    }

    /// Feed the drag-ended sample and dispatch a commit or cancel transition.
    ///
    /// Returns the id of the dispatched transition, or `None` when the sample
    /// was ignored or the gesture resolved on the spot (no axis was locked).
    pub fn drag_ended(&mut self, sample: DragSample) -> Option<TransitionId> {
        profile_function!();

        if self.state.phase != GesturePhase::Dragging {
            tracing::debug!(phase = ?self.state.phase, "ignoring drag end outside of a drag");
            return None;
        }

        let Some(axis) = self.state.locked_axis else {
            tracing::debug!("gesture ended without locking an axis");
            self.state.reset_gesture();
            return None;
        };

        let page_size = axis.extent(self.viewport);
        let current = self.state.current_page.on(axis);
        let total = self.config.total_pages(axis);
        let threshold = page_size * self.config.threshold_ratio(axis);

        let translation = axis.component(sample.settling_translation());
        let Some(direction) = PageDirection::from_translation(translation) else {
            tracing::debug!(%axis, "no movement, cancelling");
            return Some(self.dispatch_cancel(Some(axis)));
        };

        let bounded = bounded_offset(translation, page_size, current, total);
        let at_boundary = page_index::is_at_boundary(current, total, direction);

        if bounded.abs() > threshold && !at_boundary {
            tracing::debug!(%axis, ?direction, bounded, threshold, "committing page change");
            Some(self.dispatch_commit(axis, direction, page_size))
        } else {
            tracing::debug!(
                %axis,
                ?direction,
                bounded,
                threshold,
                at_boundary,
                "cancelling page change"
            );
            Some(self.dispatch_cancel(Some(axis)))
        }
    }

    /// The input system abandoned the gesture before a clean end.
    ///
    /// Treated as a cancel unless a commit is already animating.
    pub fn drag_cancelled(&mut self) {
        match self.state.phase {
            GesturePhase::Dragging => {
                tracing::debug!("gesture interrupted by the input system");
                if self.state.locked_axis.is_none() {
                    self.state.reset_gesture();
                } else {
                    self.dispatch_cancel(self.state.locked_axis);
                }
            }
            GesturePhase::AnimatingCommit => {
                tracing::debug!("ignoring interruption, commit already dispatched");
            }
            GesturePhase::Idle | GesturePhase::AnimatingCancel => {}
        }
    }

    /// Advance the in-flight animation by `delta_time` seconds.
    ///
    /// Returns the outcome when a transition completes on this tick.
    pub fn tick(&mut self, delta_time: f32) -> Option<TransitionOutcome> {
        profile_function!();

        if let Some(done) = self.transitions.tick(delta_time) {
            return Some(self.complete(done));
        }
        if let Some(transition) = self.transitions.current() {
            self.state.live_offset = transition.animation().value();
        }
        None
    }

    /// Complete transition `id` because the host's animation finished.
    ///
    /// Fails without touching state if `id` is not the in-flight transition.
    pub fn finish_transition(&mut self, id: TransitionId) -> PagerResult<TransitionOutcome> {
        let transition = self.transitions.take_matching(id).inspect_err(|err| {
            tracing::warn!(%err, "rejected transition completion");
        })?;
        Ok(self.complete(transition))
    }

    /// Move straight to `page`, abandoning any in-flight animation.
    ///
    /// Ignored while a gesture is being dragged; returns whether it applied.
    pub fn jump_to(&mut self, page: PageCoord) -> bool {
        if self.state.phase == GesturePhase::Dragging {
            tracing::warn!(%page, "jump ignored during drag");
            return false;
        }
        self.transitions.retire();
        self.state.current_page = Self::wrap_page(&self.config, page);
        self.state.reset_gesture();
        tracing::info!(page = %self.state.current_page, "jumped to page");
        true
    }

    fn begin_gesture(&mut self) {
        self.state.is_dragging = true;
        self.state.phase = GesturePhase::Dragging;
    }

    fn damped(&self, axis: Axis, raw: f32) -> f32 {
        bounded_offset(
            raw,
            axis.extent(self.viewport),
            self.state.current_page.on(axis),
            self.config.total_pages(axis),
        )
    }

    fn dispatch_commit(
        &mut self,
        axis: Axis,
        direction: PageDirection,
        page_size: f32,
    ) -> TransitionId {
        let target = axis.vector(direction.offset_sign() * page_size);
        let animation = OffsetAnimation::new(self.state.live_offset, target)
            .duration(self.config.commit_duration_seconds())
            .easing(self.config.commit_easing_function());
        self.state.phase = GesturePhase::AnimatingCommit;
        let kind = TransitionKind::Commit { axis, direction };
        self.transitions.begin(kind, animation)
    }

    fn dispatch_cancel(&mut self, axis: Option<Axis>) -> TransitionId {
        let animation = OffsetAnimation::new(self.state.live_offset, Vec2::ZERO)
            .duration(self.config.cancel_duration_seconds())
            .easing(self.config.cancel_easing_function());
        self.state.phase = GesturePhase::AnimatingCancel;
        let kind = TransitionKind::Cancel { axis };
        self.transitions.begin(kind, animation)
    }

    fn complete(&mut self, transition: Transition) -> TransitionOutcome {
        let outcome = match transition.kind() {
            TransitionKind::Commit { axis, direction } => {
                let from = self.state.current_page.on(axis);
                let to = page_index::advance(from, self.config.total_pages(axis), direction);
                self.state.current_page = self.state.current_page.with(axis, to);
                tracing::info!(%axis, from, to, "page changed");
                TransitionOutcome::Committed { axis, from, to }
            }
            TransitionKind::Cancel { axis } => TransitionOutcome::Cancelled { axis },
        };
        self.state.reset_gesture();
        tracing::trace!(id = %transition.id(), ?outcome, "transition complete");
        outcome
    }

    fn wrap_page(config: &PagerConfig, page: PageCoord) -> PageCoord {
        PageCoord::new(
            page_index::wrap_into_range(page.horizontal, config.total_pages(Axis::Horizontal)),
            page_index::wrap_into_range(page.vertical, config.total_pages(Axis::Vertical)),
        )
    }
}
