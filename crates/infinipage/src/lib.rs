//! Infinipage - a two-axis paging gesture engine
//!
//! Infinipage drives a pager that shows one current cell and up to four
//! neighbors on a virtual grid addressed by `(horizontal, vertical)` page.
//! It provides:
//!
//! - **Axis locking**: the first meaningful drag delta picks horizontal or vertical
//! - **Rubber-banding**: damped offsets when dragging past a bounded edge
//! - **Snap resolution**: commit or cancel from the predicted end translation
//! - **Page arithmetic**: wraparound on bounded axes, free counting on unbounded ones
//! - **Cell plumbing**: which neighbors exist and the context each cell receives
//!
//! Rendering is left to the host: it feeds drag samples and the viewport
//! size in, applies [`PagerGestureEngine::live_offset`] to its cell stack, and
//! renders cells through a [`CellRenderer`].
//!
//! # Quick Start
//!
//! ```
//! use infinipage::prelude::*;
//!
//! let mut pager = PagerGestureEngine::new(PagerConfig::default().unbounded_horizontal())?;
//! pager.set_viewport(ViewportSize::new(320.0, 640.0));
//!
//! // One frame of the host loop.
//! pager.drag_changed(DragSample::changed(Vec2::new(-24.0, 3.0)));
//! let mut label = |page: PageCoord, _ctx: &CellContext| format!("cell {page}");
//! let cells = pager.render_cells(&mut label);
//! assert_eq!(cells.trailing.content().map(String::as_str), Some("cell 1,0"));
//! # Ok::<(), infinipage::PagerError>(())
//! ```

pub mod animation;
pub mod axis;
pub mod cells;
pub mod config;
pub mod damper;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod page_index;
pub mod transition;
pub mod visibility;

pub use animation::{EasingFunction, OffsetAnimation};
pub use axis::Axis;
pub use cells::{Cell, CellContext, CellRenderer, CellSet, CellSlot, NeighborMask, PageCoord};
pub use config::PagerConfig;
pub use engine::{PagerGestureEngine, PagerState};
pub use error::{PagerError, PagerResult};
pub use gesture::{DragSample, GesturePhase};
pub use page_index::PageDirection;
pub use transition::{Transition, TransitionId, TransitionKind, TransitionOutcome};
pub use visibility::VisibilityInfo;

/// Commonly used types for hosting a pager.
pub mod prelude {
    pub use crate::{
        Axis, Cell, CellContext, CellRenderer, CellSet, CellSlot, DragSample, GesturePhase,
        PageCoord, PagerConfig, PagerError, PagerGestureEngine, TransitionOutcome, VisibilityInfo,
    };
    pub use infinipage_core::geometry::ViewportSize;
    pub use infinipage_core::math::Vec2;
}
