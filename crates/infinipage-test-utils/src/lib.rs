//! Test utilities for infinipage.
//!
//! This crate provides testing infrastructure for pager hosts and for the
//! engine's own integration tests.
//!
//! # Overview
//!
//! - [`GestureScript`] - Builds a drag gesture sample by sample and plays it
//!   into an engine
//! - [`settle`] - Ticks an engine at a fixed frame rate until its transition
//!   completes
//! - `MockCellRenderer` - A [`CellRenderer`](infinipage::CellRenderer) that
//!   records every call (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! use infinipage::{PagerConfig, PagerGestureEngine, TransitionOutcome};
//! use infinipage_core::geometry::ViewportSize;
//! use infinipage_core::math::Vec2;
//! use infinipage_test_utils::{GestureScript, settle};
//!
//! let mut pager = PagerGestureEngine::new(PagerConfig::default()).unwrap();
//! pager.set_viewport(ViewportSize::new(300.0, 300.0));
//!
//! GestureScript::swipe(Vec2::new(-120.0, 0.0), 4)
//!     .release_with_prediction(Vec2::new(-160.0, 0.0))
//!     .play(&mut pager);
//!
//! assert!(matches!(settle(&mut pager), Some(TransitionOutcome::Committed { to: 1, .. })));
//! ```
//!
//! # Mocks and Interior Mutability
//!
//! `MockCellRenderer` is cheap to clone and all clones share one call log,
//! so a test keeps a handle for assertions while the engine borrows another
//! one mutably.

pub mod gesture_script;
#[cfg(feature = "mock")]
pub mod mock_renderer;

pub use gesture_script::*;
#[cfg(feature = "mock")]
pub use mock_renderer::*;
