//! How much of the current cell has been dragged out of view.

use infinipage_core::geometry::ViewportSize;
use infinipage_core::math::Vec2;

use crate::axis::Axis;

/// Fraction of the current cell scrolled out along the locked axis.
///
/// `0` is fully visible. Horizontally `-1` is fully out to the left and `+1`
/// fully out to the right; vertically `-1` is up and `+1` is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityInfo {
    pub main_page_percent: f32,
    pub axis: Option<Axis>,
}

impl VisibilityInfo {
    /// Fully visible, no locked axis.
    pub const IDLE: Self = Self {
        main_page_percent: 0.0,
        axis: None,
    };

    pub fn compute(offset: Vec2, axis: Option<Axis>, viewport: ViewportSize) -> Self {
        let Some(axis) = axis else {
            return Self::IDLE;
        };
        let extent = axis.extent(viewport);
        if extent <= 0.0 {
            return Self {
                main_page_percent: 0.0,
                axis: Some(axis),
            };
        }
        Self {
            main_page_percent: (axis.component(offset) / extent).clamp(-1.0, 1.0),
            axis: Some(axis),
        }
    }
}

impl Default for VisibilityInfo {
    fn default() -> Self {
        Self::IDLE
    }
}
