//! Paging axes and axis-lock resolution.

use std::fmt;

use infinipage_core::geometry::ViewportSize;
use infinipage_core::math::Vec2;

use crate::config::PagerConfig;

/// One of the two paging axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right paging.
    Horizontal,
    /// Up/down paging.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// The viewport extent along this axis, i.e. the page size.
    #[inline]
    pub fn extent(self, size: ViewportSize) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// A vector with `value` on this axis and zero on the other.
    #[inline]
    pub fn vector(self, value: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(value, 0.0),
            Axis::Vertical => Vec2::new(0.0, value),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Picks the axis a gesture locks onto from a drag translation.
///
/// The dominant component wins, ties go to vertical. Returns `None` for a
/// zero (or NaN) translation, so resolution is deferred to a later sample,
/// and when the dominant axis is disabled (`total_pages == Some(0)`).
pub fn resolve_axis(translation: Vec2, config: &PagerConfig) -> Option<Axis> {
    if !translation.is_finite() || translation == Vec2::ZERO {
        return None;
    }

    let candidate = if translation.x.abs() > translation.y.abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };

    if config.is_axis_disabled(candidate) {
        tracing::trace!(axis = %candidate, "axis disabled, not locking");
        return None;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_component_wins() {
        let config = PagerConfig::default();
        assert_eq!(
            resolve_axis(Vec2::new(-12.0, 3.0), &config),
            Some(Axis::Horizontal)
        );
        assert_eq!(
            resolve_axis(Vec2::new(2.0, -9.0), &config),
            Some(Axis::Vertical)
        );
    }

    #[test]
    fn test_tie_resolves_vertical() {
        let config = PagerConfig::default();
        assert_eq!(
            resolve_axis(Vec2::new(5.0, 5.0), &config),
            Some(Axis::Vertical)
        );
    }

    #[test]
    fn test_zero_translation_defers() {
        let config = PagerConfig::default();
        assert_eq!(resolve_axis(Vec2::ZERO, &config), None);
        assert_eq!(resolve_axis(Vec2::new(f32::NAN, 1.0), &config), None);
    }

    #[test]
    fn test_disabled_axis_is_rejected() {
        let config = PagerConfig::default().total_horizontal_pages(Some(0));
        assert_eq!(resolve_axis(Vec2::new(80.0, 0.0), &config), None);
        // The other axis still resolves.
        assert_eq!(
            resolve_axis(Vec2::new(0.0, 80.0), &config),
            Some(Axis::Vertical)
        );
    }

    #[test]
    fn test_unbounded_axis_accepted() {
        let config = PagerConfig::default().unbounded_horizontal();
        assert_eq!(
            resolve_axis(Vec2::new(1.0, 0.0), &config),
            Some(Axis::Horizontal)
        );
    }

    #[test]
    fn test_axis_vector_helpers() {
        let size = ViewportSize::new(300.0, 600.0);
        assert_eq!(Axis::Horizontal.extent(size), 300.0);
        assert_eq!(Axis::Vertical.extent(size), 600.0);
        assert_eq!(Axis::Vertical.vector(-4.0), Vec2::new(0.0, -4.0));
        assert_eq!(Axis::Horizontal.component(Vec2::new(7.0, 9.0)), 7.0);
    }
}
