//! Sizes and viewport geometry.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// Size of the pager's container in logical pixels.
///
/// Pushed in by the host whenever its layout pass measures a new size.
pub type ViewportSize = Size<f32>;

impl Size<f32> {
    pub const ZERO: Self = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Negative or non-finite extents are treated as zero.
    pub fn sanitized(self) -> Self {
        fn clean(v: f32) -> f32 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        Size::new(clean(self.width), clean(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_bad_extents() {
        let size = ViewportSize::new(-4.0, f32::INFINITY).sanitized();
        assert_eq!(size, ViewportSize::ZERO);
    }

    #[test]
    fn test_sanitized_keeps_valid_extents() {
        let size = ViewportSize::new(390.0, 0.0).sanitized();
        assert_eq!(size, ViewportSize::new(390.0, 0.0));
    }
}
