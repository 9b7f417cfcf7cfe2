/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// The pager only needs 2D vectors: drag translations, predicted end
/// translations and the live offset applied to the cell stack are all
/// [`Vec2`] values in logical pixels.
///
/// # Examples
///
/// ```
/// use infinipage_core::math::Vec2;
///
/// let translation = Vec2::new(-120.0, 4.0);
/// assert!(translation.x.abs() > translation.y.abs());
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

/// Returns `true` when `value` is zero or not a number.
///
/// Used wherever a translation is about to become a divisor.
#[inline]
pub fn is_degenerate(value: f32) -> bool {
    value == 0.0 || value.is_nan()
}
