//! Page index arithmetic for bounded and unbounded axes.
//!
//! A bounded axis with `T` pages wraps at both ends. An unbounded axis
//! (`None`) addresses every integer.

use infinipage_core::math::is_degenerate;

/// Which way a committed gesture moves the page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDirection {
    /// Towards the next page (dragging left or up).
    Forward,
    /// Towards the previous page (dragging right or down).
    Backward,
}

impl PageDirection {
    /// Direction implied by a drag translation along the locked axis.
    ///
    /// A negative translation advances, a positive one goes back. Zero and NaN
    /// carry no direction.
    pub fn from_translation(translation: f32) -> Option<Self> {
        if is_degenerate(translation) {
            None
        } else if translation < 0.0 {
            Some(PageDirection::Forward)
        } else {
            Some(PageDirection::Backward)
        }
    }

    /// `+1` for forward, `-1` for backward.
    #[inline]
    pub fn step(self) -> i64 {
        match self {
            PageDirection::Forward => 1,
            PageDirection::Backward => -1,
        }
    }

    /// Sign of the offset the cell stack slides to when committing.
    #[inline]
    pub fn offset_sign(self) -> f32 {
        -(self.step() as f32)
    }
}

/// Moves `current` one page in `direction`.
///
/// Bounded axes wrap (`T-1` forward becomes `0`, `0` backward becomes `T-1`);
/// unbounded axes just count. A disabled axis (`Some(0)`) never moves.
pub fn advance(current: i64, total_pages: Option<u32>, direction: PageDirection) -> i64 {
    match total_pages {
        Some(0) => current,
        Some(total) => (current + direction.step()).rem_euclid(i64::from(total)),
        None => current.saturating_add(direction.step()),
    }
}

/// The adjacent page in `direction`, if it exists.
pub fn neighbor(current: i64, total_pages: Option<u32>, direction: PageDirection) -> Option<i64> {
    let next = current.checked_add(direction.step())?;
    match total_pages {
        Some(total) => (0..i64::from(total)).contains(&next).then_some(next),
        None => Some(next),
    }
}

/// Whether moving in `direction` would leave a bounded axis.
pub fn is_at_boundary(current: i64, total_pages: Option<u32>, direction: PageDirection) -> bool {
    match total_pages {
        Some(total) => match direction {
            PageDirection::Backward => current == 0,
            PageDirection::Forward => current == i64::from(total) - 1,
        },
        None => false,
    }
}

/// Maps an arbitrary page onto a bounded axis; unbounded pages pass through.
pub fn wrap_into_range(page: i64, total_pages: Option<u32>) -> i64 {
    match total_pages {
        Some(0) => 0,
        Some(total) => page.rem_euclid(i64::from(total)),
        None => page,
    }
}
