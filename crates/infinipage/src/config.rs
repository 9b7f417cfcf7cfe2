//! Construction-time configuration for the pager.

use crate::animation::EasingFunction;
use crate::axis::Axis;
use crate::error::{PagerError, PagerResult};

/// Default number of pages on each axis.
pub const DEFAULT_TOTAL_PAGES: u32 = 3;

/// Default horizontal commit threshold, as a fraction of the viewport width.
pub const DEFAULT_HORIZONTAL_THRESHOLD_RATIO: f32 = 1.0 / 3.0;

/// Default vertical commit threshold, as a fraction of the viewport height.
pub const DEFAULT_VERTICAL_THRESHOLD_RATIO: f32 = 1.0 / 4.0;

/// Default commit (page snap) animation duration in seconds.
pub const DEFAULT_COMMIT_DURATION: f32 = 0.22;

/// Default cancel (spring back) animation duration in seconds.
pub const DEFAULT_CANCEL_DURATION: f32 = 0.5;

/// Pager configuration.
///
/// Page totals are `Option<u32>`: `None` is an unbounded axis, `Some(0)`
/// disables the axis, `Some(n)` is `n` pages that wrap at both ends.
///
/// # Example
///
/// ```
/// use infinipage::PagerConfig;
///
/// let config = PagerConfig::default()
///     .total_horizontal_pages(Some(5))
///     .unbounded_vertical()
///     .enable_visibility_reporting(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerConfig {
    total_horizontal_pages: Option<u32>,
    total_vertical_pages: Option<u32>,
    horizontal_threshold_ratio: f32,
    vertical_threshold_ratio: f32,
    enable_visibility_reporting: bool,
    commit_duration: f32,
    cancel_duration: f32,
    commit_easing: EasingFunction,
    cancel_easing: EasingFunction,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            total_horizontal_pages: Some(DEFAULT_TOTAL_PAGES),
            total_vertical_pages: Some(DEFAULT_TOTAL_PAGES),
            horizontal_threshold_ratio: DEFAULT_HORIZONTAL_THRESHOLD_RATIO,
            vertical_threshold_ratio: DEFAULT_VERTICAL_THRESHOLD_RATIO,
            enable_visibility_reporting: false,
            commit_duration: DEFAULT_COMMIT_DURATION,
            cancel_duration: DEFAULT_CANCEL_DURATION,
            commit_easing: EasingFunction::EaseOut,
            cancel_easing: EasingFunction::Spring,
        }
    }
}

impl PagerConfig {
    /// Set the number of horizontal pages.
    pub fn total_horizontal_pages(mut self, total: Option<u32>) -> Self {
        self.total_horizontal_pages = total;
        self
    }

    /// Set the number of vertical pages.
    pub fn total_vertical_pages(mut self, total: Option<u32>) -> Self {
        self.total_vertical_pages = total;
        self
    }

    /// Make the horizontal axis unbounded.
    pub fn unbounded_horizontal(self) -> Self {
        self.total_horizontal_pages(None)
    }

    /// Make the vertical axis unbounded.
    pub fn unbounded_vertical(self) -> Self {
        self.total_vertical_pages(None)
    }

    /// Set the horizontal commit threshold ratio.
    pub fn horizontal_threshold_ratio(mut self, ratio: f32) -> Self {
        self.horizontal_threshold_ratio = ratio;
        self
    }

    /// Set the vertical commit threshold ratio.
    pub fn vertical_threshold_ratio(mut self, ratio: f32) -> Self {
        self.vertical_threshold_ratio = ratio;
        self
    }

    /// Report [`VisibilityInfo`](crate::VisibilityInfo) to the host and cells.
    pub fn enable_visibility_reporting(mut self, enabled: bool) -> Self {
        self.enable_visibility_reporting = enabled;
        self
    }

    /// Set the commit animation duration in seconds.
    pub fn commit_duration(mut self, seconds: f32) -> Self {
        self.commit_duration = seconds;
        self
    }

    /// Set the cancel animation duration in seconds.
    pub fn cancel_duration(mut self, seconds: f32) -> Self {
        self.cancel_duration = seconds;
        self
    }

    /// Set the commit animation easing.
    pub fn commit_easing(mut self, easing: EasingFunction) -> Self {
        self.commit_easing = easing;
        self
    }

    /// Set the cancel animation easing.
    pub fn cancel_easing(mut self, easing: EasingFunction) -> Self {
        self.cancel_easing = easing;
        self
    }

    /// Page total for `axis`.
    pub fn total_pages(&self, axis: Axis) -> Option<u32> {
        match axis {
            Axis::Horizontal => self.total_horizontal_pages,
            Axis::Vertical => self.total_vertical_pages,
        }
    }

    /// Commit threshold ratio for `axis`.
    pub fn threshold_ratio(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal_threshold_ratio,
            Axis::Vertical => self.vertical_threshold_ratio,
        }
    }

    /// Whether `axis` was explicitly disabled with a page total of zero.
    pub fn is_axis_disabled(&self, axis: Axis) -> bool {
        self.total_pages(axis) == Some(0)
    }

    pub fn visibility_reporting(&self) -> bool {
        self.enable_visibility_reporting
    }

    pub fn commit_duration_seconds(&self) -> f32 {
        self.commit_duration
    }

    pub fn cancel_duration_seconds(&self) -> f32 {
        self.cancel_duration
    }

    pub fn commit_easing_function(&self) -> EasingFunction {
        self.commit_easing
    }

    pub fn cancel_easing_function(&self) -> EasingFunction {
        self.cancel_easing
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> PagerResult<()> {
        for axis in Axis::ALL {
            let ratio = self.threshold_ratio(axis);
            if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
                return Err(PagerError::InvalidThresholdRatio { axis, ratio });
            }
        }

        for (name, seconds) in [
            ("commit duration", self.commit_duration),
            ("cancel duration", self.cancel_duration),
        ] {
            if !(seconds.is_finite() && seconds >= 0.0) {
                return Err(PagerError::InvalidDuration { name, seconds });
            }
        }

        Ok(())
    }
}
