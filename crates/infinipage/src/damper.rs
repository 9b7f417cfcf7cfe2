//! Rubber-band damping of drag offsets at bounded-axis edges.
//!
//! Up to half a page the offset is scaled by a factor falling linearly from
//! 1.0 to 0.5, which flattens the curve out completely at half a page. Past
//! that point the offset grows again with slope 0.5 at first and saturates
//! towards half a page, so it never exceeds it.

/// Smallest dampening factor, reached at half a page of raw drag.
pub const MIN_DAMPENING_FACTOR: f32 = 0.5;

/// Computes the visual offset for a raw drag `raw` along one axis.
///
/// Returns `raw` unchanged on unbounded axes and whenever the drag does not
/// push past the first (`raw > 0` on page 0) or last (`raw < 0` on page
/// `total - 1`) page.
pub fn bounded_offset(
    raw: f32,
    page_size: f32,
    current_page: i64,
    total_pages: Option<u32>,
) -> f32 {
    let Some(total) = total_pages else {
        return raw;
    };

    let pushing_past_start = current_page == 0 && raw > 0.0;
    let pushing_past_end = current_page == i64::from(total) - 1 && raw < 0.0;
    if !(pushing_past_start || pushing_past_end) {
        return raw;
    }

    rubber_band(raw.abs(), page_size).copysign(raw)
}

/// Damped magnitude for a drag of `distance` (>= 0) against an edge.
fn rubber_band(distance: f32, page_size: f32) -> f32 {
    let max_threshold = page_size.max(0.0) / 2.0;
    if max_threshold <= 0.0 {
        return 0.0;
    }

    if distance <= max_threshold {
        let progress = distance / max_threshold;
        let dampening_factor = 1.0 - progress * (1.0 - MIN_DAMPENING_FACTOR);
        return distance * dampening_factor;
    }

    // Past the threshold: continue from max_threshold / 2 and approach
    // max_threshold, which is half a page.
    let knee = max_threshold * MIN_DAMPENING_FACTOR;
    let overshoot = (distance - max_threshold) / max_threshold;
    knee + (max_threshold - knee) * (1.0 - (-overshoot).exp())
}
