//! Stateless geometry helpers shared by every part of the engine.
//!
//! Layout measurements carry sub-pixel noise, so comparisons use a fixed tolerance and
//! space conversions round to a fixed number of decimal digits. `is_equal` and `is_more`
//! share the same tolerance: for any `a >= b - TOLERANCE` exactly one of them holds.

/// Comparison tolerance, in pixels.
pub const TOLERANCE: f64 = 1.0;

/// Decimal digits kept by the space conversions and the thumb length.
pub const PRECISION: u32 = 2;

pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

pub fn is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

pub fn is_more(a: f64, b: f64) -> bool {
    a - b > TOLERANCE
}

/// Clamps `value` into `[min, max]`. A collapsed or inverted range yields `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    value.max(min).min(max)
}

/// Places a content-space scroll offset on the track.
///
/// Returns `0` for a non-positive content extent instead of dividing by it.
pub fn to_track_space(scroll_offset: f64, content_extent: f64, viewport_extent: f64) -> f64 {
    if content_extent <= 0.0 {
        return 0.0;
    }
    round_to(scroll_offset * viewport_extent / content_extent, PRECISION)
}

/// Inverse of [`to_track_space`]: maps a track-space thumb offset to a scroll offset.
///
/// Returns `0` for a non-positive viewport extent instead of dividing by it.
pub fn to_content_space(track_offset: f64, content_extent: f64, viewport_extent: f64) -> f64 {
    if viewport_extent <= 0.0 {
        return 0.0;
    }
    round_to(track_offset * content_extent / viewport_extent, PRECISION)
}

/// Thumb length for an axis: `viewport / (content / viewport)`, or `0` when the content
/// does not overflow.
pub fn thumb_length(viewport_extent: f64, content_extent: f64) -> f64 {
    if viewport_extent <= 0.0 || !is_more(content_extent, viewport_extent) {
        return 0.0;
    }
    round_to(
        viewport_extent / (content_extent / viewport_extent),
        PRECISION,
    )
}
