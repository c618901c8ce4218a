//! Easing steps that move a rendered value toward its target.
//!
//! Two step functions cover every tracked property:
//! - [`step`]: plain exponential smoothing for linear quantities.
//! - [`step_angular`]: the same smoothing applied to the shortest angular
//!   distance, for compass-style directions in degrees. The result is always
//!   normalized into `[0, 360)`.
//!
//! Both are deterministic in `(prev, target, alpha)` and converge
//! monotonically for `0 < alpha <= 1`: the distance to the target never
//! grows, and there is no overshoot. `alpha = 0` freezes the rendered value
//! and `alpha = 1` snaps it to the target; neither needs special-casing by
//! callers.

// =============================================================================
// Linear Easing
// =============================================================================

/// One smoothing step for a linear property.
#[inline]
pub fn step(prev: f32, target: f32, alpha: f32) -> f32 {
    prev + (target - prev) * alpha
}

// =============================================================================
// Angular Easing
// =============================================================================

/// One smoothing step for an angular property (degrees).
///
/// The step always takes the short way around the circle: easing 350 toward
/// 10 moves forward through 0, never backward through 180.
#[inline]
pub fn step_angular(prev: f32, target: f32, alpha: f32) -> f32 {
    let mut diff = target - prev;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    normalize_degrees(prev + diff * alpha)
}

/// Normalize an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 when the input is a tiny negative
    // value whose remainder rounds up.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

// =============================================================================
// Unit Tests
// =============================================================================
