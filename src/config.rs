//! Gauge configuration: recognized options and engine constants.
//!
//! Every gauge type consumes the same [`GaugeOptions`] record. Options are
//! merged once at construction (each gauge type ships its own defaults, the
//! caller overrides via struct-update syntax) and are immutable afterwards
//! except through each gauge's `set_options`, which takes effect on the next
//! paint.
//!
//! # Option domains
//!
//! - `easing_factor` is meaningful in `(0, 1]`: 0 freezes the rendered state,
//!   1 snaps to the target with no smoothing. Values are not validated; out
//!   of range factors produce degenerate (but non-crashing) animation.
//! - `min`/`max` describe the display range only. Target values are never
//!   clamped to it; a degenerate range (`max <= min`) renders as a zero
//!   fraction, not an arithmetic error.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors;

// =============================================================================
// Engine Constants
// =============================================================================

/// Default per-step interpolation weight.
pub const DEFAULT_EASING_FACTOR: f32 = 0.1;

/// Skin name that resolves to each gauge type's built-in painter.
pub const DEFAULT_SKIN: &str = "default";

/// Default trend sample buffer capacity.
pub const DEFAULT_BUFFER_SIZE: usize = 10;

// =============================================================================
// Trend Thresholds
// =============================================================================

/// Slope-magnitude thresholds mapping a regression slope to one of five
/// discrete strength levels (0, 0.25, 0.5, 0.75, 1).
///
/// Thresholds must be monotonically increasing; a non-monotonic configuration
/// is caller error and its classification is unspecified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendThresholds {
    /// Below this the trend registers no movement at all.
    pub minimal: f32,
    /// Below this the trend is slight (level 0.25).
    pub low: f32,
    /// Below this the trend is moderate (level 0.5).
    pub medium: f32,
    /// Below this the trend is strong (level 0.75); at or above, maximal (1).
    pub high: f32,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self { minimal: 0.001, low: 0.01, medium: 0.05, high: 0.1 }
    }
}

// =============================================================================
// Gauge Options
// =============================================================================

/// Configuration shared by all gauge types.
///
/// Keys a gauge type does not use are simply ignored by its painters (the
/// speedometer never reads `ship_color`, the ship gauge never reads
/// `decimals`' range labels, and so on).
#[derive(Clone, Debug)]
pub struct GaugeOptions {
    /// Fill painted before each frame.
    pub background_color: Rgb565,
    /// When true, `set_data` runs one update-and-paint cycle synchronously
    /// and the render loop keeps one frame callback scheduled.
    pub auto_render: bool,
    /// Per-step interpolation weight in `(0, 1]`.
    pub easing_factor: f32,
    /// Active skin name; unregistered names fall back to the built-in painter.
    pub skin: String,
    /// Lower bound of the display range.
    pub min: f32,
    /// Upper bound of the display range.
    pub max: f32,
    /// Display unit suffix (e.g. `"%"`, `"knots"`).
    pub unit: String,
    /// Fraction digits in value readouts.
    pub decimals: usize,
    pub needle_color: Rgb565,
    pub text_color: Rgb565,
    /// Ship hull fill (ship gauge).
    pub ship_color: Rgb565,
    /// Wind vector color (ship gauge).
    pub wind_color: Rgb565,
    /// Course-over-ground line color (ship gauge).
    pub cog_color: Rgb565,
    /// Rising trend color (trend gauge).
    pub up_color: Rgb565,
    /// Falling trend color (trend gauge).
    pub down_color: Rgb565,
    /// Trend sample buffer capacity; values below 2 are clamped to 2.
    pub buffer_size: usize,
    /// Slope classification thresholds (trend gauge).
    pub trend_thresholds: TrendThresholds,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            background_color: colors::BLACK,
            auto_render: false,
            easing_factor: DEFAULT_EASING_FACTOR,
            skin: String::from(DEFAULT_SKIN),
            min: 0.0,
            max: 100.0,
            unit: String::new(),
            decimals: 1,
            needle_color: colors::RED,
            text_color: colors::WHITE,
            ship_color: colors::SHIP_BLUE,
            wind_color: colors::WIND_GREEN,
            cog_color: colors::COG_ORANGE,
            up_color: colors::TREND_UP,
            down_color: colors::TREND_DOWN,
            buffer_size: DEFAULT_BUFFER_SIZE,
            trend_thresholds: TrendThresholds::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_monotonic() {
        let t = TrendThresholds::default();
        assert!(
            t.minimal < t.low && t.low < t.medium && t.medium < t.high,
            "Default thresholds must be strictly increasing"
        );
    }

    #[test]
    fn test_default_options() {
        let opts = GaugeOptions::default();
        assert_eq!(opts.easing_factor, DEFAULT_EASING_FACTOR);
        assert_eq!(opts.skin, DEFAULT_SKIN, "Default skin name should be 'default'");
        assert!(!opts.auto_render, "Auto-render should be off by default");
        assert_eq!(opts.min, 0.0);
        assert_eq!(opts.max, 100.0);
        assert_eq!(opts.buffer_size, DEFAULT_BUFFER_SIZE);
    }
}
