//! Trend indicator: direction and strength of a sample stream.
//!
//! Property table: `trend`, `trendStrength`, `upTrendIntensity`,
//! `downTrendIntensity` (all linear).
//!
//! Unlike the other gauges, raw values are not pushed straight into the
//! state pipeline. They feed a [`TrendBuffer`], and on each insertion the
//! regression fit is mapped into the four derived target properties, which
//! then animate through the generic engine like any other gauge state.
//! Derived targets only change once the buffer holds at least two samples.

use std::rc::Rc;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use core::fmt::Write as _;

use crate::colors;
use crate::config::GaugeOptions;
use crate::core::{GaugeCapabilities, GaugeCore, GaugeError};
use crate::registry::{GaugeKind, SkinRegistry};
use crate::state::{Property, StateSnapshot, linear};
use crate::styles;
use crate::trend::{TrendBuffer, classify_strength};
use crate::widgets::{Label, draw_trend_arrow};

/// Animated properties of the trend gauge.
pub const PROPERTIES: &[Property] = &[
    linear("trend"),
    linear("trendStrength"),
    linear("upTrendIntensity"),
    linear("downTrendIntensity"),
];

const DESCRIPTION: &str = "A trend gauge that displays directional trends using arrows or bars \
                           based on historical data";

/// Trend gauge fed by a scalar sample stream.
pub struct TrendGauge<D: DrawTarget<Color = Rgb565>> {
    core: GaugeCore<D>,
    buffer: TrendBuffer,
}

impl<D: DrawTarget<Color = Rgb565>> TrendGauge<D> {
    /// Trend defaults: dark theme, green/red trend colors.
    pub fn default_options() -> GaugeOptions {
        GaugeOptions {
            background_color: colors::BLACK,
            text_color: colors::WHITE,
            up_color: colors::TREND_UP,
            down_color: colors::TREND_DOWN,
            ..GaugeOptions::default()
        }
    }

    /// Construct with default options and the built-in skin set.
    pub fn new(surface: D) -> Result<Self, GaugeError> {
        Self::with_options(surface, Self::default_options())
    }

    /// Construct with explicit options and the built-in skin set.
    ///
    /// `options.buffer_size` selects the sample buffer capacity (clamped to
    /// at least 2).
    pub fn with_options(surface: D, options: GaugeOptions) -> Result<Self, GaugeError> {
        Self::with_registry(surface, options, Rc::new(SkinRegistry::with_builtins()))
    }

    /// Construct against a shared (possibly customized) skin registry.
    pub fn with_registry(
        surface: D,
        options: GaugeOptions,
        registry: Rc<SkinRegistry<D>>,
    ) -> Result<Self, GaugeError> {
        let buffer = TrendBuffer::new(options.buffer_size);
        let mut options = options;
        options.buffer_size = buffer.capacity();
        let caps = GaugeCapabilities {
            kind: GaugeKind::Trend,
            default_paint,
            properties: PROPERTIES,
            description: DESCRIPTION,
        };
        GaugeCore::new(surface, options, caps, registry).map(|core| Self { core, buffer })
    }

    /// Append one sample and refresh the derived trend targets.
    pub fn push_sample(&mut self, value: f32) -> Result<(), D::Error> {
        self.buffer.push(value);
        self.refresh_targets()
    }

    /// Replace the sample buffer wholesale with (at most) the last
    /// `capacity` entries of `values`, then refresh the derived targets.
    pub fn push_samples(&mut self, values: &[f32]) -> Result<(), D::Error> {
        self.buffer.replace(values);
        self.refresh_targets()
    }

    /// Change the buffer capacity (clamped to at least 2), trimming the
    /// oldest samples and refreshing the derived targets.
    pub fn set_buffer_capacity(&mut self, capacity: usize) -> Result<(), D::Error> {
        self.buffer.set_capacity(capacity);
        self.core.set_options(|o| o.buffer_size = capacity.max(crate::trend::MIN_CAPACITY));
        self.refresh_targets()
    }

    /// Current buffer contents, oldest first.
    pub fn buffer(&self) -> Vec<f32> {
        self.buffer.samples().collect()
    }

    /// Current buffer capacity.
    pub fn buffer_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Recompute slope/strength and merge them into the target state.
    /// With fewer than two samples the targets are left as they are.
    fn refresh_targets(&mut self) -> Result<(), D::Error> {
        if self.buffer.len() < crate::trend::MIN_CAPACITY {
            return Ok(());
        }
        let fit = self.buffer.fit();
        let strength = classify_strength(fit.slope.abs(), &self.core.options().trend_thresholds);
        let up = if fit.slope > 0.0 { strength } else { 0.0 };
        let down = if fit.slope < 0.0 { strength } else { 0.0 };
        self.core.set_data(&[
            ("trend", fit.slope),
            ("trendStrength", strength),
            ("upTrendIntensity", up),
            ("downTrendIntensity", down),
        ])
    }
}

super::delegate_gauge_api!(TrendGauge);

// =============================================================================
// Default Painter
// =============================================================================

/// Built-in indicator: arrows repeated with strength plus a slope readout.
pub(crate) fn default_paint<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let trend = state.get("trend");
    let strength = state.get("trendStrength");

    let rising = trend >= 0.0;
    let color = if rising { options.up_color } else { options.down_color };

    // One to three arrows depending on strength
    let repetitions = ((strength * 3.0).ceil() as i32).clamp(1, 3);
    let first_x = center.x - (repetitions - 1) * 6;
    for i in 0..repetitions {
        draw_trend_arrow(target, first_x + i * 12, center.y - 10, rising, color)?;
    }

    let mut readout = Label::new();
    write!(readout, "TREND {trend:.4}").ok();
    Text::with_text_style(
        readout.as_str(),
        Point::new(center.x, bounds.top_left.y + (bounds.size.height as i32 * 3) / 4),
        MonoTextStyle::new(styles::LABEL_FONT, color),
        styles::CENTERED,
    )
    .draw(target)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> MockDisplay<Rgb565> {
        let mut d = MockDisplay::new();
        d.set_allow_overdraw(true);
        d.set_allow_out_of_bounds_drawing(true);
        d
    }

    #[test]
    fn test_constructor_clamps_buffer_size_option() {
        let options =
            GaugeOptions { buffer_size: 0, ..TrendGauge::<MockDisplay<Rgb565>>::default_options() };
        let gauge = TrendGauge::with_options(display(), options).unwrap();
        assert_eq!(gauge.buffer_capacity(), 2, "Capacity below 2 clamps at construction");
        assert_eq!(gauge.options().buffer_size, 2, "Options reflect the clamped capacity");
    }

    #[test]
    fn test_single_sample_leaves_targets_at_zero() {
        let mut gauge = TrendGauge::new(display()).unwrap();
        gauge.push_sample(42.0).unwrap();
        assert_eq!(gauge.target("trend"), 0.0, "One sample defines no trend");
        assert_eq!(gauge.target("trendStrength"), 0.0);
    }

    #[test]
    fn test_rising_stream_sets_up_intensity() {
        let mut gauge = TrendGauge::new(display()).unwrap();
        gauge.push_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((gauge.target("trend") - 1.0).abs() < 1e-5, "Slope of [1..5] is 1");
        assert_eq!(gauge.target("trendStrength"), 1.0, "|slope| 1 is above the high threshold");
        assert_eq!(gauge.target("upTrendIntensity"), 1.0);
        assert_eq!(gauge.target("downTrendIntensity"), 0.0, "Rising stream has no down intensity");
    }

    #[test]
    fn test_falling_stream_sets_down_intensity() {
        let mut gauge = TrendGauge::new(display()).unwrap();
        gauge.push_samples(&[5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
        assert!((gauge.target("trend") + 1.0).abs() < 1e-5);
        assert_eq!(gauge.target("upTrendIntensity"), 0.0);
        assert_eq!(gauge.target("downTrendIntensity"), 1.0);
    }

    #[test]
    fn test_flat_stream_zeroes_both_intensities() {
        let mut gauge = TrendGauge::new(display()).unwrap();
        gauge.push_samples(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(gauge.target("trend"), 0.0);
        assert_eq!(gauge.target("upTrendIntensity"), 0.0, "Zero slope yields both at 0");
        assert_eq!(gauge.target("downTrendIntensity"), 0.0);
    }

    #[test]
    fn test_push_samples_keeps_buffer_tail() {
        let options =
            GaugeOptions { buffer_size: 3, ..TrendGauge::<MockDisplay<Rgb565>>::default_options() };
        let mut gauge = TrendGauge::with_options(display(), options).unwrap();
        gauge.push_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(gauge.buffer(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_set_buffer_capacity_clamps_and_trims() {
        let mut gauge = TrendGauge::new(display()).unwrap();
        gauge.push_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        gauge.set_buffer_capacity(1).unwrap();
        assert_eq!(gauge.buffer_capacity(), 2, "Capacity below 2 clamps to 2");
        assert_eq!(gauge.buffer(), vec![4.0, 5.0], "Oldest samples are trimmed");
        assert_eq!(gauge.options().buffer_size, 2);
    }

    #[test]
    fn test_derived_targets_animate_through_engine() {
        let options =
            GaugeOptions { auto_render: true, ..TrendGauge::<MockDisplay<Rgb565>>::default_options() };
        let mut gauge = TrendGauge::with_options(display(), options).unwrap();
        gauge.push_samples(&[1.0, 2.0, 3.0]).unwrap();
        // Auto-render ran one cycle; rendered state trails the target.
        assert!(gauge.frames_painted() >= 1);
        let rendered = gauge.rendered("trendStrength");
        assert!(rendered > 0.0 && rendered < 1.0, "Strength eases toward 1, got {rendered}");
    }

    #[test]
    fn test_set_data_passthrough_for_direct_state() {
        // Direct state setting stays available for debugging, like any gauge.
        let mut gauge = TrendGauge::new(display()).unwrap();
        gauge.set_data(&[("trend", 0.5)]).unwrap();
        assert_eq!(gauge.target("trend"), 0.5);
    }
}
