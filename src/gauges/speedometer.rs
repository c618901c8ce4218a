//! Speedometer: a single linear `value` swept across a dial arc.
//!
//! Property table: `value` (linear).
//!
//! Targets are NOT clamped to `min`/`max` - pushing 150 into a 0..100 gauge
//! converges to a rendered 150; the default painter clamps the needle
//! geometry for display, but the engine state keeps the true value. Display
//! clamping, where wanted, is a skin concern.

use std::rc::Rc;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Angle;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors;
use crate::config::GaugeOptions;
use crate::core::{GaugeCapabilities, GaugeCore, GaugeError};
use crate::registry::{GaugeKind, SkinRegistry};
use crate::state::{Property, StateSnapshot, linear};
use crate::styles;
use crate::widgets::{draw_needle, format_value, range_fraction};

/// Animated properties of the speedometer.
pub const PROPERTIES: &[Property] = &[linear("value")];

const DESCRIPTION: &str =
    "A speedometer gauge that displays a numeric value with customizable range and styling";

/// Dial gauge for a single numeric value.
pub struct Speedometer<D: DrawTarget<Color = Rgb565>> {
    core: GaugeCore<D>,
}

impl<D: DrawTarget<Color = Rgb565>> Speedometer<D> {
    /// Speedometer defaults: light theme, percent unit, two decimals.
    pub fn default_options() -> GaugeOptions {
        GaugeOptions {
            background_color: colors::WHITE,
            text_color: colors::BLACK,
            needle_color: colors::RED,
            unit: String::from("%"),
            decimals: 2,
            ..GaugeOptions::default()
        }
    }

    /// Construct with default options and the built-in skin set.
    pub fn new(surface: D) -> Result<Self, GaugeError> {
        Self::with_options(surface, Self::default_options())
    }

    /// Construct with explicit options and the built-in skin set.
    pub fn with_options(surface: D, options: GaugeOptions) -> Result<Self, GaugeError> {
        Self::with_registry(surface, options, Rc::new(SkinRegistry::with_builtins()))
    }

    /// Construct against a shared (possibly customized) skin registry.
    pub fn with_registry(
        surface: D,
        options: GaugeOptions,
        registry: Rc<SkinRegistry<D>>,
    ) -> Result<Self, GaugeError> {
        let caps = GaugeCapabilities {
            kind: GaugeKind::Speedometer,
            default_paint,
            properties: PROPERTIES,
            description: DESCRIPTION,
        };
        GaugeCore::new(surface, options, caps, registry).map(|core| Self { core })
    }

    /// Push a new target value.
    pub fn set_value(&mut self, value: f32) -> Result<(), D::Error> {
        self.core.set_data(&[("value", value)])
    }
}

super::delegate_gauge_api!(Speedometer);

// =============================================================================
// Default Painter
// =============================================================================

/// Built-in dial: semicircular arc, needle, value readout, range labels.
pub(crate) fn default_paint<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) / 3) as f32;
    let value = state.get("value");

    // Dial arc
    Arc::with_center(center, (radius * 2.0) as u32, Angle::from_degrees(180.0), Angle::from_degrees(180.0))
        .into_styled(PrimitiveStyle::with_stroke(options.text_color, 4))
        .draw(target)?;

    // Needle sweeps west (min) through north to east (max); geometry clamps,
    // the state does not.
    let fraction = range_fraction(value, options.min, options.max);
    let bearing = -90.0 + 180.0 * fraction;
    draw_needle(target, center, radius, bearing, options.needle_color, 2)?;

    // Value readout below the pivot
    let readout = format_value(value, options.decimals, &options.unit);
    Text::with_text_style(
        readout.as_str(),
        Point::new(center.x, center.y + 25),
        MonoTextStyle::new(styles::VALUE_FONT_MEDIUM, options.text_color),
        styles::CENTERED,
    )
    .draw(target)?;

    // Range labels at the arc ends
    let label_style = MonoTextStyle::new(styles::LABEL_FONT, options.text_color);
    let min_label = format_value(options.min, 0, "");
    let max_label = format_value(options.max, 0, "");
    Text::with_text_style(
        min_label.as_str(),
        Point::new(center.x - radius as i32, center.y + 12),
        label_style,
        styles::CENTERED,
    )
    .draw(target)?;
    Text::with_text_style(
        max_label.as_str(),
        Point::new(center.x + radius as i32, center.y + 12),
        label_style,
        styles::CENTERED,
    )
    .draw(target)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
