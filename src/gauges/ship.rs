//! Ship navigation display: heading, course, speed, and wind.
//!
//! Property table: `heading`, `cog`, `windDirection` (angular); `sog`,
//! `windSpeed` (linear). The three directional properties ease along the
//! shortest arc independently of each other.

use core::fmt::Write as _;
use std::rc::Rc;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors;
use crate::config::GaugeOptions;
use crate::core::{GaugeCapabilities, GaugeCore, GaugeError};
use crate::registry::{GaugeKind, SkinRegistry};
use crate::state::{Property, StateSnapshot, angular, linear};
use crate::styles;
use crate::widgets::{Label, draw_compass_ring, draw_needle, draw_ship_hull, polar_point};

/// Animated properties of the ship gauge.
pub const PROPERTIES: &[Property] = &[
    angular("heading"),
    angular("cog"),
    linear("sog"),
    angular("windDirection"),
    linear("windSpeed"),
];

const DESCRIPTION: &str = "A marine navigation display showing ship outline with heading, \
                           course over ground, wind direction, and speed vectors";

/// Partial data push for the ship gauge; `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShipData {
    /// Ship's heading (bow direction), degrees.
    pub heading: Option<f32>,
    /// Course over ground, degrees.
    pub cog: Option<f32>,
    /// Speed over ground.
    pub sog: Option<f32>,
    /// True wind direction, degrees.
    pub wind_direction: Option<f32>,
    /// Wind speed.
    pub wind_speed: Option<f32>,
}

/// Marine navigation gauge.
pub struct Ship<D: DrawTarget<Color = Rgb565>> {
    core: GaugeCore<D>,
}

impl<D: DrawTarget<Color = Rgb565>> Ship<D> {
    /// Ship defaults: dark theme, hull/wind/COG accent colors, knots.
    pub fn default_options() -> GaugeOptions {
        GaugeOptions {
            background_color: colors::BLACK,
            text_color: colors::WHITE,
            needle_color: colors::NEEDLE_BLUE,
            unit: String::from("knots"),
            decimals: 1,
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
            kind: GaugeKind::Ship,
            default_paint,
            properties: PROPERTIES,
            description: DESCRIPTION,
        };
        GaugeCore::new(surface, options, caps, registry).map(|core| Self { core })
    }

    /// Push a partial navigation update.
    pub fn set_navigation(&mut self, data: ShipData) -> Result<(), D::Error> {
        let mut entries: heapless::Vec<(&str, f32), 5> = heapless::Vec::new();
        let fields = [
            ("heading", data.heading),
            ("cog", data.cog),
            ("sog", data.sog),
            ("windDirection", data.wind_direction),
            ("windSpeed", data.wind_speed),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                let _ = entries.push((name, value));
            }
        }
        self.core.set_data(&entries)
    }
}

super::delegate_gauge_api!(Ship);

// =============================================================================
// Default Painter
// =============================================================================

/// Built-in marine display: cardinal ring, rotated hull, COG line, wind
/// needle, and a HDG/COG/SOG/WIND data block.
pub(crate) fn default_paint<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) / 2).saturating_sub(20) as f32;

    let heading = state.get("heading");
    let cog = state.get("cog");
    let sog = state.get("sog");
    let wind_direction = state.get("windDirection");
    let wind_speed = state.get("windSpeed");

    draw_compass_ring(target, center, radius, options.text_color, options.text_color)?;

    // Course-over-ground line, under the hull
    Line::new(center, polar_point(center, radius * 0.7, cog))
        .into_styled(PrimitiveStyle::with_stroke(options.cog_color, 2))
        .draw(target)?;

    // Wind vector
    draw_needle(target, center, radius * 0.55, wind_direction, options.wind_color, 2)?;

    // Hull on top, rotated to heading
    draw_ship_hull(target, center, radius * 0.15, heading, options.ship_color, options.text_color)?;

    // Data block, top-left
    let label_style = MonoTextStyle::new(styles::LABEL_FONT, options.text_color);
    let origin = bounds.top_left;
    let mut line = |target: &mut D, row: i32, text: &str| {
        Text::with_text_style(
            text,
            Point::new(origin.x + 6, origin.y + 14 + row * 12),
            label_style,
            styles::LEFT_ALIGNED,
        )
        .draw(target)
        .map(|_| ())
    };

    let mut text = Label::new();
    write!(text, "HDG {heading:.0}\u{b0}").ok();
    line(target, 0, &text)?;
    text.clear();
    write!(text, "COG {cog:.0}\u{b0}").ok();
    line(target, 1, &text)?;
    text.clear();
    write!(text, "SOG {sog:.1} {}", options.unit).ok();
    line(target, 2, &text)?;
    text.clear();
    write!(text, "WIND {wind_direction:.0}\u{b0} @ {wind_speed:.1}").ok();
    line(target, 3, &text)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
