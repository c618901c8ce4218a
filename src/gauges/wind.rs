//! Wind: angular `direction` plus linear `speed`.
//!
//! Property table: `direction` (angular), `speed` (linear). The direction
//! needle wraps along the shortest arc while the speed readout eases
//! linearly; both advance in the same update step.

use std::rc::Rc;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::colors;
use crate::config::GaugeOptions;
use crate::core::{GaugeCapabilities, GaugeCore, GaugeError};
use crate::registry::{GaugeKind, SkinRegistry};
use crate::state::{Property, StateSnapshot, angular, linear};
use crate::styles;
use crate::widgets::{draw_compass_ring, draw_needle, format_value};

/// Animated properties of the wind gauge.
pub const PROPERTIES: &[Property] = &[angular("direction"), linear("speed")];

const DESCRIPTION: &str = "A wind gauge that displays both wind direction and speed";

/// Partial data push for the wind gauge; `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindData {
    pub direction: Option<f32>,
    pub speed: Option<f32>,
}

/// Wind rose with direction needle and speed readout.
pub struct Wind<D: DrawTarget<Color = Rgb565>> {
    core: GaugeCore<D>,
}

impl<D: DrawTarget<Color = Rgb565>> Wind<D> {
    /// Wind defaults: dark theme, blue needle, knots.
    pub fn default_options() -> GaugeOptions {
        GaugeOptions {
            background_color: colors::BLACK,
            text_color: colors::WHITE,
            needle_color: colors::NEEDLE_BLUE,
            unit: String::from("knots"),
            decimals: 0,
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
            kind: GaugeKind::Wind,
            default_paint,
            properties: PROPERTIES,
            description: DESCRIPTION,
        };
        GaugeCore::new(surface, options, caps, registry).map(|core| Self { core })
    }

    /// Push a partial wind update.
    pub fn set_wind(&mut self, data: WindData) -> Result<(), D::Error> {
        let mut entries: heapless::Vec<(&str, f32), 2> = heapless::Vec::new();
        if let Some(direction) = data.direction {
            let _ = entries.push(("direction", direction));
        }
        if let Some(speed) = data.speed {
            let _ = entries.push(("speed", speed));
        }
        self.core.set_data(&entries)
    }
}

super::delegate_gauge_api!(Wind);

// =============================================================================
// Default Painter
// =============================================================================

/// Built-in wind rose: cardinal ring, direction needle, speed readout.
pub(crate) fn default_paint<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) / 2).saturating_sub(10) as f32;
    let direction = state.get("direction");
    let speed = state.get("speed");

    draw_compass_ring(target, center, radius, options.text_color, options.text_color)?;
    draw_needle(target, center, radius * 0.9, direction, options.needle_color, 3)?;

    let readout = format_value(speed, options.decimals, &options.unit);
    Text::with_text_style(
        readout.as_str(),
        Point::new(center.x, center.y + radius as i32 / 2),
        MonoTextStyle::new(styles::LABEL_FONT, options.text_color),
        styles::CENTERED,
    )
    .draw(target)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
