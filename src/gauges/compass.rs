//! Compass: a single angular `heading`.
//!
//! Property table: `heading` (angular). Heading updates always ease along
//! the shortest arc - 350° to 10° animates forward through north, never
//! backward through 180°.

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
use crate::state::{Property, StateSnapshot, angular};
use crate::styles;
use crate::widgets::{draw_compass_ring, draw_needle, format_bearing};

/// Animated properties of the compass.
pub const PROPERTIES: &[Property] = &[angular("heading")];

const DESCRIPTION: &str = "A compass gauge that displays a heading with shortest-path animation";

/// Heading dial with cardinal ring and needle.
pub struct Compass<D: DrawTarget<Color = Rgb565>> {
    core: GaugeCore<D>,
}

impl<D: DrawTarget<Color = Rgb565>> Compass<D> {
    /// Compass defaults: light theme, red needle.
    pub fn default_options() -> GaugeOptions {
        GaugeOptions {
            background_color: colors::WHITE,
            text_color: colors::BLACK,
            needle_color: colors::RED,
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
            kind: GaugeKind::Compass,
            default_paint,
            properties: PROPERTIES,
            description: DESCRIPTION,
        };
        GaugeCore::new(surface, options, caps, registry).map(|core| Self { core })
    }

    /// Push a new target heading in degrees.
    pub fn set_heading(&mut self, degrees: f32) -> Result<(), D::Error> {
        self.core.set_data(&[("heading", degrees)])
    }
}

super::delegate_gauge_api!(Compass);

// =============================================================================
// Default Painter
// =============================================================================

/// Built-in compass face: cardinal ring, needle, heading readout.
pub(crate) fn default_paint<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) / 2).saturating_sub(10) as f32;
    let heading = state.get("heading");

    draw_compass_ring(target, center, radius, options.text_color, options.text_color)?;
    draw_needle(target, center, radius * 0.9, heading, options.needle_color, 3)?;

    let readout = format_bearing(heading);
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
    fn test_heading_eases_shortest_path() {
        let mut gauge = Compass::new(display()).unwrap();
        // Start rendered heading near 350 by snapping once
        gauge.set_options(|o| o.easing_factor = 1.0);
        gauge.set_heading(350.0).unwrap();
        gauge.update().unwrap();
        assert_eq!(gauge.rendered("heading"), 350.0);

        // Now ease toward 10 with a small factor: must move through 0
        gauge.set_options(|o| o.easing_factor = 0.1);
        gauge.set_heading(10.0).unwrap();
        gauge.update().unwrap();
        let h = gauge.rendered("heading");
        assert!((h - 352.0).abs() < 1e-3, "One step from 350 toward 10 lands at 352, got {h}");
    }

    #[test]
    fn test_rendered_heading_normalized() {
        let mut gauge = Compass::new(display()).unwrap();
        gauge.set_heading(350.0).unwrap();
        for _ in 0..50 {
            gauge.update().unwrap();
            let h = gauge.rendered("heading");
            assert!((0.0..360.0).contains(&h), "Heading must stay in [0, 360), got {h}");
        }
    }

    #[test]
    fn test_metadata() {
        let gauge = Compass::new(display()).unwrap();
        let meta = gauge.metadata();
        assert_eq!(meta.kind, "compass");
        assert_eq!(meta.properties, vec!["heading"]);
    }
}
