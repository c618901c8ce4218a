//! Built-in named skins.
//!
//! These are the alternative painters registered by
//! [`SkinRegistry::with_builtins`]. Each is a plain function matching the
//! [`crate::registry::PaintFn`] contract: it repaints the whole gauge from
//! the rendered-state snapshot and touches nothing but the surface. The
//! `"default"` name is intentionally absent - it always resolves to the
//! gauge type's own built-in painter through the fallback path.

mod compass;
mod ship;
mod speedometer;
mod trend;
mod wind;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

use crate::registry::{GaugeKind, SkinRegistry};

/// Register every built-in skin into `registry`.
pub(crate) fn register_builtins<D: DrawTarget<Color = Rgb565>>(registry: &mut SkinRegistry<D>) {
    registry.register(GaugeKind::Speedometer, "bar", speedometer::bar);
    registry.register(GaugeKind::Speedometer, "number", speedometer::number);
    registry.register(GaugeKind::Compass, "horizontal-bar", compass::horizontal_bar);
    registry.register(GaugeKind::Wind, "horizontal-bar", wind::horizontal_bar);
    registry.register(GaugeKind::Ship, "minimal", ship::minimal);
    registry.register(GaugeKind::Trend, "arrow-indicator", trend::arrow_indicator);
    registry.register(GaugeKind::Trend, "bar-indicator", trend::bar_indicator);
}
