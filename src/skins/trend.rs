//! Trend skins: `"arrow-indicator"` and `"bar-indicator"`.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::config::GaugeOptions;
use crate::state::StateSnapshot;
use crate::widgets::draw_trend_arrow;

/// Arrows scaled by intensity level (0.25 per arrow, up to four).
fn arrow_count(intensity: f32) -> i32 {
    ((intensity * 4.0).ceil() as i32).clamp(0, 4)
}

/// Stacked arrows: up arrows above center colored `up_color`, down arrows
/// below colored `down_color`. A flat trend draws a short dash.
pub(crate) fn arrow_indicator<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let up = arrow_count(state.get("upTrendIntensity"));
    let down = arrow_count(state.get("downTrendIntensity"));

    for i in 0..up {
        draw_trend_arrow(target, center.x, center.y - 6 - i * 10, true, options.up_color)?;
    }
    for i in 0..down {
        draw_trend_arrow(target, center.x, center.y + 6 + i * 10, false, options.down_color)?;
    }

    if up == 0 && down == 0 {
        Line::new(Point::new(center.x - 6, center.y), Point::new(center.x + 6, center.y))
            .into_styled(PrimitiveStyle::with_stroke(options.text_color, 1))
            .draw(target)?;
    }

    Ok(())
}

/// Signed bar from the center line: rightward for up intensity, leftward
/// for down intensity.
pub(crate) fn bar_indicator<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let half_span = (bounds.size.width / 2).saturating_sub(10) as f32;
    let bar_height = 12u32;
    let top = center.y - bar_height as i32 / 2;

    // Center tick
    Line::new(Point::new(center.x, top - 3), Point::new(center.x, top + bar_height as i32 + 2))
        .into_styled(PrimitiveStyle::with_stroke(options.text_color, 1))
        .draw(target)?;

    let up_width = (half_span * state.get("upTrendIntensity").clamp(0.0, 1.0)) as u32;
    if up_width > 0 {
        Rectangle::new(Point::new(center.x + 1, top), Size::new(up_width, bar_height))
            .into_styled(PrimitiveStyle::with_fill(options.up_color))
            .draw(target)?;
    }

    let down_width = (half_span * state.get("downTrendIntensity").clamp(0.0, 1.0)) as u32;
    if down_width > 0 {
        Rectangle::new(
            Point::new(center.x - 1 - down_width as i32, top),
            Size::new(down_width, bar_height),
        )
        .into_styled(PrimitiveStyle::with_fill(options.down_color))
        .draw(target)?;
    }

    Ok(())
}
