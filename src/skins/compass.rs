//! Compass skin: `"horizontal-bar"` heading tape.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::config::GaugeOptions;
use crate::state::StateSnapshot;
use crate::styles;
use crate::widgets::format_bearing;

/// Linear heading tape: cardinal letters spread along a strip with a marker
/// at the current heading and a readout below.
pub(crate) fn horizontal_bar<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let heading = state.get("heading");
    let margin = 10i32;
    let strip_width = bounds.size.width.saturating_sub(2 * margin as u32);
    let strip = Rectangle::new(
        Point::new(bounds.top_left.x + margin, bounds.center().y - 10),
        Size::new(strip_width, 20),
    );
    strip.into_styled(PrimitiveStyle::with_stroke(options.text_color, 1)).draw(target)?;

    // Cardinal letters at their fraction of the 0..360 tape
    let label_style = MonoTextStyle::new(styles::LABEL_FONT, options.text_color);
    for (cardinal, degrees) in [("N", 0.0f32), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
        let x = strip.top_left.x + (degrees / 360.0 * strip_width as f32) as i32;
        Text::with_text_style(
            cardinal,
            Point::new(x, strip.top_left.y - 4),
            label_style,
            styles::CENTERED,
        )
        .draw(target)?;
    }

    // Heading marker
    let marker_x = strip.top_left.x + (heading / 360.0 * strip_width as f32) as i32;
    Line::new(
        Point::new(marker_x, strip.top_left.y),
        Point::new(marker_x, strip.top_left.y + strip.size.height as i32 - 1),
    )
    .into_styled(PrimitiveStyle::with_stroke(options.needle_color, 3))
    .draw(target)?;

    let readout = format_bearing(heading);
    Text::with_text_style(
        readout.as_str(),
        Point::new(bounds.center().x, strip.top_left.y + strip.size.height as i32 + 14),
        label_style,
        styles::CENTERED,
    )
    .draw(target)?;

    Ok(())
}
