//! Wind skin: `"horizontal-bar"` speed bar with direction readout.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::config::GaugeOptions;
use crate::state::StateSnapshot;
use crate::styles;
use crate::widgets::{draw_outlined_bar, format_bearing, format_value, range_fraction};

/// Speed as a filled bar over the configured range, wind direction as a
/// bearing readout beside it.
pub(crate) fn horizontal_bar<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let direction = state.get("direction");
    let speed = state.get("speed");

    let margin = 10i32;
    let area = Rectangle::new(
        Point::new(bounds.top_left.x + margin, bounds.center().y - 8),
        Size::new(bounds.size.width.saturating_sub(2 * margin as u32), 16),
    );
    let fraction = range_fraction(speed, options.min, options.max);
    draw_outlined_bar(target, area, fraction, options.needle_color, options.text_color)?;

    let label_style = MonoTextStyle::new(styles::LABEL_FONT, options.text_color);
    let speed_label = format_value(speed, options.decimals, &options.unit);
    Text::with_text_style(
        speed_label.as_str(),
        Point::new(bounds.center().x, area.top_left.y - 6),
        label_style,
        styles::CENTERED,
    )
    .draw(target)?;

    let bearing = format_bearing(direction);
    Text::with_text_style(
        bearing.as_str(),
        Point::new(bounds.center().x, area.top_left.y + area.size.height as i32 + 12),
        label_style,
        styles::CENTERED,
    )
    .draw(target)?;

    Ok(())
}
