//! Speedometer skins: `"bar"` and `"number"`.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::config::GaugeOptions;
use crate::state::StateSnapshot;
use crate::styles;
use crate::widgets::{draw_outlined_bar, format_value, range_fraction};

/// Horizontal bar filled to the value's fraction of the range, with a
/// readout above it.
pub(crate) fn bar<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let value = state.get("value");
    let fraction = range_fraction(value, options.min, options.max);

    let margin = 10i32;
    let bar_height = (bounds.size.height / 4).clamp(8, 24);
    let area = Rectangle::new(
        Point::new(bounds.top_left.x + margin, bounds.center().y),
        Size::new(bounds.size.width.saturating_sub(2 * margin as u32), bar_height),
    );
    draw_outlined_bar(target, area, fraction, options.needle_color, options.text_color)?;

    let readout = format_value(value, options.decimals, &options.unit);
    Text::with_text_style(
        readout.as_str(),
        Point::new(bounds.center().x, bounds.center().y - 8),
        MonoTextStyle::new(styles::VALUE_FONT_MEDIUM, options.text_color),
        styles::CENTERED,
    )
    .draw(target)?;

    Ok(())
}

/// Large numeric readout only.
pub(crate) fn number<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let value = state.get("value");
    let center = bounds.center();

    let readout = format_value(value, options.decimals, "");
    Text::with_text_style(
        readout.as_str(),
        center,
        MonoTextStyle::new(styles::VALUE_FONT, options.needle_color),
        styles::CENTERED,
    )
    .draw(target)?;

    if !options.unit.is_empty() {
        Text::with_text_style(
            &options.unit,
            Point::new(center.x, center.y + 20),
            MonoTextStyle::new(styles::LABEL_FONT, options.text_color),
            styles::CENTERED,
        )
        .draw(target)?;
    }

    Ok(())
}
