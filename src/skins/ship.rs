//! Ship skin: `"minimal"` hull and two readouts.

use core::fmt::Write as _;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::config::GaugeOptions;
use crate::state::StateSnapshot;
use crate::styles;
use crate::widgets::{Label, draw_ship_hull};

/// Just the rotated hull plus HDG and SOG readouts; no ring, no vectors.
pub(crate) fn minimal<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    options: &GaugeOptions,
    state: &StateSnapshot<'_>,
    bounds: Rectangle,
) -> Result<(), D::Error> {
    target.clear(options.background_color)?;

    let center = bounds.center();
    let heading = state.get("heading");
    let sog = state.get("sog");

    let size = (bounds.size.width.min(bounds.size.height) as f32 / 4.0).max(6.0);
    draw_ship_hull(target, center, size, heading, options.ship_color, options.text_color)?;

    let label_style = MonoTextStyle::new(styles::LABEL_FONT, options.text_color);
    let mut text = Label::new();
    write!(text, "HDG {heading:.0}\u{b0}").ok();
    Text::with_text_style(
        text.as_str(),
        Point::new(bounds.top_left.x + 6, bounds.top_left.y + 14),
        label_style,
        styles::LEFT_ALIGNED,
    )
    .draw(target)?;

    text.clear();
    write!(text, "SOG {sog:.1}").ok();
    Text::with_text_style(
        text.as_str(),
        Point::new(bounds.top_left.x + 6, bounds.top_left.y + 26),
        label_style,
        styles::LEFT_ALIGNED,
    )
    .draw(target)?;

    Ok(())
}
