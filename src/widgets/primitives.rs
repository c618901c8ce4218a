//! Low-level drawing primitives shared across painters.
//!
//! Geometry uses the compass convention throughout: bearings are degrees
//! with 0° pointing up (north) and positive angles turning clockwise, which
//! matches the angular state values the easing engine produces.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::styles;

// =============================================================================
// Geometry Helpers
// =============================================================================

/// Point at `radius` pixels from `center` along a compass bearing.
pub fn polar_point(center: Point, radius: f32, bearing_deg: f32) -> Point {
    let rad = bearing_deg.to_radians();
    Point::new(
        center.x + (radius * rad.sin()).round() as i32,
        center.y - (radius * rad.cos()).round() as i32,
    )
}

/// Fraction of `value` within `[min, max]`, clamped to `[0, 1]` for display
/// geometry.
///
/// A degenerate range (`max - min <= 0`) yields 0 rather than propagating
/// infinity; a misconfigured gauge renders degenerate, it does not crash.
/// Values outside the range clamp here only for geometry - the engine itself
/// never clamps targets.
pub fn range_fraction(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 { 0.0 } else { ((value - min) / span).clamp(0.0, 1.0) }
}

// =============================================================================
// Needles and Caps
// =============================================================================

/// Draw a needle from `center` along a compass bearing, with a center cap.
pub fn draw_needle<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    center: Point,
    length: f32,
    bearing_deg: f32,
    color: Rgb565,
    stroke_width: u32,
) -> Result<(), D::Error> {
    let tip = polar_point(center, length, bearing_deg);
    Line::new(center, tip)
        .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
        .draw(target)?;
    draw_center_cap(target, center, 8, color)
}

/// Filled circle marking a needle pivot.
pub fn draw_center_cap<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    center: Point,
    diameter: u32,
    color: Rgb565,
) -> Result<(), D::Error> {
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

// =============================================================================
// Compass Ring
// =============================================================================

/// Ring outline with N/E/S/W cardinal labels at 80% radius.
pub fn draw_compass_ring<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    center: Point,
    radius: f32,
    ring_color: Rgb565,
    label_color: Rgb565,
) -> Result<(), D::Error> {
    Circle::with_center(center, (radius * 2.0) as u32)
        .into_styled(PrimitiveStyle::with_stroke(ring_color, 2))
        .draw(target)?;

    let label_style = MonoTextStyle::new(styles::LABEL_FONT, label_color);
    for (cardinal, bearing) in [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
        let at = polar_point(center, radius * 0.8, bearing);
        // Nudge down by half a glyph so the label is visually centered
        let at = Point::new(at.x, at.y + 3);
        Text::with_text_style(cardinal, at, label_style, styles::CENTERED).draw(target)?;
    }
    Ok(())
}

// =============================================================================
// Ship Hull
// =============================================================================

/// Filled triangle hull pointing along `heading_deg`, stern corners swept
/// back 145° to either side.
pub fn draw_ship_hull<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    center: Point,
    size: f32,
    heading_deg: f32,
    fill: Rgb565,
    stroke: Rgb565,
) -> Result<(), D::Error> {
    let bow = polar_point(center, size, heading_deg);
    let port = polar_point(center, size * 0.86, heading_deg + 145.0);
    let starboard = polar_point(center, size * 0.86, heading_deg - 145.0);
    let hull = Triangle::new(bow, port, starboard);
    hull.into_styled(PrimitiveStyle::with_fill(fill)).draw(target)?;
    hull.into_styled(PrimitiveStyle::with_stroke(stroke, 1)).draw(target)
}

// =============================================================================
// Trend Arrow
// =============================================================================

/// Small trend arrow (8px tall) centered at `(x, y)`: shaft plus two
/// arrowhead segments, pointing up when `rising`.
pub fn draw_trend_arrow<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    x: i32,
    y: i32,
    rising: bool,
    color: Rgb565,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_stroke(color, 1);
    let (shaft_from, tip, head_y) = if rising {
        (Point::new(x, y + 4), Point::new(x, y - 4), y - 1)
    } else {
        (Point::new(x, y - 4), Point::new(x, y + 4), y + 1)
    };
    Line::new(shaft_from, tip).into_styled(style).draw(target)?;
    Line::new(Point::new(x - 3, head_y), tip).into_styled(style).draw(target)?;
    Line::new(Point::new(x + 3, head_y), tip).into_styled(style).draw(target)
}

// =============================================================================
// Bars
// =============================================================================

/// Outlined horizontal bar filled to `fraction` of its width.
pub fn draw_outlined_bar<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    area: Rectangle,
    fraction: f32,
    fill: Rgb565,
    outline: Rgb565,
) -> Result<(), D::Error> {
    area.into_styled(PrimitiveStyle::with_stroke(outline, 1)).draw(target)?;
    if area.size.width <= 4 || area.size.height <= 4 {
        return Ok(());
    }
    let inner_width = ((area.size.width - 4) as f32 * fraction.clamp(0.0, 1.0)) as u32;
    if inner_width == 0 {
        return Ok(());
    }
    Rectangle::new(
        Point::new(area.top_left.x + 2, area.top_left.y + 2),
        Size::new(inner_width, area.size.height - 4),
    )
    .into_styled(PrimitiveStyle::with_fill(fill))
    .draw(target)
}

// =============================================================================
// Unit Tests
// =============================================================================
