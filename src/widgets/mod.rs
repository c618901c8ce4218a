//! Shared drawing building blocks for gauge painters.
//!
//! Skins and default painters compose these instead of re-deriving polar
//! math and arrow geometry. Everything here is stateless: a widget function
//! takes the surface plus explicit geometry and colors, draws, and returns.

mod primitives;
mod text;

pub use primitives::{
    draw_center_cap, draw_compass_ring, draw_needle, draw_outlined_bar, draw_ship_hull,
    draw_trend_arrow, polar_point, range_fraction,
};
pub use text::{Label, format_bearing, format_value};
