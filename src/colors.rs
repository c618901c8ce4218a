//! Shared `Rgb565` color constants.
//!
//! All colors used by the built-in painters live here so skins and default
//! renderers pull from one palette. Components are in RGB565 ranges
//! (red/blue 0-31, green 0-63).

use embedded_graphics::pixelcolor::Rgb565;

// =============================================================================
// Base Palette
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
pub const RED: Rgb565 = Rgb565::new(31, 0, 0);
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 0);
pub const YELLOW: Rgb565 = Rgb565::new(31, 63, 0);
pub const ORANGE: Rgb565 = Rgb565::new(31, 40, 0);
pub const CYAN: Rgb565 = Rgb565::new(0, 63, 31);
pub const GRAY: Rgb565 = Rgb565::new(15, 31, 15);
pub const DARK_GRAY: Rgb565 = Rgb565::new(7, 15, 7);

// =============================================================================
// Gauge Accent Colors
// =============================================================================

/// Default needle blue (`#007bff`).
pub const NEEDLE_BLUE: Rgb565 = Rgb565::new(0, 30, 31);

/// Ship hull fill (`#4a90e2`).
pub const SHIP_BLUE: Rgb565 = Rgb565::new(9, 36, 27);

/// Wind vector green (`#32cd32`).
pub const WIND_GREEN: Rgb565 = Rgb565::new(6, 51, 6);

/// Course-over-ground orange (`#ff6b35`).
pub const COG_ORANGE: Rgb565 = Rgb565::new(31, 26, 6);

/// Rising trend green (`#00cc00`).
pub const TREND_UP: Rgb565 = Rgb565::new(0, 51, 0);

/// Falling trend red (`#cc0000`).
pub const TREND_DOWN: Rgb565 = Rgb565::new(25, 0, 0);
