//! Pre-computed text styles and fonts for the built-in painters.
//!
//! `MonoTextStyle` and `TextStyle` construction is cheap but repetitive;
//! alignment styles and font references are defined once here as `const` and
//! shared by every painter. Styles that need a dynamic color (gauge options
//! carry per-property colors) are created at the call site from the exposed
//! font references: `MonoTextStyle::new(LABEL_FONT, options.text_color)`.

use embedded_graphics::{
    mono_font::{MonoFont, iso_8859_1::{FONT_6X10, FONT_10X20}},
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text. Used for value readouts and cardinal labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the ship gauge's data block.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for range labels on bar skins.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10). Cardinal points, range labels, data blocks.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20). Secondary readouts.
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

/// Large value font (`ProFont` 24pt). Primary value readouts.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium value font (`ProFont` 18pt). Readouts that must fit longer text.
pub const VALUE_FONT_MEDIUM: &MonoFont = &PROFONT_18_POINT;
