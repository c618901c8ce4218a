//! Stack-allocated text formatting for painters.
//!
//! Paint code runs every frame; values are formatted into fixed-size
//! `heapless::String` buffers instead of heap `format!` calls. Formatting is
//! best-effort: text that would overflow the buffer is truncated rather than
//! failing the paint.

use core::fmt::Write;

/// Fixed-size buffer for one line of gauge text.
pub type Label = heapless::String<32>;

/// Format a value readout: the number at the given precision with the unit
/// appended, e.g. `"42.50%"` or `"12 knots"`.
pub fn format_value(value: f32, decimals: usize, unit: &str) -> Label {
    let mut label = Label::new();
    if unit.is_empty() {
        write!(label, "{value:.decimals$}").ok();
    } else if unit.chars().next().is_some_and(char::is_alphabetic) {
        // Word units read better with a separating space
        write!(label, "{value:.decimals$} {unit}").ok();
    } else {
        write!(label, "{value:.decimals$}{unit}").ok();
    }
    label
}

/// Format a compass bearing, e.g. `"271°"`.
pub fn format_bearing(degrees: f32) -> Label {
    let mut label = Label::new();
    write!(label, "{degrees:.0}\u{b0}").ok();
    label
}

// =============================================================================
// Unit Tests
// =============================================================================
