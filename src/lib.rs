// Crate-level lints: painters do a lot of intentional pixel-math casts
#![allow(clippy::cast_possible_truncation)] // f32 -> i32/u32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32 -> f32 in geometry calculations
#![allow(clippy::cast_sign_loss)] // i32 -> u32 where the sign is known positive

//! Animated instrument gauge widgets for `embedded-graphics` draw targets.
//!
//! Five gauge types - [`Speedometer`], [`Compass`], [`Wind`], [`Ship`], and
//! [`TrendGauge`] - share one animation engine: every gauge keeps a *target*
//! state (the last values the caller pushed) and a *rendered* state (what is
//! actually painted), and each update advances the rendered state one easing
//! step toward the target. Directional properties ease along the shortest
//! arc of the compass circle and stay normalized in `[0, 360)`.
//!
//! # Data flow
//!
//! ```text
//! caller ──set_data──▶ target state
//!                          │ update() / on_frame()
//!                          ▼
//!                    easing step (linear / angular per property)
//!                          │
//!                          ▼
//!                    rendered state ──▶ skin paint fn ──▶ DrawTarget
//! ```
//!
//! Painting is dispatched through a per-type [`SkinRegistry`]: skins are
//! named paint callbacks, switchable at runtime with [`Speedometer::set_skin`]
//! (and the same method on every other type). Unknown skin names silently
//! fall back to the gauge's built-in painter.
//!
//! The trend gauge adds a front-end: raw samples go into a FIFO
//! [`TrendBuffer`], and an ordinary least-squares fit of the buffer drives
//! the `trend` / `trendStrength` / `upTrendIntensity` / `downTrendIntensity`
//! properties through the same pipeline.
//!
//! # Render loop
//!
//! The library never spins a thread or timer. In auto-render mode
//! (`GaugeOptions::auto_render`) a gauge keeps exactly one frame callback
//! scheduled; the host calls `on_frame()` at its own frame boundary (vsync,
//! timer tick, simulator loop) and the gauge runs one update-and-paint cycle
//! and reschedules. `destroy()` cancels any pending frame and hands the
//! drawing surface back.
//!
//! # Example
//!
//! ```
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Rgb565;
//! use instrument_gauges::Speedometer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut display: MockDisplay<Rgb565> = MockDisplay::new();
//! display.set_allow_overdraw(true);
//! display.set_allow_out_of_bounds_drawing(true);
//!
//! let mut gauge = Speedometer::new(display)?;
//! gauge.set_value(72.5)?;
//! gauge.update()?; // one easing step + paint
//!
//! let display = gauge.destroy(); // detach the surface
//! # let _ = display;
//! # Ok(())
//! # }
//! ```

pub mod colors;
pub mod config;
mod core;
pub mod easing;
mod frame;
pub mod gauges;
pub mod registry;
mod skins;
pub mod state;
pub mod styles;
pub mod trend;
pub mod widgets;

pub use crate::core::{GaugeError, GaugeMetadata};
pub use config::{DEFAULT_EASING_FACTOR, DEFAULT_SKIN, GaugeOptions, TrendThresholds};
pub use frame::LoopState;
pub use gauges::{Compass, Ship, ShipData, Speedometer, TrendGauge, Wind, WindData};
pub use registry::{GaugeKind, PaintFn, SkinRegistry};
pub use state::{Property, PropertyKind, StateSnapshot};
pub use trend::{TrendBuffer, TrendFit, classify_strength};
