//! The gauge types.
//!
//! Each type is a thin wrapper over the crate's generic gauge engine: a static
//! property table (with explicit linear/angular classification), typed
//! setters for its properties, per-type option defaults, and a built-in
//! default painter. The uniform operations (`set_data`, `update`,
//! `on_frame`, `set_options`, `set_skin`, `metadata`, `destroy`, ...) are
//! generated by `delegate_gauge_api` so all five types expose the exact
//! same engine surface.

pub mod compass;
pub mod ship;
pub mod speedometer;
pub mod trend;
pub mod wind;

pub use compass::Compass;
pub use ship::{Ship, ShipData};
pub use speedometer::Speedometer;
pub use trend::TrendGauge;
pub use wind::{Wind, WindData};

/// Generate the engine pass-through API for a gauge wrapper with a `core`
/// field.
macro_rules! delegate_gauge_api {
    ($gauge:ident) => {
        impl<D: embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>
            $gauge<D>
        {
            /// Merge raw property values into the target state by name.
            /// Unknown names are ignored; see the type docs for the property
            /// table. With `auto_render` on, runs one update-and-paint cycle.
            pub fn set_data(&mut self, entries: &[(&str, f32)]) -> Result<(), D::Error> {
                self.core.set_data(entries)
            }

            /// Force one easing + paint cycle.
            pub fn update(&mut self) -> Result<(), D::Error> {
                self.core.update()
            }

            /// Frame-boundary callback; fires at most one pending frame and
            /// reschedules in auto-render mode.
            pub fn on_frame(&mut self) -> Result<(), D::Error> {
                self.core.on_frame()
            }

            /// Apply a configuration change; takes effect on the next paint.
            pub fn set_options(&mut self, apply: impl FnOnce(&mut $crate::config::GaugeOptions)) {
                self.core.set_options(apply);
            }

            /// Switch the active skin; unregistered names silently fall back
            /// to this type's built-in painter.
            pub fn set_skin(&mut self, name: &str) {
                self.core.set_skin(name);
            }

            /// Gauge type tag, registered skins, animated property names,
            /// active skin, and description.
            pub fn metadata(&self) -> $crate::core::GaugeMetadata {
                self.core.metadata()
            }

            /// Current configuration.
            pub fn options(&self) -> &$crate::config::GaugeOptions {
                self.core.options()
            }

            /// Rendered (painted) value of a property; 0.0 for unknown names.
            pub fn rendered(&self, name: &str) -> f32 {
                self.core.rendered(name)
            }

            /// Target value of a property; 0.0 for unknown names.
            pub fn target(&self, name: &str) -> f32 {
                self.core.target(name)
            }

            /// Completed paint calls over this gauge's lifetime.
            pub fn frames_painted(&self) -> u64 {
                self.core.frames_painted()
            }

            /// Render-loop scheduling state.
            pub fn loop_state(&self) -> $crate::frame::LoopState {
                self.core.loop_state()
            }

            /// Borrow the drawing surface (e.g. to present it to a window).
            pub fn surface(&self) -> &D {
                self.core.surface()
            }

            /// Stop the render loop, cancelling any pending frame, and
            /// detach the drawing surface. Consumes the gauge.
            pub fn destroy(self) -> D {
                self.core.destroy()
            }
        }
    };
}

pub(crate) use delegate_gauge_api;
