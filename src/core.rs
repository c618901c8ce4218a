//! The shared gauge engine: state updates, paint dispatch, lifecycle.
//!
//! Every gauge type is a thin wrapper around [`GaugeCore`]. At construction
//! the type hands the engine a [`GaugeCapabilities`] capability record — its kind
//! tag, built-in default painter, property table, and description — and the
//! engine does the rest: merging data pushes into target state, easing the
//! rendered state forward, resolving the active skin, and driving the
//! per-frame loop. There is no inheritance; the record selects everything
//! type-specific.
//!
//! # Update pipeline
//!
//! ```text
//! set_data ──merge──▶ target state
//!                        │ update() / on_frame()
//!                        ▼
//!                  easing step (per-property linear/angular)
//!                        │
//!                        ▼
//!                  rendered state ──snapshot──▶ resolved paint fn ──▶ surface
//! ```
//!
//! `set_data` calls are applied in call order; a paint always observes the
//! most recently merged target state. With `auto_render` enabled, `set_data`
//! synchronously runs one update-and-paint cycle and the render loop keeps
//! one frame callback scheduled; in manual mode the caller drives
//! [`GaugeCore::update`] itself.
//!
//! # Lifecycle
//!
//! Construction fails only when the drawing surface has no drawable area.
//! [`GaugeCore::destroy`] stops the render loop (cancelling any pending
//! frame synchronously) and hands the surface back to the caller; the gauge
//! value is consumed, so use-after-destroy cannot be expressed.

use std::rc::Rc;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Dimensions;
use thiserror::Error;
use tracing::debug;

use crate::config::{DEFAULT_SKIN, GaugeOptions};
use crate::frame::{LoopState, RenderLoop};
use crate::registry::{GaugeKind, PaintFn, SkinRegistry};
use crate::state::{AnimatedState, Property};

// =============================================================================
// Errors
// =============================================================================

/// Fatal construction failures. Everything after construction either
/// recovers locally (skin fallback, capacity clamping) or is a documented
/// caller error.
#[derive(Debug, Error)]
pub enum GaugeError {
    /// The supplied drawing surface has a zero-area bounding box, so nothing
    /// could ever be painted.
    #[error("drawing surface has no drawable area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
}

// =============================================================================
// Capability Record
// =============================================================================

/// Per-type capabilities handed to the engine at construction: the tagged
/// variant replacing subclass overrides.
pub(crate) struct GaugeCapabilities<D: DrawTarget<Color = Rgb565>> {
    pub kind: GaugeKind,
    pub default_paint: PaintFn<D>,
    pub properties: &'static [Property],
    pub description: &'static str,
}

// =============================================================================
// Metadata
// =============================================================================

/// Introspection data returned by `metadata()`.
#[derive(Debug, Clone)]
pub struct GaugeMetadata {
    /// Stable gauge type tag (e.g. `"speedometer"`).
    pub kind: &'static str,
    /// Registered skin names for this type (order not meaningful).
    pub skins: Vec<String>,
    /// Animated property names in table order.
    pub properties: Vec<&'static str>,
    /// Currently active registered skin, or `None` when the built-in default
    /// painter is active.
    pub active_skin: Option<String>,
    /// Human-readable description of the gauge type.
    pub description: &'static str,
}

// =============================================================================
// Gauge Core
// =============================================================================

/// The generic engine owning one gauge instance's surface and state.
pub struct GaugeCore<D: DrawTarget<Color = Rgb565>> {
    surface: D,
    options: GaugeOptions,
    kind: GaugeKind,
    default_paint: PaintFn<D>,
    description: &'static str,
    state: AnimatedState,
    paint: PaintFn<D>,
    active_skin: Option<String>,
    registry: Rc<SkinRegistry<D>>,
    looper: RenderLoop,
    frames_painted: u64,
}

impl<D: DrawTarget<Color = Rgb565>> GaugeCore<D> {
    pub(crate) fn new(
        surface: D,
        options: GaugeOptions,
        caps: GaugeCapabilities<D>,
        registry: Rc<SkinRegistry<D>>,
    ) -> Result<Self, GaugeError> {
        let size = surface.bounding_box().size;
        if size.width == 0 || size.height == 0 {
            return Err(GaugeError::EmptySurface { width: size.width, height: size.height });
        }

        let (paint, active_skin) = Self::resolve_skin(&registry, caps.kind, caps.default_paint, &options.skin);

        let mut looper = RenderLoop::new();
        if options.auto_render {
            looper.request();
        }

        debug!(kind = caps.kind.tag(), skin = %options.skin, "gauge constructed");

        Ok(Self {
            surface,
            options,
            kind: caps.kind,
            default_paint: caps.default_paint,
            description: caps.description,
            state: AnimatedState::new(caps.properties),
            paint,
            active_skin,
            registry,
            looper,
            frames_painted: 0,
        })
    }

    fn resolve_skin(
        registry: &SkinRegistry<D>,
        kind: GaugeKind,
        default_paint: PaintFn<D>,
        name: &str,
    ) -> (PaintFn<D>, Option<String>) {
        match registry.resolve(kind, name) {
            Some(paint) => (paint, Some(name.to_owned())),
            None => {
                if name != DEFAULT_SKIN {
                    debug!(kind = kind.tag(), skin = name, "skin not registered, using default painter");
                }
                (default_paint, None)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Data & Update Pipeline
    // -------------------------------------------------------------------------

    /// Merge property values into the target state, in call order.
    ///
    /// Names not in this gauge's property table are ignored. Values must be
    /// finite numbers; non-finite values propagate through the easing
    /// arithmetic unguarded. With `auto_render` enabled this synchronously
    /// runs one update-and-paint cycle.
    pub fn set_data(&mut self, entries: &[(&str, f32)]) -> Result<(), D::Error> {
        for &(name, value) in entries {
            if !self.state.merge(name, value) {
                debug!(kind = self.kind.tag(), property = name, "ignoring unknown property");
            }
        }
        if self.options.auto_render {
            self.update()?;
        }
        Ok(())
    }

    /// Advance every rendered value one easing step, then paint.
    pub fn update(&mut self) -> Result<(), D::Error> {
        self.state.advance(self.options.easing_factor);
        self.paint_now()
    }

    fn paint_now(&mut self) -> Result<(), D::Error> {
        let bounds = self.surface.bounding_box();
        let snapshot = self.state.snapshot();
        (self.paint)(&mut self.surface, &self.options, &snapshot, bounds)?;
        self.frames_painted += 1;
        Ok(())
    }

    /// Run the frame-boundary callback.
    ///
    /// The host calls this once per frame on every gauge it drives. If a
    /// frame is pending it performs one update cycle and (in auto-render
    /// mode) reschedules; otherwise it does nothing, so manual-mode and
    /// stopped gauges are unaffected.
    pub fn on_frame(&mut self) -> Result<(), D::Error> {
        if self.looper.take_fire() {
            self.update()?;
            if self.options.auto_render {
                self.looper.request();
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Apply a change to the options (merge-on-write). Takes effect on the
    /// next paint; the active skin is not re-resolved here, use
    /// [`GaugeCore::set_skin`] for that.
    pub fn set_options(&mut self, apply: impl FnOnce(&mut GaugeOptions)) {
        apply(&mut self.options);
    }

    /// Switch the active paint callback. Unregistered names silently fall
    /// back to this gauge type's built-in default painter.
    pub fn set_skin(&mut self, name: &str) {
        self.options.skin = name.to_owned();
        let (paint, active_skin) = Self::resolve_skin(&self.registry, self.kind, self.default_paint, name);
        self.paint = paint;
        self.active_skin = active_skin;
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &GaugeOptions {
        &self.options
    }

    /// Gauge type tag, registered skins, animated properties, description.
    pub fn metadata(&self) -> GaugeMetadata {
        GaugeMetadata {
            kind: self.kind.tag(),
            skins: self.registry.skin_names(self.kind).into_iter().map(str::to_owned).collect(),
            properties: self.state.properties().iter().map(|p| p.name).collect(),
            active_skin: self.active_skin.clone(),
            description: self.description,
        }
    }

    /// Rendered (painted) value of a property; 0.0 for unknown names.
    pub fn rendered(&self, name: &str) -> f32 {
        self.state.snapshot().get(name)
    }

    /// Target value of a property; 0.0 for unknown names.
    pub fn target(&self, name: &str) -> f32 {
        self.state.target_of(name)
    }

    /// Number of completed paint calls over this gauge's lifetime.
    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    /// Current render-loop scheduling state.
    pub fn loop_state(&self) -> LoopState {
        self.looper.state()
    }

    /// Borrow the drawing surface (e.g. to present it to a window).
    pub fn surface(&self) -> &D {
        &self.surface
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Stop the render loop (cancelling any pending frame) and detach the
    /// drawing surface. Consumes the gauge; nothing can paint afterwards.
    pub fn destroy(mut self) -> D {
        self.looper.stop();
        debug!(kind = self.kind.tag(), frames = self.frames_painted, "gauge destroyed");
        self.surface
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::linear;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::Rectangle;

    type Display = MockDisplay<Rgb565>;

    const TEST_PROPS: &[Property] = &[linear("value")];

    fn noop_paint(
        _: &mut Display,
        _: &GaugeOptions,
        _: &crate::state::StateSnapshot<'_>,
        _: Rectangle,
    ) -> Result<(), std::convert::Infallible> {
        Ok(())
    }

    fn caps() -> GaugeCapabilities<Display> {
        GaugeCapabilities {
            kind: GaugeKind::Speedometer,
            default_paint: noop_paint,
            properties: TEST_PROPS,
            description: "test gauge",
        }
    }

    fn core(options: GaugeOptions) -> GaugeCore<Display> {
        GaugeCore::new(Display::new(), options, caps(), Rc::new(SkinRegistry::new()))
            .expect("mock display is non-empty")
    }

    #[test]
    fn test_set_data_merges_in_call_order() {
        let mut gauge = core(GaugeOptions::default());
        gauge.set_data(&[("value", 10.0)]).unwrap();
        gauge.set_data(&[("value", 20.0)]).unwrap();
        assert_eq!(gauge.target("value"), 20.0, "Later set_data wins");
    }

    #[test]
    fn test_manual_mode_does_not_paint_on_set_data() {
        let mut gauge = core(GaugeOptions::default());
        gauge.set_data(&[("value", 10.0)]).unwrap();
        assert_eq!(gauge.frames_painted(), 0, "Manual mode paints only on update()");
        gauge.update().unwrap();
        assert_eq!(gauge.frames_painted(), 1);
    }

    #[test]
    fn test_auto_render_paints_synchronously() {
        let options = GaugeOptions { auto_render: true, ..GaugeOptions::default() };
        let mut gauge = core(options);
        gauge.set_data(&[("value", 10.0)]).unwrap();
        assert_eq!(gauge.frames_painted(), 1, "Auto-render runs one cycle per set_data");
        assert!((gauge.rendered("value") - 1.0).abs() < 1e-6, "One 0.1 easing step toward 10");
    }

    #[test]
    fn test_on_frame_fires_once_per_schedule() {
        let options = GaugeOptions { auto_render: true, ..GaugeOptions::default() };
        let mut gauge = core(options);
        assert_eq!(gauge.loop_state(), LoopState::Scheduled, "Auto-render schedules at construction");
        gauge.on_frame().unwrap();
        assert_eq!(gauge.frames_painted(), 1);
        assert_eq!(gauge.loop_state(), LoopState::Scheduled, "Auto-render reschedules after firing");
    }

    #[test]
    fn test_on_frame_noop_in_manual_mode() {
        let mut gauge = core(GaugeOptions::default());
        gauge.on_frame().unwrap();
        assert_eq!(gauge.frames_painted(), 0, "Nothing is ever scheduled in manual mode");
        assert_eq!(gauge.loop_state(), LoopState::Idle);
    }

    #[test]
    fn test_update_converges_without_clamping() {
        let mut gauge = core(GaugeOptions::default());
        // 150 exceeds the default max of 100; the engine must not clamp.
        gauge.set_data(&[("value", 150.0)]).unwrap();
        for _ in 0..400 {
            gauge.update().unwrap();
        }
        assert!(
            (gauge.rendered("value") - 150.0).abs() < 0.01,
            "Rendered value approaches 150 even though max is 100, got {}",
            gauge.rendered("value")
        );
    }

    #[test]
    fn test_set_skin_unknown_falls_back_to_default() {
        let mut gauge = core(GaugeOptions::default());
        gauge.set_skin("does-not-exist");
        let meta = gauge.metadata();
        assert_eq!(meta.active_skin, None, "Unknown skin silently falls back to default");
        assert_eq!(gauge.options().skin, "does-not-exist");
        gauge.update().unwrap();
        assert_eq!(gauge.frames_painted(), 1, "Fallback painter still paints");
    }

    #[test]
    fn test_set_skin_resolves_registered() {
        let mut registry: SkinRegistry<Display> = SkinRegistry::new();
        registry.register(GaugeKind::Speedometer, "plain", noop_paint);
        let mut gauge =
            GaugeCore::new(Display::new(), GaugeOptions::default(), caps(), Rc::new(registry))
                .unwrap();
        gauge.set_skin("plain");
        assert_eq!(gauge.metadata().active_skin.as_deref(), Some("plain"));
    }

    #[test]
    fn test_metadata_contents() {
        let gauge = core(GaugeOptions::default());
        let meta = gauge.metadata();
        assert_eq!(meta.kind, "speedometer");
        assert_eq!(meta.properties, vec!["value"]);
        assert_eq!(meta.description, "test gauge");
        assert!(meta.skins.is_empty(), "Isolated registry lists no skins");
    }

    #[test]
    fn test_set_options_takes_effect() {
        let mut gauge = core(GaugeOptions::default());
        gauge.set_options(|o| o.easing_factor = 1.0);
        gauge.set_data(&[("value", 50.0)]).unwrap();
        gauge.update().unwrap();
        assert_eq!(gauge.rendered("value"), 50.0, "Snap factor applies on the next update");
    }

    #[test]
    fn test_destroy_stops_loop_and_returns_surface() {
        let options = GaugeOptions { auto_render: true, ..GaugeOptions::default() };
        let gauge = core(options);
        assert_eq!(gauge.loop_state(), LoopState::Scheduled);
        let _surface: Display = gauge.destroy();
        // The gauge is consumed here; the pending frame was cancelled by
        // RenderLoop::stop, covered by the frame module's state machine tests.
    }
}
