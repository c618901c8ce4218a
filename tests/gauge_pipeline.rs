//! End-to-end tests of the gauge pipeline against an in-memory simulator
//! display: data pushes, easing convergence, skin dispatch, render-loop
//! lifecycle, and the trend front-end.

use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::SimulatorDisplay;
use instrument_gauges::{
    Compass, GaugeKind, GaugeOptions, LoopState, Ship, ShipData, SkinRegistry, Speedometer,
    StateSnapshot, TrendGauge,
};

type Display = SimulatorDisplay<Rgb565>;

fn display() -> Display {
    SimulatorDisplay::new(Size::new(320, 240))
}

// =============================================================================
// Convergence & Clamping
// =============================================================================

#[test]
fn speedometer_converges_past_configured_max() {
    // The engine must not clamp: pushing 150 into a 0..100 gauge converges
    // to a rendered 150. Display clamping is a skin concern.
    let mut gauge = Speedometer::new(display()).unwrap();
    gauge.set_value(150.0).unwrap();

    let mut prev_dist = 150.0f32;
    for _ in 0..500 {
        gauge.update().unwrap();
        let dist = (150.0 - gauge.rendered("value")).abs();
        assert!(dist <= prev_dist, "update() must never move away from the target");
        prev_dist = dist;
    }
    assert!(
        (gauge.rendered("value") - 150.0).abs() < 0.01,
        "Rendered value must approach 150 despite max=100, got {}",
        gauge.rendered("value")
    );
}

#[test]
fn update_observes_latest_target() {
    let mut gauge = Speedometer::new(display()).unwrap();
    gauge.set_value(10.0).unwrap();
    gauge.set_value(90.0).unwrap();
    gauge.update().unwrap();
    assert!(
        (gauge.rendered("value") - 9.0).abs() < 1e-4,
        "First easing step must aim at the most recently merged target (90)"
    );
}

#[test]
fn easing_factor_one_snaps_immediately() {
    let options =
        GaugeOptions { easing_factor: 1.0, ..Speedometer::<Display>::default_options() };
    let mut gauge = Speedometer::with_options(display(), options).unwrap();
    gauge.set_value(42.0).unwrap();
    gauge.update().unwrap();
    assert_eq!(gauge.rendered("value"), 42.0);
}

// =============================================================================
// Angular Behavior
// =============================================================================

#[test]
fn compass_heading_takes_shortest_path_through_north() {
    let mut gauge = Compass::new(display()).unwrap();
    gauge.set_options(|o| o.easing_factor = 1.0);
    gauge.set_heading(350.0).unwrap();
    gauge.update().unwrap();

    gauge.set_options(|o| o.easing_factor = 0.25);
    gauge.set_heading(10.0).unwrap();

    // The animation must pass through 0, never regress through 180.
    let mut crossed_north = false;
    for _ in 0..100 {
        gauge.update().unwrap();
        let h = gauge.rendered("heading");
        assert!((0.0..360.0).contains(&h), "Heading must stay normalized, got {h}");
        assert!(
            !(90.0..270.0).contains(&h),
            "Heading must never travel the long way around, got {h}"
        );
        if h < 90.0 {
            crossed_north = true;
        }
    }
    assert!(crossed_north, "Heading should have wrapped forward through north");
    assert!((gauge.rendered("heading") - 10.0).abs() < 0.1, "Heading converges to 10");
}

#[test]
fn ship_mixes_angular_and_linear_easing() {
    let mut gauge = Ship::new(display()).unwrap();
    gauge
        .set_navigation(ShipData {
            heading: Some(350.0),
            sog: Some(20.0),
            ..ShipData::default()
        })
        .unwrap();
    gauge.update().unwrap();
    // heading: short path from 0 is backward through north to 359
    assert!((gauge.rendered("heading") - 359.0).abs() < 1e-3);
    // sog: plain linear step
    assert!((gauge.rendered("sog") - 2.0).abs() < 1e-4);
}

// =============================================================================
// Skin Dispatch
// =============================================================================

#[test]
fn unknown_skin_falls_back_to_default_painter() {
    let mut gauge = Speedometer::new(display()).unwrap();
    gauge.set_skin("definitely-not-registered");
    assert_eq!(gauge.metadata().active_skin, None, "Fallback is silent, not an error");
    gauge.set_value(50.0).unwrap();
    gauge.update().unwrap();
    assert_eq!(gauge.frames_painted(), 1, "The default painter still paints");
}

#[test]
fn skins_do_not_leak_across_gauge_types() {
    // "minimal" is registered for the ship gauge only; a speedometer asking
    // for it must fall back to its own default, not borrow the ship skin.
    let mut gauge = Speedometer::new(display()).unwrap();
    gauge.set_skin("minimal");
    assert_eq!(gauge.metadata().active_skin, None);

    let mut ship = Ship::new(display()).unwrap();
    ship.set_skin("minimal");
    assert_eq!(ship.metadata().active_skin.as_deref(), Some("minimal"));
}

#[test]
fn registered_skin_resolves_and_paints() {
    let mut gauge = Speedometer::new(display()).unwrap();
    gauge.set_skin("bar");
    assert_eq!(gauge.metadata().active_skin.as_deref(), Some("bar"));
    gauge.set_value(60.0).unwrap();
    gauge.update().unwrap();
    assert_eq!(gauge.frames_painted(), 1);

    gauge.set_skin("number");
    gauge.update().unwrap();
    assert_eq!(gauge.frames_painted(), 2, "Skin switches take effect on the next paint");
}

fn blank_paint(
    target: &mut Display,
    options: &GaugeOptions,
    _state: &StateSnapshot<'_>,
    _bounds: Rectangle,
) -> Result<(), std::convert::Infallible> {
    target.clear(options.background_color)
}

#[test]
fn custom_skin_shared_through_one_registry() {
    let mut registry = SkinRegistry::with_builtins();
    registry.register(GaugeKind::Speedometer, "blank", blank_paint);
    let registry = Rc::new(registry);

    let mut a = Speedometer::with_registry(
        display(),
        Speedometer::<Display>::default_options(),
        Rc::clone(&registry),
    )
    .unwrap();
    let mut b = Speedometer::with_registry(
        display(),
        Speedometer::<Display>::default_options(),
        Rc::clone(&registry),
    )
    .unwrap();

    a.set_skin("blank");
    b.set_skin("blank");
    assert_eq!(a.metadata().active_skin.as_deref(), Some("blank"));
    assert_eq!(b.metadata().active_skin.as_deref(), Some("blank"));
    assert!(a.metadata().skins.iter().any(|s| s == "blank"));
}

// =============================================================================
// Render Loop Lifecycle
// =============================================================================

#[test]
fn auto_render_paints_on_push_and_frame() {
    let options =
        GaugeOptions { auto_render: true, ..Speedometer::<Display>::default_options() };
    let mut gauge = Speedometer::with_options(display(), options).unwrap();
    assert_eq!(gauge.loop_state(), LoopState::Scheduled);

    gauge.set_value(80.0).unwrap();
    assert_eq!(gauge.frames_painted(), 1, "Auto-render paints synchronously on set_data");

    gauge.on_frame().unwrap();
    assert_eq!(gauge.frames_painted(), 2, "A frame boundary fires one update cycle");
    assert_eq!(gauge.loop_state(), LoopState::Scheduled, "The loop reschedules itself");
}

#[test]
fn manual_mode_never_schedules() {
    let mut gauge = Speedometer::new(display()).unwrap();
    assert_eq!(gauge.loop_state(), LoopState::Idle);
    gauge.set_value(80.0).unwrap();
    gauge.on_frame().unwrap();
    assert_eq!(gauge.frames_painted(), 0, "Manual mode paints only on explicit update()");
}

#[test]
fn destroy_detaches_surface_and_stops_painting() {
    let options =
        GaugeOptions { auto_render: true, ..Speedometer::<Display>::default_options() };
    let mut gauge = Speedometer::with_options(display(), options).unwrap();
    gauge.set_value(10.0).unwrap();
    let painted = gauge.frames_painted();
    assert!(painted > 0);

    // destroy() cancels the pending frame and returns the surface; the gauge
    // is consumed, so nothing can paint to the display afterwards.
    let surface: Display = gauge.destroy();
    assert_eq!(surface.bounding_box().size, Size::new(320, 240));
}

// =============================================================================
// Trend Front-End
// =============================================================================

#[test]
fn trend_stream_drives_derived_state() {
    let mut gauge = TrendGauge::new(display()).unwrap();
    for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
        gauge.push_sample(v).unwrap();
    }
    assert!((gauge.target("trend") - 1.0).abs() < 1e-5, "Perfect line has slope 1");
    assert_eq!(gauge.target("trendStrength"), 1.0);
    assert_eq!(gauge.target("upTrendIntensity"), 1.0);
    assert_eq!(gauge.target("downTrendIntensity"), 0.0);

    // The derived targets animate like any other property.
    gauge.update().unwrap();
    let rendered = gauge.rendered("trendStrength");
    assert!(rendered > 0.0 && rendered < 1.0, "Strength eases toward target, got {rendered}");
}

#[test]
fn trend_buffer_fifo_through_gauge() {
    let options = GaugeOptions { buffer_size: 4, ..TrendGauge::<Display>::default_options() };
    let mut gauge = TrendGauge::with_options(display(), options).unwrap();
    for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
        gauge.push_sample(v).unwrap();
    }
    assert_eq!(gauge.buffer(), vec![3.0, 4.0, 5.0, 6.0], "Last 4 samples in original order");
}

#[test]
fn trend_skins_render_intensities() {
    let mut gauge = TrendGauge::new(display()).unwrap();
    gauge.set_skin("arrow-indicator");
    gauge.push_samples(&[5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
    gauge.update().unwrap();
    assert_eq!(gauge.frames_painted(), 1);

    gauge.set_skin("bar-indicator");
    gauge.update().unwrap();
    assert_eq!(gauge.frames_painted(), 2);
}

// =============================================================================
// Metadata & Errors
// =============================================================================

#[test]
fn metadata_describes_each_type() {
    let speedometer = Speedometer::new(display()).unwrap();
    let meta = speedometer.metadata();
    assert_eq!(meta.kind, "speedometer");
    assert_eq!(meta.properties, vec!["value"]);
    assert!(!meta.description.is_empty());
    let mut skins = meta.skins.clone();
    skins.sort_unstable();
    assert_eq!(skins, vec!["bar", "number"]);

    let ship = Ship::new(display()).unwrap();
    assert_eq!(
        ship.metadata().properties,
        vec!["heading", "cog", "sog", "windDirection", "windSpeed"]
    );
}

#[test]
fn empty_surface_fails_construction() {
    let empty: Display = SimulatorDisplay::new(Size::new(0, 0));
    let result = Speedometer::new(empty);
    assert!(result.is_err(), "A zero-area surface must fail construction synchronously");
}
