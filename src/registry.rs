//! Per-gauge-type skin registry.
//!
//! A skin is a named paint callback for one gauge type. The registry maps
//! `(gauge kind, skin name)` to a [`PaintFn`]; each kind has its own
//! namespace, so a wind skin can never shadow a ship skin.
//!
//! # Lifecycle
//!
//! The registry is an explicit owned object, not ambient global state, so
//! tests can construct isolated registries. The expected lifecycle is:
//! build one ([`SkinRegistry::with_builtins`]), [`register`] any custom
//! skins, wrap it in `Rc`, and hand it to every gauge at construction. All
//! mutation happens before sharing; afterwards the registry is read-only,
//! which is why no synchronization is needed in the single-threaded
//! cooperative model.
//!
//! # Fallback
//!
//! Resolving a name that was never registered for a kind is not an error:
//! [`SkinRegistry::resolve`] returns `None` and the gauge falls back to its
//! built-in default painter. The reserved name `"default"` is deliberately
//! never registered; it always resolves through the fallback path.
//!
//! [`register`]: SkinRegistry::register

use std::collections::HashMap;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;

use crate::config::GaugeOptions;
use crate::skins;
use crate::state::StateSnapshot;

// =============================================================================
// Gauge Kind
// =============================================================================

/// Tag identifying each gauge type. Selects the skin namespace and the
/// capability record dispatched at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GaugeKind {
    Speedometer,
    Compass,
    Wind,
    Ship,
    Trend,
}

impl GaugeKind {
    /// Number of gauge kinds.
    pub const COUNT: usize = 5;

    /// All kinds, in declaration order.
    pub const ALL: [Self; Self::COUNT] =
        [Self::Speedometer, Self::Compass, Self::Wind, Self::Ship, Self::Trend];

    /// Stable string tag for metadata and diagnostics.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Speedometer => "speedometer",
            Self::Compass => "compass",
            Self::Wind => "wind",
            Self::Ship => "ship",
            Self::Trend => "trend",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Speedometer => 0,
            Self::Compass => 1,
            Self::Wind => 2,
            Self::Ship => 3,
            Self::Trend => 4,
        }
    }
}

// =============================================================================
// Paint Callback Contract
// =============================================================================

/// A skin paint callback.
///
/// Receives the drawing surface, the fully-resolved options, a read-only
/// rendered-state snapshot, and the surface's layout bounds. A callback must
/// not mutate anything but the surface itself; it repaints the full gauge
/// from the snapshot every call.
pub type PaintFn<D> = fn(
    &mut D,
    &GaugeOptions,
    &StateSnapshot<'_>,
    Rectangle,
) -> Result<(), <D as DrawTarget>::Error>;

// =============================================================================
// Skin Registry
// =============================================================================

/// Named paint callbacks, namespaced per gauge kind.
pub struct SkinRegistry<D: DrawTarget<Color = Rgb565>> {
    skins: [HashMap<String, PaintFn<D>>; GaugeKind::COUNT],
}

impl<D: DrawTarget<Color = Rgb565>> SkinRegistry<D> {
    /// An empty registry. Useful for tests that need full isolation.
    pub fn new() -> Self {
        Self { skins: std::array::from_fn(|_| HashMap::new()) }
    }

    /// A registry pre-populated with every built-in skin.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        skins::register_builtins(&mut registry);
        registry
    }

    /// Insert or overwrite a skin. Last registration for a name wins;
    /// re-registering the same pair is idempotent.
    pub fn register(&mut self, kind: GaugeKind, name: impl Into<String>, paint: PaintFn<D>) {
        self.skins[kind.index()].insert(name.into(), paint);
    }

    /// Look up a skin. `None` means the caller should fall back to the gauge
    /// type's built-in default painter; an unknown name is not an error.
    pub fn resolve(&self, kind: GaugeKind, name: &str) -> Option<PaintFn<D>> {
        self.skins[kind.index()].get(name).copied()
    }

    /// Registered skin names for a kind, for introspection and tooling.
    /// Order is not meaningful.
    pub fn skin_names(&self, kind: GaugeKind) -> Vec<&str> {
        self.skins[kind.index()].keys().map(String::as_str).collect()
    }
}

impl<D: DrawTarget<Color = Rgb565>> Default for SkinRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
