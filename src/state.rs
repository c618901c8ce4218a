//! Target/rendered state tracking for animated gauge properties.
//!
//! Each gauge type declares a static table of [`Property`] entries: the
//! property name and whether it eases linearly or as a compass angle. The
//! classification is an explicit declaration, never inferred from the key
//! name.
//!
//! [`AnimatedState`] holds two value arrays parallel to that table:
//! - **target**: the last value explicitly pushed by the caller.
//! - **rendered**: the value actually painted, trailing the target under
//!   easing.
//!
//! Both arrays are seeded to 0.0 at construction, so every declared property
//! is always present in both maps and "absent keys default to 0" holds by
//! construction. [`AnimatedState::advance`] is the only mutator of the
//! rendered values.
//!
//! Pushed values are expected to be finite numbers; a non-finite value is a
//! caller error and propagates through the arithmetic unguarded.

use crate::easing;

/// Upper bound on tracked properties per gauge instance. The largest built-in
/// table (ship) declares five.
pub const MAX_TRACKED: usize = 8;

// =============================================================================
// Property Declaration
// =============================================================================

/// How a property's rendered value is advanced toward its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// Plain exponential smoothing.
    Linear,
    /// Shortest-path smoothing over degrees, normalized into `[0, 360)`.
    Angular,
}

/// One tracked property: its wire name and easing classification.
#[derive(Clone, Copy, Debug)]
pub struct Property {
    pub name: &'static str,
    pub kind: PropertyKind,
}

/// Shorthand for a linear property table entry.
pub const fn linear(name: &'static str) -> Property {
    Property { name, kind: PropertyKind::Linear }
}

/// Shorthand for an angular property table entry.
pub const fn angular(name: &'static str) -> Property {
    Property { name, kind: PropertyKind::Angular }
}

// =============================================================================
// Animated State
// =============================================================================

/// Target and rendered value pair for one gauge instance.
#[derive(Debug)]
pub struct AnimatedState {
    properties: &'static [Property],
    target: [f32; MAX_TRACKED],
    rendered: [f32; MAX_TRACKED],
}

impl AnimatedState {
    /// Create state for a property table, all values seeded to 0.0.
    ///
    /// # Panics
    /// Panics if the table exceeds [`MAX_TRACKED`] entries. Built-in tables
    /// are compile-time constants well under the bound.
    pub fn new(properties: &'static [Property]) -> Self {
        assert!(
            properties.len() <= MAX_TRACKED,
            "property table exceeds MAX_TRACKED ({} > {MAX_TRACKED})",
            properties.len()
        );
        Self { properties, target: [0.0; MAX_TRACKED], rendered: [0.0; MAX_TRACKED] }
    }

    /// The property table this state was built from.
    pub fn properties(&self) -> &'static [Property] {
        self.properties
    }

    /// Index of a property by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Merge one value into the target state.
    ///
    /// Returns `false` (and writes nothing) for names not in the property
    /// table. Properties not mentioned keep their previous targets.
    pub fn merge(&mut self, name: &str, value: f32) -> bool {
        match self.index_of(name) {
            Some(idx) => {
                self.target[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Target value by table index.
    pub fn target(&self, idx: usize) -> f32 {
        self.target[idx]
    }

    /// Target value by name; 0.0 for unknown names.
    pub fn target_of(&self, name: &str) -> f32 {
        self.index_of(name).map_or(0.0, |idx| self.target[idx])
    }

    /// Rendered value by table index.
    pub fn rendered(&self, idx: usize) -> f32 {
        self.rendered[idx]
    }

    /// Advance every rendered value one easing step toward its target.
    ///
    /// This is the sole mutator of the rendered values. Angular properties
    /// take the shortest path and stay normalized in `[0, 360)`.
    pub fn advance(&mut self, alpha: f32) {
        for (idx, property) in self.properties.iter().enumerate() {
            let prev = self.rendered[idx];
            let target = self.target[idx];
            self.rendered[idx] = match property.kind {
                PropertyKind::Linear => easing::step(prev, target, alpha),
                PropertyKind::Angular => easing::step_angular(prev, target, alpha),
            };
        }
    }

    /// Read-only snapshot of the rendered values for paint dispatch.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot { properties: self.properties, values: &self.rendered[..self.properties.len()] }
    }
}

// =============================================================================
// Paint Snapshot
// =============================================================================

/// Rendered state handed to paint callbacks.
///
/// Skins read values by name; unknown names read as 0.0 so a skin shared
/// across gauge types degrades gracefully instead of panicking.
#[derive(Clone, Copy, Debug)]
pub struct StateSnapshot<'a> {
    properties: &'static [Property],
    values: &'a [f32],
}

impl StateSnapshot<'_> {
    /// Rendered value by property name; 0.0 for unknown names.
    pub fn get(&self, name: &str) -> f32 {
        self.properties
            .iter()
            .position(|p| p.name == name)
            .map_or(0.0, |idx| self.values[idx])
    }

    /// Number of tracked properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Property names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|p| p.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
