//! Trend estimation from a stream of scalar samples.
//!
//! [`TrendBuffer`] keeps the last N samples (FIFO) and fits an ordinary
//! least-squares line of sample value against index position on every
//! insertion. The fit yields:
//! - **slope**: signed rate of change per sample.
//! - **strength**: coefficient of determination (R²) in `[0, 1]`, how well
//!   the buffer matches a straight line.
//!
//! [`classify_strength`] then maps the slope magnitude through configured
//! thresholds to one of five discrete levels `{0, 0.25, 0.5, 0.75, 1}`,
//! which the trend gauge splits into up/down intensities for display.
//!
//! # Degenerate inputs
//!
//! Both fit quantities are defined (as 0) rather than NaN when their
//! denominators vanish: fewer than two samples, or a buffer of identical
//! values (zero total variation). Capacities below 2 are clamped to 2 with a
//! warning, never an error.

use std::collections::VecDeque;

use tracing::warn;

use crate::config::TrendThresholds;

/// Smallest usable buffer capacity; a regression needs two points.
pub const MIN_CAPACITY: usize = 2;

// =============================================================================
// Regression Fit
// =============================================================================

/// Result of fitting the buffer: slope and R² strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendFit {
    /// Signed rate of change per sample index.
    pub slope: f32,
    /// Coefficient of determination in `[0, 1]`; 0 when undefined.
    pub strength: f32,
}

impl TrendFit {
    const FLAT: Self = Self { slope: 0.0, strength: 0.0 };
}

// =============================================================================
// Trend Buffer
// =============================================================================

/// Fixed-capacity FIFO sample history with online regression.
#[derive(Debug)]
pub struct TrendBuffer {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl TrendBuffer {
    /// Create a buffer holding at most `capacity` samples.
    ///
    /// Capacities below [`MIN_CAPACITY`] are clamped with a warning.
    pub fn new(capacity: usize) -> Self {
        let capacity = Self::clamped_capacity(capacity);
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    fn clamped_capacity(capacity: usize) -> usize {
        if capacity < MIN_CAPACITY {
            warn!(requested = capacity, "trend buffer capacity below {MIN_CAPACITY}, clamping");
            MIN_CAPACITY
        } else {
            capacity
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in insertion order, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Append one sample, evicting the oldest once capacity is exceeded.
    pub fn push(&mut self, value: f32) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Replace the buffer wholesale with (at most) the last `capacity`
    /// entries of `values`, preserving their relative order.
    pub fn replace(&mut self, values: &[f32]) {
        self.samples.clear();
        let keep = values.len().saturating_sub(self.capacity);
        self.samples.extend(values[keep..].iter().copied());
    }

    /// Change the capacity, clamping below [`MIN_CAPACITY`] and trimming the
    /// oldest samples if the buffer is now over-full.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = Self::clamped_capacity(capacity);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Ordinary least-squares fit of sample value against index (x = 0..n-1).
    ///
    /// Returns the flat fit (slope 0, strength 0) when fewer than two
    /// samples are buffered or when all samples are identical.
    pub fn fit(&self) -> TrendFit {
        let n = self.samples.len();
        if n < MIN_CAPACITY {
            return TrendFit::FLAT;
        }

        let count = n as f32;
        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;
        let mut sum_xy = 0.0f32;
        let mut sum_xx = 0.0f32;
        for (i, &y) in self.samples.iter().enumerate() {
            let x = i as f32;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let mean_x = sum_x / count;
        let mean_y = sum_y / count;

        // slope = covariance(x, y) / variance(x); the denominator is only
        // zero at n <= 1, which the length guard above already excludes,
        // but keep it defined anyway.
        let denominator = sum_xx - count * mean_x * mean_x;
        let slope = if denominator == 0.0 { 0.0 } else { (sum_xy - count * mean_x * mean_y) / denominator };
        let intercept = mean_y - slope * mean_x;

        // R² = explained variation / total variation, 0 when all samples
        // are identical.
        let mut total_variation = 0.0f32;
        let mut explained_variation = 0.0f32;
        for (i, &y) in self.samples.iter().enumerate() {
            let y_hat = slope * i as f32 + intercept;
            total_variation += (y - mean_y) * (y - mean_y);
            explained_variation += (y_hat - mean_y) * (y_hat - mean_y);
        }
        let strength =
            if total_variation == 0.0 { 0.0 } else { explained_variation / total_variation };

        TrendFit { slope, strength }
    }
}

// =============================================================================
// Strength Classification
// =============================================================================

/// Map a slope magnitude to a discrete strength level.
///
/// Levels: below `minimal` → 0; below `low` → 0.25; below `medium` → 0.5;
/// below `high` → 0.75; otherwise → 1.
pub fn classify_strength(magnitude: f32, thresholds: &TrendThresholds) -> f32 {
    if magnitude < thresholds.minimal {
        0.0
    } else if magnitude < thresholds.low {
        0.25
    } else if magnitude < thresholds.medium {
        0.5
    } else if magnitude < thresholds.high {
        0.75
    } else {
        1.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
