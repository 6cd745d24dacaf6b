//! Cut candidate collection
//!
//! Turns the "do not split" intervals measured on the rendered report into
//! the sorted set of vertical positions where a page break is safe.

use super::Interval;

// =============================================================================
// Interval Sources
// =============================================================================

/// Anything that can hand over measured intervals in source-pixel coordinates.
///
/// The measuring itself (walking sections and table rows of the rendered
/// report) happens outside this crate.
pub trait IntervalSource {
    fn intervals(&self) -> Vec<Interval>;
}

impl IntervalSource for [Interval] {
    fn intervals(&self) -> Vec<Interval> {
        self.to_vec()
    }
}

impl IntervalSource for Vec<Interval> {
    fn intervals(&self) -> Vec<Interval> {
        self.clone()
    }
}

// =============================================================================
// Candidate Set
// =============================================================================

/// Strictly ascending break positions, always containing `0` and the buffer
/// height.
#[derive(Debug, Clone, PartialEq)]
pub struct CutCandidates {
    values: Vec<f32>,
}

impl CutCandidates {
    /// Collect candidates from interval edges.
    ///
    /// Never fails: inverted intervals are normalised, edges are clamped into
    /// `[0, height]`, non-finite edges are dropped and duplicates collapse.
    pub fn collect(intervals: &[Interval], height: f32) -> Self {
        let height = height.max(0.0);
        let mut values = Vec::with_capacity(intervals.len() * 2 + 2);
        values.push(0.0);
        values.push(height);

        let mut dropped = 0usize;
        for interval in intervals {
            for edge in [interval.top, interval.bottom] {
                if edge.is_finite() {
                    // `+ 0.0` turns -0.0 into 0.0 so it dedups against the sentinel
                    values.push(edge.clamp(0.0, height) + 0.0);
                } else {
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            log::warn!("Dropped {} non-finite interval edges", dropped);
        }

        values.sort_by(f32::total_cmp);
        values.dedup();

        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true: the sentinels are always present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, y: f32) -> bool {
        self.values.binary_search_by(|v| v.total_cmp(&y)).is_ok()
    }

    /// Largest candidate `c` with `lower < c <= upper`.
    pub fn largest_in(&self, lower: f32, upper: f32) -> Option<f32> {
        let end = self.values.partition_point(|&c| c <= upper);
        self.values[..end].last().copied().filter(|&c| c > lower)
    }
}
