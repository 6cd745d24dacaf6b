//! Page break search
//!
//! A single greedy pass down the source buffer. Each page takes as much
//! content as fits, ending on the largest safe boundary in range, and falls
//! back to a hard cut at the capacity limit when no boundary is available.

use crate::constants::COVERAGE_EPSILON_PX;
use crate::types::{PaginateError, Result};

use super::{BreakKind, CutCandidates};

/// A vertical slice `[top, bottom)` of the source buffer in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub top: f32,
    pub bottom: f32,
    pub break_kind: BreakKind,
}

impl Slice {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Split `[0, height)` into page slices.
///
/// # Arguments
/// * `candidates` - Safe break positions (see [`CutCandidates::collect`])
/// * `height` - Source buffer height in pixels
/// * `capacity` - Source pixels that fit on one page
/// * `tolerance` - Snap tolerance in source pixels. A candidate up to this far
///   past the capacity limit still counts, and candidates closer than this to
///   the previous break are skipped.
///
/// The slices cover `[0, height)` exactly, in order. A slice ending on a
/// snapped candidate may exceed `capacity` by at most `tolerance`.
pub fn find_slices(
    candidates: &CutCandidates,
    height: f32,
    capacity: f32,
    tolerance: f32,
) -> Result<Vec<Slice>> {
    if !(height.is_finite() && height > 0.0) {
        return Err(PaginateError::InvalidBuffer {
            width: f32::NAN,
            height,
        });
    }
    // Anything below the residue epsilon could never make progress
    if !(capacity.is_finite() && capacity >= COVERAGE_EPSILON_PX) {
        return Err(PaginateError::InvalidCapacity(capacity));
    }
    let tolerance = if tolerance.is_finite() {
        tolerance.max(0.0)
    } else {
        0.0
    };

    let mut slices: Vec<Slice> = Vec::new();
    let mut last_cut = 0.0_f32;

    while height - last_cut > COVERAGE_EPSILON_PX {
        let limit = last_cut + capacity;

        let (next_cut, break_kind) =
            match candidates.largest_in(last_cut + tolerance, limit + tolerance) {
                Some(c) if c >= height => (height, BreakKind::End),
                Some(c) => (c, BreakKind::Safe),
                None if limit >= height => (height, BreakKind::End),
                None => (limit, BreakKind::Hard),
            };

        log::debug!(
            "Page {}: [{}, {}) {:?} (limit {})",
            slices.len(),
            last_cut,
            next_cut,
            break_kind,
            limit
        );

        slices.push(Slice {
            top: last_cut,
            bottom: next_cut,
            break_kind,
        });
        last_cut = next_cut;
    }

    // Fold a sub-pixel residue into the last page so coverage ends at `height`
    if let Some(tail) = slices.last_mut() {
        if tail.bottom != height {
            tail.bottom = height;
            tail.break_kind = BreakKind::End;
        }
    }

    Ok(slices)
}
