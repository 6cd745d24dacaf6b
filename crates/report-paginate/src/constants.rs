//! Shared constants for report pagination
//!
//! This module centralizes magic numbers and constants used throughout
//! the pagination and export process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Margin
// =============================================================================

/// Default uniform page margin (millimeters)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

// =============================================================================
// Cut Search
// =============================================================================

/// How far past the capacity limit (in device points) a safe boundary may sit
/// and still be chosen. Converted to source pixels per run.
pub const DEFAULT_SNAP_TOLERANCE_PT: f32 = 10.0;

/// Residue (in source pixels) below which the remaining content is folded
/// into the previous page instead of starting a new one.
pub const COVERAGE_EPSILON_PX: f32 = 0.5;

// =============================================================================
// PDF Output
// =============================================================================

/// Resource name of the shared report image on every output page
pub const REPORT_IMAGE_NAME: &str = "Im0";

/// PDF version written by the compositor
pub const PDF_VERSION: &str = "1.7";
