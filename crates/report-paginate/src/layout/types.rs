//! Layout data types for pagination
//!
//! These types represent the intermediate layout calculations between
//! boundary collection and PDF rendering. Source coordinates are pixels of
//! the rendered report; device coordinates are points on the output page,
//! measured from the top-left corner with y growing downward.

use crate::constants::mm_to_pt;
use crate::types::{Orientation, PaginateError, PaperSize, Result};

/// A rectangular area in device points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Dimensions of the rendered report raster.
///
/// Only the size is needed to paginate; the pixels stay with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceBuffer {
    pub width: f32,
    pub height: f32,
}

impl SourceBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reject empty, negative or non-finite buffers.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(PaginateError::InvalidBuffer {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A vertical range `[top, bottom)` in source pixels that should not be
/// split across pages.
///
/// Intervals come from layout measurement and may be unsorted, overlapping,
/// inverted or partly outside the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub top: f32,
    pub bottom: f32,
}

impl Interval {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Output page size and margin in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Uniform margin on all four sides
    pub margin: f32,
}

impl PageGeometry {
    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Self {
        Self {
            page_width,
            page_height,
            margin,
        }
    }

    /// Build geometry from a paper size, orientation and margin in millimeters
    pub fn from_paper(paper: PaperSize, orientation: Orientation, margin_mm: f32) -> Self {
        let (w_mm, h_mm) = paper.dimensions_with_orientation(orientation);
        Self::new(mm_to_pt(w_mm), mm_to_pt(h_mm), mm_to_pt(margin_mm))
    }

    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// The area inside the margins, which is also the clip region of each page
    pub fn margin_box(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.usable_width(),
            self.usable_height(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(PaginateError::InvalidGeometry(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        let (uw, uh) = (self.usable_width(), self.usable_height());
        if !(uw.is_finite() && uh.is_finite() && uw > 0.0 && uh > 0.0) {
            return Err(PaginateError::InvalidGeometry(format!(
                "usable area {}x{}pt is empty (page {}x{}pt, margin {}pt)",
                uw, uh, self.page_width, self.page_height, self.margin
            )));
        }
        Ok(())
    }
}

/// How the bottom edge of a slice was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// Landed on a safe boundary
    Safe,
    /// Forced at the capacity limit because no safe boundary was in range
    Hard,
    /// End of the source buffer
    End,
}

/// One output page: which slice of the source it shows and where the
/// (whole, scaled) source image is drawn so that slice lands in the margin box.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Output page index (0-based)
    pub page_index: usize,
    /// First source row on this page
    pub source_top: f32,
    /// One past the last source row on this page
    pub source_bottom: f32,
    /// Left edge of the drawn image
    pub device_x: f32,
    /// Top edge of the drawn image (negative once earlier pages consumed content)
    pub device_y: f32,
    /// Width of the drawn image
    pub device_width: f32,
    /// Height of the drawn image
    pub device_height: f32,
    /// Source pixels to device points
    pub scale: f32,
    /// Region of the page the image is clipped to
    pub clip: Rect,
    /// How `source_bottom` was chosen
    pub break_kind: BreakKind,
}

impl PagePlacement {
    /// Height of the slice in source pixels
    pub fn slice_height(&self) -> f32 {
        self.source_bottom - self.source_top
    }

    /// Where the drawn image sits on the page
    pub fn device_rect(&self) -> Rect {
        Rect::new(
            self.device_x,
            self.device_y,
            self.device_width,
            self.device_height,
        )
    }
}
