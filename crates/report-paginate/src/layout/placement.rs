//! Page placement emission
//!
//! This module turns source slices into device-space placements.
//! Every page draws the whole scaled report image and clips it to its own
//! slice; the image is shifted up by whatever earlier pages consumed.
//! That lets the consumer embed the raster once and reuse it on each page.

use crate::types::{PaginateError, Result};

use super::{BreakKind, PageGeometry, PagePlacement, Rect, Slice, SourceBuffer};

/// Calculate the width-fitting scale used when paginating.
///
/// The report fills the usable width; its height is then sliced.
pub fn paginate_scale(buffer: &SourceBuffer, geometry: &PageGeometry) -> f32 {
    geometry.usable_width() / buffer.width
}

/// Calculate the aspect-preserving scale that fits the whole buffer on one page.
pub fn fit_scale(buffer: &SourceBuffer, geometry: &PageGeometry) -> f32 {
    let scale_w = geometry.usable_width() / buffer.width;
    let scale_h = geometry.usable_height() / buffer.height;
    scale_w.min(scale_h)
}

/// Emit one placement per slice.
///
/// # Arguments
/// * `buffer` - Source buffer dimensions
/// * `geometry` - Output page geometry
/// * `slices` - Ordered slices from the break search
/// * `scale` - Source pixels to device points, shared by every page
pub fn place_slices(
    buffer: &SourceBuffer,
    geometry: &PageGeometry,
    slices: &[Slice],
    scale: f32,
) -> Vec<PagePlacement> {
    let margin_box = geometry.margin_box();
    let device_width = buffer.width * scale;
    let device_height = buffer.height * scale;
    let device_x = margin_box.x + (margin_box.width - device_width) / 2.0;

    slices
        .iter()
        .enumerate()
        .map(|(page_index, slice)| {
            // Exactly the slice: shorter than the margin box after a safe break,
            // into the bottom margin after a snap overshoot.
            let clip_height = slice.height() * scale;

            PagePlacement {
                page_index,
                source_top: slice.top,
                source_bottom: slice.bottom,
                device_x,
                device_y: geometry.margin - slice.top * scale,
                device_width,
                device_height,
                scale,
                clip: Rect::new(margin_box.x, margin_box.y, margin_box.width, clip_height),
                break_kind: slice.break_kind,
            }
        })
        .collect()
}

/// Center the whole buffer on a single page.
pub fn place_single_page(buffer: &SourceBuffer, geometry: &PageGeometry) -> PagePlacement {
    let scale = fit_scale(buffer, geometry);
    let margin_box = geometry.margin_box();

    let scaled_width = buffer.width * scale;
    let scaled_height = buffer.height * scale;

    PagePlacement {
        page_index: 0,
        source_top: 0.0,
        source_bottom: buffer.height,
        device_x: margin_box.x + (margin_box.width - scaled_width) / 2.0,
        device_y: margin_box.y + (margin_box.height - scaled_height) / 2.0,
        device_width: scaled_width,
        device_height: scaled_height,
        scale,
        clip: margin_box,
        break_kind: BreakKind::End,
    }
}

/// Check that placements cover `[0, height)` exactly once, in order.
pub fn verify_coverage(placements: &[PagePlacement], height: f32) -> Result<()> {
    let (Some(first), Some(last)) = (placements.first(), placements.last()) else {
        return Err(PaginateError::Coverage("no placements".to_string()));
    };

    if first.source_top != 0.0 {
        return Err(PaginateError::Coverage(format!(
            "first page starts at {}",
            first.source_top
        )));
    }
    if last.source_bottom != height {
        return Err(PaginateError::Coverage(format!(
            "last page ends at {} instead of {}",
            last.source_bottom, height
        )));
    }

    for pair in placements.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.source_bottom != b.source_top {
            return Err(PaginateError::Coverage(format!(
                "page {} ends at {} but page {} starts at {}",
                a.page_index, a.source_bottom, b.page_index, b.source_top
            )));
        }
    }

    if let Some(empty) = placements.iter().find(|p| p.slice_height() <= 0.0) {
        return Err(PaginateError::Coverage(format!(
            "page {} is empty",
            empty.page_index
        )));
    }

    Ok(())
}
