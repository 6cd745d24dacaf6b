//! Report pagination - splitting a tall report image into printable pages
//!
//! This module orchestrates the export process:
//! 1. Collect safe break positions from the measured boundaries
//! 2. Search page breaks (or fit everything on one page)
//! 3. Emit page placements
//! 4. Composite the placements into an output PDF

mod io;

pub use io::{load_raster, save_pdf};

use crate::layout::*;
use crate::options::{ExportOptions, PaginationOptions};
use crate::render::{PdfCompositor, compose};
use crate::types::*;
use image::RgbImage;
use lopdf::Document;

/// Paginate a report with the default snap tolerance.
///
/// # Arguments
/// * `buffer_height` - Height of the rendered report in pixels
/// * `buffer_width` - Width of the rendered report in pixels
/// * `intervals` - Regions that should not be split across pages
/// * `geometry` - Output page geometry
pub fn paginate(
    buffer_height: f32,
    buffer_width: f32,
    intervals: &[Interval],
    geometry: &PageGeometry,
) -> Result<Vec<PagePlacement>> {
    paginate_with(
        buffer_height,
        buffer_width,
        intervals,
        geometry,
        &PaginationOptions::default(),
    )
}

/// Paginate a report with explicit break search tuning.
pub fn paginate_with(
    buffer_height: f32,
    buffer_width: f32,
    intervals: &[Interval],
    geometry: &PageGeometry,
    options: &PaginationOptions,
) -> Result<Vec<PagePlacement>> {
    let buffer = SourceBuffer::new(buffer_width, buffer_height);
    buffer.validate()?;
    geometry.validate()?;

    let scale = paginate_scale(&buffer, geometry);
    let capacity = geometry.usable_height() / scale;
    let tolerance = options.snap_tolerance_pt / scale;

    let candidates = CutCandidates::collect(intervals, buffer.height);
    let slices = find_slices(&candidates, buffer.height, capacity, tolerance)?;

    log::debug!(
        "Paginated {}x{}px at scale {} into {} pages ({} candidates, capacity {}px)",
        buffer.width,
        buffer.height,
        scale,
        slices.len(),
        candidates.len(),
        capacity
    );

    Ok(place_slices(&buffer, geometry, &slices, scale))
}

/// Shrink the whole report onto one page, centered.
pub fn fit_to_one_page(
    buffer_height: f32,
    buffer_width: f32,
    geometry: &PageGeometry,
) -> Result<PagePlacement> {
    let buffer = SourceBuffer::new(buffer_width, buffer_height);
    buffer.validate()?;
    geometry.validate()?;

    Ok(place_single_page(&buffer, geometry))
}

/// Source pixels that fit on one page when paginating
pub fn page_capacity(buffer: &SourceBuffer, geometry: &PageGeometry) -> f32 {
    geometry.usable_height() / paginate_scale(buffer, geometry)
}

/// Lay out a report according to the export options.
pub fn layout_report<S: IntervalSource + ?Sized>(
    buffer: &SourceBuffer,
    source: &S,
    options: &ExportOptions,
) -> Result<Vec<PagePlacement>> {
    options.validate()?;
    let geometry = options.geometry();

    match options.mode {
        ExportMode::Paginate => paginate_with(
            buffer.height,
            buffer.width,
            &source.intervals(),
            &geometry,
            &options.pagination_options(),
        ),
        ExportMode::FitToOnePage => {
            Ok(vec![fit_to_one_page(buffer.height, buffer.width, &geometry)?])
        }
    }
}

/// Main export function: lay out the report image and composite it into a PDF.
pub async fn export(
    image: &RgbImage,
    intervals: &[Interval],
    options: &ExportOptions,
) -> Result<Document> {
    options.validate()?;

    let image = image.clone();
    let intervals = intervals.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || export_sync(&image, &intervals, &options)).await?
}

fn export_sync(
    image: &RgbImage,
    intervals: &[Interval],
    options: &ExportOptions,
) -> Result<Document> {
    let buffer = SourceBuffer::new(image.width() as f32, image.height() as f32);
    let placements = layout_report(&buffer, intervals, options)?;

    log::info!(
        "Exporting {}x{}px report as {} page(s) ({:?})",
        image.width(),
        image.height(),
        placements.len(),
        options.mode
    );

    let compositor = PdfCompositor::new(image, options.geometry(), options.title.as_deref());
    compose(compositor, &placements)
}
