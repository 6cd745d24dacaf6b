use crate::layout::{BreakKind, PagePlacement};
use crate::types::*;

/// Calculate statistics for a pagination run
pub fn calculate_statistics(
    placements: &[PagePlacement],
    page_capacity: f32,
) -> Result<PaginationStatistics> {
    let Some(first) = placements.first() else {
        return Err(PaginateError::Coverage("no placements".to_string()));
    };

    let mut safe_cuts = 0;
    let mut hard_cuts = 0;
    for placement in placements {
        match placement.break_kind {
            BreakKind::Safe => safe_cuts += 1,
            BreakKind::Hard => hard_cuts += 1,
            BreakKind::End => {}
        }
    }

    let heights = placements.iter().map(PagePlacement::slice_height);
    let shortest_slice = heights.clone().fold(f32::INFINITY, f32::min);
    let tallest_slice = heights.fold(0.0, f32::max);

    Ok(PaginationStatistics {
        pages: placements.len(),
        safe_cuts,
        hard_cuts,
        scale: first.scale,
        page_capacity,
        shortest_slice,
        tallest_slice,
    })
}
