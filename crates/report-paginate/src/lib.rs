pub mod constants;
pub mod layout;
pub mod paginate;
pub mod render;
mod options;
mod snapshot;
mod stats;
mod types;

pub use layout::{
    BreakKind, CutCandidates, Interval, IntervalSource, PageGeometry, PagePlacement, Rect,
    SourceBuffer, verify_coverage,
};
pub use options::*;
pub use paginate::{
    export, fit_to_one_page, layout_report, load_raster, page_capacity, paginate, paginate_with,
    save_pdf,
};
pub use render::{PageCompositor, PdfCompositor, compose};
pub use snapshot::*;
pub use stats::calculate_statistics;
pub use types::*;
