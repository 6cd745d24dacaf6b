use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginateError {
    #[error("Invalid source buffer: {width}x{height} (both dimensions must be positive)")]
    InvalidBuffer { width: f32, height: f32 },
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
    #[error("Page capacity must be positive, got {0}")]
    InvalidCapacity(f32),
    #[error("Placements do not cover the source buffer: {0}")]
    Coverage(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PaginateError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (reports are tall, so this is the default)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
///
/// Stored as `"A4"` or `{ "width_mm": .., "height_mm": .. }`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "crate::options::PaperSizeRepr", into = "crate::options::PaperSizeRepr")
)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// How the report is laid out on paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportMode {
    /// Slice the report into as many pages as needed, breaking at safe boundaries
    #[default]
    Paginate,
    /// Shrink the whole report onto a single page
    FitToOnePage,
}

/// Statistics about a pagination run
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationStatistics {
    /// Number of output pages
    pub pages: usize,
    /// Page breaks that landed on a safe boundary
    pub safe_cuts: usize,
    /// Page breaks forced at the capacity limit
    pub hard_cuts: usize,
    /// Source pixels to device points
    pub scale: f32,
    /// Source pixels that fit on one page
    pub page_capacity: f32,
    /// Shortest slice in source pixels
    pub shortest_slice: f32,
    /// Tallest slice in source pixels
    pub tallest_slice: f32,
}
