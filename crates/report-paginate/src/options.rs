use crate::constants::{DEFAULT_MARGIN_MM, DEFAULT_SNAP_TOLERANCE_PT};
use crate::layout::PageGeometry;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning for the break search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationOptions {
    /// How far past the page limit (in points) a safe boundary may sit and
    /// still be used. Zero keeps every page strictly within capacity.
    pub snap_tolerance_pt: f32,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            snap_tolerance_pt: DEFAULT_SNAP_TOLERANCE_PT,
        }
    }
}

/// Report export configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExportOptions {
    // Paper
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margin_mm: f32,

    // Layout
    pub mode: ExportMode,
    pub snap_tolerance_pt: f32,

    // Document info
    pub title: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            mode: ExportMode::Paginate,
            snap_tolerance_pt: DEFAULT_SNAP_TOLERANCE_PT,
            title: None,
        }
    }
}

impl ExportOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PaginateError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaginateError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page geometry in points for these options
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::from_paper(self.paper_size, self.orientation, self.margin_mm)
    }

    pub fn pagination_options(&self) -> PaginationOptions {
        PaginationOptions {
            snap_tolerance_pt: self.snap_tolerance_pt,
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm > 0.0 && height_mm > 0.0) {
            return Err(PaginateError::Config(format!(
                "Paper size must be positive, got {}x{}mm",
                width_mm, height_mm
            )));
        }

        if !(self.margin_mm >= 0.0) {
            return Err(PaginateError::Config(
                "Margin must not be negative".to_string(),
            ));
        }

        if !(self.snap_tolerance_pt >= 0.0 && self.snap_tolerance_pt.is_finite()) {
            return Err(PaginateError::Config(
                "Snap tolerance must be a non-negative number".to_string(),
            ));
        }

        self.geometry()
            .validate()
            .map_err(|e| PaginateError::Config(e.to_string()))
    }
}

/// On-disk form of a paper size: a bare name or explicit dimensions
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum PaperSizeRepr {
    Named(NamedPaper),
    Custom { width_mm: f32, height_mm: f32 },
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, Serialize, Deserialize)]
pub(crate) enum NamedPaper {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[cfg(feature = "serde")]
impl From<PaperSizeRepr> for PaperSize {
    fn from(repr: PaperSizeRepr) -> Self {
        match repr {
            PaperSizeRepr::Named(NamedPaper::A3) => PaperSize::A3,
            PaperSizeRepr::Named(NamedPaper::A4) => PaperSize::A4,
            PaperSizeRepr::Named(NamedPaper::A5) => PaperSize::A5,
            PaperSizeRepr::Named(NamedPaper::Letter) => PaperSize::Letter,
            PaperSizeRepr::Named(NamedPaper::Legal) => PaperSize::Legal,
            PaperSizeRepr::Custom {
                width_mm,
                height_mm,
            } => PaperSize::Custom {
                width_mm,
                height_mm,
            },
        }
    }
}

#[cfg(feature = "serde")]
impl From<PaperSize> for PaperSizeRepr {
    fn from(paper: PaperSize) -> Self {
        match paper {
            PaperSize::A3 => PaperSizeRepr::Named(NamedPaper::A3),
            PaperSize::A4 => PaperSizeRepr::Named(NamedPaper::A4),
            PaperSize::A5 => PaperSizeRepr::Named(NamedPaper::A5),
            PaperSize::Letter => PaperSizeRepr::Named(NamedPaper::Letter),
            PaperSize::Legal => PaperSizeRepr::Named(NamedPaper::Legal),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => PaperSizeRepr::Custom {
                width_mm,
                height_mm,
            },
        }
    }
}
