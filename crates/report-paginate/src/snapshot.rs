//! Boundary snapshots
//!
//! The renderer measures sections and table rows of the report and writes
//! them out next to the raster. A snapshot is that measurement, frozen.

use crate::layout::{Interval, IntervalSource, SourceBuffer};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One measured region that should stay on a single page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryRecord {
    pub top: f32,
    pub bottom: f32,
    /// What the region is ("section", "row", ...), for diagnostics only
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
}

impl BoundaryRecord {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom,
            label: None,
        }
    }

    pub fn labeled(top: f32, bottom: f32, label: impl Into<String>) -> Self {
        Self {
            top,
            bottom,
            label: Some(label.into()),
        }
    }
}

/// Measured boundaries of one rendered report
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSnapshot {
    /// Raster width the boundaries were measured against, if recorded
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<f32>,
    /// Raster height the boundaries were measured against, if recorded
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub intervals: Vec<BoundaryRecord>,
}

impl LayoutSnapshot {
    /// Load a snapshot from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let snapshot = serde_json::from_slice(&bytes)
            .map_err(|e| PaginateError::Config(format!("Failed to parse boundaries: {}", e)))?;
        Ok(snapshot)
    }

    /// Save a snapshot to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaginateError::Config(format!("Failed to serialize boundaries: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Make sure the snapshot was measured against this raster.
    ///
    /// Recorded dimensions that disagree with the raster mean every boundary
    /// would land in the wrong place, so that is a configuration error.
    pub fn check_against(&self, buffer: &SourceBuffer) -> Result<()> {
        let recorded = [
            ("width", self.width, buffer.width),
            ("height", self.height, buffer.height),
        ];
        for (name, snapshot_value, buffer_value) in recorded {
            if let Some(v) = snapshot_value {
                if (v - buffer_value).abs() >= 1.0 {
                    log::warn!(
                        "Boundary snapshot {} {} does not match raster {} {}",
                        name,
                        v,
                        name,
                        buffer_value
                    );
                    return Err(PaginateError::Config(format!(
                        "Boundaries were measured for {} {} but the image {} is {}",
                        name, v, name, buffer_value
                    )));
                }
            }
        }
        Ok(())
    }
}

impl IntervalSource for LayoutSnapshot {
    fn intervals(&self) -> Vec<Interval> {
        self.intervals
            .iter()
            .map(|r| Interval::new(r.top, r.bottom))
            .collect()
    }
}
