//! Raster and document I/O for export

use crate::types::*;
use image::RgbImage;
use lopdf::Document;
use std::path::Path;

/// Load the rendered report image (PNG or JPEG) as 8-bit RGB
pub async fn load_raster(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(image.to_rgb8())
}

/// Save the exported document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        doc.compress();
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PaginateError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
