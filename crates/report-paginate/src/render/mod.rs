//! PDF rendering modules for report export
//!
//! This module handles all PDF-specific operations:
//! - Embedding the report raster as an Image XObject
//! - Building output pages that clip and offset the shared image
//! - Assembling pages into a document

mod compositor;
mod page;
mod xobject;

pub use compositor::{PageCompositor, PdfCompositor, compose};
pub use xobject::create_image_xobject;
pub use page::*;
