//! Layout calculation modules for pagination
//!
//! This module handles all the geometric calculations:
//! - Cut candidates (where a page break is safe)
//! - Break search (which candidates become page breaks)
//! - Placement (where the report image is drawn on each page)

mod candidates;
mod cut_search;
mod placement;
mod types;

pub use candidates::*;
pub use cut_search::*;
pub use placement::*;
pub use types::*;
