//! Placement consumers
//!
//! A compositor receives page placements in order and turns them into an
//! output document. The PDF compositor embeds the report image once and
//! emits one page per placement.

use crate::constants::PDF_VERSION;
use crate::layout::{PageGeometry, PagePlacement};
use crate::types::Result;
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId};

use super::page::render_report_page;
use super::xobject::create_image_xobject;

/// Consumer of page placements
pub trait PageCompositor {
    type Output;

    /// Draw the next page. Placements arrive top to bottom.
    fn draw_page(&mut self, placement: &PagePlacement) -> Result<()>;

    /// Finish the document once every page has been drawn
    fn finish(self) -> Result<Self::Output>;
}

/// Feed every placement to a compositor and finish it.
///
/// Debug builds first check that the placements tile the source without
/// gaps or overlaps.
pub fn compose<C: PageCompositor>(
    mut compositor: C,
    placements: &[PagePlacement],
) -> Result<C::Output> {
    #[cfg(debug_assertions)]
    if let Some(last) = placements.last() {
        crate::layout::verify_coverage(placements, last.source_bottom)?;
    }

    for placement in placements {
        compositor.draw_page(placement)?;
    }
    compositor.finish()
}

/// Writes placements as pages of a PDF document
pub struct PdfCompositor {
    output: Document,
    geometry: PageGeometry,
    pages_tree_id: ObjectId,
    image_id: ObjectId,
    page_refs: Vec<Object>,
    title: Option<String>,
}

impl PdfCompositor {
    pub fn new(image: &RgbImage, geometry: PageGeometry, title: Option<&str>) -> Self {
        let mut output = Document::with_version(PDF_VERSION);
        let pages_tree_id = output.new_object_id();
        let image_id = create_image_xobject(&mut output, image);

        Self {
            output,
            geometry,
            pages_tree_id,
            image_id,
            page_refs: Vec::new(),
            title: title.map(str::to_owned),
        }
    }
}

impl PageCompositor for PdfCompositor {
    type Output = Document;

    fn draw_page(&mut self, placement: &PagePlacement) -> Result<()> {
        let page_id = render_report_page(
            &mut self.output,
            self.image_id,
            placement,
            &self.geometry,
            self.pages_tree_id,
        );
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }

    fn finish(mut self) -> Result<Document> {
        // Create pages tree
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        if let Some(title) = self.title {
            let info_id = self.output.add_object(Dictionary::from_iter(vec![(
                "Title",
                Object::string_literal(title),
            )]));
            self.output.trailer.set("Info", info_id);
        }

        Ok(self.output)
    }
}
