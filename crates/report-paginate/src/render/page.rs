//! Output page rendering for report export
//!
//! Placements are in device space (origin top-left, y down). PDF user space
//! has its origin bottom-left with y up, so every rectangle is flipped
//! against the page height here.

use crate::constants::REPORT_IMAGE_NAME;
use crate::layout::{PageGeometry, PagePlacement, Rect};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

// =============================================================================
// Public API
// =============================================================================

/// Render one output page showing a placement of the shared report image.
///
/// # Arguments
/// * `output` - The output document
/// * `image_id` - Object ID of the embedded report image
/// * `placement` - Where the image is drawn and how it is clipped
/// * `geometry` - Output page geometry
/// * `parent_pages_id` - The parent Pages object ID
pub fn render_report_page(
    output: &mut Document,
    image_id: ObjectId,
    placement: &PagePlacement,
    geometry: &PageGeometry,
    parent_pages_id: ObjectId,
) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(geometry.page_width),
            Object::Real(geometry.page_height),
        ]),
    );

    let mut xobjects = Dictionary::new();
    xobjects.set(REPORT_IMAGE_NAME, Object::Reference(image_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = generate_placement_command(placement, geometry.page_height);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}

/// Generate the content stream that clips to the placement's clip rectangle
/// and draws the report image at its offset.
pub fn generate_placement_command(placement: &PagePlacement, page_height: f32) -> String {
    let clip = to_pdf_rect(&placement.clip, page_height);
    let image = to_pdf_rect(&placement.device_rect(), page_height);

    // Image XObjects occupy the unit square, so the matrix scales it to size
    format!(
        "q {} {} {} {} re W n {} 0 0 {} {} {} cm /{} Do Q\n",
        clip.x,
        clip.y,
        clip.width,
        clip.height,
        image.width,
        image.height,
        image.x,
        image.y,
        REPORT_IMAGE_NAME
    )
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Flip a device-space rect into PDF user space (`y` becomes the bottom edge)
fn to_pdf_rect(rect: &Rect, page_height: f32) -> Rect {
    Rect::new(rect.x, page_height - rect.bottom(), rect.width, rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BreakKind;

    #[test]
    fn test_second_page_command_flips_y() {
        let placement = PagePlacement {
            page_index: 1,
            source_top: 600.0,
            source_bottom: 1200.0,
            device_x: 10.0,
            device_y: -590.0,
            device_width: 500.0,
            device_height: 1200.0,
            scale: 1.0,
            clip: Rect::new(10.0, 10.0, 500.0, 600.0),
            break_kind: BreakKind::End,
        };

        let cmd = generate_placement_command(&placement, 620.0);
        // Clip: bottom edge at 620 - 610 = 10
        // Image: bottom edge at 620 - (-590 + 1200) = 10
        assert_eq!(cmd, "q 10 10 500 600 re W n 500 0 0 1200 10 10 cm /Im0 Do Q\n");
    }
}
