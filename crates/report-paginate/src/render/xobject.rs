//! Image XObject creation
//!
//! The report raster is embedded once per document and referenced by
//! every output page.

use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Embed an RGB raster as an Image XObject.
///
/// Samples are stored uncompressed here; `Document::compress` deflates the
/// stream when the document is saved.
pub fn create_image_xobject(output: &mut Document, image: &RgbImage) -> ObjectId {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width() as i64));
    dict.set("Height", Object::Integer(image.height() as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));

    output.add_object(Stream::new(dict, image.as_raw().clone()))
}
