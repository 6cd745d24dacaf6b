use image::{Rgb, RgbImage};
use lopdf::{Document, Object};
use report_paginate::*;

fn striped_report(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        if (y / 50) % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([30, 90, 160])
        }
    })
}

fn page_image_ref(doc: &Document, page_id: lopdf::ObjectId) -> lopdf::ObjectId {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"Resources")
        .and_then(Object::as_dict)
        .and_then(|res| res.get(b"XObject"))
        .and_then(Object::as_dict)
        .and_then(|xobjects| xobjects.get(b"Im0"))
        .and_then(Object::as_reference)
        .unwrap()
}

#[test]
fn test_compose_one_pdf_page_per_placement() {
    let image = striped_report(500, 1000);
    let geometry = PageGeometry::new(520.0, 320.0, 10.0);
    let placements = paginate(1000.0, 500.0, &[], &geometry).unwrap();

    let compositor = PdfCompositor::new(&image, geometry, None);
    let doc = compose(compositor, &placements).unwrap();

    let pages = doc.get_pages();
    assert_eq!(pages.len(), placements.len());

    // Every page references the same embedded image
    let image_refs: Vec<_> = pages.values().map(|&id| page_image_ref(&doc, id)).collect();
    assert!(image_refs.windows(2).all(|w| w[0] == w[1]));

    let image_dict = doc.get_object(image_refs[0]).unwrap().as_stream().unwrap();
    let dimension = |key: &[u8]| image_dict.dict.get(key).and_then(Object::as_i64).unwrap();
    assert_eq!(dimension(&b"Width"[..]), 500);
    assert_eq!(dimension(&b"Height"[..]), 1000);
}

#[test]
fn test_compose_page_content_offsets_image() {
    let image = striped_report(500, 1000);
    let geometry = PageGeometry::new(520.0, 320.0, 10.0);
    let placements = paginate(1000.0, 500.0, &[], &geometry).unwrap();

    let doc = compose(PdfCompositor::new(&image, geometry, None), &placements).unwrap();
    let second_page = *doc.get_pages().get(&2).unwrap();
    let content = String::from_utf8(doc.get_page_content(second_page).unwrap()).unwrap();

    // Image top sits 300pt above the page top: bottom edge at 320 - (-290 + 1000) = -390
    assert!(content.contains("10 10 500 300 re W n"), "content: {}", content);
    assert!(content.contains("500 0 0 1000 10 -390 cm /Im0 Do"), "content: {}", content);
}

#[cfg(debug_assertions)]
#[test]
fn test_compose_rejects_placements_with_gap() {
    let image = striped_report(500, 1000);
    let geometry = PageGeometry::new(520.0, 320.0, 10.0);
    let mut placements = paginate(1000.0, 500.0, &[], &geometry).unwrap();
    placements.remove(1);

    let result = compose(PdfCompositor::new(&image, geometry, None), &placements);
    match result {
        Err(PaginateError::Coverage(msg)) => assert!(msg.contains("page 0 ends at 300")),
        other => panic!("Expected Coverage error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_export_fit_to_one_page_with_title() {
    let image = striped_report(300, 900);
    let mut options = ExportOptions::default();
    options.mode = ExportMode::FitToOnePage;
    options.title = Some("Weekly summary".to_string());

    let doc = export(&image, &[], &options).await.unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let info_id = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .unwrap();
    let title = doc.get_dictionary(info_id).unwrap().get(b"Title").unwrap();
    assert!(matches!(title, Object::String(bytes, _) if bytes.as_slice() == b"Weekly summary"));
}

#[tokio::test]
async fn test_export_paginates_with_boundaries() {
    let image = striped_report(800, 4000);
    let intervals = [Interval::new(1000.0, 1300.0), Interval::new(2200.0, 2300.0)];
    let options = ExportOptions::default();

    let buffer = SourceBuffer::new(800.0, 4000.0);
    let expected = layout_report(&buffer, &intervals[..], &options).unwrap();

    let doc = export(&image, &intervals, &options).await.unwrap();
    assert_eq!(doc.get_pages().len(), expected.len());
}

#[tokio::test]
async fn test_export_rejects_invalid_options() {
    let image = striped_report(10, 10);
    let mut options = ExportOptions::default();
    options.margin_mm = -5.0;
    assert!(matches!(
        export(&image, &[], &options).await,
        Err(PaginateError::Config(_))
    ));
}

#[tokio::test]
async fn test_raster_and_pdf_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("report.png");
    let pdf_path = dir.path().join("report.pdf");

    striped_report(200, 700).save(&png_path).unwrap();
    let raster = load_raster(&png_path).await.unwrap();
    assert_eq!(raster.dimensions(), (200, 700));

    let doc = export(&raster, &[], &ExportOptions::default()).await.unwrap();
    let page_count = doc.get_pages().len();
    save_pdf(doc, &pdf_path).await.unwrap();

    let reloaded = Document::load(&pdf_path).unwrap();
    assert_eq!(reloaded.get_pages().len(), page_count);
}

#[tokio::test]
async fn test_load_raster_missing_file() {
    let result = load_raster("/nonexistent/report.png").await;
    assert!(matches!(result, Err(PaginateError::Io(_))));
}
