use report_paginate::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_landscape_swaps_dimensions() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
}

#[test]
fn test_geometry_usable_area() {
    let geometry = PageGeometry::new(600.0, 800.0, 20.0);
    assert_eq!(geometry.usable_width(), 560.0);
    assert_eq!(geometry.usable_height(), 760.0);
    assert_eq!(geometry.margin_box(), Rect::new(20.0, 20.0, 560.0, 760.0));
    assert!(geometry.validate().is_ok());
}

#[test]
fn test_geometry_from_paper() {
    let geometry = PageGeometry::from_paper(PaperSize::A4, Orientation::Portrait, 10.0);
    assert!((geometry.page_width - 595.28).abs() < 0.1);
    assert!((geometry.page_height - 841.89).abs() < 0.1);
    assert!((geometry.margin - constants::mm_to_pt(10.0)).abs() < 0.001);
}

#[test]
fn test_geometry_rejects_margins_that_eat_the_page() {
    let geometry = PageGeometry::new(100.0, 100.0, 50.0);
    assert!(matches!(
        geometry.validate(),
        Err(PaginateError::InvalidGeometry(_))
    ));

    let geometry = PageGeometry::new(100.0, 100.0, -1.0);
    assert!(geometry.validate().is_err());
}

#[test]
fn test_source_buffer_validation() {
    assert!(SourceBuffer::new(10.0, 10.0).validate().is_ok());
    assert!(SourceBuffer::new(0.0, 10.0).validate().is_err());
    assert!(SourceBuffer::new(10.0, -5.0).validate().is_err());
    assert!(SourceBuffer::new(10.0, f32::NAN).validate().is_err());
}

#[test]
fn test_unit_conversion() {
    assert!((constants::mm_to_pt(25.4) - 72.0).abs() < 0.001);
    assert!((constants::pt_to_mm(72.0) - 25.4).abs() < 0.001);
}
