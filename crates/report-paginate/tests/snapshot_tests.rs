use report_paginate::*;

#[test]
fn test_snapshot_yields_intervals() {
    let snapshot = LayoutSnapshot {
        width: Some(800.0),
        height: Some(3000.0),
        intervals: vec![
            BoundaryRecord::labeled(0.0, 420.0, "summary"),
            BoundaryRecord::new(420.0, 460.0),
        ],
    };
    assert_eq!(
        snapshot.intervals(),
        vec![Interval::new(0.0, 420.0), Interval::new(420.0, 460.0)]
    );
}

#[test]
fn test_check_against_matching_raster() {
    let snapshot = LayoutSnapshot {
        width: Some(800.0),
        height: Some(3000.0),
        intervals: Vec::new(),
    };
    assert!(snapshot.check_against(&SourceBuffer::new(800.0, 3000.0)).is_ok());
    // Unrecorded dimensions are not checked
    assert!(
        LayoutSnapshot::default()
            .check_against(&SourceBuffer::new(1.0, 1.0))
            .is_ok()
    );
}

#[test]
fn test_check_against_mismatched_raster() {
    let snapshot = LayoutSnapshot {
        width: None,
        height: Some(3000.0),
        intervals: Vec::new(),
    };
    match snapshot.check_against(&SourceBuffer::new(800.0, 1500.0)) {
        Err(PaginateError::Config(msg)) => assert!(msg.contains("height")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_snapshot_json() {
    use tempfile::NamedTempFile;

    let json = r#"{
        "width": 1240,
        "height": 5230,
        "intervals": [
            { "top": 0, "bottom": 410, "label": "summary" },
            { "top": 410, "bottom": 452 }
        ]
    }"#;
    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), json).await.unwrap();

    let snapshot = LayoutSnapshot::load(temp_file.path()).await.unwrap();
    assert_eq!(snapshot.width, Some(1240.0));
    assert_eq!(snapshot.height, Some(5230.0));
    assert_eq!(snapshot.intervals.len(), 2);
    assert_eq!(snapshot.intervals[0].label.as_deref(), Some("summary"));
    assert_eq!(snapshot.intervals[1].label, None);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_snapshot() {
    use tempfile::NamedTempFile;

    let snapshot = LayoutSnapshot {
        width: Some(640.0),
        height: None,
        intervals: vec![BoundaryRecord::labeled(12.0, 80.5, "row")],
    };
    let temp_file = NamedTempFile::new().unwrap();
    snapshot.save(temp_file.path()).await.unwrap();

    let loaded = LayoutSnapshot::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded, snapshot);
}
