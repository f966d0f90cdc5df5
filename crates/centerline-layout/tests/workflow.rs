//! Integration test: upload a reference and two elements, align, clear.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use centerline_layout::{
    Completion, CompletionJoin, Controls, DragSession, LayoutConfig, PlaceError, PlacementStore,
    Point, Rect, Role, Size, StoreError, Toast, place_upload,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 120, 255, 255]));
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

#[test]
fn reference_then_elements_then_align_then_clear() {
    let config = LayoutConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut store = PlacementStore::new();

    let reference = place_upload(&mut store, png(300, 120), Role::Reference, &config, &mut rng)
        .expect("reference should place");
    let a = place_upload(&mut store, png(64, 64), Role::Regular, &config, &mut rng).unwrap();
    let b = place_upload(&mut store, png(250, 33), Role::Regular, &config, &mut rng).unwrap();

    let r = store.get(reference).unwrap();
    assert_eq!(r.position(), Point::new(400.0, 200.0));
    assert_eq!(r.size(), Size::new(200, 120));
    assert_eq!(store.get(b).unwrap().size(), Size::new(200, 33));
    assert!(Controls::from_store(&store).align);

    store.align_to_reference().unwrap();
    let center = store.reference_center().unwrap();
    for id in [a, b] {
        let c = store.get(id).unwrap().center();
        assert!((c.x - center.x).abs() < 1e-9);
        assert!((c.y - center.y).abs() < 1e-9);
    }
    assert_eq!(store.get(reference).unwrap().position(), Point::new(400.0, 200.0));

    store.clear();
    assert!(store.is_empty());
    let controls = Controls::from_store(&store);
    assert!(!controls.export);
    assert!(!controls.clear);
    assert!(controls.upload_reference);
}

#[test]
fn second_reference_upload_is_refused() {
    let config = LayoutConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut store = PlacementStore::new();

    place_upload(&mut store, png(10, 10), Role::Reference, &config, &mut rng).unwrap();
    let err = place_upload(&mut store, png(10, 10), Role::Reference, &config, &mut rng);
    assert!(matches!(err, Err(PlaceError::Store(StoreError::ReferenceExists))));
    assert_eq!(store.len(), 1);
}

#[test]
fn batch_with_a_corrupt_file_reports_one_failure() {
    let config = LayoutConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut store = PlacementStore::new();

    let files = vec![png(20, 20), b"not an image".to_vec(), png(30, 30)];
    let batch_toast = Toast::ingested(Role::Regular, files.len());
    assert_eq!(batch_toast.description, "Files: 3");

    let mut join = CompletionJoin::new(files.len());
    let mut summary = None;
    for bytes in files {
        let outcome = place_upload(&mut store, bytes, Role::Regular, &config, &mut rng);
        summary = join.report(Completion::from(&outcome)).or(summary);
    }

    let summary = summary.expect("join resolves on the last file");
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(store.len(), 2);
    assert!(Toast::decode_failures(summary).is_some());
}

#[test]
fn drag_then_align_overrides_drop_position() {
    let config = LayoutConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut store = PlacementStore::new();

    let reference = place_upload(&mut store, png(100, 100), Role::Reference, &config, &mut rng)
        .unwrap();
    let el = place_upload(&mut store, png(40, 40), Role::Regular, &config, &mut rng).unwrap();

    let mut drag = DragSession::new();
    drag.begin(el);
    let workspace = Rect::new(Point::new(0.0, 80.0), 1200.0, 600.0);
    drag.drop_at(Point::new(700.0, 580.0), Some(workspace), &mut store);
    assert_eq!(store.get(el).unwrap().position(), Point::new(680.0, 480.0));

    store.align_to_reference().unwrap();
    assert_eq!(store.get(el).unwrap().position(), Point::new(430.0, 230.0));
    assert_eq!(store.get(reference).unwrap().position(), Point::new(400.0, 200.0));
}

#[test]
fn refused_second_reference_is_not_counted_as_unreadable() {
    let config = LayoutConfig::default();
    let mut rng = StdRng::seed_from_u64(13);
    let mut store = PlacementStore::new();
    place_upload(&mut store, png(50, 50), Role::Reference, &config, &mut rng).unwrap();

    let mut join = CompletionJoin::new(1);
    let outcome = place_upload(&mut store, png(60, 60), Role::Reference, &config, &mut rng);
    let completion = match &outcome {
        Ok(_) => Completion::Succeeded,
        Err(e) => Completion::from(e),
    };
    assert_eq!(completion, Completion::Rejected);

    let summary = join.report(completion).expect("single file resolves the join");
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.rejected, 1);
    assert!(Toast::decode_failures(summary).is_none());
    assert!(Toast::rejections(summary).is_some());
    assert_eq!(store.len(), 1);
}

#[test]
fn corrupt_file_counts_as_a_failure_not_a_rejection() {
    let config = LayoutConfig::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut store = PlacementStore::new();
    let err = place_upload(&mut store, b"GIF89a".to_vec(), Role::Regular, &config, &mut rng)
        .unwrap_err();
    assert_eq!(Completion::from(&err), Completion::Failed);
}
