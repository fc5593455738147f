//! Completeness tests for catalogue-testing utilities.
//! These tests verify the full testing API is functional.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use catalogue_testing::TestScreen;
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

// ── Basic utility tests ───────────────────────────────────────────────────

#[test]
fn test_screen_dimensions() {
    let t = TestScreen::new(390, 844);
    assert_eq!(t.width(), 390);
    assert_eq!(t.height(), 844);
    assert_eq!(t.size(), Size::new(390, 844));
    assert_eq!(t.component_count(), 0);
    assert!(t.query_by_test_id("nonexistent").is_none());
    assert!(t.query_all().is_empty());
}

#[test]
fn test_pixel_diff_count_same_image() {
    let mut t1 = TestScreen::new(20, 20);
    let mut t2 = TestScreen::new(20, 20);

    for t in [&mut t1, &mut t2] {
        Rectangle::new(Point::new(5, 5), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::BLUE))
            .draw(t)
            .unwrap();
    }

    assert_eq!(t1.pixel_diff_count(&t2), 0);
}

#[test]
fn test_pixel_diff_count_different_images() {
    let mut t1 = TestScreen::new(20, 20);
    let t2 = TestScreen::new(20, 20);

    Rectangle::new(Point::zero(), Size::new(20, 20))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
        .draw(&mut t1)
        .unwrap();

    assert_eq!(t1.pixel_diff_count(&t2), 400, "20x20 = 400 pixels should all differ");
}

#[test]
fn test_assert_region_non_uniform() {
    let mut t = TestScreen::new(50, 50);
    Rectangle::new(Point::new(10, 10), Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
        .draw(&mut t)
        .unwrap();
    let mixed = Rectangle::new(Point::new(10, 10), Size::new(20, 10));
    assert!(t.assert_region_non_uniform(mixed).is_ok());

    let uniform = Rectangle::new(Point::new(30, 30), Size::new(10, 10));
    assert!(t.assert_region_non_uniform(uniform).is_err());
}

#[test]
fn test_stacked_components_do_not_overlap() {
    let mut t = TestScreen::new(200, 100);
    t.register_component("regular_text_field", "TextField", (20, 20), (160, 44));
    t.register_component("email_text_field", "TextField", (20, 84), (160, 44));

    let a = t.query_by_test_id("regular_text_field").unwrap().bounds();
    let b = t.query_by_test_id("email_text_field").unwrap().bounds();
    assert_eq!(a.intersection(&b).size, Size::zero());
}

// ── Golden files ──────────────────────────────────────────────────────────

#[test]
fn test_snapshot_workflow_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut t = TestScreen::new(100, 50);
    Rectangle::new(Point::new(10, 10), Size::new(30, 20))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0x00, 0x7A, 0xFF)))
        .draw(&mut t)
        .unwrap();

    let path = dir.path().join("golden").join("snapshot.png");
    t.save_golden(&path).unwrap();
    assert!(path.exists(), "Golden file should be created");

    t.assert_matches_golden(&path, 0).unwrap();
}

#[test]
fn test_golden_fails_when_images_differ() {
    if std::env::var("UPDATE_GOLDEN").is_ok() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let mut t1 = TestScreen::new(50, 50);
    Rectangle::new(Point::zero(), Size::new(50, 50))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
        .draw(&mut t1)
        .unwrap();

    let path = dir.path().join("diff.png");
    t1.save_golden(&path).unwrap();

    let t2 = TestScreen::new(50, 50);
    let err = t2.assert_matches_golden(&path, 10).unwrap_err();
    assert!(err.starts_with("2500 pixels differ"), "{err}");
}

#[test]
fn test_golden_dimension_mismatch() {
    if std::env::var("UPDATE_GOLDEN").is_ok() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    TestScreen::new(10, 10).save_golden(&path).unwrap();
    let err = TestScreen::new(20, 10).assert_matches_golden(&path, 0).unwrap_err();
    assert!(err.contains("Dimension mismatch"), "{err}");
}

#[test]
fn test_missing_golden_mentions_update_flag() {
    if std::env::var("UPDATE_GOLDEN").is_ok() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let err = TestScreen::new(4, 4)
        .assert_matches_golden(dir.path().join("absent.png"), 0)
        .unwrap_err();
    assert!(err.contains("UPDATE_GOLDEN=1"), "{err}");
}
