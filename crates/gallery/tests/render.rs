//! Rendering finalized regions onto the headless test canvas.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use catalogue_testing::TestScreen;
use catalogue_widgets::color;
use embedded_graphics::prelude::*;
use gallery::prelude::*;

fn draw(key: &str, label: &str) -> (FinalizedRegion, TestScreen) {
    let done = build_region(key, label).finalize(350).unwrap();
    let mut screen = TestScreen::new(350, done.height());
    render(&done, &mut screen).unwrap();
    for placement in placements(&done) {
        screen.register_bounds(placement.identifier, placement.kind, placement.bounds);
    }
    (done, screen)
}

#[test]
fn every_identifier_is_registered() {
    for entry in list_categories() {
        let (done, screen) = draw(entry.key.as_str(), entry.display_label);
        assert_eq!(screen.component_count(), done.iter().count());
        for (_, element, _) in done.iter() {
            screen.assert_has_component(element.identifier()).unwrap();
        }
    }
}

#[test]
fn filled_buttons_paint_inside_bounds() {
    let (_, screen) = draw("button", "Buttons");
    let custom = screen.query_by_test_id("custom_button").unwrap().bounds();
    assert!(screen.pixel_count_of_color(custom, color::SYSTEM_BLUE) > 0);
    assert!(screen.pixel_count_of_color(custom, color::WHITE) > 0);
    screen.assert_component_type("custom_button", "button").unwrap();

    let (_, screen) = draw("alert", "Alerts & Action Sheets");
    let sheet = screen
        .query_by_test_id("show_action_sheet_button")
        .unwrap()
        .bounds();
    assert!(screen.pixel_count_of_color(sheet, color::SYSTEM_GREEN) > 0);
}

#[test]
fn container_background_fills_region() {
    let (done, screen) = draw("page-indicator", "Page Indicators");
    // Just inside the rounded corner.
    screen.assert_pixel(20, 5, color::SYSTEM_GRAY6).unwrap();
    let dots = done.frame("page_control").unwrap();
    screen.assert_region_non_uniform(dots).unwrap();
}

#[test]
fn table_rows_stay_inside_viewport() {
    let (done, screen) = draw("table", "Tables");
    let table = done.frame("demo_table_view").unwrap();
    // Row 5 starts at y = 196 and would end at 240; everything below the
    // table (y 220..240) is container padding.
    let below = embedded_graphics::primitives::Rectangle::new(
        Point::new(table.top_left.x, 221),
        Size::new(table.size.width, 18),
    );
    screen.assert_region_uniform(below, color::SYSTEM_GRAY6).unwrap();
    assert_eq!(screen.query_by_type("table-cell").len(), 5);
}

#[test]
fn screenshot_writes_png() {
    let (_, screen) = draw("slider", "Sliders");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slider.png");
    screen.screenshot(&path).unwrap();
    assert!(path.exists());
}
