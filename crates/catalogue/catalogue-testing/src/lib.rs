//! Catalogue UI Testing Utilities
//!
//! Playwright-inspired headless testing API for generated catalogue screens.
//!
//! # Quick start
//!
//! ```
//! use catalogue_testing::TestScreen;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestScreen::new(100, 60);
//!
//! // Draw UI content
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::BLUE))
//!     .draw(&mut t)
//!     .unwrap();
//!
//! // Register the component so it can be queried by test ID
//! t.register_component("custom_button", "Button", (10, 10), (40, 20));
//!
//! // Assertions
//! t.assert_pixel(20, 15, Rgb888::BLUE).unwrap();
//! t.assert_has_component("custom_button").unwrap();
//! ```
//!
//! # Golden screenshot testing
//!
//! ```no_run
//! # use catalogue_testing::TestScreen;
//! # let t = TestScreen::new(100, 100);
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! t.assert_matches_golden("tests/golden/button.png", 0).unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::path::Path;

use embedded_graphics::{
    pixelcolor::{Rgb888, RgbColor},
    prelude::*,
    primitives::Rectangle,
};

// ─────────────────────────────────────────────────────────────────────────────
// ComponentRef
// ─────────────────────────────────────────────────────────────────────────────

/// A UI component registered in the [`TestScreen`]'s component registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRef {
    /// The test identifier (analogous to `data-testid` in web testing).
    pub test_id: String,
    /// Broad component category, e.g. `"Button"`, `"Label"`, `"Container"`.
    pub component_type: String,
    /// Top-left corner in screen coordinates.
    pub position: (i32, i32),
    /// Width × height in pixels.
    pub size: (u32, u32),
}

impl ComponentRef {
    /// The bounding rectangle as an `embedded-graphics` [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the component's bounding box, `start + len / 2` on each
    /// axis as the layout solver computes it.
    pub fn center(&self) -> Point {
        let half = |len: u32| i32::try_from(len / 2).unwrap_or(i32::MAX);
        Point::new(
            self.position.0.saturating_add(half(self.size.0)),
            self.position.1.saturating_add(half(self.size.1)),
        )
    }

    /// `true` if `other` lies entirely inside this component.
    pub fn contains(&self, other: &ComponentRef) -> bool {
        let outer = self.bounds();
        let inner = other.bounds();
        outer.contains(inner.top_left)
            && inner
                .bottom_right()
                .map_or(true, |br| outer.contains(br))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestScreen
// ─────────────────────────────────────────────────────────────────────────────

/// Headless RGB screen for UI testing.
///
/// Provides:
/// - An in-memory framebuffer implementing [`DrawTarget`]
/// - A component registry queryable by test ID
/// - Pixel and region assertions
/// - Screenshot capture and golden-file comparison
#[derive(Debug, Clone)]
pub struct TestScreen {
    width: u32,
    height: u32,
    background: Rgb888,
    pixels: Vec<Rgb888>,
    components: Vec<ComponentRef>,
}

impl TestScreen {
    /// Create a white screen with exact pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgb888::WHITE)
    }

    /// Create a screen cleared to `background`.
    pub fn with_background(width: u32, height: u32, background: Rgb888) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            background,
            pixels: vec![background; len],
            components: Vec::new(),
        }
    }

    /// Screen width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Screen height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to the background colour. Components are kept.
    pub fn clear_display(&mut self) {
        self.pixels.fill(self.background);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Return the colour at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.pixels.get(self.index(x, y)?).copied()
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected colour.
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb888) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_pixel({x}, {y}): expected {}, got {}",
                hex(expected),
                hex(actual)
            ))
        }
    }

    /// Assert that every pixel inside `rect` has the given colour.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        for p in rect.points() {
            let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y)) else {
                return Err(format!("assert_region_uniform: {p:?} is off-screen"));
            };
            self.assert_pixel(x, y, color)
                .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel with the given colour.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no {} pixel found in {rect:?}",
                hex(color)
            ))
        }
    }

    /// Assert that `rect` holds at least two different colours.
    pub fn assert_region_non_uniform(&self, rect: Rectangle) -> Result<(), String> {
        let mut colors = rect.points().filter_map(|p| {
            self.pixel_at(u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?)
        });
        let first = colors.next();
        if colors.any(|c| Some(c) != first) {
            Ok(())
        } else {
            Err(format!("assert_region_non_uniform: {rect:?} is a single colour"))
        }
    }

    /// Count how many pixels in `rect` match `color`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Rgb888) -> usize {
        rect.points()
            .filter_map(|p| Some((u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?)))
            .filter(|&(x, y)| self.pixel_at(x, y) == Some(color))
            .count()
    }

    /// Count how many pixels in `rect` differ from the background.
    pub fn painted_pixel_count(&self, rect: Rectangle) -> usize {
        let total = rect.points().count();
        total.saturating_sub(self.pixel_count_of_color(rect, self.background))
    }

    /// Number of pixels that differ between two screens of equal size.
    ///
    /// Screens of different size compare every pixel as different.
    pub fn pixel_diff_count(&self, other: &TestScreen) -> usize {
        if self.width != other.width || self.height != other.height {
            return self.pixels.len().max(other.pixels.len());
        }
        self.pixels
            .iter()
            .zip(&other.pixels)
            .filter(|(a, b)| a != b)
            .count()
    }

    // ── Component registry ───────────────────────────────────────────────────

    /// Register (or update) a component by test ID.
    ///
    /// Call this after rendering a screen to annotate where each logical
    /// component sits, so tests can use [`query_by_test_id`](Self::query_by_test_id)
    /// to look it up.
    pub fn register_component(
        &mut self,
        test_id: &str,
        component_type: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) {
        if let Some(existing) = self.components.iter_mut().find(|c| c.test_id == test_id) {
            existing.component_type = component_type.to_string();
            existing.position = position;
            existing.size = size;
        } else {
            self.components.push(ComponentRef {
                test_id: test_id.to_string(),
                component_type: component_type.to_string(),
                position,
                size,
            });
        }
    }

    /// Register a component from its bounding rectangle.
    pub fn register_bounds(&mut self, test_id: &str, component_type: &str, bounds: Rectangle) {
        self.register_component(
            test_id,
            component_type,
            (bounds.top_left.x, bounds.top_left.y),
            (bounds.size.width, bounds.size.height),
        );
    }

    /// Remove all registered components.
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// Find a component by test ID.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ComponentRef> {
        self.components.iter().find(|c| c.test_id == test_id)
    }

    /// All components of one type, in registration order.
    pub fn query_by_type(&self, component_type: &str) -> Vec<&ComponentRef> {
        self.components
            .iter()
            .filter(|c| c.component_type == component_type)
            .collect()
    }

    /// Return all registered components.
    pub fn query_all(&self) -> &[ComponentRef] {
        &self.components
    }

    /// Return all registered components.
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    /// Total number of registered components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Assert that a component with `test_id` exists in the registry.
    pub fn assert_has_component(&self, test_id: &str) -> Result<(), String> {
        self.query_by_test_id(test_id)
            .ok_or_else(|| format!("Component '{test_id}' not found"))
            .map(|_| ())
    }

    /// Assert that `test_id` is registered with the given component type.
    pub fn assert_component_type(&self, test_id: &str, expected: &str) -> Result<(), String> {
        let c = self
            .query_by_test_id(test_id)
            .ok_or_else(|| format!("Component '{test_id}' not found"))?;
        if c.component_type == expected {
            Ok(())
        } else {
            Err(format!(
                "Component '{test_id}' is a {}, expected {expected}",
                c.component_type
            ))
        }
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// Copy the framebuffer into an [`image::RgbImage`].
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixel_at(x, y).unwrap_or(self.background);
            image::Rgb([c.r(), c.g(), c.b()])
        })
    }

    /// Save the current framebuffer as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        self.to_image().save(path.as_ref())?;
        Ok(())
    }

    /// Save the current framebuffer as the golden reference PNG.
    ///
    /// Parent directories are created automatically.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.screenshot(p)
    }

    /// Assert the current framebuffer matches a golden reference PNG.
    ///
    /// `threshold` is the maximum per-channel absolute difference that is still
    /// considered equal (0 = exact match; useful for font rendering differences).
    ///
    /// Set the `UPDATE_GOLDEN=1` environment variable to **update** the golden
    /// file instead of asserting:
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(
        &self,
        golden_path: impl AsRef<Path>,
        threshold: u8,
    ) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self.save_golden(golden_path).map_err(|e| {
                format!(
                    "Failed to save golden '{p}': {e}",
                    p = golden_path.display()
                )
            });
        }

        let current = self.to_image();
        let golden = image::open(golden_path)
            .map_err(|e| {
                format!(
                    "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                    golden_path.display()
                )
            })?
            .to_rgb8();

        if current.dimensions() != golden.dimensions() {
            let (cw, ch) = current.dimensions();
            let (gw, gh) = golden.dimensions();
            return Err(format!(
                "Dimension mismatch: screenshot is {cw}×{ch}, golden is {gw}×{gh}"
            ));
        }

        let diff_pixels = current
            .pixels()
            .zip(golden.pixels())
            .filter(|(cp, gp)| {
                cp.0.iter()
                    .zip(gp.0.iter())
                    .any(|(&a, &b)| a.abs_diff(b) > threshold)
            })
            .count();

        if diff_pixels > 0 {
            Err(format!(
                "{diff_pixels} pixels differ from golden '{}' (threshold={threshold})",
                golden_path.display()
            ))
        } else {
            Ok(())
        }
    }
}

fn hex(c: Rgb888) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}

impl OriginDimensions for TestScreen {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestScreen {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(i) = self.index(x, y) {
                if let Some(slot) = self.pixels.get_mut(i) {
                    *slot = color;
                }
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
