//! Tables and collection grids

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use catalogue_layout::measure::Measure;

use crate::color;
use crate::draw::{fill, paragraph, px, Span, TextAlign};
use crate::font::TextStyle;

/// Default row height.
pub const ROW_HEIGHT: u32 = 44;

/// Plain-style table. Rows are child [`TableCell`]s.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Table;

impl Table {
    /// Empty table.
    pub const fn new() -> Self {
        Table
    }

    /// Tables have no natural size.
    pub fn measure(&self) -> Measure {
        Measure::EMPTY
    }

    /// Render the table background into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill(display, bounds, color::SYSTEM_BACKGROUND)
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    title: String,
}

impl TableCell {
    /// Default-style cell with a text label.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Row title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rows are [`ROW_HEIGHT`] tall.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(0, ROW_HEIGHT))
    }

    /// Render cell into `bounds`, with a separator along its bottom edge.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let text = Rectangle::new(
            bounds.top_left + Point::new(16, 0),
            Size::new(bounds.size.width.saturating_sub(32), bounds.size.height),
        );
        let style = TextStyle::default();
        paragraph(
            display,
            text,
            &[Span {
                text: &self.title,
                style,
                color: color::LABEL,
            }],
            style,
            TextAlign::Leading,
            1,
        )?;
        let y = bounds.top_left.y + px(bounds.size.height) - 1;
        Line::new(
            Point::new(bounds.top_left.x + 16, y),
            Point::new(bounds.top_left.x + px(bounds.size.width) - 1, y),
        )
        .into_styled(PrimitiveStyle::with_stroke(color::SYSTEM_GRAY5, 1))
        .draw(display)
    }
}

/// Flow-layout collection grid
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Collection {
    item_size: Size,
    spacing: u32,
    items: u32,
    background: Rgb888,
}

impl Collection {
    /// Empty grid with `item_size` cells and `spacing` between them.
    pub const fn new(item_size: Size, spacing: u32) -> Self {
        Self {
            item_size,
            spacing,
            items: 0,
            background: color::WHITE,
        }
    }

    /// Number of items shown.
    pub const fn items(mut self, count: u32) -> Self {
        self.items = count;
        self
    }

    /// Viewport fill.
    pub const fn background(mut self, color: Rgb888) -> Self {
        self.background = color;
        self
    }

    /// Cell size.
    pub const fn item_size(&self) -> Size {
        self.item_size
    }

    /// Gap between cells and rows.
    pub const fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Number of items.
    pub const fn item_count(&self) -> u32 {
        self.items
    }

    /// Cells per row at `width`; at least one.
    ///
    /// ```
    /// use catalogue_widgets::list::Collection;
    /// use embedded_graphics::geometry::Size;
    ///
    /// let grid = Collection::new(Size::new(80, 80), 10);
    /// assert_eq!(grid.columns(270), 3);
    /// assert_eq!(grid.columns(50), 1);
    /// ```
    pub fn columns(&self, width: u32) -> u32 {
        let pitch = self.item_size.width.saturating_add(self.spacing).max(1);
        (width.saturating_add(self.spacing) / pitch).max(1)
    }

    /// Collections have no natural size.
    pub fn measure(&self) -> Measure {
        Measure::EMPTY
    }

    /// Render grid into `bounds`, clipped to the viewport.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill(display, bounds, self.background)?;
        let columns = self.columns(bounds.size.width);
        let mut clipped = display.clipped(&bounds);
        for i in 0..self.items {
            let (col, row) = (i % columns, i / columns);
            let origin = bounds.top_left
                + Point::new(
                    px(col.saturating_mul(self.item_size.width.saturating_add(self.spacing))),
                    px(row.saturating_mul(self.item_size.height.saturating_add(self.spacing))),
                );
            fill(
                &mut clipped,
                Rectangle::new(origin, self.item_size),
                color::SYSTEM_GRAY5,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_testing::TestScreen;

    #[test]
    fn test_cell_draws_title_and_separator() {
        let mut screen = TestScreen::new(200, 44);
        let bounds = Rectangle::new(Point::zero(), Size::new(200, 44));
        TableCell::new("Row 1").render(&mut screen, bounds).unwrap();
        screen.assert_region_contains(bounds, color::LABEL).unwrap();
        screen.assert_pixel(100, 43, color::SYSTEM_GRAY5).unwrap();
    }

    #[test]
    fn test_empty_collection_is_plain_background() {
        let mut screen = TestScreen::with_background(200, 200, color::SYSTEM_GRAY6);
        let bounds = Rectangle::new(Point::zero(), Size::new(200, 200));
        Collection::new(Size::new(80, 80), 10)
            .render(&mut screen, bounds)
            .unwrap();
        screen.assert_region_uniform(bounds, color::WHITE).unwrap();
    }

    #[test]
    fn test_collection_items_clip_to_bounds() {
        let mut screen = TestScreen::new(200, 120);
        let bounds = Rectangle::new(Point::zero(), Size::new(180, 100));
        Collection::new(Size::new(80, 80), 10)
            .items(4)
            .render(&mut screen, bounds)
            .unwrap();
        // Two columns; the second row starts at y = 90 and is cut at 100.
        assert_eq!(screen.pixel_count_of_color(bounds, color::SYSTEM_GRAY5), 2 * 6400 + 2 * 800);
        screen.assert_pixel(10, 110, Rgb888::WHITE).unwrap();
    }
}
