//! Named glyphs drawn with primitives.
//!
//! Each symbol mirrors a system symbol name so that automation tests can
//! assert on the same names a designer would use.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{
        Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment, Triangle,
    },
};

use crate::draw::{centered_square, px};

/// Symbols used by the catalogue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Filled star.
    StarFill,
    /// Landscape photo.
    Photo,
    /// Filled person in a circle.
    PersonCircleFill,
    /// Filled person.
    PersonFill,
    /// Back chevron.
    ChevronLeft,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Share.
    SquareAndArrowUp,
    /// Bookmark.
    Bookmark,
    /// Bulleted list.
    ListBullet,
    /// 2×2 grid.
    SquareGrid2x2,
    /// Filled house.
    HouseFill,
    /// Search glass.
    MagnifyingGlass,
    /// Settings gear.
    Gear,
}

impl Symbol {
    /// All symbols.
    pub const ALL: [Symbol; 14] = [
        Symbol::StarFill,
        Symbol::Photo,
        Symbol::PersonCircleFill,
        Symbol::PersonFill,
        Symbol::ChevronLeft,
        Symbol::ArrowLeft,
        Symbol::ArrowRight,
        Symbol::SquareAndArrowUp,
        Symbol::Bookmark,
        Symbol::ListBullet,
        Symbol::SquareGrid2x2,
        Symbol::HouseFill,
        Symbol::MagnifyingGlass,
        Symbol::Gear,
    ];

    /// System symbol name.
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::StarFill => "star.fill",
            Symbol::Photo => "photo",
            Symbol::PersonCircleFill => "person.circle.fill",
            Symbol::PersonFill => "person.fill",
            Symbol::ChevronLeft => "chevron.left",
            Symbol::ArrowLeft => "arrow.left",
            Symbol::ArrowRight => "arrow.right",
            Symbol::SquareAndArrowUp => "square.and.arrow.up",
            Symbol::Bookmark => "bookmark",
            Symbol::ListBullet => "list.bullet",
            Symbol::SquareGrid2x2 => "square.grid.2x2",
            Symbol::HouseFill => "house.fill",
            Symbol::MagnifyingGlass => "magnifyingglass",
            Symbol::Gear => "gear",
        }
    }

    /// Looks a symbol up by its system name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Draw the symbol centred in `bounds`, scaled to the shorter side.
    pub fn render<D>(self, display: &mut D, bounds: Rectangle, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let side = bounds.size.width.min(bounds.size.height);
        let area = centered_square(bounds, side);
        let s = px(area.size.width);
        if s < 4 {
            return Ok(());
        }
        let o = area.top_left;
        let at = |x: i32, y: i32| o + Point::new(x, y);
        let fill = PrimitiveStyle::with_fill(color);
        let weight = (area.size.width / 12).max(1);
        let stroke = PrimitiveStyle::with_stroke(color, weight);
        // Closed outlines stay inside the glyph square.
        let outline = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(weight)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        match self {
            Symbol::StarFill => {
                Triangle::new(at(s / 2, 0), at(s / 5, s), at(s, s * 2 / 5))
                    .into_styled(fill)
                    .draw(display)?;
                Triangle::new(at(s / 2, 0), at(s * 4 / 5, s), at(0, s * 2 / 5))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Symbol::Photo => {
                Rectangle::new(at(0, s / 6), Size::new(area.size.width, area.size.width * 2 / 3))
                    .into_styled(outline)
                    .draw(display)?;
                Triangle::new(at(s / 8, s * 3 / 4), at(s * 3 / 8, s * 2 / 5), at(s * 5 / 8, s * 3 / 4))
                    .into_styled(fill)
                    .draw(display)?;
                Circle::new(at(s * 5 / 8, s / 4), area.size.width / 6)
                    .into_styled(fill)
                    .draw(display)?;
            }
            Symbol::PersonCircleFill => {
                Circle::new(o, area.size.width)
                    .into_styled(outline)
                    .draw(display)?;
                Self::person(display, Rectangle::new(at(s / 4, s / 5), Size::new(area.size.width / 2, area.size.width * 3 / 5)), color)?;
            }
            Symbol::PersonFill => Self::person(display, area, color)?,
            Symbol::ChevronLeft | Symbol::ArrowLeft => {
                Line::new(at(s * 2 / 3, 0), at(s / 4, s / 2))
                    .into_styled(stroke)
                    .draw(display)?;
                Line::new(at(s / 4, s / 2), at(s * 2 / 3, s))
                    .into_styled(stroke)
                    .draw(display)?;
                if self == Symbol::ArrowLeft {
                    Line::new(at(s / 4, s / 2), at(s, s / 2))
                        .into_styled(stroke)
                        .draw(display)?;
                }
            }
            Symbol::ArrowRight => {
                Line::new(at(s / 3, 0), at(s * 3 / 4, s / 2))
                    .into_styled(stroke)
                    .draw(display)?;
                Line::new(at(s * 3 / 4, s / 2), at(s / 3, s))
                    .into_styled(stroke)
                    .draw(display)?;
                Line::new(at(0, s / 2), at(s * 3 / 4, s / 2))
                    .into_styled(stroke)
                    .draw(display)?;
            }
            Symbol::SquareAndArrowUp => {
                Rectangle::new(at(s / 6, s * 2 / 5), Size::new(area.size.width * 2 / 3, area.size.width * 3 / 5))
                    .into_styled(stroke)
                    .draw(display)?;
                Line::new(at(s / 2, 0), at(s / 2, s * 2 / 3))
                    .into_styled(stroke)
                    .draw(display)?;
                Triangle::new(at(s / 2, 0), at(s / 3, s / 5), at(s * 2 / 3, s / 5))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Symbol::Bookmark => {
                Line::new(at(s / 4, 0), at(s / 4, s)).into_styled(stroke).draw(display)?;
                Line::new(at(s * 3 / 4, 0), at(s * 3 / 4, s)).into_styled(stroke).draw(display)?;
                Line::new(at(s / 4, 0), at(s * 3 / 4, 0)).into_styled(stroke).draw(display)?;
                Line::new(at(s / 4, s), at(s / 2, s * 3 / 4)).into_styled(stroke).draw(display)?;
                Line::new(at(s / 2, s * 3 / 4), at(s * 3 / 4, s)).into_styled(stroke).draw(display)?;
            }
            Symbol::ListBullet => {
                for row in 0..3 {
                    let y = s / 6 + row * s / 3;
                    Circle::with_center(at(s / 8, y), (area.size.width / 8).max(2))
                        .into_styled(fill)
                        .draw(display)?;
                    Line::new(at(s / 3, y), at(s, y)).into_styled(stroke).draw(display)?;
                }
            }
            Symbol::SquareGrid2x2 => {
                let cell = Size::new(area.size.width * 2 / 5, area.size.width * 2 / 5);
                for (cx, cy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    Rectangle::new(at(cx * s * 3 / 5, cy * s * 3 / 5), cell)
                        .into_styled(stroke)
                        .draw(display)?;
                }
            }
            Symbol::HouseFill => {
                Triangle::new(at(s / 2, 0), at(0, s / 2), at(s, s / 2))
                    .into_styled(fill)
                    .draw(display)?;
                Rectangle::new(at(s / 6, s / 2), Size::new(area.size.width * 2 / 3, area.size.width / 2))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Symbol::MagnifyingGlass => {
                Circle::new(o, area.size.width * 2 / 3)
                    .into_styled(stroke)
                    .draw(display)?;
                Line::new(at(s * 3 / 5, s * 3 / 5), at(s, s))
                    .into_styled(stroke)
                    .draw(display)?;
            }
            Symbol::Gear => {
                Circle::new(o, area.size.width)
                    .into_styled(outline)
                    .draw(display)?;
                Circle::with_center(area.center(), area.size.width / 3)
                    .into_styled(fill)
                    .draw(display)?;
            }
        }
        Ok(())
    }

    fn person<D>(display: &mut D, area: Rectangle, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let w = area.size.width;
        let head = (w / 2).max(1);
        Circle::new(area.top_left + Point::new(px(w / 4), 0), head)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)?;
        Rectangle::new(
            area.top_left + Point::new(0, px(head + head / 4)),
            Size::new(w, area.size.height.saturating_sub(head + head / 4)),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_testing::TestScreen;

    #[test]
    fn test_names_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_name(symbol.name()), Some(symbol));
        }
        assert_eq!(Symbol::from_name("not.a.symbol"), None);
    }

    #[test]
    fn test_every_symbol_paints_inside_bounds() {
        let bounds = Rectangle::new(Point::new(8, 8), Size::new(24, 24));
        for symbol in Symbol::ALL {
            let mut screen = TestScreen::new(40, 40);
            symbol.render(&mut screen, bounds, Rgb888::BLACK).unwrap();
            let outside = screen.pixel_count_of_color(
                Rectangle::new(Point::zero(), Size::new(40, 40)),
                Rgb888::BLACK,
            ) - screen.pixel_count_of_color(bounds, Rgb888::BLACK);
            assert!(screen.painted_pixel_count(bounds) > 0, "{} drew nothing", symbol.name());
            assert!(outside <= 24, "{} spilled {outside} pixels", symbol.name());
        }
    }

    #[test]
    fn test_outlined_symbols_stay_inside_large_bounds() {
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(100, 100));
        for symbol in [Symbol::Photo, Symbol::PersonCircleFill] {
            let mut screen = TestScreen::new(120, 120);
            symbol.render(&mut screen, bounds, Rgb888::BLACK).unwrap();
            let all = Rectangle::new(Point::zero(), Size::new(120, 120));
            assert_eq!(
                screen.painted_pixel_count(all),
                screen.painted_pixel_count(bounds),
                "{} painted outside its bounds",
                symbol.name()
            );
        }
    }
}
