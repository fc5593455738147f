//! Wheel pickers

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use serde::Serialize;

use catalogue_layout::measure::Measure;

use crate::color;
use crate::draw::{centered_text, panel, px};
use crate::font::TextStyle;

/// Height of the selection band.
const ROW_HEIGHT: u32 = 32;

/// Draws the shared wheel chrome: a selection band through the middle.
fn wheel<D>(display: &mut D, bounds: Rectangle) -> Result<Rectangle, D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let band = Rectangle::new(
        Point::new(
            bounds.top_left.x + 8,
            bounds.center().y - px(ROW_HEIGHT / 2),
        ),
        Size::new(bounds.size.width.saturating_sub(16), ROW_HEIGHT),
    );
    panel(display, band, 8, Some(color::SYSTEM_GRAY6), None)?;
    Ok(band)
}

/// Data-driven picker wheel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Picker {
    rows: Vec<String>,
}

impl Picker {
    /// Picker with no data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows shown in the wheel.
    pub fn rows<S: Into<String>>(mut self, rows: impl IntoIterator<Item = S>) -> Self {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Rows.
    pub fn row_titles(&self) -> &[String] {
        &self.rows
    }

    /// Standard wheel size.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(320, 216))
    }

    /// Render picker into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let band = wheel(display, bounds)?;
        if let Some(first) = self.rows.first() {
            centered_text(display, band, first, TextStyle::default(), color::LABEL)?;
        }
        Ok(())
    }
}

/// Which components a date picker edits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatePickerMode {
    /// Day, month and year.
    #[default]
    Date,
    /// Hours and minutes.
    Time,
    /// Both.
    DateAndTime,
}

impl DatePickerMode {
    /// Sample value drawn in the selection band.
    fn sample(self) -> &'static str {
        match self {
            DatePickerMode::Date => "Jan 1 2025",
            DatePickerMode::Time => "9 41 AM",
            DatePickerMode::DateAndTime => "Wed Jan 1  9 41 AM",
        }
    }
}

/// Visual style of a date picker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatePickerStyle {
    /// Spinning wheels.
    #[default]
    Wheels,
    /// Compact button that opens a calendar.
    Compact,
}

/// Date and time picker
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DatePicker {
    mode: DatePickerMode,
    style: DatePickerStyle,
}

impl DatePicker {
    /// Wheel picker in `mode`.
    pub const fn new(mode: DatePickerMode) -> Self {
        Self {
            mode,
            style: DatePickerStyle::Wheels,
        }
    }

    /// Set the visual style.
    pub const fn style(mut self, style: DatePickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Edited components.
    pub const fn mode(&self) -> DatePickerMode {
        self.mode
    }

    /// Visual style.
    pub const fn picker_style(&self) -> DatePickerStyle {
        self.style
    }

    /// Wheels use the standard picker size; compact pickers are a single row.
    pub fn measure(&self) -> Measure {
        match self.style {
            DatePickerStyle::Wheels => Measure::Fixed(Size::new(320, 216)),
            DatePickerStyle::Compact => Measure::Fixed(Size::new(120, 34)),
        }
    }

    /// Render picker into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let band = match self.style {
            DatePickerStyle::Wheels => wheel(display, bounds)?,
            DatePickerStyle::Compact => {
                panel(display, bounds, 6, Some(color::SYSTEM_GRAY6), None)?;
                bounds
            }
        };
        centered_text(display, band, self.mode.sample(), TextStyle::default(), color::LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_testing::TestScreen;

    #[test]
    fn test_unconfigured_picker_draws_band_only() {
        let mut screen = TestScreen::new(300, 200);
        let bounds = Rectangle::new(Point::zero(), Size::new(300, 200));
        Picker::new().render(&mut screen, bounds).unwrap();
        assert!(Picker::new().row_titles().is_empty());
        screen.assert_pixel(150, 100, color::SYSTEM_GRAY6).unwrap();
        assert_eq!(screen.pixel_count_of_color(bounds, color::LABEL), 0);
    }

    #[test]
    fn test_date_picker_modes() {
        let time = DatePicker::new(DatePickerMode::Time);
        assert_eq!(time.mode(), DatePickerMode::Time);
        assert_eq!(time.picker_style(), DatePickerStyle::Wheels);
        assert_eq!(time.measure(), Measure::Fixed(Size::new(320, 216)));
        let compact = time.style(DatePickerStyle::Compact);
        assert_eq!(compact.measure(), Measure::Fixed(Size::new(120, 34)));
    }

    #[test]
    fn test_date_picker_draws_sample() {
        let mut screen = TestScreen::new(320, 216);
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 216));
        DatePicker::new(DatePickerMode::DateAndTime)
            .render(&mut screen, bounds)
            .unwrap();
        screen.assert_region_contains(bounds, color::LABEL).unwrap();
    }
}
