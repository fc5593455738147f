//! Label component

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

use catalogue_layout::measure::Measure;

use crate::color;
use crate::draw::{paragraph, Span, TextAlign};
use crate::font::TextStyle;

/// A styled run inside an attributed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Run text.
    pub text: String,
    /// Font override; `None` uses the label's font.
    pub style: Option<TextStyle>,
    /// Colour override; `None` uses the label's colour.
    pub color: Option<Rgb888>,
}

/// Label component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    runs: Vec<TextRun>,
    style: TextStyle,
    color: Rgb888,
    align: TextAlign,
    max_lines: u32,
}

impl Label {
    /// Single-line label in the body font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun {
                text: text.into(),
                style: None,
                color: None,
            }],
            style: TextStyle::default(),
            color: color::LABEL,
            align: TextAlign::Leading,
            max_lines: 1,
        }
    }

    /// Append a styled run.
    pub fn run(mut self, text: impl Into<String>, style: TextStyle, color: Rgb888) -> Self {
        self.runs.push(TextRun {
            text: text.into(),
            style: Some(style),
            color: Some(color),
        });
        self
    }

    /// Set the base font.
    pub fn font(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the base colour.
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Set horizontal alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Cap the number of lines; `0` wraps without limit.
    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = lines;
        self
    }

    /// Wrap without limit.
    pub fn multiline(self) -> Self {
        self.max_lines(0)
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Styled runs.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Base font.
    pub fn text_style(&self) -> TextStyle {
        self.style
    }

    /// Base colour.
    pub fn text_color(&self) -> Rgb888 {
        self.color
    }

    /// Alignment.
    pub fn alignment(&self) -> TextAlign {
        self.align
    }

    /// Line cap.
    pub fn line_limit(&self) -> u32 {
        self.max_lines
    }

    /// Wrapping text measured on the base font's grid.
    pub fn measure(&self) -> Measure {
        let chars = self
            .runs
            .iter()
            .map(|r| r.text.chars().count())
            .sum::<usize>();
        Measure::Text {
            chars: u32::try_from(chars).unwrap_or(u32::MAX),
            char_width: self.style.char_width(),
            line_height: self.style.line_height(),
            max_lines: self.max_lines,
        }
    }

    /// Render label into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let spans: Vec<Span<'_>> = self
            .runs
            .iter()
            .map(|r| Span {
                text: &r.text,
                style: r.style.unwrap_or(self.style),
                color: r.color.unwrap_or(self.color),
            })
            .collect();
        paragraph(display, bounds, &spans, self.style, self.align, self.max_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_testing::TestScreen;

    #[test]
    fn test_label_defaults() {
        let label = Label::new("Title Label");
        assert_eq!(label.text(), "Title Label");
        assert_eq!(label.text_style(), TextStyle::regular(17));
        assert_eq!(label.line_limit(), 1);
        assert_eq!(label.alignment(), TextAlign::Leading);
    }

    #[test]
    fn test_runs_concatenate() {
        let label = Label::new("Styled text with ").run(
            "different attributes",
            TextStyle::bold(16),
            color::SYSTEM_BLUE,
        );
        assert_eq!(label.text(), "Styled text with different attributes");
        assert_eq!(label.runs().len(), 2);
        assert_eq!(label.runs()[1].color, Some(color::SYSTEM_BLUE));
    }

    #[test]
    fn test_measure_single_line_caps_height() {
        let label = Label::new("a long subtitle that would wrap");
        // 31 chars * 9 px at 100 px wide would need 3 lines; capped to 1.
        assert_eq!(label.measure().height_for_width(100), 21);
    }

    #[test]
    fn test_measure_multiline_wraps() {
        let label = Label::new("x".repeat(40)).font(TextStyle::regular(14)).multiline();
        // 40 * 7 = 280 px over 100 px -> 3 lines of 17 px
        assert_eq!(label.measure().height_for_width(100), 51);
    }

    #[test]
    fn test_attributed_run_draws_in_its_colour() {
        let mut screen = TestScreen::new(360, 30);
        let bounds = Rectangle::new(Point::zero(), Size::new(360, 30));
        Label::new("Styled text with ")
            .run("different attributes", TextStyle::bold(16), color::SYSTEM_BLUE)
            .render(&mut screen, bounds)
            .unwrap();
        screen.assert_region_contains(bounds, color::SYSTEM_BLUE).unwrap();
        screen.assert_region_contains(bounds, color::LABEL).unwrap();
    }
}
