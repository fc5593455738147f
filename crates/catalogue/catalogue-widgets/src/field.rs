//! Text input components

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use serde::Serialize;

use catalogue_layout::measure::Measure;

use crate::color;
use crate::draw::{paragraph, Span, TextAlign};
use crate::font::TextStyle;

/// Software keyboard requested by a field.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Keyboard {
    /// Full keyboard.
    #[default]
    Default,
    /// Keyboard with `@` and `.` keys.
    EmailAddress,
    /// Digits only.
    NumberPad,
}

/// Field outline.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// No outline.
    #[default]
    None,
    /// Thin rounded outline.
    RoundedRect,
}

/// Single-line text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    placeholder: String,
    keyboard: Keyboard,
    border: BorderStyle,
    secure: bool,
}

impl TextField {
    /// Empty field showing `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            keyboard: Keyboard::Default,
            border: BorderStyle::None,
            secure: false,
        }
    }

    /// Set the keyboard type.
    pub fn keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Set the outline.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Mask entered text.
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Keyboard type.
    pub fn keyboard_type(&self) -> Keyboard {
        self.keyboard
    }

    /// Whether entry is masked.
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Default field height; width comes from the layout.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(0, 34))
    }

    /// Render field into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.border == BorderStyle::RoundedRect {
            crate::draw::panel(
                display,
                bounds,
                5,
                Some(color::SYSTEM_BACKGROUND),
                Some((color::SYSTEM_GRAY3, 1)),
            )?;
        }
        let inner = Rectangle::new(
            bounds.top_left + Point::new(8, 0),
            Size::new(bounds.size.width.saturating_sub(16), bounds.size.height),
        );
        let style = TextStyle::default();
        paragraph(
            display,
            inner,
            &[Span {
                text: &self.placeholder,
                style,
                color: color::PLACEHOLDER,
            }],
            style,
            TextAlign::Leading,
            1,
        )
    }
}

/// Multi-line text view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    text: String,
    font: TextStyle,
    editable: bool,
    background: Option<Rgb888>,
    border: Option<(Rgb888, u32)>,
    corner_radius: u32,
}

impl TextView {
    /// Editable view holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: TextStyle::default(),
            editable: true,
            background: None,
            border: None,
            corner_radius: 0,
        }
    }

    /// Set the font.
    pub fn font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Make the view read-only.
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Set the fill.
    pub fn background(mut self, color: Rgb888) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the outline.
    pub fn border(mut self, color: Rgb888, width: u32) -> Self {
        self.border = Some((color, width));
        self
    }

    /// Set the corner radius.
    pub fn corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the user can edit the contents.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Text views scroll their contents; they have no natural height.
    pub fn measure(&self) -> Measure {
        Measure::EMPTY
    }

    /// Render view into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        crate::draw::panel(display, bounds, self.corner_radius, self.background, self.border)?;
        let inner = Rectangle::new(
            bounds.top_left + Point::new(5, 8),
            Size::new(
                bounds.size.width.saturating_sub(10),
                bounds.size.height.saturating_sub(16),
            ),
        );
        paragraph(
            display,
            inner,
            &[Span {
                text: &self.text,
                style: self.font,
                color: color::LABEL,
            }],
            self.font,
            TextAlign::Leading,
            0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_testing::TestScreen;

    #[test]
    fn test_field_builder() {
        let field = TextField::new("PIN Field")
            .border(BorderStyle::RoundedRect)
            .keyboard(Keyboard::NumberPad)
            .secure();
        assert!(field.is_secure());
        assert_eq!(field.keyboard_type(), Keyboard::NumberPad);
        assert_eq!(field.placeholder(), "PIN Field");
    }

    #[test]
    fn test_field_renders_outline_and_placeholder() {
        let mut screen = TestScreen::new(200, 44);
        let bounds = Rectangle::new(Point::zero(), Size::new(200, 44));
        TextField::new("Regular Text Field")
            .border(BorderStyle::RoundedRect)
            .render(&mut screen, bounds)
            .unwrap();
        screen.assert_region_contains(bounds, color::SYSTEM_GRAY3).unwrap();
        screen.assert_region_contains(bounds, color::PLACEHOLDER).unwrap();
    }

    #[test]
    fn test_text_view_read_only() {
        let view = TextView::new("This is a read-only text view.")
            .read_only()
            .background(color::SYSTEM_GRAY5);
        assert!(!view.is_editable());
        let mut screen = TestScreen::new(120, 100);
        let bounds = Rectangle::new(Point::zero(), Size::new(120, 100));
        view.render(&mut screen, bounds).unwrap();
        screen.assert_pixel(1, 99, color::SYSTEM_GRAY5).unwrap();
    }
}
