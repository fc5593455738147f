//! Button component

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

use catalogue_layout::measure::Measure;

use crate::alert::AlertSpec;
use crate::color;
use crate::draw::{centered_square, centered_text, panel};
use crate::font::TextStyle;
use crate::symbol::Symbol;

/// What a button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonContent {
    /// Text title.
    Title(String),
    /// Icon only.
    Symbol(Symbol),
}

/// Button style presets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Fill; `None` leaves the container showing through.
    pub background: Option<Rgb888>,
    /// Title or icon colour.
    pub foreground: Rgb888,
    /// Outline colour.
    pub border: Option<Rgb888>,
    /// Corner radius.
    pub corner_radius: u32,
    /// Title font.
    pub font: TextStyle,
}

impl ButtonStyle {
    /// System button: tinted title, no background.
    pub const fn plain() -> Self {
        Self {
            background: None,
            foreground: color::SYSTEM_BLUE,
            border: None,
            corner_radius: 0,
            font: TextStyle::regular(17),
        }
    }

    /// Filled button with a white title.
    pub const fn filled(background: Rgb888, corner_radius: u32) -> Self {
        Self {
            background: Some(background),
            foreground: color::WHITE,
            border: None,
            corner_radius,
            font: TextStyle::regular(17),
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::plain()
    }
}

/// Button component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    content: ButtonContent,
    style: ButtonStyle,
    presents: Option<AlertSpec>,
}

impl Button {
    /// Button with a text title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            content: ButtonContent::Title(title.into()),
            style: ButtonStyle::plain(),
            presents: None,
        }
    }

    /// Icon-only button.
    pub fn symbol(symbol: Symbol) -> Self {
        Self {
            content: ButtonContent::Symbol(symbol),
            style: ButtonStyle::plain(),
            presents: None,
        }
    }

    /// Set button style
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Override the title / icon colour.
    pub fn tint(mut self, color: Rgb888) -> Self {
        self.style.foreground = color;
        self
    }

    /// Present `alert` when tapped.
    pub fn presents(mut self, alert: AlertSpec) -> Self {
        self.presents = Some(alert);
        self
    }

    /// Title or icon.
    pub fn content(&self) -> &ButtonContent {
        &self.content
    }

    /// Title text, if the button has one.
    pub fn title(&self) -> Option<&str> {
        match &self.content {
            ButtonContent::Title(t) => Some(t),
            ButtonContent::Symbol(_) => None,
        }
    }

    /// Active style.
    pub fn button_style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Modal shown on tap.
    pub fn tap_action(&self) -> Option<&AlertSpec> {
        self.presents.as_ref()
    }

    /// Natural size: title plus 8 px side insets, or a 30 px icon well.
    pub fn measure(&self) -> Measure {
        match &self.content {
            ButtonContent::Title(t) => {
                let chars = u32::try_from(t.chars().count()).unwrap_or(u32::MAX);
                Measure::Fixed(Size::new(
                    chars
                        .saturating_mul(self.style.font.char_width())
                        .saturating_add(16),
                    34,
                ))
            }
            ButtonContent::Symbol(_) => Measure::Fixed(Size::new(30, 30)),
        }
    }

    /// Render button into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        panel(
            display,
            bounds,
            self.style.corner_radius,
            self.style.background,
            self.style.border.map(|c| (c, 1)),
        )?;
        match &self.content {
            ButtonContent::Title(t) => {
                centered_text(display, bounds, t, self.style.font, self.style.foreground)
            }
            ButtonContent::Symbol(symbol) => {
                let side = bounds.size.width.min(bounds.size.height) * 3 / 5;
                symbol.render(display, centered_square(bounds, side), self.style.foreground)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::ActionRole;
    use catalogue_testing::TestScreen;

    #[test]
    fn test_titled_measure() {
        let button = Button::titled("Edit");
        assert_eq!(button.measure(), Measure::Fixed(Size::new(4 * 9 + 16, 34)));
        assert_eq!(button.title(), Some("Edit"));
    }

    #[test]
    fn test_symbol_measure() {
        let button = Button::symbol(Symbol::StarFill);
        assert_eq!(button.measure(), Measure::Fixed(Size::new(30, 30)));
        assert!(button.title().is_none());
    }

    #[test]
    fn test_style_presets() {
        assert!(ButtonStyle::plain().background.is_none());
        let filled = ButtonStyle::filled(color::SYSTEM_BLUE, 8);
        assert_eq!(filled.background, Some(color::SYSTEM_BLUE));
        assert_eq!(filled.foreground, color::WHITE);
    }

    #[test]
    fn test_presents_alert() {
        let button = Button::titled("Show Alert")
            .presents(AlertSpec::alert("Sample Alert", "Body").action("OK", ActionRole::Default));
        assert_eq!(button.tap_action().map(|a| a.title.as_str()), Some("Sample Alert"));
    }

    #[test]
    fn test_filled_button_paints_background() {
        let mut screen = TestScreen::new(240, 60);
        let bounds = Rectangle::new(Point::new(20, 8), Size::new(200, 44));
        Button::titled("Custom Button")
            .style(ButtonStyle::filled(color::SYSTEM_BLUE, 8))
            .render(&mut screen, bounds)
            .unwrap();
        screen.assert_pixel(30, 30, color::SYSTEM_BLUE).unwrap();
        screen.assert_region_contains(bounds, color::WHITE).unwrap();
        // Rounded corner leaves the page colour.
        screen.assert_pixel(20, 8, Rgb888::WHITE).unwrap();
    }
}
