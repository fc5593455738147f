//! Text metrics.
//!
//! Sizes are nominal point sizes as a designer would specify them (17 for
//! body text, 22 for titles). Layout uses a fixed-pitch approximation of the
//! proportional system font; rendering maps the size onto the closest
//! monospace bitmap font.

use embedded_graphics::mono_font::{
    ascii::{
        FONT_10X20, FONT_6X10, FONT_6X13, FONT_6X13_BOLD, FONT_8X13, FONT_8X13_BOLD, FONT_9X18,
        FONT_9X18_BOLD,
    },
    MonoFont,
};
use serde::{Deserialize, Serialize};

/// Default body text size.
pub const BODY_SIZE: u32 = 17;

/// Font size and weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Nominal point size.
    pub size: u32,
    /// Bold weight.
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(BODY_SIZE)
    }
}

impl TextStyle {
    /// Regular weight at `size`.
    pub const fn regular(size: u32) -> Self {
        Self { size, bold: false }
    }

    /// Bold weight at `size`.
    pub const fn bold(size: u32) -> Self {
        Self { size, bold: true }
    }

    /// Average advance per character.
    ///
    /// ```
    /// use catalogue_widgets::font::TextStyle;
    ///
    /// assert_eq!(TextStyle::regular(17).char_width(), 9);
    /// assert_eq!(TextStyle::regular(12).char_width(), 6);
    /// ```
    pub const fn char_width(&self) -> u32 {
        self.size.saturating_add(1) / 2
    }

    /// Line height including leading.
    ///
    /// ```
    /// use catalogue_widgets::font::TextStyle;
    ///
    /// assert_eq!(TextStyle::regular(17).line_height(), 21);
    /// assert_eq!(TextStyle::bold(22).line_height(), 27);
    /// ```
    pub const fn line_height(&self) -> u32 {
        self.size.saturating_add(self.size / 5).saturating_add(1)
    }

    /// Closest monospace bitmap font for rendering.
    pub fn mono_font(&self) -> &'static MonoFont<'static> {
        match (self.size, self.bold) {
            (0..=11, _) => &FONT_6X10,
            (12..=14, false) => &FONT_6X13,
            (12..=14, true) => &FONT_6X13_BOLD,
            (15..=16, false) => &FONT_8X13,
            (15..=16, true) => &FONT_8X13_BOLD,
            (17..=19, false) => &FONT_9X18,
            (17..=19, true) => &FONT_9X18_BOLD,
            _ => &FONT_10X20,
        }
    }
}
