//! Plain and scrolling containers

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

use catalogue_layout::measure::Measure;

use crate::draw::panel;

/// Decoration shared by containers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Chrome {
    /// Fill colour.
    pub background: Option<Rgb888>,
    /// Outline colour and width.
    pub border: Option<(Rgb888, u32)>,
    /// Corner radius.
    pub corner_radius: u32,
}

impl Chrome {
    fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        panel(display, bounds, self.corner_radius, self.background, self.border)
    }
}

/// Grouping view
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Container {
    chrome: Chrome,
}

impl Container {
    /// Transparent container.
    pub const fn new() -> Self {
        Self {
            chrome: Chrome {
                background: None,
                border: None,
                corner_radius: 0,
            },
        }
    }

    /// Fill colour.
    pub const fn background(mut self, color: Rgb888) -> Self {
        self.chrome.background = Some(color);
        self
    }

    /// Outline.
    pub const fn border(mut self, color: Rgb888, width: u32) -> Self {
        self.chrome.border = Some((color, width));
        self
    }

    /// Corner radius.
    pub const fn corner_radius(mut self, radius: u32) -> Self {
        self.chrome.corner_radius = radius;
        self
    }

    /// Decoration.
    pub const fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Containers take their size from relations.
    pub fn measure(&self) -> Measure {
        Measure::EMPTY
    }

    /// Render container background into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.chrome.render(display, bounds)
    }
}

/// Viewport onto content that may be taller than itself
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ScrollView {
    chrome: Chrome,
}

impl ScrollView {
    /// Undecorated scroll view.
    pub const fn new() -> Self {
        Self {
            chrome: Chrome {
                background: None,
                border: None,
                corner_radius: 0,
            },
        }
    }

    /// Outline.
    pub const fn border(mut self, color: Rgb888, width: u32) -> Self {
        self.chrome.border = Some((color, width));
        self
    }

    /// Fill colour.
    pub const fn background(mut self, color: Rgb888) -> Self {
        self.chrome.background = Some(color);
        self
    }

    /// Decoration.
    pub const fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Scroll views take their size from relations.
    pub fn measure(&self) -> Measure {
        Measure::EMPTY
    }

    /// Render viewport chrome into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.chrome.render(display, bounds)
    }
}
