//! Images, activity indicators and progress bars.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use catalogue_layout::measure::Measure;

use crate::color;
use crate::draw::{centered_square, fill, px};
use crate::symbol::Symbol;

// ── Image ─────────────────────────────────────────────────────────────────

/// Symbol image, scaled to fit
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Image {
    symbol: Symbol,
    tint: Rgb888,
    background: Option<Rgb888>,
}

impl Image {
    /// Image showing `symbol` in the default tint.
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            tint: color::SYSTEM_BLUE,
            background: None,
        }
    }

    /// Symbol colour.
    pub const fn tint(mut self, color: Rgb888) -> Self {
        self.tint = color;
        self
    }

    /// Fill behind the symbol.
    pub const fn background(mut self, color: Rgb888) -> Self {
        self.background = Some(color);
        self
    }

    /// Displayed symbol.
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Symbol colour.
    pub const fn tint_color(&self) -> Rgb888 {
        self.tint
    }

    /// Symbols have a nominal 24 px size.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(24, 24))
    }

    /// Render image into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if let Some(bg) = self.background {
            fill(display, bounds, bg)?;
        }
        self.symbol.render(display, bounds, self.tint)
    }
}

// ── Activity indicator ────────────────────────────────────────────────────

/// Indicator size class.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum IndicatorSize {
    /// 20 px spinner.
    #[default]
    Medium,
    /// 37 px spinner.
    Large,
}

/// Spinning activity indicator
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ActivityIndicator {
    size: IndicatorSize,
    color: Rgb888,
    animating: bool,
}

impl ActivityIndicator {
    /// Animating indicator.
    pub const fn new(size: IndicatorSize) -> Self {
        Self {
            size,
            color: color::SYSTEM_GRAY,
            animating: true,
        }
    }

    /// Spoke colour.
    pub const fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Stopped indicators are hidden.
    pub const fn stopped(mut self) -> Self {
        self.animating = false;
        self
    }

    /// Size class.
    pub const fn size_class(&self) -> IndicatorSize {
        self.size
    }

    /// Whether the indicator is spinning.
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Spinner diameter.
    pub fn measure(&self) -> Measure {
        let side = match self.size {
            IndicatorSize::Medium => 20,
            IndicatorSize::Large => 37,
        };
        Measure::Fixed(Size::new(side, side))
    }

    /// Render indicator into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if !self.animating {
            return Ok(());
        }
        let area = centered_square(bounds, bounds.size.width.min(bounds.size.height));
        let c = area.center();
        let r = px(area.size.width / 2);
        let inner = r / 2;
        let stroke = PrimitiveStyle::with_stroke(self.color, (area.size.width / 10).max(1));
        // Eight spokes on the compass points and diagonals.
        let spokes = [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)];
        for (dx, dy) in spokes {
            let (ox, oy, ix, iy) = if dx != 0 && dy != 0 {
                (dx * r * 7 / 10, dy * r * 7 / 10, dx * inner * 7 / 10, dy * inner * 7 / 10)
            } else {
                (dx * r, dy * r, dx * inner, dy * inner)
            };
            Line::new(c + Point::new(ix, iy), c + Point::new(ox, oy))
                .into_styled(stroke)
                .draw(display)?;
        }
        Ok(())
    }
}

// ── Progress view ─────────────────────────────────────────────────────────

/// Progress bar component
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressView {
    progress: f32,
    progress_tint: Rgb888,
    track_tint: Rgb888,
}

impl ProgressView {
    /// Bar at `progress` (clamped to 0.0..=1.0).
    pub fn new(progress: f32) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            progress_tint: color::SYSTEM_BLUE,
            track_tint: color::SYSTEM_GRAY5,
        }
    }

    /// Set colors
    pub const fn tints(mut self, progress: Rgb888, track: Rgb888) -> Self {
        self.progress_tint = progress;
        self.track_tint = track;
        self
    }

    /// Completed fraction.
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Filled colour.
    pub const fn progress_tint(&self) -> Rgb888 {
        self.progress_tint
    }

    /// Track colour.
    pub const fn track_tint(&self) -> Rgb888 {
        self.track_tint
    }

    /// 4 px tall; width comes from the layout.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(0, 4))
    }

    /// Render progress bar into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill(display, bounds, self.track_tint)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let filled = (bounds.size.width as f32 * self.progress).round() as u32;
        if filled > 0 {
            fill(
                display,
                Rectangle::new(bounds.top_left, Size::new(filled, bounds.size.height)),
                self.progress_tint,
            )?;
        }
        Ok(())
    }
}
