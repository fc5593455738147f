//! Value controls: switches, sliders, steppers, segmented controls and page
//! dots.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
};

use catalogue_layout::measure::Measure;

use crate::color;
use crate::draw::{centered_square, centered_text, panel, px};
use crate::font::TextStyle;
use crate::symbol::Symbol;

// ── Switch ────────────────────────────────────────────────────────────────

/// On/off toggle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Switch {
    on: bool,
    on_tint: Rgb888,
}

impl Switch {
    /// Toggle in the given state.
    pub const fn new(on: bool) -> Self {
        Self {
            on,
            on_tint: color::SYSTEM_GREEN,
        }
    }

    /// Track colour when on.
    pub const fn on_tint(mut self, color: Rgb888) -> Self {
        self.on_tint = color;
        self
    }

    /// Current state.
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Track colour when on.
    pub const fn tint(&self) -> Rgb888 {
        self.on_tint
    }

    /// Standard 51×31 toggle.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(51, 31))
    }

    /// Render switch into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let track = if self.on {
            self.on_tint
        } else {
            color::SYSTEM_GRAY5
        };
        let radius = bounds.size.height / 2;
        panel(display, bounds, radius, Some(track), None)?;

        let knob = bounds.size.height.saturating_sub(4);
        let x = if self.on {
            bounds.top_left.x + px(bounds.size.width) - px(knob) - 2
        } else {
            bounds.top_left.x + 2
        };
        Circle::new(Point::new(x, bounds.top_left.y + 2), knob)
            .into_styled(PrimitiveStyle::with_fill(color::WHITE))
            .draw(display)
    }
}

// ── Slider ────────────────────────────────────────────────────────────────

/// Continuous value slider
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Slider {
    min: f32,
    max: f32,
    value: f32,
    min_track: Rgb888,
    max_track: Rgb888,
    thumb: Rgb888,
}

impl Slider {
    /// Slider over `min..=max` showing `value`. Bounds are not validated.
    pub const fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            min,
            max,
            value,
            min_track: color::SYSTEM_BLUE,
            max_track: color::SYSTEM_GRAY5,
            thumb: color::WHITE,
        }
    }

    /// Track colours either side of the thumb.
    pub const fn track_tints(mut self, min_track: Rgb888, max_track: Rgb888) -> Self {
        self.min_track = min_track;
        self.max_track = max_track;
        self
    }

    /// Thumb colour.
    pub const fn thumb_tint(mut self, color: Rgb888) -> Self {
        self.thumb = color;
        self
    }

    /// Lower bound.
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Current value.
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Thumb position as a fraction of the track; `0` for an empty range.
    pub fn fraction(&self) -> f32 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / range).clamp(0.0, 1.0)
    }

    /// Height of the thumb; width comes from the layout.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(0, 31))
    }

    /// Render slider into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let knob = bounds.size.height.min(28);
        let travel = bounds.size.width.saturating_sub(knob);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let offset = (travel as f32 * self.fraction()).round() as u32;
        let mid = bounds.center().y;
        let left = bounds.top_left.x + px(knob / 2);
        let split = left + px(offset);
        let right = bounds.top_left.x + px(bounds.size.width) - px(knob / 2);

        Line::new(Point::new(left, mid), Point::new(split, mid))
            .into_styled(PrimitiveStyle::with_stroke(self.min_track, 4))
            .draw(display)?;
        Line::new(Point::new(split, mid), Point::new(right, mid))
            .into_styled(PrimitiveStyle::with_stroke(self.max_track, 4))
            .draw(display)?;
        Circle::with_center(Point::new(split, mid), knob)
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .fill_color(self.thumb)
                    .stroke_color(color::SYSTEM_GRAY3)
                    .stroke_width(1)
                    .build(),
            )
            .draw(display)
    }
}

// ── Stepper ───────────────────────────────────────────────────────────────

/// Increment / decrement control
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stepper {
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    tint: Option<Rgb888>,
}

impl Stepper {
    /// Stepper over `min..=max` in increments of `step`.
    pub const fn new(min: f32, max: f32, step: f32, value: f32) -> Self {
        Self {
            min,
            max,
            step,
            value,
            tint: None,
        }
    }

    /// Symbol colour.
    pub const fn tint(mut self, color: Rgb888) -> Self {
        self.tint = Some(color);
        self
    }

    /// Lower bound.
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Increment.
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Current value.
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Value after one tap on `+`, clamped to the maximum.
    pub fn incremented(&self) -> f32 {
        (self.value + self.step).min(self.max)
    }

    /// Value after one tap on `-`, clamped to the minimum.
    pub fn decremented(&self) -> f32 {
        (self.value - self.step).max(self.min)
    }

    /// Standard 94×32 stepper.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(94, 32))
    }

    /// Render stepper into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let ink = self.tint.unwrap_or(color::LABEL);
        panel(display, bounds, 8, Some(color::SYSTEM_GRAY6), None)?;
        let half = bounds.size.width / 2;
        let mid = bounds.top_left.x + px(half);
        Line::new(
            Point::new(mid, bounds.top_left.y + 6),
            Point::new(mid, bounds.top_left.y + px(bounds.size.height) - 7),
        )
        .into_styled(PrimitiveStyle::with_stroke(color::SYSTEM_GRAY3, 1))
        .draw(display)?;

        let stroke = PrimitiveStyle::with_stroke(ink, 2);
        let arm = px(bounds.size.height / 5);
        let y = bounds.center().y;
        let minus = bounds.top_left.x + px(half / 2);
        let plus = mid + px(half / 2);
        Line::new(Point::new(minus - arm, y), Point::new(minus + arm, y))
            .into_styled(stroke)
            .draw(display)?;
        Line::new(Point::new(plus - arm, y), Point::new(plus + arm, y))
            .into_styled(stroke)
            .draw(display)?;
        Line::new(Point::new(plus, y - arm), Point::new(plus, y + arm))
            .into_styled(stroke)
            .draw(display)
    }
}

// ── Segmented control ─────────────────────────────────────────────────────

/// One segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text segment.
    Title(String),
    /// Icon segment.
    Symbol(Symbol),
}

/// Mutually exclusive segment picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedControl {
    segments: Vec<Segment>,
    selected: Option<usize>,
}

impl SegmentedControl {
    /// Control with text segments.
    pub fn titled<S: Into<String>>(titles: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: titles.into_iter().map(|t| Segment::Title(t.into())).collect(),
            selected: None,
        }
    }

    /// Control with icon segments.
    pub fn symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            segments: symbols.into_iter().map(Segment::Symbol).collect(),
            selected: None,
        }
    }

    /// Select a segment. Out-of-range indices leave nothing highlighted.
    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Selected index.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Each segment is sized to its content with 14 px side insets.
    pub fn measure(&self) -> Measure {
        let style = TextStyle::regular(13);
        let widest = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Title(t) => u32::try_from(t.chars().count())
                    .unwrap_or(u32::MAX)
                    .saturating_mul(style.char_width()),
                Segment::Symbol(_) => 20,
            })
            .max()
            .unwrap_or(0)
            .saturating_add(28);
        let count = u32::try_from(self.segments.len()).unwrap_or(u32::MAX);
        Measure::Fixed(Size::new(widest.saturating_mul(count), 32))
    }

    /// Render control into `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        panel(display, bounds, 8, Some(color::SYSTEM_GRAY5), None)?;
        let count = u32::try_from(self.segments.len()).unwrap_or(0);
        if count == 0 {
            return Ok(());
        }
        let width = bounds.size.width / count;
        for (i, segment) in self.segments.iter().enumerate() {
            let index = u32::try_from(i).unwrap_or(0);
            let cell = Rectangle::new(
                bounds.top_left + Point::new(px(width.saturating_mul(index)), 0),
                Size::new(width, bounds.size.height),
            );
            if self.selected == Some(i) {
                let inset = Rectangle::new(
                    cell.top_left + Point::new(2, 2),
                    Size::new(
                        cell.size.width.saturating_sub(4),
                        cell.size.height.saturating_sub(4),
                    ),
                );
                panel(display, inset, 7, Some(color::WHITE), None)?;
            }
            match segment {
                Segment::Title(t) => {
                    centered_text(display, cell, t, TextStyle::regular(13), color::LABEL)?
                }
                Segment::Symbol(symbol) => {
                    symbol.render(display, centered_square(cell, 18), color::LABEL)?
                }
            }
        }
        Ok(())
    }
}

// ── Page control ──────────────────────────────────────────────────────────

/// Row of page dots
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageControl {
    pages: u32,
    current: u32,
    indicator: Rgb888,
    current_indicator: Rgb888,
}

impl PageControl {
    /// `pages` dots with `current` highlighted.
    pub const fn new(pages: u32, current: u32) -> Self {
        Self {
            pages,
            current,
            indicator: color::SYSTEM_GRAY3,
            current_indicator: color::SYSTEM_BLUE,
        }
    }

    /// Dot colours.
    pub const fn tints(mut self, indicator: Rgb888, current: Rgb888) -> Self {
        self.indicator = indicator;
        self.current_indicator = current;
        self
    }

    /// Number of pages.
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Highlighted page.
    pub const fn current_page(&self) -> u32 {
        self.current
    }

    /// 16 px per dot plus 8 px ends.
    pub fn measure(&self) -> Measure {
        Measure::Fixed(Size::new(self.pages.saturating_mul(16).saturating_add(16), 28))
    }

    /// Render dots centred in `bounds`
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let row = px(self.pages.saturating_mul(16));
        let start = bounds.center().x - row / 2 + 8;
        let y = bounds.center().y;
        for page in 0..self.pages {
            let tint = if page == self.current {
                self.current_indicator
            } else {
                self.indicator
            };
            Circle::with_center(Point::new(start + px(page.saturating_mul(16)), y), 8)
                .into_styled(PrimitiveStyle::with_fill(tint))
                .draw(display)?;
        }
        Ok(())
    }
}
