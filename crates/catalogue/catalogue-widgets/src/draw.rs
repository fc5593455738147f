//! Shared drawing helpers.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
};

use crate::font::TextStyle;

/// Horizontal text alignment.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Leading,
    /// Centred.
    Center,
    /// Flush right.
    Trailing,
}

/// Pixel count to signed coordinate.
pub(crate) fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Fill and/or stroke a rectangle, rounded when `radius > 0`.
pub(crate) fn panel<D>(
    display: &mut D,
    rect: Rectangle,
    radius: u32,
    fill: Option<Rgb888>,
    stroke: Option<(Rgb888, u32)>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if fill.is_none() && stroke.is_none() {
        return Ok(());
    }
    let mut builder = PrimitiveStyleBuilder::new();
    if let Some(color) = fill {
        builder = builder.fill_color(color);
    }
    if let Some((color, width)) = stroke {
        builder = builder.stroke_color(color).stroke_width(width);
    }
    let style = builder.build();
    if radius > 0 {
        RoundedRectangle::new(rect, CornerRadii::new(Size::new(radius, radius)))
            .into_styled(style)
            .draw(display)
    } else {
        rect.into_styled(style).draw(display)
    }
}

/// Solid rectangle.
pub(crate) fn fill<D>(display: &mut D, rect: Rectangle, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display)
}

/// Greedy word wrap into lines of at most `columns` characters.
///
/// Words longer than a line are split. Returns character ranges into `text`.
pub(crate) fn wrap(text: &str, columns: usize) -> Vec<(usize, usize)> {
    let columns = columns.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0usize;
    while start < chars.len() {
        let hard_end = start.saturating_add(columns).min(chars.len());
        let end = if hard_end == chars.len() || chars.get(hard_end) == Some(&' ') {
            hard_end
        } else {
            // Break after the last space that fits, if any.
            chars
                .get(start..hard_end)
                .and_then(|line| line.iter().rposition(|c| *c == ' '))
                .map_or(hard_end, |i| start.saturating_add(i).saturating_add(1))
        };
        lines.push((start, end));
        start = end;
        while chars.get(start) == Some(&' ') {
            start = start.saturating_add(1);
        }
    }
    if lines.is_empty() {
        lines.push((0, 0));
    }
    lines
}

/// A run of text sharing one style.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span<'a> {
    pub text: &'a str,
    pub style: TextStyle,
    pub color: Rgb888,
}

/// Draw wrapped, possibly multi-style text inside `bounds`.
///
/// Lines advance by the base style's line height and are clipped to
/// `max_lines` (`0` = unlimited) and to the bounds height. Single-line
/// text is centred vertically.
pub(crate) fn paragraph<D>(
    display: &mut D,
    bounds: Rectangle,
    spans: &[Span<'_>],
    base: TextStyle,
    align: TextAlign,
    max_lines: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    // Flatten to (char, span index) so lines can straddle span boundaries.
    let mut text = String::new();
    let mut owner = Vec::new();
    for (i, span) in spans.iter().enumerate() {
        for c in span.text.chars() {
            text.push(c);
            owner.push(i);
        }
    }
    let cell = base.mono_font().character_size.width.max(1);
    let columns = (bounds.size.width / cell) as usize;
    let mut lines = wrap(&text, columns);
    if max_lines > 0 {
        lines.truncate(max_lines as usize);
    }
    let line_height = base.line_height();
    let fit = (bounds.size.height / line_height.max(1)).max(1) as usize;
    lines.truncate(fit);

    let chars: Vec<char> = text.chars().collect();
    let block = line_height.saturating_mul(u32::try_from(lines.len()).unwrap_or(u32::MAX));
    let top = bounds.top_left.y + px(bounds.size.height.saturating_sub(block) / 2);

    for (row, &(start, end)) in lines.iter().enumerate() {
        let y = top + px(line_height).saturating_mul(i32::try_from(row).unwrap_or(i32::MAX));
        let line_width = (start..end).fold(0u32, |w, i| {
            let style = owner
                .get(i)
                .and_then(|&o| spans.get(o))
                .map_or(base, |s| s.style);
            w.saturating_add(style.mono_font().character_size.width)
        });
        let slack = bounds.size.width.saturating_sub(line_width);
        let mut x = bounds.top_left.x
            + match align {
                TextAlign::Leading => 0,
                TextAlign::Center => px(slack / 2),
                TextAlign::Trailing => px(slack),
            };

        let mut seg_start = start;
        while seg_start < end {
            let span_index = owner.get(seg_start).copied().unwrap_or(0);
            let mut seg_end = seg_start;
            while seg_end < end && owner.get(seg_end) == Some(&span_index) {
                seg_end = seg_end.saturating_add(1);
            }
            let Some(span) = spans.get(span_index) else {
                break;
            };
            let segment: String = chars.get(seg_start..seg_end).unwrap_or(&[]).iter().collect();
            let font = span.style.mono_font();
            let style = MonoTextStyle::new(font, span.color);
            let glyph_top = y + px(line_height.saturating_sub(font.character_size.height) / 2);
            Text::with_baseline(&segment, Point::new(x, glyph_top), style, Baseline::Top)
                .draw(display)?;
            let advance = font
                .character_size
                .width
                .saturating_mul(u32::try_from(seg_end - seg_start).unwrap_or(u32::MAX));
            x = x.saturating_add(px(advance));
            seg_start = seg_end;
        }
    }
    Ok(())
}

/// Single-style text centred in `bounds`.
pub(crate) fn centered_text<D>(
    display: &mut D,
    bounds: Rectangle,
    text: &str,
    style: TextStyle,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    paragraph(
        display,
        bounds,
        &[Span { text, style, color }],
        style,
        TextAlign::Center,
        1,
    )
}

/// Square of side `min(width, height)` centred in `bounds`.
pub(crate) fn centered_square(bounds: Rectangle, side: u32) -> Rectangle {
    let side = side.min(bounds.size.width).min(bounds.size.height);
    Rectangle::with_center(bounds.center(), Size::new(side, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_spaces() {
        let lines = wrap("Styled text with different attributes", 16);
        let text: Vec<char> = "Styled text with different attributes".chars().collect();
        let rendered: Vec<String> = lines
            .iter()
            .map(|&(s, e)| text[s..e].iter().collect::<String>())
            .collect();
        assert_eq!(rendered, ["Styled text with", "different ", "attributes"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), [(0, 3), (3, 6), (6, 8)]);
    }

    #[test]
    fn test_wrap_empty_is_one_line() {
        assert_eq!(wrap("", 10), [(0, 0)]);
    }

    #[test]
    fn test_centered_square() {
        let r = centered_square(Rectangle::new(Point::new(0, 0), Size::new(100, 40)), 60);
        assert_eq!(r, Rectangle::new(Point::new(30, 0), Size::new(40, 40)));
    }
}
