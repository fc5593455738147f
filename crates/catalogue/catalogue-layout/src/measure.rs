//! Intrinsic content sizes.
//!
//! Nodes that leave an axis under-constrained fall back to their intrinsic
//! size. Text wraps: its height depends on the width the solver settled on,
//! so the vertical fallback waits for the horizontal axis.

use embedded_graphics::geometry::Size;

/// Intrinsic size of a node's content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Measure {
    /// Content with a fixed natural size (controls, images, indicators).
    Fixed(Size),
    /// Wrapping text laid out on a fixed-pitch grid.
    Text {
        /// Number of characters.
        chars: u32,
        /// Advance per character in pixels.
        char_width: u32,
        /// Height of one line in pixels.
        line_height: u32,
        /// Line cap; `0` means unlimited.
        max_lines: u32,
    },
}

impl Measure {
    /// Zero-sized content (plain containers).
    pub const EMPTY: Measure = Measure::Fixed(Size::zero());

    /// Natural single-line width.
    pub fn width(&self) -> u32 {
        match *self {
            Measure::Fixed(size) => size.width,
            Measure::Text {
                chars, char_width, ..
            } => chars.saturating_mul(char_width),
        }
    }

    /// Number of lines needed at `width`; at least one.
    pub fn lines_for_width(&self, width: u32) -> u32 {
        match *self {
            Measure::Fixed(_) => 1,
            Measure::Text {
                chars,
                char_width,
                max_lines,
                ..
            } => {
                let natural = chars.saturating_mul(char_width);
                let lines = natural.div_ceil(width.max(1)).max(1);
                if max_lines == 0 {
                    lines
                } else {
                    lines.min(max_lines)
                }
            }
        }
    }

    /// Height when laid out at `width`.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogue_layout::measure::Measure;
    ///
    /// let text = Measure::Text { chars: 30, char_width: 9, line_height: 21, max_lines: 0 };
    /// assert_eq!(text.height_for_width(300), 21);
    /// assert_eq!(text.height_for_width(100), 63);
    /// ```
    pub fn height_for_width(&self, width: u32) -> u32 {
        match *self {
            Measure::Fixed(size) => size.height,
            Measure::Text { line_height, .. } => {
                self.lines_for_width(width).saturating_mul(line_height)
            }
        }
    }
}

/// Items stored in a [`BoxTree`](crate::tree::BoxTree) that the sizer can
/// name, measure and check.
pub trait Measurable {
    /// Stable identifier; must be unique within a tree.
    fn test_id(&self) -> &str;

    /// Intrinsic content size.
    fn measure(&self) -> Measure;

    /// Scrolling containers may hold content taller than their own frame.
    fn scrolls(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(chars: u32, max_lines: u32) -> Measure {
        Measure::Text {
            chars,
            char_width: 9,
            line_height: 21,
            max_lines,
        }
    }

    #[test]
    fn test_fixed_ignores_width() {
        let m = Measure::Fixed(Size::new(51, 31));
        assert_eq!(m.width(), 51);
        assert_eq!(m.height_for_width(10), 31);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        assert_eq!(text(0, 0).height_for_width(200), 21);
    }

    #[test]
    fn test_text_wraps() {
        // 100 chars * 9 px = 900 px over 310 px -> 3 lines
        assert_eq!(text(100, 0).lines_for_width(310), 3);
    }

    #[test]
    fn test_text_line_cap() {
        assert_eq!(text(100, 2).height_for_width(310), 42);
    }

    #[test]
    fn test_zero_width_does_not_divide_by_zero() {
        assert_eq!(text(3, 0).lines_for_width(0), 27);
    }
}
