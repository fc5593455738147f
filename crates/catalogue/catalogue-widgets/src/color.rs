//! Named system colours (light appearance).

use embedded_graphics::pixelcolor::Rgb888;

/// Accent blue.
pub const SYSTEM_BLUE: Rgb888 = Rgb888::new(0x00, 0x7A, 0xFF);
/// Confirmation green.
pub const SYSTEM_GREEN: Rgb888 = Rgb888::new(0x34, 0xC7, 0x59);
/// Warning orange.
pub const SYSTEM_ORANGE: Rgb888 = Rgb888::new(0xFF, 0x95, 0x00);
/// Mid gray.
pub const SYSTEM_GRAY: Rgb888 = Rgb888::new(0x8E, 0x8E, 0x93);
/// Separator gray.
pub const SYSTEM_GRAY3: Rgb888 = Rgb888::new(0xC7, 0xC7, 0xCC);
/// Track gray.
pub const SYSTEM_GRAY5: Rgb888 = Rgb888::new(0xE5, 0xE5, 0xEA);
/// Grouped background gray.
pub const SYSTEM_GRAY6: Rgb888 = Rgb888::new(0xF2, 0xF2, 0xF7);
/// Page background.
pub const SYSTEM_BACKGROUND: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
/// Primary text.
pub const LABEL: Rgb888 = Rgb888::new(0x00, 0x00, 0x00);
/// Secondary text.
pub const DARK_GRAY: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);
/// Placeholder text.
pub const PLACEHOLDER: Rgb888 = Rgb888::new(0xB3, 0xB3, 0xB8);
/// Title colour on tinted bars.
pub const WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
