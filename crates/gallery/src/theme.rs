//! Immutable styling configuration threaded through the region builders.
//!
//! The default theme reproduces the light system appearance. A JSON file
//! may override any subset of colours (as `#RRGGBB`) and metrics:
//!
//! ```json
//! { "palette": { "accent": "#FF2D55" }, "metrics": { "padding": 16 } }
//! ```

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::{Deserialize, Serialize};

use catalogue_widgets::color;

/// Theme loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The file is not valid theme JSON.
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A colour is not `#RRGGBB`.
    #[error("palette colour '{field}' is not #RRGGBB: '{value}'")]
    InvalidColor {
        /// Palette field name.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Named colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Tint for interactive elements and filled primary buttons.
    pub accent: Rgb888,
    /// Secondary filled buttons and progress fills.
    pub confirm: Rgb888,
    /// Highlights such as slider thumbs.
    pub warning: Rgb888,
    /// Neutral tracks.
    pub neutral: Rgb888,
    /// Outlines.
    pub separator: Rgb888,
    /// Unfilled tracks and read-only fills.
    pub track: Rgb888,
    /// Region background.
    pub container: Rgb888,
    /// Page background.
    pub background: Rgb888,
    /// Primary text.
    pub text: Rgb888,
    /// Secondary text.
    pub secondary_text: Rgb888,
    /// Text on accent fills.
    pub inverse_text: Rgb888,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: color::SYSTEM_BLUE,
            confirm: color::SYSTEM_GREEN,
            warning: color::SYSTEM_ORANGE,
            neutral: color::SYSTEM_GRAY,
            separator: color::SYSTEM_GRAY3,
            track: color::SYSTEM_GRAY5,
            container: color::SYSTEM_GRAY6,
            background: color::SYSTEM_BACKGROUND,
            text: color::LABEL,
            secondary_text: color::DARK_GRAY,
            inverse_text: color::WHITE,
        }
    }
}

/// Spacing and size constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Inset between a region's edge and its content, and between stacked
    /// elements.
    pub padding: u32,
    /// Corner radius of filled buttons, bars and text views.
    pub corner_radius: u32,
    /// Corner radius of the region container.
    pub container_radius: u32,
    /// Height of buttons, fields and bars.
    pub control_height: u32,
    /// Width of stacked buttons.
    pub button_width: u32,
    /// Height of fixed-size demos (tables, pickers, placeholders).
    pub demo_height: u32,
    /// Caption font size.
    pub caption_size: u32,
    /// Title font size.
    pub title_size: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            padding: 20,
            corner_radius: 8,
            container_radius: 10,
            control_height: 44,
            button_width: 200,
            demo_height: 200,
            caption_size: 14,
            title_size: 22,
        }
    }
}

/// Colours and metrics for every builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    /// Colours.
    pub palette: Palette,
    /// Spacing.
    pub metrics: Metrics,
}

// ── JSON form ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PaletteFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    neutral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inverse_text: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    palette: PaletteFile,
    metrics: Metrics,
}

/// Parses `#RRGGBB`.
fn parse_hex(field: &'static str, value: &str) -> Result<Rgb888, ThemeError> {
    let invalid = || ThemeError::InvalidColor {
        field,
        value: value.to_owned(),
    };
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: core::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(invalid)
    };
    Ok(Rgb888::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn to_hex(c: Rgb888) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}

impl Theme {
    /// Theme from JSON, starting from the defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(json)?;
        let mut palette = Palette::default();
        let p = file.palette;
        let overrides: [(&'static str, Option<String>, &mut Rgb888); 11] = [
            ("accent", p.accent, &mut palette.accent),
            ("confirm", p.confirm, &mut palette.confirm),
            ("warning", p.warning, &mut palette.warning),
            ("neutral", p.neutral, &mut palette.neutral),
            ("separator", p.separator, &mut palette.separator),
            ("track", p.track, &mut palette.track),
            ("container", p.container, &mut palette.container),
            ("background", p.background, &mut palette.background),
            ("text", p.text, &mut palette.text),
            ("secondary_text", p.secondary_text, &mut palette.secondary_text),
            ("inverse_text", p.inverse_text, &mut palette.inverse_text),
        ];
        for (field, value, slot) in overrides {
            if let Some(value) = value {
                *slot = parse_hex(field, &value)?;
            }
        }
        tracing::debug!(?file.metrics, "theme loaded");
        Ok(Self {
            palette,
            metrics: file.metrics,
        })
    }

    /// Full theme as pretty JSON.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        let p = &self.palette;
        let file = ThemeFile {
            palette: PaletteFile {
                accent: Some(to_hex(p.accent)),
                confirm: Some(to_hex(p.confirm)),
                warning: Some(to_hex(p.warning)),
                neutral: Some(to_hex(p.neutral)),
                separator: Some(to_hex(p.separator)),
                track: Some(to_hex(p.track)),
                container: Some(to_hex(p.container)),
                background: Some(to_hex(p.background)),
                text: Some(to_hex(p.text)),
                secondary_text: Some(to_hex(p.secondary_text)),
                inverse_text: Some(to_hex(p.inverse_text)),
            },
            metrics: self.metrics,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Theme::from_json("{}").unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_override() {
        let theme =
            Theme::from_json(r##"{ "palette": { "accent": "#ff2d55" }, "metrics": { "padding": 16 } }"##)
                .unwrap();
        assert_eq!(theme.palette.accent, Rgb888::new(0xFF, 0x2D, 0x55));
        assert_eq!(theme.palette.confirm, color::SYSTEM_GREEN);
        assert_eq!(theme.metrics.padding, 16);
        assert_eq!(theme.metrics.control_height, 44);
    }

    #[test]
    fn test_invalid_colour() {
        let err = Theme::from_json(r#"{ "palette": { "track": "grey" } }"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { field: "track", .. }), "{err}");
        let err = Theme::from_json(r##"{ "palette": { "text": "#12345G" } }"##).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { field: "text", .. }), "{err}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Theme::from_json(r#"{ "palete": {} }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut theme = Theme::default();
        theme.palette.warning = Rgb888::new(1, 2, 3);
        theme.metrics.caption_size = 13;
        let json = theme.to_json().unwrap();
        assert!(json.contains("\"#010203\""));
        assert_eq!(Theme::from_json(&json).unwrap(), theme);
    }
}
