//! Category key → region builder.

use crate::category::CategoryKey;
use crate::region::Region;
use crate::theme::Theme;
use crate::variants::{bars, buttons, controls, lists, media, pickers, placeholder, text};

/// Builds the demo region for `key` with the default theme.
///
/// Unknown keys produce the placeholder region. Never fails.
///
/// ```
/// use gallery::dispatch::build_region;
///
/// let region = build_region("button", "Buttons");
/// assert_eq!(region.identifiers(), ["regular_button", "custom_button", "image_button"]);
///
/// let region = build_region("unknown-key", "Mystery");
/// assert_eq!(region.identifiers(), ["placeholder_label"]);
/// ```
pub fn build_region(key: &str, display_label: &str) -> Region {
    build_region_with(key, display_label, &Theme::default())
}

/// [`build_region`] with an explicit theme.
pub fn build_region_with(key: &str, display_label: &str, theme: &Theme) -> Region {
    match key.parse::<CategoryKey>() {
        Ok(key) => build_category(key, display_label, theme),
        Err(err) => {
            tracing::debug!(%err, display_label, "falling back to placeholder");
            placeholder::placeholder(display_label, theme)
        }
    }
}

/// Builds the demo region for a known category.
pub fn build_category(key: CategoryKey, display_label: &str, theme: &Theme) -> Region {
    tracing::debug!(%key, display_label, "building region");
    match key {
        CategoryKey::Button => buttons::buttons(theme),
        CategoryKey::TextField => text::text_fields(theme),
        CategoryKey::SecureTextField => text::secure_fields(theme),
        CategoryKey::TextView => text::text_views(theme),
        CategoryKey::Switch => controls::switches(theme),
        CategoryKey::Slider => controls::sliders(theme),
        CategoryKey::Stepper => controls::steppers(theme),
        CategoryKey::SegmentedControl => controls::segmented_controls(theme),
        CategoryKey::PickerWheel => pickers::picker_wheel(theme),
        CategoryKey::DatePicker => pickers::date_pickers(theme),
        CategoryKey::PageIndicator => controls::page_indicator(theme),
        CategoryKey::ScrollView => lists::scroll_view(theme),
        CategoryKey::Table => lists::table(theme),
        CategoryKey::Collection => lists::collection(theme),
        CategoryKey::Alert => buttons::alerts(theme),
        CategoryKey::NavigationBar => bars::navigation_bar(theme),
        CategoryKey::TabBar => bars::tab_bar(theme),
        CategoryKey::Toolbar => bars::toolbar(theme),
        CategoryKey::StaticText => text::labels(theme),
        CategoryKey::Image => media::images(theme),
        CategoryKey::ActivityIndicator => media::activity_indicators(theme),
        CategoryKey::ProgressIndicator => media::progress_views(theme),
        CategoryKey::WebView | CategoryKey::Map | CategoryKey::Keyboard => {
            placeholder::placeholder(display_label, theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_widgets::widget::Widget;

    #[test]
    fn test_switch_values() {
        let region = build_region("switch", "Switches");
        assert_eq!(
            region.identifiers(),
            [
                "regular_switch_label",
                "regular_switch",
                "custom_switch_label",
                "custom_switch"
            ]
        );
        let on = |id: &str| match region.find(id).map(|(_, e)| e.widget()) {
            Some(Widget::Switch(s)) => Some(s.is_on()),
            _ => None,
        };
        assert_eq!(on("regular_switch"), Some(true));
        assert_eq!(on("custom_switch"), Some(false));
    }

    #[test]
    fn test_unknown_key_placeholder_mentions_label() {
        let region = build_region("unknown-key", "Mystery");
        assert_eq!(region.len(), 1);
        let (_, label) = region.find("placeholder_label").unwrap();
        let text = match label.widget() {
            Widget::Label(l) => l.text(),
            _ => String::new(),
        };
        assert!(text.contains("Mystery"), "{text}");
    }

    #[test]
    fn test_placeholder_categories_use_display_label() {
        let region = build_region("map", "Maps");
        assert_eq!(region.identifiers(), ["placeholder_label"]);
    }

    #[test]
    fn test_themed_build_uses_theme() {
        let mut theme = Theme::default();
        theme.metrics.padding = 10;
        let done = build_region_with("page-indicator", "Page Indicators", &theme)
            .finalize(350)
            .unwrap();
        assert_eq!(done.height(), 10 + 50 + 10);
    }
}
