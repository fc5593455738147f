//! Catalogue categories and the fixed registry that lists them.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

/// Every element category the catalogue can demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    /// Plain, filled and icon buttons.
    Button,
    /// Text fields with different keyboards.
    TextField,
    /// Masked text fields.
    SecureTextField,
    /// Multi-line text views.
    TextView,
    /// Labelled switches.
    Switch,
    /// Labelled sliders.
    Slider,
    /// Labelled steppers.
    Stepper,
    /// Text and icon segmented controls.
    SegmentedControl,
    /// Picker wheel.
    PickerWheel,
    /// Date, time and date-time wheels.
    DatePicker,
    /// Page dots.
    PageIndicator,
    /// Nested scroll view.
    ScrollView,
    /// Static table.
    Table,
    /// Collection grid.
    Collection,
    /// Alert and action sheet triggers.
    Alert,
    /// Simulated navigation bar.
    NavigationBar,
    /// Simulated tab bar.
    TabBar,
    /// Simulated toolbar.
    Toolbar,
    /// Labels.
    StaticText,
    /// Images.
    Image,
    /// Activity indicators.
    ActivityIndicator,
    /// Progress views.
    ProgressIndicator,
    /// Web content (placeholder).
    WebView,
    /// Maps (placeholder).
    Map,
    /// Keyboard keys (placeholder).
    Keyboard,
}

/// Key string is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl CategoryKey {
    /// All keys in registry order.
    pub const ALL: [CategoryKey; 25] = [
        CategoryKey::Button,
        CategoryKey::TextField,
        CategoryKey::SecureTextField,
        CategoryKey::TextView,
        CategoryKey::Switch,
        CategoryKey::Slider,
        CategoryKey::Stepper,
        CategoryKey::SegmentedControl,
        CategoryKey::PickerWheel,
        CategoryKey::DatePicker,
        CategoryKey::PageIndicator,
        CategoryKey::ScrollView,
        CategoryKey::Table,
        CategoryKey::Collection,
        CategoryKey::Alert,
        CategoryKey::NavigationBar,
        CategoryKey::TabBar,
        CategoryKey::Toolbar,
        CategoryKey::StaticText,
        CategoryKey::Image,
        CategoryKey::ActivityIndicator,
        CategoryKey::ProgressIndicator,
        CategoryKey::WebView,
        CategoryKey::Map,
        CategoryKey::Keyboard,
    ];

    /// Kebab-case key.
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Button => "button",
            CategoryKey::TextField => "text-field",
            CategoryKey::SecureTextField => "secure-text-field",
            CategoryKey::TextView => "text-view",
            CategoryKey::Switch => "switch",
            CategoryKey::Slider => "slider",
            CategoryKey::Stepper => "stepper",
            CategoryKey::SegmentedControl => "segmented-control",
            CategoryKey::PickerWheel => "picker-wheel",
            CategoryKey::DatePicker => "date-picker",
            CategoryKey::PageIndicator => "page-indicator",
            CategoryKey::ScrollView => "scroll-view",
            CategoryKey::Table => "table",
            CategoryKey::Collection => "collection",
            CategoryKey::Alert => "alert",
            CategoryKey::NavigationBar => "navigation-bar",
            CategoryKey::TabBar => "tab-bar",
            CategoryKey::Toolbar => "toolbar",
            CategoryKey::StaticText => "static-text",
            CategoryKey::Image => "image",
            CategoryKey::ActivityIndicator => "activity-indicator",
            CategoryKey::ProgressIndicator => "progress-indicator",
            CategoryKey::WebView => "web-view",
            CategoryKey::Map => "map",
            CategoryKey::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// One row of the catalogue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    /// Category key.
    pub key: CategoryKey,
    /// Human-readable name shown in the list and the detail title.
    pub display_label: &'static str,
    /// Automation element class the category demonstrates.
    pub element_class: &'static str,
}

impl CatalogueEntry {
    const fn new(key: CategoryKey, element_class: &'static str, display_label: &'static str) -> Self {
        Self {
            key,
            display_label,
            element_class,
        }
    }

    /// List row text, e.g. `"XCUIButton - Buttons"`.
    pub fn row_title(&self) -> String {
        format!("{} - {}", self.element_class, self.display_label)
    }

    /// Identifier of the list row at `index`.
    pub fn row_identifier(index: usize) -> String {
        format!("feature_cell_{index}")
    }
}

static CATALOGUE: [CatalogueEntry; 25] = [
    CatalogueEntry::new(CategoryKey::Button, "XCUIButton", "Buttons"),
    CatalogueEntry::new(CategoryKey::TextField, "XCUITextField", "Text Fields"),
    CatalogueEntry::new(CategoryKey::SecureTextField, "XCUISecureTextField", "Secure Text"),
    CatalogueEntry::new(CategoryKey::TextView, "XCUITextView", "Text Views"),
    CatalogueEntry::new(CategoryKey::Switch, "XCUISwitch", "Switches"),
    CatalogueEntry::new(CategoryKey::Slider, "XCUISlider", "Sliders"),
    CatalogueEntry::new(CategoryKey::Stepper, "XCUIStepper", "Steppers"),
    CatalogueEntry::new(CategoryKey::SegmentedControl, "XCUISegmentedControl", "Segmented Controls"),
    CatalogueEntry::new(CategoryKey::PickerWheel, "XCUIPickerWheel", "Pickers"),
    CatalogueEntry::new(CategoryKey::DatePicker, "XCUIDatePicker", "Date Pickers"),
    CatalogueEntry::new(CategoryKey::PageIndicator, "XCUIPageIndicator", "Page Indicators"),
    CatalogueEntry::new(CategoryKey::ScrollView, "XCUIScrollView", "Scroll Views"),
    CatalogueEntry::new(CategoryKey::Table, "XCUITableView", "Tables"),
    CatalogueEntry::new(CategoryKey::Collection, "XCUICollectionView", "Collections"),
    CatalogueEntry::new(CategoryKey::Alert, "XCUIAlert", "Alerts & Action Sheets"),
    CatalogueEntry::new(CategoryKey::NavigationBar, "XCUINavigationBar", "Navigation"),
    CatalogueEntry::new(CategoryKey::TabBar, "XCUITabBar", "Tab Bars"),
    CatalogueEntry::new(CategoryKey::Toolbar, "XCUIToolbar", "Toolbars"),
    CatalogueEntry::new(CategoryKey::StaticText, "XCUIStaticText", "Labels"),
    CatalogueEntry::new(CategoryKey::Image, "XCUIImage", "Images"),
    CatalogueEntry::new(CategoryKey::ActivityIndicator, "XCUIActivityIndicator", "Activity Indicators"),
    CatalogueEntry::new(CategoryKey::ProgressIndicator, "XCUIProgressIndicator", "Progress Views"),
    CatalogueEntry::new(CategoryKey::WebView, "XCUIWebView", "Web Content"),
    CatalogueEntry::new(CategoryKey::Map, "XCUIMap", "Maps"),
    CatalogueEntry::new(CategoryKey::Keyboard, "XCUIKey", "Keyboard"),
];

/// The catalogue in display order. Constant across calls.
pub fn list_categories() -> &'static [CatalogueEntry] {
    &CATALOGUE
}

/// Registry entry for `key`.
pub fn find_entry(key: CategoryKey) -> Option<&'static CatalogueEntry> {
    CATALOGUE.iter().find(|e| e.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_matches_key_order() {
        let keys: Vec<CategoryKey> = list_categories().iter().map(|e| e.key).collect();
        assert_eq!(keys, CategoryKey::ALL);
    }

    #[test]
    fn test_registry_keys_unique() {
        let unique: HashSet<_> = list_categories().iter().map(|e| e.key).collect();
        assert_eq!(unique.len(), list_categories().len());
    }

    #[test]
    fn test_list_is_idempotent() {
        assert_eq!(list_categories(), list_categories());
        assert!(core::ptr::eq(list_categories(), list_categories()));
    }

    #[test]
    fn test_key_parse_round_trip() {
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>(), Ok(key));
        }
        assert_eq!(
            "unknown-key".parse::<CategoryKey>(),
            Err(UnknownCategory("unknown-key".into()))
        );
    }

    #[test]
    fn test_row_title() {
        let entry = find_entry(CategoryKey::Alert).unwrap();
        assert_eq!(entry.row_title(), "XCUIAlert - Alerts & Action Sheets");
        assert_eq!(CatalogueEntry::row_identifier(14), "feature_cell_14");
    }

    #[test]
    fn test_serialises_kebab_case() {
        let json = serde_json::to_string(&CategoryKey::SecureTextField).unwrap();
        assert_eq!(json, "\"secure-text-field\"");
    }
}
