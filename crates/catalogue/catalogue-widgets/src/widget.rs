//! The closed set of widget kinds and dispatch over them.

use core::fmt;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use serde::Serialize;

use catalogue_layout::measure::Measure;

use crate::button::Button;
use crate::container::{Container, ScrollView};
use crate::control::{PageControl, SegmentedControl, Slider, Stepper, Switch};
use crate::field::{TextField, TextView};
use crate::label::Label;
use crate::list::{Collection, Table, TableCell};
use crate::media::{ActivityIndicator, Image, ProgressView};
use crate::picker::{DatePicker, Picker};

/// Fine-grained widget kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// Tappable button.
    Button,
    /// Static text.
    Label,
    /// Single-line text entry.
    TextField,
    /// Masked text entry.
    SecureField,
    /// Multi-line text.
    TextView,
    /// On/off toggle.
    Switch,
    /// Continuous value.
    Slider,
    /// Discrete value.
    Stepper,
    /// Segment picker.
    SegmentedControl,
    /// Wheel picker.
    Picker,
    /// Date / time wheels.
    DatePicker,
    /// Page dots.
    PageControl,
    /// Image.
    Image,
    /// Spinner.
    ActivityIndicator,
    /// Progress bar.
    ProgressView,
    /// Table.
    Table,
    /// Table row.
    TableCell,
    /// Collection grid.
    Collection,
    /// Scrolling viewport.
    ScrollView,
    /// Plain grouping view.
    Container,
}

/// Coarse kind used when describing regions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoarseKind {
    /// Buttons.
    Button,
    /// Text entry.
    Field,
    /// Switches.
    Switch,
    /// Sliders.
    Slider,
    /// Steppers.
    Stepper,
    /// Static text.
    Label,
    /// Images.
    Image,
    /// Progress and activity.
    Indicator,
    /// Everything that groups or lists other content.
    CustomContainer,
}

impl ElementKind {
    /// Kebab-case name, matching the serialised form.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::Label => "label",
            ElementKind::TextField => "text-field",
            ElementKind::SecureField => "secure-field",
            ElementKind::TextView => "text-view",
            ElementKind::Switch => "switch",
            ElementKind::Slider => "slider",
            ElementKind::Stepper => "stepper",
            ElementKind::SegmentedControl => "segmented-control",
            ElementKind::Picker => "picker",
            ElementKind::DatePicker => "date-picker",
            ElementKind::PageControl => "page-control",
            ElementKind::Image => "image",
            ElementKind::ActivityIndicator => "activity-indicator",
            ElementKind::ProgressView => "progress-view",
            ElementKind::Table => "table",
            ElementKind::TableCell => "table-cell",
            ElementKind::Collection => "collection",
            ElementKind::ScrollView => "scroll-view",
            ElementKind::Container => "container",
        }
    }

    /// Coarse classification.
    pub const fn coarse(self) -> CoarseKind {
        match self {
            ElementKind::Button => CoarseKind::Button,
            ElementKind::TextField | ElementKind::SecureField | ElementKind::TextView => {
                CoarseKind::Field
            }
            ElementKind::Switch => CoarseKind::Switch,
            ElementKind::Slider => CoarseKind::Slider,
            ElementKind::Stepper => CoarseKind::Stepper,
            ElementKind::Label => CoarseKind::Label,
            ElementKind::Image => CoarseKind::Image,
            ElementKind::ActivityIndicator
            | ElementKind::ProgressView
            | ElementKind::PageControl => CoarseKind::Indicator,
            ElementKind::SegmentedControl
            | ElementKind::Picker
            | ElementKind::DatePicker
            | ElementKind::Table
            | ElementKind::TableCell
            | ElementKind::Collection
            | ElementKind::ScrollView
            | ElementKind::Container => CoarseKind::CustomContainer,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static configuration of one widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Button.
    Button(Button),
    /// Label.
    Label(Label),
    /// Text field (plain or secure).
    TextField(TextField),
    /// Text view.
    TextView(TextView),
    /// Switch.
    Switch(Switch),
    /// Slider.
    Slider(Slider),
    /// Stepper.
    Stepper(Stepper),
    /// Segmented control.
    SegmentedControl(SegmentedControl),
    /// Picker wheel.
    Picker(Picker),
    /// Date picker.
    DatePicker(DatePicker),
    /// Page control.
    PageControl(PageControl),
    /// Image.
    Image(Image),
    /// Activity indicator.
    ActivityIndicator(ActivityIndicator),
    /// Progress view.
    ProgressView(ProgressView),
    /// Table.
    Table(Table),
    /// Table row.
    TableCell(TableCell),
    /// Collection grid.
    Collection(Collection),
    /// Scroll view.
    ScrollView(ScrollView),
    /// Plain container.
    Container(Container),
}

macro_rules! widget_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Widget {
                fn from(w: $variant) -> Self {
                    Widget::$variant(w)
                }
            }
        )*
    };
}

widget_from!(
    Button,
    Label,
    TextField,
    TextView,
    Switch,
    Slider,
    Stepper,
    SegmentedControl,
    Picker,
    DatePicker,
    PageControl,
    Image,
    ActivityIndicator,
    ProgressView,
    Table,
    TableCell,
    Collection,
    ScrollView,
    Container,
);

impl Widget {
    /// Fine-grained kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Widget::Button(_) => ElementKind::Button,
            Widget::Label(_) => ElementKind::Label,
            Widget::TextField(f) if f.is_secure() => ElementKind::SecureField,
            Widget::TextField(_) => ElementKind::TextField,
            Widget::TextView(_) => ElementKind::TextView,
            Widget::Switch(_) => ElementKind::Switch,
            Widget::Slider(_) => ElementKind::Slider,
            Widget::Stepper(_) => ElementKind::Stepper,
            Widget::SegmentedControl(_) => ElementKind::SegmentedControl,
            Widget::Picker(_) => ElementKind::Picker,
            Widget::DatePicker(_) => ElementKind::DatePicker,
            Widget::PageControl(_) => ElementKind::PageControl,
            Widget::Image(_) => ElementKind::Image,
            Widget::ActivityIndicator(_) => ElementKind::ActivityIndicator,
            Widget::ProgressView(_) => ElementKind::ProgressView,
            Widget::Table(_) => ElementKind::Table,
            Widget::TableCell(_) => ElementKind::TableCell,
            Widget::Collection(_) => ElementKind::Collection,
            Widget::ScrollView(_) => ElementKind::ScrollView,
            Widget::Container(_) => ElementKind::Container,
        }
    }

    /// Intrinsic content size.
    pub fn measure(&self) -> Measure {
        match self {
            Widget::Button(w) => w.measure(),
            Widget::Label(w) => w.measure(),
            Widget::TextField(w) => w.measure(),
            Widget::TextView(w) => w.measure(),
            Widget::Switch(w) => w.measure(),
            Widget::Slider(w) => w.measure(),
            Widget::Stepper(w) => w.measure(),
            Widget::SegmentedControl(w) => w.measure(),
            Widget::Picker(w) => w.measure(),
            Widget::DatePicker(w) => w.measure(),
            Widget::PageControl(w) => w.measure(),
            Widget::Image(w) => w.measure(),
            Widget::ActivityIndicator(w) => w.measure(),
            Widget::ProgressView(w) => w.measure(),
            Widget::Table(w) => w.measure(),
            Widget::TableCell(w) => w.measure(),
            Widget::Collection(w) => w.measure(),
            Widget::ScrollView(w) => w.measure(),
            Widget::Container(w) => w.measure(),
        }
    }

    /// Whether children may extend past this widget's bottom edge.
    pub fn scrolls(&self) -> bool {
        matches!(
            self,
            Widget::ScrollView(_) | Widget::Table(_) | Widget::Collection(_)
        )
    }

    /// Render the widget into its solved frame.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self {
            Widget::Button(w) => w.render(display, bounds),
            Widget::Label(w) => w.render(display, bounds),
            Widget::TextField(w) => w.render(display, bounds),
            Widget::TextView(w) => w.render(display, bounds),
            Widget::Switch(w) => w.render(display, bounds),
            Widget::Slider(w) => w.render(display, bounds),
            Widget::Stepper(w) => w.render(display, bounds),
            Widget::SegmentedControl(w) => w.render(display, bounds),
            Widget::Picker(w) => w.render(display, bounds),
            Widget::DatePicker(w) => w.render(display, bounds),
            Widget::PageControl(w) => w.render(display, bounds),
            Widget::Image(w) => w.render(display, bounds),
            Widget::ActivityIndicator(w) => w.render(display, bounds),
            Widget::ProgressView(w) => w.render(display, bounds),
            Widget::Table(w) => w.render(display, bounds),
            Widget::TableCell(w) => w.render(display, bounds),
            Widget::Collection(w) => w.render(display, bounds),
            Widget::ScrollView(w) => w.render(display, bounds),
            Widget::Container(w) => w.render(display, bounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[test]
    fn test_secure_field_kind() {
        let plain: Widget = TextField::new("Email").into();
        let secure: Widget = TextField::new("Password").secure().into();
        assert_eq!(plain.kind(), ElementKind::TextField);
        assert_eq!(secure.kind(), ElementKind::SecureField);
        assert_eq!(secure.kind().coarse(), CoarseKind::Field);
    }

    #[test]
    fn test_scrolling_kinds() {
        assert!(Widget::from(ScrollView::new()).scrolls());
        assert!(Widget::from(Table::new()).scrolls());
        assert!(!Widget::from(Container::new()).scrolls());
        assert!(!Widget::from(Button::symbol(Symbol::Gear)).scrolls());
    }

    #[test]
    fn test_kind_names_are_kebab_case() {
        assert_eq!(ElementKind::ActivityIndicator.to_string(), "activity-indicator");
        assert_eq!(ElementKind::PageControl.coarse(), CoarseKind::Indicator);
        assert_eq!(ElementKind::Picker.coarse(), CoarseKind::CustomContainer);
    }
}
