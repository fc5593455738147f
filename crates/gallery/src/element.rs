//! A widget paired with its automation identifier.

use catalogue_layout::measure::{Measurable, Measure};
use catalogue_widgets::widget::{ElementKind, Widget};

/// One addressable element of a region.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoElement {
    identifier: String,
    widget: Widget,
}

impl DemoElement {
    /// Element addressed as `identifier`.
    pub fn new(identifier: impl Into<String>, widget: impl Into<Widget>) -> Self {
        Self {
            identifier: identifier.into(),
            widget: widget.into(),
        }
    }

    /// Stable automation identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Static configuration.
    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    /// Widget kind.
    pub fn kind(&self) -> ElementKind {
        self.widget.kind()
    }
}

impl Measurable for DemoElement {
    fn test_id(&self) -> &str {
        &self.identifier
    }

    fn measure(&self) -> Measure {
        self.widget.measure()
    }

    fn scrolls(&self) -> bool {
        self.widget.scrolls()
    }
}
