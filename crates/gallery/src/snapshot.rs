//! Flat, serialisable view of a finalized region for tooling.

use serde::Serialize;

use catalogue_layout::prelude::Rectangle;
use catalogue_widgets::widget::{CoarseKind, ElementKind};

use crate::region::FinalizedRegion;

/// Absolute frame in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl From<Rectangle> for FrameSnapshot {
    fn from(rect: Rectangle) -> Self {
        Self {
            x: rect.top_left.x,
            y: rect.top_left.y,
            width: rect.size.width,
            height: rect.size.height,
        }
    }
}

/// One element of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSnapshot {
    /// Automation identifier.
    pub identifier: String,
    /// Widget kind.
    pub kind: ElementKind,
    /// Coarse kind.
    pub coarse: CoarseKind,
    /// Nesting depth; the root is 0.
    pub depth: usize,
    /// Absolute frame.
    pub frame: FrameSnapshot,
}

/// Every element of a finalized region in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSnapshot {
    /// Root width.
    pub width: u32,
    /// Root height.
    pub height: u32,
    /// Elements, root first.
    pub elements: Vec<ElementSnapshot>,
}

impl RegionSnapshot {
    /// Snapshot of `region`.
    pub fn capture(region: &FinalizedRegion) -> Self {
        let tree = region.arranged().tree();
        let elements = region
            .iter()
            .map(|(id, element, frame)| ElementSnapshot {
                identifier: element.identifier().to_owned(),
                kind: element.kind(),
                coarse: element.kind().coarse(),
                depth: tree.depth(id),
                frame: frame.absolute.into(),
            })
            .collect();
        let size = region.size();
        Self {
            width: size.width,
            height: size.height,
            elements,
        }
    }

    /// Identifiers in traversal order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(|e| e.identifier.as_str())
    }

    /// Pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::build_region;

    #[test]
    fn test_snapshot_depths() {
        let done = build_region("navigation-bar", "Navigation").finalize(350).unwrap();
        let snap = RegionSnapshot::capture(&done);
        let depth = |id: &str| {
            snap.elements
                .iter()
                .find(|e| e.identifier == id)
                .map(|e| e.depth)
        };
        assert_eq!(depth("elements_container"), Some(0));
        assert_eq!(depth("nav_bar_demo"), Some(1));
        assert_eq!(depth("edit_button"), Some(2));
        assert_eq!(snap.width, 350);
    }

    #[test]
    fn test_snapshot_json_fields() {
        let done = build_region("slider", "Sliders").finalize(350).unwrap();
        let json = RegionSnapshot::capture(&done).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value["elements"][1];
        assert_eq!(first["identifier"], "regular_slider_label");
        assert_eq!(first["kind"], "label");
        assert_eq!(first["coarse"], "label");
        assert_eq!(first["frame"]["y"], 20);
    }
}
