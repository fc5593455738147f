//! Draws finalized regions and reports where each element landed.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

use catalogue_layout::prelude::NodeId;

use crate::region::FinalizedRegion;

/// Visible area of `id`: the intersection of the frames of every scrolling
/// ancestor, or `None` when nothing above it scrolls.
fn clip_of(region: &FinalizedRegion, id: NodeId) -> Option<Rectangle> {
    let arranged = region.arranged();
    let tree = arranged.tree();
    let mut clip: Option<Rectangle> = None;
    let mut cursor = tree.parent(id);
    while let Some(ancestor) = cursor {
        let scrolls = tree.item(ancestor).is_some_and(|e| e.widget().scrolls());
        if scrolls {
            if let Some(frame) = arranged.frame(ancestor) {
                clip = Some(match clip {
                    Some(c) => c.intersection(&frame.absolute),
                    None => frame.absolute,
                });
            }
        }
        cursor = tree.parent(ancestor);
    }
    clip
}

/// Paints every element in traversal order, parents under children.
/// Content of scroll views, tables and collections is clipped to their
/// viewport.
pub fn render<D>(region: &FinalizedRegion, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let mut drawn = 0usize;
    for (id, element, frame) in region.iter() {
        match clip_of(region, id) {
            Some(clip) => element
                .widget()
                .render(&mut display.clipped(&clip), frame.absolute)?,
            None => element.widget().render(display, frame.absolute)?,
        }
        drawn += 1;
    }
    tracing::debug!(elements = drawn, "region rendered");
    Ok(())
}

/// One drawn element, for registering with a test harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Automation identifier.
    pub identifier: &'a str,
    /// Kind name, e.g. `"button"`.
    pub kind: &'static str,
    /// Absolute frame.
    pub bounds: Rectangle,
}

/// Placements of every element, root first.
pub fn placements(region: &FinalizedRegion) -> impl Iterator<Item = Placement<'_>> + '_ {
    region.iter().map(|(_, element, frame)| Placement {
        identifier: element.identifier(),
        kind: element.kind().name(),
        bounds: frame.absolute,
    })
}
