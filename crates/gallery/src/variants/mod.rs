//! Per-category region builders.
//!
//! Each builder starts from an empty [`Region`], adds its demo elements with
//! their identifiers and relations, and closes the container's bottom edge
//! on the last element. Builders never fail; layout problems surface when
//! the region is finalized.

pub mod bars;
pub mod buttons;
pub mod controls;
pub mod lists;
pub mod media;
pub mod pickers;
pub mod placeholder;
pub mod text;

use catalogue_layout::prelude::*;
use catalogue_widgets::font::TextStyle;
use catalogue_widgets::label::Label;
use catalogue_widgets::TextAlign;

use crate::region::Region;
use crate::theme::Theme;

/// Metric as a signed offset.
pub(crate) fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// First element: one padding below the container's top edge.
pub(crate) fn first(theme: &Theme) -> Relation {
    Relation::align(Edge::Top, Target::Parent, px(theme.metrics.padding))
}

/// One padding below `above`.
pub(crate) fn next(above: NodeId, theme: &Theme) -> Relation {
    Relation::below(above, px(theme.metrics.padding))
}

/// Leading and trailing edges inset by the padding.
pub(crate) fn inset(theme: &Theme) -> [Relation; 2] {
    let pad = px(theme.metrics.padding);
    [
        Relation::align(Edge::Leading, Target::Parent, pad),
        Relation::align(Edge::Trailing, Target::Parent, -pad),
    ]
}

/// Horizontally centred in the container.
pub(crate) fn centered() -> Relation {
    Relation::align(Edge::CenterX, Target::Parent, 0)
}

/// Centred, wrapping caption text.
pub(crate) fn caption(text: &str, theme: &Theme) -> Label {
    Label::new(text)
        .font(TextStyle::regular(theme.metrics.caption_size))
        .color(theme.palette.secondary_text)
        .align(TextAlign::Center)
        .multiline()
}

/// Adds a caption one padding below `above` and closes the container on it.
pub(crate) fn close_with_caption(
    region: &mut Region,
    above: NodeId,
    identifier: &str,
    text: &str,
    theme: &Theme,
) -> NodeId {
    let root = region.root();
    let label = region.add(root, identifier, caption(text, theme));
    region.relate(label, [next(above, theme)]);
    region.relate(label, inset(theme));
    region.hug(root, label, theme.metrics.padding);
    label
}

/// Adds full-width elements top to bottom, one padding apart, each with
/// the given extra relations, and returns their ids.
pub(crate) fn stack<I, W>(region: &mut Region, items: I, theme: &Theme) -> Vec<NodeId>
where
    I: IntoIterator<Item = (&'static str, W, Vec<Relation>)>,
    W: Into<catalogue_widgets::widget::Widget>,
{
    let root = region.root();
    let mut ids: Vec<NodeId> = Vec::new();
    for (identifier, widget, extra) in items {
        let node = region.add(root, identifier, widget);
        let top = match ids.last() {
            Some(&above) => next(above, theme),
            None => first(theme),
        };
        region.relate(node, [top]);
        region.relate(node, inset(theme));
        region.relate(node, extra);
        ids.push(node);
    }
    ids
}
