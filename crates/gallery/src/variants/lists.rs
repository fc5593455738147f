//! Tables, collections and nested scroll views.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{first, inset};
use crate::region::Region;
use crate::theme::Theme;

const TABLE_ROWS: usize = 5;

const SCROLL_TEXT: &str = "This is content inside a nested scroll view. This requires scrolling \
    to see all of the content. You can use this to test scroll-related interactions with \
    XCUITest. Scroll down to see more content. This is more content to ensure we need to \
    scroll. Keep scrolling to see even more content at the bottom of this scroll view.";

/// A fixed-height table with five static rows.
pub fn table(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();

    let table = region.add(root, "demo_table_view", Table::new());
    region.relate(
        table,
        [first(theme), Relation::height(theme.metrics.demo_height)],
    );
    region.relate(table, inset(theme));

    let mut above: Option<NodeId> = None;
    for i in 0..TABLE_ROWS {
        let cell = region.add(
            table,
            format!("table_cell_{i}"),
            TableCell::new(format!("Row {}", i + 1)),
        );
        let top = match above {
            Some(above) => Relation::below(above, 0),
            None => Relation::align(Edge::Top, Target::Parent, 0),
        };
        region.relate(
            cell,
            [
                top,
                Relation::align(Edge::Leading, Target::Parent, 0),
                Relation::align(Edge::Trailing, Target::Parent, 0),
            ],
        );
        above = Some(cell);
    }

    region.hug(root, table, theme.metrics.padding);
    region
}

/// An empty collection grid of 80 px items.
pub fn collection(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();
    let grid = region.add(
        root,
        "demo_collection_view",
        Collection::new(Size::new(80, 80), 10).background(theme.palette.background),
    );
    region.relate(
        grid,
        [first(theme), Relation::height(theme.metrics.demo_height)],
    );
    region.relate(grid, inset(theme));
    region.hug(root, grid, theme.metrics.padding);
    region
}

/// A bordered scroll view whose content is twice as tall as its viewport.
pub fn scroll_view(theme: &Theme) -> Region {
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let root = region.root();

    let scroll = region.add(
        root,
        "nested_scroll_view",
        ScrollView::new()
            .background(p.background)
            .border(p.separator, 1),
    );
    region.relate(
        scroll,
        [first(theme), Relation::height(theme.metrics.demo_height)],
    );
    region.relate(scroll, inset(theme));

    let content = region.add(
        scroll,
        "scroll_content_view",
        Container::new().background(p.background),
    );
    region.relate(
        content,
        [
            Relation::align(Edge::Top, Target::Parent, 0),
            Relation::align(Edge::Leading, Target::Parent, 0),
            Relation::align(Edge::Trailing, Target::Parent, 0),
            Relation::height(theme.metrics.demo_height.saturating_mul(2)),
        ],
    );

    let text = region.add(
        content,
        "scroll_content",
        Label::new(SCROLL_TEXT).color(p.text).multiline(),
    );
    region.relate(
        text,
        [
            Relation::align(Edge::Top, Target::Parent, 10),
            Relation::align(Edge::Leading, Target::Parent, 10),
            Relation::align(Edge::Trailing, Target::Parent, -10),
            Relation::align(Edge::Bottom, Target::Parent, -10),
        ],
    );

    region.hug(root, scroll, theme.metrics.padding);
    region
}
