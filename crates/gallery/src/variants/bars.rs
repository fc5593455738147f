//! Simulated navigation bar, tab bar and toolbar.
//!
//! Each bar is a plain container with a fixed height whose items are
//! pinned to its edges; a caption closes the region below the bar.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{close_with_caption, first, inset};
use crate::region::Region;
use crate::theme::Theme;

const BAR_INSET: i32 = 16;
const TOOL_SPACING: i32 = 20;
const TAB_BAR_HEIGHT: u32 = 50;
const TAB_ICON: u32 = 24;

const TABS: [(&str, &str, Symbol); 4] = [
    ("home", "Home", Symbol::HouseFill),
    ("search", "Search", Symbol::MagnifyingGlass),
    ("profile", "Profile", Symbol::PersonFill),
    ("settings", "Settings", Symbol::Gear),
];

fn centered_y() -> Relation {
    Relation::align(Edge::CenterY, Target::Parent, 0)
}

/// A blue bar with back, title and edit items.
pub fn navigation_bar(theme: &Theme) -> Region {
    let p = &theme.palette;
    let m = &theme.metrics;
    let mut region = Region::new(theme);
    let root = region.root();

    let bar = region.add(
        root,
        "nav_bar_demo",
        Container::new()
            .background(p.accent)
            .corner_radius(m.corner_radius),
    );
    region.relate(bar, [first(theme), Relation::height(m.control_height)]);
    region.relate(bar, inset(theme));

    let back = region.add(
        bar,
        "back_button",
        Button::symbol(Symbol::ChevronLeft).tint(p.inverse_text),
    );
    region.relate(
        back,
        [
            Relation::align(Edge::Leading, Target::Parent, BAR_INSET),
            centered_y(),
        ],
    );

    let title = region.add(
        bar,
        "nav_title_label",
        Label::new("Navigation Bar Title")
            .font(TextStyle::bold(17))
            .color(p.inverse_text),
    );
    region.relate(
        title,
        [Relation::align(Edge::CenterX, Target::Parent, 0), centered_y()],
    );

    let edit = region.add(
        bar,
        "edit_button",
        Button::titled("Edit").tint(p.inverse_text),
    );
    region.relate(
        edit,
        [
            Relation::align(Edge::Trailing, Target::Parent, -BAR_INSET),
            centered_y(),
        ],
    );

    close_with_caption(
        &mut region,
        bar,
        "nav_description_label",
        "This is a simulated navigation bar. The real navigation bar is at the top of this screen.",
        theme,
    );
    region
}

/// A bordered bar split into four equal tabs, each an icon over a title.
pub fn tab_bar(theme: &Theme) -> Region {
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let root = region.root();

    let bar = region.add(
        root,
        "tab_bar_demo",
        Container::new()
            .background(p.background)
            .border(p.separator, 1),
    );
    region.relate(bar, [first(theme), Relation::height(TAB_BAR_HEIGHT)]);
    region.relate(bar, inset(theme));

    let mut previous: Option<NodeId> = None;
    for (index, (name, title, symbol)) in TABS.into_iter().enumerate() {
        let tab = region.add(bar, format!("{name}_tab"), Container::new());
        let leading = match previous {
            Some(prev) => Relation::pin(Edge::Leading, Target::Node(prev), Edge::Trailing, 0),
            None => Relation::align(Edge::Leading, Target::Parent, 0),
        };
        // The last tab takes the rounding remainder so the row ends flush.
        let width = if index + 1 == TABS.len() {
            Relation::align(Edge::Trailing, Target::Parent, 0)
        } else {
            Relation::Proportional {
                extent: Extent::Width,
                target: Target::Parent,
                multiplier: 0.25,
            }
        };
        region.relate(
            tab,
            [
                leading,
                width,
                Relation::align(Edge::Top, Target::Parent, 0),
                Relation::align(Edge::Bottom, Target::Parent, 0),
            ],
        );

        let icon = region.add(
            tab,
            format!("{name}_tab_icon"),
            Image::new(symbol).tint(p.accent),
        );
        region.relate(
            icon,
            [
                Relation::align(Edge::Top, Target::Parent, 5),
                Relation::align(Edge::CenterX, Target::Parent, 0),
                Relation::width(TAB_ICON),
                Relation::height(TAB_ICON),
            ],
        );

        let label = region.add(
            tab,
            format!("{name}_tab_label"),
            Label::new(title)
                .font(TextStyle::regular(12))
                .color(p.text)
                .align(TextAlign::Center),
        );
        region.relate(
            label,
            [
                Relation::below(icon, 2),
                Relation::align(Edge::CenterX, Target::Parent, 0),
            ],
        );
        previous = Some(tab);
    }

    close_with_caption(
        &mut region,
        bar,
        "tab_bar_description_label",
        "This is a simulated tab bar. You can tap on the different tabs.",
        theme,
    );
    region
}

/// A bar with two leading and two trailing icon buttons.
pub fn toolbar(theme: &Theme) -> Region {
    let p = &theme.palette;
    let m = &theme.metrics;
    let mut region = Region::new(theme);
    let root = region.root();

    let bar = region.add(
        root,
        "toolbar_demo",
        Container::new().background(p.container).corner_radius(4),
    );
    region.relate(bar, [first(theme), Relation::height(m.control_height)]);
    region.relate(bar, inset(theme));

    let tool = |region: &mut Region, id: &str, symbol: Symbol| {
        region.add(bar, id, Button::symbol(symbol).tint(p.accent))
    };

    let back = tool(&mut region, "toolbar_back_button", Symbol::ArrowLeft);
    region.relate(
        back,
        [
            Relation::align(Edge::Leading, Target::Parent, TOOL_SPACING),
            centered_y(),
        ],
    );

    let forward = tool(&mut region, "toolbar_forward_button", Symbol::ArrowRight);
    region.relate(
        forward,
        [
            Relation::pin(Edge::Leading, Target::Node(back), Edge::Trailing, TOOL_SPACING),
            centered_y(),
        ],
    );

    let share = tool(&mut region, "toolbar_share_button", Symbol::SquareAndArrowUp);
    let bookmark = tool(&mut region, "toolbar_bookmark_button", Symbol::Bookmark);
    region.relate(
        bookmark,
        [
            Relation::align(Edge::Trailing, Target::Parent, -TOOL_SPACING),
            centered_y(),
        ],
    );
    region.relate(
        share,
        [
            Relation::pin(Edge::Trailing, Target::Node(bookmark), Edge::Leading, -TOOL_SPACING),
            centered_y(),
        ],
    );

    close_with_caption(
        &mut region,
        bar,
        "toolbar_description_label",
        "This is a simulated toolbar. You can tap on the different toolbar items.",
        theme,
    );
    region
}
