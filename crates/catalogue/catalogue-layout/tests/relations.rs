//! Relation solving and sizing through the public API.
//!
//! Covers the shapes the catalogue actually builds: centred stacks,
//! fixed-height bars with edge-anchored items, quarter-width tabs and a
//! scroll viewport holding taller content.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use catalogue_layout::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone)]
struct Item {
    id: String,
    measure: Measure,
    scrolls: bool,
}

impl Item {
    fn fixed(id: &str, w: u32, h: u32) -> Self {
        Self {
            id: id.to_owned(),
            measure: Measure::Fixed(Size::new(w, h)),
            scrolls: false,
        }
    }

    fn container(id: &str) -> Self {
        Self::fixed(id, 0, 0)
    }
}

impl Measurable for Item {
    fn test_id(&self) -> &str {
        &self.id
    }
    fn measure(&self) -> Measure {
        self.measure
    }
    fn scrolls(&self) -> bool {
        self.scrolls
    }
}

fn find(arranged: &Arranged<Item>, id: &str) -> Frame {
    arranged
        .iter()
        .find(|(_, item, _)| item.id == id)
        .map(|(_, _, frame)| *frame)
        .unwrap_or_else(|| panic!("no node {id}"))
}

// ============================================================================
// Shapes
// ============================================================================

#[test]
fn fixed_bar_with_edge_anchored_items() {
    let mut tree = BoxTree::new(Item::container("root"));
    let root = tree.root();
    let bar = tree.add_child(root, Item::container("bar"));
    tree.relate_all(
        bar,
        [
            Relation::align(Edge::Top, Target::Parent, 20),
            Relation::align(Edge::Leading, Target::Parent, 20),
            Relation::align(Edge::Trailing, Target::Parent, -20),
            Relation::height(44),
        ],
    );
    let back = tree.add_child(bar, Item::fixed("back", 40, 20));
    tree.relate_all(
        back,
        [
            Relation::align(Edge::Leading, Target::Parent, 16),
            Relation::align(Edge::CenterY, Target::Parent, 0),
        ],
    );
    let edit = tree.add_child(bar, Item::fixed("edit", 30, 20));
    tree.relate_all(
        edit,
        [
            Relation::align(Edge::Trailing, Target::Parent, -16),
            Relation::align(Edge::CenterY, Target::Parent, 0),
        ],
    );
    tree.relate(root, Relation::Hug { child: bar, inset: 20 });

    let arranged = finalize(tree, 350).unwrap();
    assert_eq!(arranged.height(), 84);

    let back = find(&arranged, "back");
    assert_eq!(back.local.top_left, Point::new(16, 12));
    assert_eq!(back.absolute.top_left, Point::new(36, 32));

    let edit = find(&arranged, "edit");
    // bar is 310 wide; trailing at 310 - 16 = 294
    assert_eq!(edit.local.top_left.x, 264);
}

#[test]
fn quarter_width_items_chain_across_a_bar() {
    let mut tree = BoxTree::new(Item::container("root"));
    let root = tree.root();
    let bar = tree.add_child(root, Item::container("bar"));
    tree.relate_all(
        bar,
        [
            Relation::align(Edge::Top, Target::Parent, 0),
            Relation::align(Edge::Leading, Target::Parent, 0),
            Relation::align(Edge::Trailing, Target::Parent, 0),
            Relation::height(50),
        ],
    );
    let mut previous: Option<NodeId> = None;
    for name in ["a", "b", "c", "d"] {
        let tab = tree.add_child(bar, Item::container(name));
        let leading = match previous {
            None => Relation::align(Edge::Leading, Target::Parent, 0),
            Some(p) => Relation::pin(Edge::Leading, Target::Node(p), Edge::Trailing, 0),
        };
        tree.relate_all(
            tab,
            [
                leading,
                Relation::align(Edge::Top, Target::Parent, 0),
                Relation::align(Edge::Bottom, Target::Parent, 0),
                Relation::Proportional {
                    extent: Extent::Width,
                    target: Target::Parent,
                    multiplier: 0.25,
                },
            ],
        );
        previous = Some(tab);
    }
    tree.relate(root, Relation::Hug { child: bar, inset: 0 });

    let arranged = finalize(tree, 400).unwrap();
    for (i, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
        let frame = find(&arranged, name);
        assert_eq!(frame.local.size, Size::new(100, 50));
        assert_eq!(frame.local.top_left.x, 100 * i as i32);
    }
}

#[test]
fn scroll_viewport_keeps_taller_content() {
    let mut tree = BoxTree::new(Item::container("root"));
    let root = tree.root();
    let mut viewport = Item::container("viewport");
    viewport.scrolls = true;
    let viewport = tree.add_child(root, viewport);
    tree.relate_all(
        viewport,
        [
            Relation::align(Edge::Top, Target::Parent, 20),
            Relation::align(Edge::Leading, Target::Parent, 20),
            Relation::align(Edge::Trailing, Target::Parent, -20),
            Relation::height(200),
        ],
    );
    let content = tree.add_child(viewport, Item::container("content"));
    tree.relate_all(
        content,
        [
            Relation::align(Edge::Top, Target::Parent, 0),
            Relation::align(Edge::Leading, Target::Parent, 0),
            Relation::Proportional {
                extent: Extent::Width,
                target: Target::Parent,
                multiplier: 1.0,
            },
            Relation::height(400),
        ],
    );
    let text = tree.add_child(content, Item::fixed("text", 10, 10));
    tree.relate_all(
        text,
        [
            Relation::align(Edge::Top, Target::Parent, 10),
            Relation::align(Edge::Leading, Target::Parent, 10),
        ],
    );
    tree.relate(root, Relation::Hug { child: viewport, inset: 20 });

    let arranged = finalize(tree, 350).unwrap();
    assert_eq!(find(&arranged, "viewport").local.size.height, 200);
    assert_eq!(find(&arranged, "content").local.size, Size::new(310, 400));
    assert_eq!(arranged.height(), 240);
}

#[test]
fn grafted_tree_solves_under_new_parent() {
    let mut page = BoxTree::new(Item::container("page"));
    let page_root = page.root();
    let title = page.add_child(page_root, Item::fixed("title", 100, 27));
    page.relate_all(
        title,
        [
            Relation::align(Edge::Top, Target::Parent, 20),
            Relation::align(Edge::Leading, Target::Parent, 20),
        ],
    );

    let mut region = BoxTree::new(Item::container("region"));
    let region_root = region.root();
    let button = region.add_child(region_root, Item::fixed("button", 200, 44));
    region.relate_all(
        button,
        [
            Relation::align(Edge::Top, Target::Parent, 20),
            Relation::align(Edge::CenterX, Target::Parent, 0),
        ],
    );
    region.relate(region_root, Relation::Hug { child: button, inset: 20 });

    let grafted = page.graft(page_root, region);
    page.relate_all(
        grafted,
        [
            Relation::below(title, 20),
            Relation::align(Edge::Leading, Target::Parent, 20),
            Relation::align(Edge::Trailing, Target::Parent, -20),
        ],
    );
    page.relate(page_root, Relation::Hug { child: grafted, inset: 20 });

    let arranged = finalize(page, 350).unwrap();
    let button = find(&arranged, "button");
    assert_eq!(button.absolute.top_left, Point::new(75, 87));
    assert_eq!(arranged.height(), 20 + 27 + 20 + 84 + 20);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A vertical stack always hugs its last child regardless of gaps and
    /// heights, and every child fits inside the container.
    #[test]
    fn stack_height_is_sum_of_gaps_and_heights(
        heights in prop::collection::vec(1u32..120, 1..6),
        gap in 0i32..30,
        width in 100u32..800,
    ) {
        let mut tree = BoxTree::new(Item::container("root"));
        let root = tree.root();
        let mut previous: Option<NodeId> = None;
        for (i, h) in heights.iter().enumerate() {
            let id = tree.add_child(root, Item::fixed(&format!("n{i}"), 40, *h));
            let top = match previous {
                None => Relation::align(Edge::Top, Target::Parent, 20),
                Some(p) => Relation::below(p, gap),
            };
            tree.relate_all(id, [top, Relation::align(Edge::Leading, Target::Parent, 20)]);
            previous = Some(id);
        }
        let last = previous.unwrap();
        tree.relate(root, Relation::Hug { child: last, inset: 20 });

        let arranged = finalize(tree, width).unwrap();
        let gaps = gap as u32 * (heights.len() as u32 - 1);
        prop_assert_eq!(arranged.height(), 40 + gaps + heights.iter().sum::<u32>());
        prop_assert_eq!(arranged.size().width, width);
    }
}
