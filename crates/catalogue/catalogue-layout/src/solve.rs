//! Iterative relation solver.
//!
//! Every node carries one [`Span`] per axis holding whatever is known about
//! its start, end, centre and length in its parent's coordinate space. Each
//! pass applies all relations whose inputs are known and derives missing
//! span fields from the known ones. Passes repeat until nothing changes.
//!
//! The first value written to a span field wins; later relations that would
//! write a different value are ignored. A span is complete once two of its
//! fields are known.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::anchor::{Axis, Position, Relation, Target};
use crate::measure::Measurable;
use crate::tree::{BoxTree, NodeId};

/// Solved extent of one node along one axis, in parent coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Span {
    /// Leading / top edge.
    pub start: Option<i32>,
    /// Trailing / bottom edge.
    pub end: Option<i32>,
    /// Centre line.
    pub center: Option<i32>,
    /// Length along the axis.
    pub len: Option<i32>,
}

impl Span {
    /// Value of the edge at `position`.
    pub(crate) fn value(&self, position: Position) -> Option<i32> {
        match position {
            Position::Start => self.start,
            Position::End => self.end,
            Position::Center => self.center,
        }
    }

    fn set(&mut self, position: Position, value: i32) -> bool {
        let slot = match position {
            Position::Start => &mut self.start,
            Position::End => &mut self.end,
            Position::Center => &mut self.center,
        };
        fill(slot, value)
    }

    fn set_len(&mut self, value: i32) -> bool {
        fill(&mut self.len, value)
    }

    /// Fills unknown fields from known ones; `true` if anything changed.
    fn derive(&mut self) -> bool {
        let mut changed = false;
        if self.len.is_none() {
            let len = match (self.start, self.end, self.center) {
                (Some(s), Some(e), _) => Some(e.saturating_sub(s)),
                (Some(s), None, Some(c)) => Some(c.saturating_sub(s).saturating_mul(2)),
                (None, Some(e), Some(c)) => Some(e.saturating_sub(c).saturating_mul(2)),
                _ => None,
            };
            if let Some(len) = len {
                changed |= self.set_len(len);
            }
        }
        if let Some(len) = self.len {
            let half = len / 2;
            if self.start.is_none() {
                let start = self
                    .end
                    .map(|e| e.saturating_sub(len))
                    .or_else(|| self.center.map(|c| c.saturating_sub(half)));
                if let Some(start) = start {
                    changed |= fill(&mut self.start, start);
                }
            }
            if let Some(start) = self.start {
                changed |= fill(&mut self.end, start.saturating_add(len));
                changed |= fill(&mut self.center, start.saturating_add(half));
            }
        }
        changed
    }

    /// `true` once position and length are both known.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.len.is_some()
    }
}

fn fill(slot: &mut Option<i32>, value: i32) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

/// Solved frame of a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Relative to the parent's top-left corner.
    pub local: Rectangle,
    /// Relative to the root's top-left corner.
    pub absolute: Rectangle,
}

impl Frame {
    /// Bottom edge in parent coordinates (exclusive).
    pub fn local_bottom(&self) -> i32 {
        bottom(&self.local)
    }

    /// Bottom edge in root coordinates (exclusive).
    pub fn absolute_bottom(&self) -> i32 {
        bottom(&self.absolute)
    }
}

fn bottom(rect: &Rectangle) -> i32 {
    rect.top_left
        .y
        .saturating_add(i32::try_from(rect.size.height).unwrap_or(i32::MAX))
}

/// Frames for every node of a tree, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    frames: Vec<Frame>,
}

impl Arrangement {
    /// Frame of `id`.
    pub fn frame(&self, id: NodeId) -> Option<&Frame> {
        self.frames.get(id.index())
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` for an arrangement of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// A node whose span could not be completed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Unsolved {
    /// Offending node.
    pub node: NodeId,
    /// Axis left incomplete.
    pub axis: Axis,
}

/// Solves every relation of `tree` for a root `width` pixels wide.
///
/// The root is placed at the origin; its height comes from its own
/// relations (usually a hug).
pub fn solve<T: Measurable>(tree: &BoxTree<T>, width: u32) -> Result<Arrangement, Unsolved> {
    let mut solver = Solver {
        tree,
        spans: vec![[Span::default(); 2]; tree.len()],
    };
    solver.seed_root(width);

    let max_passes = tree.len().saturating_mul(4).saturating_add(4);
    let mut passes = 0usize;
    loop {
        let mut changed = false;
        for (id, _) in tree.nodes() {
            changed |= solver.step(id);
        }
        passes = passes.saturating_add(1);
        tracing::trace!(pass = passes, changed, "layout solver pass");
        if !changed || passes >= max_passes {
            break;
        }
    }

    let order = tree.preorder();
    for &id in &order {
        for axis in Axis::ALL {
            if !solver.span(id, axis).is_complete() {
                return Err(Unsolved { node: id, axis });
            }
        }
    }

    let zero = Rectangle::new(Point::zero(), Size::zero());
    let mut frames = vec![
        Frame {
            local: zero,
            absolute: zero,
        };
        tree.len()
    ];
    for id in order {
        let local = solver.rect(id);
        let origin = tree
            .parent(id)
            .and_then(|p| frames.get(p.index()))
            .map_or(Point::zero(), |f| f.absolute.top_left);
        if let Some(frame) = frames.get_mut(id.index()) {
            *frame = Frame {
                local,
                absolute: Rectangle::new(origin + local.top_left, local.size),
            };
        }
    }
    tracing::debug!(nodes = tree.len(), passes, "layout solved");
    Ok(Arrangement { frames })
}

struct Solver<'a, T> {
    tree: &'a BoxTree<T>,
    spans: Vec<[Span; 2]>,
}

impl<T: Measurable> Solver<'_, T> {
    fn span(&self, id: NodeId, axis: Axis) -> Span {
        self.spans
            .get(id.index())
            .and_then(|s| s.get(axis.index()))
            .copied()
            .unwrap_or_default()
    }

    fn span_mut(&mut self, id: NodeId, axis: Axis) -> Option<&mut Span> {
        self.spans
            .get_mut(id.index())
            .and_then(|s| s.get_mut(axis.index()))
    }

    fn seed_root(&mut self, width: u32) {
        let root = self.tree.root();
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        if let Some(h) = self.span_mut(root, Axis::Horizontal) {
            h.start = Some(0);
            h.len = Some(width);
        }
        if let Some(v) = self.span_mut(root, Axis::Vertical) {
            v.start = Some(0);
        }
    }

    /// Edge value of `target` as seen from `node`'s parent.
    fn target_value(&self, node: NodeId, target: Target, axis: Axis, position: Position) -> Option<i32> {
        match target {
            // Frames are parent-local: the start edge is known before the
            // parent's extent, which a hugging parent only learns later.
            Target::Parent => {
                let parent = self.tree.parent(node)?;
                match position {
                    Position::Start => Some(0),
                    Position::End => self.span(parent, axis).len,
                    Position::Center => self.span(parent, axis).len.map(|len| len / 2),
                }
            }
            Target::Node(other) => self.span(other, axis).value(position),
        }
    }

    fn target_len(&self, node: NodeId, target: Target, axis: Axis) -> Option<i32> {
        let id = match target {
            Target::Parent => self.tree.parent(node)?,
            Target::Node(other) => other,
        };
        self.span(id, axis).len
    }

    fn step(&mut self, id: NodeId) -> bool {
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        let mut changed = false;
        for relation in node.relations() {
            changed |= self.apply(id, relation);
        }
        for axis in Axis::ALL {
            changed |= self.apply_intrinsic(id, axis);
            if let Some(span) = self.span_mut(id, axis) {
                changed |= span.derive();
            }
        }
        changed
    }

    fn apply(&mut self, id: NodeId, relation: &Relation) -> bool {
        match *relation {
            Relation::Pin {
                edge,
                target,
                target_edge,
                offset,
            } => {
                let Some(value) =
                    self.target_value(id, target, target_edge.axis(), target_edge.position())
                else {
                    return false;
                };
                self.span_mut(id, edge.axis())
                    .is_some_and(|s| s.set(edge.position(), value.saturating_add(offset)))
            }
            Relation::Fixed { extent, value } => {
                let value = i32::try_from(value).unwrap_or(i32::MAX);
                self.span_mut(id, extent.axis())
                    .is_some_and(|s| s.set_len(value))
            }
            Relation::Proportional {
                extent,
                target,
                multiplier,
            } => {
                let axis = extent.axis();
                let Some(len) = self.target_len(id, target, axis) else {
                    return false;
                };
                #[allow(clippy::cast_possible_truncation)]
                let scaled = (len as f32 * multiplier).round() as i32;
                self.span_mut(id, axis).is_some_and(|s| s.set_len(scaled))
            }
            Relation::Hug { child, inset } => {
                let Some(end) = self.span(child, Axis::Vertical).end else {
                    return false;
                };
                let inset = i32::try_from(inset).unwrap_or(i32::MAX);
                self.span_mut(id, Axis::Vertical)
                    .is_some_and(|s| s.set_len(end.saturating_add(inset)))
            }
        }
    }

    /// Falls back to the item's measured size when the relations on `axis`
    /// cannot produce a length by themselves.
    fn apply_intrinsic(&mut self, id: NodeId, axis: Axis) -> bool {
        if self.span(id, axis).len.is_some() || !self.needs_intrinsic(id, axis) {
            return false;
        }
        let Some(item) = self.tree.item(id) else {
            return false;
        };
        let measure = item.measure();
        let len = match axis {
            Axis::Horizontal => measure.width(),
            Axis::Vertical => {
                let Some(width) = self.span(id, Axis::Horizontal).len else {
                    return false;
                };
                measure.height_for_width(u32::try_from(width).unwrap_or(0))
            }
        };
        let len = i32::try_from(len).unwrap_or(i32::MAX);
        self.span_mut(id, axis).is_some_and(|s| s.set_len(len))
    }

    fn needs_intrinsic(&self, id: NodeId, axis: Axis) -> bool {
        if id == self.tree.root() && axis == Axis::Horizontal {
            return false;
        }
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        let mut pinned: heapless::Vec<Position, 3> = heapless::Vec::new();
        for relation in node.relations().iter().filter(|r| r.axis() == axis) {
            match relation {
                Relation::Pin { edge, .. } => {
                    let position = edge.position();
                    if !pinned.contains(&position) {
                        // Capacity 3 equals the number of positions.
                        let _ = pinned.push(position);
                    }
                }
                _ => return false,
            }
        }
        pinned.len() < 2
    }

    fn rect(&self, id: NodeId) -> Rectangle {
        let h = self.span(id, Axis::Horizontal);
        let v = self.span(id, Axis::Vertical);
        let size = |len: Option<i32>| len.and_then(|l| u32::try_from(l).ok()).unwrap_or(0);
        Rectangle::new(
            Point::new(h.start.unwrap_or(0), v.start.unwrap_or(0)),
            Size::new(size(h.len), size(v.len)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{Edge, Extent};
    use crate::measure::Measure;

    struct Block(&'static str, Measure);

    impl Measurable for Block {
        fn test_id(&self) -> &str {
            self.0
        }
        fn measure(&self) -> Measure {
            self.1
        }
    }

    fn block(name: &'static str, w: u32, h: u32) -> Block {
        Block(name, Measure::Fixed(Size::new(w, h)))
    }

    #[test]
    fn test_span_derives_from_start_and_len() {
        let mut span = Span {
            start: Some(10),
            len: Some(30),
            ..Span::default()
        };
        assert!(span.derive());
        assert_eq!(span.end, Some(40));
        assert_eq!(span.center, Some(25));
        assert!(!span.derive());
    }

    #[test]
    fn test_span_derives_from_center_and_len() {
        let mut span = Span {
            center: Some(175),
            len: Some(200),
            ..Span::default()
        };
        span.derive();
        assert_eq!(span.start, Some(75));
        assert_eq!(span.end, Some(275));
    }

    #[test]
    fn test_span_first_value_wins() {
        let mut span = Span::default();
        assert!(span.set(Position::Start, 5));
        assert!(!span.set(Position::Start, 9));
        assert_eq!(span.start, Some(5));
    }

    #[test]
    fn test_solve_stack_with_hug() {
        let mut tree = BoxTree::new(block("root", 0, 0));
        let root = tree.root();
        let a = tree.add_child(root, block("a", 200, 44));
        let b = tree.add_child(root, block("b", 44, 44));
        tree.relate_all(
            a,
            [
                Relation::align(Edge::Top, Target::Parent, 20),
                Relation::align(Edge::CenterX, Target::Parent, 0),
            ],
        );
        tree.relate_all(
            b,
            [
                Relation::below(a, 20),
                Relation::align(Edge::CenterX, Target::Parent, 0),
            ],
        );
        tree.relate(root, Relation::Hug { child: b, inset: 20 });

        let arr = solve(&tree, 350).unwrap();
        let fa = arr.frame(a).unwrap();
        let fb = arr.frame(b).unwrap();
        assert_eq!(fa.local, Rectangle::new(Point::new(75, 20), Size::new(200, 44)));
        assert_eq!(fb.local.top_left, Point::new(153, 84));
        assert_eq!(arr.frame(root).unwrap().local.size, Size::new(350, 148));
    }

    #[test]
    fn test_solve_absolute_offsets_nest() {
        let mut tree = BoxTree::new(block("root", 0, 0));
        let root = tree.root();
        let bar = tree.add_child(root, block("bar", 0, 0));
        let item = tree.add_child(bar, block("item", 24, 24));
        tree.relate_all(
            bar,
            [
                Relation::align(Edge::Top, Target::Parent, 20),
                Relation::align(Edge::Leading, Target::Parent, 20),
                Relation::align(Edge::Trailing, Target::Parent, -20),
                Relation::height(50),
            ],
        );
        tree.relate_all(
            item,
            [
                Relation::align(Edge::Top, Target::Parent, 5),
                Relation::align(Edge::Leading, Target::Parent, 10),
            ],
        );
        tree.relate(root, Relation::Hug { child: bar, inset: 20 });

        let arr = solve(&tree, 350).unwrap();
        let f = arr.frame(item).unwrap();
        assert_eq!(f.local.top_left, Point::new(10, 5));
        assert_eq!(f.absolute.top_left, Point::new(30, 25));
        assert_eq!(arr.frame(bar).unwrap().local.size, Size::new(310, 50));
    }

    #[test]
    fn test_solve_proportional_width() {
        let mut tree = BoxTree::new(block("root", 0, 0));
        let root = tree.root();
        let quarter = tree.add_child(root, block("q", 0, 10));
        tree.relate_all(
            quarter,
            [
                Relation::align(Edge::Top, Target::Parent, 0),
                Relation::align(Edge::Leading, Target::Parent, 0),
                Relation::Proportional {
                    extent: Extent::Width,
                    target: Target::Parent,
                    multiplier: 0.25,
                },
            ],
        );
        tree.relate(root, Relation::Hug { child: quarter, inset: 0 });
        let arr = solve(&tree, 400).unwrap();
        assert_eq!(arr.frame(quarter).unwrap().local.size, Size::new(100, 10));
    }

    #[test]
    fn test_solve_wrapping_text_uses_solved_width() {
        let mut tree = BoxTree::new(block("root", 0, 0));
        let root = tree.root();
        let text = tree.add_child(
            root,
            Block(
                "text",
                Measure::Text {
                    chars: 100,
                    char_width: 9,
                    line_height: 21,
                    max_lines: 0,
                },
            ),
        );
        tree.relate_all(
            text,
            [
                Relation::align(Edge::Top, Target::Parent, 0),
                Relation::align(Edge::Leading, Target::Parent, 20),
                Relation::align(Edge::Trailing, Target::Parent, -20),
            ],
        );
        tree.relate(root, Relation::Hug { child: text, inset: 0 });
        let arr = solve(&tree, 350).unwrap();
        assert_eq!(arr.frame(text).unwrap().local.size, Size::new(310, 63));
    }

    #[test]
    fn test_solve_nested_hugs_pin_to_parent_top() {
        let mut tree = BoxTree::new(block("root", 0, 0));
        let root = tree.root();
        let content = tree.add_child(root, block("content", 0, 0));
        let label = tree.add_child(content, block("label", 100, 30));
        tree.relate_all(
            content,
            [
                Relation::align(Edge::Top, Target::Parent, 0),
                Relation::align(Edge::Leading, Target::Parent, 0),
                Relation::align(Edge::Trailing, Target::Parent, 0),
                Relation::Hug { child: label, inset: 10 },
            ],
        );
        tree.relate_all(
            label,
            [
                Relation::align(Edge::Top, Target::Parent, 10),
                Relation::align(Edge::Leading, Target::Parent, 10),
            ],
        );
        tree.relate(root, Relation::Hug { child: content, inset: 0 });

        let arr = solve(&tree, 200).unwrap();
        assert_eq!(arr.frame(label).unwrap().absolute.top_left, Point::new(10, 10));
        assert_eq!(arr.frame(content).unwrap().local.size, Size::new(200, 50));
        assert_eq!(arr.frame(root).unwrap().local.size, Size::new(200, 50));
    }

    #[test]
    fn test_solve_reports_unresolved_position() {
        let mut tree = BoxTree::new(block("root", 0, 0));
        let root = tree.root();
        let floating = tree.add_child(root, block("floating", 10, 10));
        tree.relate(floating, Relation::align(Edge::Leading, Target::Parent, 0));
        tree.relate(root, Relation::height(100));
        let err = solve(&tree, 100).unwrap_err();
        assert_eq!(
            err,
            Unsolved {
                node: floating,
                axis: Axis::Vertical
            }
        );
    }
}
