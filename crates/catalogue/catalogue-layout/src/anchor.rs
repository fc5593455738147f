//! Declarative layout relations.
//!
//! A [`Relation`] states one fact about a node's frame: an edge sits at a
//! fixed offset from another edge, an extent is fixed or proportional, or a
//! container's height follows one of its children. The solver in
//! [`crate::solve`] turns a set of relations into concrete frames.
//!
//! Edges are resolved in the coordinate space of the node's parent, so a
//! relation may only reference the parent itself or a sibling. Hugging is
//! the exception: it references a direct child of the hugging container.

use core::fmt;

use crate::tree::NodeId;

/// Maximum number of relations a single node may declare.
pub const MAX_RELATIONS: usize = 8;

/// Bounded relation list carried by every node.
pub type Relations = heapless::Vec<Relation, MAX_RELATIONS>;

/// Layout axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub(crate) const fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        })
    }
}

/// Where along an axis an edge sits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Position {
    Start,
    End,
    Center,
}

/// An anchorable edge (or centre line) of a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Leading (left) edge.
    Leading,
    /// Trailing (right) edge.
    Trailing,
    /// Horizontal centre line.
    CenterX,
    /// Vertical centre line.
    CenterY,
}

impl Edge {
    /// The axis this edge constrains.
    pub const fn axis(self) -> Axis {
        match self {
            Edge::Leading | Edge::Trailing | Edge::CenterX => Axis::Horizontal,
            Edge::Top | Edge::Bottom | Edge::CenterY => Axis::Vertical,
        }
    }

    pub(crate) const fn position(self) -> Position {
        match self {
            Edge::Top | Edge::Leading => Position::Start,
            Edge::Bottom | Edge::Trailing => Position::End,
            Edge::CenterX | Edge::CenterY => Position::Center,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Leading => "leading",
            Edge::Trailing => "trailing",
            Edge::CenterX => "centre-x",
            Edge::CenterY => "centre-y",
        })
    }
}

/// A frame extent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Horizontal size.
    Width,
    /// Vertical size.
    Height,
}

impl Extent {
    /// The axis this extent measures.
    pub const fn axis(self) -> Axis {
        match self {
            Extent::Width => Axis::Horizontal,
            Extent::Height => Axis::Vertical,
        }
    }
}

/// What a relation is measured against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The node's own container.
    Parent,
    /// A sibling sharing the same container.
    Node(NodeId),
}

/// One declared constraint on a node's frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Relation {
    /// `edge` sits `offset` pixels past `target_edge` of `target`.
    Pin {
        /// Edge of the constrained node.
        edge: Edge,
        /// Reference frame.
        target: Target,
        /// Edge of the reference frame. Must share an axis with `edge`.
        target_edge: Edge,
        /// Signed distance; positive moves right / down.
        offset: i32,
    },
    /// Extent is a constant.
    Fixed {
        /// Constrained extent.
        extent: Extent,
        /// Size in pixels.
        value: u32,
    },
    /// Extent is a multiple of the same extent of `target`.
    Proportional {
        /// Constrained extent.
        extent: Extent,
        /// Reference frame.
        target: Target,
        /// Scale factor, e.g. `0.25` for quarter width.
        multiplier: f32,
    },
    /// Container height = bottom of `child` + `inset`.
    Hug {
        /// Direct child whose bottom edge closes the container.
        child: NodeId,
        /// Gap between the child's bottom and the container's bottom.
        inset: u32,
    },
}

impl Relation {
    /// Pins `edge` to the matching edge of `target`.
    pub const fn align(edge: Edge, target: Target, offset: i32) -> Self {
        Relation::Pin {
            edge,
            target,
            target_edge: edge,
            offset,
        }
    }

    /// Pins `edge` to a different edge of `target`.
    pub const fn pin(edge: Edge, target: Target, target_edge: Edge, offset: i32) -> Self {
        Relation::Pin {
            edge,
            target,
            target_edge,
            offset,
        }
    }

    /// Places the top edge `gap` pixels below `above`.
    pub const fn below(above: NodeId, gap: i32) -> Self {
        Self::pin(Edge::Top, Target::Node(above), Edge::Bottom, gap)
    }

    /// Fixed width.
    pub const fn width(value: u32) -> Self {
        Relation::Fixed {
            extent: Extent::Width,
            value,
        }
    }

    /// Fixed height.
    pub const fn height(value: u32) -> Self {
        Relation::Fixed {
            extent: Extent::Height,
            value,
        }
    }

    /// The axis this relation constrains.
    pub const fn axis(&self) -> Axis {
        match self {
            Relation::Pin { edge, .. } => edge.axis(),
            Relation::Fixed { extent, .. } | Relation::Proportional { extent, .. } => {
                extent.axis()
            }
            Relation::Hug { .. } => Axis::Vertical,
        }
    }

    /// Whether the relation determines a size rather than a position.
    pub const fn is_sizing(&self) -> bool {
        !matches!(self, Relation::Pin { .. })
    }
}
