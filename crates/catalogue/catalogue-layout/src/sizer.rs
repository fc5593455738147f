//! Container sizer: validates a [`BoxTree`], solves it and checks that every
//! container's bottom edge is closed by its content.
//!
//! Checks run in this order, stopping at the first failure:
//!
//! 1. structure: parents exist, relation targets are the parent or a
//!    sibling, hugged nodes are direct children, pins stay on one axis,
//!    no relation list overflowed;
//! 2. closure: every container declares how its height is determined;
//! 3. identifier uniqueness;
//! 4. solving ([`crate::solve`]);
//! 5. post-solve: a hugged child is its container's bottom-most child, and
//!    no child pokes out of a non-scrolling container.

use std::collections::HashSet;

use embedded_graphics::geometry::Size;

use crate::anchor::{Edge, Extent, Relation, Target};
use crate::error::LayoutError;
use crate::measure::Measurable;
use crate::solve::{solve, Arrangement, Frame};
use crate::tree::{BoxTree, Node, NodeId};

/// A tree whose frames have all been resolved.
#[derive(Debug, Clone)]
pub struct Arranged<T> {
    tree: BoxTree<T>,
    arrangement: Arrangement,
}

impl<T> Arranged<T> {
    /// The underlying tree.
    pub fn tree(&self) -> &BoxTree<T> {
        &self.tree
    }

    /// Solved frame of `id`.
    pub fn frame(&self, id: NodeId) -> Option<&Frame> {
        self.arrangement.frame(id)
    }

    /// Size of the root frame.
    pub fn size(&self) -> Size {
        self.frame(self.tree.root())
            .map_or(Size::zero(), |f| f.local.size)
    }

    /// Height of the root frame.
    pub fn height(&self) -> u32 {
        self.size().height
    }

    /// Nodes in pre-order with their solved frames.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T, &Frame)> + '_ {
        self.tree.preorder().into_iter().filter_map(move |id| {
            let item = self.tree.item(id)?;
            let frame = self.arrangement.frame(id)?;
            Some((id, item, frame))
        })
    }

    /// Splits into tree and frames.
    pub fn into_parts(self) -> (BoxTree<T>, Arrangement) {
        (self.tree, self.arrangement)
    }
}

/// Validates, solves and checks `tree` for a root `width` pixels wide.
pub fn finalize<T: Measurable>(tree: BoxTree<T>, width: u32) -> Result<Arranged<T>, LayoutError> {
    check_structure(&tree)?;
    check_closure(&tree)?;
    check_unique_ids(&tree)?;

    let arrangement = solve(&tree, width).map_err(|unsolved| LayoutError::Unresolved {
        node: name(&tree, unsolved.node),
        axis: unsolved.axis,
    })?;

    check_bottoms(&tree, &arrangement)?;

    let arranged = Arranged { tree, arrangement };
    tracing::debug!(
        root = %name(&arranged.tree, arranged.tree.root()),
        width,
        height = arranged.height(),
        "layout finalized"
    );
    Ok(arranged)
}

fn name<T: Measurable>(tree: &BoxTree<T>, id: NodeId) -> String {
    tree.item(id)
        .map_or_else(|| format!("#{}", id.index()), |item| item.test_id().to_owned())
}

// ── Structure ─────────────────────────────────────────────────────────────────

fn check_structure<T: Measurable>(tree: &BoxTree<T>) -> Result<(), LayoutError> {
    if let Some(&stray) = tree.stray_relations().first() {
        return Err(LayoutError::InvalidTarget {
            node: name(tree, stray),
            target: name(tree, stray),
        });
    }
    for (id, node) in tree.nodes() {
        if let Some(parent) = node.parent() {
            if tree.get(parent).is_none() {
                return Err(LayoutError::InvalidTarget {
                    node: name(tree, id),
                    target: name(tree, parent),
                });
            }
        }
        if node.overflowed() {
            return Err(LayoutError::TooManyRelations {
                node: name(tree, id),
            });
        }
        for relation in node.relations() {
            check_relation(tree, id, node, relation)?;
        }
    }
    Ok(())
}

fn check_relation<T: Measurable>(
    tree: &BoxTree<T>,
    id: NodeId,
    node: &Node<T>,
    relation: &Relation,
) -> Result<(), LayoutError> {
    let invalid = |target: NodeId| LayoutError::InvalidTarget {
        node: name(tree, id),
        target: name(tree, target),
    };
    let check_target = |target: Target| match target {
        Target::Parent if node.parent().is_none() => Err(LayoutError::InvalidTarget {
            node: name(tree, id),
            target: "parent".to_owned(),
        }),
        Target::Parent => Ok(()),
        Target::Node(other) => {
            let sibling = other != id
                && tree.get(other).is_some()
                && tree.parent(other) == node.parent();
            if sibling {
                Ok(())
            } else {
                Err(invalid(other))
            }
        }
    };
    match *relation {
        Relation::Pin {
            edge,
            target,
            target_edge,
            ..
        } => {
            if edge.axis() != target_edge.axis() {
                return Err(LayoutError::AxisMismatch {
                    node: name(tree, id),
                    edge,
                    target_edge,
                });
            }
            check_target(target)
        }
        Relation::Proportional { target, .. } => check_target(target),
        Relation::Fixed { .. } => Ok(()),
        Relation::Hug { child, .. } => {
            if node.children().contains(&child) {
                Ok(())
            } else {
                Err(invalid(child))
            }
        }
    }
}

// ── Closure ───────────────────────────────────────────────────────────────────

/// Every container must say how its height is determined.
fn check_closure<T: Measurable>(tree: &BoxTree<T>) -> Result<(), LayoutError> {
    for (id, node) in tree.nodes() {
        if node.children().is_empty() {
            continue;
        }
        if !height_declared(node.relations()) {
            return Err(LayoutError::IncompleteLayout {
                container: name(tree, id),
            });
        }
    }
    Ok(())
}

fn height_declared(relations: &[Relation]) -> bool {
    let mut top = false;
    let mut bottom = false;
    for relation in relations {
        match relation {
            Relation::Fixed {
                extent: Extent::Height,
                ..
            }
            | Relation::Proportional {
                extent: Extent::Height,
                ..
            }
            | Relation::Hug { .. } => return true,
            Relation::Pin { edge: Edge::Top, .. } => top = true,
            Relation::Pin {
                edge: Edge::Bottom, ..
            } => bottom = true,
            _ => {}
        }
    }
    top && bottom
}

fn check_unique_ids<T: Measurable>(tree: &BoxTree<T>) -> Result<(), LayoutError> {
    let mut seen = HashSet::with_capacity(tree.len());
    for (_, node) in tree.nodes() {
        let id = node.item().test_id();
        if !seen.insert(id) {
            return Err(LayoutError::DuplicateIdentifier {
                identifier: id.to_owned(),
            });
        }
    }
    Ok(())
}

// ── Post-solve ────────────────────────────────────────────────────────────────

fn check_bottoms<T: Measurable>(
    tree: &BoxTree<T>,
    arrangement: &Arrangement,
) -> Result<(), LayoutError> {
    for id in tree.preorder() {
        let Some(node) = tree.get(id) else { continue };
        let Some(lowest) = lowest_child(node.children(), arrangement) else {
            continue;
        };

        if let Some(hugged) = node.hugged() {
            let hugged_bottom = bottom_of(arrangement, hugged);
            if hugged_bottom < lowest.1 {
                return Err(LayoutError::DetachedBottom {
                    container: name(tree, id),
                    child: name(tree, hugged),
                    bottom_most: name(tree, lowest.0),
                });
            }
        }

        if node.item().scrolls() {
            continue;
        }
        let height = arrangement
            .frame(id)
            .map_or(0, |f| i32::try_from(f.local.size.height).unwrap_or(i32::MAX));
        if lowest.1 > height {
            return Err(LayoutError::Overflow {
                container: name(tree, id),
                child: name(tree, lowest.0),
                child_bottom: lowest.1,
                container_height: height,
            });
        }
    }
    Ok(())
}

fn bottom_of(arrangement: &Arrangement, id: NodeId) -> i32 {
    arrangement.frame(id).map_or(i32::MIN, Frame::local_bottom)
}

/// The child with the greatest bottom edge; the first one wins ties.
fn lowest_child(children: &[NodeId], arrangement: &Arrangement) -> Option<(NodeId, i32)> {
    children
        .iter()
        .map(|&c| (c, bottom_of(arrangement, c)))
        .fold(None, |best, (c, b)| match best {
            Some((_, best_b)) if best_b >= b => best,
            _ => Some((c, b)),
        })
}
