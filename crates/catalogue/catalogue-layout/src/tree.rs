//! Arena tree of layout nodes.
//!
//! Nodes are addressed by [`NodeId`], an index into the arena. Building a
//! tree never fails: references to missing nodes and relation lists that
//! overflow are recorded and reported by [`crate::sizer::finalize`].

use crate::anchor::{Relation, Relations, Target};

/// Index of a node inside a [`BoxTree`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw arena index.
    pub const fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    /// Raw arena index.
    pub const fn index(self) -> usize {
        self.0
    }

    const fn offset(self, by: usize) -> Self {
        NodeId(self.0.saturating_add(by))
    }
}

/// A node: its payload, its place in the hierarchy and its relations.
#[derive(Debug, Clone)]
pub struct Node<T> {
    item: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    relations: Relations,
    overflowed: bool,
}

impl<T> Node<T> {
    /// Payload.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Containing node; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Declared relations in declaration order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// `true` if more than [`MAX_RELATIONS`](crate::anchor::MAX_RELATIONS)
    /// relations were declared.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// The child this node hugs, if any.
    pub fn hugged(&self) -> Option<NodeId> {
        self.relations.iter().find_map(|r| match r {
            Relation::Hug { child, .. } => Some(*child),
            _ => None,
        })
    }
}

/// Arena tree with a single root.
#[derive(Debug, Clone)]
pub struct BoxTree<T> {
    nodes: Vec<Node<T>>,
    stray_relations: Vec<NodeId>,
}

impl<T> BoxTree<T> {
    /// Creates a tree holding only `root`.
    pub fn new(root: T) -> Self {
        Self {
            nodes: vec![Node {
                item: root,
                parent: None,
                children: Vec::new(),
                relations: Relations::new(),
                overflowed: false,
            }],
            stray_relations: Vec::new(),
        }
    }

    /// The root node id.
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends `item` as the last child of `parent`.
    ///
    /// An unknown `parent` is kept as-is and rejected when the tree is
    /// finalized.
    pub fn add_child(&mut self, parent: NodeId, item: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        self.nodes.push(Node {
            item,
            parent: Some(parent),
            children: Vec::new(),
            relations: Relations::new(),
            overflowed: false,
        });
        id
    }

    /// Declares `relation` on `node`.
    pub fn relate(&mut self, node: NodeId, relation: Relation) {
        match self.nodes.get_mut(node.0) {
            Some(n) => {
                if n.relations.push(relation).is_err() {
                    n.overflowed = true;
                }
            }
            None => self.stray_relations.push(node),
        }
    }

    /// Declares every relation in `relations` on `node`.
    pub fn relate_all(&mut self, node: NodeId, relations: impl IntoIterator<Item = Relation>) {
        for relation in relations {
            self.relate(node, relation);
        }
    }

    /// Node lookup.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Payload lookup.
    pub fn item(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(Node::item)
    }

    /// Mutable payload lookup.
    pub fn item_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|n| &mut n.item)
    }

    /// Parent lookup; `None` for the root or unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of `id`, empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// All nodes in arena order with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Ids that had relations declared on them but do not exist.
    pub fn stray_relations(&self) -> &[NodeId] {
        &self.stray_relations
    }

    /// Depth-first pre-order traversal starting at the root.
    ///
    /// Nodes detached by an invalid parent are not visited.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Number of ancestors of `id` (root = 0).
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0usize;
        let mut cursor = self.parent(id);
        while let Some(p) = cursor {
            depth = depth.saturating_add(1);
            // Cycles cannot be built through the public API, but stay bounded.
            if depth > self.nodes.len() {
                break;
            }
            cursor = self.parent(p);
        }
        depth
    }

    /// Moves every node of `other` under `parent`, returning the new id of
    /// `other`'s root. Relations inside `other` are remapped.
    pub fn graft(&mut self, parent: NodeId, other: BoxTree<T>) -> NodeId {
        let base = self.nodes.len();
        let grafted_root = NodeId(base);
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(grafted_root);
        }
        for (index, node) in other.nodes.into_iter().enumerate() {
            let Node {
                item,
                parent: old_parent,
                children,
                relations,
                overflowed,
            } = node;
            let new_parent = if index == 0 {
                Some(parent)
            } else {
                old_parent.map(|p| p.offset(base))
            };
            let relations = relations.into_iter().map(|r| remap(r, base)).collect();
            self.nodes.push(Node {
                item,
                parent: new_parent,
                children: children.into_iter().map(|c| c.offset(base)).collect(),
                relations,
                overflowed,
            });
        }
        self.stray_relations
            .extend(other.stray_relations.into_iter().map(|n| n.offset(base)));
        grafted_root
    }
}

fn remap(relation: Relation, base: usize) -> Relation {
    let target = |t: Target| match t {
        Target::Parent => Target::Parent,
        Target::Node(id) => Target::Node(id.offset(base)),
    };
    match relation {
        Relation::Pin {
            edge,
            target: t,
            target_edge,
            offset,
        } => Relation::Pin {
            edge,
            target: target(t),
            target_edge,
            offset,
        },
        Relation::Proportional {
            extent,
            target: t,
            multiplier,
        } => Relation::Proportional {
            extent,
            target: target(t),
            multiplier,
        },
        Relation::Hug { child, inset } => Relation::Hug {
            child: child.offset(base),
            inset,
        },
        fixed @ Relation::Fixed { .. } => fixed,
    }
}
