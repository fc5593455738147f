//! Layout errors reported by [`finalize`](crate::sizer::finalize).

use crate::anchor::{Axis, Edge, MAX_RELATIONS};

/// Why a tree could not be finalized.
///
/// Nodes are named by their [`test_id`](crate::measure::Measurable::test_id),
/// or `#<index>` when the node does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A container's height is not tied to anything.
    #[error(
        "container `{container}` has no declared height: pin its top and bottom, \
         give it a fixed or proportional height, or hug a child"
    )]
    IncompleteLayout {
        /// Offending container.
        container: String,
    },

    /// The relations did not determine a frame.
    #[error("`{node}` could not be resolved on the {axis} axis")]
    Unresolved {
        /// Offending node.
        node: String,
        /// Axis left incomplete.
        axis: Axis,
    },

    /// A child of a non-scrolling container extends past its bottom edge.
    #[error("`{child}` ends at y={child_bottom}, past the bottom of `{container}` (height {container_height})")]
    Overflow {
        /// Clipping container.
        container: String,
        /// Child that sticks out.
        child: String,
        /// Child bottom in container coordinates.
        child_bottom: i32,
        /// Container height.
        container_height: i32,
    },

    /// A hugging container closes on a child that is not its lowest one.
    #[error("`{container}` hugs `{child}` but `{bottom_most}` sits lower")]
    DetachedBottom {
        /// Hugging container.
        container: String,
        /// The hugged child.
        child: String,
        /// The actual bottom-most child.
        bottom_most: String,
    },

    /// Two nodes share an identifier.
    #[error("identifier `{identifier}` is used more than once")]
    DuplicateIdentifier {
        /// Repeated identifier.
        identifier: String,
    },

    /// A relation or parent link points at a node it may not reference.
    #[error("`{node}` refers to `{target}`, which is neither its parent, a sibling nor a child it can hug")]
    InvalidTarget {
        /// Node declaring the relation.
        node: String,
        /// Referenced node.
        target: String,
    },

    /// More relations were declared than a node can hold.
    #[error("`{node}` declares more than {} relations", MAX_RELATIONS)]
    TooManyRelations {
        /// Offending node.
        node: String,
    },

    /// A pin joins edges on different axes.
    #[error("`{node}` pins its {edge} edge to a {target_edge} edge")]
    AxisMismatch {
        /// Offending node.
        node: String,
        /// Pinned edge.
        edge: Edge,
        /// Reference edge.
        target_edge: Edge,
    },
}

impl LayoutError {
    /// Short, stable name of the error kind (useful in logs and CLI output).
    pub const fn kind(&self) -> &'static str {
        match self {
            LayoutError::IncompleteLayout { .. } => "incomplete-layout",
            LayoutError::Unresolved { .. } => "unresolved",
            LayoutError::Overflow { .. } => "overflow",
            LayoutError::DetachedBottom { .. } => "detached-bottom",
            LayoutError::DuplicateIdentifier { .. } => "duplicate-identifier",
            LayoutError::InvalidTarget { .. } => "invalid-target",
            LayoutError::TooManyRelations { .. } => "too-many-relations",
            LayoutError::AxisMismatch { .. } => "axis-mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_node() {
        let err = LayoutError::IncompleteLayout {
            container: "elements_container".into(),
        };
        assert!(err.to_string().contains("`elements_container`"));

        let err = LayoutError::Unresolved {
            node: "floating".into(),
            axis: Axis::Vertical,
        };
        assert_eq!(err.to_string(), "`floating` could not be resolved on the vertical axis");
    }

    #[test]
    fn test_too_many_relations_mentions_cap() {
        let err = LayoutError::TooManyRelations { node: "x".into() };
        assert_eq!(err.to_string(), format!("`x` declares more than {MAX_RELATIONS} relations"));
        assert_eq!(err.kind(), "too-many-relations");
    }
}
