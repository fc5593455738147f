//! Catalogue Layout System
//!
//! Declarative box layout for generated demo screens.
//!
//! # Architecture
//!
//! - Tree: [`tree::BoxTree`], an arena of nodes addressed by [`tree::NodeId`]
//! - Relations: edge pins, fixed / proportional extents, container hugging
//! - Solver: iterative span propagation with intrinsic-size fallback
//! - Sizer: [`sizer::finalize`] checks that every container's height is
//!   closed by its content, then solves and verifies the result
//!
//! # Example
//!
//! ```
//! use catalogue_layout::prelude::*;
//!
//! struct Item(&'static str, Size);
//!
//! impl Measurable for Item {
//!     fn test_id(&self) -> &str { self.0 }
//!     fn measure(&self) -> Measure { Measure::Fixed(self.1) }
//! }
//!
//! let mut tree = BoxTree::new(Item("container", Size::zero()));
//! let root = tree.root();
//! let button = tree.add_child(root, Item("button", Size::new(200, 44)));
//! tree.relate_all(button, [
//!     Relation::align(Edge::Top, Target::Parent, 20),
//!     Relation::align(Edge::CenterX, Target::Parent, 0),
//! ]);
//! tree.relate(root, Relation::Hug { child: button, inset: 20 });
//!
//! let arranged = finalize(tree, 350).unwrap();
//! assert_eq!(arranged.height(), 84);
//! ```

pub mod anchor;
pub mod error;
pub mod measure;
pub mod sizer;
pub mod solve;
pub mod tree;

pub mod prelude {
    //! Everything needed to build and finalize a layout tree.

    pub use crate::anchor::{Axis, Edge, Extent, Relation, Relations, Target, MAX_RELATIONS};
    pub use crate::error::LayoutError;
    pub use crate::measure::{Measurable, Measure};
    pub use crate::sizer::{finalize, Arranged};
    pub use crate::solve::{Arrangement, Frame};
    pub use crate::tree::{BoxTree, Node, NodeId};

    pub use embedded_graphics::geometry::{Point, Size};
    pub use embedded_graphics::primitives::Rectangle;
}
