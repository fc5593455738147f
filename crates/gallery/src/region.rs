//! Regions: the demo layout built for one category.

use catalogue_layout::prelude::*;
use catalogue_widgets::container::Container;
use catalogue_widgets::widget::Widget;

use crate::element::DemoElement;
use crate::theme::Theme;

/// Identifier of every region's root container.
pub const CONTAINER_ID: &str = "elements_container";

/// A tree of demo elements with declared layout relations, rooted at the
/// [`CONTAINER_ID`] container.
#[derive(Debug, Clone)]
pub struct Region {
    tree: BoxTree<DemoElement>,
}

impl Region {
    /// Empty region with the themed container as root.
    pub fn new(theme: &Theme) -> Self {
        let container = Container::new()
            .background(theme.palette.container)
            .corner_radius(theme.metrics.container_radius);
        Self {
            tree: BoxTree::new(DemoElement::new(CONTAINER_ID, container)),
        }
    }

    /// The root container.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Adds `widget` under `parent`.
    pub fn add(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        widget: impl Into<Widget>,
    ) -> NodeId {
        self.tree
            .add_child(parent, DemoElement::new(identifier, widget))
    }

    /// Declares relations on `node`.
    pub fn relate(&mut self, node: NodeId, relations: impl IntoIterator<Item = Relation>) {
        self.tree.relate_all(node, relations);
    }

    /// Closes `container`'s bottom edge `inset` below `child`.
    pub fn hug(&mut self, container: NodeId, child: NodeId, inset: u32) {
        self.tree.relate(container, Relation::Hug { child, inset });
    }

    /// Demo elements in traversal order, excluding the root container.
    pub fn elements(&self) -> impl Iterator<Item = &DemoElement> + '_ {
        let root = self.tree.root();
        self.tree
            .preorder()
            .into_iter()
            .filter(move |&id| id != root)
            .filter_map(|id| self.tree.item(id))
    }

    /// Identifiers in traversal order, excluding the root container.
    pub fn identifiers(&self) -> Vec<&str> {
        self.elements().map(DemoElement::identifier).collect()
    }

    /// Element addressed as `identifier`, including the root.
    pub fn find(&self, identifier: &str) -> Option<(NodeId, &DemoElement)> {
        self.tree
            .nodes()
            .map(|(id, node)| (id, node.item()))
            .find(|(_, e)| e.identifier() == identifier)
    }

    /// Number of demo elements, excluding the root container.
    pub fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    /// Whether the region holds no demo elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Underlying layout tree.
    pub fn tree(&self) -> &BoxTree<DemoElement> {
        &self.tree
    }

    /// Gives up the tree, e.g. to graft it into a page.
    pub fn into_tree(self) -> BoxTree<DemoElement> {
        self.tree
    }

    /// See [`finalize`].
    pub fn finalize(self, width: u32) -> Result<FinalizedRegion, LayoutError> {
        finalize(self, width)
    }
}

/// Closes the layout chain of `region` and resolves every frame for a
/// container `width` pixels wide.
pub fn finalize(region: Region, width: u32) -> Result<FinalizedRegion, LayoutError> {
    catalogue_layout::sizer::finalize(region.tree, width).map(FinalizedRegion)
}

/// A region (or page) whose frames are all resolved.
#[derive(Debug, Clone)]
pub struct FinalizedRegion(Arranged<DemoElement>);

impl FinalizedRegion {
    pub(crate) fn from_arranged(arranged: Arranged<DemoElement>) -> Self {
        Self(arranged)
    }

    /// Size of the root.
    pub fn size(&self) -> Size {
        self.0.size()
    }

    /// Height of the root.
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Absolute frame of the element addressed as `identifier`.
    pub fn frame(&self, identifier: &str) -> Option<Rectangle> {
        self.0
            .iter()
            .find(|(_, e, _)| e.identifier() == identifier)
            .map(|(_, _, f)| f.absolute)
    }

    /// Solved elements in traversal order, root first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DemoElement, &Frame)> + '_ {
        self.0.iter()
    }

    /// Solved tree.
    pub fn arranged(&self) -> &Arranged<DemoElement> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_widgets::prelude::*;

    fn one_button() -> (Region, NodeId) {
        let theme = Theme::default();
        let mut region = Region::new(&theme);
        let root = region.root();
        let button = region.add(root, "regular_button", Button::titled("Regular Button"));
        region.relate(
            button,
            [
                Relation::align(Edge::Top, Target::Parent, 20),
                Relation::align(Edge::CenterX, Target::Parent, 0),
                Relation::width(200),
                Relation::height(44),
            ],
        );
        (region, button)
    }

    #[test]
    fn test_elements_exclude_root() {
        let (region, _) = one_button();
        assert_eq!(region.identifiers(), ["regular_button"]);
        assert_eq!(region.len(), 1);
        assert!(region.find(CONTAINER_ID).is_some());
    }

    #[test]
    fn test_unhugged_container_is_incomplete() {
        let (region, _) = one_button();
        assert_eq!(
            region.finalize(350).unwrap_err(),
            LayoutError::IncompleteLayout {
                container: CONTAINER_ID.into()
            }
        );
    }

    #[test]
    fn test_hug_closes_region() {
        let (mut region, button) = one_button();
        let root = region.root();
        region.hug(root, button, 20);
        let done = region.finalize(350).unwrap();
        assert_eq!(done.height(), 84);
        assert_eq!(
            done.frame("regular_button"),
            Some(Rectangle::new(Point::new(75, 20), Size::new(200, 44)))
        );
        assert!(done.frame("missing").is_none());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let (mut region, button) = one_button();
        let root = region.root();
        let twin = region.add(root, "regular_button", Button::titled("Twin"));
        region.relate(twin, [Relation::below(button, 20), Relation::align(Edge::Leading, Target::Parent, 0)]);
        region.hug(root, twin, 20);
        assert!(matches!(
            region.finalize(350),
            Err(LayoutError::DuplicateIdentifier { .. })
        ));
    }
}
