//! Whole screens around regions: the catalogue list and the detail page.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use crate::category::{list_categories, CatalogueEntry};
use crate::element::DemoElement;
use crate::region::{FinalizedRegion, Region};
use crate::theme::Theme;
use crate::variants::px;

/// Detail screen: title, description and the category region inside a
/// vertical scroll view.
#[derive(Debug, Clone)]
pub struct DetailPage {
    tree: BoxTree<DemoElement>,
    content: NodeId,
    viewport: Option<u32>,
}

impl DetailPage {
    /// Embeds `region` under a heading for `display_label`.
    pub fn new(display_label: &str, region: Region, theme: &Theme) -> Self {
        let p = &theme.palette;
        let m = &theme.metrics;
        let pad = px(m.padding);
        let insets = [
            Relation::align(Edge::Leading, Target::Parent, pad),
            Relation::align(Edge::Trailing, Target::Parent, -pad),
        ];

        let mut tree = BoxTree::new(DemoElement::new(
            "element_detail_scrollview",
            ScrollView::new().background(p.background),
        ));
        let root = tree.root();

        let content = tree.add_child(
            root,
            DemoElement::new("element_detail_content", Container::new()),
        );
        tree.relate_all(
            content,
            [
                Relation::align(Edge::Top, Target::Parent, 0),
                Relation::align(Edge::Leading, Target::Parent, 0),
                Relation::align(Edge::Trailing, Target::Parent, 0),
            ],
        );

        let title = tree.add_child(
            content,
            DemoElement::new(
                "element_title_label",
                Label::new(format!("Test {display_label} Elements"))
                    .font(TextStyle::bold(m.title_size))
                    .color(p.text)
                    .align(TextAlign::Center)
                    .multiline(),
            ),
        );
        tree.relate(title, Relation::align(Edge::Top, Target::Parent, pad));
        tree.relate_all(title, insets);

        let description = tree.add_child(
            content,
            DemoElement::new(
                "element_description_label",
                Label::new(format!(
                    "This screen contains various {display_label} elements for XCUITest \
                     automation practice."
                ))
                .font(TextStyle::regular(16))
                .color(p.secondary_text)
                .align(TextAlign::Center)
                .multiline(),
            ),
        );
        tree.relate(description, Relation::below(title, 10));
        tree.relate_all(description, insets);

        let container = tree.graft(content, region.into_tree());
        tree.relate(container, Relation::below(description, pad));
        tree.relate_all(container, insets);
        tree.relate(
            content,
            Relation::Hug {
                child: container,
                inset: m.padding,
            },
        );

        Self {
            tree,
            content,
            viewport: None,
        }
    }

    /// Fixes the scroll view to a screen-sized viewport; by default the
    /// page is as tall as its content.
    pub fn viewport(mut self, height: u32) -> Self {
        self.viewport = Some(height);
        self
    }

    /// Layout tree.
    pub fn tree(&self) -> &BoxTree<DemoElement> {
        &self.tree
    }

    /// Solves the page for a screen `width` pixels wide.
    pub fn finalize(mut self, width: u32) -> Result<FinalizedRegion, LayoutError> {
        let root = self.tree.root();
        match self.viewport {
            Some(height) => self.tree.relate(root, Relation::height(height)),
            None => self.tree.relate(
                root,
                Relation::Hug {
                    child: self.content,
                    inset: 0,
                },
            ),
        }
        let arranged = catalogue_layout::sizer::finalize(self.tree, width)?;
        tracing::debug!(height = arranged.height(), "detail page finalized");
        Ok(FinalizedRegion::from_arranged(arranged))
    }
}

/// Catalogue list screen: one table row per registry entry.
#[derive(Debug, Clone)]
pub struct CataloguePage {
    tree: BoxTree<DemoElement>,
}

impl CataloguePage {
    /// Lists every entry of the registry.
    pub fn new() -> Self {
        let mut tree = BoxTree::new(DemoElement::new("features_table_view", Table::new()));
        let root = tree.root();
        let mut above: Option<NodeId> = None;
        for (index, entry) in list_categories().iter().enumerate() {
            let cell = tree.add_child(
                root,
                DemoElement::new(
                    CatalogueEntry::row_identifier(index),
                    TableCell::new(entry.row_title()),
                ),
            );
            let top = match above {
                Some(above) => Relation::below(above, 0),
                None => Relation::align(Edge::Top, Target::Parent, 0),
            };
            tree.relate_all(
                cell,
                [
                    top,
                    Relation::align(Edge::Leading, Target::Parent, 0),
                    Relation::align(Edge::Trailing, Target::Parent, 0),
                ],
            );
            above = Some(cell);
        }
        if let Some(last) = above {
            tree.relate(root, Relation::Hug { child: last, inset: 0 });
        }
        Self { tree }
    }

    /// Layout tree.
    pub fn tree(&self) -> &BoxTree<DemoElement> {
        &self.tree
    }

    /// Solves the list for a screen `width` pixels wide.
    pub fn finalize(self, width: u32) -> Result<FinalizedRegion, LayoutError> {
        catalogue_layout::sizer::finalize(self.tree, width).map(FinalizedRegion::from_arranged)
    }
}

impl Default for CataloguePage {
    fn default() -> Self {
        Self::new()
    }
}
