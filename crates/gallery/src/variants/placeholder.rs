//! Fallback for categories without a dedicated demo.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{first, inset};
use crate::region::Region;
use crate::theme::Theme;

/// Text shown for `display_label`.
pub fn placeholder_text(display_label: &str) -> String {
    format!("This is a placeholder for {display_label} elements")
}

/// One centred, wrapping label in a fixed-height slot.
pub fn placeholder(display_label: &str, theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();
    let label = region.add(
        root,
        "placeholder_label",
        Label::new(placeholder_text(display_label))
            .color(theme.palette.text)
            .align(TextAlign::Center)
            .multiline(),
    );
    region.relate(
        label,
        [first(theme), Relation::height(theme.metrics.demo_height)],
    );
    region.relate(label, inset(theme));
    region.hug(root, label, theme.metrics.padding);
    region
}
