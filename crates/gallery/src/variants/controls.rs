//! Switches, sliders, steppers, segmented controls and page dots.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{centered, first, inset, next, px};
use crate::region::Region;
use crate::theme::Theme;

/// A caption at the leading edge with its control just after it, centred
/// on the caption's line. Returns `(label, control)`.
fn labelled(
    region: &mut Region,
    above: Option<NodeId>,
    gap: u32,
    (label_id, text): (&str, &str),
    (control_id, control): (&str, Widget),
    spacing: i32,
    theme: &Theme,
) -> (NodeId, NodeId) {
    let root = region.root();
    let label = region.add(root, label_id, Label::new(text).color(theme.palette.text));
    let top = match above {
        Some(above) => Relation::below(above, px(gap)),
        None => first(theme),
    };
    region.relate(
        label,
        [
            top,
            Relation::align(Edge::Leading, Target::Parent, px(theme.metrics.padding)),
        ],
    );

    let control = region.add(root, control_id, control);
    region.relate(
        control,
        [
            Relation::align(Edge::CenterY, Target::Node(label), 0),
            Relation::pin(Edge::Leading, Target::Node(label), Edge::Trailing, spacing),
        ],
    );
    (label, control)
}

/// An "on" switch and a custom-tinted "off" switch, each beside a caption.
pub fn switches(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let (first_label, _) = labelled(
        &mut region,
        None,
        0,
        ("regular_switch_label", "Enable Feature"),
        ("regular_switch", Switch::new(true).into()),
        10,
        theme,
    );
    let (_, custom) = labelled(
        &mut region,
        Some(first_label),
        theme.metrics.padding,
        ("custom_switch_label", "Custom Switch"),
        (
            "custom_switch",
            Switch::new(false).on_tint(theme.palette.confirm).into(),
        ),
        10,
        theme,
    );
    let root = region.root();
    region.hug(root, custom, theme.metrics.padding);
    region
}

/// A volume slider and a rating slider, each under a centred caption.
pub fn sliders(theme: &Theme) -> Region {
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let root = region.root();

    let regular_label = region.add(
        root,
        "regular_slider_label",
        Label::new("Volume: 50%").color(p.text),
    );
    region.relate(regular_label, [first(theme), centered()]);

    let regular = region.add(
        root,
        "regular_slider",
        Slider::new(0.0, 100.0, 50.0).track_tints(p.accent, p.track),
    );
    region.relate(regular, [Relation::below(regular_label, 10)]);
    region.relate(regular, inset(theme));

    let custom_label = region.add(
        root,
        "custom_slider_label",
        Label::new("Rating: 3/5").color(p.text),
    );
    region.relate(custom_label, [Relation::below(regular, 20), centered()]);

    let custom = region.add(
        root,
        "custom_slider",
        Slider::new(0.0, 5.0, 3.0)
            .track_tints(p.accent, p.neutral)
            .thumb_tint(p.warning),
    );
    region.relate(custom, [Relation::below(custom_label, 10)]);
    region.relate(custom, inset(theme));

    region.hug(root, custom, theme.metrics.padding);
    region
}

/// A quantity stepper and a percentage stepper, each beside a caption.
pub fn steppers(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let (first_label, _) = labelled(
        &mut region,
        None,
        0,
        ("regular_stepper_label", "Quantity: 5"),
        (
            "regular_stepper",
            Stepper::new(0.0, 10.0, 1.0, 5.0).tint(theme.palette.accent).into(),
        ),
        20,
        theme,
    );
    let (_, custom) = labelled(
        &mut region,
        Some(first_label),
        30,
        ("custom_stepper_label", "Percentage: 25%"),
        (
            "custom_stepper",
            Stepper::new(0.0, 100.0, 5.0, 25.0).tint(theme.palette.accent).into(),
        ),
        20,
        theme,
    );
    let root = region.root();
    region.hug(root, custom, theme.metrics.padding);
    region
}

/// Text segments, wider text segments and icon segments.
pub fn segmented_controls(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();

    let regular = region.add(
        root,
        "regular_segmented_control",
        SegmentedControl::titled(["One", "Two", "Three"]).selected(0),
    );
    region.relate(regular, [first(theme)]);
    region.relate(regular, inset(theme));

    let custom = region.add(
        root,
        "custom_segmented_control",
        SegmentedControl::titled(["Day", "Week", "Month", "Year"]).selected(1),
    );
    region.relate(custom, [next(regular, theme)]);
    region.relate(custom, inset(theme));

    let icons = region.add(
        root,
        "image_segmented_control",
        SegmentedControl::symbols([Symbol::ListBullet, Symbol::SquareGrid2x2]).selected(0),
    );
    region.relate(
        icons,
        [next(custom, theme), centered(), Relation::width(120)],
    );

    region.hug(root, icons, theme.metrics.padding);
    region
}

/// Five page dots with the third current.
pub fn page_indicator(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();
    let dots = region.add(
        root,
        "page_control",
        PageControl::new(5, 2).tints(theme.palette.separator, theme.palette.accent),
    );
    region.relate(dots, [first(theme), centered(), Relation::height(50)]);
    region.hug(root, dots, theme.metrics.padding);
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_sits_after_caption() {
        let done = switches(&Theme::default()).finalize(350).unwrap();
        let label = done.frame("regular_switch_label").unwrap();
        let switch = done.frame("regular_switch").unwrap();
        // "Enable Feature" is 14 chars at 9 px
        assert_eq!(label.size, Size::new(126, 21));
        assert_eq!(switch.top_left.x, 20 + 126 + 10);
        assert_eq!(switch.size, Size::new(51, 31));
        assert_eq!(switch.top_left.y, 30 - 15);
        assert_eq!(done.height(), 107);
    }

    #[test]
    fn test_stepper_region_hugs_lower_stepper() {
        let done = steppers(&Theme::default()).finalize(350).unwrap();
        let stepper = done.frame("custom_stepper").unwrap();
        assert_eq!(stepper.size, Size::new(94, 32));
        assert_eq!(
            done.height(),
            u32::try_from(stepper.top_left.y).unwrap() + 32 + 20
        );
    }

    #[test]
    fn test_slider_stack() {
        let done = sliders(&Theme::default()).finalize(350).unwrap();
        let slider = done.frame("custom_slider").unwrap();
        assert_eq!(slider.top_left.x, 20);
        assert_eq!(slider.size, Size::new(310, 31));
        // 20 + 21 + 10 + 31 + 20 + 21 + 10 + 31 + 20
        assert_eq!(done.height(), 184);
    }

    #[test]
    fn test_icon_segments_fixed_width() {
        let done = segmented_controls(&Theme::default()).finalize(350).unwrap();
        let icons = done.frame("image_segmented_control").unwrap();
        assert_eq!(icons.size.width, 120);
        assert_eq!(icons.top_left.x, 115);
    }
}
