//! Images, activity indicators and progress bars.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{close_with_caption, first, inset, next};
use crate::region::Region;
use crate::theme::Theme;

const SIDE_BY_SIDE: i32 = 60;

/// A framed photo and a tinted avatar side by side, with a caption.
pub fn images(theme: &Theme) -> Region {
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let root = region.root();

    let photo = region.add(
        root,
        "regular_image",
        Image::new(Symbol::Photo).tint(p.neutral).background(p.track),
    );
    region.relate(
        photo,
        [
            first(theme),
            Relation::align(Edge::CenterX, Target::Parent, -SIDE_BY_SIDE),
            Relation::width(100),
            Relation::height(100),
        ],
    );

    let avatar = region.add(
        root,
        "circular_image",
        Image::new(Symbol::PersonCircleFill).tint(p.accent),
    );
    region.relate(
        avatar,
        [
            first(theme),
            Relation::align(Edge::CenterX, Target::Parent, SIDE_BY_SIDE),
            Relation::width(100),
            Relation::height(100),
        ],
    );

    close_with_caption(
        &mut region,
        photo,
        "image_label",
        "Images can be tested with XCUITest by verifying their existence and attributes",
        theme,
    );
    region
}

/// A medium and a large spinner side by side, with a caption.
pub fn activity_indicators(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();

    let medium = region.add(
        root,
        "regular_activity_indicator",
        ActivityIndicator::new(IndicatorSize::Medium).color(theme.palette.neutral),
    );
    region.relate(
        medium,
        [
            first(theme),
            Relation::align(Edge::CenterX, Target::Parent, -SIDE_BY_SIDE),
        ],
    );

    let large = region.add(
        root,
        "large_activity_indicator",
        ActivityIndicator::new(IndicatorSize::Large).color(theme.palette.accent),
    );
    region.relate(
        large,
        [
            first(theme),
            Relation::align(Edge::CenterX, Target::Parent, SIDE_BY_SIDE),
        ],
    );

    close_with_caption(
        &mut region,
        large,
        "activity_label",
        "Activity indicators show that a task is in progress. You can test if they are animating.",
        theme,
    );
    region
}

/// Default and tinted progress bars, with a caption.
pub fn progress_views(theme: &Theme) -> Region {
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let root = region.root();

    let progress = region.add(
        root,
        "progress_view",
        ProgressView::new(0.7).tints(p.accent, p.track),
    );
    region.relate(progress, [first(theme)]);
    region.relate(progress, inset(theme));

    let tinted = region.add(
        root,
        "tinted_progress_view",
        ProgressView::new(0.4).tints(p.confirm, p.track),
    );
    region.relate(tinted, [next(progress, theme)]);
    region.relate(tinted, inset(theme));

    close_with_caption(
        &mut region,
        tinted,
        "progress_label",
        "Progress indicators show the progress of a task. The top one is at 70%, the bottom at 40%.",
        theme,
    );
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_side_by_side() {
        let done = images(&Theme::default()).finalize(350).unwrap();
        let photo = done.frame("regular_image").unwrap();
        let avatar = done.frame("circular_image").unwrap();
        assert_eq!(photo.top_left, Point::new(65, 20));
        assert_eq!(avatar.top_left, Point::new(185, 20));
        assert_eq!(done.frame("image_label").unwrap().top_left.y, 140);
    }

    #[test]
    fn test_caption_below_taller_spinner() {
        let done = activity_indicators(&Theme::default()).finalize(350).unwrap();
        let large = done.frame("large_activity_indicator").unwrap();
        assert_eq!(large.size, Size::new(37, 37));
        assert_eq!(done.frame("activity_label").unwrap().top_left.y, 20 + 37 + 20);
    }

    #[test]
    fn test_progress_caption_closes_region() {
        let done = progress_views(&Theme::default()).finalize(350).unwrap();
        let label = done.frame("progress_label").unwrap();
        assert_eq!(label.top_left.y, 20 + 4 + 20 + 4 + 20);
        assert_eq!(
            done.height(),
            u32::try_from(label.top_left.y).unwrap() + label.size.height + 20
        );
    }
}
