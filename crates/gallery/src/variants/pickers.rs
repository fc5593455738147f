//! Picker and date picker wheels.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{centered, first, inset, next};
use crate::region::Region;
use crate::theme::Theme;

/// A single wheel without a data source.
pub fn picker_wheel(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();
    let picker = region.add(root, "regular_picker", Picker::new());
    region.relate(
        picker,
        [first(theme), Relation::height(theme.metrics.demo_height)],
    );
    region.relate(picker, inset(theme));
    region.hug(root, picker, theme.metrics.padding);
    region
}

/// Date, time and combined wheels at their natural size.
pub fn date_pickers(theme: &Theme) -> Region {
    let mut region = Region::new(theme);
    let root = region.root();
    let mut above = None;
    for (identifier, mode) in [
        ("date_picker", DatePickerMode::Date),
        ("time_picker", DatePickerMode::Time),
        ("date_time_picker", DatePickerMode::DateAndTime),
    ] {
        let node = region.add(
            root,
            identifier,
            DatePicker::new(mode).style(DatePickerStyle::Wheels),
        );
        let top = match above {
            Some(above) => next(above, theme),
            None => first(theme),
        };
        region.relate(node, [top, centered()]);
        above = Some(node);
    }
    if let Some(last) = above {
        region.hug(root, last, theme.metrics.padding);
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_wheels_keep_natural_size() {
        let done = date_pickers(&Theme::default()).finalize(350).unwrap();
        assert_eq!(
            done.frame("time_picker"),
            Some(Rectangle::new(Point::new(15, 256), Size::new(320, 216)))
        );
        assert_eq!(done.height(), 20 + 3 * 216 + 2 * 20 + 20);
    }

    #[test]
    fn test_picker_fixed_height() {
        let done = picker_wheel(&Theme::default()).finalize(350).unwrap();
        assert_eq!(
            done.frame("regular_picker"),
            Some(Rectangle::new(Point::new(20, 20), Size::new(310, 200)))
        );
    }
}
