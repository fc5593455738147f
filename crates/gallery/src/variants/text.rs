//! Labels, text fields and text views.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{first, inset, stack};
use crate::region::Region;
use crate::theme::Theme;

/// Title, subtitle, wrapping and attributed labels.
pub fn labels(theme: &Theme) -> Region {
    let m = &theme.metrics;
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let root = region.root();

    let title = region.add(
        root,
        "title_label",
        Label::new("Title Label")
            .font(TextStyle::bold(m.title_size))
            .color(p.text),
    );
    region.relate(title, [first(theme)]);
    region.relate(title, inset(theme));

    let subtitle = region.add(
        root,
        "subtitle_label",
        Label::new("Subtitle with smaller font").color(p.secondary_text),
    );
    region.relate(subtitle, [Relation::below(title, 10)]);
    region.relate(subtitle, inset(theme));

    let multiline = region.add(
        root,
        "multiline_label",
        Label::new(
            "This is a multiline label with a longer text. It demonstrates how text can \
             wrap across multiple lines in a UILabel.",
        )
        .color(p.text)
        .multiline(),
    );
    region.relate(multiline, [Relation::below(subtitle, 15)]);
    region.relate(multiline, inset(theme));

    let attributed = region.add(
        root,
        "attributed_label",
        Label::new("Styled text with ")
            .color(p.text)
            .run("different attributes", TextStyle::bold(16), p.accent),
    );
    region.relate(attributed, [Relation::below(multiline, 15)]);
    region.relate(attributed, inset(theme));

    region.hug(root, attributed, m.padding);
    region
}

fn field(placeholder: &str, keyboard: Keyboard) -> TextField {
    TextField::new(placeholder)
        .keyboard(keyboard)
        .border(BorderStyle::RoundedRect)
}

/// Plain, email and numeric text fields.
pub fn text_fields(theme: &Theme) -> Region {
    let h = theme.metrics.control_height;
    let mut region = Region::new(theme);
    let ids = stack(
        &mut region,
        [
            (
                "regular_text_field",
                field("Regular Text Field", Keyboard::Default),
                vec![Relation::height(h)],
            ),
            (
                "email_text_field",
                field("Email Text Field", Keyboard::EmailAddress),
                vec![Relation::height(h)],
            ),
            (
                "numeric_text_field",
                field("Numeric Text Field", Keyboard::NumberPad),
                vec![Relation::height(h)],
            ),
        ],
        theme,
    );
    if let Some(&last) = ids.last() {
        let root = region.root();
        region.hug(root, last, theme.metrics.padding);
    }
    region
}

/// Password and PIN fields.
pub fn secure_fields(theme: &Theme) -> Region {
    let h = theme.metrics.control_height;
    let mut region = Region::new(theme);
    let ids = stack(
        &mut region,
        [
            (
                "password_field",
                field("Password Field", Keyboard::Default).secure(),
                vec![Relation::height(h)],
            ),
            (
                "pin_field",
                field("PIN Field", Keyboard::NumberPad).secure(),
                vec![Relation::height(h)],
            ),
        ],
        theme,
    );
    if let Some(&last) = ids.last() {
        let root = region.root();
        region.hug(root, last, theme.metrics.padding);
    }
    region
}

/// Editable and read-only text views.
pub fn text_views(theme: &Theme) -> Region {
    let m = &theme.metrics;
    let p = &theme.palette;
    let mut region = Region::new(theme);
    let ids = stack(
        &mut region,
        [
            (
                "regular_text_view",
                TextView::new(
                    "This is a regular text view that can contain multiple lines of text. \
                     You can type longer content here.",
                )
                .font(TextStyle::regular(16))
                .border(p.separator, 1)
                .corner_radius(m.corner_radius),
                vec![Relation::height(100)],
            ),
            (
                "read_only_text_view",
                TextView::new("This is a read-only text view. You cannot edit this content.")
                    .font(TextStyle::regular(16))
                    .background(p.track)
                    .corner_radius(m.corner_radius)
                    .read_only(),
                vec![Relation::height(100)],
            ),
        ],
        theme,
    );
    if let Some(&last) = ids.last() {
        let root = region.root();
        region.hug(root, last, m.padding);
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_stack_gaps() {
        let done = labels(&Theme::default()).finalize(350).unwrap();
        let title = done.frame("title_label").unwrap();
        let subtitle = done.frame("subtitle_label").unwrap();
        let multiline = done.frame("multiline_label").unwrap();
        assert_eq!(title.top_left, Point::new(20, 20));
        assert_eq!(title.size, Size::new(310, 27));
        assert_eq!(subtitle.top_left.y, 20 + 27 + 10);
        assert_eq!(multiline.top_left.y, subtitle.top_left.y + 21 + 15);
        // 115 chars at 9 px wrap onto four 310 px lines
        assert_eq!(multiline.size.height, 4 * 21);
    }

    #[test]
    fn test_secure_fields_are_secure() {
        let region = secure_fields(&Theme::default());
        assert_eq!(region.identifiers(), ["password_field", "pin_field"]);
        assert!(region
            .elements()
            .all(|e| e.kind() == ElementKind::SecureField));
    }

    #[test]
    fn test_text_field_region_height() {
        let done = text_fields(&Theme::default()).finalize(350).unwrap();
        assert_eq!(done.height(), 20 + 3 * 44 + 2 * 20 + 20);
        assert_eq!(
            done.frame("email_text_field"),
            Some(Rectangle::new(Point::new(20, 84), Size::new(310, 44)))
        );
    }
}
