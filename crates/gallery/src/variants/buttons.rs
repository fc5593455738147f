//! Buttons and alert triggers.

use catalogue_layout::prelude::*;
use catalogue_widgets::prelude::*;

use super::{centered, close_with_caption, first, next};
use crate::region::Region;
use crate::theme::Theme;

/// Regular, filled and icon buttons, stacked and centred.
pub fn buttons(theme: &Theme) -> Region {
    let m = &theme.metrics;
    let mut region = Region::new(theme);
    let root = region.root();

    let regular = region.add(
        root,
        "regular_button",
        Button::titled("Regular Button").tint(theme.palette.accent),
    );
    region.relate(
        regular,
        [
            first(theme),
            centered(),
            Relation::width(m.button_width),
            Relation::height(m.control_height),
        ],
    );

    let custom = region.add(
        root,
        "custom_button",
        Button::titled("Custom Button")
            .style(ButtonStyle::filled(theme.palette.accent, m.corner_radius))
            .tint(theme.palette.inverse_text),
    );
    region.relate(
        custom,
        [
            next(regular, theme),
            centered(),
            Relation::width(m.button_width),
            Relation::height(m.control_height),
        ],
    );

    let image = region.add(
        root,
        "image_button",
        Button::symbol(Symbol::StarFill).tint(theme.palette.accent),
    );
    region.relate(
        image,
        [
            next(custom, theme),
            centered(),
            Relation::width(m.control_height),
            Relation::height(m.control_height),
        ],
    );

    region.hug(root, image, m.padding);
    region
}

/// Buttons presenting an alert and an action sheet.
pub fn alerts(theme: &Theme) -> Region {
    let m = &theme.metrics;
    let mut region = Region::new(theme);
    let root = region.root();

    let alert = AlertSpec::alert(
        "Sample Alert",
        "This is a sample alert to demonstrate XCUITest automation.",
    )
    .action("OK", ActionRole::Default);
    let show_alert = region.add(
        root,
        "show_alert_button",
        Button::titled("Show Alert")
            .style(ButtonStyle::filled(theme.palette.accent, m.corner_radius))
            .tint(theme.palette.inverse_text)
            .presents(alert),
    );
    region.relate(
        show_alert,
        [
            first(theme),
            centered(),
            Relation::width(m.button_width),
            Relation::height(m.control_height),
        ],
    );

    let sheet = AlertSpec::action_sheet(
        "Sample Action Sheet",
        "This is a sample action sheet for XCUITest automation.",
    )
    .action("Option 1", ActionRole::Default)
    .action("Option 2", ActionRole::Default)
    .action("Cancel", ActionRole::Cancel);
    let show_sheet = region.add(
        root,
        "show_action_sheet_button",
        Button::titled("Show Action Sheet")
            .style(ButtonStyle::filled(theme.palette.confirm, m.corner_radius))
            .tint(theme.palette.inverse_text)
            .presents(sheet),
    );
    region.relate(
        show_sheet,
        [
            next(show_alert, theme),
            centered(),
            Relation::width(m.button_width),
            Relation::height(m.control_height),
        ],
    );

    close_with_caption(
        &mut region,
        show_sheet,
        "alert_description_label",
        "Tap the buttons above to show different types of alerts and action sheets.",
        theme,
    );
    region
}
