//! Alert and action sheet descriptions presented by buttons.

use serde::Serialize;

/// Presentation style.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertStyle {
    /// Centred modal dialog.
    Alert,
    /// Sheet sliding up from the bottom edge.
    ActionSheet,
}

/// Semantic role of an action.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRole {
    /// Regular choice.
    #[default]
    Default,
    /// Dismisses without side effects.
    Cancel,
    /// Destroys data; drawn in red.
    Destructive,
}

/// One button of an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertAction {
    /// Button title.
    pub title: String,
    /// Semantic role.
    pub role: ActionRole,
}

impl AlertAction {
    /// Action with the given role.
    pub fn new(title: impl Into<String>, role: ActionRole) -> Self {
        Self {
            title: title.into(),
            role,
        }
    }
}

/// A modal presented when a button is tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertSpec {
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Dialog or sheet.
    pub style: AlertStyle,
    /// Buttons in display order.
    pub actions: Vec<AlertAction>,
}

impl AlertSpec {
    /// Empty alert.
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            style: AlertStyle::Alert,
            actions: Vec::new(),
        }
    }

    /// Empty action sheet.
    pub fn action_sheet(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: AlertStyle::ActionSheet,
            ..Self::alert(title, message)
        }
    }

    /// Append an action.
    pub fn action(mut self, title: impl Into<String>, role: ActionRole) -> Self {
        self.actions.push(AlertAction::new(title, role));
        self
    }

    /// The cancel action, if any.
    pub fn cancel_action(&self) -> Option<&AlertAction> {
        self.actions.iter().find(|a| a.role == ActionRole::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_action_order() {
        let sheet = AlertSpec::action_sheet("Action Sheet", "Choose an option")
            .action("Option 1", ActionRole::Default)
            .action("Delete", ActionRole::Destructive)
            .action("Cancel", ActionRole::Cancel);
        assert_eq!(sheet.style, AlertStyle::ActionSheet);
        let titles: Vec<&str> = sheet.actions.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Option 1", "Delete", "Cancel"]);
        assert_eq!(sheet.cancel_action().map(|a| a.title.as_str()), Some("Cancel"));
    }

    #[test]
    fn test_alert_without_cancel() {
        let alert = AlertSpec::alert("Alert", "Body").action("OK", ActionRole::Default);
        assert!(alert.cancel_action().is_none());
    }
}
