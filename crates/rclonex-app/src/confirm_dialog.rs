//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! `rclonex-tui`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// `(label, message)` pairs; the first one is the confirming choice.
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Create the delete confirmation for a remote
    pub fn delete_remote(name: &str) -> Self {
        Self::new(
            "Delete remote?",
            format!("Remote '{name}' will be removed from the daemon's config."),
            vec![
                (
                    "Delete",
                    Message::ConfirmDelete {
                        name: name.to_string(),
                    },
                ),
                ("Cancel", Message::CancelDialog),
            ],
        )
    }

    /// Message sent when the user confirms
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_dialog_confirms_with_name() {
        let dialog = ConfirmDialogState::delete_remote("backup");
        assert!(dialog.message.contains("backup"));
        assert_eq!(dialog.options.len(), 2);
        assert!(matches!(
            dialog.confirm_message(),
            Some(Message::ConfirmDelete { ref name }) if name == "backup"
        ));
    }

    #[test]
    fn test_empty_dialog_has_no_confirm() {
        let dialog = ConfirmDialogState::new("t", "m", vec![]);
        assert!(dialog.confirm_message().is_none());
    }
}
