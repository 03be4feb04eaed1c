//! Transient notifications (toasts) emitted by simulated actions

use serde::{Deserialize, Serialize};

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A short-lived, non-blocking message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Receiver for notifications raised by store operations
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Per-request collector; every notification is also written to the log
#[derive(Debug, Default)]
pub struct NotificationBuffer {
    items: Vec<Notification>,
}

impl NotificationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl NotificationSink for NotificationBuffer {
    fn notify(&mut self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => log::info!(
                target: "frontier::toast",
                "{}: {}",
                notification.title,
                notification.description
            ),
            NotificationVariant::Destructive => log::warn!(
                target: "frontier::toast",
                "{}: {}",
                notification.title,
                notification.description
            ),
        }
        self.items.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_in_order() {
        let mut buffer = NotificationBuffer::new();
        assert!(buffer.is_empty());
        buffer.notify(Notification::new("File Upload", "started"));
        buffer.notify(Notification::destructive("Validation Error", "missing"));

        let items = buffer.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "File Upload");
        assert!(!items[0].is_destructive());
        assert!(items[1].is_destructive());
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        let value = serde_json::to_value(Notification::destructive("A", "B")).unwrap();
        assert_eq!(value["variant"], "destructive");
    }
}
