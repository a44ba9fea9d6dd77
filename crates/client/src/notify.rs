//! Transient notifications and the clipboard seam.
//!
//! Screens never render anything themselves; they report outcomes through a
//! [`Notifier`] and write to the clipboard through a [`Clipboard`]. Front-ends
//! provide the concrete implementations.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a notification stays visible before it dismisses itself.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            dismiss_after: DISMISS_AFTER,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            dismiss_after: DISMISS_AFTER,
        }
    }
}

/// Receives user-facing notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// A notifier that remembers what it was shown and when.
///
/// Cloning shares the underlying log.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<(Instant, Notification)>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification received so far, oldest first.
    pub fn all(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().map(|(_, n)| n.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Notifications that have not yet dismissed themselves at `now`.
    pub fn visible_at(&self, now: Instant) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(entries) => entries
                .iter()
                .filter(|(shown, n)| now.saturating_duration_since(*shown) < n.dismiss_after)
                .map(|(_, n)| n.clone())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn last(&self) -> Option<Notification> {
        self.all().pop()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((Instant::now(), notification));
        }
    }
}
