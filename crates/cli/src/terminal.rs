//! Terminal implementations of the client's notifier and clipboard.

use notebook_client::{Clipboard, Notification, NotificationLevel, Notifier};

/// Prints notifications: successes to stdout, errors to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("{}", notification.message),
            NotificationLevel::Error => eprintln!("Error: {}", notification.message),
        }
    }
}

/// The system clipboard.
pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    pub fn new() -> Result<Self, arboard::Error> {
        arboard::Clipboard::new().map(Self)
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.0.set_text(text).map_err(|e| e.into())
    }
}
