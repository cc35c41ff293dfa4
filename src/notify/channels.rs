//! Built-in notification channels.
//!
//! Each channel keeps an in-memory inbox of the lines it "sent" and logs
//! them at `info`. Nothing leaves the process.

use super::Subscriber;
use crate::error::Result;
use parking_lot::Mutex;

/// Lines delivered through one channel.
#[derive(Debug, Default)]
struct Inbox {
    lines: Mutex<Vec<String>>,
}

impl Inbox {
    fn deliver(&self, channel: &'static str, label: &str, message: &str) {
        let line = format!("{}: {}", label, message);
        tracing::info!(channel, "{}", line);
        self.lines.lock().push(line);
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

/// Sends status changes by e-mail.
#[derive(Debug, Default)]
pub struct EmailNotifier {
    inbox: Inbox,
}

impl EmailNotifier {
    /// Create a notifier with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line sent so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inbox.lines()
    }
}

impl Subscriber for EmailNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        self.inbox.deliver("email", "Email", message);
        Ok(())
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Sends status changes by SMS.
#[derive(Debug, Default)]
pub struct SmsNotifier {
    inbox: Inbox,
}

impl SmsNotifier {
    /// Create a notifier with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line sent so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inbox.lines()
    }
}

impl Subscriber for SmsNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        self.inbox.deliver("sms", "SMS", message);
        Ok(())
    }

    fn name(&self) -> &str {
        "sms"
    }
}

/// Sends status changes as push notifications.
#[derive(Debug, Default)]
pub struct PushNotifier {
    inbox: Inbox,
}

impl PushNotifier {
    /// Create a notifier with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line sent so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inbox.lines()
    }
}

impl Subscriber for PushNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        self.inbox.deliver("push", "Push Notification", message);
        Ok(())
    }

    fn name(&self) -> &str {
        "push"
    }
}
