//! The notification hub broadcasting task-status changes.

use super::subscriber::{FnSubscriber, Subscriber, SubscriptionHandle, same_subscriber};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared hub state.
pub(crate) struct HubInner {
    subscribers: Vec<Arc<dyn Subscriber>>,
    status: Option<String>,
}

impl HubInner {
    /// Remove the first registration of `subscriber`.
    pub(crate) fn remove<S: Subscriber + ?Sized>(&mut self, subscriber: &Arc<S>) -> bool {
        match self
            .subscribers
            .iter()
            .position(|s| same_subscriber(s, subscriber))
        {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Outcome of one [`NotificationHub::set_status`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Broadcast {
    /// The message every subscriber received.
    pub message: String,
    /// Number of subscribers that accepted the message.
    pub delivered: usize,
    /// Names of subscribers whose `notify` returned an error.
    pub failed: Vec<String>,
}

impl Broadcast {
    /// Whether every subscriber accepted the message.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Broadcasts task-status changes to registered subscribers.
///
/// Subscribers are kept in registration order; the same subscriber may be
/// registered more than once and then hears each broadcast once per
/// registration. The hub shares subscribers with the caller rather than
/// owning them, and removal is by identity.
///
/// Broadcasting works on a snapshot of the list taken when the status is
/// set. A subscriber that adds or removes subscribers while being notified
/// affects the next broadcast, not the current one.
///
/// # Examples
///
/// ```rust
/// use patternkit::notify::{EmailNotifier, NotificationHub, SmsNotifier};
/// use std::sync::Arc;
///
/// let hub = NotificationHub::new();
/// let email = Arc::new(EmailNotifier::new());
/// let sms = Arc::new(SmsNotifier::new());
///
/// hub.add_observer(email.clone());
/// hub.add_observer(sms.clone());
///
/// let report = hub.set_status("Completed");
/// assert_eq!(report.delivered, 2);
/// assert!(email.messages()[0].contains("Completed"));
/// ```
pub struct NotificationHub {
    inner: Arc<RwLock<HubInner>>,
}

impl NotificationHub {
    /// Create an empty hub with no status.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HubInner {
                subscribers: Vec::new(),
                status: None,
            })),
        }
    }

    /// Append `subscriber` to the broadcast list.
    pub fn add_observer(&self, subscriber: Arc<dyn Subscriber>) {
        tracing::debug!(subscriber = subscriber.name(), "observer added");
        self.inner.write().subscribers.push(subscriber);
    }

    /// Remove the first registration of `subscriber`.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove_observer<S: Subscriber + ?Sized>(&self, subscriber: &Arc<S>) -> bool {
        let removed = self.inner.write().remove(subscriber);
        tracing::debug!(subscriber = subscriber.name(), removed, "observer removal");
        removed
    }

    /// Register a closure and get a handle that unregisters it on drop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patternkit::notify::NotificationHub;
    ///
    /// let hub = NotificationHub::new();
    /// let handle = hub.subscribe("console", |msg: &str| println!("{}", msg));
    /// assert_eq!(hub.observer_count(), 1);
    ///
    /// drop(handle);
    /// assert_eq!(hub.observer_count(), 0);
    /// ```
    pub fn subscribe<F>(&self, name: impl Into<String>, callback: F) -> SubscriptionHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let subscriber: Arc<dyn Subscriber> = Arc::new(FnSubscriber::new(name, callback));
        self.add_observer(Arc::clone(&subscriber));
        SubscriptionHandle::new(subscriber, Arc::downgrade(&self.inner))
    }

    /// Store `status` and notify every subscriber, in registration order.
    ///
    /// Each subscriber receives `"Task status changed to: {status}"`. A
    /// subscriber that fails is logged and recorded in the returned
    /// [`Broadcast`]; delivery continues with the rest.
    pub fn set_status(&self, status: impl Into<String>) -> Broadcast {
        let status = status.into();
        let message = format!("Task status changed to: {}", status);

        let snapshot = {
            let mut inner = self.inner.write();
            inner.status = Some(status);
            inner.subscribers.clone()
        };

        let mut report = Broadcast {
            message,
            ..Broadcast::default()
        };

        for subscriber in &snapshot {
            match subscriber.notify(&report.message) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(
                        subscriber = subscriber.name(),
                        error = %e,
                        "notification failed, continuing with remaining subscribers"
                    );
                    report.failed.push(subscriber.name().to_string());
                }
            }
        }

        tracing::debug!(
            delivered = report.delivered,
            failed = report.failed.len(),
            "status broadcast"
        );
        report
    }

    /// The most recently set status.
    pub fn status(&self) -> Option<String> {
        self.inner.read().status.clone()
    }

    /// Get the number of registered subscribers.
    pub fn observer_count(&self) -> usize {
        self.inner.read().subscribers.len()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NotificationHub {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        let names: Vec<&str> = inner.subscribers.iter().map(|s| s.name()).collect();
        f.debug_struct("NotificationHub")
            .field("subscribers", &names)
            .field("status", &inner.status)
            .finish()
    }
}
