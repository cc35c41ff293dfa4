//! The subscriber trait and subscription handles.

use super::hub::HubInner;
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// Something that wants to hear about task-status changes.
///
/// Returning an error does not abort a broadcast: the hub logs the failure
/// and moves on to the next subscriber.
pub trait Subscriber: Send + Sync {
    /// Receive one status-change message.
    ///
    /// # Errors
    ///
    /// Implementations may return [`Error::DeliveryFailed`](crate::error::Error::DeliveryFailed)
    /// when the message could not be handled.
    fn notify(&self, message: &str) -> Result<()>;

    /// Name used in logs and broadcast reports.
    fn name(&self) -> &str {
        "subscriber"
    }
}

/// Adapts a closure into a [`Subscriber`].
///
/// # Examples
///
/// ```rust
/// use patternkit::notify::{FnSubscriber, Subscriber};
///
/// let printer = FnSubscriber::new("printer", |msg: &str| println!("{}", msg));
/// printer.notify("Task status changed to: Done").unwrap();
/// assert_eq!(printer.name(), "printer");
/// ```
pub struct FnSubscriber<F> {
    name: String,
    callback: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&str) + Send + Sync,
{
    /// Wrap `callback` under the given name.
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> Subscriber for FnSubscriber<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) -> Result<()> {
        (self.callback)(message);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Handle for a subscription that can be dropped to unsubscribe.
///
/// When the handle is dropped, the first registration of its subscriber is
/// removed from the hub. Dropping after the hub itself is gone is a no-op.
pub struct SubscriptionHandle {
    subscriber: Arc<dyn Subscriber>,
    registry: Weak<RwLock<HubInner>>,
}

impl SubscriptionHandle {
    pub(crate) fn new(subscriber: Arc<dyn Subscriber>, registry: Weak<RwLock<HubInner>>) -> Self {
        Self {
            subscriber,
            registry,
        }
    }

    /// The registered subscriber.
    pub fn subscriber(&self) -> &Arc<dyn Subscriber> {
        &self.subscriber
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.write().remove(&self.subscriber);
        }
    }
}

/// Identity comparison that ignores trait-object metadata.
pub(crate) fn same_subscriber<A, B>(a: &Arc<A>, b: &Arc<B>) -> bool
where
    A: ?Sized,
    B: ?Sized,
{
    std::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_fn_subscriber_receives_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let subscriber = FnSubscriber::new("collector", move |msg: &str| {
            seen_clone.lock().push(msg.to_string());
        });

        subscriber.notify("first").unwrap();
        subscriber.notify("second").unwrap();

        assert_eq!(*seen.lock(), vec!["first", "second"]);
        assert_eq!(subscriber.name(), "collector");
    }

    #[test]
    fn test_same_subscriber_identity() {
        let a: Arc<dyn Subscriber> = Arc::new(FnSubscriber::new("a", |_: &str| {}));
        let a_again = Arc::clone(&a);
        let b: Arc<dyn Subscriber> = Arc::new(FnSubscriber::new("a", |_: &str| {}));

        assert!(same_subscriber(&a, &a_again));
        assert!(!same_subscriber(&a, &b));
    }
}
