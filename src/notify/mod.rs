//! Task-status notification system.
//!
//! A [`NotificationHub`] keeps an ordered list of [`Subscriber`]s and
//! broadcasts every status change to them synchronously, in registration
//! order. Email, SMS and push channels are provided in [`channels`].

pub mod channels;
pub mod hub;
pub mod subscriber;

pub use channels::{EmailNotifier, PushNotifier, SmsNotifier};
pub use hub::{Broadcast, NotificationHub};
pub use subscriber::{FnSubscriber, Subscriber, SubscriptionHandle};
