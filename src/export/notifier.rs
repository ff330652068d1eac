//! User notifications
//!
//! Notifications are fire-and-forget: a notifier cannot fail and its caller
//! never waits on it.

use tracing::info;

/// Surfaces a short message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sends notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "money_report::notify", "{}", message);
    }
}
