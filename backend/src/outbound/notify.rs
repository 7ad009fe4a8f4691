//! Notification adapters.
//!
//! The original UI surfaced these as toast popups; server-side they become
//! structured log events. Delivery is best-effort by contract — nothing
//! here can fail the mutation that raised the notification.

use std::sync::Mutex;

use tracing::{error, info};

use crate::domain::{Notification, Notifier, Severity};

/// Notifier that emits each notification as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Error => error!(
                title = %notification.title,
                message = %notification.message,
                "notification"
            ),
            Severity::Success | Severity::Info => info!(
                title = %notification.title,
                message = %notification.message,
                "notification"
            ),
        }
    }
}

/// Notifier that records every notification for later inspection.
///
/// Used by test suites to assert which notifications a flow raised.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Fresh recorder with no deliveries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    #[must_use]
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Titles of everything delivered so far.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.delivered()
            .into_iter()
            .map(|notification| notification.title)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.delivered
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(notification.clone());
    }
}
