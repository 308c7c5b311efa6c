// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles display timing and dismissal of toasts, caps the
//! number visible at once, and mirrors warnings/errors into the diagnostics
//! event log.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 4;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the visible notification stack.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications, oldest first.
    visible: VecDeque<Notification>,
    /// Optional diagnostics handle for mirroring warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a notification onto the visible stack.
    ///
    /// When the stack is full, the oldest auto-dismissable notification is
    /// evicted first; sticky errors are only evicted by newer errors.
    /// Warnings and errors are mirrored into the diagnostics log with their
    /// declared category (falling back to `Other`).
    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => {
                    let warning_type = notification.warning_type().unwrap_or(WarningType::Other);
                    handle.log_warning(WarningEvent::new(
                        warning_type,
                        notification.message_key(),
                    ));
                }
                Severity::Error => {
                    let error_type = notification.error_type().unwrap_or(ErrorType::Other);
                    handle.log_error(ErrorEvent::new(error_type, notification.message_key()));
                }
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() == MAX_VISIBLE {
            let evictable = self
                .visible
                .iter()
                .position(|n| n.severity() != Severity::Error)
                .or(if notification.severity() == Severity::Error {
                    Some(0)
                } else {
                    None
                });
            match evictable {
                Some(index) => {
                    self.visible.remove(index);
                }
                None => return,
            }
        }
        self.visible.push_back(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            return true;
        }
        false
    }

    /// Processes a tick, dismissing notifications whose time ran out.
    ///
    /// Should be called periodically (e.g. every 100-500ms).
    pub fn tick(&mut self) {
        self.visible.retain(|n| !n.should_auto_dismiss());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.visible.clear();
    }

    /// Removes fetch-error toasts. Called when a fetch finally succeeds so
    /// stale failure messages don't outlive the data they complained about.
    pub fn clear_fetch_errors(&mut self) {
        self.visible
            .retain(|n| n.message_key() != "notification-fetch-error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn full_stack_evicts_oldest_dismissable() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.push(Notification::success("newest"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        // test-0 was evicted; the newest sits at the back.
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert!(!keys.contains(&"test-0"));
        assert_eq!(*keys.last().unwrap(), "newest");
    }

    #[test]
    fn errors_are_not_evicted_by_lower_severities() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("error-{i}")));
        }

        manager.push(Notification::success("late success"));
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert!(!keys.contains(&"late success"));

        // A newer error does displace the oldest one.
        manager.push(Notification::error("late error"));
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert!(keys.contains(&"late error"));
        assert!(!keys.contains(&"error-0"));
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn tick_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::error("sticky"));

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn clear_fetch_errors_is_selective() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-fetch-error"));
        manager.push(Notification::error("notification-update-error"));

        manager.clear_fetch_errors();
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["notification-update-error"]);
    }

    #[test]
    fn warnings_and_errors_reach_diagnostics() {
        use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};

        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(50));
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(Notification::warning("w").with_warning_type(WarningType::Auth));
        manager.push(Notification::error("e").with_error_type(ErrorType::Network));
        manager.push(Notification::success("s"));

        collector.process_pending();
        // Success notifications are not diagnostic events.
        assert_eq!(collector.len(), 2);
    }
}
