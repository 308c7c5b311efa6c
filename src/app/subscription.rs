// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss and
/// diagnostics draining.
///
/// The tick only runs while there is something to advance: visible
/// notifications with timers, or an in-flight fetch whose completion should
/// repaint promptly.
pub fn create_tick_subscription(
    has_notifications: bool,
    is_loading: bool,
) -> Subscription<Message> {
    if has_notifications || is_loading {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
