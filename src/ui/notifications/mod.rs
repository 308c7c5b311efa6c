// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! A [`Notification`] carries an i18n key plus severity; the [`Manager`]
//! owns their lifecycle (auto-dismiss timers, visible cap) and mirrors
//! warnings and errors into the diagnostics log.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
