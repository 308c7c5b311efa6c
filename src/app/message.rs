// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::camera::{Camera, CameraId};
use crate::error::Error;
use crate::ui::dashboard;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    /// Result of a camera list fetch, tagged with its generation.
    CamerasFetched {
        generation: u64,
        result: Result<Vec<Camera>, Error>,
    },
    /// Result of a camera status update.
    StatusUpdateCompleted {
        id: CameraId,
        result: Result<(), Error>,
    },
    Notification(notifications::Message),
    /// Periodic tick for notification auto-dismiss and diagnostics draining.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `CAMBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional API base URL override.
    pub api_url: Option<String>,
    /// Optional API bearer token. Takes precedence over `CAMBOARD_API_TOKEN`.
    pub api_token: Option<String>,
}
