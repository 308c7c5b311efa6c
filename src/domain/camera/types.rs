// SPDX-License-Identifier: MPL-2.0
//! Camera record types as received from the fleet API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned camera identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CameraId(pub u64);

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activation state of a camera.
///
/// The wire format uses the capitalized variant names (`"Active"` /
/// `"Inactive"`), which match the serde defaults, so no renames are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraStatus {
    #[default]
    Active,
    Inactive,
}

impl CameraStatus {
    pub const ALL: [CameraStatus; 2] = [CameraStatus::Active, CameraStatus::Inactive];

    /// Returns the opposite status. Toggling an `Active` camera requests
    /// `Inactive` and vice versa.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CameraStatus::Active => CameraStatus::Inactive,
            CameraStatus::Inactive => CameraStatus::Active,
        }
    }

    /// Wire representation, also used for display (the server's status
    /// strings are shown as-is).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CameraStatus::Active => "Active",
            CameraStatus::Inactive => "Inactive",
        }
    }

    /// i18n key for the action button that requests the *opposite* status.
    #[must_use]
    pub fn toggle_action_key(self) -> &'static str {
        match self {
            CameraStatus::Active => "action-deactivate",
            CameraStatus::Inactive => "action-activate",
        }
    }
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connectivity health of a camera. Both fields are opaque display strings
/// owned by the server; the client never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CameraHealth {
    #[serde(default)]
    pub cloud: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

/// A single camera record from the fleet API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    pub name: String,
    pub location: String,
    pub status: CameraStatus,
    /// Recorder the camera is attached to, if any.
    #[serde(default)]
    pub recorder: Option<String>,
    /// Number of tasks configured on this camera.
    #[serde(default)]
    pub tasks: Option<u32>,
    #[serde(default)]
    pub health: Option<CameraHealth>,
}
