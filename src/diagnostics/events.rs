// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User-initiated actions captured for diagnostics.
///
/// These describe what the user was doing when issues occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Fetch or re-fetch the full camera list.
    RefreshCameras,

    /// Edit the free-text search term.
    EditSearch,

    /// Select a status in the status filter.
    FilterByStatus,

    /// Select a location in the location filter.
    FilterByLocation,

    /// Reset every filter predicate.
    ClearFilters,

    /// Jump to a table page.
    SelectPage {
        /// Zero-based page index the user asked for.
        page: usize,
    },

    /// Request a status change for one camera.
    ToggleCameraStatus {
        /// Identifier of the targeted camera.
        camera_id: u64,
    },
}

/// Category of a warning event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    Config,
    Auth,
    Other,
}

/// Category of an error event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Network,
    Api,
    Config,
    Io,
    Other,
}

/// A warning: something off, but the operation continued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error: the operation failed and its result was discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with its (monotonic) timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred; monotonic, used for elapsed-time export.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        #[serde(flatten)]
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Warning {
        #[serde(flatten)]
        event: WarningEvent,
    },
    Error {
        #[serde(flatten)]
        event: ErrorEvent,
    },
}
