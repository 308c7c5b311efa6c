// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector aggregating events into the ring buffer.
//!
//! Producers hold a cheap [`DiagnosticsHandle`] and push events through a
//! bounded channel; the UI thread drains the channel into the buffer on its
//! periodic tick. Sends never block: when the channel is full the event is
//! dropped.

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;
use std::time::Instant;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType,
    UserAction, WarningEvent, WarningType,
};

/// Channel capacity between producers and the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action with optional free-form details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action, details });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning event.
    pub fn log_warning(&self, event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning with `WarningType::Other`.
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(WarningType::Other, message));
    }

    /// Logs an error event.
    pub fn log_error(&self, event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error with `ErrorType::Other`.
    pub fn log_error_simple(&self, message: impl Into<String>) {
        self.log_error(ErrorEvent::new(ErrorType::Other, message));
    }
}

/// Central collector for diagnostic events.
///
/// Owns the ring buffer; old events are evicted once capacity is reached.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, used to export per-event elapsed offsets.
    started_at: Instant,
    /// Wall-clock start for export metadata.
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events from the channel into the buffer.
    ///
    /// Call periodically (e.g. on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs directly into the buffer, bypassing the channel. Useful from the
    /// main update loop which owns the collector anyway.
    pub fn log_event(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports the buffered events as a JSON document.
    ///
    /// Monotonic timestamps are exported as millisecond offsets from
    /// collection start; the start itself is reported as wall-clock UTC.
    pub fn export_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct ExportedEvent<'a> {
            elapsed_ms: u128,
            #[serde(flatten)]
            kind: &'a DiagnosticEventKind,
        }

        #[derive(Serialize)]
        struct Export<'a> {
            started_at: String,
            event_count: usize,
            events: Vec<ExportedEvent<'a>>,
        }

        let events = self
            .buffer
            .iter()
            .map(|event| ExportedEvent {
                elapsed_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis(),
                kind: &event.kind,
            })
            .collect();

        serde_json::to_string_pretty(&Export {
            started_at: self.started_at_utc.to_rfc3339(),
            event_count: self.buffer.len(),
            events,
        })
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(50));
        let handle = collector.handle();

        handle.log_action(UserAction::RefreshCameras);
        handle.log_error_simple("fetch failed");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_evicts_oldest_events_at_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10));
        for page in 0..15 {
            collector.log_event(DiagnosticEventKind::UserAction {
                action: UserAction::SelectPage { page },
                details: None,
            });
        }

        assert_eq!(collector.len(), 10);
        let first = collector.iter().next().expect("non-empty");
        match &first.kind {
            DiagnosticEventKind::UserAction {
                action: UserAction::SelectPage { page },
                ..
            } => assert_eq!(*page, 5),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn export_json_contains_events_and_metadata() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10));
        collector.log_event(DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::Api, "HTTP 500"),
        });

        let json = collector.export_json().expect("export should serialize");
        assert!(json.contains("\"event_count\": 1"));
        assert!(json.contains("\"error_type\": \"api\""));
        assert!(json.contains("started_at"));
    }

    #[test]
    fn handles_survive_cloning() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let clone = handle.clone();

        clone.log_warning_simple("token missing");
        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }
}
