// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module: the in-app event log.
//!
//! Failures, warnings, and notable user actions are recorded here instead of
//! a terminal logger. Events flow through a bounded channel into a
//! memory-bounded circular buffer and can be exported as JSON for
//! inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with validated capacity
//! - [`DiagnosticEvent`]: timestamped event record
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-fed collector
//!   and its cheap clonable sender

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
