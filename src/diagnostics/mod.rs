// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle events.
//!
//! Events are captured through a cloneable handle, stored in a memory-bounded
//! circular buffer, and can be exported as JSON for inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped lifecycle event
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Channel-backed sink

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, Effect};
