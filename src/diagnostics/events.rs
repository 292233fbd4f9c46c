// SPDX-License-Identifier: MPL-2.0
//! Lifecycle events recorded by the notification engine.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::notifications::{ExitReason, Kind, NotificationId, Position, RemovalCause};

/// Ambient effect that could not be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Sound,
    Vibration,
}

/// A diagnostic event with its timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Displayed {
        id: NotificationId,
        position: Position,
        kind: Kind,
    },
    Revealed {
        id: NotificationId,
    },
    ExitRequested {
        id: NotificationId,
        reason: ExitReason,
    },
    Removed {
        id: NotificationId,
        cause: RemovalCause,
    },
    ContainerCreated {
        position: Position,
    },
    ContainerReleased {
        position: Position,
    },
    ActionTriggered {
        id: NotificationId,
        index: usize,
    },
    /// An effect was requested but the device could not play it.
    EffectSkipped {
        id: NotificationId,
        effect: Effect,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_serializes_with_type_tag() {
        let kind = DiagnosticEventKind::ContainerCreated {
            position: Position::TopLeft,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"container_created\""));
        assert!(json.contains("\"position\":\"top-left\""));
    }

    #[test]
    fn exit_reason_serializes_snake_case() {
        let kind = DiagnosticEventKind::ExitRequested {
            id: NotificationId::new(),
            reason: ExitReason::AutoHide,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"reason\":\"auto_hide\""));
    }

    #[test]
    fn event_kind_deserializes_from_json() {
        let json = r#"{"type":"removed","id":7,"cause":"fallback_timeout"}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        match kind {
            DiagnosticEventKind::Removed { cause, .. } => {
                assert_eq!(cause, RemovalCause::FallbackTimeout);
            }
            _ => panic!("expected Removed variant"),
        }
    }
}
