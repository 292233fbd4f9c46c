// SPDX-License-Identifier: MPL-2.0
//! Per-notification phase tag.
//!
//! Every transition checks and sets the phase in one call and reports whether
//! it happened, so redundant triggers (a timer firing after a dismiss, a second
//! animation-completion signal) fall through as no-ops.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Pending,
    Entering,
    Visible,
    Exiting,
    Removed,
}

impl Phase {
    /// Entering or visible notifications count toward queue decisions.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Phase::Entering | Phase::Visible)
    }
}

/// Why a notification started exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    AutoHide,
    Dismissed,
    Evicted,
    Action,
}

/// Which completion source finished an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalCause {
    AnimationFinished,
    FallbackTimeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Pending,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.phase.is_live()
    }

    /// `Pending -> Entering`.
    pub fn enter(&mut self) -> bool {
        self.advance(Phase::Pending, Phase::Entering)
    }

    /// `Entering -> Visible`. Ignored once an exit has started.
    pub fn reveal(&mut self) -> bool {
        self.advance(Phase::Entering, Phase::Visible)
    }

    /// `Entering | Visible -> Exiting`.
    pub fn begin_exit(&mut self) -> bool {
        if self.phase.is_live() {
            self.phase = Phase::Exiting;
            true
        } else {
            false
        }
    }

    /// `Exiting -> Removed`.
    pub fn finish(&mut self) -> bool {
        self.advance(Phase::Exiting, Phase::Removed)
    }

    fn advance(&mut self, from: Phase, to: Phase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            false
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
