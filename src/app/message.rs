// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{Kind, Position, QueueStrategy, Signal};
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Kind),
    /// Show a notification carrying Undo/Retry buttons.
    ShowWithActions,
    /// Show a long, highlighted, expandable notification.
    ShowHighlighted,
    SelectPosition(Position),
    SelectStrategy(QueueStrategy),
    ToggleSound(bool),
    DismissAll,
    ExportDiagnostics,
    Toast(Signal),
    Tick(Instant),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Anchor used for new notifications instead of the configured default.
    pub position: Option<Position>,
    /// Queue strategy used instead of the configured default.
    pub strategy: Option<QueueStrategy>,
}
