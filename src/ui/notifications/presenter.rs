// SPDX-License-Identifier: MPL-2.0
//! Collaborator interfaces between the engine and whatever draws or plays
//! notifications.
//!
//! The engine describes each notification once as a [`ToastView`] and then
//! only issues lifecycle commands. Presenters answer through [`Signal`]s,
//! either queued for [`Presenter::drain_signals`] or routed by the host to
//! `NotificationEngine::handle`.

use super::highlight::Span;
use super::notification::NotificationId;
use super::options::{Direction, Kind, LineClamp, Position};
use super::theme::ThemeTokens;
use crate::error::Result;
use std::time::{Duration, Instant};

/// Glyph shown beside the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    /// The kind's built-in glyph.
    Kind(Kind),
    /// Caller-supplied glyph payload with an optional accessibility label.
    Custom {
        payload: String,
        label: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub index: usize,
    pub label: String,
    pub style: Option<String>,
}

/// Everything a presenter needs to draw one notification.
#[derive(Debug, Clone)]
pub struct ToastView {
    pub id: NotificationId,
    pub position: Position,
    pub kind: Kind,
    pub direction: Direction,
    pub glyph: Option<Glyph>,
    pub spans: Vec<Span>,
    pub actions: Vec<ActionButton>,
    /// Length of the draining progress bar, when one is shown.
    pub progress: Option<Duration>,
    pub clamp: LineClamp,
    pub expandable: bool,
    pub theme: ThemeTokens,
}

/// Where a mounted card goes inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

impl Placement {
    #[must_use]
    pub fn for_position(position: Position) -> Self {
        if position.is_top() {
            Placement::Front
        } else {
            Placement::Back
        }
    }
}

/// Messages flowing from the presentation layer back into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The exit animation of a concealed notification completed.
    AnimationFinished(NotificationId),
    ActionTriggered { id: NotificationId, index: usize },
    ExpandToggled(NotificationId),
    Dismiss(NotificationId),
}

pub trait Presenter {
    fn create_container(&mut self, position: Position);

    fn remove_container(&mut self, position: Position);

    fn mount(&mut self, view: ToastView, placement: Placement, now: Instant);

    /// Starts the enter animation.
    fn reveal(&mut self, id: NotificationId, now: Instant);

    /// Starts the exit animation. Completion is reported as
    /// [`Signal::AnimationFinished`].
    fn conceal(&mut self, id: NotificationId, now: Instant);

    fn set_line_clamp(&mut self, id: NotificationId, clamp: LineClamp);

    fn unmount(&mut self, id: NotificationId);

    /// Signals produced since the last call.
    fn drain_signals(&mut self, _now: Instant) -> Vec<Signal> {
        Vec::new()
    }
}

/// Sound and haptic feedback fired when a notification is attached.
pub trait AmbientEffects {
    fn supports_sound(&self) -> bool {
        true
    }

    /// Plays the notification chime without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error when no output device is available.
    fn chime(&mut self) -> Result<()>;

    fn supports_vibration(&self) -> bool {
        false
    }

    fn vibrate(&mut self, _duration: Duration) {}
}

/// Silent effects collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl AmbientEffects for NoEffects {
    fn supports_sound(&self) -> bool {
        false
    }

    fn chime(&mut self) -> Result<()> {
        Ok(())
    }
}
