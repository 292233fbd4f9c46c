// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record the engine keeps for every
//! displayed message, its identifier, and the per-kind accent and glyph.

use super::lifecycle::{Lifecycle, Phase};
use super::options::{normalize, Kind, Position, Settings};
use super::timers::TimerId;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Kind {
    /// Accent color of the kind's glyph.
    #[must_use]
    pub fn accent(&self) -> Color {
        match normalize(self.as_str()).as_str() {
            "warning" => palette::WARNING,
            "success" | "online" => palette::SUCCESS,
            "error" => palette::ERROR,
            "cart" => palette::CART,
            "offline" | "loading" => palette::GRAY_500,
            "wishlist" => palette::WISHLIST,
            "favorite" => palette::FAVORITE,
            _ => palette::INFO,
        }
    }

    /// Default glyph. Unknown custom kinds share the info glyph.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match normalize(self.as_str()).as_str() {
            "warning" => "⚠",
            "success" => "✓",
            "error" => "✕",
            "cart" => "⊕",
            "online" => "●",
            "offline" => "○",
            "wishlist" => "♥",
            "favorite" => "★",
            "saved" => "⚑",
            "download" => "↓",
            "loading" => "◌",
            _ => "ℹ",
        }
    }
}

/// A displayed notification as tracked by the engine.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    message: String,
    settings: Settings,
    lifecycle: Lifecycle,
    /// Message shown without its line clamp.
    expanded: bool,
    pub(crate) auto_hide_timer: Option<TimerId>,
    pub(crate) fallback_timer: Option<TimerId>,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        settings: Settings,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message,
            settings,
            lifecycle: Lifecycle::new(),
            expanded: false,
            auto_hide_timer: None,
            fallback_timer: None,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.settings.position
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.settings.kind
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.lifecycle.is_live()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    /// Flips the expanded flag and returns the new value.
    pub(crate) fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Returns how long ago this notification was displayed.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
