// SPDX-License-Identifier: MPL-2.0
//! Toast and snackbar notifications.
//!
//! A [`NotificationEngine`] takes display requests, resolves their
//! [`Options`] over the configured defaults, places them in per-anchor
//! containers under a [`QueueStrategy`], and walks each one through its
//! [`Phase`]s. Drawing is delegated to a [`Presenter`]; [`ToastStage`] is the
//! iced implementation.
//!
//! # Components
//!
//! - [`options`] - Display options, resolved [`Settings`] and parsing
//! - [`theme`] - Theme presets and per-token color overrides
//! - [`engine`] - Lifecycle and queue orchestration
//! - [`toast`] - Iced toast overlay
//! - [`chime`] - Notification sound
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::ui::notifications::{Kind, NotificationEngine, Options, ToastStage};
//!
//! let mut engine = NotificationEngine::new(ToastStage::new());
//! engine.display("Saved", Options::new().kind(Kind::Success));
//!
//! // On every frame tick
//! engine.frame();
//! engine.tick();
//!
//! // In the view
//! let overlay = engine.presenter().view().map(Message::Toast);
//! ```

pub mod chime;
pub mod clock;
pub mod engine;
pub mod highlight;
pub mod lifecycle;
pub mod notification;
pub mod options;
pub mod presenter;
pub mod queue;
pub mod registry;
pub mod theme;
pub mod timers;
pub mod toast;

pub use chime::Chime;
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{NotificationEngine, NotificationHandle, EXIT_FALLBACK};
pub use highlight::{highlight, Span};
pub use lifecycle::{ExitReason, Phase, RemovalCause};
pub use notification::{Notification, NotificationId};
pub use options::{
    Action, Callback, Direction, Icon, Kind, LineClamp, Options, Position, ProgressBar,
    QueueStrategy, Settings, WordHighlight,
};
pub use presenter::{
    ActionButton, AmbientEffects, Glyph, NoEffects, Placement, Presenter, Signal, ToastView,
};
pub use queue::QueuePolicy;
pub use registry::{Container, ContainerRegistry};
pub use theme::{parse_hex, to_hex, ThemeOverrides, ThemePreset, ThemeToken, ThemeTokens};
pub use timers::{Timer, TimerId, TimerQueue};
pub use toast::{subscription, ToastStage};
