// SPDX-License-Identifier: MPL-2.0
//! Display options and their resolution over documented defaults.
//!
//! [`Options`] is what callers pass to a display request: every field is
//! optional. [`Settings`] is the fully resolved form the engine works with.
//! Merging never fails: unrecognized strings and out-of-range numbers fall
//! back to the default for that field.

use super::theme::{ThemeOverrides, ThemePreset};
use crate::config::{DEFAULT_DURATION_MS, DEFAULT_MAX_LINES, DEFAULT_MAX_VISIBLE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Lowercases and strips separators so `bottomRight`, `bottom-right` and
/// `BOTTOM_RIGHT` all compare equal.
pub(crate) fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// =============================================================================
// Position
// =============================================================================

/// Screen anchor of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Top anchors insert new notifications at the front of their container.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Parses an anchor name, falling back to the default anchor.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "topleft" => Position::TopLeft,
            "topcenter" => Position::TopCenter,
            "topright" => Position::TopRight,
            "bottomleft" => Position::BottomLeft,
            "bottomcenter" => Position::BottomCenter,
            _ => Position::BottomRight,
        }
    }
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Text direction of a notification card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if normalize(raw) == "rtl" {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl From<String> for Direction {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Ltr => "ltr".to_string(),
            Direction::Rtl => "rtl".to_string(),
        }
    }
}

// =============================================================================
// Kind
// =============================================================================

/// Visual and semantic kind. Anything beyond the four built-in kinds is a
/// custom kind identified by name (e.g. `cart`, `download`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    #[default]
    Info,
    Warning,
    Success,
    Error,
    Custom(String),
}

impl Kind {
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::parse(&name.into())
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "" | "info" => Kind::Info,
            "warning" => Kind::Warning,
            "success" => Kind::Success,
            "error" => Kind::Error,
            _ => Kind::Custom(raw.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Custom(name) => name,
        }
    }
}

impl From<String> for Kind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.as_str().to_string()
    }
}

// =============================================================================
// Icon
// =============================================================================

/// Icon selection for a notification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "IconRepr", into = "IconRepr")]
pub enum Icon {
    /// The kind's default glyph.
    #[default]
    Show,
    Hide,
    /// A caller-supplied glyph payload.
    Custom(String),
    /// A caller-supplied glyph with an accessibility label.
    Labeled { glyph: String, label: String },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IconRepr {
    Keyword(String),
    Labeled {
        glyph: String,
        #[serde(default)]
        label: String,
    },
}

impl From<IconRepr> for Icon {
    fn from(repr: IconRepr) -> Self {
        match repr {
            IconRepr::Keyword(word) => match normalize(&word).as_str() {
                "show" => Icon::Show,
                "hide" => Icon::Hide,
                _ => Icon::Custom(word),
            },
            IconRepr::Labeled { glyph, label } => Icon::Labeled { glyph, label },
        }
    }
}

impl From<Icon> for IconRepr {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Show => IconRepr::Keyword("show".to_string()),
            Icon::Hide => IconRepr::Keyword("hide".to_string()),
            Icon::Custom(glyph) => IconRepr::Keyword(glyph),
            Icon::Labeled { glyph, label } => IconRepr::Labeled { glyph, label },
        }
    }
}

// =============================================================================
// Progress bar, highlight, line clamp, strategy
// =============================================================================

/// Progress bar visibility. Only rendered when auto-hide is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgressBar {
    Show,
    #[default]
    Hidden,
}

impl From<String> for ProgressBar {
    fn from(raw: String) -> Self {
        if normalize(&raw) == "show" {
            ProgressBar::Show
        } else {
            ProgressBar::Hidden
        }
    }
}

impl From<ProgressBar> for String {
    fn from(bar: ProgressBar) -> Self {
        match bar {
            ProgressBar::Show => "show".to_string(),
            ProgressBar::Hidden => "hidden".to_string(),
        }
    }
}

/// Terms to emphasize in the message, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordHighlight {
    Term(String),
    Terms(Vec<String>),
}

impl WordHighlight {
    #[must_use]
    pub fn into_terms(self) -> Vec<String> {
        match self {
            WordHighlight::Term(term) => vec![term],
            WordHighlight::Terms(terms) => terms,
        }
    }
}

impl From<&str> for WordHighlight {
    fn from(term: &str) -> Self {
        WordHighlight::Term(term.to_string())
    }
}

impl From<Vec<&str>> for WordHighlight {
    fn from(terms: Vec<&str>) -> Self {
        WordHighlight::Terms(terms.into_iter().map(str::to_string).collect())
    }
}

/// Maximum number of visible message lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LineClampRepr", into = "LineClampRepr")]
pub enum LineClamp {
    Lines(u32),
    Unclamped,
}

impl Default for LineClamp {
    fn default() -> Self {
        LineClamp::Lines(DEFAULT_MAX_LINES)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LineClampRepr {
    Lines(u32),
    Keyword(String),
}

impl From<LineClampRepr> for LineClamp {
    fn from(repr: LineClampRepr) -> Self {
        match repr {
            LineClampRepr::Lines(lines) => LineClamp::Lines(lines),
            LineClampRepr::Keyword(word) => match normalize(&word).as_str() {
                "unclamped" | "unset" | "none" => LineClamp::Unclamped,
                other => other
                    .parse()
                    .map_or_else(|_| LineClamp::default(), LineClamp::Lines),
            },
        }
    }
}

impl From<LineClamp> for LineClampRepr {
    fn from(clamp: LineClamp) -> Self {
        match clamp {
            LineClamp::Lines(lines) => LineClampRepr::Lines(lines),
            LineClamp::Unclamped => LineClampRepr::Keyword("unclamped".to_string()),
        }
    }
}

/// How a new arrival treats the notifications already in its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueueStrategy {
    /// Add on top of existing ones, even past `max_visible`.
    #[default]
    Stack,
    /// Evict the oldest live one once `max_visible` is reached.
    ReplaceOldest,
    /// Evict every live one.
    ReplaceAll,
    /// Evict the front one whenever the container is non-empty.
    Collapse,
}

impl QueueStrategy {
    pub const ALL: [QueueStrategy; 4] = [
        QueueStrategy::Stack,
        QueueStrategy::ReplaceOldest,
        QueueStrategy::ReplaceAll,
        QueueStrategy::Collapse,
    ];

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "replaceoldest" => QueueStrategy::ReplaceOldest,
            "replaceall" => QueueStrategy::ReplaceAll,
            "collapse" => QueueStrategy::Collapse,
            _ => QueueStrategy::Stack,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QueueStrategy::Stack => "stack",
            QueueStrategy::ReplaceOldest => "replace-oldest",
            QueueStrategy::ReplaceAll => "replace-all",
            QueueStrategy::Collapse => "collapse",
        }
    }
}

impl fmt::Display for QueueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for QueueStrategy {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<QueueStrategy> for String {
    fn from(strategy: QueueStrategy) -> Self {
        strategy.as_str().to_string()
    }
}

// =============================================================================
// Action
// =============================================================================

/// Callback run when an action button is triggered.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// An interactive button attached to a notification.
#[derive(Clone)]
pub struct Action {
    label: String,
    on_trigger: Option<Callback>,
    close_on_trigger: Option<bool>,
    style: Option<String>,
}

impl Action {
    /// Creates an action running `on_trigger` each time it is pressed.
    pub fn new(label: impl Into<String>, on_trigger: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            on_trigger: Some(Arc::new(on_trigger)),
            close_on_trigger: None,
            style: None,
        }
    }

    /// Creates an action without a callback (pressing it only applies the
    /// close behaviour).
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_trigger: None,
            close_on_trigger: None,
            style: None,
        }
    }

    /// Overrides the notification's `close_on_action` default for this action.
    #[must_use]
    pub fn close_on_trigger(mut self, close: bool) -> Self {
        self.close_on_trigger = Some(close);
        self
    }

    /// Sets a free-form style tag handed to the presenter.
    #[must_use]
    pub fn style(mut self, tag: impl Into<String>) -> Self {
        self.style = Some(tag.into());
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn style_tag(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Whether triggering closes the notification; the per-action override
    /// beats the notification default.
    #[must_use]
    pub fn closes(&self, notification_default: bool) -> bool {
        self.close_on_trigger.unwrap_or(notification_default)
    }

    pub(crate) fn trigger(&self) {
        if let Some(callback) = &self.on_trigger {
            callback();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("has_callback", &self.on_trigger.is_some())
            .field("close_on_trigger", &self.close_on_trigger)
            .field("style", &self.style)
            .finish()
    }
}

// =============================================================================
// Options
// =============================================================================

/// Per-request display options. Unset fields take the engine defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<ProgressBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_hide: Option<bool>,
    /// Auto-hide delay in milliseconds.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_highlight: Option<WordHighlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_effect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<LineClamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<ThemeOverrides>,
    #[serde(skip)]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_on_action: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_strategy: Option<QueueStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn progress_bar(mut self, bar: ProgressBar) -> Self {
        self.progress_bar = Some(bar);
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = Some(auto_hide);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration_ms = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    #[must_use]
    pub fn word_highlight(mut self, highlight: impl Into<WordHighlight>) -> Self {
        self.word_highlight = Some(highlight.into());
        self
    }

    #[must_use]
    pub fn sound_effect(mut self, enabled: bool) -> Self {
        self.sound_effect = Some(enabled);
        self
    }

    #[must_use]
    pub fn vibrate(mut self, enabled: bool) -> Self {
        self.vibrate = Some(enabled);
        self
    }

    #[must_use]
    pub fn max_lines(mut self, clamp: LineClamp) -> Self {
        self.max_lines = Some(clamp);
        self
    }

    #[must_use]
    pub fn expandable(mut self, expandable: bool) -> Self {
        self.expandable = Some(expandable);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: ThemePreset) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn custom_theme(mut self, overrides: ThemeOverrides) -> Self {
        self.custom_theme = Some(overrides);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn close_on_action(mut self, close: bool) -> Self {
        self.close_on_action = Some(close);
        self
    }

    #[must_use]
    pub fn queue_strategy(mut self, strategy: QueueStrategy) -> Self {
        self.queue_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = Some(max_visible);
        self
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Fully resolved options for one notification.
#[derive(Debug, Clone)]
pub struct Settings {
    pub direction: Direction,
    pub kind: Kind,
    pub position: Position,
    pub icon: Icon,
    pub progress_bar: ProgressBar,
    pub auto_hide: bool,
    pub duration: Duration,
    pub word_highlight: Vec<String>,
    pub sound_effect: bool,
    pub vibrate: bool,
    pub max_lines: LineClamp,
    pub expandable: bool,
    pub theme: ThemePreset,
    pub custom_theme: ThemeOverrides,
    pub actions: Vec<Action>,
    pub close_on_action: bool,
    pub queue_strategy: QueueStrategy,
    pub max_visible: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            kind: Kind::Info,
            position: Position::BottomRight,
            icon: Icon::Show,
            progress_bar: ProgressBar::Hidden,
            auto_hide: true,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            word_highlight: Vec::new(),
            sound_effect: false,
            vibrate: false,
            max_lines: LineClamp::Lines(DEFAULT_MAX_LINES),
            expandable: false,
            theme: ThemePreset::Dark,
            custom_theme: ThemeOverrides::default(),
            actions: Vec::new(),
            close_on_action: true,
            queue_strategy: QueueStrategy::Stack,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl Settings {
    /// Returns these settings with every field set in `options` applied on top.
    ///
    /// Zero durations, zero `max_visible` and zero-line clamps keep the base value.
    #[must_use]
    pub fn merged(&self, options: Options) -> Settings {
        let base = self.clone();
        Settings {
            direction: options.direction.unwrap_or(base.direction),
            kind: options.kind.unwrap_or(base.kind),
            position: options.position.unwrap_or(base.position),
            icon: options.icon.unwrap_or(base.icon),
            progress_bar: options.progress_bar.unwrap_or(base.progress_bar),
            auto_hide: options.auto_hide.unwrap_or(base.auto_hide),
            duration: options
                .duration_ms
                .filter(|ms| *ms > 0)
                .map_or(base.duration, Duration::from_millis),
            word_highlight: options
                .word_highlight
                .map_or(base.word_highlight, WordHighlight::into_terms),
            sound_effect: options.sound_effect.unwrap_or(base.sound_effect),
            vibrate: options.vibrate.unwrap_or(base.vibrate),
            max_lines: options
                .max_lines
                .filter(|clamp| *clamp != LineClamp::Lines(0))
                .unwrap_or(base.max_lines),
            expandable: options.expandable.unwrap_or(base.expandable),
            theme: options.theme.unwrap_or(base.theme),
            custom_theme: options.custom_theme.unwrap_or(base.custom_theme),
            actions: if options.actions.is_empty() {
                base.actions
            } else {
                options.actions
            },
            close_on_action: options.close_on_action.unwrap_or(base.close_on_action),
            queue_strategy: options.queue_strategy.unwrap_or(base.queue_strategy),
            max_visible: options
                .max_visible
                .filter(|max| *max > 0)
                .unwrap_or(base.max_visible),
        }
    }

    /// Duration of the progress bar, if one should be drawn.
    #[must_use]
    pub fn progress_duration(&self) -> Option<Duration> {
        (self.progress_bar == ProgressBar::Show && self.auto_hide).then_some(self.duration)
    }
}
