// SPDX-License-Identifier: MPL-2.0
//! Iced presenter drawing notifications as toast cards.
//!
//! [`ToastStage`] keeps one column of cards per anchor and animates opacity
//! on reveal and conceal. The host renders [`ToastStage::view`] as an overlay,
//! maps its [`Signal`]s into its own messages and routes them back to the
//! engine, and drives `frame`/`tick` from [`subscription`].

use super::highlight::Span;
use super::notification::NotificationId;
use super::options::{Direction, LineClamp, Position};
use super::presenter::{ActionButton, Glyph, Placement, Presenter, Signal, ToastView};
use super::theme::ThemeTokens;
use crate::config::{ENTER_EXIT_ANIMATION_MS, FRAME_INTERVAL_MS};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, mouse_area, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    Background, Border, Color, Element, Font, Length, Shadow, Subscription, Theme,
};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

const ANIMATION: Duration = Duration::from_millis(ENTER_EXIT_ANIMATION_MS);

/// Render/tick subscription, active only while notifications are live.
pub fn subscription(active: bool) -> Subscription<Instant> {
    if active {
        iced::time::every(Duration::from_millis(FRAME_INTERVAL_MS))
    } else {
        Subscription::none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Mounted,
    Entering { since: Instant },
    /// Fading out from the opacity the card had when concealed.
    Exiting { since: Instant, from: f32 },
    /// Exit animation done and reported.
    Finished,
}

#[derive(Debug, Clone)]
struct Card {
    view: ToastView,
    clamp: LineClamp,
    motion: Motion,
    revealed_at: Option<Instant>,
}

impl Card {
    fn opacity(&self, now: Instant) -> f32 {
        let progress =
            |since: Instant| (now.saturating_duration_since(since).as_secs_f32() / ANIMATION.as_secs_f32()).min(1.0);
        match self.motion {
            Motion::Mounted | Motion::Finished => 0.0,
            Motion::Entering { since } => progress(since),
            Motion::Exiting { since, from } => from * (1.0 - progress(since)),
        }
    }

    /// Fraction of the auto-hide duration still remaining.
    fn remaining(&self, now: Instant) -> Option<f32> {
        let total = self.view.progress?;
        let Some(revealed_at) = self.revealed_at else {
            return Some(1.0);
        };
        let elapsed = now.saturating_duration_since(revealed_at).as_secs_f32();
        Some((1.0 - elapsed / total.as_secs_f32().max(f32::EPSILON)).clamp(0.0, 1.0))
    }
}

/// Toast overlay implementing [`Presenter`].
#[derive(Debug, Clone)]
pub struct ToastStage {
    containers: BTreeMap<Position, Vec<NotificationId>>,
    cards: HashMap<NotificationId, Card>,
    signals: Vec<Signal>,
    now: Instant,
}

impl Default for ToastStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: BTreeMap::new(),
            cards: HashMap::new(),
            signals: Vec::new(),
            now: Instant::now(),
        }
    }

    /// Queues a signal for the next drain, e.g. from a host shortcut.
    pub fn post(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Renders every container as a layer of one overlay.
    pub fn view(&self) -> Element<'_, Signal> {
        let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
        for (position, ids) in &self.containers {
            if ids.is_empty() {
                continue;
            }
            stack = stack.push(self.view_container(*position, ids));
        }
        stack.into()
    }

    fn view_container<'a>(
        &'a self,
        position: Position,
        ids: &'a [NotificationId],
    ) -> Element<'a, Signal> {
        let (align_x, align_y) = anchor(position);
        let cards = ids
            .iter()
            .filter_map(|id| self.cards.get(id))
            .map(|card| self.view_card(card));

        Container::new(
            Column::with_children(cards)
                .spacing(spacing::SM)
                .align_x(align_x),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::EDGE)
        .into()
    }

    fn view_card<'a>(&'a self, card: &'a Card) -> Element<'a, Signal> {
        let view = &card.view;
        let alpha = card.opacity(self.now);
        let tokens = view.theme;

        let mut body = Column::new().spacing(spacing::XS).push(message(
            &view.spans,
            card.clamp,
            tokens,
            view.kind.accent(),
            alpha,
            view.direction,
        ));
        if !view.actions.is_empty() {
            body = body.push(actions(view.id, &view.actions, tokens, alpha));
        }

        let mut items: Vec<Element<'a, Signal>> = Vec::new();
        if let Some(glyph) = &view.glyph {
            items.push(glyph_widget(glyph, view.kind.accent(), alpha));
        }
        items.push(Container::new(body).width(Length::Fill).into());
        items.push(close_button(view.id, tokens, alpha));
        if view.direction == Direction::Rtl {
            items.reverse();
        }

        let mut layout = Column::new().push(
            Container::new(
                Row::with_children(items)
                    .spacing(spacing::SM)
                    .align_y(Vertical::Top),
            )
            .padding([spacing::SM, spacing::MD]),
        );
        if let Some(remaining) = card.remaining(self.now) {
            layout = layout.push(progress_bar(remaining, tokens, alpha));
        }

        let card_widget = Container::new(layout)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .style(move |_theme: &Theme| card_style(tokens, alpha));

        if view.expandable {
            mouse_area(card_widget)
                .on_press(Signal::ExpandToggled(view.id))
                .into()
        } else {
            card_widget.into()
        }
    }
}

impl Presenter for ToastStage {
    fn create_container(&mut self, position: Position) {
        self.containers.entry(position).or_default();
    }

    fn remove_container(&mut self, position: Position) {
        self.containers.remove(&position);
    }

    fn mount(&mut self, view: ToastView, placement: Placement, now: Instant) {
        self.now = now;
        let id = view.id;
        let members = self.containers.entry(view.position).or_default();
        match placement {
            Placement::Front => members.insert(0, id),
            Placement::Back => members.push(id),
        }
        self.cards.insert(
            id,
            Card {
                clamp: view.clamp,
                view,
                motion: Motion::Mounted,
                revealed_at: None,
            },
        );
    }

    fn reveal(&mut self, id: NotificationId, now: Instant) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.motion = Motion::Entering { since: now };
            card.revealed_at = Some(now);
        }
    }

    fn conceal(&mut self, id: NotificationId, now: Instant) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.motion = Motion::Exiting {
                since: now,
                from: card.opacity(now),
            };
        }
    }

    fn set_line_clamp(&mut self, id: NotificationId, clamp: LineClamp) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.clamp = clamp;
        }
    }

    fn unmount(&mut self, id: NotificationId) {
        if let Some(card) = self.cards.remove(&id) {
            if let Some(members) = self.containers.get_mut(&card.view.position) {
                members.retain(|member| *member != id);
            }
        }
    }

    fn drain_signals(&mut self, now: Instant) -> Vec<Signal> {
        self.now = now;
        for (id, card) in &mut self.cards {
            if let Motion::Exiting { since, .. } = card.motion {
                if now.saturating_duration_since(since) >= ANIMATION {
                    card.motion = Motion::Finished;
                    self.signals.push(Signal::AnimationFinished(*id));
                }
            }
        }
        std::mem::take(&mut self.signals)
    }
}

/// Column alignment for an anchor.
fn anchor(position: Position) -> (Horizontal, Vertical) {
    let vertical = if position.is_top() {
        Vertical::Top
    } else {
        Vertical::Bottom
    };
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => Horizontal::Center,
        Position::TopRight | Position::BottomRight => Horizontal::Right,
    };
    (horizontal, vertical)
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Truncates spans to roughly `clamp` lines, ending with an ellipsis.
pub(crate) fn clamp_spans(spans: &[Span], clamp: LineClamp) -> Vec<Span> {
    let budget = match clamp {
        LineClamp::Unclamped => return spans.to_vec(),
        LineClamp::Lines(lines) => (lines as usize).saturating_mul(sizing::CHARS_PER_LINE),
    };

    let mut used = 0;
    let mut clamped = Vec::new();
    for span in spans {
        let length = span.text.chars().count();
        if used + length <= budget {
            used += length;
            clamped.push(span.clone());
            continue;
        }
        let kept: String = span.text.chars().take(budget - used).collect();
        clamped.push(Span {
            text: format!("{}…", kept.trim_end()),
            emphasized: span.emphasized,
        });
        break;
    }
    clamped
}

fn message<'a>(
    spans: &[Span],
    clamp: LineClamp,
    tokens: ThemeTokens,
    accent: Color,
    alpha: f32,
    direction: Direction,
) -> Element<'a, Signal> {
    let spans = clamp_spans(spans, clamp);
    let align = if direction == Direction::Rtl {
        Horizontal::Right
    } else {
        Horizontal::Left
    };
    let text_color = fade(tokens.text, alpha);

    if spans.iter().all(|span| !span.emphasized) {
        let content: String = spans.into_iter().map(|span| span.text).collect();
        return Container::new(
            Text::new(content)
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(text_color),
                }),
        )
        .width(Length::Fill)
        .align_x(align)
        .into();
    }

    // One text per word so the row can wrap; words keep their leading space.
    let highlight_color = fade(accent, alpha);
    let mut words: Vec<Element<'a, Signal>> = Vec::new();
    for span in spans {
        let color = if span.emphasized {
            highlight_color
        } else {
            text_color
        };
        let font = if span.emphasized {
            Font {
                weight: Weight::Bold,
                ..Font::default()
            }
        } else {
            Font::default()
        };
        for word in span.text.split_inclusive(' ') {
            words.push(
                Text::new(word.to_string())
                    .size(typography::BODY)
                    .font(font)
                    .style(move |_theme: &Theme| text::Style { color: Some(color) })
                    .into(),
            );
        }
    }
    Row::with_children(words).wrap().into()
}

fn glyph_widget<'a>(glyph: &Glyph, accent: Color, alpha: f32) -> Element<'a, Signal> {
    let symbol = match glyph {
        Glyph::Kind(kind) => kind.symbol().to_string(),
        Glyph::Custom { payload, .. } => payload.clone(),
    };
    let color = fade(accent, alpha);
    Container::new(
        Text::new(symbol)
            .size(typography::GLYPH)
            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
    )
    .width(Length::Fixed(sizing::ICON))
    .height(Length::Fixed(sizing::ICON))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn actions<'a>(
    id: NotificationId,
    buttons: &[ActionButton],
    tokens: ThemeTokens,
    alpha: f32,
) -> Element<'a, Signal> {
    let buttons = buttons.iter().map(|action| {
        let variant = ActionVariant::from_tag(action.style.as_deref());
        button(Text::new(action.label.clone()).size(typography::BODY_SM))
            .on_press(Signal::ActionTriggered {
                id,
                index: action.index,
            })
            .padding([spacing::XXS, spacing::SM])
            .style(move |_theme: &Theme, status| action_button_style(tokens, variant, status, alpha))
            .into()
    });
    Row::with_children(buttons).spacing(spacing::XS).wrap().into()
}

fn close_button<'a>(id: NotificationId, tokens: ThemeTokens, alpha: f32) -> Element<'a, Signal> {
    button(Text::new("×").size(typography::BODY))
        .on_press(Signal::Dismiss(id))
        .padding([0.0, spacing::XXS])
        .style(move |_theme: &Theme, status| {
            let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
            button::Style {
                background: hovered.then(|| {
                    Background::Color(fade(
                        Color {
                            a: opacity::HOVER,
                            ..tokens.text
                        },
                        alpha,
                    ))
                }),
                text_color: fade(tokens.muted, alpha),
                border: Border {
                    radius: radius::MD.into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
                snap: true,
            }
        })
        .into()
}

fn progress_bar<'a>(remaining: f32, tokens: ThemeTokens, alpha: f32) -> Element<'a, Signal> {
    let track = fade(
        Color {
            a: opacity::TRACK,
            ..tokens.text
        },
        alpha,
    );
    let fill = fade(
        Color {
            a: opacity::FILL,
            ..tokens.text
        },
        alpha,
    );

    Container::new(
        Container::new(Space::new().height(Length::Fixed(sizing::PROGRESS_HEIGHT)))
            .width(Length::Fixed(sizing::TOAST_WIDTH * remaining))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(fill)),
                ..Default::default()
            }),
    )
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(track)),
        ..Default::default()
    })
    .into()
}

/// Style function for a notification card.
fn card_style(tokens: ThemeTokens, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(tokens.background, alpha))),
        text_color: Some(fade(tokens.text, alpha)),
        border: Border {
            color: fade(tokens.border, alpha),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: fade(tokens.shadow, alpha),
            offset: shadow::OFFSET,
            blur_radius: shadow::BLUR,
        },
        ..Default::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionVariant {
    Outline,
    Primary,
    Danger,
}

impl ActionVariant {
    fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("primary") => ActionVariant::Primary,
            Some("danger") => ActionVariant::Danger,
            _ => ActionVariant::Outline,
        }
    }
}

/// Style function for action buttons.
fn action_button_style(
    tokens: ThemeTokens,
    variant: ActionVariant,
    status: button::Status,
    alpha: f32,
) -> button::Style {
    let (text_color, outline, fill) = match variant {
        ActionVariant::Outline => (
            tokens.text,
            Color {
                a: opacity::OUTLINE,
                ..tokens.text
            },
            None,
        ),
        ActionVariant::Primary => (palette::WHITE, palette::INFO, Some(palette::INFO)),
        ActionVariant::Danger => (palette::ERROR, palette::ERROR, None),
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(fill.unwrap_or(Color {
            a: opacity::HOVER,
            ..tokens.text
        })),
        button::Status::Active | button::Status::Disabled => fill,
    };

    button::Style {
        background: background.map(|color| Background::Color(fade(color, alpha))),
        text_color: fade(text_color, alpha),
        border: Border {
            color: fade(outline, alpha),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
