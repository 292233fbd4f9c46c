// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle and queue orchestration.
//!
//! The engine owns every container and notification and advances them only
//! when the host calls in: [`NotificationEngine::frame`] delivers deferred
//! reveals, [`NotificationEngine::tick`] drains presenter signals and fires
//! due timers. Nothing happens in the background.

use super::clock::{Clock, SystemClock};
use super::highlight::highlight;
use super::lifecycle::{ExitReason, Phase, RemovalCause};
use super::notification::{Notification, NotificationId};
use super::options::{Icon, LineClamp, Options, Position, Settings};
use super::presenter::{
    ActionButton, AmbientEffects, Glyph, NoEffects, Placement, Presenter, Signal, ToastView,
};
use super::queue::QueuePolicy;
use super::registry::{Container, ContainerRegistry};
use super::theme::ThemeTokens;
use super::timers::{Timer, TimerQueue};
use crate::config::{EXIT_FALLBACK_MS, VIBRATION_MS};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, Effect};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Removal deadline after an exit starts when no animation signal arrives.
pub const EXIT_FALLBACK: Duration = Duration::from_millis(EXIT_FALLBACK_MS);

/// Returned by [`NotificationEngine::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle {
    id: NotificationId,
}

impl NotificationHandle {
    #[must_use]
    pub fn id(self) -> NotificationId {
        self.id
    }

    /// Starts the exit of this notification. Returns `false` if it was
    /// already exiting or gone.
    pub fn dismiss<P: Presenter, E: AmbientEffects>(
        self,
        engine: &mut NotificationEngine<P, E>,
    ) -> bool {
        engine.dismiss(self.id)
    }
}

pub struct NotificationEngine<P, E = NoEffects> {
    presenter: P,
    effects: E,
    clock: Box<dyn Clock>,
    defaults: Settings,
    registry: ContainerRegistry,
    notifications: HashMap<NotificationId, Notification>,
    pending_reveals: VecDeque<NotificationId>,
    timers: TimerQueue,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<P: Presenter> NotificationEngine<P> {
    /// Creates an engine without sound or vibration.
    pub fn new(presenter: P) -> Self {
        Self::with_effects(presenter, NoEffects)
    }
}

impl<P: Presenter, E: AmbientEffects> NotificationEngine<P, E> {
    pub fn with_effects(presenter: P, effects: E) -> Self {
        Self {
            presenter,
            effects,
            clock: Box::new(SystemClock),
            defaults: Settings::default(),
            registry: ContainerRegistry::new(),
            notifications: HashMap::new(),
            pending_reveals: VecDeque::new(),
            timers: TimerQueue::new(),
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the engine defaults with `options` merged over the
    /// documented defaults.
    #[must_use]
    pub fn with_defaults(mut self, options: Options) -> Self {
        self.defaults = Settings::default().merged(options);
        self
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn effects(&self) -> &E {
        &self.effects
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Displays `message` with the engine defaults.
    pub fn show(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.display(message, Options::default())
    }

    /// Displays `message`, evicting existing notifications as the queue
    /// strategy requires. The reveal is deferred to the next [`frame`].
    ///
    /// [`frame`]: NotificationEngine::frame
    pub fn display(&mut self, message: impl Into<String>, options: Options) -> NotificationHandle {
        let message = message.into();
        let settings = self.defaults.merged(options);
        let now = self.clock.now();
        let position = settings.position;

        // Exiting members still occupy the container; evicting them again is a no-op.
        let members = self.members(position);
        for evicted in
            QueuePolicy::admit(position, &members, settings.queue_strategy, settings.max_visible)
        {
            self.begin_exit(evicted, ExitReason::Evicted, now);
        }

        let id = NotificationId::new();
        let created = {
            let (container, created) = self.registry.get_or_create(position);
            container.insert(id);
            created
        };
        if created {
            self.presenter.create_container(position);
            self.log(DiagnosticEventKind::ContainerCreated { position });
        }

        let view = describe(id, &message, &settings);
        let (sound, vibrate, kind) = (
            settings.sound_effect,
            settings.vibrate,
            settings.kind.clone(),
        );

        let mut notification = Notification::new(id, message, settings, now);
        self.presenter
            .mount(view, Placement::for_position(position), now);
        notification.lifecycle_mut().enter();
        self.notifications.insert(id, notification);
        self.pending_reveals.push_back(id);
        self.log(DiagnosticEventKind::Displayed { id, position, kind });

        self.play_effects(id, sound, vibrate);

        NotificationHandle { id }
    }

    fn play_effects(&mut self, id: NotificationId, sound: bool, vibrate: bool) {
        if sound {
            if !self.effects.supports_sound() {
                self.log(DiagnosticEventKind::EffectSkipped {
                    id,
                    effect: Effect::Sound,
                    details: None,
                });
            } else if let Err(err) = self.effects.chime() {
                self.log(DiagnosticEventKind::EffectSkipped {
                    id,
                    effect: Effect::Sound,
                    details: Some(err.to_string()),
                });
            }
        }

        if vibrate {
            if self.effects.supports_vibration() {
                self.effects.vibrate(Duration::from_millis(VIBRATION_MS));
            } else {
                self.log(DiagnosticEventKind::EffectSkipped {
                    id,
                    effect: Effect::Vibration,
                    details: None,
                });
            }
        }
    }

    // =========================================================================
    // Driving
    // =========================================================================

    /// Delivers the reveals queued since the previous frame.
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let due: Vec<NotificationId> = self.pending_reveals.drain(..).collect();
        for id in due {
            self.reveal(id, now);
        }
    }

    /// Handles queued presenter signals, then fires every due timer.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for signal in self.presenter.drain_signals(now) {
            self.handle(signal);
        }

        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                Timer::AutoHide(id) => {
                    if let Some(notification) = self.notifications.get_mut(&id) {
                        notification.auto_hide_timer = None;
                    }
                    self.begin_exit(id, ExitReason::AutoHide, now);
                }
                Timer::ExitFallback(id) => {
                    if let Some(notification) = self.notifications.get_mut(&id) {
                        notification.fallback_timer = None;
                    }
                    self.finish_removal(id, RemovalCause::FallbackTimeout);
                }
            }
        }
    }

    /// Routes a presenter signal.
    pub fn handle(&mut self, signal: Signal) {
        let now = self.clock.now();
        match signal {
            Signal::AnimationFinished(id) => {
                self.finish_removal(id, RemovalCause::AnimationFinished);
            }
            Signal::ActionTriggered { id, index } => self.trigger_action(id, index, now),
            Signal::ExpandToggled(id) => self.toggle_expanded(id),
            Signal::Dismiss(id) => {
                self.begin_exit(id, ExitReason::Dismissed, now);
            }
        }
    }

    /// Starts the exit of `id`. Returns `false` if it was already exiting or gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.begin_exit(id, ExitReason::Dismissed, now)
    }

    /// Starts the exit of every live notification and returns how many.
    pub fn dismiss_all(&mut self) -> usize {
        let now = self.clock.now();
        let members: Vec<NotificationId> =
            self.registry.iter().flat_map(Container::members).collect();
        members
            .into_iter()
            .filter(|id| self.begin_exit(*id, ExitReason::Dismissed, now))
            .count()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Whether a reveal is waiting for the next frame.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        !self.pending_reveals.is_empty()
    }

    /// Number of notifications (including exiting ones) attached at `position`.
    #[must_use]
    pub fn occupancy(&self, position: Position) -> usize {
        self.registry.get(position).map_or(0, Container::len)
    }

    /// Members at `position` in visual order.
    #[must_use]
    pub fn members(&self, position: Position) -> Vec<NotificationId> {
        self.registry
            .get(position)
            .map(|container| container.members().collect())
            .unwrap_or_default()
    }

    /// Current phase, or `None` once the notification has been removed.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.notifications.get(&id).map(Notification::phase)
    }

    #[must_use]
    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.get(&id)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Positions that currently have a container.
    #[must_use]
    pub fn containers(&self) -> Vec<Position> {
        self.registry.positions().collect()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn reveal(&mut self, id: NotificationId, now: Instant) {
        let Some(notification) = self.notifications.get_mut(&id) else {
            return;
        };
        if !notification.lifecycle_mut().reveal() {
            return;
        }

        self.presenter.reveal(id, now);
        if notification.settings().auto_hide {
            let deadline = now + notification.settings().duration;
            notification.auto_hide_timer = Some(self.timers.schedule(deadline, Timer::AutoHide(id)));
        }
        self.log(DiagnosticEventKind::Revealed { id });
    }

    fn begin_exit(&mut self, id: NotificationId, reason: ExitReason, now: Instant) -> bool {
        let Some(notification) = self.notifications.get_mut(&id) else {
            return false;
        };
        if !notification.lifecycle_mut().begin_exit() {
            return false;
        }

        if let Some(timer) = notification.auto_hide_timer.take() {
            self.timers.cancel(timer);
        }
        notification.fallback_timer =
            Some(self.timers.schedule(now + EXIT_FALLBACK, Timer::ExitFallback(id)));
        self.presenter.conceal(id, now);
        self.log(DiagnosticEventKind::ExitRequested { id, reason });
        true
    }

    fn finish_removal(&mut self, id: NotificationId, cause: RemovalCause) -> bool {
        let Some(notification) = self.notifications.get_mut(&id) else {
            return false;
        };
        if !notification.lifecycle_mut().finish() {
            return false;
        }

        if let Some(timer) = notification.fallback_timer.take() {
            self.timers.cancel(timer);
        }
        let position = notification.position();
        self.notifications.remove(&id);
        self.presenter.unmount(id);
        if let Some(container) = self.registry.get_mut(position) {
            container.remove(id);
        }
        self.log(DiagnosticEventKind::Removed { id, cause });

        if self.registry.release(position) {
            self.presenter.remove_container(position);
            self.log(DiagnosticEventKind::ContainerReleased { position });
        }
        true
    }

    fn trigger_action(&mut self, id: NotificationId, index: usize, now: Instant) {
        let Some(notification) = self.notifications.get(&id) else {
            return;
        };
        if !notification.is_live() {
            return;
        }
        let settings = notification.settings();
        let Some(action) = settings.actions.get(index).cloned() else {
            return;
        };
        let close = action.closes(settings.close_on_action);

        action.trigger();
        self.log(DiagnosticEventKind::ActionTriggered { id, index });
        if close {
            self.begin_exit(id, ExitReason::Action, now);
        }
    }

    fn toggle_expanded(&mut self, id: NotificationId) {
        let Some(notification) = self.notifications.get_mut(&id) else {
            return;
        };
        if !notification.settings().expandable {
            return;
        }
        let clamp = if notification.toggle_expanded() {
            LineClamp::Unclamped
        } else {
            notification.settings().max_lines
        };
        self.presenter.set_line_clamp(id, clamp);
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

/// Builds the render description of a new notification.
fn describe(id: NotificationId, message: &str, settings: &Settings) -> ToastView {
    let kind_glyph = || Some(Glyph::Kind(settings.kind.clone()));
    let glyph = match &settings.icon {
        Icon::Hide => None,
        Icon::Show => kind_glyph(),
        Icon::Custom(payload) if payload.trim().is_empty() => kind_glyph(),
        Icon::Custom(payload) => Some(Glyph::Custom {
            payload: payload.clone(),
            label: None,
        }),
        Icon::Labeled { glyph, .. } if glyph.trim().is_empty() => kind_glyph(),
        Icon::Labeled { glyph, label } => Some(Glyph::Custom {
            payload: glyph.clone(),
            label: (!label.is_empty()).then(|| label.clone()),
        }),
    };

    ToastView {
        id,
        position: settings.position,
        kind: settings.kind.clone(),
        direction: settings.direction,
        glyph,
        spans: highlight(message, &settings.word_highlight),
        actions: settings
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| ActionButton {
                index,
                label: action.label().to_string(),
                style: action.style_tag().map(str::to_string),
            })
            .collect(),
        progress: settings.progress_duration(),
        clamp: settings.max_lines,
        expandable: settings.expandable,
        theme: ThemeTokens::resolve(settings.theme, &settings.custom_theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::error::Error;
    use crate::ui::notifications::clock::ManualClock;
    use crate::ui::notifications::options::{Action, Kind, ProgressBar, QueueStrategy};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateContainer(Position),
        RemoveContainer(Position),
        Mount(NotificationId, Placement),
        Reveal(NotificationId),
        Conceal(NotificationId),
        Clamp(NotificationId, LineClamp),
        Unmount(NotificationId),
    }

    #[derive(Default)]
    struct RecordingPresenter {
        calls: Vec<Call>,
        views: HashMap<NotificationId, ToastView>,
        outbox: Vec<Signal>,
    }

    impl RecordingPresenter {
        fn count(&self, wanted: &Call) -> usize {
            self.calls.iter().filter(|call| *call == wanted).count()
        }

        fn concealed(&self) -> Vec<NotificationId> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Conceal(id) => Some(*id),
                    _ => None,
                })
                .collect()
        }
    }

    impl Presenter for RecordingPresenter {
        fn create_container(&mut self, position: Position) {
            self.calls.push(Call::CreateContainer(position));
        }

        fn remove_container(&mut self, position: Position) {
            self.calls.push(Call::RemoveContainer(position));
        }

        fn mount(&mut self, view: ToastView, placement: Placement, _now: Instant) {
            self.calls.push(Call::Mount(view.id, placement));
            self.views.insert(view.id, view);
        }

        fn reveal(&mut self, id: NotificationId, _now: Instant) {
            self.calls.push(Call::Reveal(id));
        }

        fn conceal(&mut self, id: NotificationId, _now: Instant) {
            self.calls.push(Call::Conceal(id));
        }

        fn set_line_clamp(&mut self, id: NotificationId, clamp: LineClamp) {
            self.calls.push(Call::Clamp(id, clamp));
        }

        fn unmount(&mut self, id: NotificationId) {
            self.calls.push(Call::Unmount(id));
        }

        fn drain_signals(&mut self, _now: Instant) -> Vec<Signal> {
            std::mem::take(&mut self.outbox)
        }
    }

    #[derive(Default)]
    struct RecordingEffects {
        chimes: usize,
        vibrations: usize,
        audio_missing: bool,
        can_vibrate: bool,
    }

    impl AmbientEffects for RecordingEffects {
        fn chime(&mut self) -> crate::error::Result<()> {
            if self.audio_missing {
                return Err(Error::Audio("no output device".into()));
            }
            self.chimes += 1;
            Ok(())
        }

        fn supports_vibration(&self) -> bool {
            self.can_vibrate
        }

        fn vibrate(&mut self, duration: Duration) {
            assert_eq!(duration, Duration::from_millis(VIBRATION_MS));
            self.vibrations += 1;
        }
    }

    type TestEngine = NotificationEngine<RecordingPresenter, RecordingEffects>;

    fn engine() -> (TestEngine, ManualClock) {
        let clock = ManualClock::new();
        let engine =
            NotificationEngine::with_effects(RecordingPresenter::default(), RecordingEffects::default())
                .with_clock(clock.clone());
        (engine, clock)
    }

    fn at(position: Position) -> Options {
        Options::new().position(position)
    }

    /// Finishes every pending exit through the fallback timer.
    fn settle(engine: &mut TestEngine, clock: &ManualClock) {
        clock.advance(EXIT_FALLBACK);
        engine.tick();
    }

    #[test]
    fn display_creates_container_and_enters() {
        let (mut engine, _clock) = engine();
        let handle = engine.show("Hello");

        assert_eq!(engine.phase(handle.id()), Some(Phase::Entering));
        assert_eq!(engine.containers(), vec![Position::BottomRight]);
        assert_eq!(engine.occupancy(Position::BottomRight), 1);
        assert_eq!(
            engine.presenter().calls[..2],
            [
                Call::CreateContainer(Position::BottomRight),
                Call::Mount(handle.id(), Placement::Back),
            ]
        );
    }

    #[test]
    fn reveal_waits_for_next_frame() {
        let (mut engine, _clock) = engine();
        let first = engine.show("one").id();
        let second = engine.show("two").id();

        assert_eq!(engine.phase(first), Some(Phase::Entering));
        assert_eq!(engine.phase(second), Some(Phase::Entering));
        assert!(engine.has_pending_frame());

        engine.frame();
        assert_eq!(engine.phase(first), Some(Phase::Visible));
        assert_eq!(engine.phase(second), Some(Phase::Visible));
        assert!(!engine.has_pending_frame());
    }

    #[test]
    fn saved_notification_lives_for_its_duration_then_releases_container() {
        let (mut engine, clock) = engine();
        let id = engine
            .display(
                "Saved",
                Options::new()
                    .kind(Kind::Success)
                    .position(Position::BottomRight)
                    .duration(Duration::from_millis(2000))
                    .auto_hide(true),
            )
            .id();

        engine.frame();
        assert_eq!(engine.phase(id), Some(Phase::Visible));

        clock.advance(Duration::from_millis(1999));
        engine.tick();
        assert_eq!(engine.phase(id), Some(Phase::Visible));

        clock.advance(Duration::from_millis(1));
        engine.tick();
        assert_eq!(engine.phase(id), Some(Phase::Exiting));

        settle(&mut engine, &clock);
        assert_eq!(engine.phase(id), None);
        assert!(engine.containers().is_empty());
        assert!(!engine.has_notifications());
        assert_eq!(
            engine.presenter().calls.last(),
            Some(&Call::RemoveContainer(Position::BottomRight))
        );
    }

    #[test]
    fn animation_signal_wins_and_cancels_fallback() {
        let (mut engine, clock) = engine();
        let id = engine.show("Bye").id();
        engine.frame();
        assert!(engine.dismiss(id));

        engine.presenter_mut().outbox.push(Signal::AnimationFinished(id));
        engine.tick();
        assert_eq!(engine.phase(id), None);
        assert_eq!(engine.next_deadline(), None);

        settle(&mut engine, &clock);
        assert_eq!(engine.presenter().count(&Call::Unmount(id)), 1);
    }

    #[test]
    fn late_animation_signal_after_fallback_is_ignored() {
        let (mut engine, clock) = engine();
        let id = engine.show("Bye").id();
        engine.frame();
        engine.dismiss(id);
        settle(&mut engine, &clock);

        engine.handle(Signal::AnimationFinished(id));
        assert_eq!(engine.presenter().count(&Call::Unmount(id)), 1);
        assert_eq!(engine.presenter().count(&Call::RemoveContainer(Position::BottomRight)), 1);
    }

    #[test]
    fn auto_hide_racing_dismiss_removes_once() {
        let (mut engine, clock) = engine();
        let id = engine
            .display("Race", Options::new().duration(Duration::from_millis(100)))
            .id();
        engine.frame();

        clock.advance(Duration::from_millis(100));
        engine.tick();
        assert!(!engine.dismiss(id));

        engine.presenter_mut().outbox.push(Signal::AnimationFinished(id));
        engine.presenter_mut().outbox.push(Signal::AnimationFinished(id));
        engine.tick();
        settle(&mut engine, &clock);

        assert_eq!(engine.presenter().count(&Call::Conceal(id)), 1);
        assert_eq!(engine.presenter().count(&Call::Unmount(id)), 1);
    }

    #[test]
    fn dismiss_cancels_auto_hide_timer() {
        let (mut engine, clock) = engine();
        let id = engine.show("Sticky").id();
        engine.frame();
        engine.dismiss(id);

        assert_eq!(engine.next_deadline(), Some(clock.now() + EXIT_FALLBACK));
    }

    #[test]
    fn reveal_is_ignored_once_exiting() {
        let (mut engine, _clock) = engine();
        let id = engine.show("Quick").id();
        assert!(engine.dismiss(id));

        engine.frame();
        assert_eq!(engine.phase(id), Some(Phase::Exiting));
        assert_eq!(engine.presenter().count(&Call::Reveal(id)), 0);
    }

    #[test]
    fn stack_lets_occupancy_exceed_max_visible() {
        let (mut engine, _clock) = engine();
        for i in 0..4 {
            engine.display(
                format!("n{i}"),
                Options::new()
                    .queue_strategy(QueueStrategy::Stack)
                    .max_visible(2),
            );
            engine.frame();
        }

        assert_eq!(engine.occupancy(Position::BottomRight), 4);
        assert!(engine.presenter().concealed().is_empty());
    }

    #[test]
    fn replace_oldest_evicts_one_past_the_limit() {
        let (mut engine, clock) = engine();
        let options = || {
            at(Position::BottomLeft)
                .queue_strategy(QueueStrategy::ReplaceOldest)
                .max_visible(3)
        };
        let ids: Vec<_> = (0..3)
            .map(|i| {
                let id = engine.display(format!("n{i}"), options()).id();
                engine.frame();
                id
            })
            .collect();
        assert!(engine.presenter().concealed().is_empty());

        let newest = engine.display("n3", options()).id();
        assert_eq!(engine.presenter().concealed(), vec![ids[0]]);
        assert_eq!(engine.phase(newest), Some(Phase::Entering));

        settle(&mut engine, &clock);
        assert!(engine.occupancy(Position::BottomLeft) <= 3);
    }

    #[test]
    fn replace_oldest_on_top_anchor_evicts_first_arrival() {
        let (mut engine, _clock) = engine();
        let options = || {
            at(Position::TopRight)
                .queue_strategy(QueueStrategy::ReplaceOldest)
                .max_visible(2)
        };
        let first = engine.display("first", options()).id();
        let second = engine.display("second", options()).id();
        assert_eq!(engine.members(Position::TopRight), vec![second, first]);

        engine.display("third", options());
        assert_eq!(engine.presenter().concealed(), vec![first]);
    }

    #[test]
    fn replace_all_evicts_every_existing_member_but_not_the_new_one() {
        let (mut engine, _clock) = engine();
        let existing: Vec<_> = (0..3).map(|i| engine.show(format!("n{i}")).id()).collect();
        engine.frame();

        let newest = engine
            .display("fresh", Options::new().queue_strategy(QueueStrategy::ReplaceAll))
            .id();

        let mut concealed = engine.presenter().concealed();
        concealed.sort();
        assert_eq!(concealed, existing);
        assert_eq!(engine.phase(newest), Some(Phase::Entering));
    }

    #[test]
    fn collapse_evicts_exactly_the_front() {
        let (mut engine, _clock) = engine();
        let first = engine.show("a").id();
        engine.show("b");

        engine.display(
            "c",
            Options::new()
                .queue_strategy(QueueStrategy::Collapse)
                .max_visible(5),
        );
        assert_eq!(engine.presenter().concealed(), vec![first]);
    }

    #[test]
    fn collapse_with_exiting_front_leaves_other_members() {
        let (mut engine, _clock) = engine();
        let collapse = || Options::new().queue_strategy(QueueStrategy::Collapse);
        let a = engine.show("a").id();
        let b = engine.show("b").id();
        engine.dismiss(a);

        engine.display("c", collapse());

        assert_eq!(engine.phase(a), Some(Phase::Exiting));
        assert_eq!(engine.phase(b), Some(Phase::Entering));
        assert_eq!(engine.presenter().concealed(), vec![a]);
        assert_eq!(engine.occupancy(Position::BottomRight), 3);
    }

    #[test]
    fn replace_oldest_counts_exiting_members_toward_limit() {
        let (mut engine, _clock) = engine();
        let replace = || {
            Options::new()
                .queue_strategy(QueueStrategy::ReplaceOldest)
                .max_visible(2)
        };
        let a = engine.display("a", replace()).id();
        let b = engine.display("b", replace()).id();
        engine.dismiss(b);

        let c = engine.display("c", replace()).id();

        assert_eq!(engine.phase(a), Some(Phase::Exiting));
        assert_eq!(engine.phase(c), Some(Phase::Entering));
        assert_eq!(engine.occupancy(Position::BottomRight), 3);
    }

    #[test]
    fn container_exists_exactly_while_occupied() {
        let (mut engine, clock) = engine();
        let positions = [Position::TopLeft, Position::BottomCenter, Position::TopLeft];
        let ids: Vec<_> = positions
            .iter()
            .map(|position| engine.display("x", at(*position)).id())
            .collect();
        engine.frame();

        for (id, position) in ids.iter().zip(positions) {
            engine.dismiss(*id);
            settle(&mut engine, &clock);
            for anchor in Position::ALL {
                assert_eq!(
                    engine.containers().contains(&anchor),
                    engine.occupancy(anchor) >= 1,
                    "container/occupancy mismatch at {anchor} after removing from {position}"
                );
            }
        }
        assert!(engine.containers().is_empty());
        assert_eq!(engine.presenter().count(&Call::CreateContainer(Position::TopLeft)), 1);
    }

    #[test]
    fn top_anchors_mount_at_front() {
        let (mut engine, _clock) = engine();
        let id = engine.display("up", at(Position::TopCenter)).id();
        assert!(engine
            .presenter()
            .calls
            .contains(&Call::Mount(id, Placement::Front)));
    }

    #[test]
    fn action_without_override_follows_close_on_action() {
        let (mut engine, _clock) = engine();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let action = Action::new("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let open = engine
            .display(
                "Deleted",
                Options::new().action(action.clone()).close_on_action(false),
            )
            .id();
        let closing = engine
            .display("Deleted", Options::new().action(action).close_on_action(true))
            .id();
        engine.frame();

        engine.handle(Signal::ActionTriggered { id: open, index: 0 });
        engine.handle(Signal::ActionTriggered { id: open, index: 0 });
        engine.handle(Signal::ActionTriggered { id: closing, index: 0 });

        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(engine.phase(open), Some(Phase::Visible));
        assert_eq!(engine.phase(closing), Some(Phase::Exiting));
    }

    #[test]
    fn action_override_beats_notification_default() {
        let (mut engine, _clock) = engine();
        let id = engine
            .display(
                "Update ready",
                Options::new()
                    .action(Action::labeled("Later").close_on_trigger(false))
                    .close_on_action(true),
            )
            .id();
        engine.frame();

        engine.handle(Signal::ActionTriggered { id, index: 0 });
        assert_eq!(engine.phase(id), Some(Phase::Visible));
    }

    #[test]
    fn actions_on_exiting_or_unknown_indices_are_ignored() {
        let (mut engine, _clock) = engine();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let id = engine
            .display(
                "Offer",
                Options::new().action(Action::new("Open", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
            )
            .id();

        engine.handle(Signal::ActionTriggered { id, index: 3 });
        engine.dismiss(id);
        engine.handle(Signal::ActionTriggered { id, index: 0 });
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn expand_toggle_flips_clamp_only_when_expandable() {
        let (mut engine, _clock) = engine();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let expandable = engine
            .display(
                "A very long message",
                Options::new()
                    .expandable(true)
                    .max_lines(LineClamp::Lines(2))
                    .action(Action::new("Open", move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    })),
            )
            .id();
        let fixed = engine.show("Not expandable").id();
        engine.frame();

        engine.handle(Signal::ExpandToggled(expandable));
        engine.handle(Signal::ExpandToggled(expandable));
        engine.handle(Signal::ExpandToggled(fixed));

        let clamps: Vec<_> = engine
            .presenter()
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Clamp(..)))
            .cloned()
            .collect();
        assert_eq!(
            clamps,
            vec![
                Call::Clamp(expandable, LineClamp::Unclamped),
                Call::Clamp(expandable, LineClamp::Lines(2)),
            ]
        );
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dismiss_all_exits_every_live_notification() {
        let (mut engine, clock) = engine();
        engine.display("a", at(Position::TopLeft));
        engine.display("b", at(Position::BottomRight));
        let gone = engine.show("c").id();
        engine.dismiss(gone);

        assert_eq!(engine.dismiss_all(), 2);
        settle(&mut engine, &clock);
        assert!(!engine.has_notifications());
        assert!(engine.containers().is_empty());
    }

    #[test]
    fn handle_dismiss_matches_engine_dismiss() {
        let (mut engine, _clock) = engine();
        let handle = engine.show("Bye");
        assert!(handle.dismiss(&mut engine));
        assert!(!handle.dismiss(&mut engine));
    }

    #[test]
    fn view_carries_highlight_progress_and_glyph() {
        let (mut engine, _clock) = engine();
        let id = engine
            .display(
                "Big sale today",
                Options::new()
                    .word_highlight("sale")
                    .progress_bar(ProgressBar::Show)
                    .duration(Duration::from_millis(3000)),
            )
            .id();
        let hidden = engine
            .display("No icon", Options::new().icon(Icon::Hide))
            .id();

        let view = &engine.presenter().views[&id];
        let emphasized: Vec<_> = view
            .spans
            .iter()
            .filter(|span| span.emphasized)
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["sale"]);
        assert_eq!(view.progress, Some(Duration::from_millis(3000)));
        assert_eq!(view.glyph, Some(Glyph::Kind(Kind::Info)));
        assert_eq!(engine.presenter().views[&hidden].glyph, None);
    }

    #[test]
    fn with_defaults_applies_to_requests_without_options() {
        let clock = ManualClock::new();
        let mut engine = NotificationEngine::new(RecordingPresenter::default())
            .with_clock(clock)
            .with_defaults(Options::new().position(Position::TopLeft).max_visible(1));

        engine.show("first");
        assert_eq!(engine.containers(), vec![Position::TopLeft]);
        assert_eq!(engine.defaults().max_visible, 1);
    }

    #[test]
    fn effects_fire_at_attach_time() {
        let (mut engine, _clock) = engine();
        engine.display("Ding", Options::new().sound_effect(true));
        engine.show("Quiet");
        assert_eq!(engine.effects().chimes, 1);
    }

    #[test]
    fn unavailable_effects_are_skipped_and_logged() {
        let clock = ManualClock::new();
        let effects = RecordingEffects {
            audio_missing: true,
            ..RecordingEffects::default()
        };
        let mut engine =
            NotificationEngine::with_effects(RecordingPresenter::default(), effects).with_clock(clock);
        let mut collector = DiagnosticsCollector::default();
        engine.set_diagnostics(collector.handle());

        let id = engine
            .display("Buzz", Options::new().sound_effect(true).vibrate(true))
            .id();
        assert_eq!(engine.phase(id), Some(Phase::Entering));

        collector.process_pending();
        let skipped: Vec<_> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::EffectSkipped { effect, .. } => Some(*effect),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec![Effect::Sound, Effect::Vibration]);
    }

    #[test]
    fn supported_vibration_is_requested() {
        let effects = RecordingEffects {
            can_vibrate: true,
            ..RecordingEffects::default()
        };
        let mut engine = NotificationEngine::with_effects(RecordingPresenter::default(), effects)
            .with_clock(ManualClock::new());
        engine.display("Buzz", Options::new().vibrate(true));
        assert_eq!(engine.effects().vibrations, 1);
    }

    #[test]
    fn lifecycle_is_logged_in_order() {
        let (mut engine, clock) = engine();
        let mut collector = DiagnosticsCollector::default();
        engine.set_diagnostics(collector.handle());

        let id = engine.show("Logged").id();
        engine.frame();
        engine.dismiss(id);
        settle(&mut engine, &clock);
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::ContainerCreated {
                    position: Position::BottomRight
                },
                DiagnosticEventKind::Displayed {
                    id,
                    position: Position::BottomRight,
                    kind: Kind::Info
                },
                DiagnosticEventKind::Revealed { id },
                DiagnosticEventKind::ExitRequested {
                    id,
                    reason: ExitReason::Dismissed
                },
                DiagnosticEventKind::Removed {
                    id,
                    cause: RemovalCause::FallbackTimeout
                },
                DiagnosticEventKind::ContainerReleased {
                    position: Position::BottomRight
                },
            ]
        );
    }
}
