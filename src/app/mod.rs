// SPDX-License-Identifier: MPL-2.0
//! Demo application driving the notification engine from an iced window.
//!
//! The `App` owns one [`NotificationEngine`] rendered through a
//! [`ToastStage`], forwards toast signals back into it, and advances it on the
//! frame subscription while anything is on screen.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, paths};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::ui::notifications::{
    self, Action, Chime, Kind, LineClamp, NotificationEngine, Options, Position, ProgressBar,
    QueueStrategy, ToastStage,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const DIAGNOSTICS_FILE: &str = "diagnostics.json";

/// Root iced application state.
pub struct App {
    engine: NotificationEngine<ToastStage, Chime>,
    diagnostics: DiagnosticsCollector,
    position: Position,
    strategy: QueueStrategy,
    sound: bool,
    shown: u64,
    /// Incremented by the Undo action callback.
    undo_count: Arc<AtomicUsize>,
    last_export: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("strategy", &self.strategy)
            .field("shown", &self.shown)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; flags are small enough to clone.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let capacity = config
            .diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default();

        let mut app = Self::with_config(config.defaults, capacity, flags);
        if let Some(key) = config_warning {
            app.engine.display(
                format!("Could not read settings ({key}); using defaults"),
                Options::new().kind(Kind::Warning),
            );
        }
        (app, Task::none())
    }

    fn with_config(defaults: Options, capacity: BufferCapacity, flags: Flags) -> Self {
        let diagnostics = DiagnosticsCollector::new(capacity);
        let mut engine = NotificationEngine::with_effects(ToastStage::new(), Chime::new())
            .with_defaults(defaults);
        engine.set_diagnostics(diagnostics.handle());

        let position = flags.position.unwrap_or(engine.defaults().position);
        let strategy = flags.strategy.unwrap_or(engine.defaults().queue_strategy);
        let sound = engine.defaults().sound_effect;

        Self {
            engine,
            diagnostics,
            position,
            strategy,
            sound,
            shown: 0,
            undo_count: Arc::new(AtomicUsize::new(0)),
            last_export: None,
        }
    }

    fn title(&self) -> String {
        String::from("Snackbar")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let active = self.engine.has_notifications() || self.engine.has_pending_frame();
        notifications::subscription(active).map(Message::Tick)
    }

    /// Options shared by every request from the control panel.
    fn base_options(&self) -> Options {
        Options::new()
            .position(self.position)
            .queue_strategy(self.strategy)
            .sound_effect(self.sound)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                self.shown += 1;
                let text = format!("{} notification #{}", kind.as_str(), self.shown);
                self.engine.display(text, self.base_options().kind(kind));
            }
            Message::ShowWithActions => {
                self.shown += 1;
                let undo_count = Arc::clone(&self.undo_count);
                let options = self
                    .base_options()
                    .auto_hide(false)
                    .action(
                        Action::new("Undo", move || {
                            undo_count.fetch_add(1, Ordering::Relaxed);
                        })
                        .style("primary"),
                    )
                    .action(Action::labeled("Keep").close_on_trigger(false));
                self.engine
                    .display(format!("Item #{} removed", self.shown), options);
            }
            Message::ShowHighlighted => {
                self.shown += 1;
                let options = self
                    .base_options()
                    .kind(Kind::Success)
                    .word_highlight(vec!["sale", "today"])
                    .progress_bar(ProgressBar::Show)
                    .max_lines(LineClamp::Lines(1))
                    .expandable(true);
                self.engine.display(
                    "The summer sale ends today. Every item in the catalogue is discounted \
                     until midnight, and shipping is free on orders placed before the sale closes.",
                    options,
                );
            }
            Message::SelectPosition(position) => self.position = position,
            Message::SelectStrategy(strategy) => self.strategy = strategy,
            Message::ToggleSound(enabled) => self.sound = enabled,
            Message::DismissAll => {
                self.engine.dismiss_all();
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
            Message::Toast(signal) => self.engine.handle(signal),
            Message::Tick(_) => {
                self.engine.frame();
                self.engine.tick();
            }
        }
        // Displays and dismissals log outside of ticks too.
        self.diagnostics.process_pending();
        Task::none()
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let result = self
            .diagnostics
            .export_json()
            .map_err(|e| e.to_string())
            .and_then(|json| {
                let mut path = paths::get_app_config_dir()
                    .ok_or_else(|| "no config directory".to_string())?;
                fs::create_dir_all(&path).map_err(|e| e.to_string())?;
                path.push(DIAGNOSTICS_FILE);
                fs::write(&path, json).map_err(|e| e.to_string())?;
                Ok(path.display().to_string())
            });

        match result {
            Ok(path) => {
                self.engine.display(
                    "Diagnostics exported",
                    Options::new().kind(Kind::Success).position(self.position),
                );
                self.last_export = Some(path);
            }
            Err(err) => {
                self.engine.display(
                    format!("Diagnostics export failed: {err}"),
                    Options::new().kind(Kind::Error).position(self.position),
                );
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            stage: self.engine.presenter(),
            position: self.position,
            strategy: self.strategy,
            sound: self.sound,
            on_screen: Position::ALL
                .iter()
                .map(|position| self.engine.occupancy(*position))
                .sum(),
            undo_count: self.undo_count.load(Ordering::Relaxed),
            last_export: self.last_export.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DIAGNOSTICS_CHANNEL_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY};
    use crate::diagnostics::DiagnosticEventKind;
    use crate::ui::notifications::{Phase, Signal};
    use std::time::Instant;

    fn silent_app(flags: Flags) -> App {
        App::with_config(
            Options::new().sound_effect(false),
            BufferCapacity::default(),
            flags,
        )
    }

    #[test]
    fn flags_override_configured_defaults() {
        let app = silent_app(Flags {
            position: Some(Position::TopLeft),
            strategy: Some(QueueStrategy::Collapse),
        });
        assert_eq!(app.position, Position::TopLeft);
        assert_eq!(app.strategy, QueueStrategy::Collapse);
        assert!(!app.sound);
    }

    #[test]
    fn show_places_notification_at_selected_position() {
        let mut app = silent_app(Flags::default());
        let _ = app.update(Message::SelectPosition(Position::TopCenter));
        let _ = app.update(Message::Show(Kind::Info));

        assert_eq!(app.engine.occupancy(Position::TopCenter), 1);
        assert_eq!(app.shown, 1);
    }

    #[test]
    fn tick_reveals_and_records_diagnostics() {
        let mut app = silent_app(Flags::default());
        let _ = app.update(Message::Show(Kind::Success));
        let _ = app.update(Message::Tick(Instant::now()));

        assert!(!app.engine.has_pending_frame());
        assert!(!app.diagnostics.is_empty());
    }

    #[test]
    fn display_burst_between_ticks_keeps_every_event() {
        let mut app = App::with_config(
            Options::new().sound_effect(false),
            BufferCapacity::new(MAX_DIAGNOSTICS_BUFFER_CAPACITY),
            Flags {
                position: None,
                strategy: Some(QueueStrategy::ReplaceAll),
            },
        );
        for _ in 0..DIAGNOSTICS_CHANNEL_CAPACITY {
            let _ = app.update(Message::Show(Kind::Info));
        }

        let count = |wanted: fn(&DiagnosticEventKind) -> bool| {
            app.diagnostics.iter().filter(|event| wanted(&event.kind)).count()
        };
        assert_eq!(
            count(|kind| matches!(kind, DiagnosticEventKind::Displayed { .. })),
            DIAGNOSTICS_CHANNEL_CAPACITY
        );
        assert_eq!(
            count(|kind| matches!(kind, DiagnosticEventKind::ExitRequested { .. })),
            DIAGNOSTICS_CHANNEL_CAPACITY - 1
        );
    }

    #[test]
    fn dismiss_all_begins_exit_for_every_notification() {
        let mut app = silent_app(Flags::default());
        let _ = app.update(Message::Show(Kind::Info));
        let _ = app.update(Message::Show(Kind::Warning));
        let _ = app.update(Message::Tick(Instant::now()));
        let _ = app.update(Message::DismissAll);

        let members = app.engine.members(app.position);
        assert_eq!(members.len(), 2);
        assert!(members
            .iter()
            .all(|id| app.engine.phase(*id) == Some(Phase::Exiting)));
    }

    #[test]
    fn undo_action_runs_callback() {
        let mut app = silent_app(Flags::default());
        let _ = app.update(Message::ShowWithActions);
        let _ = app.update(Message::Tick(Instant::now()));

        let id = app.engine.members(app.position)[0];
        let _ = app.update(Message::Toast(Signal::ActionTriggered { id, index: 0 }));

        assert_eq!(app.undo_count.load(Ordering::Relaxed), 1);
    }
}
