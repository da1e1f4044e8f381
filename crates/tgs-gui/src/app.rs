//! Main application module for Typegen Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State -> Message -> Update -> View.
//!
//! Every edit follows the same path: build the next snapshot with a
//! `with_*` transform, apply it (persist + rederive computed state), and
//! kick off a fresh generation run. Runs carry a sequence number so a
//! completion that was superseded while it was in flight is discarded.

use iced::{Element, Task, Theme};

use tgs_persistence::SnapshotStore;

use crate::message::Message;
use crate::service::convert::run_generation;
use crate::state::AppState;
use crate::theme::app_theme;
use crate::view;

/// Main application struct.
///
/// Root of the Iced application; holds the application state and
/// implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the first
    /// generation run, so the restored session shows output immediately.
    pub fn new() -> (Self, Task<Message>) {
        let store = SnapshotStore::at_default_location();

        let mut app = Self {
            state: AppState::from_store(store),
        };
        let startup = app.regenerate();
        (app, startup)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Sample input
            // =================================================================
            Message::EditorAction(action) => {
                let is_edit = action.is_edit();
                self.state.editor.perform(action);
                if is_edit {
                    let snapshot = self
                        .state
                        .snapshot
                        .with_sample_text(self.state.editor.text());
                    self.state.apply_snapshot(snapshot);
                    self.regenerate()
                } else {
                    Task::none()
                }
            }

            Message::SampleNameChanged(name) => {
                let snapshot = self.state.snapshot.with_sample_name(name);
                self.state.apply_snapshot(snapshot);
                self.regenerate()
            }

            Message::InputKindSelected(kind) => {
                if !kind.enabled() {
                    tracing::debug!("input kind {kind} is not available yet");
                    return Task::none();
                }
                if kind == self.state.computed.input_kind {
                    return Task::none();
                }
                let snapshot = self.state.snapshot.with_input_kind(kind);
                self.state.apply_snapshot(snapshot);
                self.regenerate()
            }

            // =================================================================
            // Options panel
            // =================================================================
            Message::LanguageSelected(choice) => {
                if choice.0.id == self.state.computed.language.id {
                    return Task::none();
                }
                let snapshot = self.state.snapshot.with_language(choice.0);
                self.state.apply_snapshot(snapshot);
                self.regenerate()
            }

            Message::OptionToggled(name, value) => self.apply_option(name, value.into()),

            Message::OptionPicked(name, value) => self.apply_option(name, value.into()),

            Message::OptionTextChanged(name, value) => self.apply_option(name, value.into()),

            Message::OptionsTabSelected(kind) => {
                self.state.options_tab = kind;
                Task::none()
            }

            Message::ToggleOptionsPanel => {
                self.state.show_options = !self.state.show_options;
                Task::none()
            }

            // =================================================================
            // Background task results
            // =================================================================
            Message::GenerationFinished { seq, result } => {
                if !self.state.is_current(seq) {
                    tracing::debug!(seq, "discarding superseded generation result");
                    return Task::none();
                }
                match result {
                    Ok(lines) => self.state.publish_output(lines),
                    Err(e) => {
                        tracing::warn!("generation failed: {e}");
                        self.state.clear_output();
                    }
                }
                Task::none()
            }
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        format!("{} - Typegen Studio", self.state.computed.sample_name)
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        app_theme()
    }

    /// Apply one option edit and start a fresh generation run.
    fn apply_option(&mut self, name: &'static str, value: tgs_lang::OptionValue) -> Task<Message> {
        let snapshot = self.state.snapshot.with_option(name, value);
        self.state.apply_snapshot(snapshot);
        self.regenerate()
    }

    /// Start a generation run for the current state.
    ///
    /// Issues the next sequence number first, so any run still in flight
    /// becomes stale the moment this one is requested.
    fn regenerate(&mut self) -> Task<Message> {
        let seq = self.state.next_seq();
        let request = self.state.computed.request();
        Task::perform(run_generation(request), move |result| {
            Message::GenerationFinished { seq, result }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::LanguageChoice;
    use tgs_lang::{OptionValue, catalog};
    use tgs_persistence::InputKind;

    fn app() -> App {
        App {
            state: AppState::from_store(SnapshotStore::in_memory()),
        }
    }

    #[test]
    fn option_toggle_updates_snapshot_and_computed_state() {
        let mut app = app();
        let _ = app.update(Message::OptionToggled("derive-debug", false));

        assert_eq!(
            app.state.snapshot.options.get("derive-debug"),
            Some(&OptionValue::Bool(false))
        );
        assert_eq!(
            app.state.computed.options.get("derive-debug"),
            Some(&OptionValue::Bool(false))
        );
    }

    #[test]
    fn language_switch_resets_options_to_new_defaults() {
        let mut app = app();
        let _ = app.update(Message::OptionToggled("derive-debug", false));
        let _ = app.update(Message::LanguageSelected(LanguageChoice(
            &catalog::TYPESCRIPT,
        )));

        assert_eq!(app.state.computed.language.id, "typescript");
        assert!(app.state.computed.options.get("derive-debug").is_none());
        assert_eq!(
            app.state.computed.options,
            tgs_lang::OptionValues::defaults_for(&catalog::TYPESCRIPT)
        );
    }

    #[test]
    fn superseded_generation_results_are_discarded() {
        let mut app = app();
        let first = app.state.next_seq();
        let second = app.state.next_seq();

        let _ = app.update(Message::GenerationFinished {
            seq: first,
            result: Ok(vec!["stale".to_owned()]),
        });
        assert!(app.state.output_lines.is_none());

        let _ = app.update(Message::GenerationFinished {
            seq: second,
            result: Ok(vec!["fresh".to_owned()]),
        });
        assert_eq!(app.state.output_lines.as_deref(), Some(&["fresh".to_owned()][..]));
    }

    #[test]
    fn failed_generation_clears_previous_output() {
        let mut app = app();
        let seq = app.state.next_seq();
        let _ = app.update(Message::GenerationFinished {
            seq,
            result: Ok(vec!["pub struct Welcome {}".to_owned()]),
        });
        assert!(app.state.output_lines.is_some());

        let seq = app.state.next_seq();
        let _ = app.update(Message::GenerationFinished {
            seq,
            result: Err("expected value at line 1".to_owned()),
        });
        assert!(app.state.output_lines.is_none());
    }

    #[test]
    fn unavailable_input_kinds_are_ignored() {
        let mut app = app();
        let _ = app.update(Message::InputKindSelected(InputKind::Postman));
        assert_eq!(app.state.computed.input_kind, InputKind::Json);
    }

    #[test]
    fn cold_start_request_generates_real_output() {
        let app = app();
        let request = app.state.computed.request();
        let result = tgs_generate::generate(&request).unwrap();
        let source = result.lines.join("\n");
        assert!(source.contains("pub struct Welcome {"));
        assert!(source.contains("Artist"));
    }

    #[test]
    fn title_tracks_the_sample_name() {
        let mut app = app();
        let _ = app.update(Message::SampleNameChanged("Album".to_owned()));
        assert_eq!(app.title(), "Album - Typegen Studio");
    }
}
