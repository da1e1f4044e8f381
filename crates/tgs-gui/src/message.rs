//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background results flow through [`Message`];
//! the `update` function is the only place state changes.

use iced::widget::text_editor;

use tgs_lang::{OptionKind, TargetLanguage};
use tgs_persistence::InputKind;

/// An entry in the language selector.
///
/// Wraps the static catalog descriptor so the pick list has something
/// cloneable with a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChoice(pub &'static TargetLanguage);

impl std::fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.display_name)
    }
}

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Sample input
    // =========================================================================
    /// Edit or cursor movement in the sample editor.
    EditorAction(text_editor::Action),

    /// The sample name field changed.
    SampleNameChanged(String),

    /// A kind was picked in the input-kind selector.
    InputKindSelected(InputKind),

    // =========================================================================
    // Options panel
    // =========================================================================
    /// A language was picked in the language selector.
    LanguageSelected(LanguageChoice),

    /// A boolean option was toggled.
    OptionToggled(&'static str, bool),

    /// An enumerated option value was picked.
    OptionPicked(&'static str, &'static str),

    /// A free-text option was edited.
    OptionTextChanged(&'static str, String),

    /// The options tab changed.
    OptionsTabSelected(OptionKind),

    /// Show/hide the options panel.
    ToggleOptionsPanel,

    // =========================================================================
    // Background task results
    // =========================================================================
    /// A generation run finished.
    ///
    /// Carries the sequence number of the request that produced it so a
    /// superseded run can be recognized and discarded.
    GenerationFinished {
        seq: u64,
        result: Result<Vec<String>, String>,
    },
}
