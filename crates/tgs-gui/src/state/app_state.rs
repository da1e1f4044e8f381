//! Application-level state.
//!
//! Root of all state. The persisted snapshot is the source of truth for
//! everything the user edits; `computed` is rederived from it after every
//! change; editor contents mirror the snapshot for the text widgets.

use iced::widget::text_editor;

use tgs_lang::{LanguageRegistry, OptionKind};
use tgs_persistence::{Snapshot, SnapshotStore};

use super::ComputedState;

/// Top-level application state.
pub struct AppState {
    /// Read-only language catalog, built once at startup.
    pub registry: LanguageRegistry,
    /// Durable storage for the snapshot.
    pub store: SnapshotStore,
    /// Persisted session state (written back on every edit).
    pub snapshot: Snapshot,
    /// Snapshot reconciled with the catalog.
    pub computed: ComputedState,

    /// Sample editor contents (mirrors `snapshot.sample_text`).
    pub editor: text_editor::Content,
    /// Generated output, shown read-only with highlighting.
    pub output: text_editor::Content,
    /// The published conversion result; `None` until the first success
    /// or after a failed generation.
    pub output_lines: Option<Vec<String>>,

    /// Active options tab.
    pub options_tab: OptionKind,
    /// Whether the options panel is shown.
    pub show_options: bool,

    /// Sequence number of the most recently issued generation request.
    /// Completions carrying an older number are stale and discarded.
    pub latest_seq: u64,
}

impl AppState {
    /// Build state from a store, loading the stored snapshot (or the
    /// default one when nothing usable is stored).
    pub fn from_store(store: SnapshotStore) -> Self {
        let registry = LanguageRegistry::builtin();
        let snapshot = store.load();
        let computed = ComputedState::compute(&snapshot, &registry);
        let editor = text_editor::Content::with_text(&snapshot.sample_text);

        Self {
            registry,
            store,
            snapshot,
            computed,
            editor,
            output: text_editor::Content::new(),
            output_lines: None,
            options_tab: OptionKind::Primary,
            show_options: true,
            latest_seq: 0,
        }
    }

    /// Replace the snapshot, persist it, and rederive computed state.
    ///
    /// Storage failure is swallowed by the store (it degrades to
    /// in-memory-only); the new snapshot stays live either way.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.store.save(&snapshot);
        self.computed = ComputedState::compute(&snapshot, &self.registry);
        self.snapshot = snapshot;
    }

    /// Issue the next generation sequence number.
    pub fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Whether a finished generation with this sequence number is still
    /// current, i.e. no newer request has been issued since.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Publish a successful conversion result.
    pub fn publish_output(&mut self, lines: Vec<String>) {
        self.output = text_editor::Content::with_text(&lines.join("\n"));
        self.output_lines = Some(lines);
    }

    /// Publish an absent result (generation failed).
    pub fn clear_output(&mut self) {
        self.output = text_editor::Content::new();
        self.output_lines = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgs_persistence::InputKind;

    fn state() -> AppState {
        AppState::from_store(SnapshotStore::in_memory())
    }

    #[test]
    fn fresh_state_has_the_canned_sample_and_first_language() {
        let state = state();
        assert_eq!(state.computed.language.id, "rust");
        assert_eq!(state.snapshot.sample_name, "Welcome");
        assert!(state.snapshot.sample_text.contains("How To Live Forever"));
        assert_eq!(state.snapshot.input_kind, InputKind::Json);
        assert!(state.output_lines.is_none());
    }

    #[test]
    fn apply_snapshot_rederives_computed_state() {
        let mut state = state();
        let snapshot = state.snapshot.with_sample_name("Album".to_owned());
        state.apply_snapshot(snapshot);
        assert_eq!(state.computed.sample_name, "Album");
    }

    #[test]
    fn sequence_numbers_supersede_older_requests() {
        let mut state = state();
        let a = state.next_seq();
        let b = state.next_seq();
        assert!(!state.is_current(a));
        assert!(state.is_current(b));
    }
}
