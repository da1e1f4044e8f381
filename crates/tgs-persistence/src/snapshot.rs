//! The serializable session snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tgs_lang::{LanguageRegistry, OptionValue, OptionValues, TargetLanguage};

/// Sample document shown on first launch, before any storage exists.
pub const DEFAULT_SAMPLE: &str = r#"{
  "name": "How To Live Forever",
  "artist": {
    "name": "Michael Forrest",
    "founded": 1982,
    "members": [
      "Michael Forrest"
    ]
  },
  "tracks": [
    {
      "name": "Get Connected",
      "duration": 208
    }
  ]
}
"#;

/// Kind of input sample.
///
/// Only [`InputKind::Json`] is wired up; the other kinds appear in the
/// selector as disabled placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Json,
    MultipleJson,
    Schema,
    TypeScript,
    Postman,
}

impl InputKind {
    /// Display label for the input-kind selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::MultipleJson => "Multiple JSON",
            Self::Schema => "JSON Schema",
            Self::TypeScript => "TypeScript",
            Self::Postman => "Postman v2.1",
        }
    }

    /// Whether this kind is actually supported.
    pub fn enabled(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// All kinds, in display order.
    pub const ALL: [InputKind; 5] = [
        Self::Json,
        Self::MultipleJson,
        Self::Schema,
        Self::TypeScript,
        Self::Postman,
    ];
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full persisted session state.
///
/// Every user-facing edit produces a new snapshot through one of the pure
/// `with_*` transforms; the previous value is never mutated in place.
/// Unknown or missing fields deserialize to defaults, so older snapshots
/// keep loading after the format gains fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Selected language identifier.
    pub language: String,
    /// Option values keyed by option name. Reconciled against the live
    /// catalog on load; stale names are ignored there, not here.
    pub options: BTreeMap<String, OptionValue>,
    /// Name of the input sample.
    pub sample_name: String,
    /// The sample text itself.
    pub sample_text: String,
    /// Kind of the input sample.
    pub input_kind: InputKind,
    /// When this snapshot was produced.
    pub saved_at: DateTime<Utc>,
}

impl Default for Snapshot {
    fn default() -> Self {
        let registry = LanguageRegistry::builtin();
        let language = registry.first();
        Self {
            language: language.id.to_owned(),
            options: OptionValues::defaults_for(language).flatten(),
            sample_name: "Welcome".to_owned(),
            sample_text: DEFAULT_SAMPLE.to_owned(),
            input_kind: InputKind::default(),
            saved_at: Utc::now(),
        }
    }
}

impl Snapshot {
    /// Copy with new sample text.
    #[must_use]
    pub fn with_sample_text(&self, text: String) -> Self {
        Self {
            sample_text: text,
            saved_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Copy with a new sample name.
    #[must_use]
    pub fn with_sample_name(&self, name: String) -> Self {
        Self {
            sample_name: name,
            saved_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Copy with a new input kind.
    #[must_use]
    pub fn with_input_kind(&self, kind: InputKind) -> Self {
        Self {
            input_kind: kind,
            saved_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Copy with a newly selected language.
    ///
    /// The entire option map is discarded and rebuilt from the new
    /// language's defaults; values never carry across languages, even
    /// when option names collide.
    #[must_use]
    pub fn with_language(&self, language: &'static TargetLanguage) -> Self {
        Self {
            language: language.id.to_owned(),
            options: OptionValues::defaults_for(language).flatten(),
            saved_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Copy with one option value replaced.
    #[must_use]
    pub fn with_option(&self, name: &str, value: OptionValue) -> Self {
        let mut options = self.options.clone();
        options.insert(name.to_owned(), value);
        Self {
            options,
            saved_at: Utc::now(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgs_lang::catalog;

    #[test]
    fn default_snapshot_uses_first_language_and_its_defaults() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.language, "rust");
        assert_eq!(snapshot.options.get("derive-debug"), Some(&true.into()));
        assert_eq!(snapshot.input_kind, InputKind::Json);
        assert!(snapshot.sample_text.contains("How To Live Forever"));
    }

    #[test]
    fn transforms_do_not_mutate_the_original() {
        let before = Snapshot::default();
        let after = before.with_sample_text("{}".to_owned());
        assert_eq!(before.sample_text, DEFAULT_SAMPLE);
        assert_eq!(after.sample_text, "{}");
        assert_eq!(after.language, before.language);
    }

    #[test]
    fn language_switch_rebuilds_options_from_defaults() {
        let edited = Snapshot::default().with_option("derive-debug", false.into());
        let switched = edited.with_language(&catalog::TYPESCRIPT);

        assert_eq!(switched.language, "typescript");
        // No Rust keys survive the switch.
        assert!(!switched.options.contains_key("derive-debug"));
        assert_eq!(switched.options.get("semicolons"), Some(&true.into()));

        // Round trip back: the edit is gone, defaults are restored.
        let back = switched.with_language(&catalog::RUST);
        assert_eq!(back.options.get("derive-debug"), Some(&true.into()));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = Snapshot::default()
            .with_sample_name("Album".to_owned())
            .with_option("visibility", "crate".into());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn unknown_fields_and_missing_fields_deserialize_gracefully() {
        let back: Snapshot =
            serde_json::from_str(r#"{"language": "go", "future_field": 1}"#).unwrap();
        assert_eq!(back.language, "go");
        assert_eq!(back.sample_name, "Welcome");
    }

    #[test]
    fn input_kinds_only_json_enabled() {
        assert!(InputKind::Json.enabled());
        for kind in InputKind::ALL.iter().skip(1) {
            assert!(!kind.enabled(), "{kind} should be a placeholder");
        }
    }
}
