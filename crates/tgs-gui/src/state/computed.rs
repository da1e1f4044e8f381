//! Derived state - the persisted snapshot reconciled with the catalog.
//!
//! The snapshot stores only primitive identifiers and values; the rich
//! option definitions live in the process-wide registry. `compute` joins
//! the two into the working state the views and the generation call use.
//! It is a pure function of its inputs and is recomputed on every
//! snapshot change, never stored.

use tgs_generate::GenerateRequest;
use tgs_lang::{LanguageRegistry, OptionValues, TargetLanguage};
use tgs_persistence::{InputKind, Snapshot};

/// Working state derived from the persisted snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedState {
    /// Resolved target language (never dangling; falls back to the first
    /// catalog entry when the persisted id is unknown).
    pub language: &'static TargetLanguage,
    /// Live option values, one per catalog definition.
    pub options: OptionValues,
    pub sample_name: String,
    pub sample_text: String,
    pub input_kind: InputKind,
}

impl ComputedState {
    /// Reconcile a snapshot against the live catalog.
    ///
    /// Persisted option names absent from the catalog are ignored; catalog
    /// options absent from the snapshot (or persisted with a value that no
    /// longer conforms to the declared type) take their declared default.
    pub fn compute(snapshot: &Snapshot, registry: &LanguageRegistry) -> Self {
        let language = registry.get(&snapshot.language).unwrap_or_else(|| {
            tracing::debug!(
                "persisted language {:?} not in catalog, falling back to {:?}",
                snapshot.language,
                registry.first().id
            );
            registry.first()
        });

        let mut options = OptionValues::defaults_for(language);
        for definition in language.options {
            if let Some(value) = snapshot.options.get(definition.name) {
                if definition.accepts(value) {
                    options = options.with_value(definition.name, value.clone());
                } else {
                    tracing::debug!(
                        "persisted value for {:?} no longer conforms, using default",
                        definition.name
                    );
                }
            }
        }

        Self {
            language,
            options,
            sample_name: snapshot.sample_name.clone(),
            sample_text: snapshot.sample_text.clone(),
            input_kind: snapshot.input_kind,
        }
    }

    /// Assemble the generator call from this state, flattening the option
    /// map to the name-to-value shape the call contract requires.
    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            language: self.language.id.to_owned(),
            sample_name: self.sample_name.clone(),
            sample_text: self.sample_text.clone(),
            options: self.options.flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgs_lang::{OptionValue, catalog};

    fn registry() -> LanguageRegistry {
        LanguageRegistry::builtin()
    }

    #[test]
    fn compute_is_pure() {
        let snapshot = Snapshot::default().with_option("derive-debug", false.into());
        let registry = registry();
        assert_eq!(
            ComputedState::compute(&snapshot, &registry),
            ComputedState::compute(&snapshot, &registry)
        );
    }

    #[test]
    fn unknown_language_falls_back_to_first_catalog_entry() {
        let mut snapshot = Snapshot::default();
        snapshot.language = "brainfuck".to_owned();

        let registry = registry();
        let computed = ComputedState::compute(&snapshot, &registry);
        assert_eq!(computed.language.id, registry.first().id);
    }

    #[test]
    fn stale_persisted_option_names_are_ignored() {
        // A Rust snapshot carrying a leftover TypeScript option name.
        let snapshot = Snapshot::default().with_option("semicolons", false.into());

        let computed = ComputedState::compute(&snapshot, &registry());
        assert_eq!(computed.language.id, "rust");
        assert!(computed.options.get("semicolons").is_none());
    }

    #[test]
    fn missing_options_take_catalog_defaults() {
        let mut snapshot = Snapshot::default();
        snapshot.options.clear();

        let computed = ComputedState::compute(&snapshot, &registry());
        assert_eq!(
            computed.options,
            OptionValues::defaults_for(&catalog::RUST)
        );
    }

    #[test]
    fn mistyped_persisted_values_fall_back_to_defaults() {
        let snapshot = Snapshot::default()
            .with_option("derive-debug", "yes please".into())
            .with_option("visibility", "invisible".into());

        let computed = ComputedState::compute(&snapshot, &registry());
        assert_eq!(computed.options.get("derive-debug"), Some(&true.into()));
        assert_eq!(
            computed.options.get("visibility"),
            Some(&OptionValue::Text("public".into()))
        );
    }

    #[test]
    fn persisted_edits_survive_reconciliation() {
        let snapshot = Snapshot::default()
            .with_option("derive-debug", false.into())
            .with_option("visibility", "crate".into());

        let computed = ComputedState::compute(&snapshot, &registry());
        assert_eq!(computed.options.get("derive-debug"), Some(&false.into()));
        assert_eq!(
            computed.options.get("visibility"),
            Some(&OptionValue::Text("crate".into()))
        );
    }

    #[test]
    fn language_round_trip_resets_edits_to_defaults() {
        let registry = registry();
        let edited = Snapshot::default().with_option("derive-debug", false.into());
        let round_tripped = edited
            .with_language(&catalog::TYPESCRIPT)
            .with_language(&catalog::RUST);

        let computed = ComputedState::compute(&round_tripped, &registry);
        assert_eq!(
            computed.options,
            OptionValues::defaults_for(&catalog::RUST)
        );
    }

    #[test]
    fn request_flattens_options_by_name() {
        let snapshot = Snapshot::default().with_option("visibility", "crate".into());
        let computed = ComputedState::compute(&snapshot, &registry());
        let request = computed.request();

        assert_eq!(request.language, "rust");
        assert_eq!(
            request.options.get("visibility"),
            Some(&OptionValue::Text("crate".into()))
        );
        assert_eq!(request.options.len(), catalog::RUST.options.len());
    }
}
