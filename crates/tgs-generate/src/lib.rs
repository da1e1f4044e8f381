//! JSON type inference and code emission.
//!
//! The call contract is deliberately narrow: a target language identifier,
//! one named JSON sample, and a flattened map of renderer options go in;
//! lines of generated source come out. Callers treat this crate as a black
//! box and must tolerate arbitrary failure — a malformed sample is an
//! error here, not a crash.

pub mod emit;
pub mod infer;
pub mod naming;
pub mod plan;

use std::collections::BTreeMap;

use thiserror::Error;

use tgs_lang::OptionValue;

use crate::plan::TypePlan;

/// A generation request: the generator call shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Target language identifier (e.g. `"typescript"`).
    pub language: String,
    /// Name of the input sample; seeds the root type name.
    pub sample_name: String,
    /// The JSON sample text.
    pub sample_text: String,
    /// Flattened renderer options (option name to raw value).
    pub options: BTreeMap<String, OptionValue>,
}

/// Generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub lines: Vec<String>,
}

/// Generation failure.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unknown target language: {0}")]
    UnknownLanguage(String),

    #[error("sample is not valid JSON")]
    InvalidSample(#[from] serde_json::Error),
}

/// Generate type definitions for a request.
pub fn generate(request: &GenerateRequest) -> Result<GeneratedSource, GenerateError> {
    let emitter = match request.language.as_str() {
        "rust" => emit::rust::emit,
        "typescript" => emit::typescript::emit,
        "python" => emit::python::emit,
        "go" => emit::go::emit,
        other => return Err(GenerateError::UnknownLanguage(other.to_owned())),
    };

    let value: serde_json::Value = serde_json::from_str(&request.sample_text)?;
    let shape = infer::infer(&value);
    let plan = TypePlan::build(&request.sample_name, &shape);

    let lines = emitter(&plan, &request.options);
    tracing::debug!(
        language = request.language,
        classes = plan.classes.len(),
        lines = lines.len(),
        "generated type definitions"
    );

    Ok(GeneratedSource { lines })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(language: &str, text: &str) -> GenerateRequest {
        GenerateRequest {
            language: language.to_owned(),
            sample_name: "Welcome".to_owned(),
            sample_text: text.to_owned(),
            options: BTreeMap::new(),
        }
    }

    #[test]
    fn generates_for_every_cataloged_language() {
        let registry = tgs_lang::LanguageRegistry::builtin();
        for language in registry.iter() {
            let result = generate(&request(language.id, r#"{"x": 1}"#)).unwrap();
            assert!(!result.lines.is_empty(), "no output for {}", language.id);
        }
    }

    #[test]
    fn integer_field_in_each_idiom() {
        let cases = [
            ("rust", "pub x: i64,"),
            ("typescript", "x: number;"),
            ("python", "x: int"),
            ("go", "X int64"),
        ];
        for (language, expected) in cases {
            let result = generate(&request(language, r#"{"x": 1}"#)).unwrap();
            let source = result.lines.join("\n");
            assert!(source.contains(expected), "{language}: {source}");
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = generate(&request("cobol", "{}")).unwrap_err();
        assert!(matches!(err, GenerateError::UnknownLanguage(_)));
    }

    #[test]
    fn malformed_sample_is_an_error_not_a_panic() {
        let err = generate(&request("rust", r#"{"x": "#)).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidSample(_)));
    }

    #[test]
    fn default_options_match_catalog_defaults() {
        // An empty option map and the catalog defaults must agree.
        let registry = tgs_lang::LanguageRegistry::builtin();
        for language in registry.iter() {
            let defaults = tgs_lang::OptionValues::defaults_for(language).flatten();
            let with_defaults = generate(&GenerateRequest {
                options: defaults,
                ..request(language.id, r#"{"a": [1, 2], "b": {"c": true}}"#)
            })
            .unwrap();
            let bare = generate(&request(language.id, r#"{"a": [1, 2], "b": {"c": true}}"#))
                .unwrap();
            assert_eq!(with_defaults, bare, "{}", language.id);
        }
    }
}
