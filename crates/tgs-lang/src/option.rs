//! Renderer option definitions and values.
//!
//! An option's identity is `(language, name)`: definitions are owned by a
//! [`TargetLanguage`](crate::TargetLanguage) and are never created or
//! mutated at runtime. The declared value type is a tagged variant, so the
//! UI picks a control by matching on [`OptionType`] instead of probing a
//! value at runtime.

use serde::{Deserialize, Serialize};

/// Which options tab a definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionKind {
    /// Shown on the main language tab.
    #[default]
    Primary,
    /// Shown on the secondary ("Other") tab.
    Secondary,
}

impl OptionKind {
    /// Display label for the options tab.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Primary => "Language",
            Self::Secondary => "Other",
        }
    }

    /// Both tabs, in display order.
    pub const ALL: [OptionKind; 2] = [Self::Primary, Self::Secondary];
}

/// Declared value type of an option, with its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// On/off toggle.
    Boolean { default: bool },
    /// One of a fixed set of legal string values.
    Enumerated {
        default: &'static str,
        legal_values: &'static [&'static str],
    },
    /// Free-form text.
    FreeText { default: &'static str },
}

/// A current or persisted value for one option.
///
/// Serialized untagged so the persisted snapshot reads as a plain
/// name-to-raw-value map, which is also the call shape the generator
/// expects for its flattened renderer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl OptionValue {
    /// The boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// The string payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(s) => Some(s.as_str()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A single named, typed configuration knob accepted by the generator
/// for one target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Option name, as passed to the generator (e.g. `"just-types"`).
    pub name: &'static str,
    /// Which options tab the control appears on.
    pub kind: OptionKind,
    /// Human-readable description, used as the control label.
    pub description: &'static str,
    /// Declared value type and default.
    pub ty: OptionType,
}

impl OptionDefinition {
    /// The declared default as a value.
    pub fn default_value(&self) -> OptionValue {
        match self.ty {
            OptionType::Boolean { default } => OptionValue::Bool(default),
            OptionType::Enumerated { default, .. } | OptionType::FreeText { default } => {
                OptionValue::Text(default.to_owned())
            }
        }
    }

    /// Whether `value` conforms to this definition's declared type.
    ///
    /// Enumerated options additionally require the value to be one of the
    /// legal values. Used when reconciling persisted values against the
    /// live catalog: a non-conforming value falls back to the default.
    pub fn accepts(&self, value: &OptionValue) -> bool {
        match (&self.ty, value) {
            (OptionType::Boolean { .. }, OptionValue::Bool(_)) => true,
            (OptionType::Enumerated { legal_values, .. }, OptionValue::Text(s)) => {
                legal_values.contains(&s.as_str())
            }
            (OptionType::FreeText { .. }, OptionValue::Text(_)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENSITY: OptionDefinition = OptionDefinition {
        name: "density",
        kind: OptionKind::Secondary,
        description: "Field density",
        ty: OptionType::Enumerated {
            default: "normal",
            legal_values: &["normal", "dense"],
        },
    };

    #[test]
    fn default_value_matches_declared_type() {
        assert_eq!(DENSITY.default_value(), OptionValue::Text("normal".into()));
        assert!(DENSITY.accepts(&DENSITY.default_value()));
    }

    #[test]
    fn accepts_rejects_wrong_type_and_illegal_values() {
        assert!(DENSITY.accepts(&OptionValue::Text("dense".into())));
        assert!(!DENSITY.accepts(&OptionValue::Text("compact".into())));
        assert!(!DENSITY.accepts(&OptionValue::Bool(true)));
    }

    #[test]
    fn option_value_serializes_untagged() {
        let json = serde_json::to_string(&OptionValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
        let json = serde_json::to_string(&OptionValue::Text("public".into())).unwrap();
        assert_eq!(json, "\"public\"");

        let back: OptionValue = serde_json::from_str("false").unwrap();
        assert_eq!(back, OptionValue::Bool(false));
    }
}
