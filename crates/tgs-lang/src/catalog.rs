//! Built-in target languages.
//!
//! Each language is a static descriptor: an identifier used in generator
//! requests, a display name for the selector, a syntax token for output
//! highlighting, and the ordered renderer options the generator accepts.

use crate::option::{OptionDefinition, OptionKind, OptionType};

/// A target language the generator can emit.
#[derive(Debug, PartialEq, Eq)]
pub struct TargetLanguage {
    /// Stable identifier (persisted, passed to the generator).
    pub id: &'static str,
    /// Name shown in the language selector.
    pub display_name: &'static str,
    /// Token understood by the output highlighter.
    pub syntax_token: &'static str,
    /// Renderer options, in registration order.
    pub options: &'static [OptionDefinition],
}

impl TargetLanguage {
    /// Look up one of this language's option definitions by name.
    pub fn option(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|def| def.name == name)
    }
}

pub static RUST: TargetLanguage = TargetLanguage {
    id: "rust",
    display_name: "Rust",
    syntax_token: "rust",
    options: &[
        OptionDefinition {
            name: "derive-debug",
            kind: OptionKind::Primary,
            description: "Derive Debug",
            ty: OptionType::Boolean { default: true },
        },
        OptionDefinition {
            name: "derive-clone",
            kind: OptionKind::Primary,
            description: "Derive Clone",
            ty: OptionType::Boolean { default: true },
        },
        OptionDefinition {
            name: "visibility",
            kind: OptionKind::Primary,
            description: "Field and struct visibility",
            ty: OptionType::Enumerated {
                default: "public",
                legal_values: &["public", "crate", "private"],
            },
        },
        OptionDefinition {
            name: "all-properties-optional",
            kind: OptionKind::Primary,
            description: "Make all fields optional",
            ty: OptionType::Boolean { default: false },
        },
        OptionDefinition {
            name: "density",
            kind: OptionKind::Secondary,
            description: "Blank lines between fields",
            ty: OptionType::Enumerated {
                default: "normal",
                legal_values: &["normal", "dense"],
            },
        },
    ],
};

pub static TYPESCRIPT: TargetLanguage = TargetLanguage {
    id: "typescript",
    display_name: "TypeScript",
    syntax_token: "ts",
    options: &[
        OptionDefinition {
            name: "declaration-style",
            kind: OptionKind::Primary,
            description: "Emit interfaces or type aliases",
            ty: OptionType::Enumerated {
                default: "interface",
                legal_values: &["interface", "type"],
            },
        },
        OptionDefinition {
            name: "all-properties-optional",
            kind: OptionKind::Primary,
            description: "Make all properties optional",
            ty: OptionType::Boolean { default: false },
        },
        OptionDefinition {
            name: "readonly-properties",
            kind: OptionKind::Primary,
            description: "Mark properties readonly",
            ty: OptionType::Boolean { default: false },
        },
        OptionDefinition {
            name: "semicolons",
            kind: OptionKind::Secondary,
            description: "Terminate members with semicolons",
            ty: OptionType::Boolean { default: true },
        },
    ],
};

pub static PYTHON: TargetLanguage = TargetLanguage {
    id: "python",
    display_name: "Python",
    syntax_token: "py",
    options: &[
        OptionDefinition {
            name: "nice-property-names",
            kind: OptionKind::Primary,
            description: "Convert property names to snake_case",
            ty: OptionType::Boolean { default: true },
        },
        OptionDefinition {
            name: "all-properties-optional",
            kind: OptionKind::Primary,
            description: "Make all fields optional",
            ty: OptionType::Boolean { default: false },
        },
        OptionDefinition {
            name: "python-version",
            kind: OptionKind::Secondary,
            description: "Minimum Python version",
            ty: OptionType::Enumerated {
                default: "3.11",
                legal_values: &["3.9", "3.11"],
            },
        },
    ],
};

pub static GO: TargetLanguage = TargetLanguage {
    id: "go",
    display_name: "Go",
    syntax_token: "go",
    options: &[
        OptionDefinition {
            name: "package",
            kind: OptionKind::Primary,
            description: "Package name",
            ty: OptionType::FreeText { default: "main" },
        },
        OptionDefinition {
            name: "json-tags",
            kind: OptionKind::Primary,
            description: "Emit json struct tags",
            ty: OptionType::Boolean { default: true },
        },
        OptionDefinition {
            name: "int-type",
            kind: OptionKind::Secondary,
            description: "Integer type for whole numbers",
            ty: OptionType::Enumerated {
                default: "int64",
                legal_values: &["int64", "int"],
            },
        },
    ],
};
