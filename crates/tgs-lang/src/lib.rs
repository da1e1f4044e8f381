//! Target-language catalog and renderer-option state.
//!
//! The catalog is a process-wide read-only registry built at startup: each
//! [`TargetLanguage`] carries an ordered list of [`OptionDefinition`]s that
//! the generator accepts for that language. Nothing in here is persisted;
//! persisted state references languages and options by name only and is
//! reconciled against this catalog by the application layer.

pub mod catalog;
pub mod option;
pub mod registry;
pub mod values;

pub use catalog::TargetLanguage;
pub use option::{OptionDefinition, OptionKind, OptionType, OptionValue};
pub use registry::LanguageRegistry;
pub use values::OptionValues;
