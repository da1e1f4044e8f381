//! Process-wide read-only language registry.
//!
//! Built once at startup and handed by reference to anything that needs
//! the catalog. Registration order is stable, so language selectors and
//! generated option panels do not reorder between renders.

use crate::catalog::{self, TargetLanguage};
use crate::option::OptionDefinition;

/// Registry of all target languages, in registration order.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<&'static TargetLanguage>,
}

impl LanguageRegistry {
    /// Registry with all built-in languages.
    pub fn builtin() -> Self {
        Self {
            languages: vec![
                &catalog::RUST,
                &catalog::TYPESCRIPT,
                &catalog::PYTHON,
                &catalog::GO,
            ],
        }
    }

    /// Look up a language by identifier.
    pub fn get(&self, id: &str) -> Option<&'static TargetLanguage> {
        self.languages.iter().copied().find(|lang| lang.id == id)
    }

    /// The first registered language, used as the fallback when a
    /// persisted identifier no longer exists in the catalog.
    pub fn first(&self) -> &'static TargetLanguage {
        self.languages[0]
    }

    /// Ordered option definitions for a language.
    pub fn definitions_for(&self, id: &str) -> Option<&'static [OptionDefinition]> {
        self.get(id).map(|lang| lang.options)
    }

    /// All languages, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TargetLanguage> + '_ {
        self.languages.iter().copied()
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the registry is empty. Never true for [`Self::builtin`].
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_stable() {
        let registry = LanguageRegistry::builtin();
        let ids: Vec<_> = registry.iter().map(|l| l.id).collect();
        assert_eq!(ids, ["rust", "typescript", "python", "go"]);
        assert_eq!(registry.first().id, "rust");
    }

    #[test]
    fn lookup_by_id() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.get("go").unwrap().display_name, "Go");
        assert!(registry.get("cobol").is_none());
        assert!(registry.definitions_for("python").is_some());
    }
}
