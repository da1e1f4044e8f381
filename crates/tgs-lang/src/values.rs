//! Current option values for the selected language.
//!
//! A plain ordered array of `(name, value)` pairs rebuilt wholesale on
//! every change. Updates are copy-on-write: holders of a previous
//! [`OptionValues`] never observe a mutation, so change detection by
//! comparing snapshots stays sound. Switching language discards the map
//! entirely and reinitializes from the new language's defaults; option
//! identity includes the language, so values are never carried across
//! even when names collide.

use std::collections::BTreeMap;

use crate::catalog::TargetLanguage;
use crate::option::OptionValue;

/// Option values for one language, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionValues {
    entries: Vec<(&'static str, OptionValue)>,
}

impl OptionValues {
    /// Every option of `language` populated with its declared default.
    pub fn defaults_for(language: &'static TargetLanguage) -> Self {
        Self {
            entries: language
                .options
                .iter()
                .map(|def| (def.name, def.default_value()))
                .collect(),
        }
    }

    /// The current value for `name`, if that option exists.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, value)| value)
    }

    /// A new map with exactly the entry for `name` replaced.
    ///
    /// The input map is untouched. A name not present in the map (i.e.
    /// not in the current language's catalog) leaves the result equal to
    /// the input.
    #[must_use]
    pub fn with_value(&self, name: &str, value: OptionValue) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(entry_name, entry_value)| {
                    if *entry_name == name {
                        (*entry_name, value.clone())
                    } else {
                        (*entry_name, entry_value.clone())
                    }
                })
                .collect(),
        }
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// Flatten to the name-to-value map shape the generator call expects.
    pub fn flatten(&self) -> BTreeMap<String, OptionValue> {
        self.entries
            .iter()
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use proptest::prelude::*;

    #[test]
    fn defaults_cover_exactly_the_catalog() {
        let values = OptionValues::defaults_for(&catalog::TYPESCRIPT);
        assert_eq!(values.len(), catalog::TYPESCRIPT.options.len());
        for def in catalog::TYPESCRIPT.options {
            assert_eq!(values.get(def.name), Some(&def.default_value()));
        }
    }

    #[test]
    fn with_value_replaces_exactly_one_entry() {
        let before = OptionValues::defaults_for(&catalog::RUST);
        let after = before.with_value("derive-debug", OptionValue::Bool(false));

        assert_eq!(after.get("derive-debug"), Some(&OptionValue::Bool(false)));
        for (name, value) in before.iter() {
            if name != "derive-debug" {
                assert_eq!(after.get(name), Some(value));
            }
        }
        // The original map is untouched.
        assert_eq!(before.get("derive-debug"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn with_value_ignores_unknown_names() {
        let before = OptionValues::defaults_for(&catalog::GO);
        let after = before.with_value("visibility", OptionValue::Text("crate".into()));
        assert_eq!(after, before);
    }

    #[test]
    fn flatten_keeps_every_entry() {
        let values = OptionValues::defaults_for(&catalog::GO);
        let flat = values.flatten();
        assert_eq!(flat.len(), values.len());
        assert_eq!(flat.get("package"), Some(&OptionValue::Text("main".into())));
    }

    proptest! {
        // Any single-entry update leaves all other entries bit-for-bit
        // unchanged, for any option of any built-in language.
        #[test]
        fn single_update_preserves_other_entries(
            lang_idx in 0usize..4,
            opt_idx in 0usize..8,
            flag: bool,
            text in "[a-z]{0,12}",
        ) {
            let languages = [
                &catalog::RUST,
                &catalog::TYPESCRIPT,
                &catalog::PYTHON,
                &catalog::GO,
            ];
            let language = languages[lang_idx];
            let def = &language.options[opt_idx % language.options.len()];
            let value = match def.ty {
                crate::option::OptionType::Boolean { .. } => OptionValue::Bool(flag),
                _ => OptionValue::Text(text.clone()),
            };

            let before = OptionValues::defaults_for(language);
            let after = before.with_value(def.name, value.clone());

            prop_assert_eq!(after.get(def.name), Some(&value));
            for (name, old) in before.iter() {
                if name != def.name {
                    prop_assert_eq!(after.get(name), Some(old));
                }
            }
        }
    }
}
