//! Per-language source emitters.
//!
//! Each emitter renders a [`TypePlan`](crate::plan::TypePlan) into lines
//! of source text, honoring the flattened renderer options it was invoked
//! with. Unknown options are ignored; missing options take the defaults
//! declared in the language catalog.

pub mod go;
pub mod python;
pub mod rust;
pub mod typescript;

use std::collections::BTreeMap;

use tgs_lang::OptionValue;

/// Read-only view over the flattened renderer options.
pub(crate) struct OptionsView<'a> {
    options: &'a BTreeMap<String, OptionValue>,
}

impl<'a> OptionsView<'a> {
    pub(crate) fn new(options: &'a BTreeMap<String, OptionValue>) -> Self {
        Self { options }
    }

    /// Boolean option, falling back to `default` when absent or mistyped.
    pub(crate) fn flag(&self, name: &str, default: bool) -> bool {
        self.options
            .get(name)
            .and_then(OptionValue::as_bool)
            .unwrap_or(default)
    }

    /// String option, falling back to `default` when absent or mistyped.
    pub(crate) fn text(&self, name: &str, default: &'a str) -> &'a str {
        self.options
            .get(name)
            .and_then(OptionValue::as_str)
            .unwrap_or(default)
    }
}
