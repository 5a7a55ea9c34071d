//! Lint for config options without a description.

use charmgen_manifest::Charmcraft;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about options missing descriptions.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about config options without a description"
    }

    fn check(&self, charmcraft: &Charmcraft, diagnostics: &mut Vec<Diagnostic>) {
        for key in charmcraft.option_keys() {
            let option = &charmcraft.config.options[key];
            let missing = option
                .description
                .as_deref()
                .is_none_or(|d| d.trim().is_empty());

            if missing {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("option '{}' has no description", key))
                        .at(format!("config.options.{}", key)),
                );
            }
        }
    }
}
