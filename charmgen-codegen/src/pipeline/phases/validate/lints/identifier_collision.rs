//! Lint for option keys that derive the same names.

use std::collections::HashMap;

use charmgen_ir::COMMON_PREFIX;
use charmgen_manifest::Charmcraft;

use super::super::Lint;
use crate::{
    naming::{env_var_name, identifier},
    pipeline::Diagnostic,
};

/// Lint that errors when two option keys map to one identifier or one
/// environment variable.
pub struct IdentifierCollisionLint;

impl Lint for IdentifierCollisionLint {
    fn name(&self) -> &'static str {
        "identifier-collision"
    }

    fn description(&self) -> &'static str {
        "Detect option keys deriving the same identifier or environment variable"
    }

    fn check(&self, charmcraft: &Charmcraft, diagnostics: &mut Vec<Diagnostic>) {
        let mut identifiers: HashMap<String, &str> = HashMap::new();
        let mut env_vars: HashMap<String, &str> = HashMap::new();

        // Sorted keys: the first key in order owns the name
        for key in charmcraft.option_keys() {
            let ident = identifier(key);
            if let Some(first) = identifiers.get(&ident) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "option '{}' derives identifier '{}' (conflicts with '{}')",
                            key, ident, first
                        ),
                    )
                    .at(format!("config.options.{}", key)),
                );
            } else {
                identifiers.insert(ident, key);
            }

            let env_var = env_var_name(key, COMMON_PREFIX);
            if let Some(first) = env_vars.get(&env_var) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "option '{}' derives environment variable '{}' (conflicts with '{}')",
                            key, env_var, first
                        ),
                    )
                    .at(format!("config.options.{}", key)),
                );
            } else {
                env_vars.insert(env_var, key);
            }
        }
    }
}
