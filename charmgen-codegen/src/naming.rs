//! Name derivation for config options.
//!
//! Both functions are pure string transforms over a schema key. They do not
//! detect collisions: `foo-bar` and `foo--bar` both map to `FooBar`. Callers
//! that need unique names run the `identifier-collision` lint first (see
//! [`crate::pipeline::phases::IdentifierCollisionLint`]).

/// Derive a source identifier from a schema key.
///
/// The key is split on `-` and the first character of every non-empty
/// segment is upper-cased (e.g., "user-defined-str" -> "UserDefinedStr").
/// Other characters, underscores included, are kept as they are.
pub fn identifier(key: &str) -> String {
    key.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Derive an environment variable name from a schema key.
///
/// e.g., ("user-defined-str", "APP_") -> "APP_USER_DEFINED_STR"
pub fn env_var_name(key: &str, prefix: &str) -> String {
    format!("{}{}", prefix, key.replace('-', "_").to_uppercase())
}
