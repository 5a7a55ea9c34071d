//! Classification of `requires` entries against the integration catalog.
//!
//! The catalog is closed: only the keys of [`IntegrationKind`] are
//! recognized. Classification looks at the key alone. The declared interface
//! is carried into the model but never consulted.

use charmgen_ir::{Integration, IntegrationKind};
use charmgen_manifest::Requirement;
use serde::Serialize;

/// Result of classifying a key outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedIntegration {
    pub key: String,
}

impl std::fmt::Display for UnrecognizedIntegration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "integration '{}' is not in the catalog", self.key)
    }
}

/// Classify a single `requires` entry.
pub fn classify(
    key: &str,
    requirement: &Requirement,
) -> Result<Integration, UnrecognizedIntegration> {
    let kind = IntegrationKind::from_key(key).ok_or_else(|| UnrecognizedIntegration {
        key: key.to_string(),
    })?;

    Ok(Integration::new(
        key,
        kind,
        requirement.interface.as_str(),
        requirement.optional,
    ))
}

/// Find the catalog entry an interface name refers to, if any.
///
/// Used only for diagnostics: `redis_client` and `redis` both point at
/// [`IntegrationKind::Redis`].
pub fn kind_for_interface(interface: &str) -> Option<IntegrationKind> {
    IntegrationKind::ALL.into_iter().find(|kind| {
        let service = kind.as_str();
        interface
            .strip_prefix(service)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('_'))
    })
}
