//! Aggregate configuration model.
//!
//! This module defines the model handed to renderers. It is built once per
//! generation run by the assembler in `charmgen-codegen` and never mutated
//! afterwards.
//!
//! # Architecture
//!
//! ```text
//! charmcraft.yaml → Charmcraft (decoding) → ConfigIR (assembly) → Generator (rendering)
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{IntegrationKind, TypeDescriptor};

/// Prefix shared by every application environment variable.
pub const COMMON_PREFIX: &str = "APP_";

/// Configuration IR - the single artifact consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigIR {
    /// Name of the generated package.
    pub package_name: String,
    /// Prefix of all option environment variables.
    pub common_prefix: String,
    /// Option bindings, sorted ascending by identifier.
    pub options: Vec<OptionBinding>,
    /// Recognized integrations keyed by their charmcraft.yaml key.
    pub integrations: BTreeMap<String, Integration>,
    /// True when at least one integration is database-like.
    pub has_database_integrations: bool,
}

/// A configuration option lowered to a source-level binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionBinding {
    /// Capitalized identifier (e.g., "UserDefinedStr").
    pub identifier: String,
    /// Target type of the binding.
    pub ty: TypeDescriptor,
    /// Environment variable the value is read from (e.g., "APP_USER_DEFINED_STR").
    pub env_var: String,
}

/// A recognized integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Integration {
    /// Key in the `requires` section.
    pub name: String,
    /// Catalog entry the key resolved to.
    pub kind: IntegrationKind,
    /// Canonical display name (e.g., "MySQL").
    pub display_name: String,
    /// Declared wire interface.
    pub interface: String,
    /// Whether the charm can run without this integration.
    pub optional: bool,
    /// Whether the integration is a database-like backend.
    pub is_database: bool,
    /// Environment variable prefix, set only for database-like integrations.
    pub database_prefix: Option<String>,
}

impl Integration {
    /// Build an integration from its catalog entry.
    pub fn new(
        name: impl Into<String>,
        kind: IntegrationKind,
        interface: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            display_name: kind.display_name().to_string(),
            interface: interface.into(),
            optional,
            is_database: kind.is_database(),
            database_prefix: kind.database_prefix().map(str::to_string),
        }
    }
}
