//! Integration declarations from the `requires` section.

use serde::Deserialize;

/// A single entry of `requires`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Requirement {
    /// Wire interface name (e.g., "mysql_client")
    pub interface: String,

    /// Whether the charm can run without this integration
    #[serde(default)]
    pub optional: bool,

    /// Maximum number of related applications
    #[serde(default)]
    pub limit: Option<u32>,
}
