//! Manifest types and parsing for charmcraft.yaml files.

mod file;
mod option;
mod parse;
mod requirement;
mod validate;

use std::collections::HashMap;

pub use file::{CHARMCRAFT_FILE_NAME, CharmcraftFile};
pub use option::{ConfigOption, OptionType};
pub use parse::parse_charmcraft;
pub use requirement::Requirement;
use serde::Deserialize;

/// The subset of charmcraft.yaml that drives code generation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Charmcraft {
    /// Charm configuration (`config.options`)
    #[serde(default)]
    pub config: ConfigSection,

    /// Integrations the charm requires, keyed by endpoint name
    #[serde(default)]
    pub requires: HashMap<String, Requirement>,
}

/// The `config` section of charmcraft.yaml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigSection {
    /// Declared options, keyed by option name
    #[serde(default)]
    pub options: HashMap<String, ConfigOption>,
}

impl Charmcraft {
    /// Option keys in sorted order.
    pub fn option_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.config.options.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Integration keys in sorted order.
    pub fn requirement_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.requires.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
