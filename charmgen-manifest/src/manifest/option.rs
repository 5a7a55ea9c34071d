//! Configuration option declarations.

use std::fmt;

use serde::Deserialize;

/// A single entry of `config.options`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigOption {
    /// Declared option type
    #[serde(rename = "type")]
    pub option_type: OptionType,

    /// Default value. `None` when the key is missing or explicitly null;
    /// `false`, `0` and `""` are present defaults.
    #[serde(default)]
    pub default: Option<serde_yaml::Value>,

    /// Description for documentation
    #[serde(default)]
    pub description: Option<String>,
}

impl ConfigOption {
    /// Returns true if the option declares a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Declared type of a configuration option.
///
/// Unknown spellings are preserved so the generator can report them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OptionType {
    /// `bool` or `boolean`
    Boolean,
    Float,
    Int,
    Secret,
    String,
    Unrecognized(String),
}

impl OptionType {
    /// Get the type name as written in charmcraft.yaml.
    pub fn as_str(&self) -> &str {
        match self {
            OptionType::Boolean => "boolean",
            OptionType::Float => "float",
            OptionType::Int => "int",
            OptionType::Secret => "secret",
            OptionType::String => "string",
            OptionType::Unrecognized(s) => s,
        }
    }
}

impl From<String> for OptionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "bool" | "boolean" => OptionType::Boolean,
            "float" => OptionType::Float,
            "int" => OptionType::Int,
            "secret" => OptionType::Secret,
            "string" => OptionType::String,
            _ => OptionType::Unrecognized(s),
        }
    }
}

impl From<&str> for OptionType {
    fn from(s: &str) -> Self {
        OptionType::from(s.to_string())
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
