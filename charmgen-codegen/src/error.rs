//! Fatal errors and non-fatal warnings produced while building the model.

use std::fmt;

use serde::Serialize;

/// Fatal error raised while assembling the model.
///
/// No partial model is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A config option declares a type outside the supported set.
    #[error("unknown type '{declared}' for config option '{key}'")]
    UnknownOptionType { key: String, declared: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal condition collected during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Warning {
    /// An entry of `requires` whose key is not in the integration catalog.
    /// It is left out of the model.
    UnrecognizedIntegration { key: String },
}

impl Warning {
    /// Manifest path the warning refers to (e.g. `requires.kafka`).
    pub fn location(&self) -> String {
        match self {
            Warning::UnrecognizedIntegration { key } => format!("requires.{}", key),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnrecognizedIntegration { key } => {
                write!(f, "skipping unknown integration '{}'", key)
            }
        }
    }
}
