//! Diagnostics collected while the pipeline runs.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stops the run after the current phase.
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to the phase that produced it and, optionally, to a
/// dotted path into charmcraft.yaml such as `requires.kafka`.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: String,
    pub message: String,
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Attach a charmcraft.yaml location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The message followed by a `-->` location line, for terminal output.
    pub fn describe(&self) -> String {
        match &self.location {
            Some(location) => format!("{}\n  --> {}", self.message, location),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("validate", "identifier collision");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "validate");
        assert!(diag.location.is_none());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("lower", "skipping unknown integration 'kafka'")
            .at("requires.kafka");
        assert_eq!(
            diag.to_string(),
            "warning: skipping unknown integration 'kafka' (at requires.kafka)"
        );
        assert_eq!(Diagnostic::info("validate", "hint").to_string(), "info: hint");
    }

    #[test]
    fn test_describe() {
        let diag = Diagnostic::warning("lower", "skipping unknown integration 'kafka'")
            .at("requires.kafka");
        assert_eq!(
            diag.describe(),
            "skipping unknown integration 'kafka'\n  --> requires.kafka"
        );
        assert_eq!(Diagnostic::info("validate", "hint").describe(), "hint");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_value(Diagnostic::error("validate", "boom")).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["location"], serde_json::Value::Null);
    }
}
