use charmgen_ir::ConfigIR;
use charmgen_manifest::Charmcraft;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// State threaded through the pipeline phases.
///
/// `ir` stays `None` until the lower phase succeeds.
#[derive(Debug)]
pub struct CompilationContext {
    pub charmcraft: Charmcraft,
    pub package_name: String,
    pub ir: Option<ConfigIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(charmcraft: Charmcraft, package_name: impl Into<String>) -> Self {
        Self {
            charmcraft,
            package_name: package_name.into(),
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Move the assembled model out of the context.
    pub fn take_ir(&mut self) -> Result<ConfigIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("config IR not set, did the lower phase run?"))
    }
}
