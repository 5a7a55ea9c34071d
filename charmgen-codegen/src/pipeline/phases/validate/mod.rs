mod lint;
pub mod lints;

use charmgen_manifest::Charmcraft;
use eyre::{Result, bail};

pub use lint::Lint;
pub use lints::{EmptyDescriptionLint, IdentifierCollisionLint, InterfaceHintLint};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Runs a set of lints; any error-level diagnostic fails the phase.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lints, in reporting order.
    pub fn new() -> Self {
        Self::empty()
            .with_lint(IdentifierCollisionLint)
            .with_lint(InterfaceHintLint)
            .with_lint(EmptyDescriptionLint)
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lints(&self) -> impl Iterator<Item = &(dyn Lint + 'static)> {
        self.lints.iter().map(|lint| &**lint)
    }

    /// Collects diagnostics from every lint. Unlike [`Phase::run`], never fails.
    pub fn check(&self, charmcraft: &Charmcraft) -> Vec<Diagnostic> {
        self.lints.iter().fold(Vec::new(), |mut diagnostics, lint| {
            lint.check(charmcraft, &mut diagnostics);
            diagnostics
        })
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint charmcraft.yaml before assembly"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for diagnostic in self.check(&ctx.charmcraft) {
            ctx.push(diagnostic);
        }

        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reject;

    impl Lint for Reject {
        fn name(&self) -> &'static str {
            "reject"
        }

        fn description(&self) -> &'static str {
            "Rejects every charm"
        }

        fn check(&self, _charmcraft: &Charmcraft, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::error("validate", "rejected"));
        }
    }

    fn parse(yaml: &str) -> Charmcraft {
        yaml.parse().expect("Failed to parse test charmcraft.yaml")
    }

    #[test]
    fn test_builtin_lints() {
        let phase = ValidatePhase::new();
        let names: Vec<_> = phase.lints().map(|l| l.name()).collect();

        assert_eq!(
            names,
            ["identifier-collision", "interface-hint", "empty-description"]
        );
        assert!(phase.lints().all(|l| !l.description().is_empty()));
        assert_eq!(ValidatePhase::empty().lints().count(), 0);
    }

    #[test]
    fn test_error_fails_phase() {
        let mut ctx = CompilationContext::new(Charmcraft::default(), "charmconfig");

        let err = ValidatePhase::empty()
            .with_lint(Reject)
            .run(&mut ctx)
            .unwrap_err();

        assert_eq!(err.to_string(), "validation failed with 1 error(s)");
        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_warnings_pass() {
        let charmcraft = parse("config:\n  options:\n    port:\n      type: int\n");
        let mut ctx = CompilationContext::new(charmcraft, "charmconfig");

        ValidatePhase::empty()
            .with_lint(EmptyDescriptionLint)
            .run(&mut ctx)
            .unwrap();

        assert_eq!(ctx.warning_count(), 1);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_check_keeps_errors_and_warnings() {
        let charmcraft = parse(
            "config:\n  options:\n    foo-bar:\n      type: string\n      description: a\n    foo_bar:\n      type: string\n",
        );

        let diagnostics = ValidatePhase::new().check(&charmcraft);

        assert!(diagnostics.iter().any(|d| d.severity.is_error()));
        assert!(diagnostics.iter().any(|d| d.severity.is_warning()));
    }
}
