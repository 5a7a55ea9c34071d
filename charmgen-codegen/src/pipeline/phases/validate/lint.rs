use charmgen_manifest::Charmcraft;

use crate::pipeline::Diagnostic;

/// A single check over the decoded charmcraft.yaml.
///
/// Lints only report. Whether an error stops the run is decided by
/// [`ValidatePhase`](super::ValidatePhase).
pub trait Lint: Send + Sync {
    /// Kebab-case name, e.g. `identifier-collision`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, charmcraft: &Charmcraft, diagnostics: &mut Vec<Diagnostic>);
}
