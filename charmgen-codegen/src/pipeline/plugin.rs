//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A hook into the compilation pipeline.
///
/// The runner calls every plugin before and after each phase, in
/// registration order. Plugins may read or amend the context; an error
/// aborts the run.
///
/// # Example
///
/// ```ignore
/// /// Reject charms that would render without any integration.
/// struct RequireIntegrations;
///
/// impl Plugin for RequireIntegrations {
///     fn name(&self) -> &'static str { "require-integrations" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         let empty = ctx.ir.as_ref().is_some_and(|ir| ir.integrations.is_empty());
///         if phase == "lower" && empty {
///             eyre::bail!("charmcraft.yaml declares no recognized integration");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Name used when reporting plugin failures.
    fn name(&self) -> &'static str;

    /// Called before `phase` runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after `phase` completed successfully. Not called for a
    /// failing phase.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
