use eyre::Result;

use super::CompilationContext;

/// One step of the pipeline.
///
/// The runner always executes `validate` and `lower` first, then any phases
/// registered with [`Pipeline::phase`](super::Pipeline::phase). A phase
/// returns an error only for fatal problems; anything the user should merely
/// know about goes into `ctx.diagnostics`.
pub trait Phase: Send + Sync {
    /// Name used for diagnostics, plugin hooks and snapshot files.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
