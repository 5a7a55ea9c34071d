use charmgen_manifest::Charmcraft;
use eyre::{Result, WrapErr};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LowerPhase, ValidatePhase},
};

/// Runs `validate`, `lower` and then any extra phases over one
/// charmcraft.yaml, notifying plugins around every phase.
///
/// ```ignore
/// let mut ctx = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".charmgen/debug"))
///     .run(charmcraft, "charmconfig")?;
/// let ir = ctx.take_ir()?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    extra: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            extra: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Use a validate phase with a different lint set.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Append a phase that runs once the IR is assembled.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.extra.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The first failing phase stops the run; its error is wrapped with
    /// `"<phase> phase failed"`.
    pub fn run(
        &self,
        charmcraft: Charmcraft,
        package_name: impl Into<String>,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(charmcraft, package_name);

        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&LowerPhase, &mut ctx)?;
        for phase in &self.extra {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();

        self.plugins
            .iter()
            .try_for_each(|p| p.on_before_phase(name, ctx))?;
        phase
            .run(ctx)
            .wrap_err_with(|| format!("{} phase failed", name))?;
        self.plugins
            .iter()
            .try_for_each(|p| p.on_after_phase(name, ctx))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
