//! Lower phase - assembles the config IR from charmcraft.yaml.

use eyre::Result;

use crate::{
    assemble::assemble_charmcraft,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that assembles the config IR.
///
/// Assembly warnings become warning diagnostics. An unknown option type
/// aborts the phase and leaves `ctx.ir` unset.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Assemble charmcraft.yaml into the config IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let assembly = assemble_charmcraft(&ctx.package_name, &ctx.charmcraft)?;

        for warning in &assembly.warnings {
            ctx.push(
                Diagnostic::warning(self.name(), warning.to_string()).at(warning.location()),
            );
        }

        ctx.ir = Some(assembly.model);
        Ok(())
    }
}
