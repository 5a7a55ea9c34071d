//! Per-phase dumps of the pipeline state, used by `generate --visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use charmgen_ir::ConfigIR;
use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// State of the context right after `phase` completed.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    /// Absent until `lower` has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<ConfigIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn of(phase: &str, ctx: &CompilationContext) -> Self {
        Self {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    /// Write as pretty JSON to `<dir>/<phase>.json`.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("cannot create snapshot directory {}", dir.display()))?;
        let path = dir.join(format!("{}.json", self.phase));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)
            .wrap_err_with(|| format!("cannot write snapshot {}", path.display()))?;
        Ok(path)
    }
}

/// Records a [`PhaseSnapshot`] after every successful phase.
///
/// With an output directory each snapshot is written as soon as it is
/// taken, so the phases before a failure are still on disk.
#[derive(Default)]
pub struct SnapshotPlugin {
    taken: Mutex<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(output_dir.into()),
            ..Self::default()
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.taken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.snapshots()
            .iter()
            .try_for_each(|snapshot| snapshot.write(dir.as_ref()).map(drop))
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot::of(phase, ctx);
        if let Some(dir) = &self.output_dir {
            snapshot.write(dir)?;
        }
        self.taken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
