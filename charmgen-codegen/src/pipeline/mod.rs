//! From a decoded charmcraft.yaml to a [`ConfigIR`](charmgen_ir::ConfigIR).
//!
//! A [`Pipeline`] runs the `validate` and `lower` phases, then any extra
//! [`Phase`]s, and gives every registered [`Plugin`] a look at the
//! [`CompilationContext`] around each one. Diagnostics accumulate on the
//! context; only errors stop the run.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
