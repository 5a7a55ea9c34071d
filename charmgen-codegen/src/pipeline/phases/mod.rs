//! The two phases every pipeline runs: [`ValidatePhase`] lints the
//! charmcraft.yaml, [`LowerPhase`] assembles the config IR.

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    EmptyDescriptionLint, IdentifierCollisionLint, InterfaceHintLint, Lint, ValidatePhase,
};
