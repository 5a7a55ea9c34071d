//! Schema-to-model engine for the charmgen config generator.
//!
//! This crate turns a decoded `charmcraft.yaml` into the [`ConfigIR`] that
//! language renderers consume. Assembly itself performs no I/O.
//!
//! # Module Organization
//!
//! - [`types`] - Declared option type to semantic type mapping
//! - [`naming`] - Identifier and environment-variable name derivation
//! - [`integrations`] - Classification of `requires` entries against the catalog
//! - [`assemble`] - Assembly of the aggregate model
//! - [`pipeline`] - Compilation phases, diagnostics and plugins
//! - [`builder`] - Line-oriented source builder and column alignment
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)
//!
//! [`ConfigIR`]: charmgen_ir::ConfigIR

pub mod assemble;
pub mod builder;
mod error;
pub mod integrations;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod types;

pub use assemble::{Assembly, assemble, assemble_charmcraft};
pub use error::{Error, Result, Warning};
