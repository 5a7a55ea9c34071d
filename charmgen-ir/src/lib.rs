//! Intermediate representation types for the charmgen config generator.
//!
//! This crate provides the aggregate model produced from a `charmcraft.yaml`
//! schema and consumed by the language renderers.
//!
//! # Architecture
//!
//! ```text
//! charmcraft.yaml → charmgen-manifest (decoding) → charmgen-ir (model) → renderer
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Go-specific type spellings)
//! - Immutable once assembled
//! - Self-contained (plain data, cheap to share between threads)

mod config;
mod types;

pub use config::{COMMON_PREFIX, ConfigIR, Integration, OptionBinding};
pub use types::{BaseType, IntegrationKind, TypeDescriptor};
