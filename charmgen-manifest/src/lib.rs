//! charmcraft.yaml decoding for the charmgen config generator.
//!
//! Only the parts of charmcraft.yaml that drive code generation are decoded:
//! `config.options` and `requires`. Every other top-level key is ignored.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    CHARMCRAFT_FILE_NAME, Charmcraft, CharmcraftFile, ConfigOption, ConfigSection, OptionType,
    Requirement, parse_charmcraft,
};
