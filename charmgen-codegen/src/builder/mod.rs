//! Source building blocks shared by the renderers.
//!
//! - [`CodeBuilder`] - tab-indented line builder
//! - [`align_columns`] - gofmt-style column alignment

mod align;
mod code_builder;

pub use align::align_columns;
pub use code_builder::CodeBuilder;
