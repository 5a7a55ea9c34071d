//! Go renderer for the charmgen config generator.
//!
//! Turns a [`ConfigIR`](charmgen_ir::ConfigIR) into a single Go source file
//! holding the typed charm configuration, formats it and writes it.
//!
//! ```ignore
//! let generator = Generator::new(ir).with_output("charmconfig/charmconfig.go");
//! generator.generate(Path::new("."))?;
//! ```

mod error;
mod formatter;
mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Field, Fn, Receiver, Struct};
pub use charmgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use error::RenderError;
pub use formatter::Formatter;
pub use generator::{DEFAULT_OUTPUT, DEFAULT_PACKAGE, Generator};
pub use type_mapper::GoTypeMapper;
