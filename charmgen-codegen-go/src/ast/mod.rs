//! Go AST builders for generating struct types and methods.
//!
//! These provide a high-level API for constructing Go syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod structs;

pub use fns::{Fn, Receiver};
pub use structs::{Field, Struct};
