//! Command results as printable reports.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, ModelSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use output::{Report, TerminalOutput};
