//! Files produced by the Go generator.

mod config_go;

pub use charmgen_core::GENERATED_HEADER;
pub use config_go::ConfigGo;
