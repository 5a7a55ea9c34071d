//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use charmgen_ir::{BaseType, TypeDescriptor};
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for rendering the config model in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files relative to the specified base directory
    fn generate(&self, base_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the base directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping semantic types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map a base type to a language-specific type string
    fn map_base_type(&self, base: BaseType) -> &'static str;

    /// Map a nullable type (e.g., `*string` in Go)
    fn map_nullable_type(&self, base: BaseType) -> String;

    /// Map a full type descriptor
    fn map_type(&self, ty: TypeDescriptor) -> String {
        if ty.nullable {
            self.map_nullable_type(ty.base)
        } else {
            self.map_base_type(ty.base).to_string()
        }
    }
}
