use std::path::{Path, PathBuf};

use charmgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use charmgen_core::GeneratedFile;
use charmgen_ir::ConfigIR;
use eyre::{Result, WrapErr};

use crate::{Formatter, files::ConfigGo};

/// Default package name of the generated file.
pub const DEFAULT_PACKAGE: &str = "charmconfig";

/// Default output path. Relative outputs resolve against the `generate` base.
pub const DEFAULT_OUTPUT: &str = "charmconfig/charmconfig.go";

/// Go code generator that produces the typed charm configuration.
pub struct Generator {
    ir: ConfigIR,
    output: PathBuf,
    formatter: Formatter,
}

impl Generator {
    pub fn new(ir: ConfigIR) -> Self {
        Self {
            ir,
            output: PathBuf::from(DEFAULT_OUTPUT),
            formatter: Formatter::default(),
        }
    }

    /// Set the output path. Relative paths are resolved against the base
    /// directory passed to `generate`.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    fn file(&self) -> ConfigGo<'_> {
        ConfigGo::new(&self.ir, &self.output)
    }

    /// Render and format the source without writing it.
    pub fn render(&self) -> Result<String> {
        let source = self.file().render();
        let formatted = self
            .formatter
            .format(&source)
            .wrap_err("failed to format generated Go source")?;
        Ok(formatted)
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.output.display().to_string(),
            content: self.file().render(),
        }]
    }

    fn generate(&self, base: &Path) -> Result<GenerateResult> {
        let file = self.file().to_file(base, self.render()?);
        file.write()?;

        Ok(GenerateResult {
            written: vec![file.path().to_path_buf()],
        })
    }
}
