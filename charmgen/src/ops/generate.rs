//! Generate operation - Go config generation from charmcraft.yaml.

use std::path::Path;

use charmgen_codegen::pipeline::{Diagnostic, Pipeline, Severity, SnapshotPlugin};
use charmgen_codegen_go::{Formatter, Generator, LanguageCodegen};
use charmgen_manifest::Charmcraft;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Directory, relative to the charm directory, receiving pipeline snapshots.
pub const DEBUG_DIR: &str = ".charmgen/debug";

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Charm directory holding charmcraft.yaml.
    pub charm_dir: &'a Path,
    /// Go package name.
    pub package: &'a str,
    /// Output file, relative to the working directory unless absolute.
    pub output: &'a Path,
    pub formatter: Formatter,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on charmcraft.yaml and renders the Go config file.
pub fn generate(charmcraft: &Charmcraft, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.charm_dir.join(DEBUG_DIR);

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let mut ctx = pipeline
        .run(charmcraft.clone(), opts.package)
        .wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx.warnings().map(Diagnostic::describe).collect();
    let infos: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .map(Diagnostic::describe)
        .collect();

    let generator = Generator::new(ctx.take_ir()?)
        .with_output(opts.output)
        .with_formatter(opts.formatter);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let generated = generator
            .generate(Path::new(""))
            .wrap_err_with(|| format!("Failed to generate {} code", generator.language()))?;

        GenerationResult::Written(WrittenResult {
            files: generated.written,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        warnings,
        infos,
        result,
    })
}
