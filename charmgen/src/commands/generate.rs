use std::path::PathBuf;

use charmgen_codegen_go::{DEFAULT_OUTPUT, DEFAULT_PACKAGE, Formatter};
use charmgen_manifest::CharmcraftFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Charm directory containing charmcraft.yaml
    #[arg(short = 'c', long = "charm-dir", default_value = ".")]
    pub charm_dir: PathBuf,

    /// Go package name of the generated file
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    ///
    /// The preview is the source before gofmt runs, so it can differ from
    /// the written file in whitespace.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip running gofmt on the generated file
    #[arg(long)]
    pub no_fmt: bool,

    /// Write pipeline snapshots to .charmgen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = CharmcraftFile::open(&self.charm_dir).unwrap_or_exit();

        let report = ops::generate(
            file.charmcraft(),
            GenerateOptions {
                charm_dir: &self.charm_dir,
                package: &self.package,
                output: &self.output,
                formatter: if self.no_fmt {
                    Formatter::None
                } else {
                    Formatter::Gofmt
                },
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
