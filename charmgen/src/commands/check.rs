use std::path::PathBuf;

use charmgen_manifest::CharmcraftFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Charm directory containing charmcraft.yaml
    #[arg(short = 'c', long = "charm-dir", default_value = ".")]
    pub charm_dir: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = CharmcraftFile::open(&self.charm_dir).unwrap_or_exit();

        let report = ops::check(file.charmcraft(), file.path())?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
