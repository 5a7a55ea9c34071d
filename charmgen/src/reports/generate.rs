//! What `charmgen generate` prints.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct GenerateReport {
    /// Non-error pipeline diagnostics, already formatted.
    pub warnings: Vec<String>,
    /// Info diagnostics, e.g. why an integration was dropped.
    pub infos: Vec<String>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    /// `--dry-run`: nothing touched the disk.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub files: Vec<PathBuf>,
    /// Set with `--visualize`.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.info(info);
        }

        match &self.result {
            GenerationResult::Written(written) => render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    if let Some(debug_dir) = &written.debug_dir {
        out.key_value(
            "Pipeline snapshots written to",
            &debug_dir.display().to_string(),
        );
    }

    for file in &written.files {
        out.key_value("Configuration written to file", &file.display().to_string());
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} file(s) would be generated", files.len()));
}
