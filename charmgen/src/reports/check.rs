//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from charmcraft.yaml validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to charmcraft.yaml.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Model summary, absent when validation failed.
    pub summary: Option<ModelSummary>,
}

/// Human-readable description of the assembled model.
#[derive(Debug)]
pub struct ModelSummary {
    pub options: Vec<String>,
    pub integrations: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.info(info);
        }

        if !self.is_valid() {
            return;
        }

        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));

        if let Some(summary) = &self.summary {
            render_list(out, "Options", &summary.options);
            render_list(out, "Integrations", &summary.integrations);
        }
    }
}

fn render_list(out: &mut dyn Output, name: &str, items: &[String]) {
    out.newline();
    out.section(&format!("{} ({})", name, items.len()));
    for item in items {
        out.list_item(item);
    }
}
