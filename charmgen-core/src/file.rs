use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// A source file produced by a renderer.
pub trait GeneratedFile {
    /// Destination of the file. Relative paths resolve against `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn render(&self) -> String;

    /// Pair post-processed content (e.g. formatted source) with this file's path.
    fn to_file(&self, base: &Path, content: impl Into<String>) -> File {
        File::new(self.path(base), content)
    }

    /// Render and write the file, returning where it was written.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let file = self.to_file(base, self.render());
        file.write()?;
        Ok(file.path)
    }
}

/// File content bound to its destination.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the content, creating missing parent directories. An existing
    /// file is replaced.
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).wrap_err_with(|| {
                format!(
                    "cannot create parent directories for output file {}",
                    self.path.display()
                )
            })?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("cannot write output file {}", self.path.display()))
    }
}
