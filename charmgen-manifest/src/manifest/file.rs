use std::path::{Path, PathBuf};

use super::Charmcraft;
use crate::Result;

/// File name looked up inside the charm directory.
pub const CHARMCRAFT_FILE_NAME: &str = "charmcraft.yaml";

/// A charmcraft.yaml file and the manifest parsed from it.
pub struct CharmcraftFile {
    path: PathBuf,
    charmcraft: Charmcraft,
}

impl CharmcraftFile {
    /// Open and parse `charmcraft.yaml` inside the given charm directory.
    pub fn open(charm_dir: impl AsRef<Path>) -> Result<Self> {
        Self::open_path(charm_dir.as_ref().join(CHARMCRAFT_FILE_NAME))
    }

    /// Open and parse a charmcraft.yaml file at an explicit path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let charmcraft = Charmcraft::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, charmcraft })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn charmcraft(&self) -> &Charmcraft {
        &self.charmcraft
    }
}
