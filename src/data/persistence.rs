use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// YAML-backed state stored as a single file inside a data directory.
///
/// The directory is always passed in by the caller; nothing here keeps a
/// process-wide location.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;

    fn path_in(dir: &Path) -> PathBuf {
        dir.join(Self::filename())
    }

    /// Loads from `dir`, falling back to `Default` when the file is absent.
    fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if !path.exists() {
            log::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_norway::from_str(&contents)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }

    /// Saves into `dir`, creating it if needed.
    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = Self::path_in(dir);
        let contents = serde_norway::to_string(self).context("failed to serialize YAML")?;
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
