use anyhow::Result;
use monthpick::data::AppSettings;
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    if run_in_dir(dir)? {
        println!("Wrote default settings to {}", dir.join("config.yaml").display());
    } else {
        println!("{} already exists, leaving it unchanged.", dir.join("config.yaml").display());
    }
    Ok(())
}

/// Writes a default config.yaml into `dir` unless one is already there.
/// Returns whether a file was written.
pub(crate) fn run_in_dir(dir: &Path) -> Result<bool> {
    let path = dir.join("config.yaml");
    if path.exists() {
        log::info!("{} exists, skipping init", path.display());
        return Ok(false);
    }
    AppSettings::default().save_to(dir)?;
    Ok(true)
}
