use crate::error::{Result, ResultExt};
use crate::ui;
use brief::config::ensure_config_file_exists;
use std::path::PathBuf;

pub fn execute(path: PathBuf, force: bool) -> Result<()> {
    let written = ensure_config_file_exists(&path, force)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if written {
        ui::success_message(&format!("Wrote {}", path.display()));
    } else {
        ui::warning_message(&format!(
            "{} already exists. Use --force to overwrite it",
            path.display()
        ));
    }
    Ok(())
}
