//! Boilerplate files written into a new project.

pub mod ci;
pub mod entry;
pub mod gitignore;
pub mod license;
pub mod vscode;

pub use ci::ensure_github_actions_workflow;
pub use entry::create_app_file;
pub use gitignore::create_gitignore;
pub use license::create_license;
pub use vscode::create_vscode_files;

use std::path::Path;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// What a scaffolding step did with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The target was already there and left untouched.
    Exists,
}

/// Writes `contents` to `path`, creating parent directories.
///
/// An existing file is only replaced when `force` is set.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str, force: bool) -> Result<WriteOutcome> {
    let path = path.as_ref();
    if path.exists() && !force {
        info!("{} already exists (use --force to overwrite).", path.display());
        return Ok(WriteOutcome::Exists);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {:?}", parent))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Could not write {:?}", path))?;
    debug!("wrote {}", path.display());
    Ok(WriteOutcome::Written)
}
