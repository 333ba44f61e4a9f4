//! Post-initialization dependency setup.
//!
//! Picks between `uv` and `pip` inside the project's `.venv` depending on
//! which project files exist:
//!
//! - usable `requirements.txt` → install it (`uv` first when preferred, `pip`
//!   as the fallback). A `pip` failure here is the only fatal outcome.
//! - no usable manifest, `uv` preferred → `uv init` unless `pyproject.toml`
//!   already exists. A failing `uv init` is only a warning.
//! - otherwise nothing happens.

use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};
use crate::fallback::attempt;
use crate::interpreter::venv_python;
use crate::process::{argv, ProcessError, ProcessRunner};

pub const MANIFEST_FILE: &str = "requirements.txt";
pub const DESCRIPTOR_FILE: &str = "pyproject.toml";

/// Why dependency setup did not run any tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `.venv` has no interpreter.
    NoInterpreter,
    /// `pyproject.toml` exists, so there is nothing to initialize.
    AlreadyInitialized,
    /// No manifest and `uv` not preferred.
    NothingToDo,
}

/// Result of [`setup_dependencies`]. Only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped(SkipReason),
    InstalledViaFastTool,
    /// `pip` installed the manifest. `fell_back` is set when `uv` was tried first.
    InstalledViaStandardTool { fell_back: bool },
    /// `uv init` created a project descriptor.
    Initialized,
    /// `uv init` failed; the message is the tool error.
    Failed(String),
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::Skipped(SkipReason::NoInterpreter) => write!(f, "skipped (no interpreter)"),
            InstallOutcome::Skipped(SkipReason::AlreadyInitialized) => write!(f, "skipped (already initialized)"),
            InstallOutcome::Skipped(SkipReason::NothingToDo) => write!(f, "skipped (nothing to do)"),
            InstallOutcome::InstalledViaFastTool => write!(f, "installed via uv"),
            InstallOutcome::InstalledViaStandardTool { fell_back: true } => write!(f, "installed via pip (uv fallback)"),
            InstallOutcome::InstalledViaStandardTool { fell_back: false } => write!(f, "installed via pip"),
            InstallOutcome::Initialized => write!(f, "initialized via uv"),
            InstallOutcome::Failed(msg) => write!(f, "failed: {}", msg),
        }
    }
}

/// A manifest counts only when it exists and is not empty.
///
/// A zero-byte `requirements.txt` means "no dependencies yet" and is treated
/// exactly like a missing one.
pub fn manifest_is_usable<P: AsRef<Path>>(path: P) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

/// Installs or initializes dependencies for the project at `root`.
///
/// Returns an error only when `pip` fails to install a usable manifest.
pub fn setup_dependencies<R>(
    root: &Path,
    prefer_fast_tool: bool,
    runner: &R,
) -> Result<InstallOutcome, ProcessError>
where
    R: ProcessRunner + ?Sized,
{
    let py = venv_python(root);
    if !py.exists() {
        info!("No Python interpreter in .venv, skipping dependency setup.");
        return Ok(InstallOutcome::Skipped(SkipReason::NoInterpreter));
    }

    let manifest = root.join(MANIFEST_FILE);
    if manifest_is_usable(&manifest) {
        return install_manifest(root, &py, &manifest, prefer_fast_tool, runner);
    }

    if !prefer_fast_tool {
        info!("No requirements.txt and uv not requested, nothing to do.");
        return Ok(InstallOutcome::Skipped(SkipReason::NothingToDo));
    }
    if root.join(DESCRIPTOR_FILE).exists() {
        info!("[uv] pyproject.toml already exists, skipping uv init.");
        return Ok(InstallOutcome::Skipped(SkipReason::AlreadyInitialized));
    }
    info!("[uv] No requirements.txt found, initializing pyproject.toml via uv init...");
    match runner.run(&python_module(&py, &["uv", "init"]), root) {
        Ok(()) => Ok(InstallOutcome::Initialized),
        Err(e) => {
            warn!("[uv] uv init failed: {}", e);
            Ok(InstallOutcome::Failed(e.to_string()))
        }
    }
}

fn install_manifest<R>(
    root: &Path,
    py: &Path,
    manifest: &Path,
    prefer_fast_tool: bool,
    runner: &R,
) -> Result<InstallOutcome, ProcessError>
where
    R: ProcessRunner + ?Sized,
{
    let manifest_arg = manifest.to_string_lossy().to_string();
    let pip_install = || {
        info!("[pip] Installing from requirements.txt...");
        runner.run(&python_module(py, &["pip", "install", "-r", manifest_arg.as_str()]), root)
    };

    if !prefer_fast_tool {
        pip_install()?;
        return Ok(InstallOutcome::InstalledViaStandardTool { fell_back: false });
    }

    let uv_install = || -> Result<(), ProcessError> {
        info!("[uv] requirements.txt detected, installing via uv...");
        runner.run(&python_module(py, &["pip", "install", "--upgrade", "pip"]), root)?;
        runner.run(&python_module(py, &["uv", "pip", "install", "-r", manifest_arg.as_str()]), root)
    };
    let outcome = attempt(uv_install, |e: &ProcessError| {
        info!("[uv] uv not available, falling back to pip");
        debug!("uv install error: {}", e);
        pip_install()
    })?;
    Ok(if outcome.used_fallback() {
        InstallOutcome::InstalledViaStandardTool { fell_back: true }
    } else {
        InstallOutcome::InstalledViaFastTool
    })
}

/// `<py> -m <module> <args...>`
fn python_module(py: &Path, module_args: &[&str]) -> Vec<String> {
    let mut cmd = vec![py.to_string_lossy().to_string(), "-m".to_string()];
    cmd.extend(argv(module_args));
    cmd
}
