use std::path::Path;
use anyhow::{Context, Result};
use tracing::info;
use crate::process::{argv, ProcessRunner};
use crate::scaffold::WriteOutcome;

/// Picks the interpreter used to create a virtual environment.
///
/// A configured interpreter wins; otherwise the first of `python3` and
/// `python` found on `PATH`, falling back to plain `python`.
pub fn base_python(configured: Option<&str>) -> String {
    if let Some(python) = configured.filter(|p| !p.trim().is_empty()) {
        return python.to_string();
    }
    ["python3", "python"]
        .into_iter()
        .find_map(|name| which::which(name).ok())
        .map(|path| path.to_string_lossy().to_string())
        .unwrap_or_else(|| "python".to_string())
}

/// Creates a virtual environment at `venv_dir` with `python -m venv`,
/// unless the directory already exists.
pub fn create_virtualenv<R>(venv_dir: &Path, python: &str, runner: &R) -> Result<WriteOutcome>
where
    R: ProcessRunner + ?Sized,
{
    if venv_dir.exists() {
        info!("Virtual environment already exists.");
        return Ok(WriteOutcome::Exists);
    }
    info!("Creating virtual environment at: {}", venv_dir.display());
    let venv_dir = std::path::absolute(venv_dir)
        .with_context(|| format!("Could not resolve {:?}", venv_dir))?;
    let cwd = venv_dir.parent().unwrap_or(Path::new("/"));
    let venv_arg = venv_dir.to_string_lossy().to_string();
    runner
        .run(&argv([python, "-m", "venv", venv_arg.as_str()]), cwd)
        .with_context(|| format!("Could not create virtual environment {:?}", venv_dir))?;
    info!("Virtual environment created.");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::process::ProcessError;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ProcessRunner for Recorder {
        fn run(&self, argv: &[String], _cwd: &Path) -> Result<(), ProcessError> {
            self.calls.borrow_mut().push(argv.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_existing_venv_is_left_alone() {
        let dir = tempdir().unwrap();
        let venv = dir.path().join(".venv");
        std::fs::create_dir(&venv).unwrap();
        let runner = Recorder::default();
        assert_eq!(create_virtualenv(&venv, "python3", &runner).unwrap(), WriteOutcome::Exists);
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_runs_venv_module() {
        let dir = tempdir().unwrap();
        let venv = dir.path().join(".venv");
        let runner = Recorder::default();
        assert_eq!(create_virtualenv(&venv, "python3", &runner).unwrap(), WriteOutcome::Written);
        let venv_arg = venv.to_string_lossy().to_string();
        assert_eq!(
            *runner.calls.borrow(),
            vec![argv(["python3", "-m", "venv", venv_arg.as_str()])]
        );
    }

    #[test]
    fn test_configured_python_wins() {
        assert_eq!(base_python(Some("python3.12")), "python3.12");
        assert!(!base_python(Some("  ")).is_empty());
    }
}
