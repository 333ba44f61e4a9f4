use std::path::{Path, PathBuf};

/// Name of the virtual environment directory created under a project root.
pub const VENV_DIR: &str = ".venv";

/// Directory layout used by virtual environments on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `<env>/bin/python`
    Posix,
    /// `<env>/Scripts/python.exe`
    Windows,
}

impl Layout {
    /// The layout used by the platform this binary was built for.
    pub fn host() -> Layout {
        #[cfg(windows)]
        {
            Layout::Windows
        }
        #[cfg(not(windows))]
        {
            Layout::Posix
        }
    }

    /// Path of the interpreter inside `env_dir` for this layout.
    ///
    /// Pure path arithmetic: nothing is checked on disk.
    pub fn resolve<P: AsRef<Path>>(self, env_dir: P) -> PathBuf {
        let env_dir = env_dir.as_ref();
        match self {
            Layout::Posix => env_dir.join("bin").join("python"),
            Layout::Windows => env_dir.join("Scripts").join("python.exe"),
        }
    }
}

/// Interpreter path inside `env_dir` for the host platform.
pub fn resolve<P: AsRef<Path>>(env_dir: P) -> PathBuf {
    Layout::host().resolve(env_dir)
}

/// Interpreter path of the `.venv` environment under `root`.
pub fn venv_python<P: AsRef<Path>>(root: P) -> PathBuf {
    resolve(root.as_ref().join(VENV_DIR))
}
