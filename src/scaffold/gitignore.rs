use std::path::Path;
use anyhow::Result;
use crate::scaffold::{write_file, WriteOutcome};

const PYTHON_GITIGNORE: &str = "\
# Byte-compiled / optimized files
__pycache__/
*.py[cod]
*$py.class

# Virtual environments
.venv/
venv/
env/

# Packaging
build/
dist/
*.egg-info/
.eggs/

# Test and coverage output
.pytest_cache/
.coverage
htmlcov/
.mypy_cache/
.ruff_cache/

# Environment files
.env
env-info.txt

# Editors
.idea/
.vscode/*
!.vscode/settings.json
!.vscode/launch.json
!.vscode/tasks.json

# Per-project Brave profile data
.brave-profile/

# OS files
.DS_Store
Thumbs.db
";

/// Writes a Python `.gitignore` into `root`.
pub fn create_gitignore<P: AsRef<Path>>(root: P, force: bool) -> Result<WriteOutcome> {
    write_file(root.as_ref().join(".gitignore"), PYTHON_GITIGNORE, force)
}
