use std::path::Path;
use anyhow::Result;
use crate::scaffold::{write_file, WriteOutcome};

const CI_WORKFLOW: &str = r#"name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  build:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        python-version: ["3.10", "3.11", "3.12"]
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-python@v5
        with:
          python-version: ${{ matrix.python-version }}
      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          if [ -s requirements.txt ]; then pip install -r requirements.txt; fi
      - name: Compile check
        run: python -m compileall -q .
"#;

/// Path of the workflow file relative to the project root.
pub const WORKFLOW_PATH: &str = ".github/workflows/ci.yml";

/// Writes a GitHub Actions workflow unless one is already present.
pub fn ensure_github_actions_workflow<P: AsRef<Path>>(root: P) -> Result<WriteOutcome> {
    write_file(root.as_ref().join(WORKFLOW_PATH), CI_WORKFLOW, false)
}
