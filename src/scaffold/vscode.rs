use std::path::Path;
use anyhow::Result;
use serde_json::{json, Value};
use crate::interpreter;
use crate::scaffold::{write_file, WriteOutcome};

/// `.vscode/settings.json` pointing the Python extension at the venv interpreter.
pub fn settings_json(interpreter: &Path) -> Value {
    json!({
        "python.defaultInterpreterPath": interpreter.to_string_lossy(),
        "python.terminal.activateEnvironment": true,
        "files.exclude": {
            "**/__pycache__": true,
            ".brave-profile": true
        }
    })
}

/// `.vscode/launch.json` with a single debug configuration for `entry`.
pub fn launch_json(entry: &str) -> Value {
    json!({
        "version": "0.2.0",
        "configurations": [
            {
                "name": format!("Python: {}", entry),
                "type": "debugpy",
                "request": "launch",
                "program": format!("${{workspaceFolder}}/{}", entry),
                "console": "integratedTerminal",
                "justMyCode": true
            }
        ]
    })
}

/// Writes `.vscode/settings.json` and `.vscode/launch.json` under `root`.
///
/// `entry` is the entry script; only its file name is used in the launch
/// configuration.
pub fn create_vscode_files<P: AsRef<Path>>(
    root: P,
    venv_dir: &Path,
    entry: &Path,
    force: bool,
) -> Result<(WriteOutcome, WriteOutcome)> {
    let vscode = root.as_ref().join(".vscode");
    let entry_name = entry
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or(anyhow::anyhow!("Invalid entry file {:?}", entry))?;

    let settings = serde_json::to_string_pretty(&settings_json(&interpreter::resolve(venv_dir)))?;
    let launch = serde_json::to_string_pretty(&launch_json(&entry_name))?;
    let settings_outcome = write_file(vscode.join("settings.json"), &settings, force)?;
    let launch_outcome = write_file(vscode.join("launch.json"), &launch, force)?;
    Ok((settings_outcome, launch_outcome))
}
