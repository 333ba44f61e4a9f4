//! Per-project Brave profile.
//!
//! A project gets its own `--user-data-dir` under `.brave-profile/`, two small
//! config files at the root and PowerShell helpers under `tools/`:
//!
//! ```text
//! project/
//! ├── .brave-profile/         # profile data (README.txt, prefs.json)
//! ├── .brave-profile.conf     # extra URLs, one per line
//! ├── .brave-ports.conf       # local ports, one per line
//! └── tools/
//!     ├── launch_brave.ps1
//!     ├── make_brave_shortcut.ps1
//!     └── cleanup_brave_profile.ps1
//! ```

pub mod scripts;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::{debug, warn};
use crate::scaffold::write_file;
use scripts::{CLEANUP_PS1, LAUNCH_BRAVE_PS1, MAKE_SHORTCUT_PS1};

pub const PROFILE_DIR: &str = ".brave-profile";
pub const PROFILE_CONF: &str = ".brave-profile.conf";
pub const PORTS_CONF: &str = ".brave-ports.conf";
pub const TOOLS_DIR: &str = "tools";

const PROFILE_README: &str =
    "Per-project Brave profile.\nLaunch Brave with --user-data-dir pointing here.\n";

const DEFAULT_CONF: &str = "# Lines starting with # are ignored.
# Add URLs to open automatically (one per line)
# http://localhost:8000
# http://localhost:5173
";

const DEFAULT_PORTS_CONF: &str = "# Ports for this project (one per line)
8000
5173
";

/// Scaffolds the profile directory, config files and helper scripts.
///
/// Every file is rewritten on each call; the contents are fixed, so running
/// it twice leaves the same tree. Returns the profile directory.
pub fn init_brave_profile<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();
    let tools = root.join(TOOLS_DIR);
    std::fs::create_dir_all(&tools)
        .with_context(|| format!("Could not create {:?}", tools))?;
    let profile = root.join(PROFILE_DIR);
    std::fs::create_dir_all(&profile)
        .with_context(|| format!("Could not create {:?}", profile))?;

    let prefs = json!({ "homepage": "about:blank", "first_run_tabs": [] });
    write_file(profile.join("README.txt"), PROFILE_README, true)?;
    write_file(profile.join("prefs.json"), &serde_json::to_string_pretty(&prefs)?, true)?;

    write_file(root.join(PROFILE_CONF), DEFAULT_CONF, true)?;
    write_file(root.join(PORTS_CONF), DEFAULT_PORTS_CONF, true)?;

    write_file(tools.join("launch_brave.ps1"), LAUNCH_BRAVE_PS1, true)?;
    write_file(tools.join("make_brave_shortcut.ps1"), MAKE_SHORTCUT_PS1, true)?;
    write_file(tools.join("cleanup_brave_profile.ps1"), CLEANUP_PS1, true)?;
    debug!("brave profile scaffolded at {}", profile.display());
    Ok(profile)
}

fn launch_task(label: &str, extra: Option<&str>) -> Value {
    let mut args = vec!["-File".to_string(), "${workspaceFolder}/tools/launch_brave.ps1".to_string()];
    if let Some(extra) = extra {
        args.push(extra.to_string());
    }
    json!({
        "label": label,
        "type": "shell",
        "command": "pwsh",
        "args": args,
        "problemMatcher": []
    })
}

/// The VS Code tasks that start Brave on the project profile.
pub fn brave_tasks() -> Vec<Value> {
    vec![
        launch_task("Brave: Launch project profile", None),
        launch_task("Brave: Launch (Auto)", Some("-Auto")),
        launch_task("Brave: Launch (No Tabs)", Some("-NoTabs")),
    ]
}

/// Merges the Brave launch tasks into `.vscode/tasks.json`.
///
/// Existing tasks are kept and a Brave task is only added when no task with
/// the same label exists. A file that is not a JSON object is replaced.
pub fn add_vscode_task<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let vscode = root.as_ref().join(".vscode");
    std::fs::create_dir_all(&vscode)
        .with_context(|| format!("Could not create {:?}", vscode))?;
    let tasks_path = vscode.join("tasks.json");

    let existing = if tasks_path.exists() {
        let raw = std::fs::read_to_string(&tasks_path)
            .with_context(|| format!("Could not read {:?}", tasks_path))?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) if value.is_object() => Some(value),
            _ => {
                warn!("{} is not a JSON object, replacing it.", tasks_path.display());
                None
            }
        }
    } else {
        None
    };

    let merged = match existing {
        Some(doc) => merge_tasks(doc, brave_tasks()),
        None => json!({ "version": "2.0.0", "tasks": brave_tasks() }),
    };
    write_file(&tasks_path, &serde_json::to_string_pretty(&merged)?, true)?;
    Ok(tasks_path)
}

fn merge_tasks(mut doc: Value, new_tasks: Vec<Value>) -> Value {
    let Some(obj) = doc.as_object_mut() else {
        return json!({ "version": "2.0.0", "tasks": new_tasks });
    };
    let tasks = obj.entry("tasks").or_insert_with(|| json!([]));
    if !tasks.is_array() {
        *tasks = json!([]);
    }
    if let Some(list) = tasks.as_array_mut() {
        let labels: Vec<String> = list
            .iter()
            .filter_map(|t| t.get("label").and_then(Value::as_str).map(str::to_string))
            .collect();
        for task in new_tasks {
            let label = task.get("label").and_then(Value::as_str).unwrap_or_default();
            if !labels.iter().any(|l| l == label) {
                list.push(task);
            }
        }
    }
    doc
}

/// Profile scaffolding plus the VS Code tasks.
pub fn setup_brave<P: AsRef<Path>>(root: P) -> Result<()> {
    init_brave_profile(root.as_ref())?;
    add_vscode_task(root.as_ref())?;
    Ok(())
}
