use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn reposmith() -> Command {
    let mut cmd = Command::cargo_bin("reposmith").unwrap();
    cmd.env_remove("REPOSMITH_LOG").env_remove("REPOSMITH_NO_EMOJI");
    cmd
}

#[test]
fn test_version() {
    reposmith()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_minimal_without_venv() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("app");

    reposmith()
        .args(["init", "--no-venv", "--root"])
        .arg(&root)
        .assert()
        .success()
        .stderr(predicate::str::contains("Project initialized successfully"))
        .stderr(predicate::str::contains("skipping dependency setup"));

    assert!(root.join("run.py").exists());
    assert!(root.join(".github/workflows/ci.yml").exists());
    assert!(!root.join(".venv").exists());
    assert!(!root.join("LICENSE").exists());
    assert!(!root.join(".gitignore").exists());
    assert!(!root.join(".brave-profile").exists());
}

#[test]
fn test_init_all_without_venv() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("reposmith.toml"), "owner = \"Jane Doe\"\nentry = \"main.py\"\n").unwrap();

    reposmith()
        .current_dir(root)
        .args(["init", "--all", "--no-venv"])
        .assert()
        .success();

    assert!(root.join("main.py").exists());
    assert!(root.join(".gitignore").exists());
    assert!(root.join(".vscode/settings.json").exists());
    assert!(root.join(".vscode/launch.json").exists());
    let tasks = fs::read_to_string(root.join(".vscode/tasks.json")).unwrap();
    assert!(tasks.contains("Brave: Launch"));
    assert!(root.join(".brave-profile/prefs.json").exists());
    assert!(root.join("tools/launch_brave.ps1").exists());
    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("Jane Doe"));
}

#[test]
fn test_init_keeps_files_without_force() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("app.py"), "print('mine')\n").unwrap();

    reposmith()
        .args(["init", "--no-venv", "--entry", "app.py", "--root"])
        .arg(root)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(root.join("app.py")).unwrap(), "print('mine')\n");

    reposmith()
        .args(["init", "--no-venv", "--force", "--entry", "app.py", "--root"])
        .arg(root)
        .assert()
        .success();
    assert!(fs::read_to_string(root.join("app.py")).unwrap().contains("def main()"));
}

#[test]
fn test_no_emoji_output_is_ascii() {
    let dir = tempdir().unwrap();

    let output = reposmith()
        .args(["--no-emoji", "init", "--no-venv", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.is_ascii());
    assert!(stderr.contains("[INFO] ? Initializing project at:"));
}

#[test]
fn test_no_emoji_from_environment() {
    let dir = tempdir().unwrap();

    let output = reposmith()
        .env("REPOSMITH_NO_EMOJI", "1")
        .args(["init", "--no-venv", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8(output).unwrap().is_ascii());
}

#[test]
fn test_no_emoji_environment_accepts_boolish_values() {
    reposmith()
        .env("REPOSMITH_NO_EMOJI", "1")
        .arg("--version")
        .assert()
        .success();

    let dir = tempdir().unwrap();
    let output = reposmith()
        .env("REPOSMITH_NO_EMOJI", "yes")
        .args(["init", "--no-venv", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8(output).unwrap().is_ascii());

    let dir = tempdir().unwrap();
    reposmith()
        .env("REPOSMITH_NO_EMOJI", "0")
        .args(["init", "--no-venv", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("🚀 Initializing project at:"));
}

#[test]
fn test_log_level_accepts_python_names() {
    for level in ["WARNING", "CRITICAL"] {
        let dir = tempdir().unwrap();
        reposmith()
            .args(["--log-level", level, "init", "--no-venv", "--root"])
            .arg(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Initializing project").not());
        assert!(dir.path().join("run.py").exists());
    }
}

#[test]
fn test_brave_profile_init() {
    let dir = tempdir().unwrap();

    reposmith()
        .args(["brave-profile", "--init", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Brave Dev Profile ready to use"));

    assert!(dir.path().join(".brave-profile/README.txt").exists());
    assert!(dir.path().join(".brave-ports.conf").exists());
    assert!(dir.path().join("tools/cleanup_brave_profile.ps1").exists());
}

#[test]
fn test_brave_profile_without_init_prints_help() {
    let dir = tempdir().unwrap();

    reposmith()
        .args(["brave-profile", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--init"));

    assert!(!dir.path().join(".brave-profile").exists());
}

#[cfg(unix)]
mod dependency_setup {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Installs a fake `.venv/bin/python` that appends its arguments to
    /// `calls.log` in the working directory and fails every `uv` command.
    fn fake_venv(root: &Path, fail_everything: bool) {
        let bin = root.join(".venv").join("bin");
        fs::create_dir_all(&bin).unwrap();
        let failure = if fail_everything { "exit 1" } else { "exit 0" };
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> calls.log\ncase \"$2\" in uv) exit 1;; esac\n{failure}\n"
        );
        let python = bin.join("python");
        fs::write(&python, script).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn calls(root: &Path) -> Vec<String> {
        fs::read_to_string(root.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_uv_failure_falls_back_to_pip() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fake_venv(root, false);
        fs::write(root.join("requirements.txt"), "flask==3.0.0\n").unwrap();
        let manifest = root.join("requirements.txt").to_string_lossy().to_string();

        reposmith()
            .args(["init", "--use-uv", "--root"])
            .arg(root)
            .assert()
            .success()
            .stderr(predicate::str::contains("falling back to pip"));

        assert_eq!(
            calls(root),
            vec![
                "-m pip install --upgrade pip".to_string(),
                format!("-m uv pip install -r {manifest}"),
                format!("-m pip install -r {manifest}"),
            ]
        );
    }

    #[test]
    fn test_pip_failure_is_reported_but_init_succeeds() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fake_venv(root, true);
        fs::write(root.join("requirements.txt"), "flask==3.0.0\n").unwrap();

        reposmith()
            .args(["init", "--root"])
            .arg(root)
            .assert()
            .success()
            .stderr(predicate::str::contains("Post-init dependency setup failed"))
            .stderr(predicate::str::contains("Project initialized successfully"));

        assert_eq!(calls(root).len(), 1);
    }

    #[test]
    fn test_uv_init_failure_only_warns() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fake_venv(root, false);

        reposmith()
            .args(["init", "--use-uv", "--root"])
            .arg(root)
            .assert()
            .success()
            .stderr(predicate::str::contains("uv init failed"));

        assert_eq!(calls(root), vec!["-m uv init".to_string()]);
    }

    #[test]
    fn test_empty_manifest_without_uv_runs_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fake_venv(root, false);
        fs::write(root.join("requirements.txt"), "").unwrap();

        reposmith()
            .args(["init", "--root"])
            .arg(root)
            .assert()
            .success();

        assert!(calls(root).is_empty());
    }
}
