use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::{debug, info, warn};
use reposmith::scaffold::entry::DEFAULT_ENTRY;
use reposmith::{
    base_python, create_app_file, create_gitignore, create_license, create_virtualenv,
    create_vscode_files, ensure_github_actions_workflow, init_brave_profile, setup_brave,
    setup_dependencies, Config, ProcessRunner, SystemRunner, WriteOutcome, PROFILE_DIR, VENV_DIR,
};
use crate::cli::{InitArgs, RepoSmithCommand, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    match cli.command {
        RepoSmithCommand::Init(args) => {
            execute_init(args, &SystemRunner)
        }
        RepoSmithCommand::BraveProfile { root, init } => {
            execute_brave_profile(root, init)
        }
    }
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

pub fn execute_init(mut args: InitArgs, runner: &dyn ProcessRunner) -> Result<()> {
    args.expand_all();
    let root = resolve_root(args.root.take())?;
    std::fs::create_dir_all(&root)
        .with_context(|| format!("Could not create project root {:?}", root))?;
    info!("🚀 Initializing project at: {}", root.display());

    let config = Config::resolve(&root)?;
    let entry_name = entry_name(args.entry.as_deref(), &config);
    let entry_path = root.join(&entry_name);
    let venv_dir = root.join(VENV_DIR);

    // venv
    if args.no_venv {
        info!("Skipping virtual environment creation (--no-venv).");
    } else {
        let python = base_python(config.python.as_deref());
        if let Err(e) = create_virtualenv(&venv_dir, &python, runner) {
            warn!("{:#}", e);
        }
    }

    // entry file
    if create_app_file(&entry_path, args.force)? == WriteOutcome::Written {
        info!("[entry] {} created at: {}", entry_name, entry_path.display());
    }

    // optional add-ons
    if args.with_vscode {
        create_vscode_files(&root, &venv_dir, &entry_path, args.force)?;
    }
    if args.with_gitignore {
        create_gitignore(&root, args.force)?;
    }
    if args.with_license {
        create_license(&root, &config.owner_name(), args.force)?;
    }

    ensure_github_actions_workflow(&root)?;

    if args.with_brave {
        if args.with_vscode {
            setup_brave(&root)?;
        } else {
            init_brave_profile(&root)?;
        }
        info!("🦁 Brave Dev Profile initialized successfully.");
    }

    // dependencies last, failures only warn
    match setup_dependencies(&root, args.use_uv, runner) {
        Ok(outcome) => debug!("dependency setup: {}", outcome),
        Err(e) => warn!("Post-init dependency setup failed: {}", e),
    }

    info!("✅ Project initialized successfully at: {}", root.display());
    Ok(())
}

fn entry_name(cli_entry: Option<&str>, config: &Config) -> String {
    cli_entry
        .filter(|e| !e.is_empty())
        .or(config.entry.as_deref().filter(|e| !e.is_empty()))
        .unwrap_or(DEFAULT_ENTRY)
        .to_string()
}

pub fn execute_brave_profile(root: Option<PathBuf>, init: bool) -> Result<()> {
    if !init {
        let mut cmd = CLI::command();
        if let Some(sub) = cmd.find_subcommand_mut("brave-profile") {
            sub.print_help()?;
        }
        return Ok(());
    }
    let root = resolve_root(root)?;
    init_brave_profile(&root)?;
    info!("🦁 Brave Dev Profile ready to use at: {}", profile_display(&root));
    Ok(())
}

fn profile_display(root: &Path) -> String {
    root.join(PROFILE_DIR).display().to_string()
}
