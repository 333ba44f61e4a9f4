//! # RepoSmith Core Library
//!
//! This crate contains the building blocks of the `reposmith` tool, a project
//! scaffolder for Python repositories: it creates a `.venv`, installs
//! dependencies with `uv` or `pip`, writes boilerplate files and can set up a
//! per-project Brave browser profile.
//!
//! The library is built for the `reposmith` CLI, but every step is a plain
//! function taking a project root, so it can be reused on its own.
//!
//! ## Modules Overview
//! - [`deps`] – Post-init dependency setup (`uv` with `pip` fallback)
//! - [`fallback`] – Two-step "try, then fall back" policy
//! - [`process`] – Running external commands
//! - [`interpreter`] – Locating the interpreter inside a virtual environment
//! - [`venv`] – Creating the virtual environment
//! - [`scaffold`] – Entry script, `.gitignore`, `LICENSE`, VS Code and CI files
//! - [`brave`] – Per-project Brave profile and launch scripts
//! - [`config`] – Optional TOML configuration
//! - [`logging`] – `tracing` subscriber setup

pub mod brave;
pub mod config;
pub mod deps;
pub mod fallback;
pub mod interpreter;
pub mod logging;
pub mod process;
pub mod scaffold;
pub mod venv;

pub use brave::*;
pub use config::*;
pub use deps::*;
pub use interpreter::{venv_python, Layout, VENV_DIR};
pub use process::*;
pub use scaffold::*;
pub use venv::*;
