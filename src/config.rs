use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Name of the per-project config file looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "reposmith.toml";

/// Optional user settings, read from `config.toml` in the global config
/// directory and from `reposmith.toml` in the project root.
///
/// ```toml
/// owner = "Jane Doe"
/// entry = "main.py"
/// python = "python3.12"
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Copyright holder written into generated licenses.
    pub owner: Option<String>,
    /// Entry script name used when `--entry` is not given.
    pub entry: Option<String>,
    /// Base interpreter used to create the virtual environment.
    pub python: Option<String>,
}

impl Config {
    /// Loads a config file. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config {:?}", path))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {:?}", path))
    }

    /// Global config, overridden field by field by the project config in `root`.
    pub fn resolve<P: AsRef<Path>>(root: P) -> Result<Config> {
        let global = match get_global_config_file() {
            Ok(path) => Config::load(path)?,
            Err(_) => Config::default(),
        };
        let project = Config::load(root.as_ref().join(PROJECT_CONFIG_FILE))?;
        Ok(global.merge(project))
    }

    /// Fields set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            owner: other.owner.or(self.owner),
            entry: other.entry.or(self.entry),
            python: other.python.or(self.python),
        }
    }

    /// License owner: config, then the login name, then `"Unknown"`.
    pub fn owner_name(&self) -> String {
        self.owner
            .clone()
            .filter(|o| !o.trim().is_empty())
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

pub fn get_global_config_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("org", "reposmith", "reposmith")
        .ok_or_else(|| anyhow!("Could not get project directories"))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

pub fn get_global_config_file() -> Result<PathBuf> {
    Ok(get_global_config_dir()?.join("config.toml"))
}
