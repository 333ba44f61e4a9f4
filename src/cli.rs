use std::path::PathBuf;
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use reposmith::logging::LogLevel;

#[derive(Debug, Parser, Clone)]
#[clap(
    author,
    version,
    about = "RepoSmith: Bootstrap Python projects (venv + uv + Brave)",
    long_about = None
)]
pub struct CLI {
    /// Logging level. If omitted, `REPOSMITH_LOG` or `info` is used
    #[arg(long, value_enum, value_name = "LEVEL", ignore_case = true, global = true)]
    pub log_level: Option<LogLevel>,
    /// Disable emojis in console output for maximum portability
    #[arg(
        long,
        global = true,
        env = "REPOSMITH_NO_EMOJI",
        value_parser = BoolishValueParser::new()
    )]
    pub no_emoji: bool,
    #[command(subcommand)]
    pub(crate) command: RepoSmithCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum RepoSmithCommand {
    /// Initialize a new project: venv, entry script, CI workflow and optional extras
    Init(InitArgs),
    /// Manage the per-project Brave dev profile
    BraveProfile {
        /// Target project folder. Defaults to the current directory
        #[clap(long, value_name = "PATH")]
        root: Option<PathBuf>,
        /// Initialize the Brave dev profile in the project
        #[clap(long)]
        init: bool,
    },
}

#[derive(Debug, Args, Clone, PartialEq, Default)]
pub struct InitArgs {
    /// Target project folder. Defaults to the current directory
    #[clap(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
    /// Overwrite existing files
    #[clap(long)]
    pub force: bool,
    /// Include an MIT LICENSE file
    #[clap(long)]
    pub with_license: bool,
    /// Include a Python .gitignore
    #[clap(long)]
    pub with_gitignore: bool,
    /// Include VS Code settings and launch configuration
    #[clap(long)]
    pub with_vscode: bool,
    /// Install dependencies using uv (faster), falling back to pip
    #[clap(long)]
    pub use_uv: bool,
    /// Initialize the Brave project profile after scaffolding
    #[clap(long)]
    pub with_brave: bool,
    /// Shorthand for --use-uv --with-brave --with-vscode --with-license --with-gitignore
    #[clap(long)]
    pub all: bool,
    /// Do not create a virtual environment
    #[clap(long)]
    pub no_venv: bool,
    /// Name of the entry script. Defaults to `run.py`
    #[clap(long, value_name = "NAME")]
    pub entry: Option<String>,
}

impl InitArgs {
    /// Turns `--all` into the individual flags it stands for.
    pub fn expand_all(&mut self) {
        if self.all {
            self.use_uv = true;
            self.with_brave = true;
            self.with_vscode = true;
            self.with_license = true;
            self.with_gitignore = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_flags() {
        let mut args = InitArgs {
            all: true,
            ..InitArgs::default()
        };
        args.expand_all();
        assert!(args.use_uv && args.with_brave && args.with_vscode);
        assert!(args.with_license && args.with_gitignore);
        assert!(!args.force && !args.no_venv);
    }

    #[test]
    fn test_parse_init_flags() {
        let cli = CLI::try_parse_from([
            "reposmith", "--log-level", "DEBUG", "init", "--root", "proj", "--use-uv", "--entry", "app.py",
        ])
        .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        match cli.command {
            RepoSmithCommand::Init(args) => {
                assert_eq!(args.root, Some(PathBuf::from("proj")));
                assert!(args.use_uv);
                assert_eq!(args.entry.as_deref(), Some("app.py"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_python_level_names_are_accepted() {
        for (name, level) in [
            ("WARNING", LogLevel::Warn),
            ("warn", LogLevel::Warn),
            ("CRITICAL", LogLevel::Error),
            ("ERROR", LogLevel::Error),
        ] {
            let cli = CLI::try_parse_from(["reposmith", "--log-level", name, "brave-profile"]).unwrap();
            assert_eq!(cli.log_level, Some(level), "{name}");
        }
        assert!(CLI::try_parse_from(["reposmith", "--log-level", "loud", "brave-profile"]).is_err());
    }

    #[test]
    fn test_parse_brave_profile() {
        let cli = CLI::try_parse_from(["reposmith", "brave-profile", "--init", "--no-emoji"]).unwrap();
        assert!(cli.no_emoji);
        assert_eq!(
            cli.command,
            RepoSmithCommand::BraveProfile { root: None, init: true }
        );
    }
}
