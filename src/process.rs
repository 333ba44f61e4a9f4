use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::info;

/// Failure of an external command started through a [`ProcessRunner`].
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("no command given")]
    EmptyCommand,
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {}", exit_description(.code))]
    NonZeroExit {
        command: String,
        /// `None` when the child was terminated by a signal.
        code: Option<i32>,
    },
}

impl ProcessError {
    /// Exit code of the failed process, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::NonZeroExit { code, .. } => *code,
            _ => None,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "a signal".to_string(),
    }
}

/// Runs external commands on behalf of the scaffolding steps.
///
/// Implementations block until the command finishes. A non-zero exit status
/// must be reported as [`ProcessError::NonZeroExit`].
pub trait ProcessRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> Result<(), ProcessError>;
}

/// Spawns real child processes that inherit stdout and stderr, so tool
/// output is visible while it runs. No timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> Result<(), ProcessError> {
        let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;
        let command = display_command(argv);
        info!("> {}", command);
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| ProcessError::Spawn {
                command: command.clone(),
                source,
            })?;
        if !status.success() {
            return Err(ProcessError::NonZeroExit {
                command,
                code: status.code(),
            });
        }
        Ok(())
    }
}

/// Joins an argument vector into a single printable command line.
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

/// Builds an owned argument vector from anything string-like.
pub fn argv<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().map(|s| s.as_ref().to_string()).collect()
}
