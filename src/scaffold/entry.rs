use std::path::Path;
use anyhow::Result;
use crate::scaffold::{write_file, WriteOutcome};

/// Default entry script name when neither `--entry` nor config sets one.
pub const DEFAULT_ENTRY: &str = "run.py";

const APP_TEMPLATE: &str = r#""""Project entry point."""


def main() -> None:
    print("Hello from your new project!")


if __name__ == "__main__":
    main()
"#;

/// Writes the Python entry script.
pub fn create_app_file<P: AsRef<Path>>(path: P, force: bool) -> Result<WriteOutcome> {
    write_file(path, APP_TEMPLATE, force)
}
