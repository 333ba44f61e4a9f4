use std::path::Path;
use anyhow::Result;
use chrono::Datelike;
use tracing::info;
use crate::scaffold::{write_file, WriteOutcome};

/// MIT license text for `owner`, dated `year`.
pub fn mit_license(year: i32, owner: &str) -> String {
    format!(
        r#"MIT License

Copyright (c) {year} {owner}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

/// Writes an MIT `LICENSE` for `owner` into `root`, dated with the current year.
pub fn create_license<P: AsRef<Path>>(root: P, owner: &str, force: bool) -> Result<WriteOutcome> {
    let year = chrono::Local::now().year();
    let outcome = write_file(root.as_ref().join("LICENSE"), &mit_license(year, owner), force)?;
    if outcome == WriteOutcome::Written {
        info!("📜 LICENSE file created for {} (MIT).", owner);
    }
    Ok(outcome)
}
