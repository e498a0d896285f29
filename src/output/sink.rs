//! Output sinks for the generated stream

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open the output file, truncating unless `append` is set
pub fn open_output(path: &Path, append: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    options
        .open(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))
}
