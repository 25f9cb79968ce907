use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{INPUT_FILE_EXTENSION, INPUT_FILE_PREFIX};
use crate::models::Error;

/// Lists the `data_*.csv` files directly under `input_dir`.
///
/// The result is sorted by path rather than left in filesystem order, so the
/// last-write-wins dedup downstream stays deterministic.
pub fn discover_input_files(input_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();

        if !path.is_file() {
            continue;
        }

        let file_name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => continue,
        };

        if file_name.starts_with(INPUT_FILE_PREFIX)
            && path.extension().and_then(|ext| ext.to_str()) == Some(INPUT_FILE_EXTENSION)
        {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}
