use std::path::Path;

use crate::constants::UNKNOWN_FILE_TYPE;
use crate::types::FileTypeTag;

/// Classification token embedded in the file name: `data_3801_x.csv` → `3801`.
/// Files without an underscore in the stem are tagged `unknown`.
pub fn file_type_tag(path: &Path) -> FileTypeTag {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.split('_').nth(1))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_FILE_TYPE.to_string())
}
