use std::path::PathBuf;

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory holding the raw `data_*.csv` exports.
    pub input_dir: PathBuf,
    /// Directory the converted files are written to.
    pub output_dir: PathBuf,
    /// Whether to also write `krx_codes_detailed.csv`.
    pub include_detailed: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            include_detailed: true,
        }
    }
}
