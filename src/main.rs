use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use krx_codes::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, SYMBOL_TABLE_FILE_NAME};
use krx_codes::{convert_krx_new_to_csv, ConverterConfig};

/// KRX information-system CSV converter
#[derive(Parser)]
#[command(name = "krx-codes-cli")]
#[command(about = "Convert raw KRX CSV exports into normalized ticker code lists")]
#[command(version)]
struct Cli {
    /// Directory holding the raw data_*.csv exports
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory the converted files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Skip writing krx_codes_detailed.csv
    #[arg(long)]
    no_detailed: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let config = ConverterConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        include_detailed: !cli.no_detailed,
    };

    let summary = match convert_krx_new_to_csv(&config) {
        Ok(summary) => summary,
        Err(err) => {
            error!("Conversion failed: {}", err);
            process::exit(1);
        }
    };

    if summary.unique_symbols == 0 {
        error!("No symbols were converted");
        process::exit(1);
    }

    info!("Conversion complete");
    info!("  Total records: {}", summary.total_records);
    info!("  Unique symbols: {}", summary.unique_symbols);
    info!(
        "  Output: {}",
        config.output_dir.join(SYMBOL_TABLE_FILE_NAME).display()
    );
}
