pub mod constants;
pub mod models;
pub mod types;
mod utils;

pub use models::{ConversionSummary, ConverterConfig, DetailedRecord, Error, SymbolCollector};
pub use types::{FileTypeTag, InstrumentName, RawRecord, SymbolTable, TickerSymbol};
pub use utils::{extract_symbol_info, is_valid_ticker};

use std::fs;

use log::{error, info, warn};

use constants::{DETAILED_FILE_NAME, SYMBOL_TABLE_FILE_NAME};
use utils::{
    discover_input_files, file_type_tag, read_krx_csv, write_detailed_records, write_symbol_table,
};

/// Converts every `data_*.csv` under the input directory into the two
/// normalized outputs: `krx_codes.csv` (ticker → name, sorted, deduplicated)
/// and optionally `krx_codes_detailed.csv` (per-row provenance).
///
/// A missing input directory or an empty match set is reported through the
/// returned zero counts, not as an error; hard failures (unreadable
/// directory, output write errors) propagate. A single undecodable or
/// malformed file is logged and skipped so the rest of the batch still
/// converts.
pub fn convert_krx_new_to_csv(config: &ConverterConfig) -> Result<ConversionSummary, Error> {
    info!("Input directory: {}", config.input_dir.display());
    info!("Output directory: {}", config.output_dir.display());

    if !config.input_dir.is_dir() {
        error!(
            "Input directory does not exist: {}",
            config.input_dir.display()
        );
        return Ok(ConversionSummary::default());
    }

    let csv_files = discover_input_files(&config.input_dir)?;

    if csv_files.is_empty() {
        warn!(
            "No {}*.{} files found under {}",
            constants::INPUT_FILE_PREFIX,
            constants::INPUT_FILE_EXTENSION,
            config.input_dir.display()
        );
        return Ok(ConversionSummary::default());
    }

    info!("Discovered {} input files", csv_files.len());

    let mut collector = SymbolCollector::new(config.include_detailed);
    let mut total_records = 0;

    for csv_file in &csv_files {
        let file_type = file_type_tag(csv_file);
        info!("Processing {} (type: {})", csv_file.display(), file_type);

        let records = match read_krx_csv(csv_file) {
            Ok(records) => records,
            Err(err) => {
                // One unreadable file must not sink the rest of the batch.
                error!("{}", err);
                continue;
            }
        };

        total_records += records.len();

        let mut kept = 0;
        for record in &records {
            if collector.collect(record, &file_type) {
                kept += 1;
            }
        }

        info!(
            "{}: kept {} of {} rows",
            csv_file.display(),
            kept,
            records.len()
        );
    }

    info!("Total records: {}", total_records);
    info!(
        "Unique symbols after dedup: {}",
        collector.unique_symbol_count()
    );

    fs::create_dir_all(&config.output_dir)?;

    let symbol_table_path = config.output_dir.join(SYMBOL_TABLE_FILE_NAME);
    write_symbol_table(&symbol_table_path, collector.symbols())?;
    info!(
        "Wrote {} ({} symbols)",
        symbol_table_path.display(),
        collector.unique_symbol_count()
    );

    if config.include_detailed && !collector.detailed_records().is_empty() {
        let detailed_path = config.output_dir.join(DETAILED_FILE_NAME);
        write_detailed_records(&detailed_path, collector.detailed_records())?;
        info!(
            "Wrote {} ({} records)",
            detailed_path.display(),
            collector.detailed_records().len()
        );
    }

    Ok(ConversionSummary {
        total_records,
        unique_symbols: collector.unique_symbol_count(),
    })
}
