use std::path::Path;

use csv::Writer;

use crate::constants::SYMBOL_TABLE_HEADER;
use crate::models::Error;
use crate::types::SymbolTable;

/// Writes the deduplicated ticker → name table as UTF-8 CSV, sorted ascending
/// by ticker for a deterministic file regardless of hash order.
pub fn write_symbol_table(path: &Path, symbols: &SymbolTable) -> Result<(), Error> {
    let mut rows: Vec<_> = symbols.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut writer = Writer::from_path(path)?;
    writer.write_record(SYMBOL_TABLE_HEADER)?;

    for (ticker, name) in rows {
        writer.write_record([ticker.as_str(), name.as_str()])?;
    }

    writer.flush()?;

    Ok(())
}
