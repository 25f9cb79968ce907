use crate::constants::{FULL_NAME_COLUMN, SHORT_NAME_COLUMN, TICKER_COLUMN};
use crate::types::{InstrumentName, RawRecord, TickerSymbol};

/// Pulls the ticker and display name out of one raw record.
///
/// The abbreviated Korean name is preferred; the full name is only consulted
/// when the abbreviated one is blank. A missing column reads as an empty
/// string, never an error.
pub fn extract_symbol_info(record: &RawRecord) -> (TickerSymbol, InstrumentName) {
    let ticker = cleaned_field(record, TICKER_COLUMN);

    let mut name = cleaned_field(record, SHORT_NAME_COLUMN);
    if name.is_empty() {
        name = cleaned_field(record, FULL_NAME_COLUMN);
    }

    (ticker, name)
}

// Some exports double-quote individual fields inside the quoted CSV value.
fn cleaned_field(record: &RawRecord, column: &str) -> String {
    record
        .get(column)
        .map(|value| value.trim().trim_matches('"').to_string())
        .unwrap_or_default()
}
