use crate::constants::{ASSET_TYPE_COLUMN, EXCHANGE_COLUMN, LISTING_DATE_COLUMN};
use crate::models::DetailedRecord;
use crate::types::{FileTypeTag, RawRecord, SymbolTable};
use crate::utils::{extract_symbol_info, is_valid_ticker};

/// Accumulates valid symbols across all input files.
///
/// The symbol table deduplicates by ticker with last-write-wins semantics;
/// the detailed list keeps every accepted row in encounter order.
pub struct SymbolCollector {
    include_detailed: bool,
    symbols: SymbolTable,
    detailed_records: Vec<DetailedRecord>,
}

impl SymbolCollector {
    pub fn new(include_detailed: bool) -> Self {
        Self {
            include_detailed,
            symbols: SymbolTable::new(),
            detailed_records: Vec::new(),
        }
    }

    /// Extracts and validates one raw record. Returns whether it was kept.
    ///
    /// Rows with an invalid ticker or an empty resolved name are dropped
    /// silently; they only show up in the aggregate totals.
    pub fn collect(&mut self, record: &RawRecord, file_type: &FileTypeTag) -> bool {
        let (ticker, name) = extract_symbol_info(record);

        if !is_valid_ticker(&ticker) {
            return false;
        }

        if name.is_empty() {
            return false;
        }

        // A ticker seen again keeps the later name.
        self.symbols.insert(ticker.clone(), name.clone());

        if self.include_detailed {
            self.detailed_records.push(DetailedRecord {
                ticker,
                name,
                file_type: file_type.clone(),
                exchange: trimmed_field(record, EXCHANGE_COLUMN),
                asset_type: trimmed_field(record, ASSET_TYPE_COLUMN),
                listing_date: trimmed_field(record, LISTING_DATE_COLUMN),
            });
        }

        true
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn detailed_records(&self) -> &[DetailedRecord] {
        &self.detailed_records
    }

    pub fn unique_symbol_count(&self) -> usize {
        self.symbols.len()
    }
}

fn trimmed_field(record: &RawRecord, column: &str) -> String {
    record
        .get(column)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
