use crate::types::{FileTypeTag, InstrumentName, TickerSymbol};

/// One accepted input row together with its provenance. Detailed records are
/// kept in encounter order and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedRecord {
    pub ticker: TickerSymbol,
    pub name: InstrumentName,
    pub file_type: FileTypeTag,
    pub exchange: String,
    pub asset_type: String,
    pub listing_date: String,
}
