use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents an exchange-assigned short identifier (e.g. `005930`) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the display name of a listed instrument as an owned `String`.
pub type InstrumentName = String;

/// One input CSV row, keyed by header column name. Raw records are ephemeral;
/// they are discarded as soon as the ticker and name have been extracted.
pub type RawRecord = HashMap<String, String>;

/// The deduplicated ticker → name mapping, the primary output artifact.
/// Inserting an already-present ticker overwrites its name (last write wins).
pub type SymbolTable = HashMap<TickerSymbol, InstrumentName>;

/// Classification token taken from the input file name (e.g. `3801` from
/// `data_3801_x.csv`), propagated into the detailed output only.
pub type FileTypeTag = String;
