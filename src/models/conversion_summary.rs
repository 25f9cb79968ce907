/// Aggregate counts for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Every row read from every input file, before validation.
    pub total_records: usize,
    /// Symbol table size after validation and dedup.
    pub unique_symbols: usize,
}
