use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{EUC_KR, UTF_8};
use log::info;

use crate::models::Error;
use crate::types::RawRecord;

/// Reads one KRX export into header-keyed records.
///
/// KRX serves these files as cp949; `EUC_KR` in `encoding_rs` is the
/// windows-949 superset covering both labels, tried strictly first. Files
/// that were re-saved as UTF-8 decode on the second attempt. When neither
/// decode succeeds the file yields `Error::DecodeError` and the caller skips
/// it.
pub fn read_krx_csv(path: &Path) -> Result<Vec<RawRecord>, Error> {
    let bytes = fs::read(path)?;

    let (text, encoding_label) =
        decode_krx_bytes(&bytes).ok_or_else(|| Error::DecodeError(path.to_path_buf()))?;

    let records = parse_rows(&text)?;

    info!(
        "{}: read {} records ({})",
        path.display(),
        records.len(),
        encoding_label
    );

    Ok(records)
}

fn decode_krx_bytes(bytes: &[u8]) -> Option<(String, &'static str)> {
    if let Some(text) = EUC_KR.decode_without_bom_handling_and_without_replacement(bytes) {
        return Some((text.into_owned(), "EUC-KR"));
    }

    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| (text.into_owned(), "UTF-8"))
}

fn parse_rows(text: &str) -> Result<Vec<RawRecord>, Error> {
    // Flexible: per-file-type exports differ in column count, and trailing
    // columns are sometimes missing entirely.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let mut record = RawRecord::new();
        for (column, value) in headers.iter().zip(row.iter()) {
            record.insert(column.to_string(), value.to_string());
        }

        records.push(record);
    }

    Ok(records)
}
