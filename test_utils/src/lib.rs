use std::fs;
use std::path::Path;

use encoding_rs::EUC_KR;

/// Renders header + rows into CSV bytes (UTF-8, csv-crate quoting rules).
/// Flexible, so fixtures can carry rows shorter than the header.
pub fn csv_bytes_utf8(header: &[&str], rows: &[&[&str]]) -> Vec<u8> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(header).expect("Failed to write header");
    for row in rows {
        writer.write_record(*row).expect("Failed to write row");
    }

    writer.into_inner().expect("Failed to flush CSV writer")
}

/// Writes a KRX-style fixture encoded as EUC-KR, the production encoding.
pub fn write_euc_kr_fixture(path: &Path, header: &[&str], rows: &[&[&str]]) {
    let text = String::from_utf8(csv_bytes_utf8(header, rows)).expect("CSV bytes not UTF-8");

    let (encoded, _, had_errors) = EUC_KR.encode(&text);
    assert!(!had_errors, "Fixture text not representable in EUC-KR");

    fs::write(path, encoded).expect("Failed to write fixture");
}

/// Writes a fixture as plain UTF-8, exercising the decode fallback.
pub fn write_utf8_fixture(path: &Path, header: &[&str], rows: &[&[&str]]) {
    fs::write(path, csv_bytes_utf8(header, rows)).expect("Failed to write fixture");
}

/// Reads an output CSV back as (header, rows).
pub fn read_output_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open output CSV");

    let header = reader
        .headers()
        .expect("Failed to read output header")
        .iter()
        .map(str::to_string)
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("Failed to read output row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    (header, rows)
}
