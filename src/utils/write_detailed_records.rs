use std::path::Path;

use csv::Writer;

use crate::constants::DETAILED_HEADER;
use crate::models::{DetailedRecord, Error};

/// Writes the provenance rows as UTF-8 CSV in their original encounter order.
pub fn write_detailed_records(path: &Path, records: &[DetailedRecord]) -> Result<(), Error> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(DETAILED_HEADER)?;

    for record in records {
        writer.write_record([
            record.ticker.as_str(),
            record.name.as_str(),
            record.file_type.as_str(),
            record.exchange.as_str(),
            record.asset_type.as_str(),
            record.listing_date.as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
