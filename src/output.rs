use std::io::Write;

use anyhow::{Context, Result};

use crate::record::ProductRecord;

pub const OUTPUT_PATH: &str = "amazon_best_sellers_all_categories.csv";

/// Write a header row plus one row per record. Returns the number of records written.
pub fn write_records<W: Write>(writer: W, records: &[ProductRecord]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(ProductRecord::HEADERS)?;
    for record in records {
        wtr.write_record(record.to_row())
            .with_context(|| format!("Failed to write row for {}", record.url))?;
    }
    wtr.flush()?;
    Ok(records.len())
}
