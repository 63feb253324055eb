use std::fmt;
use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::discount::{discount_value, is_deep_discount};
use crate::output;
use crate::record::ProductRecord;

/// Largest result set that will be saved. Anything bigger usually means the
/// discount filter has stopped filtering.
pub const CAPACITY: usize = 1500;

/// How a run ended at the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NothingQualified,
    Saved { count: usize },
    Overflow { count: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NothingQualified => {
                write!(f, "No products with discounts greater than 50% were found.")
            }
            Outcome::Saved { count } => write!(
                f,
                "Data for {} products saved to '{}'.",
                count,
                output::OUTPUT_PATH
            ),
            Outcome::Overflow { count } => write!(
                f,
                "Data collection exceeded the limit with {} entries. No file was saved.",
                count
            ),
        }
    }
}

/// Kept records from every category and page, in the order they were found.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<ProductRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ProductRecord) {
        debug_assert!(is_deep_discount(discount_value(&record.sales_discount)));
        self.records.push(record);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Save everything or nothing. `open` is only called when the records are
    /// going to be written, so no file appears on the other outcomes.
    pub fn finish<W, F>(self, open: F) -> Result<Outcome>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        let count = self.records.len();
        if count == 0 {
            return Ok(Outcome::NothingQualified);
        }
        if count > CAPACITY {
            info!("{} records exceed capacity of {}", count, CAPACITY);
            return Ok(Outcome::Overflow { count });
        }
        let written = output::write_records(open()?, &self.records)?;
        Ok(Outcome::Saved { count: written })
    }
}
