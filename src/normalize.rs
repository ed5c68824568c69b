//! Normalization - complete every record against the catalog
//!
//! Pure transformation: returns new records, never mutates the input. Filling
//! is idempotent and never overwrites an existing value.

use crate::catalog::{SpecificationCatalog, NOT_SPECIFIED};
use crate::session::ProductRecord;

/// Insert the sentinel for every catalog attribute a record lacks
pub fn fill_defaults(
    records: &[ProductRecord],
    catalog: &SpecificationCatalog,
) -> Vec<ProductRecord> {
    records
        .iter()
        .map(|record| {
            let mut filled = record.clone();
            for attr in catalog.iter() {
                filled
                    .specifications
                    .entry(attr.id.clone())
                    .or_insert_with(|| NOT_SPECIFIED.to_string());
            }
            filled
        })
        .collect()
}

/// True for a value that is present and not the sentinel
pub fn is_filled(value: Option<&String>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != NOT_SPECIFIED)
}
