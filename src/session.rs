//! Comparison session - the catalog, the product records, and the pipeline
//!
//! A session is created per research request and replaced wholesale when a new
//! one starts. All core operations take the session explicitly; there is no
//! ambient global state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::catalog::SpecificationCatalog;
use crate::error::{Result, SpecwiseError};
use crate::extract::ExtractedProduct;
use crate::normalize;
use crate::recommend::{self, Recommendation};
use crate::resolver;
use crate::score::{self, ScoreBreakdown};

/// One candidate product, extracted from a document or entered manually
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub brand: String,
    /// Attribute id to value; the sentinel marks absent data after normalization
    pub specifications: BTreeMap<String, String>,
    /// File name or "Manual Entry"
    pub source_name: String,
    /// Audit excerpt of the source document, if any
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_excerpt: String,
    /// Set by the scoring pass; never partially populated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub added_at: DateTime<Utc>,
}

impl ProductRecord {
    pub fn new(brand: &str, source_name: &str) -> Self {
        Self {
            brand: brand.to_string(),
            specifications: BTreeMap::new(),
            source_name: source_name.to_string(),
            raw_excerpt: String::new(),
            score: None,
            breakdown: None,
            added_at: Utc::now(),
        }
    }

    pub fn from_extraction(extracted: ExtractedProduct, source_name: &str) -> Self {
        Self {
            brand: extracted.brand,
            specifications: extracted.specifications,
            source_name: source_name.to_string(),
            raw_excerpt: extracted.raw_excerpt,
            score: None,
            breakdown: None,
            added_at: Utc::now(),
        }
    }

    /// Score for ranking; unscored records rank lowest
    pub fn score_value(&self) -> u8 {
        self.score.unwrap_or(0)
    }
}

/// The active comparison: catalog, query strings, and product records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSession {
    pub id: Uuid,
    pub product_type: String,
    pub use_case: String,
    pub catalog: SpecificationCatalog,
    pub records: Vec<ProductRecord>,
    pub created_at: DateTime<Utc>,
}

impl ComparisonSession {
    /// Start a fresh session, resolving the catalog for the query pair
    pub fn new(product_type: &str, use_case: &str) -> Result<Self> {
        let catalog = resolver::resolve(product_type, use_case)?;
        Ok(Self {
            id: Uuid::new_v4(),
            product_type: product_type.to_string(),
            use_case: use_case.to_string(),
            catalog,
            records: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Run the fixed pipeline over all records: fill defaults, then score.
    /// Records are rebuilt, not patched; scoring is all-or-nothing per record.
    pub fn analyze(&mut self) {
        let filled = normalize::fill_defaults(&self.records, &self.catalog);
        self.records = filled
            .into_iter()
            .map(|record| {
                let breakdown = score::score(&record, &self.catalog, &self.product_type);
                ProductRecord {
                    score: Some(breakdown.score),
                    breakdown: Some(breakdown),
                    ..record
                }
            })
            .collect();
    }

    /// Add a manually entered product. Pairs are (attribute id, value);
    /// ids must exist in the catalog, empty values are skipped.
    pub fn add_manual(&mut self, brand: &str, pairs: &[(String, String)]) -> Result<()> {
        let mut record = ProductRecord::new(brand, "Manual Entry");
        for (id, value) in pairs {
            if !self.catalog.contains(id) {
                return Err(SpecwiseError::UnknownAttribute(id.clone()));
            }
            let value = value.trim();
            if !value.is_empty() {
                record
                    .specifications
                    .insert(id.clone(), value.to_string());
            }
        }
        self.records.push(record);
        Ok(())
    }

    /// First record with the maximal score, if any
    pub fn best(&self) -> Option<&ProductRecord> {
        recommend::best_product(&self.records)
    }

    pub fn recommend(&self) -> Result<Recommendation> {
        recommend::recommend(&self.records, &self.product_type, &self.use_case)
    }
}
