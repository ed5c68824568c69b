//! Recommendation synthesis - pick the winner and explain it
//!
//! Template-formatted text, not learned. The four-field structure and the
//! five fixed considerations are part of the contract; ties go to the first
//! maximal product in input order.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecwiseError};
use crate::session::ProductRecord;

/// Fixed, catalog-independent follow-up checks
pub const CONSIDERATIONS: [&str; 5] = [
    "Verify actual product availability and delivery timelines",
    "Check after-sales service and support in your region",
    "Confirm warranty terms and conditions",
    "Compare installation requirements if applicable",
    "Review user reviews and ratings for real-world performance",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Why the winning product leads, referencing brand, score, and use case
    pub reasoning: String,
    /// Batch-level observation referencing the product count
    pub insights: String,
    /// The five fixed considerations
    pub considerations: Vec<String>,
    /// What to do next, naming the winning brand
    pub next_steps: String,
}

/// First product with the maximal score, in input order
pub fn best_product(records: &[ProductRecord]) -> Option<&ProductRecord> {
    records.iter().reduce(|best, current| {
        if current.score_value() > best.score_value() {
            current
        } else {
            best
        }
    })
}

/// Produce a recommendation for a non-empty batch of scored products
pub fn recommend(
    records: &[ProductRecord],
    _product_type: &str,
    use_case: &str,
) -> Result<Recommendation> {
    let best = best_product(records).ok_or(SpecwiseError::EmptyInput)?;

    Ok(Recommendation {
        reasoning: format!(
            "{} offers the best balance of specifications and value for {}. \
             With a suitability score of {}/100, it provides comprehensive \
             features at competitive pricing.",
            best.brand,
            use_case,
            best.score_value()
        ),
        insights: format!(
            "Based on analysis of {} products, {} leads in specification \
             completeness and meets the requirements for {} most effectively.",
            records.len(),
            best.brand,
            use_case
        ),
        considerations: CONSIDERATIONS.iter().map(|s| s.to_string()).collect(),
        next_steps: format!(
            "Contact {} for final pricing and proceed with purchase \
             negotiations. Ensure all specifications match your requirements \
             before finalizing.",
            best.brand
        ),
    })
}
