//! Scoring engine - fixed-weight suitability heuristic
//!
//! Pure and deterministic given its inputs. Scores are recomputed from
//! scratch on every pass; nothing is incrementally patched.

use serde::{Deserialize, Serialize};

use crate::catalog::SpecificationCatalog;
use crate::family;
use crate::normalize::is_filled;
use crate::session::ProductRecord;

/// Every product starts here
const BASE_SCORE: f64 = 50.0;
/// Weight of the completeness term
const COMPLETENESS_WEIGHT: f64 = 30.0;
/// Points per filled high-importance attribute
const IMPORTANT_POINTS: u32 = 10;
/// Cap on the high-importance term; at most 3 attributes drive it
const IMPORTANT_CAP: u32 = 30;
/// Flat bonus for a brand on the family allow-list
const BRAND_BONUS: f64 = 10.0;

/// Derived scoring result, recomputed on every pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Final suitability score, 0-100
    pub score: u8,
    /// Share of catalog attributes with a non-sentinel value, 0-100
    pub completeness_percent: u8,
    /// High-importance attributes with a non-sentinel value (uncapped)
    pub important_covered: usize,
}

/// Score one product against the full catalog
pub fn score(
    record: &ProductRecord,
    catalog: &SpecificationCatalog,
    product_type: &str,
) -> ScoreBreakdown {
    let total = catalog.len();
    let filled = catalog
        .iter()
        .filter(|attr| is_filled(record.specifications.get(&attr.id)))
        .count();

    let completeness = filled as f64 / total as f64 * COMPLETENESS_WEIGHT;

    let important_covered = catalog
        .high_importance()
        .filter(|attr| is_filled(record.specifications.get(&attr.id)))
        .count();
    let important_bonus = (important_covered as u32 * IMPORTANT_POINTS).min(IMPORTANT_CAP);

    let brand_bonus = if is_reputable(&record.brand, product_type) {
        BRAND_BONUS
    } else {
        0.0
    };

    let raw = BASE_SCORE + completeness + f64::from(important_bonus) + brand_bonus;

    ScoreBreakdown {
        score: raw.round().clamp(0.0, 100.0) as u8,
        completeness_percent: (filled as f64 / total as f64 * 100.0).round() as u8,
        important_covered,
    }
}

/// Brand reputation check against the per-family allow-list
pub fn is_reputable(brand: &str, product_type: &str) -> bool {
    let upper = brand.to_uppercase();
    family::reputable_brands_for(product_type)
        .iter()
        .any(|b| *b == upper)
}
