//! Specification resolver - maps a free-text product-type query to a catalog
//!
//! Resolution never fails: queries matching no family keyword get the generic
//! catalog. The use-case query is accepted but does not yet alter the result;
//! it is reserved for per-use-case attribute filtering.

use crate::catalog::SpecificationCatalog;
use crate::error::Result;
use crate::family::{self, FamilyDef, FAMILIES};

/// Find the family whose keywords match the query, in registry priority order
pub fn family_for(product_type: &str) -> Option<&'static FamilyDef> {
    let query = product_type.to_lowercase();
    FAMILIES
        .iter()
        .find(|f| f.keywords.iter().any(|kw| query.contains(kw)))
}

/// Resolve the applicable attribute catalog for a product-type/use-case pair
pub fn resolve(product_type: &str, _use_case: &str) -> Result<SpecificationCatalog> {
    let attributes = match family_for(product_type) {
        Some(family) => (family.build_catalog)(),
        None => family::generic_catalog(),
    };
    SpecificationCatalog::new(attributes)
}
