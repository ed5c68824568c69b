//! Value extraction - regex heuristics over raw document text
//!
//! This is a heuristic layer, not semantic understanding. Each attribute gets
//! an ordered list of patterns and the first successful match wins; a miss is
//! an absent value, never an error. Callers fill misses with the sentinel
//! later (see `normalize`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::catalog::{AttributeDefinition, SpecificationCatalog, ValueType};
use crate::family::{FamilyDef, FAMILIES, GENERIC_BRAND_KEYWORDS};
use crate::resolver;

/// Brand sentinel when neither keyword scan nor context heuristic matched
pub const UNKNOWN_BRAND: &str = "UNKNOWN";

/// How much raw input is retained for audit alongside structured output
const RAW_EXCERPT_CHARS: usize = 2000;

// Label-token fallback: "(brand|make|manufacturer)" followed by up to 20
// alphabetic/space characters
static BRAND_CONTEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(brand|make|manufacturer).*?([a-z\s]{2,20})")
        .expect("Invalid brand context regex pattern")
});

/// Best-effort structured output for one document
#[derive(Debug, Clone)]
pub struct ExtractedProduct {
    /// Detected brand, upper-cased, or [`UNKNOWN_BRAND`]
    pub brand: String,
    /// Attribute id to raw extracted value; misses are absent keys
    pub specifications: BTreeMap<String, String>,
    /// First 2000 characters of the input, for audit/debugging
    pub raw_excerpt: String,
}

/// Extract a brand and per-attribute values from raw document text
pub fn extract(
    text: &str,
    catalog: &SpecificationCatalog,
    product_type: &str,
) -> ExtractedProduct {
    let lowered = text.to_lowercase();
    let family = resolver::family_for(product_type);

    let mut specifications = BTreeMap::new();
    for attr in catalog.iter() {
        if let Some(value) = extract_attribute(&lowered, attr, family) {
            specifications.insert(attr.id.clone(), value);
        }
    }

    ExtractedProduct {
        brand: detect_brand(&lowered),
        specifications,
        raw_excerpt: text.chars().take(RAW_EXCERPT_CHARS).collect(),
    }
}

/// Scan per-family brand keyword lists in registry order, generic list last;
/// first substring hit wins. Falls back to the label-token heuristic.
pub fn detect_brand(lowered_text: &str) -> String {
    let family_lists = FAMILIES.iter().map(|f| f.brand_keywords);
    for brands in family_lists.chain(std::iter::once(GENERIC_BRAND_KEYWORDS)) {
        for brand in brands {
            if lowered_text.contains(brand) {
                return brand.to_uppercase();
            }
        }
    }

    if let Some(caps) = BRAND_CONTEXT_RE.captures(lowered_text) {
        if let Some(m) = caps.get(2) {
            let candidate = m.as_str().trim();
            if !candidate.is_empty() {
                return candidate.to_uppercase();
            }
        }
    }

    UNKNOWN_BRAND.to_string()
}

/// Try each pattern in rank order; the first capture wins. A capture that
/// coerces to an empty string counts as a miss.
fn extract_attribute(
    lowered_text: &str,
    attr: &AttributeDefinition,
    family: Option<&FamilyDef>,
) -> Option<String> {
    for pattern in attribute_patterns(attr, family) {
        if let Some(caps) = pattern.captures(lowered_text) {
            if let Some(m) = caps.get(1) {
                let raw = m.as_str().trim();
                if raw.is_empty() {
                    return None;
                }
                let value = coerce_value(raw, attr.value_type);
                if value.is_empty() {
                    return None;
                }
                return Some(value);
            }
        }
    }
    None
}

/// Ranked pattern list for one attribute: display name, then id, then any
/// family unit patterns bound to this attribute's id. Display names are
/// escaped so names like "Load Capacity (KG)" stay literal.
fn attribute_patterns(attr: &AttributeDefinition, family: Option<&FamilyDef>) -> Vec<Regex> {
    let mut sources = vec![
        format!(r"(?i){}.*?(\S+)", regex::escape(&attr.name)),
        format!(r"(?i){}.*?(\S+)", regex::escape(&attr.id)),
    ];

    if let Some(family) = family {
        for up in family.unit_patterns {
            if up.attribute_id == attr.id {
                sources.push(up.pattern.to_string());
            }
        }
    }

    sources
        .iter()
        .filter_map(|src| Regex::new(src).ok())
        .collect()
}

/// Lossy per-type coercion of a raw match. Must tolerate malformed input.
fn coerce_value(raw: &str, value_type: ValueType) -> String {
    match value_type {
        ValueType::Number | ValueType::Currency => raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect(),
        ValueType::Boolean => {
            let lowered = raw.to_lowercase();
            if lowered.contains("yes") || lowered.contains("true") || lowered == "1" {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        ValueType::Text | ValueType::Rating => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn test_elevator_capacity_and_speed() {
        let catalog = resolve("elevator", "").unwrap();
        let result = extract("Capacity 1000 KG, Speed 1.5 MPS", &catalog, "elevator");

        assert_eq!(result.specifications.get("capacity").unwrap(), "1000");
        assert_eq!(result.specifications.get("speed").unwrap(), "1.5");
    }

    #[test]
    fn test_brand_keyword_scan() {
        assert_eq!(detect_brand("the new kone monospace 500"), "KONE");
        assert_eq!(detect_brand("powered by a bosch compressor"), "BOSCH");
    }

    #[test]
    fn test_brand_context_fallback() {
        let brand = detect_brand("manufacturer: acme heavy industries");
        assert_ne!(brand, UNKNOWN_BRAND);
        assert!(brand.contains("ACME"));
    }

    #[test]
    fn test_brand_unknown() {
        assert_eq!(detect_brand("0 1 2 3 4"), UNKNOWN_BRAND);
    }

    #[test]
    fn test_boolean_coercion() {
        let catalog = resolve("elevator", "").unwrap();
        let result = extract(
            "Emergency Brake yes, Fire Emergency Operation none",
            &catalog,
            "elevator",
        );

        assert_eq!(result.specifications.get("emergency_brake").unwrap(), "Yes");
        assert_eq!(result.specifications.get("fire_operation").unwrap(), "No");
    }

    #[test]
    fn test_number_coercion_strips_units() {
        let catalog = resolve("smartphone", "").unwrap();
        let result = extract("RAM (GB) 12GB and more", &catalog, "smartphone");
        assert_eq!(result.specifications.get("ram").unwrap(), "12");
    }

    #[test]
    fn test_miss_is_absent_not_error() {
        let catalog = resolve("elevator", "").unwrap();
        let result = extract("nothing relevant here", &catalog, "elevator");
        assert!(!result.specifications.contains_key("capacity"));
    }

    #[test]
    fn test_raw_excerpt_truncated() {
        let catalog = resolve("elevator", "").unwrap();
        let long_text = "x".repeat(5000);
        let result = extract(&long_text, &catalog, "elevator");
        assert_eq!(result.raw_excerpt.chars().count(), 2000);
    }

    #[test]
    fn test_parenthesized_names_stay_literal() {
        // "(KG)" in the display name must not become a capture group
        let catalog = resolve("elevator", "").unwrap();
        let result = extract("load capacity (kg) 2000 for freight", &catalog, "elevator");
        assert_eq!(result.specifications.get("capacity").unwrap(), "2000");
    }
}
