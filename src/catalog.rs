//! Attribute catalogs - the set of comparable characteristics for a product type
//!
//! A catalog is an ordered list of attribute definitions, resolved once per
//! research request and read-only afterwards. Every product record in a
//! comparison session is normalized and scored against the same catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, SpecwiseError};

/// Placeholder stored for attributes with no extracted or entered value
pub const NOT_SPECIFIED: &str = "Not specified";

/// Priority weighting of an attribute for scoring and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// How an extracted raw value is coerced before storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Text,
    Number,
    Currency,
    Boolean,
    Rating,
}

/// A single comparable product characteristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Unique id within a catalog, no whitespace
    pub id: String,
    /// Display name
    pub name: String,
    /// Grouping category (e.g., "Technical", "Commercial")
    pub category: String,
    pub importance: Importance,
    pub value_type: ValueType,
}

/// Ordered sequence of attribute definitions for one product-type/use-case pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecificationCatalog {
    attributes: Vec<AttributeDefinition>,
}

impl SpecificationCatalog {
    /// Build a catalog, rejecting structural invariant violations:
    /// duplicate ids, whitespace-bearing ids, or an empty attribute list.
    pub fn new(attributes: Vec<AttributeDefinition>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(SpecwiseError::MalformedCatalog(
                "catalog has no attributes".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for attr in &attributes {
            if attr.id.is_empty() || attr.id.chars().any(char::is_whitespace) {
                return Err(SpecwiseError::MalformedCatalog(format!(
                    "attribute id '{}' contains whitespace or is empty",
                    attr.id
                )));
            }
            if !seen.insert(attr.id.as_str()) {
                return Err(SpecwiseError::MalformedCatalog(format!(
                    "duplicate attribute id '{}'",
                    attr.id
                )));
            }
        }

        Ok(Self { attributes })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Look up an attribute by id
    pub fn get(&self, id: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Attributes grouped by category, categories in first-seen order
    pub fn by_category(&self) -> Vec<(&str, Vec<&AttributeDefinition>)> {
        let mut groups: Vec<(&str, Vec<&AttributeDefinition>)> = Vec::new();
        for attr in &self.attributes {
            match groups.iter_mut().find(|(cat, _)| *cat == attr.category) {
                Some((_, members)) => members.push(attr),
                None => groups.push((attr.category.as_str(), vec![attr])),
            }
        }
        groups
    }

    /// High-importance attributes, in catalog order
    pub fn high_importance(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes
            .iter()
            .filter(|a| a.importance == Importance::High)
    }

    /// Attributes shown in comparison tables and exports (high + medium)
    pub fn display_attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes
            .iter()
            .filter(|a| matches!(a.importance, Importance::High | Importance::Medium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(id: &str) -> AttributeDefinition {
        AttributeDefinition {
            id: id.to_string(),
            name: id.to_string(),
            category: "General".to_string(),
            importance: Importance::Medium,
            value_type: ValueType::Text,
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = SpecificationCatalog::new(vec![attr("price"), attr("price")]);
        assert!(matches!(result, Err(SpecwiseError::MalformedCatalog(_))));
    }

    #[test]
    fn test_rejects_whitespace_id() {
        let result = SpecificationCatalog::new(vec![attr("total price")]);
        assert!(matches!(result, Err(SpecwiseError::MalformedCatalog(_))));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let result = SpecificationCatalog::new(vec![]);
        assert!(matches!(result, Err(SpecwiseError::MalformedCatalog(_))));
    }

    #[test]
    fn test_category_grouping_preserves_order() {
        let mut a = attr("price");
        a.category = "Commercial".to_string();
        let mut b = attr("speed");
        b.category = "Technical".to_string();
        let mut c = attr("warranty");
        c.category = "Commercial".to_string();

        let catalog = SpecificationCatalog::new(vec![a, b, c]).unwrap();
        let groups = catalog.by_category();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Commercial");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Technical");
    }
}
