//! Core engine properties: resolution, extraction, normalization, scoring,
//! and recommendation invariants.

use specwise::catalog::{
    AttributeDefinition, Importance, SpecificationCatalog, ValueType, NOT_SPECIFIED,
};
use specwise::error::SpecwiseError;
use specwise::extract::extract;
use specwise::normalize::fill_defaults;
use specwise::recommend::{best_product, recommend};
use specwise::resolver::resolve;
use specwise::score::score;
use specwise::session::ProductRecord;

fn attr(id: &str, importance: Importance) -> AttributeDefinition {
    AttributeDefinition {
        id: id.to_string(),
        name: id.replace('_', " "),
        category: "General".to_string(),
        importance,
        value_type: ValueType::Text,
    }
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn elevator_query_resolves_capacity_attribute() {
    let catalog = resolve("elevator", "office building").unwrap();
    let capacity = catalog.get("capacity").expect("elevator catalog has capacity");

    assert_eq!(capacity.category, "Technical");
    assert_eq!(capacity.importance, Importance::High);
    assert_eq!(capacity.value_type, ValueType::Number);
}

#[test]
fn resolution_never_fails() {
    for query in ["elevator", "PHONE", "gaming laptop", "ac", "quantum toaster", ""] {
        let catalog = resolve(query, "anything").unwrap();
        assert!(!catalog.is_empty(), "query '{}' produced an empty catalog", query);
    }
}

#[test]
fn generic_catalog_has_the_eight_domain_agnostic_attributes() {
    let catalog = resolve("quantum toaster", "").unwrap();
    assert_eq!(catalog.len(), 8);
    for id in [
        "price",
        "warranty",
        "brand",
        "model",
        "weight",
        "dimensions",
        "power_consumption",
        "features",
    ] {
        assert!(catalog.contains(id), "generic catalog missing '{}'", id);
    }
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn extracts_capacity_and_speed_from_sample_text() {
    let catalog = resolve("elevator", "").unwrap();
    let result = extract("Capacity 1000 KG, Speed 1.5 MPS", &catalog, "elevator");

    assert_eq!(result.specifications.get("capacity").unwrap(), "1000");
    assert_eq!(result.specifications.get("speed").unwrap(), "1.5");
}

#[test]
fn extraction_misses_degrade_to_absent_values() {
    let catalog = resolve("elevator", "").unwrap();
    let result = extract("an entirely unrelated memo about lunch", &catalog, "elevator");

    assert!(result.specifications.is_empty());
}

#[test]
fn brand_detection_prefers_keyword_lists_over_context() {
    let catalog = resolve("elevator", "").unwrap();
    let text = "Manufacturer: Some Startup. Built on Schindler components.";
    let result = extract(text, &catalog, "elevator");

    assert_eq!(result.brand, "SCHINDLER");
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn normalized_records_cover_every_catalog_id() {
    let catalog = resolve("elevator", "").unwrap();
    let extracted = extract("Capacity 1000 KG", &catalog, "elevator");
    let record = ProductRecord::from_extraction(extracted, "a.txt");

    let filled = fill_defaults(&[record], &catalog);

    for attr in catalog.iter() {
        assert!(
            filled[0].specifications.contains_key(&attr.id),
            "missing '{}' after fill",
            attr.id
        );
    }
}

#[test]
fn fill_defaults_is_idempotent() {
    let catalog = resolve("smartphone", "").unwrap();
    let record = ProductRecord::new("SAMSUNG", "galaxy.txt");

    let once = fill_defaults(&[record], &catalog);
    let twice = fill_defaults(&once, &catalog);

    assert_eq!(once[0].specifications, twice[0].specifications);
    assert_eq!(once[0].brand, twice[0].brand);
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn score_is_bounded_for_arbitrary_fill_levels() {
    let attrs: Vec<_> = (0..10)
        .map(|i| attr(&format!("a{}", i), Importance::High))
        .collect();
    let catalog = SpecificationCatalog::new(attrs).unwrap();

    for filled_count in 0..=10 {
        let mut record = ProductRecord::new("OTIS", "x.txt");
        for attrdef in catalog.iter().take(filled_count) {
            record
                .specifications
                .insert(attrdef.id.clone(), "v".to_string());
        }
        let breakdown = score(&record, &catalog, "elevator");
        assert!(breakdown.score <= 100);
        assert!(breakdown.score >= 50); // base score floor with no negative terms
    }
}

#[test]
fn empty_product_scores_exactly_fifty() {
    let attrs: Vec<_> = (0..10)
        .map(|i| attr(&format!("a{}", i), Importance::Medium))
        .collect();
    let catalog = SpecificationCatalog::new(attrs).unwrap();
    let record = ProductRecord::new("NOBODY", "x.txt");

    let breakdown = score(&record, &catalog, "mystery gadget");
    assert_eq!(breakdown.score, 50);
    assert_eq!(breakdown.completeness_percent, 0);
    assert_eq!(breakdown.important_covered, 0);
}

#[test]
fn full_reputable_product_scores_exactly_one_hundred() {
    let attrs: Vec<_> = (0..10)
        .map(|i| attr(&format!("a{}", i), Importance::High))
        .collect();
    let catalog = SpecificationCatalog::new(attrs).unwrap();

    let mut record = ProductRecord::new("KONE", "kone.txt");
    for attrdef in catalog.iter() {
        record
            .specifications
            .insert(attrdef.id.clone(), "v".to_string());
    }

    let breakdown = score(&record, &catalog, "elevator");
    assert_eq!(breakdown.score, 100);
    assert_eq!(breakdown.completeness_percent, 100);
    assert_eq!(breakdown.important_covered, 10);
}

#[test]
fn filling_a_high_importance_attribute_never_decreases_score() {
    let attrs: Vec<_> = (0..8)
        .map(|i| {
            attr(
                &format!("a{}", i),
                if i < 4 { Importance::High } else { Importance::Low },
            )
        })
        .collect();
    let catalog = SpecificationCatalog::new(attrs).unwrap();

    let mut record = ProductRecord::new("NOBODY", "x.txt");
    let mut previous = score(&record, &catalog, "widget").score;

    for i in 0..4 {
        record
            .specifications
            .insert(format!("a{}", i), "filled".to_string());
        let current = score(&record, &catalog, "widget").score;
        assert!(current >= previous, "score dropped after filling a{}", i);
        previous = current;
    }
}

#[test]
fn scoring_identical_inputs_is_deterministic() {
    let catalog = resolve("elevator", "").unwrap();
    let extracted = extract(
        "KONE MonoSpace. Capacity 1000 KG, Speed 1.5 MPS, stops 12",
        &catalog,
        "elevator",
    );
    let record = ProductRecord::from_extraction(extracted, "kone.txt");
    let filled = fill_defaults(&[record], &catalog);

    let a = score(&filled[0], &catalog, "elevator");
    let b = score(&filled[0], &catalog, "elevator");
    assert_eq!(a, b);
}

#[test]
fn important_covered_is_uncapped_while_bonus_is_capped() {
    let attrs: Vec<_> = (0..6)
        .map(|i| attr(&format!("a{}", i), Importance::High))
        .collect();
    let catalog = SpecificationCatalog::new(attrs).unwrap();

    let mut record = ProductRecord::new("NOBODY", "x.txt");
    for attrdef in catalog.iter() {
        record
            .specifications
            .insert(attrdef.id.clone(), "v".to_string());
    }

    let breakdown = score(&record, &catalog, "widget");
    // completeness 30 + important capped at 30: 50 + 30 + 30 = 110 -> 100
    assert_eq!(breakdown.score, 100);
    assert_eq!(breakdown.important_covered, 6);
}

// ============================================================================
// Recommendation
// ============================================================================

#[test]
fn recommend_empty_input_fails_explicitly() {
    let result = recommend(&[], "elevator", "office");
    assert!(matches!(result, Err(SpecwiseError::EmptyInput)));
}

#[test]
fn recommend_ties_break_to_first_in_input_order() {
    let mut a = ProductRecord::new("ALPHA", "a.txt");
    a.score = Some(90);
    let mut b = ProductRecord::new("BETA", "b.txt");
    b.score = Some(90);
    let mut c = ProductRecord::new("GAMMA", "c.txt");
    c.score = Some(80);

    let records = vec![a, b, c];
    assert_eq!(best_product(&records).unwrap().brand, "ALPHA");

    let rec = recommend(&records, "elevator", "office").unwrap();
    assert!(rec.next_steps.contains("ALPHA"));
}

#[test]
fn recommendation_has_five_fixed_considerations() {
    let mut record = ProductRecord::new("KONE", "kone.txt");
    record.score = Some(75);

    let rec = recommend(&[record], "elevator", "hospital").unwrap();
    assert_eq!(rec.considerations.len(), 5);
    assert!(rec.considerations[0].contains("availability"));
    assert!(rec.considerations[2].contains("warranty"));
}

// ============================================================================
// Sentinel handling end to end
// ============================================================================

#[test]
fn sentinel_values_never_count_as_filled() {
    let catalog = resolve("smartphone", "").unwrap();
    let record = ProductRecord::new("APPLE", "iphone.txt");
    let filled = fill_defaults(&[record], &catalog);

    assert!(filled[0]
        .specifications
        .values()
        .all(|v| v == NOT_SPECIFIED));

    let breakdown = score(&filled[0], &catalog, "smartphone");
    // reputable brand bonus only: 50 + 0 + 0 + 10
    assert_eq!(breakdown.score, 60);
    assert_eq!(breakdown.completeness_percent, 0);
}
