//! Product family registry - keyword matchers, catalogs, and brand knowledge
//!
//! Families register here as data, not as branches in a dispatch function.
//! The registry is iterated in a fixed priority order; the first family whose
//! keywords match a product-type query wins. Queries matching no family fall
//! back to the generic catalog and brand lists.

use crate::catalog::{AttributeDefinition, Importance, ValueType};

/// A hand-authored unit-bearing extraction pattern, bound to one attribute id
pub struct UnitPattern {
    pub attribute_id: &'static str,
    pub pattern: &'static str,
}

/// A product family: how to recognize it and what it knows
pub struct FamilyDef {
    /// Registry tag, also matched against queries for brand-reputation lookup
    pub tag: &'static str,
    /// Query keywords that select this family's catalog
    pub keywords: &'static [&'static str],
    /// Lower-case brand names searched for in document text
    pub brand_keywords: &'static [&'static str],
    /// Upper-case brands granted the reputation bonus
    pub reputable_brands: &'static [&'static str],
    /// Unit-bearing patterns tried after name/id patterns
    pub unit_patterns: &'static [UnitPattern],
    pub build_catalog: fn() -> Vec<AttributeDefinition>,
}

/// Registry in fixed priority order; first keyword match wins
pub static FAMILIES: &[FamilyDef] = &[
    FamilyDef {
        tag: "elevator",
        keywords: &["elevator", "lift"],
        brand_keywords: &[
            "tk elevator",
            "tke",
            "otis",
            "schindler",
            "kone",
            "mitsubishi",
            "hitachi",
        ],
        reputable_brands: &["TKE", "OTIS", "SCHINDLER", "KONE"],
        unit_patterns: &[
            UnitPattern {
                attribute_id: "capacity",
                pattern: r"(?i)capacity.*?(\d+).*?kg",
            },
            UnitPattern {
                attribute_id: "speed",
                pattern: r"(?i)speed.*?(\d+(?:\.\d+)?).*?mps",
            },
            UnitPattern {
                attribute_id: "stops",
                pattern: r"(?i)stops.*?(\d+)",
            },
        ],
        build_catalog: elevator_catalog,
    },
    FamilyDef {
        tag: "smartphone",
        keywords: &["phone", "smartphone"],
        brand_keywords: &[
            "samsung", "apple", "iphone", "xiaomi", "oneplus", "google", "pixel",
        ],
        reputable_brands: &["APPLE", "SAMSUNG", "GOOGLE"],
        unit_patterns: &[],
        build_catalog: smartphone_catalog,
    },
    FamilyDef {
        tag: "laptop",
        keywords: &["laptop", "notebook"],
        brand_keywords: &["dell", "hp", "lenovo", "apple", "macbook", "asus", "acer"],
        reputable_brands: &["APPLE", "DELL", "HP", "LENOVO"],
        unit_patterns: &[],
        build_catalog: laptop_catalog,
    },
    FamilyDef {
        tag: "air conditioner",
        keywords: &["air conditioner", "ac"],
        brand_keywords: &[],
        reputable_brands: &[],
        unit_patterns: &[],
        build_catalog: air_conditioner_catalog,
    },
];

/// Brands searched in document text when no family list matched.
/// Scanned last, after every family's own list.
pub static GENERIC_BRAND_KEYWORDS: &[&str] = &[
    "samsung",
    "lg",
    "sony",
    "panasonic",
    "philips",
    "bosch",
    "siemens",
];

/// Reputation allow-list for queries matching no family tag
pub static GENERIC_REPUTABLE_BRANDS: &[&str] = &["SIEMENS", "BOSCH", "PHILIPS", "SONY"];

fn attr(
    id: &str,
    name: &str,
    category: &str,
    importance: Importance,
    value_type: ValueType,
) -> AttributeDefinition {
    AttributeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        importance,
        value_type,
    }
}

fn elevator_catalog() -> Vec<AttributeDefinition> {
    use Importance::*;
    use ValueType::*;
    vec![
        // Technical
        attr("capacity", "Load Capacity (KG)", "Technical", High, Number),
        attr("speed", "Speed (MPS)", "Technical", High, Number),
        attr("stops", "Number of Stops", "Technical", High, Number),
        attr("travel_distance", "Travel Distance (m)", "Technical", Medium, Number),
        attr("machine_type", "Machine Type", "Technical", High, Text),
        attr("control_system", "Control System", "Technical", High, Text),
        // Dimensions
        attr("car_size", "Car Size (WxD)", "Dimensions", High, Text),
        attr("door_size", "Door Size (WxH)", "Dimensions", High, Text),
        attr("shaft_size", "Shaft Size (WxD)", "Dimensions", High, Text),
        attr("pit_depth", "Pit Depth (mm)", "Dimensions", Medium, Number),
        attr("overhead", "Overhead Height (mm)", "Dimensions", Medium, Number),
        // Safety
        attr("safety_gear", "Safety Gear System", "Safety", High, Text),
        attr("emergency_brake", "Emergency Brake", "Safety", High, Boolean),
        attr("fire_operation", "Fire Emergency Operation", "Safety", High, Boolean),
        attr("rescue_device", "Automatic Rescue Device", "Safety", Medium, Boolean),
        attr("overspeed", "Overspeed Protection", "Safety", High, Boolean),
        // Commercial
        attr("total_price", "Total Price", "Commercial", High, Currency),
        attr("warranty", "Warranty Period (months)", "Commercial", High, Number),
        attr("delivery_time", "Delivery Time", "Commercial", Medium, Text),
        attr("installation_time", "Installation Time", "Commercial", Medium, Text),
        attr("maintenance_cost", "Annual Maintenance Cost", "Commercial", Medium, Currency),
        // Features
        attr("energy_efficiency", "Energy Efficiency Rating", "Features", Medium, Text),
        attr("display_type", "Display Type", "Features", Low, Text),
        attr("accessibility", "Accessibility Features", "Features", Medium, Text),
        attr("emergency_lighting", "Emergency Lighting", "Features", Medium, Boolean),
        attr("ventilation", "Ventilation System", "Features", Low, Boolean),
    ]
}

fn smartphone_catalog() -> Vec<AttributeDefinition> {
    use Importance::*;
    use ValueType::*;
    vec![
        attr("display_size", "Display Size (inches)", "Display", High, Number),
        attr("resolution", "Resolution", "Display", High, Text),
        attr("processor", "Processor", "Performance", High, Text),
        attr("ram", "RAM (GB)", "Performance", High, Number),
        attr("storage", "Storage (GB)", "Storage", High, Number),
        attr("camera_main", "Main Camera (MP)", "Camera", High, Number),
        attr("battery", "Battery Capacity (mAh)", "Battery", High, Number),
        attr("price", "Price", "Commercial", High, Currency),
    ]
}

fn laptop_catalog() -> Vec<AttributeDefinition> {
    use Importance::*;
    use ValueType::*;
    vec![
        attr("display_size", "Display Size (inches)", "Display", High, Number),
        attr("processor", "Processor", "Performance", High, Text),
        attr("ram", "RAM (GB)", "Performance", High, Number),
        attr("storage", "Storage (GB)", "Storage", High, Number),
        attr("gpu", "Graphics Card", "Performance", Medium, Text),
        attr("battery_life", "Battery Life (hours)", "Battery", Medium, Number),
        attr("weight", "Weight (kg)", "Physical", Medium, Number),
        attr("price", "Price", "Commercial", High, Currency),
    ]
}

fn air_conditioner_catalog() -> Vec<AttributeDefinition> {
    use Importance::*;
    use ValueType::*;
    vec![
        attr("cooling_capacity", "Cooling Capacity (BTU)", "Technical", High, Number),
        attr("energy_rating", "Energy Rating", "Technical", High, Text),
        attr("unit_type", "Unit Type", "Technical", High, Text),
        attr("coverage_area", "Coverage Area (sqm)", "Technical", Medium, Number),
        attr("noise_level", "Noise Level (dB)", "Features", Medium, Number),
        attr("power_consumption", "Power Consumption (W)", "Technical", Medium, Number),
        attr("warranty", "Warranty Period (months)", "Commercial", High, Number),
        attr("price", "Price", "Commercial", High, Currency),
    ]
}

/// Domain-agnostic catalog for queries matching no family
pub fn generic_catalog() -> Vec<AttributeDefinition> {
    use Importance::*;
    use ValueType::*;
    vec![
        attr("price", "Price", "Commercial", High, Currency),
        attr("warranty", "Warranty", "Commercial", High, Text),
        attr("brand", "Brand", "General", Medium, Text),
        attr("model", "Model", "General", Medium, Text),
        attr("weight", "Weight", "Physical", Medium, Number),
        attr("dimensions", "Dimensions", "Physical", Medium, Text),
        attr("power_consumption", "Power Consumption", "Technical", Medium, Text),
        attr("features", "Key Features", "Features", Medium, Text),
    ]
}

/// Reputation allow-list for a product-type query.
/// The query is matched against family tags in registry order; queries
/// containing no tag get the generic list.
pub fn reputable_brands_for(product_type: &str) -> &'static [&'static str] {
    let query = product_type.to_lowercase();
    FAMILIES
        .iter()
        .find(|f| !f.reputable_brands.is_empty() && query.contains(f.tag))
        .map(|f| f.reputable_brands)
        .unwrap_or(GENERIC_REPUTABLE_BRANDS)
}
