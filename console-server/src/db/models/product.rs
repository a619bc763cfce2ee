//! Product Model
//!
//! Catalog entities with storefront-specific field handling: sizes follow a
//! fixed canonical order, brand/category keep unrecognized stored strings
//! intact instead of collapsing them to a literal "Others".

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers::string_or_list;

pub type ProductId = RecordId;

// =============================================================================
// Sizes
// =============================================================================

/// Garment size, ordered XS -> 3XL.
///
/// "All" is a UI toggle only and is never persisted; see
/// [`crate::catalog::sizes::toggle_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    Xs,
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
    #[serde(rename = "3XL")]
    X3l,
}

/// Canonical size order. Size lists are sorted by this, never alphabetically.
pub const SIZE_ORDER: [Size; 7] = [
    Size::Xs,
    Size::S,
    Size::M,
    Size::L,
    Size::Xl,
    Size::Xxl,
    Size::X3l,
];

impl Size {
    /// Position in the canonical order
    pub fn rank(&self) -> usize {
        SIZE_ORDER.iter().position(|s| s == self).unwrap_or(usize::MAX)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
            Size::X3l => "3XL",
        }
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SIZE_ORDER
            .iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown size: {}", s))
    }
}

// =============================================================================
// Brand / Category
// =============================================================================

/// Product brand: a known label or a free-text custom value.
///
/// Serialized as the single stored string. A custom value round-trips
/// unchanged; the "Others" dropdown label is a presentation concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Brand {
    // `skip_deserializing` keeps the derived impl generic over 'de; the
    // `from = "String"` container attribute means this field is never
    // deserialized directly.
    Known(#[serde(skip_deserializing)] &'static str),
    Custom(String),
}

/// Brand labels offered by the editor dropdown
pub const KNOWN_BRANDS: &[&str] = &[
    "Atraxia",
    "BLVCK MNL",
    "FlipTop",
    "Rapollo",
    "RealJokes",
    "Uprising",
    "City Boy Outfitters",
    "Ninetynine Clothing",
    "Got Bars",
    "Hypebeat",
    "Turbohectic",
    "Rx Panda",
    "Low Qual",
    "Payaso",
    "Greedy Bastard",
    "Rebel Doggs Merch",
    "Krwn Manila",
];

impl Brand {
    pub fn as_str(&self) -> &str {
        match self {
            Brand::Known(label) => label,
            Brand::Custom(text) => text,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Brand::Custom(_))
    }
}

impl From<String> for Brand {
    fn from(value: String) -> Self {
        match KNOWN_BRANDS.iter().find(|label| **label == value) {
            Some(label) => Brand::Known(label),
            None => Brand::Custom(value),
        }
    }
}

impl From<Brand> for String {
    fn from(value: Brand) -> Self {
        value.as_str().to_string()
    }
}

/// Product category, same Known/Custom scheme as [`Brand`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    // See `Brand::Known` for why `skip_deserializing` is needed here.
    Known(#[serde(skip_deserializing)] &'static str),
    Custom(String),
}

/// Category labels offered by the editor dropdown
pub const KNOWN_CATEGORIES: &[&str] = &["T-Shirts", "Jackets", "Hoodies", "Cap", "Accessories"];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Known(label) => label,
            Category::Custom(text) => text,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match KNOWN_CATEGORIES.iter().find(|label| **label == value) {
            Some(label) => Category::Known(label),
            None => Category::Custom(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

// =============================================================================
// Product
// =============================================================================

/// Product model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub brand: Brand,
    pub category: Category,
    /// Stored as a text-compatible decimal string
    pub price: Decimal,
    /// One or many image URLs (legacy documents store a single string)
    #[serde(default, with = "string_or_list")]
    pub image: Vec<String>,
    /// Always a subset of [`SIZE_ORDER`], in canonical order
    #[serde(default)]
    pub sizes: Vec<Size>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub brand: Brand,
    pub category: Category,
    pub price: Decimal,
    pub image: Vec<String>,
    pub sizes: Vec<Size>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
    pub image: Option<Vec<String>>,
    pub sizes: Option<Vec<Size>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_brand_parses_to_known_variant() {
        let brand = Brand::from("Rapollo".to_string());
        assert_eq!(brand, Brand::Known("Rapollo"));
        assert!(!brand.is_custom());
    }

    #[test]
    fn custom_brand_round_trips_unchanged() {
        // Saving "CustomCo" and reloading must yield "CustomCo", never the
        // literal dropdown label "Others".
        let brand = Brand::from("CustomCo".to_string());
        assert!(brand.is_custom());
        let json = serde_json::to_string(&brand).unwrap();
        assert_eq!(json, r#""CustomCo""#);
        let back: Brand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Brand::Custom("CustomCo".to_string()));
    }

    #[test]
    fn category_round_trips_known_and_custom() {
        let known: Category = serde_json::from_str(r#""Hoodies""#).unwrap();
        assert_eq!(known, Category::Known("Hoodies"));

        let custom: Category = serde_json::from_str(r#""Stickers""#).unwrap();
        assert_eq!(serde_json::to_string(&custom).unwrap(), r#""Stickers""#);
    }

    #[test]
    fn sizes_serialize_with_storefront_labels() {
        let json = serde_json::to_string(&vec![Size::Xs, Size::X3l]).unwrap();
        assert_eq!(json, r#"["XS","3XL"]"#);
    }

    #[test]
    fn size_rank_follows_canonical_order() {
        assert!(Size::Xs.rank() < Size::S.rank());
        assert!(Size::Xxl.rank() < Size::X3l.rank());
    }
}
