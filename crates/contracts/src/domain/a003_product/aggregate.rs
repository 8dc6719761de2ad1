use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::money::{self, PRICE_SCALE};
use crate::shared::{patch, validation};

/// Upper bound of a price column (10 digits, 2 of them fractional)
const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Product of the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub brand_id: i32,
    pub category_id: i32,
    pub model_year: i16,
    pub list_price: Decimal,
}

impl Product {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "brand_id",
        "category_id",
        "model_year",
        "list_price",
    ];

    pub fn validate(&self) -> Result<(), String> {
        validation::required_text(&self.product_name, "product_name", 255)?;
        if self.list_price.is_sign_negative() {
            return Err("list_price must not be negative".into());
        }
        if self.list_price >= MAX_PRICE {
            return Err("list_price must have at most 8 integer digits".into());
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, dto: &ProductPatch) -> bool {
        let mut changed = patch::apply(&mut self.product_name, &dto.product_name);
        changed |= patch::apply(&mut self.brand_id, &dto.brand_id);
        changed |= patch::apply(&mut self.category_id, &dto.category_id);
        changed |= patch::apply(&mut self.model_year, &dto.model_year);
        changed |= patch::apply(&mut self.list_price, &dto.list_price);
        changed
    }

    /// Hook before write: normalize the price scale
    pub fn before_write(&mut self) {
        self.list_price = money::with_scale(self.list_price, PRICE_SCALE);
    }
}

impl AggregateRoot for Product {
    fn element_name() -> &'static str {
        "Product"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub brand_id: Option<i32>,
    pub category_id: Option<i32>,
    pub model_year: Option<i16>,
    pub list_price: Option<Decimal>,
}

/// Product as returned by the API, with brand and category names resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub product_id: i32,
    pub product_name: String,
    pub brand_id: i32,
    pub brand_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub model_year: i16,
    pub list_price: Decimal,
}

// ============================================================================
// List parameters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortField {
    ProductName,
    ListPrice,
    ModelYear,
}

impl ProductSortField {
    pub const ALL: [ProductSortField; 3] = [
        ProductSortField::ProductName,
        ProductSortField::ListPrice,
        ProductSortField::ModelYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSortField::ProductName => "product_name",
            ProductSortField::ListPrice => "list_price",
            ProductSortField::ModelYear => "model_year",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("Invalid sort field. Allowed: {}", allowed.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Validated filters of the product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub brand_id: Option<i32>,
    pub category_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<(ProductSortField, SortOrder)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn trek_820() -> Product {
        Product {
            product_id: 1,
            product_name: "Trek 820 - 2016".into(),
            brand_id: 9,
            category_id: 6,
            model_year: 2016,
            list_price: Decimal::from_str("379.99").unwrap(),
        }
    }

    #[test]
    fn test_patch_with_same_values_is_no_change() {
        let mut product = trek_820();
        let dto = ProductPatch {
            product_name: Some("Trek 820 - 2016".into()),
            list_price: Some(Decimal::from_str("379.990").unwrap()),
            ..Default::default()
        };
        assert!(!product.apply_patch(&dto));
    }

    #[test]
    fn test_patch_changes_fields() {
        let mut product = trek_820();
        let dto = ProductPatch {
            category_id: Some(7),
            list_price: Some(Decimal::from_str("105.5").unwrap()),
            ..Default::default()
        };
        assert!(product.apply_patch(&dto));
        product.before_write();
        assert_eq!(product.category_id, 7);
        assert_eq!(product.list_price.to_string(), "105.50");
    }

    #[test]
    fn test_validate_price() {
        let mut product = trek_820();
        product.list_price = Decimal::from_str("-1").unwrap();
        assert!(product.validate().is_err());
        product.list_price = Decimal::from_str("100000000").unwrap();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_price_accepts_number_or_string() {
        let json = r#"{"product_id": 5, "product_name": "X", "brand_id": 1,
            "category_id": 1, "model_year": 2025, "list_price": 2500.75}"#;
        let from_number: Product = serde_json::from_str(json).unwrap();
        let from_string: Product =
            serde_json::from_str(&json.replace("2500.75", "\"2500.75\"")).unwrap();
        assert_eq!(from_number.list_price, from_string.list_price);
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(
            ProductSortField::parse("model_year"),
            Ok(ProductSortField::ModelYear)
        );
        assert_eq!(
            ProductSortField::parse("invalid_field").unwrap_err(),
            "Invalid sort field. Allowed: product_name, list_price, model_year"
        );
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Asc);
    }
}
