use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::patch::{self, double_option};
use crate::shared::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl Customer {
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["customer_id", "first_name", "last_name", "email"];

    pub fn validate(&self) -> Result<(), String> {
        validation::required_text(&self.first_name, "first_name", 255)?;
        validation::required_text(&self.last_name, "last_name", 255)?;
        validation::required_text(&self.email, "email", 255)?;
        validation::optional_text(self.phone.as_deref(), "phone", 25)?;
        validation::optional_text(self.street.as_deref(), "street", 255)?;
        validation::optional_text(self.city.as_deref(), "city", 50)?;
        validation::optional_text(self.state.as_deref(), "state", 25)?;
        validation::optional_text(self.zip_code.as_deref(), "zip_code", 11)?;
        Ok(())
    }

    pub fn apply_patch(&mut self, dto: &CustomerPatch) -> bool {
        let mut changed = patch::apply(&mut self.first_name, &dto.first_name);
        changed |= patch::apply(&mut self.last_name, &dto.last_name);
        changed |= patch::apply(&mut self.email, &dto.email);
        changed |= patch::apply(&mut self.phone, &dto.phone);
        changed |= patch::apply(&mut self.street, &dto.street);
        changed |= patch::apply(&mut self.city, &dto.city);
        changed |= patch::apply(&mut self.state, &dto.state);
        changed |= patch::apply(&mut self.zip_code, &dto.zip_code);
        changed
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl AggregateRoot for Customer {
    fn element_name() -> &'static str {
        "Customer"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub street: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub zip_code: Option<Option<String>>,
}

/// Optional list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_limit_is_fifty() {
        let mut customer: Customer = serde_json::from_str(
            r#"{"customer_id": 2, "first_name": "Alice", "last_name": "Wonder",
                "email": "alice@example.com"}"#,
        )
        .unwrap();
        assert!(customer.validate().is_ok());
        customer.city = Some("x".repeat(51));
        assert!(customer.validate().is_err());
    }

    #[test]
    fn test_patch_first_name() {
        let mut customer: Customer = serde_json::from_str(
            r#"{"customer_id": 1, "first_name": "John", "last_name": "Doe",
                "email": "john@example.com"}"#,
        )
        .unwrap();
        let dto: CustomerPatch = serde_json::from_str(r#"{"first_name": "Johnny"}"#).unwrap();
        assert!(customer.apply_patch(&dto));
        assert_eq!(customer.full_name(), "Johnny Doe");
    }
}
