use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::patch::{self, double_option};
use crate::shared::validation;

/// Physical shop of the chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: i32,
    pub store_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl Store {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["store_id", "store_name"];

    pub fn validate(&self) -> Result<(), String> {
        validation::required_text(&self.store_name, "store_name", 255)?;
        validation::optional_text(self.phone.as_deref(), "phone", 25)?;
        validation::optional_text(self.email.as_deref(), "email", 255)?;
        validation::optional_text(self.street.as_deref(), "street", 255)?;
        validation::optional_text(self.city.as_deref(), "city", 255)?;
        validation::optional_text(self.state.as_deref(), "state", 10)?;
        validation::optional_text(self.zip_code.as_deref(), "zip_code", 5)?;
        Ok(())
    }

    pub fn apply_patch(&mut self, dto: &StorePatch) -> bool {
        let mut changed = patch::apply(&mut self.store_name, &dto.store_name);
        changed |= patch::apply(&mut self.phone, &dto.phone);
        changed |= patch::apply(&mut self.email, &dto.email);
        changed |= patch::apply(&mut self.street, &dto.street);
        changed |= patch::apply(&mut self.city, &dto.city);
        changed |= patch::apply(&mut self.state, &dto.state);
        changed |= patch::apply(&mut self.zip_code, &dto.zip_code);
        changed
    }
}

impl AggregateRoot for Store {
    fn element_name() -> &'static str {
        "Store"
    }
}

/// PATCH payload; nullable columns accept an explicit `null`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorePatch {
    pub store_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub street: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub zip_code: Option<Option<String>>,
}
