use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::{patch, validation};

/// Product category (Mountain Bikes, Road Bikes, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

impl Category {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["category_id", "category_name"];

    pub fn validate(&self) -> Result<(), String> {
        validation::required_text(&self.category_name, "category_name", 255)
    }

    pub fn apply_patch(&mut self, dto: &CategoryPatch) -> bool {
        patch::apply(&mut self.category_name, &dto.category_name)
    }
}

impl AggregateRoot for Category {
    fn element_name() -> &'static str {
        "Category"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub category_name: Option<String>,
}
