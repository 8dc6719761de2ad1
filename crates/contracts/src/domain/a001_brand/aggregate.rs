use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::{patch, validation};

/// Bicycle brand (Trek, Electra, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: i32,
    pub brand_name: String,
}

impl Brand {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["brand_id", "brand_name"];

    pub fn validate(&self) -> Result<(), String> {
        validation::required_text(&self.brand_name, "brand_name", 255)
    }

    /// Apply a partial update; returns true when a field actually changed
    pub fn apply_patch(&mut self, dto: &BrandPatch) -> bool {
        patch::apply(&mut self.brand_name, &dto.brand_name)
    }
}

impl AggregateRoot for Brand {
    fn element_name() -> &'static str {
        "Brand"
    }
}

/// PATCH payload for a brand
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandPatch {
    pub brand_name: Option<String>,
}
