use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::patch::{self, double_option};
use crate::shared::validation;

/// Employee working at a store; may report to another staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub active: bool,
    pub store_id: i32,
    #[serde(default)]
    pub manager_id: Option<i32>,
}

impl Staff {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "staff_id",
        "first_name",
        "last_name",
        "email",
        "active",
        "store_id",
    ];

    pub fn validate(&self) -> Result<(), String> {
        validation::required_text(&self.first_name, "first_name", 50)?;
        validation::required_text(&self.last_name, "last_name", 50)?;
        validation::required_text(&self.email, "email", 255)?;
        validation::optional_text(self.phone.as_deref(), "phone", 25)?;
        if self.manager_id == Some(self.staff_id) {
            return Err("A staff member cannot be their own manager".into());
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, dto: &StaffPatch) -> bool {
        let mut changed = patch::apply(&mut self.first_name, &dto.first_name);
        changed |= patch::apply(&mut self.last_name, &dto.last_name);
        changed |= patch::apply(&mut self.email, &dto.email);
        changed |= patch::apply(&mut self.phone, &dto.phone);
        changed |= patch::apply(&mut self.active, &dto.active);
        changed |= patch::apply(&mut self.store_id, &dto.store_id);
        changed |= patch::apply(&mut self.manager_id, &dto.manager_id);
        changed
    }
}

impl AggregateRoot for Staff {
    fn element_name() -> &'static str {
        "Staff member"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    pub active: Option<bool>,
    pub store_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub manager_id: Option<Option<i32>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffFilter {
    pub store_id: Option<i32>,
    pub active: Option<bool>,
}
