use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body used by deletes and no-op updates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Created resource echoed back together with a confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Created<T> {
    pub message: String,
    #[serde(flatten)]
    pub item: T,
}

impl<T> Created<T> {
    pub fn new(element_name: &str, item: T) -> Self {
        Self {
            message: format!("{} created successfully", element_name),
            item,
        }
    }
}
