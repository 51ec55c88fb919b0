use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product clients can pick to try an analysis without typing a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SampleProduct {
    pub id: String,
    pub name: String,
    pub ingredients: String,
}

impl SampleProduct {
    pub fn new(id: &str, name: &str, ingredients: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        }
    }
}
