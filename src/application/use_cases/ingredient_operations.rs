use crate::domain::{
    entities::{Chip, IngredientList},
    services::{IngredientError, IngredientValidator},
};

#[derive(Default)]
pub struct PreviewIngredients;

impl PreviewIngredients {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, raw: &str) -> Vec<Chip> {
        IngredientList::parse(raw).chips()
    }
}

#[derive(Default)]
pub struct ValidateIngredients;

impl ValidateIngredients {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, raw: &str) -> Result<Vec<Chip>, IngredientError> {
        match IngredientValidator::validate(raw) {
            Ok(ingredients) => {
                tracing::info!("Submitting {} ingredients", ingredients.len());
                Ok(ingredients.chips())
            }
            Err(e) => {
                tracing::warn!("Blocked submission: {}", e);
                Err(e)
            }
        }
    }
}
