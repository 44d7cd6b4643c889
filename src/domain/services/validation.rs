use crate::domain::entities::IngredientList;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngredientError {
    #[error("⚠️ Please enter at least one ingredient.")]
    Empty,
}

pub struct IngredientValidator;

impl IngredientValidator {
    pub fn validate(raw: &str) -> Result<IngredientList, IngredientError> {
        let ingredients = IngredientList::parse(raw);
        if ingredients.is_empty() {
            return Err(IngredientError::Empty);
        }
        Ok(ingredients)
    }
}
