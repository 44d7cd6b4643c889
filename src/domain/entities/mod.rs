pub mod card_fade;
pub mod config;
pub mod filter;
pub mod ingredients;
pub mod query;

pub use card_fade::{CardFade, CardVisual};
pub use config::{PageConfig, ThemeMode};
pub use filter::{FilterCheckbox, FilterGroup, FilterState};
pub use ingredients::{Chip, IngredientList};
pub use query::QueryParameters;
