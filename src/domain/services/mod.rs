pub mod fade_schedule;
pub mod filter_sync;
pub mod validation;

pub use fade_schedule::FadeSchedule;
pub use filter_sync::FilterSync;
pub use validation::{IngredientError, IngredientValidator};
