pub mod filter_sidebar;
pub mod ingredient_form;
pub mod log_manager;
pub mod page_state;
pub mod recipe_cards;

pub use filter_sidebar::FilterSidebar;
pub use ingredient_form::IngredientForm;
pub use log_manager::LogManager;
pub use page_state::PageState;
pub use recipe_cards::RecipeCards;
