pub mod app;

pub use app::RecipePageApp;
