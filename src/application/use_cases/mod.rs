pub mod card_operations;
pub mod filter_operations;
pub mod ingredient_operations;

pub use card_operations::*;
pub use filter_operations::*;
pub use ingredient_operations::*;
