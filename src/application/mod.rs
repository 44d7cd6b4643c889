pub mod events;
pub mod use_case_container;
pub mod use_cases;

pub use events::{PageAction, PageEvent, PageSnapshot};
pub use use_case_container::UseCaseContainer;
