pub mod config_repository;
pub mod location;

pub use config_repository::ConfigRepository;
pub use location::PageLocation;
