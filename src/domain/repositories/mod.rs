pub mod navigator;

pub use navigator::Navigator;
