pub mod allocation;
pub mod holdings;
pub mod performance;
pub mod summary;
