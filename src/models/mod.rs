pub mod dashboard;
pub mod error;
pub mod lookups;
pub mod power;
