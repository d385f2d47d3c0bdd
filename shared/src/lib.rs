pub mod config;
pub mod identity;
pub mod wire;
pub mod entity;
pub mod repair;
pub mod samples;

pub use config::Config;
pub use identity::{add_to_collection_if_missing, equals_by_id, merge_missing, Identified, Ref};
pub use entity::*;
pub use repair::CalculationRepair;
