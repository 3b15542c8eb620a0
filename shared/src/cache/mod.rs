pub mod cache_kinds;
pub mod change;
pub mod component_cache;
pub mod data_cache;
pub mod error;
pub mod existence_tracking;
pub mod fields;
pub mod history;
pub mod packet;
