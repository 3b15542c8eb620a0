pub mod usable_by_engineer;
pub mod waterjet;
