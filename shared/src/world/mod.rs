pub mod component_kind;
pub mod entity;
pub mod world_type;
