use std::any::{Any, TypeId};

/// Identifies a component type on an entity
#[derive(Eq, Hash, Copy, Clone, PartialEq, PartialOrd, Ord, Debug)]
pub struct ComponentKind {
    type_id: TypeId,
}

impl ComponentKind {
    pub fn of<C: Any>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
        }
    }
}

impl From<TypeId> for ComponentKind {
    fn from(type_id: TypeId) -> Self {
        Self { type_id }
    }
}
