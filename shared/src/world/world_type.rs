use std::any::Any;

use super::{component_kind::ComponentKind, entity::EntityId};

/// Read access to the live simulation state.
///
/// Caches never keep references into the world; they look their component up
/// through this trait on every call, so a component removed between ticks is
/// simply absent.
pub trait WorldRefType {
    fn has_entity(&self, entity: &EntityId) -> bool;

    fn component_of_kind(&self, entity: &EntityId, component_kind: &ComponentKind) -> Option<&dyn Any>;
}

/// Write access to the live simulation state
pub trait WorldMutType: WorldRefType {
    fn component_of_kind_mut(
        &mut self,
        entity: &EntityId,
        component_kind: &ComponentKind,
    ) -> Option<&mut dyn Any>;
}

pub fn component<'w, C: Any, W: WorldRefType + ?Sized>(world: &'w W, entity: &EntityId) -> Option<&'w C> {
    world
        .component_of_kind(entity, &ComponentKind::of::<C>())?
        .downcast_ref::<C>()
}

pub fn component_mut<'w, C: Any, W: WorldMutType + ?Sized>(
    world: &'w mut W,
    entity: &EntityId,
) -> Option<&'w mut C> {
    world
        .component_of_kind_mut(entity, &ComponentKind::of::<C>())?
        .downcast_mut::<C>()
}

pub fn has_component<C: Any, W: WorldRefType + ?Sized>(world: &W, entity: &EntityId) -> bool {
    component::<C, W>(world, entity).is_some()
}
