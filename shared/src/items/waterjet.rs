use tickcache_serde::{BitReader, BitWrite, SerdeErr};

use crate::{
    cache::{change::TrackedField, component_cache::ComponentCache, fields::CacheFields},
    EntityId,
};

/// Water jet of a fire hose or extinguisher, aimed at a target entity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaterjetComponent {
    target_entity_id: Option<EntityId>,
}

impl WaterjetComponent {
    pub fn new(target_entity_id: Option<EntityId>) -> Self {
        Self { target_entity_id }
    }

    pub fn target_entity_id(&self) -> Option<EntityId> {
        self.target_entity_id
    }

    pub fn set_target_entity_id(&mut self, target_entity_id: Option<EntityId>) {
        self.target_entity_id = target_entity_id;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaterjetSnapshot {
    pub target_entity_id: Option<EntityId>,
}

#[derive(Default)]
pub struct WaterjetFields {
    target_entity_id: TrackedField<Option<EntityId>>,
}

impl WaterjetFields {
    pub fn target_entity_id(&self) -> Option<EntityId> {
        *self.target_entity_id.get()
    }
}

impl CacheFields for WaterjetFields {
    type Component = WaterjetComponent;
    type Snapshot = WaterjetSnapshot;

    fn name() -> &'static str {
        "WaterjetData"
    }

    fn from_component(component: &WaterjetComponent) -> Self {
        Self {
            target_entity_id: TrackedField::new(component.target_entity_id()),
        }
    }

    fn check_for_changes(&mut self, component: &WaterjetComponent) -> bool {
        self.target_entity_id.check(&component.target_entity_id())
    }

    fn write(&self, writer: &mut dyn BitWrite, force: bool) {
        self.target_entity_id.write(writer, force);
    }

    fn clear_changes(&mut self) {
        self.target_entity_id.clear_changed();
    }

    fn read(&mut self, reader: &mut BitReader) -> Result<bool, SerdeErr> {
        self.target_entity_id.read(reader)
    }

    fn snapshot(&self) -> WaterjetSnapshot {
        WaterjetSnapshot {
            target_entity_id: self.target_entity_id(),
        }
    }

    fn apply(snapshot: &WaterjetSnapshot, component: &mut WaterjetComponent) {
        component.set_target_entity_id(snapshot.target_entity_id);
    }
}

pub type WaterjetData = ComponentCache<WaterjetFields>;
