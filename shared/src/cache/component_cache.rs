use log::{error, trace};

use tickcache_serde::{BitReader, BitWrite, SerdeErr};

use crate::{
    component, component_mut, Clock, ComponentKind, EntityId, Tick, WorldMutType, WorldRefType,
};

use super::{
    data_cache::DataCache, error::CacheError, fields::CacheFields, history::History,
};

/// Cache for a component that is expected to live as long as its entity.
///
/// Losing the component while the cache exists is a lifecycle bug elsewhere:
/// it is logged and the cache stops sending, but stays usable. Components that
/// come and go belong in an `ExistenceTrackingCache`.
pub struct ComponentCache<F: CacheFields> {
    entity: EntityId,
    fields: F,
    history: History<F::Snapshot>,
}

impl<F: CacheFields> ComponentCache<F> {
    /// Host side: the entity must carry the component
    pub fn new<W: WorldRefType + ?Sized>(world: &W, entity: &EntityId) -> Result<Self, CacheError> {
        let Some(component) = component::<F::Component, W>(world, entity) else {
            return Err(CacheError::ComponentMissing {
                entity: *entity,
                component: F::name(),
            });
        };

        Ok(Self {
            entity: *entity,
            fields: F::from_component(component),
            history: History::new(),
        })
    }

    /// Client side: starts from the local component when there is one,
    /// otherwise from the default shadow state
    pub fn new_remote<W: WorldRefType + ?Sized>(world: &W, entity: &EntityId) -> Self {
        let fields = component::<F::Component, W>(world, entity)
            .map(F::from_component)
            .unwrap_or_default();

        Self {
            entity: *entity,
            fields,
            history: History::new(),
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn history(&self) -> &History<F::Snapshot> {
        &self.history
    }
}

impl<F: CacheFields> DataCache for ComponentCache<F> {
    fn kind(&self) -> ComponentKind {
        ComponentKind::of::<F::Component>()
    }

    fn entity(&self) -> EntityId {
        self.entity
    }

    fn prepare_for_update(&mut self, world: &dyn WorldRefType, _clock: &dyn Clock) -> bool {
        match component::<F::Component, _>(world, &self.entity) {
            Some(component) => self.fields.check_for_changes(component),
            None => {
                error!(
                    "{}: entity {} lost its component, this cache is no longer usable for that entity",
                    F::name(),
                    self.entity
                );
                false
            }
        }
    }

    fn update_data(&mut self, writer: &mut dyn BitWrite, force: bool) {
        let start = writer.bits_written();

        self.fields.write(writer, force);
        if !force {
            self.fields.clear_changes();
        }

        trace!(
            "{}: wrote {} bits for entity {}",
            F::name(),
            writer.bits_written() - start,
            self.entity
        );
    }

    fn set_data(&mut self, reader: &mut BitReader, received_host_tick: Tick) -> Result<(), SerdeErr> {
        let start = reader.bits_read();

        if self.fields.read(reader)? {
            self.history.push(received_host_tick, self.fields.snapshot());
        }

        trace!(
            "{}: read {} bits for entity {}",
            F::name(),
            reader.bits_read() - start,
            self.entity
        );
        Ok(())
    }

    fn interpolate(&mut self, world: &mut dyn WorldMutType, clock: &dyn Clock, _received_host_tick: Tick) {
        if self.history.is_empty() {
            return;
        }
        let Some(component) = component_mut::<F::Component, _>(world, &self.entity) else {
            return;
        };

        while let Some(entry) = self.history.pop_due(clock.current_tick()) {
            F::apply(&entry.value, component);
        }
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }
}
