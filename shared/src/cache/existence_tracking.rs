use log::{trace, warn};

use tickcache_serde::{BitReader, BitWrite, SerdeErr};

use crate::{
    component, component_mut, Clock, ComponentKind, EntityId, Tick, WorldMutType, WorldRefType,
};

use super::{change::TrackedField, data_cache::DataCache, fields::CacheFields, history::History};

/// What the client received for one tick: whether the component exists, and
/// its field values when it does
#[derive(Clone, Debug, PartialEq)]
pub struct ExistenceSnapshot<S> {
    pub exists: bool,
    pub fields: Option<S>,
}

/// Cache for a component that may be added to or removed from its entity
/// between ticks.
///
/// The existence flag goes on the wire ahead of the wrapped fields and is
/// tracked like any other field. The wrapped fields are only present, and only
/// written, while the component exists.
pub struct ExistenceTrackingCache<F: CacheFields> {
    entity: EntityId,
    exists: TrackedField<bool>,
    fields: Option<F>,
    // set when the component (re)appears on the host, the client has nothing to diff against
    write_all_fields: bool,
    history: History<ExistenceSnapshot<F::Snapshot>>,
}

impl<F: CacheFields> ExistenceTrackingCache<F> {
    /// Host side, valid whether or not the component currently exists
    pub fn new<W: WorldRefType + ?Sized>(world: &W, entity: &EntityId) -> Self {
        let fields = component::<F::Component, W>(world, entity).map(F::from_component);

        Self {
            entity: *entity,
            exists: TrackedField::new(fields.is_some()),
            fields,
            write_all_fields: false,
            history: History::new(),
        }
    }

    /// Client side, mirrors the local entity until the host says otherwise
    pub fn new_remote<W: WorldRefType + ?Sized>(world: &W, entity: &EntityId) -> Self {
        Self::new(world, entity)
    }

    pub fn exists(&self) -> bool {
        *self.exists.get()
    }

    pub fn fields(&self) -> Option<&F> {
        self.fields.as_ref()
    }

    pub fn history(&self) -> &History<ExistenceSnapshot<F::Snapshot>> {
        &self.history
    }
}

impl<F: CacheFields> DataCache for ExistenceTrackingCache<F> {
    fn kind(&self) -> ComponentKind {
        ComponentKind::of::<F::Component>()
    }

    fn entity(&self) -> EntityId {
        self.entity
    }

    fn prepare_for_update(&mut self, world: &dyn WorldRefType, _clock: &dyn Clock) -> bool {
        let live = component::<F::Component, _>(world, &self.entity);
        let existence_changed = self.exists.check(&live.is_some());

        let Some(live) = live else {
            self.fields = None;
            self.write_all_fields = false;
            return existence_changed;
        };

        if !existence_changed {
            if let Some(fields) = self.fields.as_mut() {
                return fields.check_for_changes(live);
            }
        }

        self.fields = Some(F::from_component(live));
        self.write_all_fields = true;
        true
    }

    fn update_data(&mut self, writer: &mut dyn BitWrite, force: bool) {
        let start = writer.bits_written();

        self.exists.write(writer, force);
        if self.exists() {
            if let Some(fields) = self.fields.as_ref() {
                fields.write(writer, force || self.write_all_fields);
            }
        }

        if !force {
            self.exists.clear_changed();
            if let Some(fields) = self.fields.as_mut() {
                fields.clear_changes();
            }
            self.write_all_fields = false;
        }

        trace!(
            "{}: wrote {} bits for entity {} (exists: {})",
            F::name(),
            writer.bits_written() - start,
            self.entity,
            self.exists()
        );
    }

    fn set_data(&mut self, reader: &mut BitReader, received_host_tick: Tick) -> Result<(), SerdeErr> {
        let existence_changed = self.exists.read(reader)?;

        let mut fields_changed = false;
        if self.exists() {
            let fields = self.fields.get_or_insert_with(F::default);
            fields_changed = fields.read(reader)?;
        } else {
            self.fields = None;
        }

        if existence_changed || fields_changed {
            self.history.push(
                received_host_tick,
                ExistenceSnapshot {
                    exists: self.exists(),
                    fields: self.fields.as_ref().map(F::snapshot),
                },
            );
        }
        Ok(())
    }

    fn interpolate(&mut self, world: &mut dyn WorldMutType, clock: &dyn Clock, _received_host_tick: Tick) {
        while let Some(entry) = self.history.pop_due(clock.current_tick()) {
            let Some(snapshot) = entry.value.fields.as_ref() else {
                continue;
            };
            match component_mut::<F::Component, _>(world, &self.entity) {
                Some(live) => F::apply(snapshot, live),
                None => {
                    warn!(
                        "{}: entity {} has no component to apply tick {} to, skipping",
                        F::name(),
                        self.entity,
                        entry.tick
                    );
                }
            }
        }
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }
}
