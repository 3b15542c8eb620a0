use tickcache_serde::{BitReader, BitWrite, SerdeErr};

use crate::{Clock, ComponentKind, EntityId, Tick, WorldMutType, WorldRefType};

/// Delta-state cache for one component of one entity.
///
/// On the host, `prepare_for_update` followed by `update_data` turns the
/// fields that changed since the last tick into a bit stream. On the client,
/// `set_data` queues what was received and `interpolate` applies it once the
/// local clock reaches the host tick it belongs to.
pub trait DataCache: Send + Sync {
    fn kind(&self) -> ComponentKind;

    fn entity(&self) -> EntityId;

    // Host

    /// Recomputes dirty flags, returns whether anything needs to be sent
    fn prepare_for_update(&mut self, world: &dyn WorldRefType, clock: &dyn Clock) -> bool;

    /// Writes the dirty fields, or every field when `force` is set.
    /// A forced write leaves the dirty flags in place.
    fn update_data(&mut self, writer: &mut dyn BitWrite, force: bool);

    // Client

    fn set_data(&mut self, reader: &mut BitReader, received_host_tick: Tick) -> Result<(), SerdeErr>;

    fn interpolate(&mut self, world: &mut dyn WorldMutType, clock: &dyn Clock, received_host_tick: Tick);

    /// Number of received entries not yet applied
    fn history_len(&self) -> usize;
}
