use log::{debug, trace, warn};

use tickcache_shared::{
    write_record_header, write_records_end, BitWrite, BitWriter, CacheError, CacheKinds,
    CacheMode, CacheNetId, CachePacketHeader, CacheProtocol, CheckedMap, Clock, ComponentKind,
    DataCache, EntityId, Serde, WorldRefType,
};

use crate::HostConfig;

struct HostCacheRecord {
    net_id: CacheNetId,
    cache: Box<dyn DataCache>,
    // the client has no baseline for this cache yet, or a record was deferred
    force_next: bool,
}

/// Host-side owner of every cache sent to one client connection.
///
/// Each tick, `write_update` asks every cache whether its component changed and
/// writes one record per changed cache. Records are ordered by entity, then by
/// cache net id.
pub struct HostCacheManager {
    config: HostConfig,
    cache_kinds: CacheKinds,
    schema_version: u16,
    caches: CheckedMap<(EntityId, CacheNetId), HostCacheRecord>,
}

impl HostCacheManager {
    pub fn new(protocol: &CacheProtocol, config: HostConfig) -> Self {
        if !protocol.is_locked() {
            warn!("HostCacheManager: created from an unlocked protocol, build() it first");
        }

        Self {
            config,
            cache_kinds: protocol.cache_kinds.clone(),
            schema_version: protocol.schema_version,
            caches: CheckedMap::new(),
        }
    }

    /// Builds a cache for every registered kind the entity needs one for:
    /// always for existence-tracking kinds, only when the component is present
    /// for plain kinds. Kinds the entity already has a cache for are left
    /// alone. Returns how many caches were added, 0 for an entity the world
    /// does not know.
    pub fn register_entity<W: WorldRefType>(&mut self, world: &W, entity: &EntityId) -> usize {
        if !world.has_entity(entity) {
            warn!("HostCacheManager: entity {} is not in the world, no caches registered", entity);
            return 0;
        }

        let mut added = 0;

        for component_kind in self.cache_kinds.kinds() {
            if self.has_cache(entity, &component_kind) {
                continue;
            }
            if self.cache_kinds.mode(&component_kind) == Some(CacheMode::Component)
                && world.component_of_kind(entity, &component_kind).is_none()
            {
                continue;
            }
            match self.register_cache(world, entity, &component_kind) {
                Ok(()) => added += 1,
                Err(error) => warn!("HostCacheManager: {}", error),
            }
        }

        debug!("HostCacheManager: registered {} caches for entity {}", added, entity);
        added
    }

    /// Builds the cache for one component kind of one entity. Its first
    /// record carries every field, so the client starts from the host's state.
    pub fn register_cache<W: WorldRefType>(
        &mut self,
        world: &W,
        entity: &EntityId,
        component_kind: &ComponentKind,
    ) -> Result<(), CacheError> {
        let net_id = self.cache_kinds.kind_to_net_id(component_kind)?;
        if self.caches.contains_key(&(*entity, net_id)) {
            return Err(CacheError::CacheAlreadyExists {
                entity: *entity,
                component: self.cache_kinds.kind_to_name(component_kind).unwrap_or("unknown"),
            });
        }

        let cache = self.cache_kinds.build_host_cache(component_kind, world, entity)?;
        self.caches.insert(
            (*entity, net_id),
            HostCacheRecord {
                net_id,
                cache,
                force_next: true,
            },
        );
        Ok(())
    }

    /// Drops every cache of the entity, returns how many were dropped
    pub fn deregister_entity(&mut self, entity: &EntityId) -> usize {
        let before = self.caches.len();
        self.caches.retain(|(cache_entity, _), _| cache_entity != entity);
        before - self.caches.len()
    }

    pub fn has_cache(&self, entity: &EntityId, component_kind: &ComponentKind) -> bool {
        let Ok(net_id) = self.cache_kinds.kind_to_net_id(component_kind) else {
            return false;
        };
        self.caches.contains_key(&(*entity, net_id))
    }

    pub fn cache_count(&self) -> usize {
        self.caches.len()
    }

    /// Number of caches whose next record will carry every field
    pub fn pending_full_records(&self) -> usize {
        self.caches
            .iter()
            .filter(|(_, record)| record.force_next)
            .count()
    }

    /// Writes the delta packet for the clock's current tick.
    ///
    /// A record that would not leave room for the end marker, or that goes
    /// over `max_records_per_update`, is dropped from this packet and sent in
    /// full on the next call. Returns how many records were written.
    pub fn write_update<W: WorldRefType>(&mut self, world: &W, clock: &dyn Clock, writer: &mut BitWriter) -> usize {
        CachePacketHeader {
            schema_version: self.schema_version,
            tick: clock.current_tick(),
        }
        .ser(writer);

        let max_records = self.config.max_records_per_update.unwrap_or(usize::MAX);
        let log_bit_counts = self.config.log_bit_counts;
        let mut written = 0;
        let mut deferred = 0;

        for ((entity, _), record) in self.caches.iter_mut() {
            let changed = record.cache.prepare_for_update(world, clock);
            if !changed && !record.force_next {
                continue;
            }

            if written >= max_records {
                record.force_next = true;
                deferred += 1;
                continue;
            }

            let force = record.force_next;
            let mut scratch = BitWriter::unbounded();
            write_record_header(&mut scratch, entity, record.net_id);
            record.cache.update_data(&mut scratch, force);

            // leave one bit for the end marker
            if scratch.bits_written() >= writer.bits_free() {
                record.force_next = true;
                deferred += 1;
                continue;
            }

            writer.append(&scratch);
            record.force_next = false;
            written += 1;

            if log_bit_counts {
                trace!(
                    "HostCacheManager: entity {} cache {} record is {} bits",
                    entity,
                    record.net_id,
                    scratch.bits_written()
                );
            }
        }

        write_records_end(writer);

        if deferred > 0 {
            debug!(
                "HostCacheManager: tick {}, deferred {} records to the next update",
                clock.current_tick(),
                deferred
            );
        }
        written
    }

    /// Writes every cache in full, for a client that has nothing to diff
    /// against. Dirty flags are not touched, so this can follow `write_update`
    /// in the same tick. Deferred records stay pending for the next
    /// `write_update`. Returns how many records were written.
    pub fn write_full_update(&mut self, clock: &dyn Clock, writer: &mut dyn BitWrite) -> usize {
        CachePacketHeader {
            schema_version: self.schema_version,
            tick: clock.current_tick(),
        }
        .ser(writer);

        let mut written = 0;
        for ((entity, _), record) in self.caches.iter_mut() {
            write_record_header(writer, entity, record.net_id);
            record.cache.update_data(writer, true);
            written += 1;
        }

        write_records_end(writer);

        debug!(
            "HostCacheManager: tick {}, wrote full update of {} records",
            clock.current_tick(),
            written
        );
        written
    }
}
