use log::{debug, warn};

use tickcache_shared::{
    read_record_header, tick_greater_than, tick_less_than, BitReader, CacheError, CacheKinds,
    CacheNetId, CachePacketHeader, CacheProtocol, CheckedMap, Clock, ComponentKind, DataCache,
    EntityId, Serde, Tick, WorldMutType, WorldRefType,
};

use crate::ClientConfig;

/// Client-side owner of the caches mirrored from the host.
///
/// Caches are created the first time a record for them arrives. Received
/// values wait in each cache's history until `interpolate` runs with a clock
/// at or past their tick.
pub struct ClientCacheManager {
    config: ClientConfig,
    cache_kinds: CacheKinds,
    schema_version: u16,
    caches: CheckedMap<(EntityId, CacheNetId), Box<dyn DataCache>>,
    last_received_tick: Option<Tick>,
}

impl ClientCacheManager {
    pub fn new(protocol: &CacheProtocol, config: ClientConfig) -> Self {
        if !protocol.is_locked() {
            warn!("ClientCacheManager: created from an unlocked protocol, build() it first");
        }

        Self {
            config,
            cache_kinds: protocol.cache_kinds.clone(),
            schema_version: protocol.schema_version,
            caches: CheckedMap::new(),
            last_received_tick: None,
        }
    }

    /// Reads one cache packet, returns the host tick it was written at.
    ///
    /// A schema mismatch is rejected before any cache is touched. An error
    /// part way through the records leaves the records before it applied.
    pub fn read_update<W: WorldRefType>(&mut self, world: &W, reader: &mut BitReader) -> Result<Tick, CacheError> {
        let header = CachePacketHeader::de(reader)?;
        if header.schema_version != self.schema_version {
            return Err(CacheError::SchemaMismatch {
                expected: self.schema_version,
                received: header.schema_version,
            });
        }

        let tick = header.tick;
        if let Some(last_received) = self.last_received_tick {
            if tick_less_than(tick, last_received) {
                if self.config.reject_stale_updates {
                    return Err(CacheError::StaleUpdate {
                        received: tick,
                        last_received,
                    });
                }
                warn!(
                    "ClientCacheManager: received tick {} after tick {}, the transport delivered cache packets out of order",
                    tick, last_received
                );
            }
        }

        let mut records = 0;
        while let Some((entity, net_id)) = read_record_header(reader)? {
            let component_kind = self.cache_kinds.net_id_to_kind(&net_id)?;

            if !self.caches.contains_key(&(entity, net_id)) {
                let cache = self
                    .cache_kinds
                    .build_client_cache(&component_kind, world, &entity)?;
                self.caches.insert((entity, net_id), cache);
            }
            let Some(cache) = self.caches.get_mut(&(entity, net_id)) else {
                return Err(CacheError::KindNotFound);
            };

            cache.set_data(reader, tick)?;
            records += 1;

            if cache.history_len() > self.config.history_warn_len {
                warn!(
                    "ClientCacheManager: entity {} cache {} holds {} unapplied entries",
                    entity,
                    net_id,
                    cache.history_len()
                );
            }
        }

        match self.last_received_tick {
            Some(last_received) if !tick_greater_than(tick, last_received) => {}
            _ => self.last_received_tick = Some(tick),
        }

        debug!("ClientCacheManager: read {} records for tick {}", records, tick);
        Ok(tick)
    }

    /// Applies every history entry that is due at the clock's current tick.
    /// Does nothing until a packet has been received.
    pub fn interpolate<W: WorldMutType>(&mut self, world: &mut W, clock: &dyn Clock) {
        let Some(last_received) = self.last_received_tick else {
            return;
        };

        for cache in self.caches.values_mut() {
            cache.interpolate(world, clock, last_received);
        }
    }

    /// Drops every cache of the entity, returns how many were dropped
    pub fn remove_entity(&mut self, entity: &EntityId) -> usize {
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

    /// Total number of received entries not yet applied, across all caches
    pub fn pending_history(&self) -> usize {
        self.caches
            .iter()
            .map(|(_, cache)| cache.history_len())
            .sum()
    }

    pub fn last_received_tick(&self) -> Option<Tick> {
        self.last_received_tick
    }
}
