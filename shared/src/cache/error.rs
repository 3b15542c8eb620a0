use thiserror::Error;

use tickcache_serde::SerdeErr;

use crate::{CacheNetId, EntityId, Tick};

/// Errors that can occur while building caches or reading cache packets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The entity does not carry the component the cache is meant to track
    #[error("Entity {entity} has no {component} component to cache")]
    ComponentMissing {
        entity: EntityId,
        component: &'static str,
    },

    /// A cache for this component type was already added to the protocol
    #[error("Cache for component {name} is already registered. Each component type can only be cached once")]
    KindAlreadyRegistered { name: &'static str },

    /// Component type was never added to the protocol
    #[error("Component kind not found in registry. Must register its cache via `add_cache()` or `add_existence_tracking_cache()`")]
    KindNotFound,

    /// Incoming packet references a cache net id this side does not know
    #[error("Cache net id {net_id} not found in registry. Host and client protocols must register the same caches in the same order")]
    UnknownNetId { net_id: CacheNetId },

    /// The entity already has a cache for this component type
    #[error("Entity {entity} already has a {component} cache")]
    CacheAlreadyExists {
        entity: EntityId,
        component: &'static str,
    },

    /// Packet was produced by a host with a different cache schema
    #[error("Cache schema mismatch: expected version {expected}, received {received}")]
    SchemaMismatch { expected: u16, received: u16 },

    /// Packet is older than one already received
    #[error("Rejected cache packet for tick {received}, already received tick {last_received}")]
    StaleUpdate { received: Tick, last_received: Tick },

    #[error(transparent)]
    Serde(#[from] SerdeErr),
}
