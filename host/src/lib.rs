//! # Tickcache Host
//! Keeps one delta-state cache per cached component of every registered
//! entity, and each tick writes the fields that changed into a packet for a
//! client.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use tickcache_shared::{
        BitReader, BitWrite, BitWriter, CacheProtocol, Clock, EntityId, GameClock, Serde, SerdeErr,
        Tick,
    };
}

mod host_cache_manager;
mod host_config;

pub use host_cache_manager::HostCacheManager;
pub use host_config::HostConfig;
