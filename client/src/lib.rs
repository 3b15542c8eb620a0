//! # Tickcache Client
//! Reads cache packets written by the host into tick-stamped histories, and
//! applies them to the local components as the client clock catches up.

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

mod client_cache_manager;
mod client_config;

pub use client_cache_manager::ClientCacheManager;
pub use client_config::ClientConfig;
