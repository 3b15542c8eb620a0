//! # Tickcache Shared
//! Per-entity delta-state caches, their wire framing, and the operation
//! message registry, shared between tickcache-host & tickcache-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use tickcache_serde::{
    BitReader, BitWrite, BitWriter, Serde, SerdeErr, SerdeInteger, SignedInteger,
    SignedVariableInteger, UnsignedInteger, UnsignedVariableInteger, MTU_SIZE_BITS, MTU_SIZE_BYTES,
};

mod cache;
mod checked_map;
mod clock;
mod items;
mod messages;
mod protocol;
mod tick;
mod types;
mod world;

pub use cache::{
    cache_kinds::{CacheKinds, CacheMode},
    change::{check_changed_and_read, check_for_changes, write_changes, TrackedField},
    component_cache::ComponentCache,
    data_cache::DataCache,
    error::CacheError,
    existence_tracking::{ExistenceSnapshot, ExistenceTrackingCache},
    fields::CacheFields,
    history::{History, HistoryEntry},
    packet::{read_record_header, write_record_header, write_records_end, CachePacketHeader},
};
pub use checked_map::CheckedMap;
pub use clock::{Clock, GameClock};
pub use items::{
    usable_by_engineer::{
        UsableByEngineerComponent, UsableByEngineerData, UsableByEngineerFields,
        UsableByEngineerSnapshot,
    },
    waterjet::{WaterjetComponent, WaterjetData, WaterjetFields, WaterjetSnapshot},
};
pub use messages::{
    error::OperationMessageError,
    handler_manager::OperationMessageHandlerManager,
    operation_message::{OperationMessageHandler, OperationMessageId},
};
pub use protocol::{CacheProtocol, ProtocolError, ProtocolPlugin};
pub use tick::{tick_diff, tick_greater_than, tick_less_than, tick_reached};
pub use types::{CacheNetId, HostType, Tick};
pub use world::{
    component_kind::ComponentKind,
    entity::EntityId,
    world_type::{component, component_mut, has_component, WorldMutType, WorldRefType},
};
