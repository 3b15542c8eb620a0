use std::{any::Any, fmt::Debug};

use tickcache_serde::{BitReader, BitWrite, SerdeErr};

use crate::Tick;

/// Catalog of operation messages, defined by the game.
///
/// The net id is what goes on the wire, so both sides must map ids the same way.
pub trait OperationMessageId: Copy + Ord + Debug + Send + Sync + 'static {
    fn to_net_id(&self) -> u16;

    fn from_net_id(net_id: u16) -> Option<Self>;
}

/// Handles one kind of out-of-band operation sent from host to client
/// (as opposed to per-entity cache state)
pub trait OperationMessageHandler: Any + Send + Sync {
    /// Whether the host has queued data for this message since the last write
    fn has_pending(&self) -> bool;

    /// Writes and drains the queued data
    fn write_data(&mut self, writer: &mut dyn BitWrite);

    fn read_data(&mut self, reader: &mut BitReader, received_host_tick: Tick) -> Result<(), SerdeErr>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
