/// Cache protocol and operation messages shared by the integration tests

use std::any::Any;

use tickcache_shared::{
    BitReader, BitWrite, CacheProtocol, EntityId, OperationMessageHandler, OperationMessageId,
    Serde, SerdeErr, Tick, UnsignedVariableInteger, UsableByEngineerFields, WaterjetFields,
};

pub const TEST_SCHEMA_VERSION: u16 = 3;

pub fn protocol() -> CacheProtocol {
    CacheProtocol::builder()
        .schema_version(TEST_SCHEMA_VERSION)
        .add_cache::<WaterjetFields>()
        .add_existence_tracking_cache::<UsableByEngineerFields>()
        .build()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestOperation {
    SpawnEffect,
    RepairItem,
}

impl OperationMessageId for TestOperation {
    fn to_net_id(&self) -> u16 {
        match self {
            TestOperation::SpawnEffect => 0,
            TestOperation::RepairItem => 1,
        }
    }

    fn from_net_id(net_id: u16) -> Option<Self> {
        match net_id {
            0 => Some(TestOperation::SpawnEffect),
            1 => Some(TestOperation::RepairItem),
            _ => None,
        }
    }
}

fn write_count(writer: &mut dyn BitWrite, count: usize) {
    UnsignedVariableInteger::<3>::new(count as u64).ser(writer);
}

fn read_count(reader: &mut BitReader) -> Result<usize, SerdeErr> {
    UnsignedVariableInteger::<3>::de(reader)?.to::<usize>()
}

/// Plays a visual effect by id
#[derive(Default)]
pub struct EffectHandler {
    pub queued: Vec<u8>,
    pub received: Vec<(Tick, u8)>,
}

impl OperationMessageHandler for EffectHandler {
    fn has_pending(&self) -> bool {
        !self.queued.is_empty()
    }

    fn write_data(&mut self, writer: &mut dyn BitWrite) {
        write_count(writer, self.queued.len());
        for effect in self.queued.drain(..) {
            effect.ser(writer);
        }
    }

    fn read_data(&mut self, reader: &mut BitReader, received_host_tick: Tick) -> Result<(), SerdeErr> {
        for _ in 0..read_count(reader)? {
            self.received.push((received_host_tick, u8::de(reader)?));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Restores an item entity to working order
#[derive(Default)]
pub struct RepairHandler {
    pub queued: Vec<EntityId>,
    pub received: Vec<(Tick, EntityId)>,
}

impl OperationMessageHandler for RepairHandler {
    fn has_pending(&self) -> bool {
        !self.queued.is_empty()
    }

    fn write_data(&mut self, writer: &mut dyn BitWrite) {
        write_count(writer, self.queued.len());
        for entity in self.queued.drain(..) {
            entity.ser(writer);
        }
    }

    fn read_data(&mut self, reader: &mut BitReader, received_host_tick: Tick) -> Result<(), SerdeErr> {
        for _ in 0..read_count(reader)? {
            self.received.push((received_host_tick, EntityId::de(reader)?));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
