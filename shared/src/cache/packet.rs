use tickcache_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

use crate::{CacheNetId, EntityId, Tick};

// Cache packet layout:
//   header: [schema version: u16][host tick: u16]
//   records: ([1][entity id][cache net id][cache payload])*
//   end: [0]

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CachePacketHeader {
    pub schema_version: u16,
    pub tick: Tick,
}

impl Serde for CachePacketHeader {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.schema_version.ser(writer);
        self.tick.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let schema_version = u16::de(reader)?;
        let tick = Tick::de(reader)?;
        Ok(Self {
            schema_version,
            tick,
        })
    }

    fn bit_length(&self) -> u32 {
        self.schema_version.bit_length() + self.tick.bit_length()
    }
}

/// Writes the continue bit and the address of the record that follows
pub fn write_record_header(writer: &mut dyn BitWrite, entity: &EntityId, net_id: CacheNetId) {
    true.ser(writer);
    entity.ser(writer);
    UnsignedVariableInteger::<4>::new(net_id).ser(writer);
}

pub fn write_records_end(writer: &mut dyn BitWrite) {
    false.ser(writer);
}

/// Returns the address of the next record, or `None` at the end marker
pub fn read_record_header(reader: &mut BitReader) -> Result<Option<(EntityId, CacheNetId)>, SerdeErr> {
    if !bool::de(reader)? {
        return Ok(None);
    }
    let entity = EntityId::de(reader)?;
    let net_id = UnsignedVariableInteger::<4>::de(reader)?.to::<CacheNetId>()?;
    Ok(Some((entity, net_id)))
}
