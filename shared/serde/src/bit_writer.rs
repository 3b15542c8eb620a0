pub const MTU_SIZE_BYTES: usize = 576;
pub const MTU_SIZE_BITS: u32 = (MTU_SIZE_BYTES * 8) as u32;

pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);
    fn write_byte(&mut self, byte: u8);
    fn bits_written(&self) -> u32;
}

/// Writes bits LSB-first into a growable byte buffer.
///
/// The bit budget is advisory: nothing stops a caller from writing past it,
/// so callers that care about packet size check `bits_free()` first.
#[derive(Clone)]
pub struct BitWriter {
    scratch: u8,
    scratch_index: u8,
    buffer: Vec<u8>,
    bits_written: u32,
    max_bits: Option<u32>,
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Creates a writer bounded by a single MTU
    pub fn new() -> Self {
        Self::with_max_bits(MTU_SIZE_BITS)
    }

    pub fn with_max_bits(max_bits: u32) -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::new(),
            bits_written: 0,
            max_bits: Some(max_bits),
        }
    }

    /// Creates a writer without a bit budget, used for full-state payloads
    /// that the transport fragments on its own
    pub fn unbounded() -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::with_capacity(MTU_SIZE_BYTES),
            bits_written: 0,
            max_bits: None,
        }
    }

    pub fn bits_free(&self) -> u32 {
        match self.max_bits {
            Some(max_bits) => max_bits.saturating_sub(self.bits_written),
            None => u32::MAX,
        }
    }

    /// Copies every bit written into `other` onto the end of this writer
    pub fn append(&mut self, other: &BitWriter) {
        for index in 0..other.bits_written {
            self.write_bit(other.bit_at(index));
        }
    }

    fn bit_at(&self, index: u32) -> bool {
        let byte_index = (index / 8) as usize;
        let byte = if byte_index < self.buffer.len() {
            self.buffer[byte_index]
        } else {
            self.scratch
        };
        (byte >> (index % 8)) & 1 != 0
    }

    pub fn to_bytes(mut self) -> Vec<u8> {
        if self.scratch_index > 0 {
            self.buffer.push(self.scratch);
            self.scratch = 0;
            self.scratch_index = 0;
        }
        self.buffer
    }
}

impl BitWrite for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        if bit {
            self.scratch |= 1 << self.scratch_index;
        }

        self.scratch_index += 1;
        self.bits_written += 1;

        if self.scratch_index >= 8 {
            self.buffer.push(self.scratch);
            self.scratch = 0;
            self.scratch_index = 0;
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let mut temp = byte;
        for _ in 0..8 {
            self.write_bit(temp & 1 != 0);
            temp >>= 1;
        }
    }

    fn bits_written(&self) -> u32 {
        self.bits_written
    }
}
