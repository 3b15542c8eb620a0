use crate::{BitReader, BitWrite, SerdeErr};

/// A type that can be written into and read back from a bit stream.
///
/// Encodings carry no type tags or length prefixes: a reader must know which
/// type comes next.
pub trait Serde: Sized + Clone + PartialEq {
    fn ser(&self, writer: &mut dyn BitWrite);

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;

    /// Number of bits `ser` writes for this value
    fn bit_length(&self) -> u32;
}
