use crate::{BitReader, BitWrite, Serde, SerdeErr};

pub type UnsignedInteger<const BITS: u8> = SerdeInteger<false, false, BITS>;
pub type SignedInteger<const BITS: u8> = SerdeInteger<true, false, BITS>;
pub type UnsignedVariableInteger<const BITS: u8> = SerdeInteger<false, true, BITS>;
pub type SignedVariableInteger<const BITS: u8> = SerdeInteger<true, true, BITS>;

/// An integer written with a configurable number of bits.
///
/// Fixed integers always take `BITS` bits (plus a sign bit when `SIGNED`).
/// Variable integers are written as `BITS`-wide groups, least significant
/// first, each group preceded by a bit saying whether another group follows.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SerdeInteger<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> {
    value: i128,
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> SerdeInteger<SIGNED, VARIABLE, BITS> {
    /// Creates a new integer, checking that `value` fits the encoding
    pub fn try_new<T: Into<i128>>(value: T) -> Result<Self, SerdeErr> {
        let value = value.into();
        Self::check_bits();

        let out_of_range = SerdeErr::OutOfRange {
            value,
            bits: BITS,
            signed: SIGNED,
        };

        if !SIGNED && value < 0 {
            return Err(out_of_range);
        }
        if !VARIABLE && value.unsigned_abs() >= 1u128 << BITS {
            return Err(out_of_range);
        }

        Ok(Self { value })
    }

    /// Creates a new integer
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit the encoding.
    /// Consider using `try_new` for non-panicking error handling.
    pub fn new<T: Into<i128>>(value: T) -> Self {
        match Self::try_new(value) {
            Ok(integer) => integer,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn get(&self) -> i128 {
        self.value
    }

    /// Converts the contained value into a concrete integer type
    pub fn to<T: TryFrom<i128>>(&self) -> Result<T, SerdeErr> {
        T::try_from(self.value).map_err(|_| SerdeErr::InvalidConversion {
            value: self.value,
            type_name: std::any::type_name::<T>(),
        })
    }

    fn check_bits() {
        if BITS == 0 || BITS > 127 {
            panic!("SerdeInteger must use between 1 and 127 bits, got {}", BITS);
        }
    }

    fn write_bits(writer: &mut dyn BitWrite, mut value: u128) -> u128 {
        for _ in 0..BITS {
            writer.write_bit(value & 1 != 0);
            value >>= 1;
        }
        value
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> Serde for SerdeInteger<SIGNED, VARIABLE, BITS> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        if SIGNED {
            writer.write_bit(self.value < 0);
        }

        let mut magnitude = self.value.unsigned_abs();

        if VARIABLE {
            loop {
                let proceed = magnitude >= 1u128 << BITS;
                writer.write_bit(proceed);
                magnitude = Self::write_bits(writer, magnitude);
                if !proceed {
                    return;
                }
            }
        } else {
            Self::write_bits(writer, magnitude);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Self::check_bits();

        let negative = SIGNED && reader.read_bit()?;

        let mut magnitude: u128 = 0;
        let mut shift: u32 = 0;

        loop {
            let proceed = VARIABLE && reader.read_bit()?;

            for _ in 0..BITS {
                let bit = reader.read_bit()?;
                if bit {
                    if shift >= 127 {
                        return Err(SerdeErr::OutOfRange {
                            value: i128::MAX,
                            bits: BITS,
                            signed: SIGNED,
                        });
                    }
                    magnitude |= 1u128 << shift;
                }
                shift += 1;
            }

            if !proceed {
                break;
            }
        }

        let value = magnitude as i128;
        Ok(Self {
            value: if negative { -value } else { value },
        })
    }

    fn bit_length(&self) -> u32 {
        let mut output: u32 = if SIGNED { 1 } else { 0 };

        if VARIABLE {
            let mut magnitude = self.value.unsigned_abs();
            loop {
                output += 1 + BITS as u32;
                if magnitude < 1u128 << BITS {
                    break;
                }
                magnitude >>= BITS;
            }
        } else {
            output += BITS as u32;
        }

        output
    }
}
