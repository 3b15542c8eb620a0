use thiserror::Error;

/// Errors that can occur while reading or encoding bit-packed values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// Attempted to read past the end of the incoming buffer
    #[error("Attempted to read past the end of the buffer after {bits_read} bits")]
    UnexpectedEnd { bits_read: u32 },

    /// Value does not fit into the requested integer encoding
    #[error("Value {value} does not fit into a {bits}-bit integer (signed: {signed})")]
    OutOfRange { value: i128, bits: u8, signed: bool },

    /// A decoded value could not be converted into the requested type
    #[error("Decoded value {value} cannot be converted into {type_name}")]
    InvalidConversion {
        value: i128,
        type_name: &'static str,
    },
}
