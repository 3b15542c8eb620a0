use thiserror::Error;

use tickcache_serde::SerdeErr;

/// Errors that can occur during operation message handler operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationMessageError {
    /// A handler is already registered for this message
    #[error("Operation message {message} already has a handler. Each message must be handled by exactly one handler")]
    DuplicateHandler { message: String },

    /// Incoming net id does not map to any known operation message
    #[error("Operation message net id {net_id} is unknown. Host and client must agree on the message catalog")]
    UnknownMessage { net_id: u16 },

    /// Message is known but nothing was registered to handle it on this side
    #[error("No handler registered for operation message {message}")]
    HandlerNotRegistered { message: String },

    #[error(transparent)]
    Serde(#[from] SerdeErr),
}
