use thiserror::Error;

use crate::cache::error::CacheError;

/// Errors that can occur while building a cache protocol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Protocol is locked and cannot be modified
    #[error("Protocol is already locked and cannot be modified. CacheProtocol.lock() has been called and no further changes are allowed")]
    AlreadyLocked,

    #[error(transparent)]
    Cache(#[from] CacheError),
}
