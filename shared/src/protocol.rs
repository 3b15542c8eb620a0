use crate::cache::{cache_kinds::CacheKinds, fields::CacheFields};

pub mod error;
pub use error::ProtocolError;

// Protocol Plugin
pub trait ProtocolPlugin {
    fn build(&self, protocol: &mut CacheProtocol);
}

/// Everything host and client must agree on before exchanging cache packets:
/// which component types are cached, in which order, and the schema version
/// stamped on every packet.
pub struct CacheProtocol {
    pub cache_kinds: CacheKinds,
    /// Bumped whenever a cache's field list or field order changes
    pub schema_version: u16,
    locked: bool,
}

impl Default for CacheProtocol {
    fn default() -> Self {
        Self {
            cache_kinds: CacheKinds::new(),
            schema_version: 0,
            locked: false,
        }
    }
}

impl CacheProtocol {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> &mut Self {
        self.check_lock();
        plugin.build(self);
        self
    }

    pub fn schema_version(&mut self, version: u16) -> &mut Self {
        self.check_lock();
        self.schema_version = version;
        self
    }

    pub fn add_cache<F: CacheFields>(&mut self) -> &mut Self {
        self.check_lock();
        self.cache_kinds.add_cache::<F>();
        self
    }

    pub fn add_existence_tracking_cache<F: CacheFields>(&mut self) -> &mut Self {
        self.check_lock();
        self.cache_kinds.add_existence_tracking_cache::<F>();
        self
    }

    // Non-panicking builder methods

    pub fn try_add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        plugin.build(self);
        Ok(self)
    }

    pub fn try_schema_version(&mut self, version: u16) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.schema_version = version;
        Ok(self)
    }

    pub fn try_add_cache<F: CacheFields>(&mut self) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.cache_kinds.try_add_cache::<F>()?;
        Ok(self)
    }

    pub fn try_add_existence_tracking_cache<F: CacheFields>(&mut self) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.cache_kinds.try_add_existence_tracking_cache::<F>()?;
        Ok(self)
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.locked = true;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Checks if protocol is locked without panicking
    /// Returns Err if protocol is locked
    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Checks if protocol is locked, panics if it is
    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    /// Takes the finished protocol out of the builder, locked
    pub fn build(&mut self) -> Self {
        let mut protocol = std::mem::take(self);
        protocol.locked = true;
        protocol
    }
}
