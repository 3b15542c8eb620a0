use tickcache_host::{HostCacheManager, HostConfig};
use tickcache_shared::{BitWriter, Clock, EntityId, GameClock, Tick};

use crate::{protocol, TestWorld};

/// Host side of a test session: its world, clock and cache manager
pub struct TestHost {
    pub world: TestWorld,
    pub clock: GameClock,
    pub caches: HostCacheManager,
}

impl TestHost {
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    pub fn with_config(config: HostConfig) -> Self {
        Self {
            world: TestWorld::new(),
            clock: GameClock::new(1),
            caches: HostCacheManager::new(&protocol(), config),
        }
    }

    pub fn register_entity(&mut self, entity: EntityId) -> usize {
        self.caches.register_entity(&self.world, &entity)
    }

    pub fn tick(&self) -> Tick {
        self.clock.current_tick()
    }

    pub fn advance(&mut self) -> Tick {
        self.clock.advance()
    }

    /// Writes this tick's delta packet into one MTU, returns it with its record count
    pub fn write_update(&mut self) -> (Vec<u8>, usize) {
        self.write_update_with_budget(BitWriter::new())
    }

    pub fn write_update_with_budget(&mut self, mut writer: BitWriter) -> (Vec<u8>, usize) {
        let records = self.caches.write_update(&self.world, &self.clock, &mut writer);
        (writer.to_bytes(), records)
    }

    pub fn write_full_update(&mut self) -> (Vec<u8>, usize) {
        let mut writer = BitWriter::unbounded();
        let records = self.caches.write_full_update(&self.clock, &mut writer);
        (writer.to_bytes(), records)
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}
