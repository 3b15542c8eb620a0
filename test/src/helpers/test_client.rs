use tickcache_client::{ClientCacheManager, ClientConfig};
use tickcache_shared::{BitReader, CacheError, GameClock, Tick};

use crate::{protocol, TestWorld};

/// Client side of a test session: its world, clock and cache manager
pub struct TestClient {
    pub world: TestWorld,
    pub clock: GameClock,
    pub caches: ClientCacheManager,
}

impl TestClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            world: TestWorld::new(),
            clock: GameClock::new(1),
            caches: ClientCacheManager::new(&protocol(), config),
        }
    }

    pub fn receive(&mut self, bytes: &[u8]) -> Result<Tick, CacheError> {
        let mut reader = BitReader::new(bytes);
        self.caches.read_update(&self.world, &mut reader)
    }

    pub fn interpolate(&mut self) {
        self.caches.interpolate(&mut self.world, &self.clock);
    }

    /// Moves the client clock to `tick` and applies whatever became due
    pub fn interpolate_at(&mut self, tick: Tick) {
        self.clock.set_tick(tick);
        self.interpolate();
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
