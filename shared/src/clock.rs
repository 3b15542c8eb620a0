use crate::Tick;

/// Source of the current simulation tick, shared by every cache update on
/// one side of the connection
pub trait Clock {
    fn current_tick(&self) -> Tick;
}

/// Fixed-step clock advanced once per simulation update
#[derive(Clone, Debug, Default)]
pub struct GameClock {
    tick: Tick,
}

impl GameClock {
    pub fn new(start_tick: Tick) -> Self {
        Self { tick: start_tick }
    }

    /// Moves to the next tick and returns it
    pub fn advance(&mut self) -> Tick {
        self.tick = self.tick.wrapping_add(1);
        self.tick
    }

    pub fn set_tick(&mut self, tick: Tick) {
        self.tick = tick;
    }
}

impl Clock for GameClock {
    fn current_tick(&self) -> Tick {
        self.tick
    }
}
