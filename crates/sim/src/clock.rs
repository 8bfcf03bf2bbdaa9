//! Fixed-step tick driver.
//!
//! Every simulation timer accumulates the same nominal delta once per
//! iteration; wall-clock drift never reaches the state machines.

/// Nominal seconds per tick (60 Hz cadence).
pub const NOMINAL_DT: f32 = 0.0167;

#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock {
    tick: u64,
    elapsed: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed tick of `dt` simulated seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick = self.tick.saturating_add(1);
        self.elapsed += dt;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
