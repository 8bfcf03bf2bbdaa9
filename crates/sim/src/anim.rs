//! Animation frame pacing.
//!
//! Each FSM state owns an immutable [`FrameTable`] (frame count plus seconds
//! per frame); the per-actor [`AnimClock`] accumulates tick deltas against
//! it. Frames advance modulo the table length and every state transition
//! resets the clock, so an index can never exceed its bound.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTable {
    pub frames: usize,
    pub seconds_per_frame: f32,
}

impl FrameTable {
    pub const fn new(frames: usize, seconds_per_frame: f32) -> Self {
        Self {
            frames,
            seconds_per_frame,
        }
    }

    pub fn last_frame(&self) -> usize {
        self.frames.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnimClock {
    frame: usize,
    elapsed: f32,
}

impl AnimClock {
    pub fn reset(&mut self) {
        self.frame = 0;
        self.elapsed = 0.0;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Accumulate `dt` and step the frame when the table's per-frame time is
    /// reached. Returns true when the frame index advanced this call.
    pub fn advance(&mut self, dt: f32, table: FrameTable) -> bool {
        self.elapsed += dt;
        if self.elapsed >= table.seconds_per_frame {
            self.frame = (self.frame + 1) % table.frames.max(1);
            self.elapsed = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wraps_modulo_table_length() {
        let table = FrameTable::new(3, 0.1);
        let mut clock = AnimClock::default();
        for _ in 0..7 {
            while !clock.advance(0.05, table) {}
        }
        assert_eq!(clock.frame(), 7 % 3);
    }

    #[test]
    fn advance_reports_steps_only_when_frame_changes() {
        let table = FrameTable::new(4, 0.2);
        let mut clock = AnimClock::default();
        assert!(!clock.advance(0.1, table));
        assert!(clock.advance(0.1, table));
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn reset_zeroes_frame_and_elapsed() {
        let table = FrameTable::new(2, 0.1);
        let mut clock = AnimClock::default();
        clock.advance(0.15, table);
        clock.reset();
        assert_eq!(clock.frame(), 0);
        assert!(!clock.advance(0.05, table));
    }
}
