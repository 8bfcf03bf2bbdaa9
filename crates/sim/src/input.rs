//! Movement-intent input consumed by the player controller.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTION_COUNT: usize = 4;

impl MoveDirection {
    const fn index(self) -> usize {
        match self {
            MoveDirection::Up => 0,
            MoveDirection::Down => 1,
            MoveDirection::Left => 2,
            MoveDirection::Right => 3,
        }
    }
}

/// Pressed-state of the four directional intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntents {
    down: [bool; DIRECTION_COUNT],
}

impl MoveIntents {
    pub fn set(&mut self, direction: MoveDirection, pressed: bool) {
        self.down[direction.index()] = pressed;
    }

    pub fn is_down(&self, direction: MoveDirection) -> bool {
        self.down[direction.index()]
    }

    pub fn any_down(&self) -> bool {
        self.down.iter().any(|&d| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_track_press_and_release_independently() {
        let mut intents = MoveIntents::default();
        intents.set(MoveDirection::Up, true);
        intents.set(MoveDirection::Left, true);
        assert!(intents.is_down(MoveDirection::Up));
        assert!(intents.is_down(MoveDirection::Left));
        assert!(!intents.is_down(MoveDirection::Down));

        intents.set(MoveDirection::Up, false);
        assert!(!intents.is_down(MoveDirection::Up));
        assert!(intents.any_down());

        intents.set(MoveDirection::Left, false);
        assert!(!intents.any_down());
    }
}
