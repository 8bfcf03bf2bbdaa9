//! Shared actor state: position, hitbox, health, liveness, facing.

use crate::math::{Rect, Vec2};
use crate::world::WorldBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn from_dx(dx: f32) -> Option<Facing> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Position is the top-left corner of the axis-aligned hitbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorBody {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub alive: bool,
    pub facing: Facing,
}

impl ActorBody {
    pub fn new(pos: Vec2, size: Vec2, health: i32) -> Self {
        Self {
            pos,
            size,
            health,
            alive: true,
            facing: Facing::Right,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Hitbox re-anchored so `pos` is treated as the actor's center. Melee
    /// hit tests against the opposing actor use this form.
    pub fn centered_bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.size.x * 0.5,
            self.pos.y - self.size.y * 0.5,
            self.size.x,
            self.size.y,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * 0.5, self.pos.y + self.size.y * 0.5)
    }

    pub fn distance_to(&self, target: Vec2) -> f32 {
        self.pos.distance_to(target)
    }

    /// Step toward `target`, stopping at `min_approach` so the actor never
    /// stacks on top of what it is chasing. Facing follows the horizontal
    /// component of the step.
    pub fn seek(&mut self, target: Vec2, speed: f32, min_approach: f32) {
        let delta = target - self.pos;
        let distance = delta.length();
        if distance <= min_approach {
            return;
        }

        let step = speed.min(distance - min_approach);
        let dir = delta.normalized();
        self.pos = self.pos + dir * step;

        if let Some(facing) = Facing::from_dx(dir.x) {
            self.facing = facing;
        }
    }

    pub fn clamp_to(&mut self, bounds: &WorldBounds) {
        self.pos.x = self.pos.x.clamp(0.0, (bounds.width - self.size.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (bounds.height - self.size.y).max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> ActorBody {
        ActorBody::new(Vec2::new(x, y), Vec2::new(18.0, 18.0), 20)
    }

    #[test]
    fn seek_stops_at_min_approach() {
        let mut body = body_at(0.0, 0.0);
        let target = Vec2::new(10.0, 0.0);
        body.seek(target, 100.0, 15.0);
        // Already inside the approach distance: no movement.
        assert_eq!(body.pos, Vec2::ZERO);
    }

    #[test]
    fn seek_never_overshoots_the_approach_ring() {
        let mut body = body_at(0.0, 0.0);
        let target = Vec2::new(100.0, 0.0);
        for _ in 0..200 {
            body.seek(target, 2.0, 15.0);
        }
        let remaining = body.distance_to(target);
        assert!((remaining - 15.0).abs() < 1e-3, "remaining {remaining}");
    }

    #[test]
    fn seek_updates_facing_from_direction() {
        let mut body = body_at(50.0, 0.0);
        body.seek(Vec2::new(0.0, 0.0), 2.0, 1.0);
        assert_eq!(body.facing, Facing::Left);
        body.seek(Vec2::new(100.0, 0.0), 2.0, 1.0);
        assert_eq!(body.facing, Facing::Right);
    }

    #[test]
    fn clamp_keeps_hitbox_inside_bounds() {
        let bounds = WorldBounds::new(100.0, 80.0);
        let mut body = body_at(-5.0, 200.0);
        body.clamp_to(&bounds);
        assert_eq!(body.pos, Vec2::new(0.0, 80.0 - 18.0));
    }

    #[test]
    fn centered_bounds_recenters_on_position() {
        let body = body_at(100.0, 100.0);
        let rect = body.centered_bounds();
        assert_eq!(rect.center(), Vec2::new(100.0, 100.0));
    }
}
