//! Player controller: movement, melee-attack state machine, incoming-damage
//! bookkeeping.
//!
//! The attack-frame index is derived from simulated time accumulated since
//! the swing started (62 ms per frame). The hit rectangle only exists while
//! that index sits inside the live window; hit resolution against enemies
//! happens in the world update, which reads [`Player::attack_rect`].

use crate::actor::{ActorBody, Facing};
use crate::combat::apply_damage;
use crate::config::PlayerParams;
use crate::input::{MoveDirection, MoveIntents};
use crate::math::{Rect, Vec2};

const IDLE_FRAMES: usize = 2;
const WALK_FRAMES: usize = 4;
const PARTICLE_TTL_TICKS: u32 = 10;
const PARTICLE_SPEED: f32 = 3.0;
const PARTICLES_PER_SWING: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Walking,
    Attacking,
}

/// Cosmetic hit-trail particle; carries no gameplay state.
#[derive(Debug, Clone, Copy)]
pub struct HitParticle {
    pub pos: Vec2,
    pub ttl: u32,
    facing: Facing,
}

impl HitParticle {
    fn update(&mut self) -> bool {
        self.ttl = self.ttl.saturating_sub(1);
        self.pos.x += PARTICLE_SPEED * self.facing.sign();
        self.ttl > 0
    }
}

#[derive(Debug)]
pub struct Player {
    pub body: ActorBody,
    params: PlayerParams,
    intents: MoveIntents,
    state: PlayerState,
    frame: usize,
    walk_counter: u32,
    idle_elapsed: f32,
    attack_elapsed: f32,
    particles: Vec<HitParticle>,
    damage_taken_total: i32,
    hits_taken: u32,
}

impl Player {
    pub fn new(spawn: Vec2, params: PlayerParams) -> Self {
        let body = ActorBody::new(spawn, params.hitbox, params.max_health);
        Self {
            body,
            params,
            intents: MoveIntents::default(),
            state: PlayerState::Idle,
            frame: 0,
            walk_counter: 0,
            idle_elapsed: 0.0,
            attack_elapsed: 0.0,
            particles: Vec::new(),
            damage_taken_total: 0,
            hits_taken: 0,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn params(&self) -> &PlayerParams {
        &self.params
    }

    /// Animation frame for the current state, always in range for that
    /// state's frame table.
    pub fn frame(&self) -> usize {
        match self.state {
            PlayerState::Attacking => self.attack_frame() % self.params.attack_frames.max(1),
            PlayerState::Walking => self.frame % WALK_FRAMES,
            PlayerState::Idle => self.frame % IDLE_FRAMES,
        }
    }

    pub fn particles(&self) -> &[HitParticle] {
        &self.particles
    }

    pub fn damage_taken_total(&self) -> i32 {
        self.damage_taken_total
    }

    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }

    pub fn set_move_intent(&mut self, direction: MoveDirection, pressed: bool) {
        self.intents.set(direction, pressed);
    }

    /// Start a swing unless one is already running. Returns whether a new
    /// swing started.
    pub fn trigger_attack(&mut self) -> bool {
        if self.state == PlayerState::Attacking {
            return false;
        }
        self.state = PlayerState::Attacking;
        self.attack_elapsed = 0.0;
        self.spawn_hit_trail();
        true
    }

    pub fn update(&mut self, dt: f32) {
        if self.state == PlayerState::Attacking {
            self.update_attack(dt);
            return;
        }

        let mut moving = false;
        if self.intents.is_down(MoveDirection::Left) {
            self.body.pos.x -= self.params.speed;
            self.body.facing = Facing::Left;
            moving = true;
        }
        if self.intents.is_down(MoveDirection::Right) {
            self.body.pos.x += self.params.speed;
            self.body.facing = Facing::Right;
            moving = true;
        }
        if self.intents.is_down(MoveDirection::Up) {
            self.body.pos.y -= self.params.speed;
            moving = true;
        }
        if self.intents.is_down(MoveDirection::Down) {
            self.body.pos.y += self.params.speed;
            moving = true;
        }

        let next = if moving {
            PlayerState::Walking
        } else {
            PlayerState::Idle
        };
        if next != self.state {
            self.state = next;
            self.frame = 0;
            self.walk_counter = 0;
            self.idle_elapsed = 0.0;
        }

        match self.state {
            PlayerState::Walking => {
                self.walk_counter += 1;
                if self.walk_counter >= self.params.walk_frame_ticks {
                    self.frame = (self.frame + 1) % WALK_FRAMES;
                    self.walk_counter = 0;
                }
            }
            PlayerState::Idle => {
                self.idle_elapsed += dt;
                if self.idle_elapsed >= self.params.idle_frame_seconds {
                    self.frame = (self.frame + 1) % IDLE_FRAMES;
                    self.idle_elapsed = 0.0;
                }
            }
            PlayerState::Attacking => {}
        }
    }

    fn update_attack(&mut self, dt: f32) {
        self.attack_elapsed += dt;
        if self.attack_frame() >= self.params.attack_frames {
            self.state = PlayerState::Idle;
            self.frame = 0;
            self.idle_elapsed = 0.0;
            self.particles.clear();
            return;
        }
        self.particles.retain_mut(HitParticle::update);
    }

    fn attack_frame(&self) -> usize {
        (self.attack_elapsed / self.params.attack_frame_seconds) as usize
    }

    /// The melee hit rectangle, present only while the swing's frame index
    /// sits inside the live window.
    pub fn attack_rect(&self) -> Option<Rect> {
        if self.state != PlayerState::Attacking {
            return None;
        }
        let frame = self.attack_frame();
        if frame < self.params.attack_live_first || frame > self.params.attack_live_last {
            return None;
        }
        Some(self.swing_area())
    }

    fn swing_area(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.pos.x + self.params.hitbox.x + self.params.attack_range,
            Facing::Left => self.body.pos.x - self.params.attack_width - self.params.attack_range,
        };
        let y = self.body.pos.y + self.params.hitbox.y * 0.5 - self.params.attack_height * 0.5;
        Rect::new(x, y, self.params.attack_width, self.params.attack_height)
    }

    fn spawn_hit_trail(&mut self) {
        let area = self.swing_area();
        let facing = self.body.facing;
        for i in 0..PARTICLES_PER_SWING {
            let spread = i as f32 * 20.0 * facing.sign();
            self.particles.push(HitParticle {
                pos: Vec2::new(area.x + spread, area.y + i as f32 * area.h / 3.0),
                ttl: PARTICLE_TTL_TICKS,
                facing,
            });
        }
    }

    /// Incoming damage entry point. Returns the amount actually applied
    /// (zero once health is exhausted).
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.body.health;
        apply_damage(&mut self.body, amount);
        let applied = before - self.body.health;
        if applied > 0 {
            self.damage_taken_total += applied;
            self.hits_taken += 1;
        }
        applied
    }
}
