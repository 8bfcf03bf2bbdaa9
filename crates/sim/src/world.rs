//! World state and per-tick orchestration.
//!
//! Update order within a tick is fixed: player first, then attack-hit
//! resolution against every enemy, then each enemy in creation order, then
//! the combat event rollover. External readers only observe state between
//! completed ticks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{TickClock, NOMINAL_DT};
use crate::combat::{CombatEvent, CombatEventBus, CombatEventCounts};
use crate::config::Tunables;
use crate::enemies::{Enemy, ProfileKind};
use crate::input::MoveDirection;
use crate::math::Vec2;
use crate::player::Player;

/// Fixed rectangular extent of the coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Stable handle for one spawned enemy, unique for the world's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

#[derive(Debug)]
pub struct World {
    clock: TickClock,
    bounds: WorldBounds,
    tunables: Tunables,
    player: Player,
    enemies: Vec<Enemy>,
    events: CombatEventBus,
    next_enemy_id: u32,
}

impl World {
    pub fn new(tunables: Tunables) -> Self {
        let bounds = WorldBounds::new(tunables.world.width, tunables.world.height);
        let player = Player::new(tunables.world.player_spawn, tunables.player.clone());
        Self {
            clock: TickClock::default(),
            bounds,
            tunables,
            player,
            enemies: Vec::new(),
            events: CombatEventBus::default(),
            next_enemy_id: 0,
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id() == id)
    }

    /// Enemies still participating in the simulation: alive, or playing a
    /// terminal animation that has not yet finished.
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| !e.spent())
    }

    pub fn last_tick_counts(&self) -> CombatEventCounts {
        self.events.last_tick_counts()
    }

    pub fn spawn_enemy(&mut self, kind: ProfileKind, spawn: Vec2) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;

        let params = match kind {
            ProfileKind::Pursuer => self.tunables.pursuer,
            ProfileKind::Detonator => self.tunables.detonator,
            ProfileKind::Jumper => self.tunables.jumper,
        };
        self.enemies.push(Enemy::new(id, kind, spawn, params));
        debug!(id = id.0, ?kind, x = spawn.x, y = spawn.y, "enemy spawned");
        id
    }

    pub fn on_move_intent(&mut self, direction: MoveDirection, pressed: bool) {
        self.player.set_move_intent(direction, pressed);
    }

    /// Discrete attack input. Ignored while a swing is already running.
    pub fn on_attack_triggered(&mut self) {
        if self.player.trigger_attack() {
            self.events.emit(CombatEvent::PlayerAttackStarted);
        }
    }

    /// One full update pass. Returns the combat event counts for the tick.
    pub fn advance_tick(&mut self, dt: f32) -> CombatEventCounts {
        self.clock.advance(dt);
        self.player.update(dt);

        if let Some(rect) = self.player.attack_rect() {
            let attacker = self.player.body.pos;
            let damage = self.tunables.player.attack_damage;
            for enemy in &mut self.enemies {
                if rect.overlaps(enemy.body.centered_bounds()) {
                    enemy.take_hit(attacker, damage, &mut self.events);
                }
            }
        }

        for enemy in &mut self.enemies {
            enemy.update(dt, &mut self.player, &self.bounds, &mut self.events);
        }

        for event in self.events.events_this_tick() {
            if let CombatEvent::EnemyDied { id } = event {
                debug!(id = id.0, tick = self.clock.tick(), "enemy died");
            }
        }

        self.events.finish_tick_rollover();
        self.events.last_tick_counts()
    }

    /// [`advance_tick`](World::advance_tick) at the nominal 60 Hz step.
    pub fn step(&mut self) -> CombatEventCounts {
        self.advance_tick(NOMINAL_DT)
    }
}
