//! Combat resolver: damage application, knockback impulses and their decay,
//! damage-grace gating, and the per-tick combat event record.

use crate::actor::ActorBody;
use crate::math::Vec2;
use crate::world::EnemyId;

/// Below this magnitude (per component) a knockback velocity snaps to zero.
pub const KNOCKBACK_EPSILON: f32 = 0.1;

/// Subtract `amount` from health, clamping at zero; the body is dead once
/// health reaches zero. Returns true when this call crossed into death.
pub fn apply_damage(body: &mut ActorBody, amount: i32) -> bool {
    if !body.alive {
        return false;
    }
    body.health = (body.health - amount).max(0);
    if body.health == 0 {
        body.alive = false;
        return true;
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum KnockbackDecay {
    /// `v *= factor` each tick.
    Multiplicative(f32),
    /// `v *= 1 - dt * k` each tick.
    LinearDt(f32),
}

/// Decaying velocity impulse pushing an actor away from a damage source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Knockback {
    pub vx: f32,
    pub vy: f32,
}

impl Knockback {
    /// Impulse directed from the attacker's position toward the target,
    /// scaled to `magnitude`.
    pub fn impulse(attacker: Vec2, target: Vec2, magnitude: f32) -> Self {
        let angle = attacker.angle_to(target);
        Self {
            vx: angle.cos() * magnitude,
            vy: angle.sin() * magnitude,
        }
    }

    pub fn is_active(&self) -> bool {
        self.vx != 0.0 || self.vy != 0.0
    }

    pub fn magnitude(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Advance `pos` one tick and decay the velocity. Both components snap
    /// to exactly zero once they fall under [`KNOCKBACK_EPSILON`].
    pub fn integrate(&mut self, pos: &mut Vec2, dt: f32, scale: f32, decay: KnockbackDecay) {
        pos.x += self.vx * dt * scale;
        pos.y += self.vy * dt * scale;

        let factor = match decay {
            KnockbackDecay::Multiplicative(f) => f,
            KnockbackDecay::LinearDt(k) => 1.0 - dt * k,
        };
        self.vx *= factor;
        self.vy *= factor;

        if self.vx.abs() < KNOCKBACK_EPSILON && self.vy.abs() < KNOCKBACK_EPSILON {
            self.vx = 0.0;
            self.vy = 0.0;
        }
    }
}

/// Minimum simulated time between two accepted damage applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageGrace {
    remaining: f32,
}

impl DamageGrace {
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    /// True when a hit is currently accepted; rearms the grace window.
    pub fn try_accept(&mut self, grace: f32) -> bool {
        if self.remaining > 0.0 {
            return false;
        }
        self.remaining = grace;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEvent {
    PlayerAttackStarted,
    PlayerHit { by: EnemyId, amount: i32 },
    EnemyHit { id: EnemyId, amount: i32 },
    EnemyDied { id: EnemyId },
    SwingStarted { id: EnemyId },
    ExplosionArmed { id: EnemyId },
    ExplosionCancelled { id: EnemyId },
    ExplosionCompleted { id: EnemyId, player_in_blast: bool },
    JumpLaunched { id: EnemyId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEventKind {
    PlayerAttackStarted,
    PlayerHit,
    EnemyHit,
    EnemyDied,
    SwingStarted,
    ExplosionArmed,
    ExplosionCancelled,
    ExplosionCompleted,
    JumpLaunched,
}

impl CombatEvent {
    pub fn kind(self) -> CombatEventKind {
        match self {
            Self::PlayerAttackStarted => CombatEventKind::PlayerAttackStarted,
            Self::PlayerHit { .. } => CombatEventKind::PlayerHit,
            Self::EnemyHit { .. } => CombatEventKind::EnemyHit,
            Self::EnemyDied { .. } => CombatEventKind::EnemyDied,
            Self::SwingStarted { .. } => CombatEventKind::SwingStarted,
            Self::ExplosionArmed { .. } => CombatEventKind::ExplosionArmed,
            Self::ExplosionCancelled { .. } => CombatEventKind::ExplosionCancelled,
            Self::ExplosionCompleted { .. } => CombatEventKind::ExplosionCompleted,
            Self::JumpLaunched { .. } => CombatEventKind::JumpLaunched,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatEventCounts {
    pub total: u32,
    pub player_attack_started: u32,
    pub player_hit: u32,
    pub enemy_hit: u32,
    pub enemy_died: u32,
    pub swing_started: u32,
    pub explosion_armed: u32,
    pub explosion_cancelled: u32,
    pub explosion_completed: u32,
    pub jump_launched: u32,
}

impl CombatEventCounts {
    pub fn record(&mut self, kind: CombatEventKind) {
        self.total = self.total.saturating_add(1);
        let slot = match kind {
            CombatEventKind::PlayerAttackStarted => &mut self.player_attack_started,
            CombatEventKind::PlayerHit => &mut self.player_hit,
            CombatEventKind::EnemyHit => &mut self.enemy_hit,
            CombatEventKind::EnemyDied => &mut self.enemy_died,
            CombatEventKind::SwingStarted => &mut self.swing_started,
            CombatEventKind::ExplosionArmed => &mut self.explosion_armed,
            CombatEventKind::ExplosionCancelled => &mut self.explosion_cancelled,
            CombatEventKind::ExplosionCompleted => &mut self.explosion_completed,
            CombatEventKind::JumpLaunched => &mut self.jump_launched,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Per-tick record of what the combat resolver did. Events accumulate over
/// the current tick and roll over into counts when the tick completes.
#[derive(Debug, Default)]
pub struct CombatEventBus {
    current_tick_events: Vec<CombatEvent>,
    last_tick_counts: CombatEventCounts,
}

impl CombatEventBus {
    pub fn emit(&mut self, event: CombatEvent) {
        self.current_tick_events.push(event);
    }

    pub fn events_this_tick(&self) -> &[CombatEvent] {
        &self.current_tick_events
    }

    pub fn finish_tick_rollover(&mut self) {
        let mut counts = CombatEventCounts::default();
        for event in &self.current_tick_events {
            counts.record(event.kind());
        }
        self.last_tick_counts = counts;
        self.current_tick_events.clear();
    }

    pub fn last_tick_counts(&self) -> CombatEventCounts {
        self.last_tick_counts
    }
}
