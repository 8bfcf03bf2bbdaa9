//! Enemy behavior profiles.
//!
//! One [`Enemy`] type covers all three profiles; a [`ProfileKind`] tag plus
//! a [`ProfileParams`](crate::config::ProfileParams) constant table select
//! the behavior. Each profile is a timed state machine updated once per
//! tick against the player's current position. While a knockback impulse is
//! non-zero it pre-empts normal state logic for that tick.

mod detonator;
mod jumper;
mod pursuer;

use crate::actor::ActorBody;
use crate::anim::{AnimClock, FrameTable};
use crate::combat::{apply_damage, CombatEvent, CombatEventBus, DamageGrace, Knockback};
use crate::config::ProfileParams;
use crate::math::Vec2;
use crate::player::Player;
use crate::world::{EnemyId, WorldBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Pursuer,
    Detonator,
    Jumper,
}

/// State tag exposed to hosts; carries no per-state data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStateTag {
    Idle,
    Chase,
    Attack,
    Damaged,
    Exploding,
    Aftermath,
    Jump,
    Cooldown,
}

/// Where a Damaged interruption returns to once its duration elapses. A hit
/// never defuses an armed detonator: the burned fuse time carries over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ResumeState {
    Idle,
    Chase,
    Exploding { fuse_elapsed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum EnemyState {
    Idle,
    Chase,
    Attack { damage_dealt: bool },
    Damaged { prior: ResumeState },
    Exploding,
    Aftermath,
    Jump { vx: f32, vy: f32, ground_y: f32 },
    Cooldown,
}

impl EnemyState {
    fn tag(&self) -> EnemyStateTag {
        match self {
            EnemyState::Idle => EnemyStateTag::Idle,
            EnemyState::Chase => EnemyStateTag::Chase,
            EnemyState::Attack { .. } => EnemyStateTag::Attack,
            EnemyState::Damaged { .. } => EnemyStateTag::Damaged,
            EnemyState::Exploding => EnemyStateTag::Exploding,
            EnemyState::Aftermath => EnemyStateTag::Aftermath,
            EnemyState::Jump { .. } => EnemyStateTag::Jump,
            EnemyState::Cooldown => EnemyStateTag::Cooldown,
        }
    }
}

/// Per-state animation pacing, fixed per profile.
pub(crate) fn frame_table(kind: ProfileKind, tag: EnemyStateTag) -> FrameTable {
    use EnemyStateTag as T;
    match (kind, tag) {
        (_, T::Idle) | (_, T::Cooldown) => FrameTable::new(2, 0.5),
        (_, T::Chase) => FrameTable::new(4, 0.15),
        (ProfileKind::Pursuer, T::Attack) => FrameTable::new(4, 0.25),
        (ProfileKind::Detonator, T::Exploding) => FrameTable::new(6, 0.1667),
        (ProfileKind::Detonator, T::Aftermath) => FrameTable::new(4, 0.25),
        (ProfileKind::Jumper, T::Jump) => FrameTable::new(8, 0.125),
        (_, T::Damaged) => FrameTable::new(4, 0.25),
        // A profile never enters another profile's states.
        _ => FrameTable::new(1, f32::MAX),
    }
}

#[derive(Debug)]
pub struct Enemy {
    pub body: ActorBody,
    id: EnemyId,
    kind: ProfileKind,
    params: ProfileParams,
    state: EnemyState,
    state_elapsed: f32,
    anim: AnimClock,
    knockback: Knockback,
    damage_grace: DamageGrace,
    contact_remaining: f32,
    spent: bool,
}

impl Enemy {
    pub fn new(id: EnemyId, kind: ProfileKind, spawn: Vec2, params: ProfileParams) -> Self {
        Self {
            body: ActorBody::new(spawn, params.hitbox, params.health),
            id,
            kind,
            params,
            state: EnemyState::Idle,
            state_elapsed: 0.0,
            anim: AnimClock::default(),
            knockback: Knockback::default(),
            damage_grace: DamageGrace::default(),
            // Contact damage waits out one full cooldown from spawn.
            contact_remaining: params.contact_cooldown,
            spent: false,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    pub fn params(&self) -> &ProfileParams {
        &self.params
    }

    pub fn state_tag(&self) -> EnemyStateTag {
        self.state.tag()
    }

    pub fn state_elapsed(&self) -> f32 {
        self.state_elapsed
    }

    pub fn frame(&self) -> usize {
        self.anim.frame()
    }

    pub fn knockback_active(&self) -> bool {
        self.knockback.is_active()
    }

    /// True once a detonator's aftermath animation has fully played out; the
    /// enemy is inert and may be dropped from any visible set.
    pub fn spent(&self) -> bool {
        self.spent
    }

    fn enter(&mut self, state: EnemyState) {
        self.state = state;
        self.state_elapsed = 0.0;
        self.anim.reset();
    }

    fn table(&self) -> FrameTable {
        frame_table(self.kind, self.state.tag())
    }

    /// One tick of behavior. Dead non-detonators never mutate again; a dead
    /// detonator only plays out its aftermath animation.
    pub fn update(
        &mut self,
        dt: f32,
        player: &mut Player,
        bounds: &WorldBounds,
        events: &mut CombatEventBus,
    ) {
        if !self.body.alive {
            if self.kind == ProfileKind::Detonator {
                detonator::update_aftermath(self, dt);
            }
            return;
        }

        self.damage_grace.tick(dt);

        match self.kind {
            ProfileKind::Pursuer => pursuer::update(self, dt, player, events),
            ProfileKind::Detonator => detonator::update(self, dt, player, events),
            ProfileKind::Jumper => jumper::update(self, dt, player, events),
        }

        if self.body.alive {
            self.body.clamp_to(bounds);
        }
    }

    /// Integrate an active knockback impulse. Returns true when normal state
    /// logic should be skipped for this tick.
    fn knockback_preempts(&mut self, dt: f32) -> bool {
        if !self.knockback.is_active() {
            return false;
        }
        self.knockback.integrate(
            &mut self.body.pos,
            dt,
            self.params.knockback_scale,
            self.params.knockback_decay,
        );
        true
    }

    /// Incoming hit from the player. Returns whether the hit was accepted
    /// (the damage-grace window may swallow it).
    pub fn take_hit(
        &mut self,
        attacker: Vec2,
        amount: i32,
        events: &mut CombatEventBus,
    ) -> bool {
        if !self.body.alive {
            return false;
        }
        if !self.damage_grace.try_accept(self.params.damage_grace) {
            return false;
        }

        let died = apply_damage(&mut self.body, amount);
        events.emit(CombatEvent::EnemyHit {
            id: self.id,
            amount,
        });

        if died {
            events.emit(CombatEvent::EnemyDied { id: self.id });
            if self.kind == ProfileKind::Detonator {
                self.enter(EnemyState::Aftermath);
            }
            return true;
        }

        // A hit mid-air puts the jumper straight back on the ground.
        if let EnemyState::Jump { ground_y, .. } = self.state {
            self.body.pos.y = ground_y;
        }
        let prior = match self.state {
            EnemyState::Idle | EnemyState::Cooldown | EnemyState::Jump { .. } => ResumeState::Idle,
            EnemyState::Damaged { prior } => prior,
            EnemyState::Exploding => ResumeState::Exploding {
                fuse_elapsed: self.state_elapsed,
            },
            _ => ResumeState::Chase,
        };
        self.knockback = Knockback::impulse(attacker, self.body.pos, self.params.knockback_impulse);
        self.enter(EnemyState::Damaged { prior });
        true
    }

    fn resume_from_damaged(&mut self, prior: ResumeState) {
        match prior {
            ResumeState::Idle => self.enter(EnemyState::Idle),
            ResumeState::Chase => self.enter(EnemyState::Chase),
            ResumeState::Exploding { fuse_elapsed } => {
                self.enter(EnemyState::Exploding);
                self.state_elapsed = fuse_elapsed;
            }
        }
    }
}
