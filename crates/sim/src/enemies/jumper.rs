//! Hop attacker: idles on a fixed cadence, commits to a ballistic hop
//! toward the player's position at launch, and deals contact damage on
//! circle overlap regardless of state.

use crate::combat::{CombatEvent, CombatEventBus};
use crate::math::Circle;
use crate::player::Player;

use super::{Enemy, EnemyState, ResumeState};

pub(super) fn update(enemy: &mut Enemy, dt: f32, player: &mut Player, events: &mut CombatEventBus) {
    resolve_contact_damage(enemy, dt, player, events);

    if enemy.knockback_preempts(dt) {
        return;
    }

    enemy.state_elapsed += dt;
    let distance = enemy.body.distance_to(player.body.pos);
    let table = enemy.table();

    match enemy.state {
        EnemyState::Idle => {
            enemy.anim.advance(dt, table);
            if enemy.state_elapsed >= enemy.params.jump_idle_seconds
                && distance <= enemy.params.detection_radius
            {
                launch(enemy, player, events);
            }
        }
        EnemyState::Jump { vx, vy, ground_y } => {
            enemy.anim.advance(dt, table);
            enemy.body.pos.x += vx;
            enemy.body.pos.y += vy;
            let next_vy = vy + enemy.params.gravity_per_tick;

            if next_vy > 0.0 && enemy.body.pos.y >= ground_y {
                enemy.body.pos.y = ground_y;
                enemy.enter(EnemyState::Cooldown);
            } else {
                enemy.state = EnemyState::Jump {
                    vx,
                    vy: next_vy,
                    ground_y,
                };
            }
        }
        EnemyState::Cooldown => {
            enemy.anim.advance(dt, table);
            if enemy.state_elapsed >= enemy.params.cooldown_seconds {
                enemy.enter(EnemyState::Idle);
            }
        }
        EnemyState::Damaged { prior: _ } => {
            enemy.anim.advance(dt, table);
            if enemy.state_elapsed >= enemy.params.damaged_duration {
                enemy.resume_from_damaged(ResumeState::Idle);
            }
        }
        // Unreachable for this profile.
        _ => enemy.enter(EnemyState::Idle),
    }
}

/// Sample the direction to the player once and commit: the horizontal
/// velocity is never revised while airborne.
fn launch(enemy: &mut Enemy, player: &Player, events: &mut CombatEventBus) {
    let delta = player.body.pos - enemy.body.pos;
    let unit_dx = if delta.length() > 0.0 {
        delta.normalized().x
    } else {
        enemy.body.facing.sign()
    };

    let vx = unit_dx * enemy.params.jump_distance * crate::clock::NOMINAL_DT;
    let state = EnemyState::Jump {
        vx,
        vy: enemy.params.jump_impulse,
        ground_y: enemy.body.pos.y,
    };
    enemy.enter(state);
    if let Some(facing) = crate::actor::Facing::from_dx(unit_dx) {
        enemy.body.facing = facing;
    }
    events.emit(CombatEvent::JumpLaunched { id: enemy.id });
}

/// Circle-vs-circle contact check between actor centers, gated only by the
/// contact cooldown, never by FSM state.
fn resolve_contact_damage(
    enemy: &mut Enemy,
    dt: f32,
    player: &mut Player,
    events: &mut CombatEventBus,
) {
    enemy.contact_remaining = (enemy.contact_remaining - dt).max(0.0);
    if enemy.contact_remaining > 0.0 {
        return;
    }

    let own = Circle::new(enemy.body.center(), enemy.params.contact_radius);
    let other = Circle::new(player.body.center(), player.body.size.x * 0.5);
    if !own.overlaps(other) {
        return;
    }

    let applied = player.take_damage(enemy.params.contact_damage);
    if applied > 0 {
        events.emit(CombatEvent::PlayerHit {
            by: enemy.id,
            amount: applied,
        });
    }
    enemy.contact_remaining = enemy.params.contact_cooldown;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::NOMINAL_DT;
    use crate::config::{PlayerParams, ProfileParams};
    use crate::enemies::{EnemyStateTag, ProfileKind};
    use crate::math::Vec2;
    use crate::world::{EnemyId, WorldBounds};

    fn setup(enemy_x: f32, player_x: f32) -> (Enemy, Player, CombatEventBus, WorldBounds) {
        let enemy = Enemy::new(
            EnemyId(0),
            ProfileKind::Jumper,
            Vec2::new(enemy_x, 400.0),
            ProfileParams::jumper(),
        );
        let player = Player::new(Vec2::new(player_x, 400.0), PlayerParams::default());
        (enemy, player, CombatEventBus::default(), WorldBounds::new(1600.0, 1200.0))
    }

    fn advance(
        enemy: &mut Enemy,
        player: &mut Player,
        events: &mut CombatEventBus,
        bounds: &WorldBounds,
        ticks: usize,
    ) {
        for _ in 0..ticks {
            enemy.update(NOMINAL_DT, player, bounds, events);
            events.finish_tick_rollover();
        }
    }

    #[test]
    fn launches_after_idle_cadence_inside_detection() {
        let (mut enemy, mut player, mut events, bounds) = setup(400.0, 600.0);
        advance(&mut enemy, &mut player, &mut events, &bounds, 59);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Idle);
        advance(&mut enemy, &mut player, &mut events, &bounds, 3);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Jump);
    }

    #[test]
    fn never_launches_outside_detection() {
        let (mut enemy, mut player, mut events, bounds) = setup(400.0, 1400.0);
        advance(&mut enemy, &mut player, &mut events, &bounds, 240);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Idle);
        assert_eq!(enemy.body.pos, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn horizontal_trajectory_is_committed_at_launch() {
        let run = |wander: bool| {
            let (mut enemy, mut player, mut events, bounds) = setup(400.0, 600.0);
            // Reach the launch tick.
            while enemy.state_tag() != EnemyStateTag::Jump {
                enemy.update(NOMINAL_DT, &mut player, &bounds, &mut events);
                events.finish_tick_rollover();
            }
            // Fly the whole hop, optionally with the player running away.
            while enemy.state_tag() == EnemyStateTag::Jump {
                if wander {
                    player.body.pos.x += 8.0;
                }
                enemy.update(NOMINAL_DT, &mut player, &bounds, &mut events);
                events.finish_tick_rollover();
            }
            enemy.body.pos.x
        };
        assert_eq!(run(false), run(true));
    }

    #[test]
    fn hop_returns_to_launch_ground_then_cools_down() {
        let (mut enemy, mut player, mut events, bounds) = setup(400.0, 600.0);
        let ground_y = enemy.body.pos.y;
        advance(&mut enemy, &mut player, &mut events, &bounds, 62);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Jump);
        // Airborne means above the ground line.
        assert!(enemy.body.pos.y < ground_y);

        advance(&mut enemy, &mut player, &mut events, &bounds, 60);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Cooldown);
        assert_eq!(enemy.body.pos.y, ground_y);

        advance(&mut enemy, &mut player, &mut events, &bounds, 62);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Idle);
    }

    #[test]
    fn contact_damage_respects_its_cooldown() {
        // Player parked inside the contact circle for the whole run; the
        // idle cadence is stretched so no hop moves the jumper off it.
        let mut params = ProfileParams::jumper();
        params.jump_idle_seconds = 600.0;
        let mut enemy = Enemy::new(EnemyId(0), ProfileKind::Jumper, Vec2::new(400.0, 400.0), params);
        let mut player = Player::new(Vec2::new(410.0, 400.0), PlayerParams::default());
        let mut events = CombatEventBus::default();
        let bounds = WorldBounds::new(1600.0, 1200.0);

        // The first hit waits out one full cooldown from spawn.
        advance(&mut enemy, &mut player, &mut events, &bounds, 59);
        assert_eq!(player.hits_taken(), 0);
        advance(&mut enemy, &mut player, &mut events, &bounds, 3);
        assert_eq!(player.hits_taken(), 1);
        assert_eq!(player.damage_taken_total(), enemy.params().contact_damage);

        // Inside the 1.0 cooldown window nothing more lands.
        advance(&mut enemy, &mut player, &mut events, &bounds, 50);
        assert_eq!(player.hits_taken(), 1);

        advance(&mut enemy, &mut player, &mut events, &bounds, 15);
        assert_eq!(player.hits_taken(), 2);
    }

    #[test]
    fn contact_damage_applies_even_while_damaged() {
        let mut params = ProfileParams::jumper();
        params.jump_idle_seconds = 600.0;
        params.damaged_duration = 2.0;
        let mut enemy = Enemy::new(EnemyId(0), ProfileKind::Jumper, Vec2::new(400.0, 400.0), params);
        let mut player = Player::new(Vec2::new(410.0, 400.0), PlayerParams::default());
        let mut events = CombatEventBus::default();
        let bounds = WorldBounds::new(1600.0, 1200.0);

        assert!(enemy.take_hit(player.body.pos, 5, &mut events));
        assert_eq!(enemy.state_tag(), EnemyStateTag::Damaged);

        // The contact timer keeps counting through Damaged; the hit lands
        // once it expires, while the stretched Damaged window still holds.
        advance(&mut enemy, &mut player, &mut events, &bounds, 62);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Damaged);
        assert_eq!(player.hits_taken(), 1);
    }

    #[test]
    fn midair_hit_snaps_back_to_the_ground_line() {
        let (mut enemy, mut player, mut events, bounds) = setup(400.0, 600.0);
        let ground_y = enemy.body.pos.y;
        advance(&mut enemy, &mut player, &mut events, &bounds, 70);
        assert_eq!(enemy.state_tag(), EnemyStateTag::Jump);
        assert!(enemy.body.pos.y < ground_y);

        assert!(enemy.take_hit(player.body.pos, 5, &mut events));
        assert_eq!(enemy.state_tag(), EnemyStateTag::Damaged);
        assert_eq!(enemy.body.pos.y, ground_y);
    }
}
