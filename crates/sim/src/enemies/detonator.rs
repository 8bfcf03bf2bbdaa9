//! Proximity bomb: chases like the pursuer, arms a fuse at trigger
//! distance, cancels if the player escapes, and otherwise detonates once
//! into a terminal aftermath animation.

use crate::combat::{CombatEvent, CombatEventBus};
use crate::player::Player;

use super::{frame_table, Enemy, EnemyState, EnemyStateTag, ProfileKind};

pub(super) fn update(enemy: &mut Enemy, dt: f32, player: &mut Player, events: &mut CombatEventBus) {
    if enemy.knockback_preempts(dt) {
        return;
    }

    enemy.state_elapsed += dt;
    let distance = enemy.body.distance_to(player.body.pos);
    let table = enemy.table();

    match enemy.state {
        EnemyState::Idle => {
            enemy.anim.advance(dt, table);
            if distance <= enemy.params.detection_radius {
                enemy.enter(EnemyState::Chase);
            }
        }
        EnemyState::Chase => {
            if distance > enemy.params.detection_radius {
                enemy.enter(EnemyState::Idle);
            } else if distance <= enemy.params.trigger_distance {
                enemy.enter(EnemyState::Exploding);
                events.emit(CombatEvent::ExplosionArmed { id: enemy.id });
            } else {
                enemy
                    .body
                    .seek(player.body.pos, enemy.params.speed, enemy.params.min_approach);
                enemy.anim.advance(dt, table);
            }
        }
        EnemyState::Exploding => {
            enemy.anim.advance(dt, table);
            if distance > enemy.params.trigger_distance {
                // Player escaped before the fuse ran out: stand down.
                enemy.enter(EnemyState::Chase);
                events.emit(CombatEvent::ExplosionCancelled { id: enemy.id });
            } else if enemy.state_elapsed >= enemy.params.fuse_seconds {
                detonate(enemy, distance, player, events);
            }
        }
        EnemyState::Damaged { prior } => {
            enemy.anim.advance(dt, table);
            if enemy.state_elapsed >= enemy.params.damaged_duration {
                enemy.resume_from_damaged(prior);
            }
        }
        // Aftermath runs through update_aftermath once alive is false.
        _ => enemy.enter(EnemyState::Idle),
    }
}

fn detonate(enemy: &mut Enemy, distance: f32, player: &mut Player, events: &mut CombatEventBus) {
    let player_in_blast = distance <= enemy.params.blast_radius;
    if player_in_blast {
        let applied = player.take_damage(enemy.params.blast_damage);
        if applied > 0 {
            events.emit(CombatEvent::PlayerHit {
                by: enemy.id,
                amount: applied,
            });
        }
    }
    events.emit(CombatEvent::ExplosionCompleted {
        id: enemy.id,
        player_in_blast,
    });
    events.emit(CombatEvent::EnemyDied { id: enemy.id });

    enemy.body.health = 0;
    enemy.body.alive = false;
    enemy.enter(EnemyState::Aftermath);
}

/// Terminal path: the body is dead and frozen; only the aftermath animation
/// keeps counting, and after its final frame the enemy is spent.
pub(super) fn update_aftermath(enemy: &mut Enemy, dt: f32) {
    if enemy.spent || enemy.state != EnemyState::Aftermath {
        return;
    }
    let table = frame_table(ProfileKind::Detonator, EnemyStateTag::Aftermath);
    if enemy.anim.advance(dt, table) && enemy.anim.frame() == 0 {
        // Wrapped past the last frame: animation done.
        enemy.spent = true;
    }
}
