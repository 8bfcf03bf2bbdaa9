//! Melee chaser: closes to melee range and swings on a fixed-duration
//! timer, landing damage once per swing at the final attack frame.

use crate::combat::{CombatEvent, CombatEventBus};
use crate::player::Player;

use super::{Enemy, EnemyState};

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
            } else if distance <= enemy.params.melee_range {
                enemy.enter(EnemyState::Attack {
                    damage_dealt: false,
                });
                events.emit(CombatEvent::SwingStarted { id: enemy.id });
            } else {
                enemy
                    .body
                    .seek(player.body.pos, enemy.params.speed, enemy.params.min_approach);
                enemy.anim.advance(dt, table);
            }
        }
        EnemyState::Attack { damage_dealt } => {
            enemy.anim.advance(dt, table);

            let hit_frame = table.last_frame();
            if !damage_dealt && enemy.anim.frame() == hit_frame {
                let connected = enemy.body.bounds().overlaps(player.body.centered_bounds());
                if connected {
                    let applied = player.take_damage(enemy.params.melee_damage);
                    if applied > 0 {
                        events.emit(CombatEvent::PlayerHit {
                            by: enemy.id,
                            amount: applied,
                        });
                    }
                }
                enemy.state = EnemyState::Attack { damage_dealt: true };
            }

            if enemy.state_elapsed >= enemy.params.swing_duration {
                if distance <= enemy.params.detection_radius {
                    enemy.enter(EnemyState::Chase);
                } else {
                    enemy.enter(EnemyState::Idle);
                }
            }
        }
        EnemyState::Damaged { prior } => {
            enemy.anim.advance(dt, table);
            if enemy.state_elapsed >= enemy.params.damaged_duration {
                enemy.resume_from_damaged(prior);
            }
        }
        // Unreachable for this profile.
        _ => enemy.enter(EnemyState::Idle),
    }
}
