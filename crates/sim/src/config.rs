//! Tunable simulation constants.
//!
//! Defaults carry the shipped game's numbers; a host may override any
//! subset from a JSON file (every field falls back to its default).

use serde::{Deserialize, Serialize};

use crate::combat::KnockbackDecay;
use crate::math::Vec2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub world: WorldParams,
    pub player: PlayerParams,
    pub pursuer: ProfileParams,
    pub detonator: ProfileParams,
    pub jumper: ProfileParams,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            world: WorldParams::default(),
            player: PlayerParams::default(),
            pursuer: ProfileParams::pursuer(),
            detonator: ProfileParams::detonator(),
            jumper: ProfileParams::jumper(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    pub width: f32,
    pub height: f32,
    pub player_spawn: Vec2,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 1200.0,
            player_spawn: Vec2::new(500.0, 400.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerParams {
    pub max_health: i32,
    pub speed: f32,
    pub hitbox: Vec2,
    pub attack_damage: i32,
    pub attack_width: f32,
    pub attack_height: f32,
    /// Horizontal offset of the hit rectangle from the facing-side edge of
    /// the player hitbox. Negative pulls it back over the player.
    pub attack_range: f32,
    pub attack_frame_seconds: f32,
    pub attack_frames: usize,
    /// Inclusive frame range during which the hit rectangle exists.
    pub attack_live_first: usize,
    pub attack_live_last: usize,
    /// Walk animation advances once per this many ticks.
    pub walk_frame_ticks: u32,
    pub idle_frame_seconds: f32,
}

impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            max_health: 100,
            speed: 4.0,
            hitbox: Vec2::new(48.0, 48.0),
            attack_damage: 15,
            attack_width: 70.0,
            attack_height: 100.0,
            attack_range: -20.0,
            attack_frame_seconds: 0.062,
            attack_frames: 8,
            attack_live_first: 2,
            attack_live_last: 5,
            walk_frame_ticks: 5,
            idle_frame_seconds: 0.5,
        }
    }
}

/// Constant table for one enemy behavior profile, fixed at construction.
/// Fields outside a profile's behavior (for example `melee_*` on a jumper)
/// are carried but never read by that profile's update path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileParams {
    pub health: i32,
    pub speed: f32,
    pub hitbox: Vec2,
    pub detection_radius: f32,
    pub min_approach: f32,
    pub damaged_duration: f32,
    /// Minimum simulated time between accepted hits; zero disables gating.
    pub damage_grace: f32,
    pub knockback_impulse: f32,
    pub knockback_scale: f32,
    pub knockback_decay: KnockbackDecay,

    // Pursuer.
    pub melee_range: f32,
    pub melee_damage: i32,
    pub swing_duration: f32,

    // Detonator.
    pub trigger_distance: f32,
    pub blast_radius: f32,
    pub blast_damage: i32,
    pub fuse_seconds: f32,

    // Jumper.
    pub jump_distance: f32,
    pub jump_impulse: f32,
    pub gravity_per_tick: f32,
    pub jump_idle_seconds: f32,
    pub cooldown_seconds: f32,
    pub contact_damage: i32,
    pub contact_cooldown: f32,
    pub contact_radius: f32,
}

impl Default for ProfileParams {
    fn default() -> Self {
        ProfileParams::pursuer()
    }
}

impl ProfileParams {
    pub fn pursuer() -> Self {
        Self {
            health: 20,
            speed: 2.0,
            hitbox: Vec2::new(18.0, 18.0),
            detection_radius: 250.0,
            min_approach: 15.0,
            damaged_duration: 1.0,
            damage_grace: 0.0,
            knockback_impulse: 1.0,
            knockback_scale: 50.0,
            knockback_decay: KnockbackDecay::LinearDt(5.0),
            melee_range: 25.0,
            melee_damage: 10,
            swing_duration: 1.0,
            trigger_distance: 0.0,
            blast_radius: 0.0,
            blast_damage: 0,
            fuse_seconds: 0.0,
            jump_distance: 0.0,
            jump_impulse: 0.0,
            gravity_per_tick: 0.0,
            jump_idle_seconds: 0.0,
            cooldown_seconds: 0.0,
            contact_damage: 0,
            contact_cooldown: 0.0,
            contact_radius: 0.0,
        }
    }

    pub fn detonator() -> Self {
        Self {
            health: 50,
            speed: 3.0,
            damage_grace: 0.5,
            melee_range: 0.0,
            melee_damage: 0,
            swing_duration: 0.0,
            trigger_distance: 35.0,
            blast_radius: 50.0,
            blast_damage: 20,
            fuse_seconds: 1.0,
            ..ProfileParams::pursuer()
        }
    }

    pub fn jumper() -> Self {
        Self {
            health: 30,
            speed: 0.0,
            hitbox: Vec2::new(108.0, 108.0),
            damaged_duration: 0.5,
            knockback_impulse: 2.0,
            knockback_scale: 40.0,
            knockback_decay: KnockbackDecay::Multiplicative(0.9),
            melee_range: 0.0,
            melee_damage: 0,
            swing_duration: 0.0,
            jump_distance: 200.0,
            jump_impulse: -15.0,
            gravity_per_tick: 0.8,
            jump_idle_seconds: 1.0,
            cooldown_seconds: 1.0,
            contact_damage: 5,
            contact_cooldown: 1.0,
            contact_radius: 54.0,
            ..ProfileParams::pursuer()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_shipped_constants() {
        let t = Tunables::default();
        assert_eq!(t.player.max_health, 100);
        assert_eq!(t.pursuer.melee_damage, 10);
        assert_eq!(t.detonator.blast_damage, 20);
        assert!((t.detonator.trigger_distance - 35.0).abs() < f32::EPSILON);
        assert!(t.detonator.blast_radius > t.detonator.trigger_distance);
        assert_eq!(t.jumper.contact_damage, 5);
        assert!((t.jumper.contact_radius - 54.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_json_override_keeps_remaining_defaults() {
        let json = r#"{ "player": { "speed": 6.0 }, "pursuer": { "health": 40 } }"#;
        let t: Tunables = serde_json::from_str(json).expect("tunables json");
        assert!((t.player.speed - 6.0).abs() < f32::EPSILON);
        assert_eq!(t.player.max_health, 100);
        assert_eq!(t.pursuer.health, 40);
        assert_eq!(t.pursuer.melee_damage, 10);
    }

    #[test]
    fn empty_object_is_the_default_config() {
        let t: Tunables = serde_json::from_str("{}").expect("tunables json");
        assert_eq!(t.jumper.health, Tunables::default().jumper.health);
    }
}
