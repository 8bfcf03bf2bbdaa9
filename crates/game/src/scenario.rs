//! Headless demo scenario: a fixed arena with one enemy of each profile
//! and a scripted input sequence, run at the nominal 60 Hz step.

use sim::{MoveDirection, ProfileKind, Tunables, Vec2, World};
use tracing::{debug, info};

const DEMO_TICKS: u64 = 900;

const PURSUER_SPAWN: Vec2 = Vec2::new(800.0, 400.0);
const DETONATOR_SPAWN: Vec2 = Vec2::new(500.0, 700.0);
const JUMPER_SPAWN: Vec2 = Vec2::new(180.0, 300.0);

#[derive(Debug, Clone, Copy)]
enum ScriptedInput {
    Press(MoveDirection),
    Release(MoveDirection),
    Attack,
}

/// Tick-stamped input script. Roughly: run at the pursuer and cut it down,
/// drift into the detonator's trigger range, then retreat toward the
/// jumper's corner and finish it off.
const SCRIPT: &[(u64, ScriptedInput)] = &[
    (0, ScriptedInput::Press(MoveDirection::Right)),
    (60, ScriptedInput::Release(MoveDirection::Right)),
    (80, ScriptedInput::Attack),
    (120, ScriptedInput::Attack),
    (160, ScriptedInput::Attack),
    (220, ScriptedInput::Press(MoveDirection::Down)),
    (280, ScriptedInput::Release(MoveDirection::Down)),
    (500, ScriptedInput::Press(MoveDirection::Left)),
    (500, ScriptedInput::Press(MoveDirection::Up)),
    (620, ScriptedInput::Release(MoveDirection::Left)),
    (620, ScriptedInput::Release(MoveDirection::Up)),
    (700, ScriptedInput::Attack),
    (750, ScriptedInput::Attack),
    (800, ScriptedInput::Attack),
];

pub struct DemoSummary {
    pub ticks: u64,
    pub player_health: i32,
    pub player_hits_taken: u32,
    pub enemies_defeated: usize,
    pub total_combat_events: u32,
}

pub fn build_demo_world(tunables: Tunables) -> World {
    let mut world = World::new(tunables);
    world.spawn_enemy(ProfileKind::Pursuer, PURSUER_SPAWN);
    world.spawn_enemy(ProfileKind::Detonator, DETONATOR_SPAWN);
    world.spawn_enemy(ProfileKind::Jumper, JUMPER_SPAWN);
    world
}

pub fn run_demo(tunables: Tunables) -> DemoSummary {
    let mut world = build_demo_world(tunables);
    let mut total_combat_events = 0u32;

    for tick in 0..DEMO_TICKS {
        for (at, input) in SCRIPT {
            if *at == tick {
                apply_input(&mut world, *input);
            }
        }

        let counts = world.step();
        total_combat_events += counts.total;
        if counts.total > 0 {
            debug!(
                tick,
                total = counts.total,
                player_hit = counts.player_hit,
                enemy_hit = counts.enemy_hit,
                enemy_died = counts.enemy_died,
                "combat_events"
            );
        }
    }

    let enemies_defeated = world
        .enemies()
        .iter()
        .filter(|enemy| !enemy.body.alive)
        .count();
    info!(
        player_health = world.player().body.health,
        enemies_defeated, "demo_script_finished"
    );

    DemoSummary {
        ticks: DEMO_TICKS,
        player_health: world.player().body.health,
        player_hits_taken: world.player().hits_taken(),
        enemies_defeated,
        total_combat_events,
    }
}

fn apply_input(world: &mut World, input: ScriptedInput) {
    match input {
        ScriptedInput::Press(direction) => world.on_move_intent(direction, true),
        ScriptedInput::Release(direction) => world.on_move_intent(direction, false),
        ScriptedInput::Attack => world.on_attack_triggered(),
    }
}
