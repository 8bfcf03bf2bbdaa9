//! Headless 2D action-game simulation core.
//!
//! The crate owns everything the host renderer does not: the fixed-step
//! tick driver, the player controller, the three enemy behavior profiles,
//! the combat resolver, and the collision helpers underneath them. A host
//! feeds input events in, calls [`World::advance_tick`], and reads actor
//! state back between ticks.

pub mod anim;
pub mod actor;
pub mod assets;
pub mod clock;
pub mod combat;
pub mod config;
pub mod enemies;
pub mod input;
pub mod math;
pub mod player;
pub mod world;

pub use actor::{ActorBody, Facing};
pub use anim::{AnimClock, FrameTable};
pub use assets::{AssetError, AssetManifest, SheetSpec};
pub use clock::{TickClock, NOMINAL_DT};
pub use combat::{
    CombatEvent, CombatEventBus, CombatEventCounts, CombatEventKind, Knockback, KnockbackDecay,
};
pub use config::{PlayerParams, ProfileParams, Tunables, WorldParams};
pub use enemies::{Enemy, EnemyStateTag, ProfileKind};
pub use input::MoveDirection;
pub use math::{Circle, Rect, Vec2};
pub use player::{Player, PlayerState};
pub use world::{EnemyId, World, WorldBounds};
