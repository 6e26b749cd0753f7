//! Deterministic session simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable entity-ID addressing
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod player;
pub mod powerup;
pub mod ramp;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Contact, detect_contacts, route_contacts};
pub use player::{Player, PlayerAnim};
pub use powerup::{PowerUpKind, PowerUpSlot};
pub use spawn::SpawnScheduler;
pub use state::{
    DestroyCause, EntityId, GameEvent, Hazard, PowerUp, Projectile, SessionState,
};
pub use tick::{TickInput, tick};
pub use timer::Periodic;
