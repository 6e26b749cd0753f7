//! Meteor Dodge - a falling-hazard arcade game
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (spawning, collisions, state machines)
//! - `settings`: Player-facing configuration (input profile, feature toggles)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio playback, asset loading and input-device polling are
//! external collaborators; the simulation consumes contact notifications and
//! input edges, and emits [`sim::GameEvent`]s for the presentation layer.

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{InputProfile, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Ticks per wall-clock second at the fixed timestep
    pub const TICKS_PER_SECOND: u32 = 120;

    /// Play field dimensions (logical pixels, origin top-left, +y down)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Height of the indestructible ground band at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 16.0;

    /// Entity half-extents for the broad-phase helper
    pub const PLAYER_HALF: glam::Vec2 = glam::Vec2::new(16.0, 24.0);
    pub const HAZARD_HALF: glam::Vec2 = glam::Vec2::new(16.0, 16.0);
    pub const PICKUP_HALF: glam::Vec2 = glam::Vec2::new(12.0, 12.0);
    pub const PROJECTILE_HALF: glam::Vec2 = glam::Vec2::new(4.0, 8.0);

    /// Spawn height above the top edge of the field
    pub const SPAWN_Y: f32 = -20.0;
    /// Entities further than this beyond a field edge are culled
    pub const CULL_MARGIN: f32 = 50.0;

    /// Gun sprite anchor relative to the player center
    pub const GUN_ANCHOR_OFFSET: glam::Vec2 = glam::Vec2::new(15.0, -5.0);
    /// Projectile spawn point relative to the player center
    pub const MUZZLE_OFFSET: glam::Vec2 = glam::Vec2::new(15.0, -10.0);
}

/// Convert a millisecond duration to simulation ticks (rounded up, at least 1)
#[inline]
pub fn ticks_from_ms(ms: u32) -> u32 {
    let ticks = (ms as u64 * consts::TICKS_PER_SECOND as u64).div_ceil(1000);
    (ticks as u32).max(1)
}

/// Convert a tick count to seconds
#[inline]
pub fn secs_from_ticks(ticks: u64) -> f32 {
    ticks as f32 * consts::SIM_DT
}

/// Axis-aligned overlap test between two centered boxes
#[inline]
pub fn aabb_overlap(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> bool {
    (center_a.x - center_b.x).abs() <= half_a.x + half_b.x
        && (center_a.y - center_b.y).abs() <= half_a.y + half_b.y
}
