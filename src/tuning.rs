//! Data-driven game balance
//!
//! Every gameplay number lives here so a balance pass never touches sim code.
//! Durations are in milliseconds, speeds in pixels per second. Defaults match
//! the shipped balance.

use serde::{Deserialize, Serialize};

/// Numeric game balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Session ===
    /// Strikes before the session ends
    pub strike_limit: u32,

    // === Difficulty ramp ===
    /// Hazard spawn interval at session start (ms)
    pub initial_spawn_interval_ms: u32,
    /// Spawn interval floor (ms)
    pub min_spawn_interval_ms: u32,
    /// Interval decay applied each ramp second (ms)
    pub spawn_interval_decay_ms: u32,

    // === Hazards ===
    /// Fall speed range (px/s)
    pub hazard_speed_min: f32,
    pub hazard_speed_max: f32,
    /// Horizontal spawn margin from either field edge (px)
    pub hazard_spawn_margin: f32,
    /// Zigzag half-width around the spawn baseline (px)
    pub zigzag_amplitude: f32,
    /// Zigzag cycles per second
    pub zigzag_frequency: f32,

    // === Power-ups ===
    /// Gun pickup spawn period (ms)
    pub gun_spawn_interval_ms: u32,
    /// Secret-box pickup spawn period (ms)
    pub secret_box_spawn_interval_ms: u32,
    /// Horizontal spawn margin for pickups (px)
    pub pickup_spawn_margin: f32,
    /// Gun pickup fall speed (px/s)
    pub gun_fall_speed: f32,
    /// Secret-box pickup fall speed (px/s)
    pub secret_box_fall_speed: f32,
    /// Gun activation duration (ms)
    pub gun_duration_ms: u32,
    /// Secret-box vision effect duration (ms)
    pub secret_box_duration_ms: u32,
    /// Radius of the vision mask while the secret-box effect is live (px)
    pub vision_mask_radius: f32,
    /// Projectile speed, upward (px/s)
    pub bullet_speed: f32,

    // === Player ===
    /// Horizontal walk speed (px/s)
    pub player_speed: f32,
    /// Jump impulse, upward (px/s)
    pub jump_speed: f32,
    /// Downward gravity on the player (px/s^2)
    pub gravity: f32,
    /// Hit-animation lockout window (ms)
    pub hit_lockout_ms: u32,
    /// Maximum gap between taps that still counts as a double tap (ms)
    pub tap_threshold_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            strike_limit: 3,

            initial_spawn_interval_ms: 2000,
            min_spawn_interval_ms: 200,
            spawn_interval_decay_ms: 40,

            hazard_speed_min: 150.0,
            hazard_speed_max: 300.0,
            hazard_spawn_margin: 20.0,
            zigzag_amplitude: 50.0,
            zigzag_frequency: 2.0,

            gun_spawn_interval_ms: 5000,
            secret_box_spawn_interval_ms: 8000,
            pickup_spawn_margin: 50.0,
            gun_fall_speed: 200.0,
            secret_box_fall_speed: 100.0,
            gun_duration_ms: 10_000,
            secret_box_duration_ms: 6000,
            vision_mask_radius: 150.0,
            bullet_speed: 1200.0,

            player_speed: 300.0,
            jump_speed: 400.0,
            gravity: 600.0,
            hit_lockout_ms: 1000,
            tap_threshold_ms: 300,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
