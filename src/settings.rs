//! Game settings and feature configuration
//!
//! One simulation, parameterized: input handling, zigzag hazards and the set
//! of activatable pickups are configuration rather than separate code paths.

use serde::{Deserialize, Serialize};

/// How player intent reaches the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputProfile {
    /// Held horizontal axis plus discrete jump/fire edges
    Keys,
    /// Pointer-down taps: single tap walks toward the tap, double tap jumps,
    /// and a tap fires instead while the gun is active
    #[default]
    Pointer,
}

impl InputProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputProfile::Keys => "Keys",
            InputProfile::Pointer => "Pointer",
        }
    }
}

/// Session feature configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input handling variant
    pub input_profile: InputProfile,

    /// Hazards oscillate around their spawn baseline
    pub zigzag_hazards: bool,

    /// Gun pickups spawn
    pub gun_enabled: bool,
    /// Secret-box pickups spawn
    pub secret_box_enabled: bool,

    /// Remove uncollected pickups once they leave the field
    pub despawn_offscreen_pickups: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_profile: InputProfile::Pointer,
            zigzag_hazards: true,
            gun_enabled: true,
            secret_box_enabled: true,
            despawn_offscreen_pickups: true,
        }
    }
}

impl Settings {
    /// Parse settings overrides from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
