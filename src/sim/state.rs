//! Session state and core simulation types
//!
//! [`SessionState`] is the root aggregate for one play-through. It exclusively
//! owns the player, the entity registry and the power-up slot; collaborators
//! address entities by id and the registry is the sole mutator.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::secs_from_ticks;
use crate::settings::Settings;
use crate::tuning::Tuning;

use super::player::Player;
use super::powerup::{PowerUpKind, PowerUpSlot};
use super::spawn::{self, SpawnScheduler};

/// Stable entity identifier issued by the registry
pub type EntityId = u32;

/// Why a hazard left the field (selects the presentation effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyCause {
    /// Reached the ground band
    Ground,
    /// Struck the player
    PlayerContact,
    /// Shot down by a projectile
    Shot,
}

/// Semantic events for the external presentation layer (HUD, audio, screens)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    StrikeCountChanged(u32),
    PowerUpActivated { kind: PowerUpKind, duration_ticks: u32 },
    PowerUpCountdown { kind: PowerUpKind, remaining_ticks: u32 },
    PowerUpExpired(PowerUpKind),
    HazardDestroyed { pos: Vec2, cause: DestroyCause },
    ShotFired { pos: Vec2 },
    Jumped,
    GameOver { elapsed_ticks: u64 },
}

/// A falling meteor
#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: EntityId,
    pub pos: Vec2,
    /// Downward speed (px/s)
    pub fall_speed: f32,
    /// Set on the first player contact so overlapping physics substeps never
    /// double-count one meteor as two strikes
    pub struck: bool,
    pub spawn_tick: u64,
    /// Zigzag baseline
    pub origin_x: f32,
    pub oscillates: bool,
}

/// A falling pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: EntityId,
    pub pos: Vec2,
    pub fall_speed: f32,
    pub kind: PowerUpKind,
}

/// An upward bullet, only alive while the gun is equipped
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: EntityId,
    pub pos: Vec2,
    /// Upward speed (px/s), gravity-free
    pub speed: f32,
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub tuning: Tuning,

    /// Ticks since session start
    pub time_ticks: u64,
    /// Counted player-hazard contacts
    pub strikes: u32,
    /// Terminal flag; true iff `strikes >= tuning.strike_limit`
    pub over: bool,

    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<PowerUp>,
    pub projectiles: Vec<Projectile>,

    pub power_up: PowerUpSlot,
    pub scheduler: SpawnScheduler,

    /// Gun sprite anchor, tracking the player while armed
    pub gun_anchor: Option<Vec2>,
    /// Vision mask center while the secret-box effect is live
    pub vision_mask: Option<Vec2>,

    events: Vec<GameEvent>,
    next_id: EntityId,
}

impl SessionState {
    /// Create and arm a new session. The field is never momentarily empty:
    /// one hazard spawns immediately, bypassing the first timer period.
    pub fn new(seed: u64, settings: Settings, tuning: Tuning) -> Self {
        let scheduler = SpawnScheduler::new(&tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(),
            settings,
            tuning,
            time_ticks: 0,
            strikes: 0,
            over: false,
            hazards: Vec::new(),
            pickups: Vec::new(),
            projectiles: Vec::new(),
            power_up: PowerUpSlot::default(),
            scheduler,
            gun_anchor: None,
            vision_mask: None,
            events: Vec::new(),
            next_id: 1,
        };

        state.push_event(GameEvent::SessionStarted);
        spawn::spawn_hazard(&mut state);
        log::info!("session started (seed {seed})");
        state
    }

    /// Reset everything to initial values, cancelling all pending timers.
    /// Safe to call at any time, including mid-activation.
    pub fn restart(&mut self) {
        *self = Self::new(self.seed, self.settings.clone(), self.tuning.clone());
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Elapsed session time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        secs_from_ticks(self.time_ticks)
    }

    /// Top edge of the ground band
    pub fn ground_top(&self) -> f32 {
        FIELD_HEIGHT - GROUND_HEIGHT
    }

    pub fn hazard(&self, id: EntityId) -> Option<&Hazard> {
        self.hazards.iter().find(|h| h.id == id)
    }

    pub fn hazard_mut(&mut self, id: EntityId) -> Option<&mut Hazard> {
        self.hazards.iter_mut().find(|h| h.id == id)
    }

    /// Remove a hazard by id; a no-op returning None when the id is already
    /// gone, so multiple router rules may target the same entity in one tick
    pub fn destroy_hazard(&mut self, id: EntityId) -> Option<Hazard> {
        let idx = self.hazards.iter().position(|h| h.id == id)?;
        Some(self.hazards.remove(idx))
    }

    /// Idempotent pickup removal
    pub fn destroy_pickup(&mut self, id: EntityId) -> Option<PowerUp> {
        let idx = self.pickups.iter().position(|p| p.id == id)?;
        Some(self.pickups.remove(idx))
    }

    /// Idempotent projectile removal
    pub fn destroy_projectile(&mut self, id: EntityId) -> Option<Projectile> {
        let idx = self.projectiles.iter().position(|p| p.id == id)?;
        Some(self.projectiles.remove(idx))
    }

    /// Per-tick registry housekeeping: integrate falls, recompute zigzag
    /// offsets and cull entities that left the visible bounds
    pub fn update_entities(&mut self, dt: f32) {
        let now = self.time_ticks;
        for hazard in &mut self.hazards {
            hazard.pos.y += hazard.fall_speed * dt;
            if hazard.oscillates {
                let age = secs_from_ticks(now.saturating_sub(hazard.spawn_tick));
                hazard.pos.x = hazard.origin_x
                    + (age * self.tuning.zigzag_frequency).sin() * self.tuning.zigzag_amplitude;
            }
        }
        // Hazards normally die on ground contact; this is a safety net only
        self.hazards.retain(|h| h.pos.y < FIELD_HEIGHT + CULL_MARGIN);

        for pickup in &mut self.pickups {
            pickup.pos.y += pickup.fall_speed * dt;
        }
        if self.settings.despawn_offscreen_pickups {
            self.pickups.retain(|p| p.pos.y < FIELD_HEIGHT + CULL_MARGIN);
        }

        for projectile in &mut self.projectiles {
            projectile.pos.y -= projectile.speed * dt;
        }
        self.projectiles.retain(|p| p.pos.y > -CULL_MARGIN);
    }

    /// Terminate the session: halt spawning, collapse any live activation and
    /// emit the outcome. Idempotent; everything after this is a no-op except
    /// [`SessionState::restart`].
    pub fn game_over(&mut self) {
        if self.over {
            return;
        }
        self.over = true;
        self.scheduler.halt();
        if let Some(kind) = self.power_up.force_clear() {
            self.push_event(GameEvent::PowerUpExpired(kind));
        }
        self.gun_anchor = None;
        self.vision_mask = None;
        self.push_event(GameEvent::GameOver {
            elapsed_ticks: self.time_ticks,
        });
        log::info!(
            "game over after {:.1}s with {} strikes",
            self.elapsed_secs(),
            self.strikes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(7, Settings::default(), Tuning::default())
    }

    #[test]
    fn test_new_session_spawns_one_hazard() {
        let state = session();
        assert_eq!(state.hazards.len(), 1);
        assert_eq!(state.strikes, 0);
        assert!(!state.over);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut state = session();
        let id = state.hazards[0].id;
        assert!(state.destroy_hazard(id).is_some());
        assert!(state.destroy_hazard(id).is_none());
    }

    #[test]
    fn test_game_over_emits_once() {
        let mut state = session();
        state.game_over();
        state.game_over();
        let overs = state
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
        assert!(state.scheduler.is_halted());
    }

    #[test]
    fn test_projectile_culled_above_field() {
        let mut state = session();
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(100.0, -CULL_MARGIN - 1.0),
            speed: 1200.0,
        });
        state.update_entities(crate::consts::SIM_DT);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_offscreen_pickup_policy() {
        let mut state = session();
        state.settings.despawn_offscreen_pickups = false;
        let id = state.next_entity_id();
        state.pickups.push(PowerUp {
            id,
            pos: Vec2::new(100.0, FIELD_HEIGHT + CULL_MARGIN + 10.0),
            fall_speed: 100.0,
            kind: PowerUpKind::Gun,
        });
        state.update_entities(crate::consts::SIM_DT);
        assert_eq!(state.pickups.len(), 1, "persist policy keeps the pickup");

        state.settings.despawn_offscreen_pickups = true;
        state.update_entities(crate::consts::SIM_DT);
        assert!(state.pickups.is_empty(), "despawn policy culls it");
    }
}
