//! Spawn scheduler
//!
//! Three independent periodic timers (hazard, gun pickup, secret-box pickup)
//! plus the one-second difficulty-ramp cadence, all multiplexed onto the
//! simulation tick. Timers re-arm immediately after firing; a rejected spawn
//! is skipped silently with no backlog or catch-up.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::ticks_from_ms;
use crate::tuning::Tuning;

use super::powerup::PowerUpKind;
use super::ramp;
use super::state::{Hazard, PowerUp, SessionState};
use super::timer::Periodic;

#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    hazard: Periodic,
    gun: Periodic,
    secret_box: Periodic,
    ramp: Periodic,
    halted: bool,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hazard: Periodic::new(ticks_from_ms(tuning.initial_spawn_interval_ms)),
            gun: Periodic::new(ticks_from_ms(tuning.gun_spawn_interval_ms)),
            secret_box: Periodic::new(ticks_from_ms(tuning.secret_box_spawn_interval_ms)),
            ramp: Periodic::new(TICKS_PER_SECOND),
            halted: false,
        }
    }

    /// Stop all spawning permanently (game over); only a restart re-arms
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Current hazard spawn interval in ticks
    pub fn current_interval_ticks(&self) -> u32 {
        self.hazard.period()
    }
}

/// Advance all spawn timers by one tick
pub fn run(state: &mut SessionState) {
    if state.scheduler.halted {
        return;
    }

    // Difficulty ramp: interval decay applies to the hazard timer's next
    // re-arm, not the countdown in flight
    if state.scheduler.ramp.tick() {
        let step = ticks_from_ms(state.tuning.spawn_interval_decay_ms);
        let floor = ticks_from_ms(state.tuning.min_spawn_interval_ms);
        let next = ramp::decay_interval(state.scheduler.hazard.period(), step, floor);
        state.scheduler.hazard.set_period(next);
    }

    if state.scheduler.hazard.tick() {
        spawn_hazard(state);
    }

    // Pickup guard is checked at fire time; a rejected fire still re-arms
    if state.scheduler.gun.tick()
        && state.settings.gun_enabled
        && !state.power_up.is_locked()
    {
        spawn_pickup(state, PowerUpKind::Gun);
    }
    if state.scheduler.secret_box.tick()
        && state.settings.secret_box_enabled
        && !state.power_up.is_locked()
    {
        spawn_pickup(state, PowerUpKind::SecretBox);
    }
}

/// Create one hazard at a random x within the field margins, with a random
/// fall speed and (if enabled) a zigzag baseline anchored at the spawn point
pub fn spawn_hazard(state: &mut SessionState) {
    let margin = state.tuning.hazard_spawn_margin;
    let x = state.rng.random_range(margin..=FIELD_WIDTH - margin);
    let fall_speed = state
        .rng
        .random_range(state.tuning.hazard_speed_min..=state.tuning.hazard_speed_max);

    let id = state.next_entity_id();
    let oscillates = state.settings.zigzag_hazards;
    let spawn_tick = state.time_ticks;
    state.hazards.push(Hazard {
        id,
        pos: Vec2::new(x, SPAWN_Y),
        fall_speed,
        struck: false,
        spawn_tick,
        origin_x: x,
        oscillates,
    });
    log::debug!("hazard {id} spawned at x={x:.0}, {fall_speed:.0} px/s");
}

fn spawn_pickup(state: &mut SessionState, kind: PowerUpKind) {
    let margin = state.tuning.pickup_spawn_margin;
    let x = state.rng.random_range(margin..=FIELD_WIDTH - margin);
    let fall_speed = match kind {
        PowerUpKind::Gun => state.tuning.gun_fall_speed,
        PowerUpKind::SecretBox => state.tuning.secret_box_fall_speed,
    };

    let id = state.next_entity_id();
    state.pickups.push(PowerUp {
        id,
        pos: Vec2::new(x, SPAWN_Y),
        fall_speed,
        kind,
    });
    log::debug!("{} pickup {id} spawned at x={x:.0}", kind.as_str());
}
