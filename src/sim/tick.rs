//! Fixed timestep session tick
//!
//! One tick runs to completion before the next begins; every timer in the
//! game is multiplexed onto this loop. Order within a tick: contact routing,
//! then timer expiries (spawns, ramp, power-up countdown), then player intent
//! and state derivation, then registry housekeeping.

use crate::consts::*;
use crate::settings::InputProfile;
use crate::ticks_from_ms;

use super::collision::{self, Contact};
use super::powerup::PowerUpKind;
use super::spawn;
use super::state::{GameEvent, Projectile, SessionState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held horizontal axis in [-1, 1] (keys profile)
    pub move_axis: f32,
    /// Discrete jump press edge
    pub jump: bool,
    /// Discrete fire press edge
    pub fire: bool,
    /// Pointer-down x coordinate (pointer profile)
    pub tap_x: Option<f32>,
    /// Restart the session; honored even after game over
    pub restart: bool,
    /// Pairwise contact notifications resolved for this tick
    pub contacts: Vec<Contact>,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput, dt: f32) {
    if input.restart {
        state.restart();
        return;
    }
    // Terminal state: every mutation except restart is a no-op
    if state.over {
        return;
    }

    state.time_ticks += 1;

    // Collision resolution comes first so a game-over supersedes this tick's
    // timer fires and pickups
    collision::route_contacts(state, &input.contacts);
    if state.over {
        return;
    }

    spawn::run(state);
    run_powerup_countdown(state);
    handle_input(state, input);

    state.player.integrate(dt, state.tuning.gravity);
    state.player.derive_anim();

    state.update_entities(dt);
    update_attachments(state);
}

/// Count the live activation down and surface expiry plus once-per-second
/// HUD countdown updates
fn run_powerup_countdown(state: &mut SessionState) {
    if let Some(kind) = state.power_up.tick() {
        state.push_event(GameEvent::PowerUpExpired(kind));
        return;
    }
    if let (Some(kind), Some(remaining)) =
        (state.power_up.active_kind(), state.power_up.remaining_ticks())
        && remaining % TICKS_PER_SECOND == 0
    {
        state.push_event(GameEvent::PowerUpCountdown {
            kind,
            remaining_ticks: remaining,
        });
    }
}

fn handle_input(state: &mut SessionState, input: &TickInput) {
    match state.settings.input_profile {
        InputProfile::Keys => {
            state.player.apply_axis(input.move_axis, state.tuning.player_speed);
        }
        InputProfile::Pointer => {
            if let Some(tap_x) = input.tap_x {
                on_tap(state, tap_x);
            }
        }
    }

    // Discrete edges apply in both profiles
    if input.jump && state.player.try_jump(state.tuning.jump_speed) {
        state.push_event(GameEvent::Jumped);
    }
    if input.fire && state.power_up.fire_allowed() {
        fire_projectile(state);
    }
}

/// Pointer-down: fire while armed, otherwise jump on a double tap; every tap
/// also steers the player toward the tapped x
fn on_tap(state: &mut SessionState, tap_x: f32) {
    let threshold = ticks_from_ms(state.tuning.tap_threshold_ms);

    if state.power_up.fire_allowed() {
        fire_projectile(state);
    } else if state.player.register_tap(state.time_ticks, threshold)
        && state.player.try_jump(state.tuning.jump_speed)
    {
        state.push_event(GameEvent::Jumped);
    }

    state.player.set_move_target(tap_x, state.tuning.player_speed);
}

fn fire_projectile(state: &mut SessionState) {
    let pos = state.player.pos + MUZZLE_OFFSET;
    let id = state.next_entity_id();
    let speed = state.tuning.bullet_speed;
    state.projectiles.push(Projectile { id, pos, speed });
    state.push_event(GameEvent::ShotFired { pos });
}

/// Recompute the per-tick visual attachments that follow the player
fn update_attachments(state: &mut SessionState) {
    state.gun_anchor = match state.power_up.active_kind() {
        Some(PowerUpKind::Gun) => Some(state.player.pos + GUN_ANCHOR_OFFSET),
        _ => None,
    };
    state.vision_mask = match state.power_up.active_kind() {
        Some(PowerUpKind::SecretBox) => Some(state.player.pos),
        _ => None,
    };
}
