//! Collision event routing
//!
//! Pairwise contact notifications arrive once per tick from the physics
//! collaborator and are dispatched by entity-category pairing. Within a tick,
//! hazard-ground and player-hazard contacts resolve before pickups and
//! projectile hits, so a game-over supersedes any same-tick pickup. Every
//! handler is a silent no-op for stale ids; nothing here is an error.

use crate::aabb_overlap;
use crate::consts::*;
use crate::ticks_from_ms;

use super::powerup::PowerUpKind;
use super::state::{DestroyCause, EntityId, GameEvent, SessionState};

/// A pairwise contact notification for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Hazard reached the indestructible ground band
    HazardGround { hazard: EntityId },
    /// Hazard overlapped the player
    PlayerHazard { hazard: EntityId },
    /// Player overlapped a pickup
    PlayerPowerUp { pickup: EntityId },
    /// Projectile overlapped a hazard
    ProjectileHazard {
        projectile: EntityId,
        hazard: EntityId,
    },
}

/// Dispatch one tick's worth of contacts
pub fn route_contacts(state: &mut SessionState, contacts: &[Contact]) {
    if state.over {
        return;
    }

    // Pass 1: ground impacts and strikes
    for contact in contacts {
        if state.over {
            return;
        }
        match *contact {
            Contact::HazardGround { hazard } => on_ground_hit(state, hazard),
            Contact::PlayerHazard { hazard } => on_player_hit(state, hazard),
            _ => {}
        }
    }

    // Pass 2: pickups and projectile hits
    for contact in contacts {
        if state.over {
            return;
        }
        match *contact {
            Contact::PlayerPowerUp { pickup } => on_pickup(state, pickup),
            Contact::ProjectileHazard { projectile, hazard } => {
                on_projectile_hit(state, projectile, hazard);
            }
            _ => {}
        }
    }
}

/// Ground is never destroyed; the hazard is
fn on_ground_hit(state: &mut SessionState, hazard_id: EntityId) {
    if let Some(hazard) = state.destroy_hazard(hazard_id) {
        state.push_event(GameEvent::HazardDestroyed {
            pos: hazard.pos,
            cause: DestroyCause::Ground,
        });
    }
}

/// Count a strike unless this hazard's contact already resolved. The struck
/// flag guards against one overlap being reported across several physics
/// substeps.
fn on_player_hit(state: &mut SessionState, hazard_id: EntityId) {
    let Some(hazard) = state.hazard_mut(hazard_id) else {
        return;
    };
    if hazard.struck {
        return;
    }
    hazard.struck = true;
    let pos = hazard.pos;
    state.destroy_hazard(hazard_id);

    state.strikes += 1;
    let strikes = state.strikes;
    state.push_event(GameEvent::StrikeCountChanged(strikes));
    state.push_event(GameEvent::HazardDestroyed {
        pos,
        cause: DestroyCause::PlayerContact,
    });

    let lockout = ticks_from_ms(state.tuning.hit_lockout_ms);
    state.player.start_hit_lockout(lockout);
    log::debug!("strike {strikes}");

    if strikes >= state.tuning.strike_limit {
        state.game_over();
    }
}

/// Activate a pickup, or ignore the overlap entirely while the lock is held.
/// A rejected pickup stays alive for a later attempt.
fn on_pickup(state: &mut SessionState, pickup_id: EntityId) {
    if state.power_up.is_locked() {
        return;
    }
    let Some(pickup) = state.destroy_pickup(pickup_id) else {
        return;
    };

    let duration_ticks = match pickup.kind {
        PowerUpKind::Gun => ticks_from_ms(state.tuning.gun_duration_ms),
        PowerUpKind::SecretBox => ticks_from_ms(state.tuning.secret_box_duration_ms),
    };
    if state.power_up.activate(pickup.kind, duration_ticks) {
        state.push_event(GameEvent::PowerUpActivated {
            kind: pickup.kind,
            duration_ticks,
        });
    }
}

/// Destroy both entities unconditionally; no strike is counted
fn on_projectile_hit(state: &mut SessionState, projectile_id: EntityId, hazard_id: EntityId) {
    state.destroy_projectile(projectile_id);
    if let Some(hazard) = state.destroy_hazard(hazard_id) {
        state.push_event(GameEvent::HazardDestroyed {
            pos: hazard.pos,
            cause: DestroyCause::Shot,
        });
    }
}

/// Broad-phase AABB contact detection over the current registry.
///
/// Stands in for the external physics collaborator in the demo binary and in
/// tests; the router itself is agnostic to where contacts come from.
pub fn detect_contacts(state: &SessionState) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let ground_top = state.ground_top();
    let player = state.player.pos;

    for hazard in &state.hazards {
        if hazard.pos.y + HAZARD_HALF.y >= ground_top {
            contacts.push(Contact::HazardGround { hazard: hazard.id });
        }
        if aabb_overlap(player, PLAYER_HALF, hazard.pos, HAZARD_HALF) {
            contacts.push(Contact::PlayerHazard { hazard: hazard.id });
        }
    }

    for pickup in &state.pickups {
        if aabb_overlap(player, PLAYER_HALF, pickup.pos, PICKUP_HALF) {
            contacts.push(Contact::PlayerPowerUp { pickup: pickup.id });
        }
    }

    for projectile in &state.projectiles {
        for hazard in &state.hazards {
            if aabb_overlap(projectile.pos, PROJECTILE_HALF, hazard.pos, HAZARD_HALF) {
                contacts.push(Contact::ProjectileHazard {
                    projectile: projectile.id,
                    hazard: hazard.id,
                });
            }
        }
    }

    contacts
}
