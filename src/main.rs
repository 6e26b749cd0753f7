//! Meteor Dodge entry point
//!
//! Runs a headless demo session with a simple autoplayer standing in for the
//! input device, and the built-in broad phase standing in for the physics
//! collaborator. Events that a presentation layer would consume are logged.

use std::time::{SystemTime, UNIX_EPOCH};

use meteor_dodge::consts::*;
use meteor_dodge::secs_from_ticks;
use meteor_dodge::sim::{GameEvent, PowerUpKind, SessionState, TickInput, detect_contacts, tick};
use meteor_dodge::{Settings, Tuning};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = SessionState::new(seed, Settings::default(), Tuning::default());
    log::info!("meteor-dodge demo session, seed {seed}");

    // Cap the demo at five simulated minutes
    let max_ticks = 5 * 60 * TICKS_PER_SECOND as u64;
    while !state.over && state.time_ticks < max_ticks {
        let input = TickInput {
            tap_x: autoplayer_tap(&state),
            fire: state.power_up.fire_allowed() && state.time_ticks % 30 == 0,
            contacts: detect_contacts(&state),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            report(&state, &event);
        }
    }

    println!(
        "survived {:.1}s with {} strike(s)",
        state.elapsed_secs(),
        state.strikes
    );
}

/// Dodge the nearest falling hazard; drift toward pickups when safe
fn autoplayer_tap(state: &SessionState) -> Option<f32> {
    // Steer once every tenth of a second, like a human tapping
    if !state.time_ticks.is_multiple_of(12) {
        return None;
    }
    let player_x = state.player.pos.x;

    let threat = state
        .hazards
        .iter()
        .filter(|h| h.pos.y > FIELD_HEIGHT / 3.0 && (h.pos.x - player_x).abs() < 80.0)
        .min_by(|a, b| b.pos.y.total_cmp(&a.pos.y));
    if let Some(hazard) = threat {
        let dodge = if hazard.pos.x >= player_x { -100.0 } else { 100.0 };
        return Some((player_x + dodge).clamp(0.0, FIELD_WIDTH));
    }

    state.pickups.first().map(|p| p.pos.x)
}

fn report(state: &SessionState, event: &GameEvent) {
    match event {
        GameEvent::SessionStarted => log::info!("session started"),
        GameEvent::StrikeCountChanged(n) => log::info!("strikes: {n}"),
        GameEvent::PowerUpActivated { kind, duration_ticks } => {
            log::info!(
                "{} activated for {:.0}s",
                kind.as_str(),
                secs_from_ticks(*duration_ticks as u64)
            );
            if *kind == PowerUpKind::SecretBox {
                log::debug!(
                    "vision limited to {:.0} px around the player",
                    state.tuning.vision_mask_radius
                );
            }
        }
        GameEvent::PowerUpCountdown { kind, remaining_ticks } => log::debug!(
            "{}: {:.0}s left",
            kind.as_str(),
            secs_from_ticks(*remaining_ticks as u64)
        ),
        GameEvent::PowerUpExpired(kind) => log::info!("{} expired", kind.as_str()),
        GameEvent::HazardDestroyed { pos, cause } => {
            log::debug!("hazard destroyed at ({:.0}, {:.0}) by {cause:?}", pos.x, pos.y)
        }
        GameEvent::ShotFired { pos } => log::debug!("shot fired at ({:.0}, {:.0})", pos.x, pos.y),
        GameEvent::Jumped => log::debug!("jumped"),
        GameEvent::GameOver { elapsed_ticks } => log::info!(
            "game over: survived {:.1}s, {} strikes",
            secs_from_ticks(*elapsed_ticks),
            state.strikes
        ),
    }
}
