//! Player movement and animation state machine
//!
//! The visible state derives each tick from movement intent, ground contact
//! and the hit lockout, in that priority order. Re-entering the current state
//! is a no-op so animations never restart mid-cycle.

use glam::Vec2;

use crate::consts::*;

/// Visible player states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnim {
    Idle,
    Walking,
    Jumping,
    Hit,
}

/// The singleton player actor
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
    pub anim: PlayerAnim,
    /// Target x for tap-to-move; cleared once the player crosses it
    pub move_target_x: Option<f32>,
    hit_lockout_ticks: u32,
    last_tap_tick: Option<u64>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, Self::floor_y()),
            vel: Vec2::ZERO,
            grounded: true,
            anim: PlayerAnim::Idle,
            move_target_x: None,
            hit_lockout_ticks: 0,
            last_tap_tick: None,
        }
    }

    /// y coordinate the player rests at when grounded
    pub fn floor_y() -> f32 {
        FIELD_HEIGHT - GROUND_HEIGHT - PLAYER_HALF.y
    }

    /// Begin the fixed-duration hit window; other transitions are suppressed
    /// until it runs out
    pub fn start_hit_lockout(&mut self, ticks: u32) {
        self.hit_lockout_ticks = ticks.max(1);
    }

    pub fn in_hit_lockout(&self) -> bool {
        self.hit_lockout_ticks > 0
    }

    /// Record a tap against the session clock. Returns true when this tap
    /// completes a double tap (gap below threshold); the stored tap time is
    /// then cleared so a third tap cannot chain another "double" off it.
    pub fn register_tap(&mut self, now_tick: u64, threshold_ticks: u32) -> bool {
        match self.last_tap_tick {
            Some(prev) if now_tick.saturating_sub(prev) < threshold_ticks as u64 => {
                self.last_tap_tick = None;
                true
            }
            _ => {
                self.last_tap_tick = Some(now_tick);
                false
            }
        }
    }

    /// Apply the jump impulse if grounded. Returns whether a jump happened.
    pub fn try_jump(&mut self, jump_speed: f32) -> bool {
        if self.grounded {
            self.vel.y = -jump_speed;
            self.grounded = false;
            true
        } else {
            false
        }
    }

    /// Held-axis movement (keys profile)
    pub fn apply_axis(&mut self, axis: f32, walk_speed: f32) {
        self.move_target_x = None;
        self.vel.x = axis.clamp(-1.0, 1.0) * walk_speed;
    }

    /// Walk toward a tapped x coordinate (pointer profile)
    pub fn set_move_target(&mut self, target_x: f32, walk_speed: f32) {
        self.move_target_x = Some(target_x);
        self.vel.x = if target_x < self.pos.x {
            -walk_speed
        } else {
            walk_speed
        };
    }

    /// Integrate one tick of motion: cancel tap-movement on crossing the
    /// target, apply gravity, clamp to the field and resolve ground contact
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        if let Some(target) = self.move_target_x
            && ((self.vel.x < 0.0 && self.pos.x <= target)
                || (self.vel.x > 0.0 && self.pos.x >= target))
        {
            self.vel.x = 0.0;
            self.move_target_x = None;
        }

        self.vel.y += gravity * dt;
        self.pos += self.vel * dt;
        self.pos.x = self.pos.x.clamp(PLAYER_HALF.x, FIELD_WIDTH - PLAYER_HALF.x);

        let floor_y = Self::floor_y();
        if self.pos.y >= floor_y {
            self.pos.y = floor_y;
            self.vel.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Derive the visible state for this tick. Returns the new state only on
    /// an actual transition. The lockout decrements after evaluation, so the
    /// tick it expires still shows `Hit` and the fall-through happens on the
    /// next tick.
    pub fn derive_anim(&mut self) -> Option<PlayerAnim> {
        let next = if self.hit_lockout_ticks > 0 {
            self.hit_lockout_ticks -= 1;
            PlayerAnim::Hit
        } else if !self.grounded {
            PlayerAnim::Jumping
        } else if self.vel.x != 0.0 {
            PlayerAnim::Walking
        } else {
            PlayerAnim::Idle
        };

        if next != self.anim {
            self.anim = next;
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn player() -> Player {
        Player::new()
    }

    #[test]
    fn test_anim_priority_order() {
        let mut p = player();
        p.grounded = false;
        p.vel.x = 100.0;
        p.start_hit_lockout(2);

        // Hit wins over everything
        assert_eq!(p.derive_anim(), Some(PlayerAnim::Hit));
        // Still locked out this tick (decrement happens after evaluation)
        assert_eq!(p.derive_anim(), None);
        // Lockout expired: airborne beats walking
        assert_eq!(p.derive_anim(), Some(PlayerAnim::Jumping));

        p.grounded = true;
        assert_eq!(p.derive_anim(), Some(PlayerAnim::Walking));
        p.vel.x = 0.0;
        assert_eq!(p.derive_anim(), Some(PlayerAnim::Idle));
    }

    #[test]
    fn test_reentry_is_noop() {
        let mut p = player();
        assert_eq!(p.derive_anim(), None, "already idle");
        p.vel.x = 50.0;
        assert_eq!(p.derive_anim(), Some(PlayerAnim::Walking));
        assert_eq!(p.derive_anim(), None, "no walk restart");
    }

    #[test]
    fn test_double_tap_then_third_tap() {
        let mut p = player();
        let threshold = 36; // 300ms at 120Hz

        assert!(!p.register_tap(100, threshold), "first tap records");
        assert!(p.register_tap(120, threshold), "second tap within window");
        // The stored tap was cleared: a third tap starts a fresh pair
        assert!(!p.register_tap(130, threshold));
        assert!(p.register_tap(140, threshold));
    }

    #[test]
    fn test_slow_taps_never_double() {
        let mut p = player();
        let threshold = 36;
        assert!(!p.register_tap(0, threshold));
        assert!(!p.register_tap(100, threshold));
        assert!(!p.register_tap(200, threshold));
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut p = player();
        assert!(p.try_jump(400.0));
        assert!(!p.grounded);
        assert!(!p.try_jump(400.0), "no double jump mid-air");
    }

    #[test]
    fn test_move_target_cancels_on_crossing() {
        let mut p = player();
        let target = p.pos.x + 10.0;
        p.set_move_target(target, 300.0);
        assert!(p.vel.x > 0.0);

        for _ in 0..20 {
            p.integrate(SIM_DT, 600.0);
        }
        assert_eq!(p.move_target_x, None);
        assert_eq!(p.vel.x, 0.0);
        assert!(p.pos.x >= target);
    }

    #[test]
    fn test_jump_arc_lands_back() {
        let mut p = player();
        p.try_jump(400.0);
        // 400 px/s against 600 px/s^2 lands in ~1.33s
        for _ in 0..200 {
            p.integrate(SIM_DT, 600.0);
        }
        assert!(p.grounded);
        assert_eq!(p.pos.y, Player::floor_y());
    }
}
