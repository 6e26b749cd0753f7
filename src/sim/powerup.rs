//! Power-up activation state machine
//!
//! At most one activation is live at any instant. The mutual-exclusion lock is
//! taken on `Idle -> Active` and released only on the matching `Active ->
//! Idle` (expiry or game over); activation requests while locked are rejected
//! outright, with no queueing and no duration stacking.

/// Activatable pickup kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Enables the fire action and a gun attachment tracking the player
    Gun,
    /// Limits vision to a mask centered on the player (dark mode)
    SecretBox,
}

impl PowerUpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Gun => "gun",
            PowerUpKind::SecretBox => "secret box",
        }
    }
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Active { kind: PowerUpKind, remaining_ticks: u32 },
}

/// The single live effect record
#[derive(Debug, Clone, Default)]
pub struct PowerUpSlot {
    phase: Phase,
}

impl PowerUpSlot {
    /// Attempt `Idle -> Active`. Returns false (and changes nothing) while an
    /// activation already holds the lock.
    pub fn activate(&mut self, kind: PowerUpKind, duration_ticks: u32) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Active {
                    kind,
                    remaining_ticks: duration_ticks.max(1),
                };
                log::debug!("{} activated for {duration_ticks} ticks", kind.as_str());
                true
            }
            Phase::Active { .. } => false,
        }
    }

    /// Count the live activation down one tick, returning the kind on expiry
    pub fn tick(&mut self) -> Option<PowerUpKind> {
        if let Phase::Active {
            kind,
            ref mut remaining_ticks,
        } = self.phase
        {
            *remaining_ticks -= 1;
            if *remaining_ticks == 0 {
                self.phase = Phase::Idle;
                log::debug!("{} expired", kind.as_str());
                return Some(kind);
            }
        }
        None
    }

    /// Collapse any activation to `Idle` immediately (game over path)
    pub fn force_clear(&mut self) -> Option<PowerUpKind> {
        match std::mem::take(&mut self.phase) {
            Phase::Active { kind, .. } => Some(kind),
            Phase::Idle => None,
        }
    }

    pub fn active_kind(&self) -> Option<PowerUpKind> {
        match self.phase {
            Phase::Active { kind, .. } => Some(kind),
            Phase::Idle => None,
        }
    }

    pub fn remaining_ticks(&self) -> Option<u32> {
        match self.phase {
            Phase::Active { remaining_ticks, .. } => Some(remaining_ticks),
            Phase::Idle => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// The fire action is only valid while the gun is equipped
    pub fn fire_allowed(&self) -> bool {
        self.active_kind() == Some(PowerUpKind::Gun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_exclusion() {
        let mut slot = PowerUpSlot::default();
        assert!(slot.activate(PowerUpKind::Gun, 100));

        // A second activation is rejected and leaves the first untouched
        assert!(!slot.activate(PowerUpKind::SecretBox, 100));
        assert_eq!(slot.active_kind(), Some(PowerUpKind::Gun));
        assert_eq!(slot.remaining_ticks(), Some(100));
    }

    #[test]
    fn test_expiry_releases_lock() {
        let mut slot = PowerUpSlot::default();
        slot.activate(PowerUpKind::Gun, 3);
        assert_eq!(slot.tick(), None);
        assert_eq!(slot.tick(), None);
        assert_eq!(slot.tick(), Some(PowerUpKind::Gun));
        assert!(!slot.is_locked());

        // Re-activation is allowed once Idle again
        assert!(slot.activate(PowerUpKind::SecretBox, 5));
    }

    #[test]
    fn test_force_clear() {
        let mut slot = PowerUpSlot::default();
        assert_eq!(slot.force_clear(), None);
        slot.activate(PowerUpKind::SecretBox, 50);
        assert_eq!(slot.force_clear(), Some(PowerUpKind::SecretBox));
        assert!(!slot.is_locked());
    }

    #[test]
    fn test_fire_allowed_only_with_gun() {
        let mut slot = PowerUpSlot::default();
        assert!(!slot.fire_allowed());
        slot.activate(PowerUpKind::SecretBox, 10);
        assert!(!slot.fire_allowed());
        slot.force_clear();
        slot.activate(PowerUpKind::Gun, 10);
        assert!(slot.fire_allowed());
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut slot = PowerUpSlot::default();
        assert_eq!(slot.tick(), None);
        assert!(!slot.is_locked());
    }
}
