//! Difficulty ramp
//!
//! Pure interval decay: every ramp second the hazard spawn interval shrinks by
//! a fixed step until it reaches the floor. Monotonic non-increasing and
//! idempotent once the floor is hit.

/// One ramp step: `max(floor, current - step)`, all in ticks
#[inline]
pub fn decay_interval(current: u32, step: u32, floor: u32) -> u32 {
    current.saturating_sub(step).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decay_basic() {
        assert_eq!(decay_interval(240, 5, 24), 235);
        assert_eq!(decay_interval(26, 5, 24), 24);
    }

    #[test]
    fn test_floor_is_idempotent() {
        let at_floor = decay_interval(24, 5, 24);
        assert_eq!(at_floor, 24);
        assert_eq!(decay_interval(at_floor, 5, 24), 24);
    }

    proptest! {
        /// Repeated ramp steps never go below the floor and never increase
        #[test]
        fn prop_never_below_floor(
            start in 1u32..10_000,
            step in 0u32..500,
            floor in 1u32..1_000,
            iterations in 1usize..200,
        ) {
            let mut current = start.max(floor);
            for _ in 0..iterations {
                let next = decay_interval(current, step, floor);
                prop_assert!(next >= floor);
                prop_assert!(next <= current);
                current = next;
            }
        }
    }
}
