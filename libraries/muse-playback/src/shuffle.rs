//! Random slot selection for shuffled advancement
//!
//! Shuffle never reorders the queue; it only changes which slot
//! `next` lands on.

use rand::Rng;

/// Pick the slot to advance to under shuffle
///
/// Uniform over all slots except the currently selected one, so
/// shuffled advancement never replays the track it just left. With a
/// single-slot queue there is nothing else to pick, so slot 0 repeats.
///
/// `len` must be nonzero; callers check for an empty queue first.
pub(crate) fn pick_slot<R: Rng>(rng: &mut R, len: usize, current: Option<usize>) -> usize {
    debug_assert!(len > 0);

    match current {
        Some(cur) if len > 1 && cur < len => {
            // Draw from the queue minus the current slot, then shift
            // past it to map back onto real indices.
            let slot = rng.gen_range(0..len - 1);
            if slot >= cur {
                slot + 1
            } else {
                slot
            }
        }
        _ => rng.gen_range(0..len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picked_slot_always_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for len in 1..20 {
            for _ in 0..100 {
                let slot = pick_slot(&mut rng, len, None);
                assert!(slot < len);
            }
        }
    }

    #[test]
    fn never_repicks_current_slot() {
        let mut rng = StdRng::seed_from_u64(42);

        for cur in 0..5 {
            for _ in 0..500 {
                let slot = pick_slot(&mut rng, 5, Some(cur));
                assert!(slot < 5);
                assert_ne!(slot, cur);
            }
        }
    }

    #[test]
    fn single_slot_queue_repeats() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_slot(&mut rng, 1, Some(0)), 0);
        assert_eq!(pick_slot(&mut rng, 1, None), 0);
    }

    #[test]
    fn all_other_slots_reachable() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            seen[pick_slot(&mut rng, 6, Some(2))] = true;
        }

        for (slot, &hit) in seen.iter().enumerate() {
            if slot == 2 {
                assert!(!hit);
            } else {
                assert!(hit, "slot {} never picked", slot);
            }
        }
    }
}
