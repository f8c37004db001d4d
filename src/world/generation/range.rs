//! Range resolution
//!
//! Turns `(base, spread)` and `(min, max)` pairs into concrete numbers.

use rand::Rng;

/// Resolve `base` plus a roll in `[0, spread)`. A spread of zero or less
/// returns `base` without touching the rng.
pub fn resolve(base: i32, spread: i32, rng: &mut impl Rng) -> i32 {
    if spread <= 0 {
        return base;
    }
    base.saturating_add(rng.gen_range(0..spread))
}

/// Resolve a `[min, max)` pair. `max <= min` returns `min` without touching
/// the rng.
pub fn resolve_between(min: i32, max: i32, rng: &mut impl Rng) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Roll a count in `[min, max)`, or exactly `min` when the range is empty
pub fn roll_count(min: usize, max: usize, rng: &mut impl Rng) -> usize {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_values() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(resolve(7, 0, &mut rng), 7);
            assert_eq!(resolve(-3, -5, &mut rng), -3);
            assert_eq!(resolve_between(4, 4, &mut rng), 4);
            assert_eq!(resolve_between(9, 2, &mut rng), 9);
            assert_eq!(roll_count(2, 2, &mut rng), 2);
        }
    }

    #[test]
    fn test_ranges_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!((5..8).contains(&resolve(5, 3, &mut rng)));
            assert!((-2..1).contains(&resolve(-2, 3, &mut rng)));
            assert!((10..14).contains(&resolve_between(10, 14, &mut rng)));
            assert!((1..3).contains(&roll_count(1, 3, &mut rng)));
        }
    }

    #[test]
    fn test_range_covers_every_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[(resolve_between(10, 14, &mut rng) - 10) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_no_overflow_at_extremes() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(resolve(i32::MAX, 10, &mut rng), i32::MAX);
    }
}
