//! Injectable source of randomness.
//!
//! Every component that draws random numbers takes a `&mut R: RandomSource`
//! so runs are reproducible from a seed. Any `rand::Rng` qualifies.

use rand::Rng;

pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Two distinct integers drawn uniformly from `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`. `operations::toggle_random_edge` checks this and
    /// returns `FalsifierError::TooFewVertices` instead.
    fn sample_pair(&mut self, n: usize) -> (usize, usize) {
        assert!(n >= 2, "sample_pair needs at least 2 values, got {n}");
        let u = self.below(n);
        let mut v = self.below(n - 1);
        if v >= u {
            v += 1;
        }
        (u, v)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "below needs a non-zero bound");
        self.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn sample_pair_is_distinct_and_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in 2..12 {
            for _ in 0..200 {
                let (u, v) = rng.sample_pair(n);
                assert_ne!(u, v);
                assert!(u < n && v < n);
            }
        }
    }

    #[test]
    fn sample_pair_reaches_every_pair() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [[false; 4]; 4];
        for _ in 0..2000 {
            let (u, v) = rng.sample_pair(4);
            seen[u.min(v)][u.max(v)] = true;
        }
        for u in 0..4 {
            for v in (u + 1)..4 {
                assert!(seen[u][v], "pair ({u},{v}) never drawn");
            }
        }
    }

    #[test]
    #[should_panic(expected = "sample_pair needs at least 2 values, got 1")]
    fn sample_pair_rejects_single_value() {
        let mut rng = SmallRng::seed_from_u64(5);
        rng.sample_pair(1);
    }

    #[test]
    fn next_unit_stays_below_one() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
