use rand::Rng;

/// Source of uniformly distributed indices over a closed interval.
///
/// Any `rand::Rng` is a source. The caller owns and seeds it; draws are only
/// reproducible if nothing else draws from it in between.
pub trait UniformSource {
    /// Uniform value in `min..=max`
    fn uniform_index(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform_index(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_draws_stay_in_closed_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..1000 {
            let value = rng.uniform_index(1, 4);
            assert!((1..=4).contains(&value));
            seen_min |= value == 1;
            seen_max |= value == 4;
        }

        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_degenerate_interval() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(rng.uniform_index(1, 1), 1);
    }
}
