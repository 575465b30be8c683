//! Legacy generator: MT19937 plus a cached Gaussian.
//!
//! Standard-normal draws use the Marsaglia polar method. Each accepted
//! pair of uniforms yields two normals; one is returned and the other is
//! cached for the following call, so a fresh generator seeded with `s`
//! reproduces the classic `RandomState(s).randn(n)` sequence.

use rand_distr::Distribution;

use super::mt19937::{Mt19937, STATE_LEN};
use crate::error::RandomStateError;

/// Snapshot of a [`LegacyRandom`] generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorState {
    /// MT19937 state vector.
    pub key: Vec<u32>,
    /// Read position inside `key`.
    pub pos: usize,
    /// Second value of the last polar pair, if not yet consumed.
    pub cached_gaussian: Option<f64>,
}

/// Mersenne Twister generator with the polar-method Gaussian cache.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    mt: Mt19937,
    gauss: Option<f64>,
}

impl LegacyRandom {
    /// Creates a generator seeded with a single 32-bit word.
    pub fn with_seed(seed: u32) -> Self {
        Self::from_mt(Mt19937::with_seed(seed))
    }

    /// Creates a generator seeded with an array of 32-bit words.
    ///
    /// # Errors
    /// Returns [`RandomStateError::EmptySeedKey`] if `key` is empty.
    pub fn from_key(key: &[u32]) -> Result<Self, RandomStateError> {
        Ok(Self::from_mt(Mt19937::from_key(key)?))
    }

    /// Creates a non-reproducible generator seeded from OS entropy.
    ///
    /// # Errors
    /// Returns [`RandomStateError::Entropy`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, RandomStateError> {
        Ok(Self::from_mt(Mt19937::from_entropy()?))
    }

    fn from_mt(mt: Mt19937) -> Self {
        LegacyRandom { mt, gauss: None }
    }

    /// Draws a uniform double in `[0, 1)`.
    pub fn random_sample(&mut self) -> f64 {
        self.mt.next_double()
    }

    /// Draws one value from N(0, 1).
    pub fn standard_normal(&mut self) -> f64 {
        if let Some(cached) = self.gauss.take() {
            return cached;
        }
        let (x1, x2, r2) = loop {
            let x1 = 2.0 * self.mt.next_double() - 1.0;
            let x2 = 2.0 * self.mt.next_double() - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                break (x1, x2, r2);
            }
        };
        let f = (-2.0 * r2.ln() / r2).sqrt();
        self.gauss = Some(f * x1);
        f * x2
    }

    /// Fills `out` with consecutive N(0, 1) draws.
    pub fn fill_standard_normal(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.standard_normal();
        }
    }

    /// Draws `n` consecutive values from N(0, 1).
    pub fn standard_normal_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.standard_normal()).collect()
    }

    /// Samples any `rand_distr` distribution from the underlying twister.
    ///
    /// Bypasses the Gaussian cache.
    pub fn sample<T, D: Distribution<T>>(&mut self, distr: &D) -> T {
        distr.sample(&mut self.mt)
    }

    /// Returns a snapshot of the full generator state.
    pub fn state(&self) -> GeneratorState {
        let (key, pos) = self.mt.state();
        GeneratorState {
            key: key.to_vec(),
            pos,
            cached_gaussian: self.gauss,
        }
    }

    /// Restores a snapshot taken with [`state`](Self::state).
    ///
    /// # Errors
    /// Returns [`RandomStateError::InvalidRandomState`] if the key does not
    /// hold exactly 624 words.
    pub fn set_state(&mut self, state: GeneratorState) -> Result<(), RandomStateError> {
        let key: [u32; STATE_LEN] = state.key.as_slice().try_into().map_err(|_| {
            RandomStateError::InvalidRandomState(format!(
                "state key of length {}",
                state.key.len()
            ))
        })?;
        self.mt = Mt19937::from_state(key, state.pos);
        self.gauss = state.cached_gaussian;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_distr::Uniform;

    #[test]
    fn test_standard_normal_seed_0() {
        let mut rng = LegacyRandom::with_seed(0);
        let expected = [1.764052345967664_f64, 0.4001572083672233, 0.9787379841057392];
        for (i, &exp) in expected.iter().enumerate() {
            let val = rng.standard_normal();
            assert!((val - exp).abs() < 1e-12, "standard_normal[{}] = {}", i, val);
        }
    }

    #[test]
    fn test_gaussian_cache_holds_second_of_pair() {
        let mut rng = LegacyRandom::with_seed(3);
        assert!(rng.state().cached_gaussian.is_none());
        rng.standard_normal();
        let cached = rng.state().cached_gaussian.unwrap();
        assert_eq!(rng.standard_normal(), cached);
        assert!(rng.state().cached_gaussian.is_none());
    }

    #[test]
    fn test_fill_matches_standard_normal_n() {
        let mut a = LegacyRandom::with_seed(11);
        let mut b = LegacyRandom::with_seed(11);
        let mut buf = [0.0f64; 7];
        a.fill_standard_normal(&mut buf);
        assert_eq!(buf.to_vec(), b.standard_normal_n(7));
    }

    #[test]
    fn test_set_state_replays_stream() {
        let mut rng = LegacyRandom::with_seed(21);
        rng.standard_normal();
        let snapshot = rng.state();
        let first = rng.standard_normal_n(5);
        rng.set_state(snapshot).unwrap();
        assert_eq!(rng.standard_normal_n(5), first);
    }

    #[test]
    fn test_set_state_rejects_short_key() {
        let mut rng = LegacyRandom::with_seed(1);
        let bad = GeneratorState {
            key: vec![0; 10],
            pos: 0,
            cached_gaussian: None,
        };
        assert!(matches!(
            rng.set_state(bad),
            Err(RandomStateError::InvalidRandomState(_))
        ));
    }

    #[test]
    fn test_sample_uniform_distribution() {
        let mut rng = LegacyRandom::with_seed(5);
        let dist = Uniform::new(10u32, 20u32);
        for _ in 0..500 {
            let v = rng.sample(&dist);
            assert!((10..20).contains(&v));
        }
    }

    #[test]
    fn test_random_sample_range() {
        let mut rng = LegacyRandom::with_seed(8);
        for _ in 0..1000 {
            let v = rng.random_sample();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
