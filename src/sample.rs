//! RandomStateSample: seed-then-sample example object.
//!
//! Holds a configured [`RandomState`], resolves it (or a per-call override)
//! into a generator on every [`run`](RandomStateSample::run), and returns a
//! fixed number of standard-normal draws.

use log::debug;

use crate::error::RandomStateError;
use crate::random::handle::GeneratorHandle;
use crate::random_state::{check_random_state, RandomState};

/// Number of draws returned by [`RandomStateSample::run`].
pub const SAMPLE_LEN: usize = 10;

/// Example object wrapping "resolve random state, then sample".
///
/// The configured state is only read, never consumed, so an integer seed
/// yields the same draws on every call. The generator resolved by the last
/// call is retained and available through [`rng`](Self::rng).
#[derive(Debug, Clone, Default)]
pub struct RandomStateSample {
    random_state: RandomState,
    rng: Option<GeneratorHandle>,
}

impl RandomStateSample {
    /// Creates a sample object with the given random state.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_state::{RandomState, RandomStateSample};
    ///
    /// let mut m = RandomStateSample::new(RandomState::Seed(1234));
    /// let draws = m.run(None).unwrap();
    /// assert!((draws[0] - 0.47143516).abs() < 1e-8);
    /// ```
    pub fn new(random_state: impl Into<RandomState>) -> Self {
        RandomStateSample {
            random_state: random_state.into(),
            rng: None,
        }
    }

    /// Returns the configured random state.
    pub fn random_state(&self) -> &RandomState {
        &self.random_state
    }

    /// Replaces the configured random state.
    ///
    /// The retained generator is left untouched until the next
    /// [`run`](Self::run).
    pub fn set_random_state(&mut self, random_state: impl Into<RandomState>) {
        self.random_state = random_state.into();
    }

    /// Builder form of [`set_random_state`](Self::set_random_state).
    pub fn with_random_state(mut self, random_state: impl Into<RandomState>) -> Self {
        self.set_random_state(random_state);
        self
    }

    /// Generator resolved by the last successful [`run`](Self::run).
    pub fn rng(&self) -> Option<&GeneratorHandle> {
        self.rng.as_ref()
    }

    /// Resolves a generator and draws [`SAMPLE_LEN`] standard-normal values.
    ///
    /// `override_state` takes precedence when present; otherwise the
    /// configured state is used.
    ///
    /// # Errors
    /// Propagates any [`RandomStateError`] from [`check_random_state`] or from
    /// drawing on a busy shared generator. On error the previously retained
    /// generator is kept.
    pub fn run(
        &mut self,
        override_state: Option<&RandomState>,
    ) -> Result<[f64; SAMPLE_LEN], RandomStateError> {
        let selected = override_state.unwrap_or(&self.random_state);
        debug!("resolving random state {}", selected);
        let rng = check_random_state(selected)?;

        let mut draws = [0.0f64; SAMPLE_LEN];
        rng.fill_standard_normal(&mut draws)?;
        self.rng = Some(rng);
        Ok(draws)
    }
}
