//! Random-state normalization.
//!
//! A [`RandomState`] is the loose "how should I be seeded" value accepted by
//! samplers: nothing, an integer, or an already-built generator.
//! [`check_random_state`] turns it into a ready-to-use [`GeneratorHandle`].

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::RandomStateError;
use crate::random::handle::GeneratorHandle;

/// Seed specification for a random generator.
#[derive(Debug, Clone, Default)]
pub enum RandomState {
    /// No seed: draw fresh OS entropy on every resolution.
    #[default]
    Entropy,
    /// Deterministic integer seed, valid in `[0, 2^32 - 1]`.
    Seed(i64),
    /// Existing generator, passed through by identity.
    Generator(GeneratorHandle),
}

impl RandomState {
    /// Returns `true` for [`RandomState::Entropy`].
    pub fn is_entropy(&self) -> bool {
        matches!(self, RandomState::Entropy)
    }
}

impl fmt::Display for RandomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomState::Entropy => write!(f, "None"),
            RandomState::Seed(seed) => write!(f, "{}", seed),
            RandomState::Generator(_) => write!(f, "RandomState(MT19937)"),
        }
    }
}

impl From<u32> for RandomState {
    fn from(seed: u32) -> Self {
        RandomState::Seed(seed as i64)
    }
}

impl From<i64> for RandomState {
    fn from(seed: i64) -> Self {
        RandomState::Seed(seed)
    }
}

impl From<Option<i64>> for RandomState {
    fn from(seed: Option<i64>) -> Self {
        seed.map_or(RandomState::Entropy, RandomState::Seed)
    }
}

impl From<GeneratorHandle> for RandomState {
    fn from(handle: GeneratorHandle) -> Self {
        RandomState::Generator(handle)
    }
}

impl FromStr for RandomState {
    type Err = RandomStateError;

    /// Parses `""`/`"none"` (any case) as entropy and a decimal integer as a
    /// seed. The integer range is checked later by [`check_random_state`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(RandomState::Entropy);
        }
        trimmed
            .parse::<i64>()
            .map(RandomState::Seed)
            .map_err(|_| RandomStateError::InvalidRandomState(trimmed.to_string()))
    }
}

/// Resolves a seed specification into a generator handle.
///
/// - [`RandomState::Entropy`]: a new generator seeded from OS entropy.
/// - [`RandomState::Seed`]: a new generator seeded with that integer.
/// - [`RandomState::Generator`]: the same handle, unchanged.
///
/// # Errors
/// Returns [`RandomStateError::SeedOutOfRange`] for seeds outside
/// `[0, 2^32 - 1]` and [`RandomStateError::Entropy`] if the OS entropy source
/// fails.
///
/// # Examples
///
/// ```
/// use random_state::{check_random_state, RandomState};
///
/// let a = check_random_state(&RandomState::Seed(1234)).unwrap();
/// let b = check_random_state(&RandomState::Seed(1234)).unwrap();
/// assert_eq!(a.standard_normal_n(3).unwrap(), b.standard_normal_n(3).unwrap());
///
/// assert!(check_random_state(&RandomState::Seed(-1)).is_err());
/// ```
pub fn check_random_state(state: &RandomState) -> Result<GeneratorHandle, RandomStateError> {
    match state {
        RandomState::Entropy => {
            trace!("seeding generator from OS entropy");
            GeneratorHandle::from_entropy()
        }
        RandomState::Seed(seed) => {
            let seed32 =
                u32::try_from(*seed).map_err(|_| RandomStateError::SeedOutOfRange(*seed))?;
            debug!("seeding generator with {}", seed32);
            Ok(GeneratorHandle::with_seed(seed32))
        }
        RandomState::Generator(handle) => {
            trace!("reusing existing generator");
            Ok(handle.clone())
        }
    }
}
