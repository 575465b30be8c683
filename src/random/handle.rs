//! Shared generator handle.
//!
//! A [`GeneratorHandle`] is passed by identity: clones refer to the same
//! [`LegacyRandom`] state, so drawing through any clone advances all of them.

use std::cell::RefCell;
use std::rc::Rc;

use super::legacy::{GeneratorState, LegacyRandom};
use crate::error::RandomStateError;

/// Reference-counted handle to a single generator.
#[derive(Debug, Clone)]
pub struct GeneratorHandle {
    inner: Rc<RefCell<LegacyRandom>>,
}

impl GeneratorHandle {
    /// Wraps an existing generator.
    pub fn new(rng: LegacyRandom) -> Self {
        GeneratorHandle {
            inner: Rc::new(RefCell::new(rng)),
        }
    }

    /// Creates a handle to a generator seeded with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(LegacyRandom::with_seed(seed))
    }

    /// Creates a handle to an entropy-seeded generator.
    ///
    /// # Errors
    /// Returns [`RandomStateError::Entropy`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, RandomStateError> {
        Ok(Self::new(LegacyRandom::from_entropy()?))
    }

    /// Returns `true` if both handles point to the same generator.
    pub fn same_generator(&self, other: &GeneratorHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// # Errors
    /// Returns [`RandomStateError::GeneratorBusy`] on a re-entrant borrow.
    pub fn with_rng<R>(&self, f: impl FnOnce(&mut LegacyRandom) -> R) -> Result<R, RandomStateError> {
        let mut rng = self
            .inner
            .try_borrow_mut()
            .map_err(|_| RandomStateError::GeneratorBusy)?;
        Ok(f(&mut *rng))
    }

    /// Draws `n` consecutive N(0, 1) values.
    pub fn standard_normal_n(&self, n: usize) -> Result<Vec<f64>, RandomStateError> {
        self.with_rng(|rng| rng.standard_normal_n(n))
    }

    /// Fills `out` with consecutive N(0, 1) values.
    pub fn fill_standard_normal(&self, out: &mut [f64]) -> Result<(), RandomStateError> {
        self.with_rng(|rng| rng.fill_standard_normal(out))
    }

    /// Draws a uniform double in `[0, 1)`.
    pub fn random_sample(&self) -> Result<f64, RandomStateError> {
        self.with_rng(|rng| rng.random_sample())
    }

    /// Returns a snapshot of the shared generator.
    pub fn state(&self) -> Result<GeneratorState, RandomStateError> {
        let rng = self
            .inner
            .try_borrow()
            .map_err(|_| RandomStateError::GeneratorBusy)?;
        Ok(rng.state())
    }
}

impl From<LegacyRandom> for GeneratorHandle {
    fn from(rng: LegacyRandom) -> Self {
        Self::new(rng)
    }
}
