//! Random-state normalization for reproducible sampling.
//!
//! A sampler is configured with a loose seed specification, a
//! [`RandomState`]: nothing (fresh OS entropy), an integer seed, or an
//! existing [`GeneratorHandle`]. [`check_random_state`] resolves it into a
//! generator, and [`RandomStateSample`] uses that generator to draw
//! standard-normal values.
//!
//! The generator is a 32-bit MT19937 with polar-method Gaussian sampling,
//! so an integer seed reproduces the classic legacy `RandomState` stream.
//!
//! # Architecture
//!
//! ```text
//! Mt19937            (32-bit Mersenne Twister core)
//!     ↓
//! LegacyRandom       (uniform + cached polar Gaussian)
//!     ↓ shared by identity
//! GeneratorHandle    (Rc<RefCell<LegacyRandom>>)
//!     ↑ check_random_state(RandomState)
//! RandomStateSample  (override → configured state → 10 draws)
//! ```
//!
//! # Examples
//!
//! A seed given at construction and the same seed given at call time produce
//! the same draws:
//!
//! ```
//! use random_state::{RandomState, RandomStateSample};
//!
//! let mut at_init = RandomStateSample::new(RandomState::Seed(1234));
//! let mut at_run = RandomStateSample::default();
//!
//! assert_eq!(
//!     at_init.run(None).unwrap(),
//!     at_run.run(Some(&RandomState::Seed(1234))).unwrap()
//! );
//! ```
//!
//! Passing a generator handle advances that generator:
//!
//! ```
//! use random_state::{GeneratorHandle, RandomStateSample};
//!
//! let handle = GeneratorHandle::with_seed(7);
//! let mut m = RandomStateSample::new(handle.clone());
//! m.run(None).unwrap();
//! assert!(m.rng().unwrap().same_generator(&handle));
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;

mod random_state;
mod sample;

pub use error::RandomStateError;
pub use random::handle::GeneratorHandle;
pub use random::legacy::{GeneratorState, LegacyRandom};
pub use random_state::{check_random_state, RandomState};
pub use sample::{RandomStateSample, SAMPLE_LEN};
