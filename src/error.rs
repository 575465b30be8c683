//! Error types for the random_state library.

use thiserror::Error;

/// Errors produced while normalizing a random state or drawing from a
/// shared generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomStateError {
    /// Integer seed is outside the 32-bit unsigned range accepted by MT19937.
    #[error("Seed must be between 0 and 2**32 - 1, got {0}")]
    SeedOutOfRange(i64),
    /// Value cannot be interpreted as a random state.
    #[error("'{0}' cannot be used to seed a RandomState instance")]
    InvalidRandomState(String),
    /// Seed key passed to the array initializer was empty.
    #[error("Seed key must be non-empty")]
    EmptySeedKey,
    /// The operating system entropy source failed.
    #[error("Failed to read OS entropy: {0}")]
    Entropy(String),
    /// The shared generator is already mutably borrowed.
    #[error("Generator is already in use")]
    GeneratorBusy,
}
