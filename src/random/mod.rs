//! Random number generation subsystem.
//!
//! Provides the MT19937 core, the legacy Gaussian-caching generator built on
//! it, and the shared handle that random states resolve to.

pub mod handle;
pub mod legacy;
pub mod mt19937;
