//! # Core Module
//!
//! Stateless building blocks of the library: physical constants, numeric
//! backends, the closed-form kernels and the small value types that group
//! their inputs and outputs.
//!
//! ## Architecture
//!
//! - **Constants** ([`constants`]) - configuration-facing SI magnitudes and the kernel-ready `Constants<S>`
//! - **Numeric Backends** ([`numeric`]) - the `Real` scalar trait, float backends and the unit-checking `Quantity`
//! - **Kernels** ([`formulae`]) - thermodynamics, transport corrections, Köhler equilibrium, growth rates
//! - **Models** ([`models`]) - `AmbientState`, `ParticleState` and `Equilibrium` values
//!
//! Nothing in this module holds state, allocates on the hot path or logs;
//! every kernel is safe to evaluate concurrently for any number of particles.

pub mod constants;
pub mod formulae;
pub mod models;
pub mod numeric;
