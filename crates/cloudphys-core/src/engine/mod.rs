//! # Engine Module
//!
//! This module turns the pure scalar kernels of [`crate::core`] into the operations a
//! particle-based cloud model calls every time step: array evaluation over grid cells
//! and particle populations, growth-law selection, settings handling and the
//! dimensional audit.
//!
//! ## Overview
//!
//! Kernels in `core` know nothing about arrays, files or logging. The engine layer adds
//! exactly those concerns while keeping the numerics in one place: every array routine
//! is an element-wise map of the matching scalar kernel, so results are identical
//! whichever path a caller takes.
//!
//! ## Architecture
//!
//! - **Array Paths** ([`arrays`]) - ndarray counterparts of the scalar kernels, parallel
//!   over elements with the `parallel` feature
//! - **Condensation** ([`condensation`]) - Per-particle growth rates of a population
//!   sharing one ambient state, under the configured growth law
//! - **Dimensional Audit** ([`audit`]) - Runs the kernels on unit-carrying quantities and
//!   reports the first inconsistency
//! - **Configuration** ([`config`]) - Backend, growth law and physical constants, loaded
//!   from TOML or assembled with a builder
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping configuration,
//!   shape and dimension failures

pub mod arrays;
pub mod audit;
pub mod condensation;
pub mod config;
pub mod error;
