//! # cloudphys
//!
//! Closed-form cloud-microphysics kernels for particle-based (superdroplet) models:
//! moist thermodynamics, Köhler equilibrium, gas-kinetic transport corrections and
//! diffusional growth rates of droplets.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the physics stays pure and
//! testable while configuration, arrays and logging live at its edges.
//!
//! - **[`core`]: The Foundation.** Physical constants, the `Real` numeric abstraction with
//!   its float and dimensional-analysis backends, and the stateless kernels
//!   (`thermodynamics`, `transport`, `koehler`, `growth`) together with the small value
//!   types grouping their inputs.
//!
//! - **[`engine`]: The Logic Core.** Element-wise ndarray evaluation of the kernels
//!   (parallel with the `parallel` feature), population-level condensation rates under a
//!   selectable growth law, TOML settings and the dimensional audit.
//!
//! - **[`workflows`]: The Public API.** The `Microphysics` façade a host model builds once
//!   from its settings and calls every time step.

pub mod core;
pub mod engine;
pub mod workflows;
