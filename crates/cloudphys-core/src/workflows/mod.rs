//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::engine`] and [`crate::core`] layers
//! together for a host cloud model.
//!
//! ## Overview
//!
//! A host model typically builds one [`microphysics::Microphysics`] at start-up from its
//! settings file and then calls it once per grid cell and time step. Construction is
//! where configuration is validated and, when requested, the kernels are audited on the
//! dimensional-analysis backend; evaluation afterwards is pure `f64` arithmetic.
//!
//! ## Architecture
//!
//! - **Microphysics** ([`microphysics`]) - Settings-driven façade over the thermodynamic,
//!   equilibrium and condensational-growth kernels, for single parcels and whole grids

pub mod microphysics;
