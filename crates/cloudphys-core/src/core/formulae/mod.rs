//! # Formulae Module
//!
//! Closed-form cloud-microphysics kernels, one pure function per physical
//! relation. Every function takes the process-wide [`Constants`] by reference
//! and is generic over the numeric backend `S: Real`.
//!
//! ## Layers
//!
//! - [`thermodynamics`] - saturation vapour pressure, moist-air state, latent heat
//! - [`transport`] - mean free paths and Knudsen-corrected diffusivity/conductivity
//! - [`koehler`] - curvature and solute terms, critical radius, equilibrium humidity
//! - [`growth`] - Maxwell–Mason and kinetic growth laws, volume conversions, latent-heat feedback
//!
//! No function branches, loops or allocates, and domain violations (zero
//! radius, negative temperature) surface as NaN or infinity rather than as
//! errors. Callers own radius floors and input validation.
//!
//! [`Constants`]: crate::core::constants::Constants

pub mod growth;
pub mod koehler;
pub mod thermodynamics;
pub mod transport;
