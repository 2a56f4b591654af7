//! # Numeric Backends
//!
//! Every kernel in [`crate::core::formulae`] is written once against the
//! [`Real`] trait and compiled per backend:
//!
//! - `f64` (and `f32`) for production runs,
//! - [`Quantity`] for dimensional analysis, where each value carries its SI
//!   dimensionality and inconsistent arithmetic is recorded instead of computed
//!   silently.
//!
//! Swapping the backend is a matter of choosing the type parameter of
//! [`crate::core::constants::Constants`]; no call site changes.

mod dimensionality;
mod quantity;
mod real;

pub use dimensionality::Dimensionality;
pub use quantity::{DimensionError, Quantity};
pub use real::Real;
