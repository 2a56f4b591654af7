//! # Models Module
//!
//! Plain value types bundling kernel inputs and outputs. They are `Copy`,
//! carry no lifecycle and are generic over the numeric backend, so the same
//! types serve production runs and dimensional audits.
//!
//! - [`ambient`] - the thermodynamic state of an air parcel
//! - [`particle`] - a (super)droplet and its Köhler equilibrium quantities

pub mod ambient;
pub mod particle;
