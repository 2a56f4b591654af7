use super::dimensionality::Dimensionality;
use super::quantity::Quantity;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Quantity {}
}

/// Scalar type every kernel is generic over.
///
/// `f64` and `f32` are the production backends and discard the dimensionality
/// passed to [`Real::from_si`]. [`Quantity`] keeps it and checks every
/// operation, which turns the same kernel source into a unit audit.
///
/// The trait is sealed; kernels are monomorphised per backend, so there is no
/// dispatch cost on the hot path.
pub trait Real:
    private::Sealed
    + Copy
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Builds a value expressed in SI base units.
    fn from_si(value: f64, dimensionality: Dimensionality) -> Self;

    /// Dimensionless numeric literal.
    #[inline]
    fn lit(value: f64) -> Self {
        Self::from_si(value, Dimensionality::NONE)
    }

    fn exp(self) -> Self;
    fn sqrt(self) -> Self;
    fn powi(self, n: i32) -> Self;
    fn powf(self, n: Self) -> Self;

    /// Magnitude in SI units, for output and cross-backend comparison.
    fn to_f64(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn from_si(value: f64, _: Dimensionality) -> Self {
        value
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        f64::powf(self, n)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    fn from_si(value: f64, _: Dimensionality) -> Self {
        value as f32
    }

    #[inline]
    fn exp(self) -> Self {
        f32::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f32::powi(self, n)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        f32::powf(self, n)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Real for Quantity {
    fn from_si(value: f64, dimensionality: Dimensionality) -> Self {
        Quantity::new(value, dimensionality)
    }

    fn exp(self) -> Self {
        let value = self.value().exp();
        match self.require_dimensionless("exp") {
            Ok(_) => Quantity::dimensionless(value),
            Err(e) => Quantity::poisoned(value, e),
        }
    }

    fn sqrt(self) -> Self {
        self.map_value(self.value().sqrt(), |d| d.powf(0.5))
    }

    fn powi(self, n: i32) -> Self {
        self.map_value(self.value().powi(n), |d| d.powf(n as f64))
    }

    fn powf(self, n: Self) -> Self {
        let value = self.value().powf(n.value());
        match n.require_dimensionless("a power exponent") {
            Ok(_) => self.map_value(value, |d| d.powf(n.value())),
            Err(e) => Quantity::poisoned(value, e),
        }
    }

    fn to_f64(self) -> f64 {
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numeric::quantity::DimensionError;

    fn scaled<S: Real>(x: S) -> S {
        S::lit(2.0) * x.sqrt()
    }

    #[test]
    fn float_backends_ignore_dimensionality() {
        assert_eq!(f64::from_si(3.5, Dimensionality::PRESSURE), 3.5);
        assert_eq!(f32::from_si(3.5, Dimensionality::PRESSURE), 3.5f32);
    }

    #[test]
    fn generic_function_gives_same_magnitude_on_every_backend() {
        let raw = scaled(9.0f64);
        let checked = scaled(Quantity::new(9.0, Dimensionality::VOLUME));
        assert_eq!(raw, checked.value());
        assert_eq!(scaled(9.0f32).to_f64(), raw);
    }

    #[test]
    fn sqrt_halves_exponents() {
        let side = Quantity::new(4.0, Dimensionality::METRE.powf(2.0)).sqrt();
        assert_eq!(side.value(), 2.0);
        assert!(side.expect("side", Dimensionality::METRE).is_ok());
    }

    #[test]
    fn powi_scales_exponents() {
        let cube = Quantity::new(2.0, Dimensionality::METRE).powi(3);
        assert_eq!(cube.value(), 8.0);
        assert!(cube.expect("cube", Dimensionality::VOLUME).is_ok());
    }

    #[test]
    fn exp_of_dimensional_argument_is_rejected() {
        let result = Quantity::new(1.0, Dimensionality::KELVIN).exp();
        assert!(matches!(
            result.dimensionality(),
            Err(DimensionError::NotDimensionless { op: "exp", .. })
        ));
    }

    #[test]
    fn powf_with_dimensional_exponent_is_rejected() {
        let base = Quantity::new(2.0, Dimensionality::METRE);
        let result = base.powf(Quantity::new(2.0, Dimensionality::SECOND));
        assert!(matches!(
            result.dimensionality(),
            Err(DimensionError::NotDimensionless { .. })
        ));
    }
}
