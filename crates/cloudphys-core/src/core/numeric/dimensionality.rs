use std::fmt;
use std::ops::{Div, Mul};

const EXPONENT_TOLERANCE: f64 = 1e-9;

/// Exponents of the SI base units carried by a physical quantity.
///
/// Exponents are stored as `f64` because the moist-air relations raise
/// pressures to non-integer powers (`Rd / c_pd`), so intermediate results can
/// carry fractional dimensions that only cancel at the end of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensionality {
    pub mass: f64,
    pub length: f64,
    pub time: f64,
    pub temperature: f64,
    pub amount: f64,
}

impl Dimensionality {
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0);

    pub const KILOGRAM: Self = Self::new(1.0, 0.0, 0.0, 0.0, 0.0);
    pub const METRE: Self = Self::new(0.0, 1.0, 0.0, 0.0, 0.0);
    pub const SECOND: Self = Self::new(0.0, 0.0, 1.0, 0.0, 0.0);
    pub const KELVIN: Self = Self::new(0.0, 0.0, 0.0, 1.0, 0.0);
    pub const MOLE: Self = Self::new(0.0, 0.0, 0.0, 0.0, 1.0);

    /// m³
    pub const VOLUME: Self = Self::new(0.0, 3.0, 0.0, 0.0, 0.0);
    /// Pa = kg m⁻¹ s⁻²
    pub const PRESSURE: Self = Self::new(1.0, -1.0, -2.0, 0.0, 0.0);
    /// kg m⁻³
    pub const DENSITY: Self = Self::new(1.0, -3.0, 0.0, 0.0, 0.0);
    /// J kg⁻¹ K⁻¹, shared by gas constants and heat capacities
    pub const SPECIFIC_HEAT: Self = Self::new(0.0, 2.0, -2.0, -1.0, 0.0);
    /// J kg⁻¹
    pub const SPECIFIC_ENERGY: Self = Self::new(0.0, 2.0, -2.0, 0.0, 0.0);
    /// J m⁻²
    pub const SURFACE_TENSION: Self = Self::new(1.0, 0.0, -2.0, 0.0, 0.0);
    /// m² s⁻¹
    pub const DIFFUSIVITY: Self = Self::new(0.0, 2.0, -1.0, 0.0, 0.0);
    /// J m⁻¹ s⁻¹ K⁻¹
    pub const THERMAL_CONDUCTIVITY: Self = Self::new(1.0, 1.0, -3.0, -1.0, 0.0);
    /// J K⁻¹ mol⁻¹
    pub const MOLAR_GAS_CONSTANT: Self = Self::new(1.0, 2.0, -2.0, -1.0, -1.0);
    /// kg mol⁻¹
    pub const MOLAR_MASS: Self = Self::new(1.0, 0.0, 0.0, 0.0, -1.0);
    /// m s⁻¹
    pub const VELOCITY: Self = Self::new(0.0, 1.0, -1.0, 0.0, 0.0);
    /// s⁻¹
    pub const RATE: Self = Self::new(0.0, 0.0, -1.0, 0.0, 0.0);
    /// s m⁻², the unit of the diffusional-growth resistance terms
    pub const GROWTH_RESISTANCE: Self = Self::new(0.0, -2.0, 1.0, 0.0, 0.0);

    pub const fn new(mass: f64, length: f64, time: f64, temperature: f64, amount: f64) -> Self {
        Self {
            mass,
            length,
            time,
            temperature,
            amount,
        }
    }

    fn exponents(&self) -> [f64; 5] {
        [
            self.mass,
            self.length,
            self.time,
            self.temperature,
            self.amount,
        ]
    }

    pub fn powf(self, n: f64) -> Self {
        Self::new(
            self.mass * n,
            self.length * n,
            self.time * n,
            self.temperature * n,
            self.amount * n,
        )
    }

    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.approx_eq(&Self::NONE)
    }

    /// Compares exponents up to rounding left over from fractional powers.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.exponents()
            .iter()
            .zip(other.exponents().iter())
            .all(|(a, b)| (a - b).abs() < EXPONENT_TOLERANCE)
    }
}

impl Mul for Dimensionality {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.mass + rhs.mass,
            self.length + rhs.length,
            self.time + rhs.time,
            self.temperature + rhs.temperature,
            self.amount + rhs.amount,
        )
    }
}

impl Div for Dimensionality {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.powf(-1.0)
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let symbols = ["kg", "m", "s", "K", "mol"];
        let mut first = true;
        for (symbol, exponent) in symbols.iter().zip(self.exponents()) {
            if exponent.abs() < EXPONENT_TOLERANCE {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if (exponent - 1.0).abs() < EXPONENT_TOLERANCE {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_adds_exponents() {
        let pressure = Dimensionality::DENSITY * Dimensionality::SPECIFIC_HEAT * Dimensionality::KELVIN;
        assert!(pressure.approx_eq(&Dimensionality::PRESSURE));
    }

    #[test]
    fn division_subtracts_exponents() {
        let velocity = Dimensionality::METRE / Dimensionality::SECOND;
        assert!(velocity.approx_eq(&Dimensionality::VELOCITY));
    }

    #[test]
    fn fractional_powers_cancel_within_tolerance() {
        let kappa = 287.0 / 1005.0;
        let partial = Dimensionality::PRESSURE.powf(1.0 - kappa);
        let restored = partial.powf(1.0 / (1.0 - kappa));
        assert!(restored.approx_eq(&Dimensionality::PRESSURE));
    }

    #[test]
    fn quotient_of_equal_dimensions_is_dimensionless() {
        let ratio = Dimensionality::PRESSURE / Dimensionality::PRESSURE;
        assert!(ratio.is_dimensionless());
    }

    #[test]
    fn display_lists_nonzero_exponents() {
        assert_eq!(Dimensionality::PRESSURE.to_string(), "kg m^-1 s^-2");
        assert_eq!(Dimensionality::NONE.to_string(), "dimensionless");
        assert_eq!(Dimensionality::METRE.to_string(), "m");
    }
}
