use super::dimensionality::Dimensionality;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DimensionError {
    #[error("Cannot {op} quantities of dimensionality [{lhs}] and [{rhs}]")]
    Mismatch {
        op: &'static str,
        lhs: Dimensionality,
        rhs: Dimensionality,
    },

    #[error("Argument of {op} must be dimensionless, found [{found}]")]
    NotDimensionless {
        op: &'static str,
        found: Dimensionality,
    },

    #[error("Expected {quantity} in [{expected}], found [{found}]")]
    Unexpected {
        quantity: &'static str,
        expected: Dimensionality,
        found: Dimensionality,
    },
}

/// A value paired with its SI dimensionality.
///
/// Arithmetic never panics: the first dimensional inconsistency is recorded
/// and carried through every subsequent operation, the same way a NaN travels
/// through the float backends. Inspect it with [`Quantity::dimensionality`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    dimensionality: Result<Dimensionality, DimensionError>,
}

impl Quantity {
    pub fn new(value: f64, dimensionality: Dimensionality) -> Self {
        Self {
            value,
            dimensionality: Ok(dimensionality),
        }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Dimensionality::NONE)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn dimensionality(&self) -> Result<Dimensionality, DimensionError> {
        self.dimensionality
    }

    /// Checks the carried dimensionality against `expected`.
    pub fn expect(
        &self,
        quantity: &'static str,
        expected: Dimensionality,
    ) -> Result<f64, DimensionError> {
        let found = self.dimensionality?;
        if found.approx_eq(&expected) {
            Ok(self.value)
        } else {
            Err(DimensionError::Unexpected {
                quantity,
                expected,
                found,
            })
        }
    }

    fn with(value: f64, dimensionality: Result<Dimensionality, DimensionError>) -> Self {
        Self {
            value,
            dimensionality,
        }
    }

    fn same_dimensionality(
        op: &'static str,
        lhs: Result<Dimensionality, DimensionError>,
        rhs: Result<Dimensionality, DimensionError>,
    ) -> Result<Dimensionality, DimensionError> {
        let (lhs, rhs) = (lhs?, rhs?);
        if lhs.approx_eq(&rhs) {
            Ok(lhs)
        } else {
            Err(DimensionError::Mismatch { op, lhs, rhs })
        }
    }

    pub(crate) fn require_dimensionless(
        self,
        op: &'static str,
    ) -> Result<Dimensionality, DimensionError> {
        let found = self.dimensionality?;
        if found.is_dimensionless() {
            Ok(found)
        } else {
            Err(DimensionError::NotDimensionless { op, found })
        }
    }

    pub(crate) fn map_value(
        self,
        value: f64,
        dimensionality: impl FnOnce(Dimensionality) -> Dimensionality,
    ) -> Self {
        Self::with(value, self.dimensionality.map(dimensionality))
    }

    pub(crate) fn poisoned(value: f64, error: DimensionError) -> Self {
        Self::with(value, Err(error))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::with(
            self.value + rhs.value,
            Self::same_dimensionality("add", self.dimensionality, rhs.dimensionality),
        )
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::with(
            self.value - rhs.value,
            Self::same_dimensionality("subtract", self.dimensionality, rhs.dimensionality),
        )
    }
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let dimensionality = self
            .dimensionality
            .and_then(|lhs| rhs.dimensionality.map(|rhs| lhs * rhs));
        Self::with(self.value * rhs.value, dimensionality)
    }
}

impl Div for Quantity {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let dimensionality = self
            .dimensionality
            .and_then(|lhs| rhs.dimensionality.map(|rhs| lhs / rhs));
        Self::with(self.value / rhs.value, dimensionality)
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::with(-self.value, self.dimensionality)
    }
}
