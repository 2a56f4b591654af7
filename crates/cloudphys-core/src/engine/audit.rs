//! Dimensional analysis of the kernels.
//!
//! Runs every formula once on the [`Quantity`] backend with representative,
//! unit-carrying inputs and checks the dimensionality of each result. Any
//! inconsistency inside a formula (adding a length to a time, exponentiating a
//! temperature) surfaces as the first recorded [`DimensionError`].

use crate::core::constants::{Constants, PhysicalConstants};
use crate::core::formulae::{growth, koehler, thermodynamics, transport};
use crate::core::numeric::{DimensionError, Dimensionality as D, Quantity};
use tracing::{debug, info, instrument};

/// Outcome of a successful audit.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    /// Names of the kernels whose results carried the expected dimensionality.
    pub checked: Vec<&'static str>,
}

struct Auditor {
    checked: Vec<&'static str>,
}

impl Auditor {
    fn record(
        &mut self,
        name: &'static str,
        value: Quantity,
        expected: D,
    ) -> Result<(), DimensionError> {
        let magnitude = value.expect(name, expected)?;
        debug!("{} = {:e} [{}]", name, magnitude, expected);
        self.checked.push(name);
        Ok(())
    }
}

/// Audits the kernels against constants built from `physical`.
#[instrument(skip_all, name = "dimensional_audit")]
pub fn run(physical: &PhysicalConstants) -> Result<AuditReport, DimensionError> {
    let report = check(&Constants::<Quantity>::new(physical))?;
    info!(
        "Dimensional analysis passed for {} kernels.",
        report.checked.len()
    );
    Ok(report)
}

/// Audits the kernels against an already-built set of quantity constants.
pub fn check(c: &Constants<Quantity>) -> Result<AuditReport, DimensionError> {
    let q = Quantity::new;
    let rhod = q(1.0, D::DENSITY);
    let thd = q(300.0, D::KELVIN);
    let qv = q(0.01, D::NONE);
    let r = q(1e-6, D::METRE);
    let rd = q(50e-9, D::METRE);
    let kp = q(1.28, D::NONE);
    let t_i = q(290.0, D::KELVIN);
    let dqv_dt = q(1e-6, D::RATE);
    let velocity = q(1e-7, D::VELOCITY);

    let mut auditor = Auditor {
        checked: Vec::new(),
    };

    let (t, p, rh) = thermodynamics::temperature_pressure_rh(c, rhod, thd, qv);
    auditor.record("temperature", t, D::KELVIN)?;
    auditor.record("pressure", p, D::PRESSURE)?;
    auditor.record("relative_humidity", rh, D::NONE)?;
    auditor.record("pvs", thermodynamics::pvs(c, t), D::PRESSURE)?;
    auditor.record("c_p", thermodynamics::c_p(c, qv), D::SPECIFIC_HEAT)?;
    auditor.record("r", thermodynamics::r(c, qv), D::SPECIFIC_HEAT)?;
    auditor.record("lv", thermodynamics::lv(c, t), D::SPECIFIC_ENERGY)?;

    auditor.record("lambda_d", transport::lambda_d(c, t), D::METRE)?;
    auditor.record("lambda_k", transport::lambda_k(c, t, p), D::METRE)?;
    let diffusivity = transport::d(c, r, t);
    let conductivity = transport::k(c, r, t, p);
    auditor.record("d", diffusivity, D::DIFFUSIVITY)?;
    auditor.record("k", conductivity, D::THERMAL_CONDUCTIVITY)?;
    auditor.record("fd", transport::fd(c, t, diffusivity), D::GROWTH_RESISTANCE)?;
    auditor.record(
        "fk",
        transport::fk(c, t, conductivity, thermodynamics::lv(c, t)),
        D::GROWTH_RESISTANCE,
    )?;

    auditor.record("a", koehler::a(c, t), D::METRE)?;
    auditor.record("b", koehler::b(kp, rd), D::VOLUME)?;
    auditor.record("r_cr", koehler::r_cr(c, kp, rd, t), D::METRE)?;
    auditor.record("rh_eq", koehler::rh_eq(c, r, t, kp, rd), D::NONE)?;

    let s = rh - q(1.0, D::NONE);
    auditor.record(
        "dr_dt_mm",
        growth::dr_dt_mm(c, r, t, p, s, kp, rd),
        D::VELOCITY,
    )?;
    auditor.record(
        "dr_dt_ff",
        growth::dr_dt_ff(c, r, t, p, qv, kp, rd, t_i),
        D::VELOCITY,
    )?;
    let v = growth::volume(r);
    auditor.record("volume", v, D::VOLUME)?;
    auditor.record("radius", growth::radius(v), D::METRE)?;
    auditor.record(
        "dlnv_dt",
        growth::dlnv_dt(q(v.value().ln(), D::NONE), velocity),
        D::RATE,
    )?;
    // the tendency is scaled by dry-air density, hence K kg m⁻³ s⁻¹
    auditor.record(
        "dthd_dt",
        growth::dthd_dt(c, rhod, thd, t, dqv_dt),
        D::KELVIN * D::DENSITY * D::RATE,
    )?;

    Ok(AuditReport {
        checked: auditor.checked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_pass_the_audit() {
        let report = run(&PhysicalConstants::default()).unwrap();
        assert!(report.checked.contains(&"dr_dt_mm"));
        assert!(report.checked.contains(&"dr_dt_ff"));
        assert!(report.checked.contains(&"temperature"));
        assert_eq!(report.checked.len(), 23);
    }

    #[test]
    fn constant_with_wrong_dimensionality_is_caught() {
        let mut c = Constants::<Quantity>::default();
        c.sgm = Quantity::new(0.072, D::METRE);
        let result = check(&c);
        assert!(matches!(
            result,
            Err(DimensionError::Unexpected { quantity: "a", .. })
        ));
    }

    #[test]
    fn inconsistent_sum_inside_a_formula_is_caught() {
        let mut c = Constants::<Quantity>::default();
        c.t0 = Quantity::new(273.15, D::SECOND);
        let result = check(&c);
        assert!(matches!(result, Err(DimensionError::Mismatch { .. })));
    }

    #[test]
    fn dimensional_magnitudes_match_float_backend() {
        let physical = PhysicalConstants::default();
        let quantities = Constants::<Quantity>::new(&physical);
        let floats = Constants::<f64>::new(&physical);
        let checked = koehler::r_cr(
            &quantities,
            Quantity::dimensionless(1.28),
            Quantity::new(50e-9, D::METRE),
            Quantity::new(290.0, D::KELVIN),
        );
        assert_eq!(checked.value(), koehler::r_cr(&floats, 1.28, 50e-9, 290.0));
    }
}
