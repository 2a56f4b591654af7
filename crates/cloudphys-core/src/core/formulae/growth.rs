use super::koehler::{a, b, rh_eq};
use super::thermodynamics::{lv, pvs, r as gas_constant};
use super::transport::{d, fd, fk, k};
use crate::core::constants::Constants;
use crate::core::numeric::{Dimensionality, Real};
use std::f64::consts::PI;

/// Radius growth rate under the Maxwell–Mason law.
///
/// `s` is the ambient supersaturation (`RH - 1`). The right-hand side is
/// singular as `r → 0`; keeping radii away from zero is the integrator's job.
#[inline]
pub fn dr_dt_mm<S: Real>(c: &Constants<S>, r: S, t: S, p: S, s: S, kp: S, rd: S) -> S {
    let nom = s - a(c, t) / r + b(kp, rd) / r.powi(3);
    let den = fd(c, t, d(c, r, t)) + fk(c, t, k(c, r, t, p), lv(c, t));
    S::lit(1.0) / r * nom / den
}

/// Radius growth rate under the kinetic (Fuchs–Sutugin) law.
///
/// The vapour-density difference is taken between the ambient air and the
/// droplet surface at temperature `t_i`, which the caller obtains from a
/// separate surface energy balance.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn dr_dt_ff<S: Real>(c: &Constants<S>, r: S, t: S, p: S, qv: S, kp: S, rd: S, t_i: S) -> S {
    let rho_v = p * qv / gas_constant(c, qv) / t;
    let rho_eq = pvs(c, t_i) * rh_eq(c, r, t_i, kp, rd) / c.rv / t_i;
    d(c, r, t_i) / c.rho_w / r * (rho_v - rho_eq)
}

/// Radius of a sphere of the given volume.
#[inline]
pub fn radius<S: Real>(volume: S) -> S {
    (volume * S::lit(3.0) / S::lit(4.0) / S::lit(PI)).powf(S::lit(1.0 / 3.0))
}

/// Volume of a sphere of the given radius.
#[inline]
pub fn volume<S: Real>(radius: S) -> S {
    S::lit(4.0 / 3.0 * PI) * radius.powi(3)
}

/// Converts a radius growth rate into a growth rate of `ln(V / 1 m³)`.
#[inline]
pub fn dlnv_dt<S: Real>(lnv: S, dr_dt: S) -> S {
    let r = radius(lnv.exp() * S::from_si(1.0, Dimensionality::VOLUME));
    S::lit(3.0) / r * dr_dt
}

/// Potential-temperature tendency from latent heat released by condensation.
///
/// `dqv_dt > 0` (net evaporation) cools the parcel.
#[inline]
pub fn dthd_dt<S: Real>(c: &Constants<S>, rhod: S, thd: S, t: S, dqv_dt: S) -> S {
    -lv(c, t) * dqv_dt / c.c_pd / t * thd * rhod
}
