use crate::core::constants::Constants;
use crate::core::numeric::Real;

/// Curvature (Kelvin) term of the Köhler curve, expressed in partial pressure.
#[inline]
pub fn a<S: Real>(c: &Constants<S>, t: S) -> S {
    S::lit(2.0) * c.sgm / c.rv / t / c.rho_w
}

/// Solute (Raoult) term of the κ-Köhler curve.
#[inline]
pub fn b<S: Real>(kp: S, rd: S) -> S {
    kp * rd.powi(3)
}

/// Radius at which the equilibrium humidity peaks.
#[inline]
pub fn r_cr<S: Real>(c: &Constants<S>, kp: S, rd: S, t: S) -> S {
    (S::lit(3.0) * kp * rd.powi(3) / a(c, t)).sqrt()
}

/// Equilibrium relative humidity over a solution droplet of radius `r`.
#[inline]
pub fn rh_eq<S: Real>(c: &Constants<S>, r: S, t: S, kp: S, rd: S) -> S {
    S::lit(1.0) + a(c, t) / r - b(kp, rd) / r.powi(3)
}
