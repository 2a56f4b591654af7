use crate::core::constants::Constants;
use crate::core::formulae::{growth, thermodynamics};
use crate::core::numeric::Real;

/// Thermodynamic state of an air parcel.
///
/// Only `rhod`, `thd` and `qv` are independent; `t`, `p` and `rh` are derived
/// from them once at construction so that a whole population of droplets in
/// the same cell can reuse them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientState<S> {
    pub rhod: S,
    pub thd: S,
    pub qv: S,
    pub t: S,
    pub p: S,
    pub rh: S,
}

impl<S: Real> AmbientState<S> {
    pub fn new(c: &Constants<S>, rhod: S, thd: S, qv: S) -> Self {
        let (t, p, rh) = thermodynamics::temperature_pressure_rh(c, rhod, thd, qv);
        Self {
            rhod,
            thd,
            qv,
            t,
            p,
            rh,
        }
    }

    #[inline]
    pub fn supersaturation(&self) -> S {
        self.rh - S::lit(1.0)
    }

    #[inline]
    pub fn saturation_vapour_pressure(&self, c: &Constants<S>) -> S {
        thermodynamics::pvs(c, self.t)
    }

    #[inline]
    pub fn latent_heat(&self, c: &Constants<S>) -> S {
        thermodynamics::lv(c, self.t)
    }

    #[inline]
    pub fn heat_capacity(&self, c: &Constants<S>) -> S {
        thermodynamics::c_p(c, self.qv)
    }

    /// Potential-temperature tendency caused by a vapour tendency `dqv_dt`.
    #[inline]
    pub fn dthd_dt(&self, c: &Constants<S>, dqv_dt: S) -> S {
        growth::dthd_dt(c, self.rhod, self.thd, self.t, dqv_dt)
    }
}
