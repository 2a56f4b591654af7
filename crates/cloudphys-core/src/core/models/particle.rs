use super::ambient::AmbientState;
use crate::core::constants::Constants;
use crate::core::formulae::{growth, koehler};
use crate::core::numeric::Real;

/// A single droplet, or a superdroplet standing for many identical ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState<S> {
    pub radius: S,
    pub dry_radius: S,
    /// Hygroscopicity parameter κ.
    pub kappa: S,
}

impl<S: Real> ParticleState<S> {
    pub fn new(radius: S, dry_radius: S, kappa: S) -> Self {
        Self {
            radius,
            dry_radius,
            kappa,
        }
    }

    pub fn from_volume(volume: S, dry_radius: S, kappa: S) -> Self {
        Self::new(growth::radius(volume), dry_radius, kappa)
    }

    #[inline]
    pub fn volume(&self) -> S {
        growth::volume(self.radius)
    }

    pub fn equilibrium(&self, c: &Constants<S>, t: S) -> Equilibrium<S> {
        Equilibrium::new(c, self.radius, t, self.kappa, self.dry_radius)
    }

    #[inline]
    pub fn dr_dt_mm(&self, c: &Constants<S>, ambient: &AmbientState<S>) -> S {
        growth::dr_dt_mm(
            c,
            self.radius,
            ambient.t,
            ambient.p,
            ambient.supersaturation(),
            self.kappa,
            self.dry_radius,
        )
    }

    #[inline]
    pub fn dr_dt_ff(&self, c: &Constants<S>, ambient: &AmbientState<S>, surface_temperature: S) -> S {
        growth::dr_dt_ff(
            c,
            self.radius,
            ambient.t,
            ambient.p,
            ambient.qv,
            self.kappa,
            self.dry_radius,
            surface_temperature,
        )
    }
}

/// Köhler-curve quantities for one droplet at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium<S> {
    pub a: S,
    pub b: S,
    pub r_cr: S,
    pub rh_eq: S,
    /// Equilibrium relative humidity at the critical radius.
    pub rh_cr: S,
}

impl<S: Real> Equilibrium<S> {
    pub fn new(c: &Constants<S>, r: S, t: S, kp: S, rd: S) -> Self {
        let r_cr = koehler::r_cr(c, kp, rd, t);
        Self {
            a: koehler::a(c, t),
            b: koehler::b(kp, rd),
            r_cr,
            rh_eq: koehler::rh_eq(c, r, t, kp, rd),
            rh_cr: koehler::rh_eq(c, r_cr, t, kp, rd),
        }
    }

    /// Supersaturation a droplet must be exposed to before it activates.
    #[inline]
    pub fn critical_supersaturation(&self) -> S {
        self.rh_cr - S::lit(1.0)
    }

    #[inline]
    pub fn supersaturation(&self) -> S {
        self.rh_eq - S::lit(1.0)
    }
}
