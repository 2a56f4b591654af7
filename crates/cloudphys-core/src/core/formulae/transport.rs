use super::thermodynamics::pvs;
use crate::core::constants::Constants;
use crate::core::numeric::Real;

const FUCHS_SUTUGIN_LINEAR: f64 = 1.71;
const FUCHS_SUTUGIN_QUADRATIC: f64 = 1.33;

/// Mean free path used for the vapour-diffusion Knudsen number.
#[inline]
pub fn lambda_d<S: Real>(c: &Constants<S>, t: S) -> S {
    c.d0 / (S::lit(2.0) * c.rv * t).sqrt()
}

/// Mean free path used for the heat-conduction Knudsen number.
#[inline]
pub fn lambda_k<S: Real>(c: &Constants<S>, t: S, p: S) -> S {
    S::lit(4.0 / 5.0) * c.k0 * t / p / (S::lit(2.0) * c.rd * t).sqrt()
}

/// Fuchs–Sutugin transition-regime correction; 1 in the continuum limit.
#[inline]
pub fn beta<S: Real>(kn: S) -> S {
    let one = S::lit(1.0);
    (one + kn) / (one + S::lit(FUCHS_SUTUGIN_LINEAR) * kn + S::lit(FUCHS_SUTUGIN_QUADRATIC) * kn * kn)
}

/// Vapour diffusivity corrected for the droplet's Knudsen number.
/// `r` must be non-zero.
#[inline]
pub fn d<S: Real>(c: &Constants<S>, r: S, t: S) -> S {
    let kn = lambda_d(c, t) / r;
    c.d0 * beta(kn)
}

/// Thermal conductivity corrected for the droplet's Knudsen number.
/// `r` must be non-zero.
#[inline]
pub fn k<S: Real>(c: &Constants<S>, r: S, t: S, p: S) -> S {
    let kn = lambda_k(c, t, p) / r;
    c.k0 * beta(kn)
}

/// Mass-transfer resistance term of the growth-rate denominator.
#[inline]
pub fn fd<S: Real>(c: &Constants<S>, t: S, d: S) -> S {
    c.rho_w * c.rv * t / d / pvs(c, t)
}

/// Heat-transfer resistance term of the growth-rate denominator.
#[inline]
pub fn fk<S: Real>(c: &Constants<S>, t: S, k: S, lv: S) -> S {
    c.rho_w * lv / k / t * (lv / c.rv / t - S::lit(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn constants() -> Constants<f64> {
        Constants::default()
    }

    #[test]
    fn beta_is_one_in_continuum_limit() {
        assert_eq!(beta(0.0), 1.0);
    }

    #[test]
    fn beta_reproduces_rational_form_at_unit_knudsen_number() {
        assert!(f64_approx_equal(beta(1.0), 2.0 / 4.04));
    }

    #[test]
    fn beta_decreases_monotonically_and_stays_in_unit_interval() {
        let mut previous = beta(0.0);
        for i in 1..2000 {
            let current = beta(i as f64 * 0.01);
            assert!(current < previous);
            assert!(current > 0.0 && current <= 1.0);
            previous = current;
        }
    }

    #[test]
    fn beta_vanishes_in_free_molecular_limit() {
        assert!(beta(1e9) < 1e-9);
    }

    #[test]
    fn mean_free_paths_are_sub_micron_at_ambient_conditions() {
        let c = constants();
        let lambda_d = lambda_d(&c, 290.0);
        let lambda_k = lambda_k(&c, 290.0, 1e5);
        assert!(lambda_d > 1e-9 && lambda_d < 1e-6);
        assert!(lambda_k > 1e-9 && lambda_k < 1e-6);
    }

    #[test]
    fn diffusivity_tends_to_continuum_value_for_large_droplets() {
        let c = constants();
        let large = d(&c, 1.0, 290.0);
        assert!((large - c.d0).abs() / c.d0 < 1e-6);
    }

    #[test]
    fn diffusivity_is_reduced_for_small_droplets() {
        let c = constants();
        assert!(d(&c, 1e-8, 290.0) < d(&c, 1e-6, 290.0));
        assert!(d(&c, 1e-6, 290.0) < c.d0);
    }

    #[test]
    fn conductivity_is_reduced_for_small_droplets() {
        let c = constants();
        assert!(k(&c, 1e-8, 290.0, 1e5) < k(&c, 1e-6, 290.0, 1e5));
        assert!(k(&c, 1e-6, 290.0, 1e5) < c.k0);
    }

    #[test]
    fn diffusivity_at_zero_radius_is_not_finite() {
        let c = constants();
        let value = d(&c, 0.0, 290.0);
        assert!(!value.is_finite() || value == 0.0);
    }

    #[test]
    fn resistance_terms_are_positive() {
        let c = constants();
        assert!(fd(&c, 290.0, c.d0) > 0.0);
        assert!(fk(&c, 290.0, c.k0, 2.5e6) > 0.0);
    }

    #[test]
    fn fd_matches_closed_form() {
        let c = constants();
        let expected = c.rho_w * c.rv * 290.0 / c.d0 / pvs(&c, 290.0);
        assert_eq!(fd(&c, 290.0, c.d0), expected);
    }
}
