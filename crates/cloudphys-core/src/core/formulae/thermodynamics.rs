use crate::core::constants::Constants;
use crate::core::numeric::Real;

/// Saturation vapour pressure over a flat water surface (August–Roche–Magnus).
#[inline]
pub fn pvs<S: Real>(c: &Constants<S>, t: S) -> S {
    c.arm_c1 * ((c.arm_c2 * (t - c.t0)) / (t - c.t0 + c.arm_c3)).exp()
}

/// Temperature, pressure and relative humidity of moist air given dry-air
/// density, dry potential temperature and vapour mixing ratio.
///
/// Follows the Poisson relation for the dry-air partial pressure (eqs. A11
/// and A12 of the libcloudph++ 1.0 paper). Inputs are not checked.
#[inline]
pub fn temperature_pressure_rh<S: Real>(c: &Constants<S>, rhod: S, thd: S, qv: S) -> (S, S, S) {
    let one = S::lit(1.0);
    let exponent = c.rd / c.c_pd;
    let pd = ((rhod * c.rd * thd) / c.p1000.powf(exponent)).powf(one / (one - exponent));
    let t = thd * (pd / c.p1000).powf(exponent);

    let p = rhod * (one + qv) * r(c, qv) * t;
    let rh = (p - pd) / pvs(c, t);

    (t, p, rh)
}

/// Mixing-ratio-weighted blend of a dry-air and a water-vapour property.
#[inline]
pub fn mix<S: Real>(q: S, dry: S, wet: S) -> S {
    let one = S::lit(1.0);
    wet / (one / q + one) + dry / (one + q)
}

/// Isobaric specific heat of moist air.
#[inline]
pub fn c_p<S: Real>(c: &Constants<S>, q: S) -> S {
    mix(q, c.c_pd, c.c_pv)
}

/// Specific gas constant of moist air.
#[inline]
pub fn r<S: Real>(c: &Constants<S>, q: S) -> S {
    mix(q, c.rd, c.rv)
}

/// Latent heat of evaporation, linear in temperature about the triple point.
#[inline]
pub fn lv<S: Real>(c: &Constants<S>, t: S) -> S {
    c.l_tri + (c.c_pv - c.c_pw) * (t - c.t_tri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> Constants<f64> {
        Constants::default()
    }

    fn f64_relative_equal(a: f64, b: f64, tolerance: f64) -> bool {
        ((a - b) / b).abs() < tolerance
    }

    #[test]
    fn pvs_at_reference_temperature_equals_first_magnus_coefficient() {
        let c = constants();
        assert_eq!(pvs(&c, c.t0), c.arm_c1);
    }

    #[test]
    fn pvs_at_room_temperature_is_about_thirty_five_hectopascals() {
        let c = constants();
        assert!(f64_relative_equal(pvs(&c, 300.0), 3527.7707872046717, 1e-9));
    }

    #[test]
    fn pvs_increases_with_temperature() {
        let c = constants();
        let mut previous = pvs(&c, 200.0);
        for step in 1..=150 {
            let current = pvs(&c, 200.0 + step as f64);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn temperature_pressure_rh_matches_reference_state() {
        let c = constants();
        let (t, p, rh) = temperature_pressure_rh(&c, 1.0, 300.0, 0.01);
        assert!(f64_relative_equal(t, 282.5803206559301, 1e-6));
        assert!(f64_relative_equal(p, 82405.50925333102, 1e-6));
        assert!(f64_relative_equal(rh, 1.1051802793148309, 1e-6));
    }

    #[test]
    fn temperature_pressure_rh_for_dry_air_has_zero_humidity() {
        let c = constants();
        let (t, p, rh) = temperature_pressure_rh(&c, 1.2, 290.0, 0.0);
        assert!(rh.abs() < 1e-9);
        assert!(f64_relative_equal(p, 1.2 * c.rd * t, 1e-12));
    }

    #[test]
    fn temperature_pressure_rh_propagates_nan_for_unphysical_input() {
        let c = constants();
        let (t, _, _) = temperature_pressure_rh(&c, -1.0, 300.0, 0.01);
        assert!(t.is_nan());
    }

    #[test]
    fn mix_at_zero_mixing_ratio_returns_dry_value() {
        assert_eq!(mix(0.0, 1005.0, 1850.0), 1005.0);
    }

    #[test]
    fn mix_approaches_wet_value_for_large_mixing_ratio() {
        let blended: f64 = mix(1e12, 1005.0, 1850.0);
        assert!((blended - 1850.0).abs() < 1e-6);
    }

    #[test]
    fn mix_is_monotonic_in_mixing_ratio() {
        let values: Vec<f64> = [0.0, 0.001, 0.01, 0.1, 1.0]
            .iter()
            .map(|&q| mix(q, 287.0, 461.5))
            .collect();
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn c_p_and_r_blend_the_right_constants() {
        let c = constants();
        assert_eq!(c_p(&c, 0.0), c.c_pd);
        assert_eq!(r(&c, 0.0), c.rd);
        assert!(c_p(&c, 0.02) > c.c_pd);
        assert!(r(&c, 0.02) > c.rd);
    }

    #[test]
    fn lv_at_triple_point_equals_reference_latent_heat() {
        let c = constants();
        assert_eq!(lv(&c, c.t_tri), c.l_tri);
    }

    #[test]
    fn lv_decreases_with_temperature() {
        let c = constants();
        assert!(lv(&c, 300.0) < lv(&c, 260.0));
    }
}
