//! Array call paths of the scalar kernels.
//!
//! Each function maps the corresponding scalar kernel over ndarray inputs,
//! element by element, so both paths share a single implementation and round
//! identically. With the `parallel` feature the map runs on rayon's global
//! pool; elements never see each other.

use super::error::EngineError;
use crate::core::constants::Constants;
use crate::core::formulae::{growth, koehler, thermodynamics};
use crate::core::numeric::Real;
use ndarray::{Array, ArrayView, Dimension, Zip};

macro_rules! map_collect {
    ($zip:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        let collected = $zip.par_map_collect($f);
        #[cfg(not(feature = "parallel"))]
        let collected = $zip.map_collect($f);
        collected
    }};
}

pub(crate) use map_collect;

pub(crate) fn ensure_shape(
    name: &'static str,
    expected: &[usize],
    found: &[usize],
) -> Result<(), EngineError> {
    if expected == found {
        Ok(())
    } else {
        Err(EngineError::Shape {
            name,
            expected: expected.to_vec(),
            found: found.to_vec(),
        })
    }
}

/// Saturation vapour pressure of every element of `t`.
pub fn pvs<S: Real, D: Dimension>(c: &Constants<S>, t: ArrayView<'_, S, D>) -> Array<S, D> {
    map_collect!(Zip::from(&t), |&t| thermodynamics::pvs(c, t))
}

/// Köhler curvature term of every element of `t`.
pub fn a<S: Real, D: Dimension>(c: &Constants<S>, t: ArrayView<'_, S, D>) -> Array<S, D> {
    map_collect!(Zip::from(&t), |&t| koehler::a(c, t))
}

/// Critical radius for a common `kp`, broadcasting `rd` against the shape of
/// `t` (trailing axes aligned, as in NumPy).
pub fn r_cr<S: Real, D: Dimension, E: Dimension>(
    c: &Constants<S>,
    kp: S,
    rd: ArrayView<'_, S, E>,
    t: ArrayView<'_, S, D>,
) -> Result<Array<S, D>, EngineError> {
    let rd = rd.broadcast(t.raw_dim()).ok_or_else(|| EngineError::Shape {
        name: "rd",
        expected: t.shape().to_vec(),
        found: rd.shape().to_vec(),
    })?;
    Ok(map_collect!(Zip::from(&rd).and(&t), |&rd, &t| {
        koehler::r_cr(c, kp, rd, t)
    }))
}

/// Equilibrium relative humidity of every droplet at a common temperature.
pub fn rh_eq<S: Real, D: Dimension>(
    c: &Constants<S>,
    r: ArrayView<'_, S, D>,
    t: S,
    kp: ArrayView<'_, S, D>,
    rd: ArrayView<'_, S, D>,
) -> Result<Array<S, D>, EngineError> {
    ensure_shape("kp", r.shape(), kp.shape())?;
    ensure_shape("rd", r.shape(), rd.shape())?;
    Ok(map_collect!(
        Zip::from(&r).and(&kp).and(&rd),
        |&r, &kp, &rd| koehler::rh_eq(c, r, t, kp, rd)
    ))
}

/// Temperature, pressure and relative humidity of every grid cell.
pub fn temperature_pressure_rh<S: Real, D: Dimension>(
    c: &Constants<S>,
    rhod: ArrayView<'_, S, D>,
    thd: ArrayView<'_, S, D>,
    qv: ArrayView<'_, S, D>,
) -> Result<(Array<S, D>, Array<S, D>, Array<S, D>), EngineError> {
    ensure_shape("thd", rhod.shape(), thd.shape())?;
    ensure_shape("qv", rhod.shape(), qv.shape())?;

    let zero = S::lit(0.0);
    let mut t = Array::from_elem(rhod.raw_dim(), zero);
    let mut p = Array::from_elem(rhod.raw_dim(), zero);
    let mut rh = Array::from_elem(rhod.raw_dim(), zero);

    let zip = Zip::from(&mut t)
        .and(&mut p)
        .and(&mut rh)
        .and(&rhod)
        .and(&thd)
        .and(&qv);
    let kernel = |t: &mut S, p: &mut S, rh: &mut S, &rhod: &S, &thd: &S, &qv: &S| {
        (*t, *p, *rh) = thermodynamics::temperature_pressure_rh(c, rhod, thd, qv);
    };

    #[cfg(feature = "parallel")]
    zip.par_for_each(kernel);
    #[cfg(not(feature = "parallel"))]
    zip.for_each(kernel);

    Ok((t, p, rh))
}

/// Radius of every sphere in `volume`.
pub fn radius<S: Real, D: Dimension>(volume: ArrayView<'_, S, D>) -> Array<S, D> {
    map_collect!(Zip::from(&volume), |&v| growth::radius(v))
}

/// Log-volume growth rates from radius growth rates.
pub fn dlnv_dt<S: Real, D: Dimension>(
    lnv: ArrayView<'_, S, D>,
    dr_dt: ArrayView<'_, S, D>,
) -> Result<Array<S, D>, EngineError> {
    ensure_shape("dr_dt", lnv.shape(), dr_dt.shape())?;
    Ok(map_collect!(Zip::from(&lnv).and(&dr_dt), |&lnv, &dr_dt| {
        growth::dlnv_dt(lnv, dr_dt)
    }))
}

/// Potential-temperature tendency of every grid cell.
pub fn dthd_dt<S: Real, D: Dimension>(
    c: &Constants<S>,
    rhod: ArrayView<'_, S, D>,
    thd: ArrayView<'_, S, D>,
    t: ArrayView<'_, S, D>,
    dqv_dt: ArrayView<'_, S, D>,
) -> Result<Array<S, D>, EngineError> {
    ensure_shape("thd", rhod.shape(), thd.shape())?;
    ensure_shape("t", rhod.shape(), t.shape())?;
    ensure_shape("dqv_dt", rhod.shape(), dqv_dt.shape())?;
    Ok(map_collect!(
        Zip::from(&rhod).and(&thd).and(&t).and(&dqv_dt),
        |&rhod, &thd, &t, &dqv_dt| growth::dthd_dt(c, rhod, thd, t, dqv_dt)
    ))
}
