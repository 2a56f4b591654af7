use super::arrays::{ensure_shape, map_collect};
use super::config::GrowthLaw;
use super::error::EngineError;
use crate::core::constants::Constants;
use crate::core::formulae::growth;
use crate::core::models::ambient::AmbientState;
use crate::core::numeric::Real;
use ndarray::{Array1, ArrayView1, Zip};
use tracing::{instrument, trace};

/// Per-particle attributes of the droplets sharing one grid cell.
///
/// Borrowed from the caller's attribute storage; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Population<'a, S> {
    pub radius: ArrayView1<'a, S>,
    pub dry_radius: ArrayView1<'a, S>,
    pub kappa: ArrayView1<'a, S>,
}

impl<'a, S> Population<'a, S> {
    pub fn new(
        radius: ArrayView1<'a, S>,
        dry_radius: ArrayView1<'a, S>,
        kappa: ArrayView1<'a, S>,
    ) -> Result<Self, EngineError> {
        ensure_shape("dry_radius", radius.shape(), dry_radius.shape())?;
        ensure_shape("kappa", radius.shape(), kappa.shape())?;
        Ok(Self {
            radius,
            dry_radius,
            kappa,
        })
    }

    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }
}

/// Maxwell–Mason radius growth rate of every particle in the cell.
pub fn dr_dt_mm<S: Real>(
    c: &Constants<S>,
    ambient: &AmbientState<S>,
    population: &Population<'_, S>,
) -> Array1<S> {
    let (t, p, s) = (ambient.t, ambient.p, ambient.supersaturation());
    map_collect!(
        Zip::from(&population.radius)
            .and(&population.kappa)
            .and(&population.dry_radius),
        |&r, &kp, &rd| growth::dr_dt_mm(c, r, t, p, s, kp, rd)
    )
}

/// Kinetic radius growth rate of every particle in the cell, each with its
/// own droplet-surface temperature.
pub fn dr_dt_ff<S: Real>(
    c: &Constants<S>,
    ambient: &AmbientState<S>,
    population: &Population<'_, S>,
    surface_temperature: ArrayView1<'_, S>,
) -> Result<Array1<S>, EngineError> {
    ensure_shape(
        "surface_temperature",
        population.radius.shape(),
        surface_temperature.shape(),
    )?;
    let (t, p, qv) = (ambient.t, ambient.p, ambient.qv);
    Ok(map_collect!(
        Zip::from(&population.radius)
            .and(&population.kappa)
            .and(&population.dry_radius)
            .and(&surface_temperature),
        |&r, &kp, &rd, &t_i| growth::dr_dt_ff(c, r, t, p, qv, kp, rd, t_i)
    ))
}

/// Radius growth rates under the selected law.
///
/// The kinetic law needs `surface_temperature`; the Maxwell–Mason law ignores it.
#[instrument(skip_all, name = "condensation_rates", fields(law = %law, particles = population.len()))]
pub fn dr_dt<S: Real>(
    c: &Constants<S>,
    law: GrowthLaw,
    ambient: &AmbientState<S>,
    population: &Population<'_, S>,
    surface_temperature: Option<ArrayView1<'_, S>>,
) -> Result<Array1<S>, EngineError> {
    let rates = match law {
        GrowthLaw::MaxwellMason => dr_dt_mm(c, ambient, population),
        GrowthLaw::FuchsSutugin => {
            let t_i = surface_temperature.ok_or(EngineError::MissingSurfaceTemperature { law })?;
            dr_dt_ff(c, ambient, population, t_i)?
        }
    };
    trace!("Evaluated {} growth rates.", rates.len());
    Ok(rates)
}
