use crate::core::constants::Constants;
use crate::core::formulae::growth;
use crate::core::models::ambient::AmbientState;
use crate::core::models::particle::{Equilibrium, ParticleState};
use crate::engine::arrays;
use crate::engine::audit;
use crate::engine::condensation::{self, Population};
use crate::engine::config::{Backend, GrowthLaw, Settings};
use crate::engine::error::EngineError;
use ndarray::{Array, Array1, ArrayView, ArrayView1, Dimension};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Thermodynamic fields of a grid, derived from its prognostic variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermodynamicFields<D: Dimension> {
    pub temperature: Array<f64, D>,
    pub pressure: Array<f64, D>,
    pub relative_humidity: Array<f64, D>,
}

/// Condensation microphysics configured once and evaluated many times.
#[derive(Debug, Clone)]
pub struct Microphysics {
    settings: Settings,
    constants: Constants<f64>,
}

impl Microphysics {
    #[instrument(skip_all, name = "microphysics_setup")]
    pub fn new(settings: Settings) -> Result<Self, EngineError> {
        settings.validate()?;
        match settings.backend {
            Backend::Numeric => {
                debug!("Numeric backend selected; skipping dimensional analysis.");
            }
            Backend::DimensionalAnalysis => {
                let report = audit::run(&settings.constants)?;
                debug!("Audited kernels: {:?}", report.checked);
            }
        }
        let constants = Constants::new(&settings.constants);
        info!(
            "Microphysics ready: growth law = {}, Rd = {:.4}, Rv = {:.4}.",
            settings.growth_law, constants.rd, constants.rv
        );
        Ok(Self {
            settings,
            constants,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        Self::new(Settings::load(path)?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn constants(&self) -> &Constants<f64> {
        &self.constants
    }

    pub fn growth_law(&self) -> GrowthLaw {
        self.settings.growth_law
    }

    pub fn ambient(&self, rhod: f64, thd: f64, qv: f64) -> AmbientState<f64> {
        AmbientState::new(&self.constants, rhod, thd, qv)
    }

    pub fn equilibrium(&self, particle: &ParticleState<f64>, t: f64) -> Equilibrium<f64> {
        particle.equilibrium(&self.constants, t)
    }

    /// Temperature, pressure and relative humidity of every grid cell.
    #[instrument(skip_all, name = "thermodynamic_fields", fields(cells = rhod.len()))]
    pub fn thermodynamic_fields<D: Dimension>(
        &self,
        rhod: ArrayView<'_, f64, D>,
        thd: ArrayView<'_, f64, D>,
        qv: ArrayView<'_, f64, D>,
    ) -> Result<ThermodynamicFields<D>, EngineError> {
        let (temperature, pressure, relative_humidity) =
            arrays::temperature_pressure_rh(&self.constants, rhod, thd, qv)?;
        if relative_humidity.iter().any(|rh| !rh.is_finite()) {
            warn!("Non-finite relative humidity in derived fields; check qv and thd inputs.");
        }
        Ok(ThermodynamicFields {
            temperature,
            pressure,
            relative_humidity,
        })
    }

    /// Radius growth rates of a population under the configured growth law.
    pub fn dr_dt(
        &self,
        ambient: &AmbientState<f64>,
        population: &Population<'_, f64>,
        surface_temperature: Option<ArrayView1<'_, f64>>,
    ) -> Result<Array1<f64>, EngineError> {
        condensation::dr_dt(
            &self.constants,
            self.settings.growth_law,
            ambient,
            population,
            surface_temperature,
        )
    }

    /// Log-volume growth rates of a population, the form superdroplet
    /// integrators advance in.
    pub fn dlnv_dt(
        &self,
        ambient: &AmbientState<f64>,
        population: &Population<'_, f64>,
        surface_temperature: Option<ArrayView1<'_, f64>>,
    ) -> Result<Array1<f64>, EngineError> {
        let dr_dt = self.dr_dt(ambient, population, surface_temperature)?;
        let lnv = population.radius.mapv(|r| growth::volume(r).ln());
        arrays::dlnv_dt(lnv.view(), dr_dt.view())
    }

    /// Potential-temperature tendency of a parcel from its vapour tendency.
    pub fn dthd_dt(&self, ambient: &AmbientState<f64>, dqv_dt: f64) -> f64 {
        ambient.dthd_dt(&self.constants, dqv_dt)
    }

    /// Potential-temperature tendencies of every grid cell.
    pub fn dthd_dt_field<D: Dimension>(
        &self,
        rhod: ArrayView<'_, f64, D>,
        thd: ArrayView<'_, f64, D>,
        t: ArrayView<'_, f64, D>,
        dqv_dt: ArrayView<'_, f64, D>,
    ) -> Result<Array<f64, D>, EngineError> {
        arrays::dthd_dt(&self.constants, rhod, thd, t, dqv_dt)
    }
}
