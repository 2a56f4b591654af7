use super::numeric::{Dimensionality, Real};
use serde::{Deserialize, Serialize};

const DEFAULT_GAS_CONSTANT: f64 = 8.314462618; // J/(K·mol)

const MOLAR_MASS_N2: f64 = 28.014e-3; // kg/mol
const MOLAR_MASS_O2: f64 = 31.998e-3;
const MOLAR_MASS_AR: f64 = 39.948e-3;
const MOLAR_MASS_H2O: f64 = 18.015e-3;

/// Physical constants as plain SI magnitudes.
///
/// This is the configuration-facing form: it deserializes from the
/// `[constants]` table of a settings file, with every omitted key falling back
/// to its default. Kernels never read it directly; they take a
/// [`Constants`] built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PhysicalConstants {
    /// Universal gas constant, J K⁻¹ mol⁻¹.
    pub gas_constant: f64,
    /// Molar mass of dry air, kg mol⁻¹.
    pub molar_mass_dry_air: f64,
    /// Molar mass of water vapour, kg mol⁻¹.
    pub molar_mass_vapour: f64,
    pub c_pd: f64,
    pub c_pv: f64,
    pub c_pw: f64,
    pub p1000: f64,
    pub t0: f64,
    pub t_tri: f64,
    pub l_tri: f64,
    pub sgm: f64,
    pub rho_w: f64,
    pub d0: f64,
    pub k0: f64,
    pub arm_c1: f64,
    pub arm_c2: f64,
    pub arm_c3: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gas_constant: DEFAULT_GAS_CONSTANT,
            molar_mass_dry_air: 0.78 * MOLAR_MASS_N2
                + 0.21 * MOLAR_MASS_O2
                + 0.01 * MOLAR_MASS_AR,
            molar_mass_vapour: MOLAR_MASS_H2O,
            c_pd: 1005.0,
            c_pv: 1850.0,
            c_pw: 4218.0,
            p1000: 1000.0e2,
            t0: 273.15,
            t_tri: 273.16,
            l_tri: 2.5e6,
            sgm: 0.072,
            rho_w: 1000.0,
            d0: 2.26e-5,
            k0: 2.4e-2,
            arm_c1: 6.1094e2,
            arm_c2: 17.625,
            arm_c3: 243.04,
        }
    }
}

impl PhysicalConstants {
    /// Specific gas constant of dry air.
    pub fn rd(&self) -> f64 {
        self.gas_constant / self.molar_mass_dry_air
    }

    /// Specific gas constant of water vapour.
    pub fn rv(&self) -> f64 {
        self.gas_constant / self.molar_mass_vapour
    }

    /// Ratio of the molar masses of water vapour and dry air.
    pub fn eps(&self) -> f64 {
        self.molar_mass_vapour / self.molar_mass_dry_air
    }

    /// Every stored constant keyed by its settings-file name.
    pub fn named_values(&self) -> [(&'static str, f64); 17] {
        [
            ("gas-constant", self.gas_constant),
            ("molar-mass-dry-air", self.molar_mass_dry_air),
            ("molar-mass-vapour", self.molar_mass_vapour),
            ("c-pd", self.c_pd),
            ("c-pv", self.c_pv),
            ("c-pw", self.c_pw),
            ("p1000", self.p1000),
            ("t0", self.t0),
            ("t-tri", self.t_tri),
            ("l-tri", self.l_tri),
            ("sgm", self.sgm),
            ("rho-w", self.rho_w),
            ("d0", self.d0),
            ("k0", self.k0),
            ("arm-c1", self.arm_c1),
            ("arm-c2", self.arm_c2),
            ("arm-c3", self.arm_c3),
        ]
    }
}

/// Kernel-ready constants in the numeric backend `S`.
///
/// Built once and passed by reference into every formula. For the float
/// backends the dimensionality attached here is discarded; for
/// [`crate::core::numeric::Quantity`] it is what the audit checks against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants<S> {
    pub rd: S,
    pub rv: S,
    pub eps: S,
    pub c_pd: S,
    pub c_pv: S,
    pub c_pw: S,
    pub p1000: S,
    pub t0: S,
    pub t_tri: S,
    pub l_tri: S,
    pub sgm: S,
    pub rho_w: S,
    pub d0: S,
    pub k0: S,
    pub arm_c1: S,
    pub arm_c2: S,
    pub arm_c3: S,
}

impl<S: Real> Constants<S> {
    pub fn new(physical: &PhysicalConstants) -> Self {
        use Dimensionality as D;
        Self {
            rd: S::from_si(physical.rd(), D::SPECIFIC_HEAT),
            rv: S::from_si(physical.rv(), D::SPECIFIC_HEAT),
            eps: S::from_si(physical.eps(), D::NONE),
            c_pd: S::from_si(physical.c_pd, D::SPECIFIC_HEAT),
            c_pv: S::from_si(physical.c_pv, D::SPECIFIC_HEAT),
            c_pw: S::from_si(physical.c_pw, D::SPECIFIC_HEAT),
            p1000: S::from_si(physical.p1000, D::PRESSURE),
            t0: S::from_si(physical.t0, D::KELVIN),
            t_tri: S::from_si(physical.t_tri, D::KELVIN),
            l_tri: S::from_si(physical.l_tri, D::SPECIFIC_ENERGY),
            sgm: S::from_si(physical.sgm, D::SURFACE_TENSION),
            rho_w: S::from_si(physical.rho_w, D::DENSITY),
            d0: S::from_si(physical.d0, D::DIFFUSIVITY),
            k0: S::from_si(physical.k0, D::THERMAL_CONDUCTIVITY),
            arm_c1: S::from_si(physical.arm_c1, D::PRESSURE),
            arm_c2: S::from_si(physical.arm_c2, D::NONE),
            arm_c3: S::from_si(physical.arm_c3, D::KELVIN),
        }
    }
}

impl<S: Real> Default for Constants<S> {
    fn default() -> Self {
        Self::new(&PhysicalConstants::default())
    }
}
