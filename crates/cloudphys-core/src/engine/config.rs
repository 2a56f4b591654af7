use crate::core::constants::PhysicalConstants;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid value for constant '{name}': {value} (must be finite and positive)")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("Adiabatic exponent Rd/c_pd = {0} must lie below one")]
    AdiabaticExponent(f64),
}

/// Numeric representation the kernels are evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Plain `f64` arithmetic.
    #[default]
    Numeric,
    /// Audit every kernel with unit-carrying quantities before running on `f64`.
    DimensionalAnalysis,
}

/// Diffusional growth law used for population-level rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthLaw {
    #[default]
    MaxwellMason,
    FuchsSutugin,
}

impl fmt::Display for GrowthLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthLaw::MaxwellMason => write!(f, "Maxwell-Mason"),
            GrowthLaw::FuchsSutugin => write!(f, "Fuchs-Sutugin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
    pub backend: Backend,
    pub growth_law: GrowthLaw,
    pub constants: PhysicalConstants,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display_path = path.to_string_lossy().to_string();
        debug!("Reading settings from '{}'.", display_path);
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: display_path.clone(),
            source: e,
        })?;
        let settings = Self::parse(&content, display_path)?;
        info!(
            "Loaded settings: backend = {:?}, growth law = {}.",
            settings.backend, settings.growth_law
        );
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> Result<Self, ConfigError> {
        let settings: Self =
            toml::from_str(content).map_err(|e| ConfigError::Toml { path, source: e })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects constants the kernels cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.constants.named_values() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }
        let exponent = self.constants.rd() / self.constants.c_pd;
        if exponent >= 1.0 {
            return Err(ConfigError::AdiabaticExponent(exponent));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SettingsBuilder {
    backend: Option<Backend>,
    growth_law: Option<GrowthLaw>,
    constants: Option<PhysicalConstants>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }
    pub fn growth_law(mut self, law: GrowthLaw) -> Self {
        self.growth_law = Some(law);
        self
    }
    pub fn constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = Some(constants);
        self
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        let settings = Settings {
            backend: self.backend.unwrap_or_default(),
            growth_law: self
                .growth_law
                .ok_or(ConfigError::MissingParameter("growth_law"))?,
            constants: self.constants.unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("settings.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            r#"
            backend = "dimensional-analysis"
            growth-law = "fuchs-sutugin"

            [constants]
            c-pd = 1004.0
            sgm = 0.0728
            "#
        )
        .unwrap();

        let settings = Settings::load(&file_path).unwrap();
        assert_eq!(settings.backend, Backend::DimensionalAnalysis);
        assert_eq!(settings.growth_law, GrowthLaw::FuchsSutugin);
        assert_eq!(settings.constants.c_pd, 1004.0);
        assert_eq!(settings.constants.sgm, 0.0728);
        assert_eq!(settings.constants.c_pv, 1850.0);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.backend, Backend::Numeric);
        assert_eq!(settings.growth_law, GrowthLaw::MaxwellMason);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("non_existent.toml");
        let result = Settings::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = Settings::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Settings::from_toml_str("[constants]\nspeed-of-light = 3e8");
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = Settings::from_toml_str(r#"backend = "gpu""#);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn non_positive_constant_is_rejected() {
        let result = Settings::from_toml_str("[constants]\nrho-w = -1000.0");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConstant { name: "rho-w", .. })
        ));
    }

    #[test]
    fn adiabatic_exponent_above_one_is_rejected() {
        let result = Settings::from_toml_str("[constants]\nc-pd = 100.0");
        assert!(matches!(result, Err(ConfigError::AdiabaticExponent(_))));
    }

    #[test]
    fn builder_requires_growth_law() {
        let result = SettingsBuilder::new().backend(Backend::Numeric).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("growth_law"))
        ));
    }

    #[test]
    fn builder_fills_optional_fields_with_defaults() {
        let settings = SettingsBuilder::new()
            .growth_law(GrowthLaw::FuchsSutugin)
            .build()
            .unwrap();
        assert_eq!(settings.backend, Backend::Numeric);
        assert_eq!(settings.constants, PhysicalConstants::default());
    }

    #[test]
    fn builder_validates_constants() {
        let constants = PhysicalConstants {
            d0: f64::NAN,
            ..PhysicalConstants::default()
        };
        let result = SettingsBuilder::new()
            .growth_law(GrowthLaw::MaxwellMason)
            .constants(constants)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConstant { name: "d0", .. })
        ));
    }

    #[test]
    fn settings_serialize_back_to_kebab_case_toml() {
        let text = toml::to_string(&Settings::default()).unwrap();
        assert!(text.contains("growth-law = \"maxwell-mason\""));
        assert!(text.contains("c-pd = 1005.0"));
        let restored = Settings::from_toml_str(&text).unwrap();
        assert_eq!(restored, Settings::default());
    }
}
