use super::config::{ConfigError, GrowthLaw};
use crate::core::numeric::DimensionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Array '{name}' has shape {found:?}, expected {expected:?}")]
    Shape {
        name: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("The {law} growth law needs droplet-surface temperatures, but none were supplied")]
    MissingSurfaceTemperature { law: GrowthLaw },

    #[error("Dimensional analysis failed: {source}")]
    Dimension {
        #[from]
        source: DimensionError,
    },
}
