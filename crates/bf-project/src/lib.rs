//! bf-project: model configuration file format, validation and assembly.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_config};

use bf_core::units::{cm, g_per_cm3, stokes};
use bf_equations::{BloodFlowEquations1D, ModelError, PressureInflow, PressurePulse, RestState};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<ModelConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ModelConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    tracing::info!(path = %path.display(), version = config.version, "loaded model config");
    Ok(config)
}

pub fn save_yaml(path: &std::path::Path, config: &ModelConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved model config");
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<ModelConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ModelConfig = serde_json::from_str(&content)?;
    validate_config(&config)?;
    tracing::info!(path = %path.display(), version = config.version, "loaded model config");
    Ok(config)
}

pub fn save_json(path: &std::path::Path, config: &ModelConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved model config");
    Ok(())
}

/// Runtime descriptor, initial state and inflow boundary described by `config`.
pub fn build(
    config: &ModelConfig,
) -> ProjectResult<(BloodFlowEquations1D, RestState, PressureInflow)> {
    validate_config(config)?;

    let vessel = &config.vessel;
    let eq = BloodFlowEquations1D::from_quantities(
        cm(vessel.wall_thickness_cm),
        g_per_cm3(vessel.density_g_cm3),
        stokes(vessel.viscosity_cm2_s),
        vessel.poisson_ratio,
        vessel.velocity_profile,
    )?;
    let rest = RestState::new(
        config.rest_state.radius_cm,
        config.rest_state.elasticity_dyn_cm2,
    )?;
    let pulse = PressurePulse::new(config.inflow.amplitude_dyn_cm2, config.inflow.duration_s)?;

    tracing::debug!(
        radius = rest.radius,
        amplitude = pulse.amplitude,
        "assembled blood flow model"
    );
    Ok((eq, rest, PressureInflow::new(pulse)))
}
