//! Configuration validation.

use crate::schema::{InflowDef, LATEST_VERSION, ModelConfig, RestStateDef, VesselDef};
use bf_equations::{BloodFlowEquations1D, ModelError, collapse_pressure};
use std::f64::consts::PI;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Model rejected configuration: {0}")]
    Model(#[from] ModelError),
}

pub fn validate_config(config: &ModelConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    validate_vessel(&config.vessel)?;
    validate_rest_state(&config.rest_state)?;
    validate_inflow(&config.inflow)?;

    // The pulse must stay above the collapse pressure of the rest vessel, or
    // the inflow boundary has no admissible area.
    let eq = vessel_equations(&config.vessel)?;
    let rest = &config.rest_state;
    let collapse = collapse_pressure(
        rest.elasticity_dyn_cm2,
        PI * rest.radius_cm * rest.radius_cm,
        &eq,
    )?;
    let trough = config.inflow.amplitude_dyn_cm2.min(0.0);
    if trough <= collapse {
        return Err(ValidationError::InvalidValue {
            field: "inflow.amplitude_dyn_cm2".to_string(),
            value: config.inflow.amplitude_dyn_cm2.to_string(),
            reason: format!("below collapse pressure {collapse}"),
        });
    }

    Ok(())
}

fn vessel_equations(vessel: &VesselDef) -> Result<BloodFlowEquations1D, ModelError> {
    BloodFlowEquations1D::new(
        vessel.wall_thickness_cm,
        vessel.density_g_cm3,
        vessel.viscosity_cm2_s,
        vessel.poisson_ratio,
        vessel.velocity_profile,
    )
}

fn validate_vessel(vessel: &VesselDef) -> Result<(), ValidationError> {
    positive("vessel.wall_thickness_cm", vessel.wall_thickness_cm)?;
    positive("vessel.density_g_cm3", vessel.density_g_cm3)?;
    positive("vessel.viscosity_cm2_s", vessel.viscosity_cm2_s)?;
    positive("vessel.velocity_profile", vessel.velocity_profile)?;
    if !(0.0..1.0).contains(&vessel.poisson_ratio) {
        return Err(ValidationError::InvalidValue {
            field: "vessel.poisson_ratio".to_string(),
            value: vessel.poisson_ratio.to_string(),
            reason: "must be in [0, 1)".to_string(),
        });
    }
    Ok(())
}

fn validate_rest_state(rest: &RestStateDef) -> Result<(), ValidationError> {
    positive("rest_state.radius_cm", rest.radius_cm)?;
    positive("rest_state.elasticity_dyn_cm2", rest.elasticity_dyn_cm2)?;
    Ok(())
}

fn validate_inflow(inflow: &InflowDef) -> Result<(), ValidationError> {
    if !inflow.amplitude_dyn_cm2.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: "inflow.amplitude_dyn_cm2".to_string(),
            value: inflow.amplitude_dyn_cm2.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    positive("inflow.duration_s", inflow.duration_s)?;
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite and positive".to_string(),
        })
    }
}
