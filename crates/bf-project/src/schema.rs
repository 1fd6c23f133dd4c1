//! Model configuration schema.
//!
//! All values are in CGS units; field names carry the unit.

use bf_core::units::constants::MMHG_DYN_PER_CM2;
use bf_equations::{BloodFlowEquations1D, PressurePulse, initial};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    pub version: u32,
    #[serde(default)]
    pub vessel: VesselDef,
    #[serde(default)]
    pub rest_state: RestStateDef,
    #[serde(default)]
    pub inflow: InflowDef,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            vessel: VesselDef::default(),
            rest_state: RestStateDef::default(),
            inflow: InflowDef::default(),
        }
    }
}

/// Global vessel and fluid parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VesselDef {
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness_cm: f64,
    #[serde(default = "default_density")]
    pub density_g_cm3: f64,
    #[serde(default = "default_viscosity")]
    pub viscosity_cm2_s: f64,
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,
    #[serde(default = "default_velocity_profile")]
    pub velocity_profile: f64,
}

impl Default for VesselDef {
    fn default() -> Self {
        Self {
            wall_thickness_cm: default_wall_thickness(),
            density_g_cm3: default_density(),
            viscosity_cm2_s: default_viscosity(),
            poisson_ratio: default_poisson_ratio(),
            velocity_profile: default_velocity_profile(),
        }
    }
}

/// Uniform vessel at rest used as initial state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestStateDef {
    #[serde(default = "default_radius")]
    pub radius_cm: f64,
    #[serde(default = "default_elasticity")]
    pub elasticity_dyn_cm2: f64,
}

impl Default for RestStateDef {
    fn default() -> Self {
        Self {
            radius_cm: default_radius(),
            elasticity_dyn_cm2: default_elasticity(),
        }
    }
}

/// Pressure pulse prescribed at the inflow boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InflowDef {
    #[serde(default = "default_amplitude")]
    pub amplitude_dyn_cm2: f64,
    #[serde(default = "default_duration")]
    pub duration_s: f64,
}

impl InflowDef {
    pub fn from_mmhg(amplitude_mmhg: f64, duration_s: f64) -> Self {
        Self {
            amplitude_dyn_cm2: amplitude_mmhg * MMHG_DYN_PER_CM2,
            duration_s,
        }
    }
}

impl Default for InflowDef {
    fn default() -> Self {
        Self {
            amplitude_dyn_cm2: default_amplitude(),
            duration_s: default_duration(),
        }
    }
}

fn default_wall_thickness() -> f64 {
    BloodFlowEquations1D::DEFAULT_WALL_THICKNESS
}

fn default_density() -> f64 {
    BloodFlowEquations1D::DEFAULT_DENSITY
}

fn default_viscosity() -> f64 {
    BloodFlowEquations1D::DEFAULT_VISCOSITY
}

fn default_poisson_ratio() -> f64 {
    BloodFlowEquations1D::DEFAULT_POISSON_RATIO
}

fn default_velocity_profile() -> f64 {
    BloodFlowEquations1D::DEFAULT_VELOCITY_PROFILE
}

fn default_radius() -> f64 {
    initial::DEFAULT_REST_RADIUS
}

fn default_elasticity() -> f64 {
    initial::DEFAULT_ELASTICITY
}

fn default_amplitude() -> f64 {
    PressurePulse::DEFAULT_AMPLITUDE
}

fn default_duration() -> f64 {
    PressurePulse::DEFAULT_DURATION
}
