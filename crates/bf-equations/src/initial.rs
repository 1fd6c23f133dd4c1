//! Initial states.

use crate::common::check_parameter;
use crate::equations::BloodFlowEquations1D;
use crate::error::ModelResult;
use crate::state::BloodFlowState;
use crate::traits::InitialCondition;
use bf_core::Real;
use std::f64::consts::PI;

/// Radius of the canonical rest vessel [cm].
pub const DEFAULT_REST_RADIUS: Real = 2.0;

/// Wall elasticity of the canonical rest vessel [dyn/cm²].
pub const DEFAULT_ELASTICITY: Real = 1e7;

/// Uniform vessel at rest with reference area `pi * radius^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestState {
    pub radius: Real,
    pub elasticity: Real,
}

impl RestState {
    pub fn new(radius: Real, elasticity: Real) -> ModelResult<Self> {
        check_parameter(radius, "rest radius")?;
        check_parameter(elasticity, "elasticity")?;
        Ok(Self { radius, elasticity })
    }

    pub fn reference_area(&self) -> Real {
        PI * self.radius * self.radius
    }
}

impl Default for RestState {
    fn default() -> Self {
        Self {
            radius: DEFAULT_REST_RADIUS,
            elasticity: DEFAULT_ELASTICITY,
        }
    }
}

impl InitialCondition<BloodFlowEquations1D> for RestState {
    fn evaluate(
        &self,
        _x: Real,
        _t: Real,
        _eq: &BloodFlowEquations1D,
    ) -> ModelResult<BloodFlowState> {
        check_parameter(self.radius, "rest radius")?;
        check_parameter(self.elasticity, "elasticity")?;
        Ok(BloodFlowState::at_rest(self.elasticity, self.reference_area()))
    }
}

/// `(0, 0, 1e7, pi r0^2)` for every `x`, `t`.
pub fn initial_condition_simple(
    x: Real,
    t: Real,
    eq: &BloodFlowEquations1D,
    r0: Real,
) -> ModelResult<BloodFlowState> {
    RestState::new(r0, DEFAULT_ELASTICITY)?.evaluate(x, t, eq)
}
