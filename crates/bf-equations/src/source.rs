//! Viscous friction source.

use crate::common::check_area;
use crate::equations::BloodFlowEquations1D;
use crate::error::ModelResult;
use crate::pressure::radius;
use crate::state::{BloodFlowState, SourceVector};
use crate::traits::SourceTerm;
use bf_core::Real;
use std::f64::consts::PI;

/// Friction coefficient `k = -(zeta + 2) nu / R`.
///
/// Negative by construction, so `2 pi k R Q / A` opposes the flow. For a
/// Poiseuille profile (`zeta = 2`) the resulting force is `-8 pi nu Q / A`.
pub fn friction(u: &BloodFlowState, _x: Real, eq: &BloodFlowEquations1D) -> ModelResult<Real> {
    let r = radius(u, eq)?;
    Ok(-(eq.velocity_profile() + 2.0) * eq.viscosity() / r)
}

/// Friction source `(0, 2 pi k R Q / A, 0, 0)`.
///
/// Only the momentum equation is forced.
pub fn source_term_simple(
    u: &BloodFlowState,
    x: Real,
    _t: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<SourceVector> {
    let area = check_area(u.area(), "area")?;
    let r = radius(u, eq)?;
    let k = friction(u, x, eq)?;
    Ok(BloodFlowState::new(
        0.0,
        2.0 * PI * k * r * u.q / area,
        0.0,
        0.0,
    ))
}

/// [`source_term_simple`] as a [`SourceTerm`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallFriction;

impl SourceTerm<BloodFlowEquations1D> for WallFriction {
    fn evaluate(
        &self,
        u: &BloodFlowState,
        x: Real,
        t: Real,
        eq: &BloodFlowEquations1D,
    ) -> ModelResult<BloodFlowState> {
        source_term_simple(u, x, t, eq)
    }
}
