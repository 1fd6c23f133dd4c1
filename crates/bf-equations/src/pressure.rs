//! Thin-wall elastic tube law and its inverse.
//!
//! ```text
//! P(A) = beta / A0 * (sqrt(A) - sqrt(A0)),   beta = sqrt(pi) h E / (1 - xi^2)
//! ```
//!
//! Equivalently `P = E h / ((1 - xi^2) R0) * (sqrt(A / A0) - 1)`: Laplace's law
//! for a linearly elastic thin cylinder. The law is smooth and strictly
//! increasing for `A > 0`, vanishes at `A = A0`, and has the closed-form inverse
//! used by [`inv_pressure`].

use crate::common::{check_area, check_finite, check_parameter};
use crate::equations::BloodFlowEquations1D;
use crate::error::{ModelError, ModelResult};
use crate::state::BloodFlowState;
use bf_core::Real;
use std::f64::consts::PI;

/// Transmural pressure at area `area` for wall parameters `(elasticity, reference_area)`.
pub fn pressure(
    area: Real,
    elasticity: Real,
    reference_area: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<Real> {
    let area = check_area(area, "area")?;
    let e = check_parameter(elasticity, "elasticity")?;
    let a0 = check_parameter(reference_area, "reference area")?;
    Ok(eq.beta(e) / a0 * (area.sqrt() - a0.sqrt()))
}

/// Pressure of a state, using its own wall parameters.
pub fn pressure_of(u: &BloodFlowState, eq: &BloodFlowEquations1D) -> ModelResult<Real> {
    pressure(u.area(), u.e, u.a0, eq)
}

/// Area at which the wall law produces `p`, with `E` and `A0` taken from `u`.
///
/// Closed form `A = (sqrt(A0) + p A0 / beta)^2`. Pressures at or below the
/// collapse pressure `-beta / sqrt(A0)` have no admissible root and are
/// rejected with [`ModelError::NoInverse`].
pub fn inv_pressure(p: Real, u: &BloodFlowState, eq: &BloodFlowEquations1D) -> ModelResult<Real> {
    let p = check_finite(p, "pressure")?;
    let e = check_parameter(u.e, "elasticity")?;
    let a0 = check_parameter(u.a0, "reference area")?;
    let beta = eq.beta(e);

    let sqrt_area = a0.sqrt() + p * a0 / beta;
    if sqrt_area <= 0.0 {
        let collapse = -beta / a0.sqrt();
        tracing::debug!(pressure = p, collapse, "pressure has no admissible area");
        return Err(ModelError::NoInverse {
            pressure: p,
            collapse,
        });
    }
    Ok(sqrt_area * sqrt_area)
}

/// Infimum of the pressures the wall law can reach (the `A -> 0` limit).
pub fn collapse_pressure(
    elasticity: Real,
    reference_area: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<Real> {
    let e = check_parameter(elasticity, "elasticity")?;
    let a0 = check_parameter(reference_area, "reference area")?;
    Ok(-eq.beta(e) / a0.sqrt())
}

/// `dP/dA = beta / (2 A0 sqrt(A))`.
pub fn pressure_slope(
    area: Real,
    elasticity: Real,
    reference_area: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<Real> {
    let area = check_area(area, "area")?;
    let e = check_parameter(elasticity, "elasticity")?;
    let a0 = check_parameter(reference_area, "reference area")?;
    Ok(eq.beta(e) / (2.0 * a0 * area.sqrt()))
}

/// Pulse wave speed `c = sqrt(A / rho * dP/dA)`.
pub fn wave_celerity(u: &BloodFlowState, eq: &BloodFlowEquations1D) -> ModelResult<Real> {
    let area = check_area(u.area(), "area")?;
    let slope = pressure_slope(area, u.e, u.a0, eq)?;
    Ok((area / eq.density() * slope).sqrt())
}

/// Pressure potential `Pi(A) = beta / (3 rho A0) * (A^{3/2} - A0^{3/2})`.
///
/// For fixed `E`, `A0` this satisfies `dPi/dA = A / rho * dP/dA`, so its
/// gradient is the pressure force per unit mass. It vanishes at rest.
pub fn pressure_potential(
    area: Real,
    elasticity: Real,
    reference_area: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<Real> {
    let area = check_area(area, "area")?;
    let e = check_parameter(elasticity, "elasticity")?;
    let a0 = check_parameter(reference_area, "reference area")?;
    Ok(eq.beta(e) / (3.0 * eq.density() * a0) * (area * area.sqrt() - a0 * a0.sqrt()))
}

/// Vessel radius `sqrt(A / pi)`.
pub fn radius(u: &BloodFlowState, _eq: &BloodFlowEquations1D) -> ModelResult<Real> {
    let area = check_area(u.area(), "area")?;
    Ok((area / PI).sqrt())
}
