//! Well-balanced surface flux split for the augmented blood-flow system.
//!
//! The momentum equation carries `(A / rho) dP/dx`. With `E` and `A0` varying
//! in space this term is not the divergence of any flux, so it is split:
//!
//! - `flux1`: conservative part, the physical flux `(Q, Q^2/A + Pi)` where `Pi`
//!   is the pressure potential, discretized with local Lax-Friedrichs.
//! - `flux2`: what is left of the pressure term once `Pi` has been moved into
//!   `flux1`. It vanishes when `E` and `A0` agree on both sides.
//!
//! A host adds `orientation.sign() * flux2` to both cells sharing the interface
//! (centered fluctuation split), and `flux1` as an ordinary outward flux.
//!
//! Both evaluators satisfy `f(u_l, u_r, n) == -f(u_r, u_l, -n)`, and both are
//! identically zero between vessels at rest (`a = 0`, `Q = 0`) regardless of
//! how `E` and `A0` jump.

use crate::common::check_area;
use crate::equations::BloodFlowEquations1D;
use crate::error::ModelResult;
use crate::pressure::{pressure, pressure_potential, wave_celerity};
use crate::state::{BloodFlowState, FluxVector};
use crate::traits::{FluxPair, Orientation};
use bf_core::Real;
use nalgebra::Matrix2;

/// Physical flux `(Q, Q^2/A + Pi, 0, 0)`.
pub fn physical_flux(u: &BloodFlowState, eq: &BloodFlowEquations1D) -> ModelResult<FluxVector> {
    let area = check_area(u.area(), "area")?;
    let potential = pressure_potential(area, u.e, u.a0, eq)?;
    Ok(BloodFlowState::new(
        u.q,
        u.q * u.q / area + potential,
        0.0,
        0.0,
    ))
}

/// Largest absolute characteristic speed `|Q/A| + c`.
pub fn max_abs_speed(
    u: &BloodFlowState,
    _orientation: Orientation,
    eq: &BloodFlowEquations1D,
) -> ModelResult<Real> {
    let area = check_area(u.area(), "area")?;
    let c = wave_celerity(u, eq)?;
    Ok((u.q / area).abs() + c)
}

/// Pairwise maximum of [`max_abs_speed`] over both sides of an interface.
pub fn max_abs_speed_naive(
    u_l: &BloodFlowState,
    u_r: &BloodFlowState,
    orientation: Orientation,
    eq: &BloodFlowEquations1D,
) -> ModelResult<Real> {
    let lambda_l = max_abs_speed(u_l, orientation, eq)?;
    let lambda_r = max_abs_speed(u_r, orientation, eq)?;
    Ok(lambda_l.max(lambda_r))
}

/// Conservative surface flux (local Lax-Friedrichs).
///
/// ```text
/// F = n (f(u_l) + f(u_r)) / 2 - lambda / 2 (u_r - u_l)
/// ```
///
/// Dissipation acts on `a` and `Q` only. Using the perturbation `a` rather than
/// `A` keeps the dissipation zero between rest states with different `A0`.
/// The passive fields `E`, `A0` receive no flux.
pub fn flux1(
    u_l: &BloodFlowState,
    u_r: &BloodFlowState,
    orientation: Orientation,
    eq: &BloodFlowEquations1D,
) -> ModelResult<FluxVector> {
    let f_l = physical_flux(u_l, eq)?;
    let f_r = physical_flux(u_r, eq)?;
    let lambda = max_abs_speed_naive(u_l, u_r, orientation, eq)?;
    let n = orientation.sign();

    Ok(BloodFlowState::new(
        0.5 * n * (f_l.a + f_r.a) - 0.5 * lambda * (u_r.a - u_l.a),
        0.5 * n * (f_l.q + f_r.q) - 0.5 * lambda * (u_r.q - u_l.q),
        0.0,
        0.0,
    ))
}

/// Nonconservative correction to the pressure term.
///
/// ```text
/// D = ( Abar (P_r - P_l) / rho - (Pi_r - Pi_l) ) / 2
/// Abar = (A_l + A_r + sqrt(A_l A_r)) / 3
/// ```
///
/// Each side's `P` and `Pi` use that side's own `E` and `A0`. For equal
/// coefficients `Abar (P_r - P_l) / rho` is exactly `Pi_r - Pi_l`, so the
/// pressure force reduces to the gradient of the potential already in `flux1`.
/// The ordering of the states encodes the normal, so `orientation` does not
/// enter.
pub fn flux2(
    u_l: &BloodFlowState,
    u_r: &BloodFlowState,
    _orientation: Orientation,
    eq: &BloodFlowEquations1D,
) -> ModelResult<FluxVector> {
    let area_l = check_area(u_l.area(), "left area")?;
    let area_r = check_area(u_r.area(), "right area")?;

    let p_l = pressure(area_l, u_l.e, u_l.a0, eq)?;
    let p_r = pressure(area_r, u_r.e, u_r.a0, eq)?;
    let pot_l = pressure_potential(area_l, u_l.e, u_l.a0, eq)?;
    let pot_r = pressure_potential(area_r, u_r.e, u_r.a0, eq)?;

    let area_mean = (area_l + area_r + (area_l * area_r).sqrt()) / 3.0;
    let jump = area_mean * (p_r - p_l) / eq.density() - (pot_r - pot_l);

    Ok(BloodFlowState::new(0.0, 0.5 * jump, 0.0, 0.0))
}

impl Default for FluxPair<BloodFlowEquations1D> {
    fn default() -> Self {
        Self::new(flux1, flux2)
    }
}

/// Jacobian of `(Q, Q^2/A + Pi)` with respect to `(a, Q)` at fixed `E`, `A0`.
///
/// ```text
/// | 0            1     |
/// | c^2 - v^2    2 v   |
/// ```
pub fn flux_jacobian(u: &BloodFlowState, eq: &BloodFlowEquations1D) -> ModelResult<Matrix2<Real>> {
    let area = check_area(u.area(), "area")?;
    let v = u.q / area;
    let c = wave_celerity(u, eq)?;
    Ok(Matrix2::new(0.0, 1.0, c * c - v * v, 2.0 * v))
}

/// Characteristic speeds `(v - c, v + c)`; distinct and real whenever `A > 0`.
pub fn characteristic_speeds(
    u: &BloodFlowState,
    eq: &BloodFlowEquations1D,
) -> ModelResult<(Real, Real)> {
    let area = check_area(u.area(), "area")?;
    let v = u.q / area;
    let c = wave_celerity(u, eq)?;
    Ok((v - c, v + c))
}
