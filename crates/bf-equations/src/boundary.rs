//! Boundary conditions.
//!
//! A boundary builds a ghost state from the interior state and hands the pair to
//! the same surface fluxes used at interior interfaces, ordered by the parity of
//! `direction` (see [`BoundaryCondition`]).

use crate::common::{check_finite, check_parameter};
use crate::equations::BloodFlowEquations1D;
use crate::error::ModelResult;
use crate::pressure::inv_pressure;
use crate::state::{BloodFlowState, FluxVector};
use crate::traits::{BoundaryCondition, FluxPair, Orientation, order_by_direction};
use bf_core::Real;
use std::f64::consts::PI;

/// Single raised half-sine pressure pulse.
///
/// ```text
/// P(t) = amplitude * sin(pi t / duration)^2   for t < duration
/// P(t) = 0                                    otherwise
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressurePulse {
    /// Peak pressure [dyn/cm²], reached at `duration / 2`.
    pub amplitude: Real,
    /// Length of the active phase [s].
    pub duration: Real,
}

impl PressurePulse {
    pub const DEFAULT_AMPLITUDE: Real = 2.0e4;
    pub const DEFAULT_DURATION: Real = 0.125;

    pub fn new(amplitude: Real, duration: Real) -> ModelResult<Self> {
        let amplitude = check_finite(amplitude, "pulse amplitude")?;
        let duration = check_parameter(duration, "pulse duration")?;
        Ok(Self {
            amplitude,
            duration,
        })
    }

    /// Prescribed pressure at time `t`.
    pub fn pressure_at(&self, t: Real) -> Real {
        if t < self.duration {
            self.amplitude * (PI * t / self.duration).sin().powi(2)
        } else {
            0.0
        }
    }

    pub fn is_active(&self, t: Real) -> bool {
        t < self.duration
    }
}

impl Default for PressurePulse {
    fn default() -> Self {
        Self {
            amplitude: Self::DEFAULT_AMPLITUDE,
            duration: Self::DEFAULT_DURATION,
        }
    }
}

/// Ghost state whose area produces the prescribed inflow pressure.
///
/// Flow rate and passive fields are copied from `u_inner`; only the area
/// responds to the pulse.
pub fn boundary_state_pressure_in(
    u_inner: &BloodFlowState,
    t: Real,
    pulse: &PressurePulse,
    eq: &BloodFlowEquations1D,
) -> ModelResult<BloodFlowState> {
    let p_in = pulse.pressure_at(t);
    let area_in = inv_pressure(p_in, u_inner, eq)?;
    tracing::trace!(t, p_in, area_in, "pressure inflow ghost state");
    Ok(BloodFlowState::new(
        area_in - u_inner.a0,
        u_inner.q,
        u_inner.e,
        u_inner.a0,
    ))
}

/// Prescribed-pressure inflow with a configurable pulse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressureInflow {
    pub pulse: PressurePulse,
}

impl PressureInflow {
    pub fn new(pulse: PressurePulse) -> Self {
        Self { pulse }
    }
}

impl BoundaryCondition<BloodFlowEquations1D> for PressureInflow {
    fn surface_flux(
        &self,
        u_inner: &BloodFlowState,
        orientation: Orientation,
        direction: usize,
        _x: Real,
        t: Real,
        fluxes: &FluxPair<BloodFlowEquations1D>,
        eq: &BloodFlowEquations1D,
    ) -> ModelResult<(FluxVector, FluxVector)> {
        let u_boundary = boundary_state_pressure_in(u_inner, t, &self.pulse, eq)?;
        let (u_l, u_r) = order_by_direction(*u_inner, u_boundary, direction);
        fluxes.evaluate(&u_l, &u_r, orientation, eq)
    }
}

/// Pressure inflow with the default pulse (`2e4` peak, `0.125` s).
///
/// Returns `(flux1, flux2)` exactly as an interior interface would.
pub fn boundary_condition_pressure_in(
    u_inner: &BloodFlowState,
    orientation: Orientation,
    direction: usize,
    x: Real,
    t: Real,
    fluxes: &FluxPair<BloodFlowEquations1D>,
    eq: &BloodFlowEquations1D,
) -> ModelResult<(FluxVector, FluxVector)> {
    PressureInflow::default().surface_flux(u_inner, orientation, direction, x, t, fluxes, eq)
}

/// Zero-gradient outflow: the ghost state is a copy of the interior state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransmissiveOutflow;

impl BoundaryCondition<BloodFlowEquations1D> for TransmissiveOutflow {
    fn surface_flux(
        &self,
        u_inner: &BloodFlowState,
        orientation: Orientation,
        direction: usize,
        _x: Real,
        _t: Real,
        fluxes: &FluxPair<BloodFlowEquations1D>,
        eq: &BloodFlowEquations1D,
    ) -> ModelResult<(FluxVector, FluxVector)> {
        let (u_l, u_r) = order_by_direction(*u_inner, *u_inner, direction);
        fluxes.evaluate(&u_l, &u_r, orientation, eq)
    }
}

pub fn boundary_condition_outflow(
    u_inner: &BloodFlowState,
    orientation: Orientation,
    direction: usize,
    x: Real,
    t: Real,
    fluxes: &FluxPair<BloodFlowEquations1D>,
    eq: &BloodFlowEquations1D,
) -> ModelResult<(FluxVector, FluxVector)> {
    TransmissiveOutflow.surface_flux(u_inner, orientation, direction, x, t, fluxes, eq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::{flux1, flux2, physical_flux};
    use crate::pressure::pressure;
    use bf_core::{Tolerances, nearly_equal};

    fn eq() -> BloodFlowEquations1D {
        BloodFlowEquations1D::default()
    }

    #[test]
    fn pulse_shape() {
        let pulse = PressurePulse::default();
        assert_eq!(pulse.pressure_at(0.0), 0.0);
        assert!(nearly_equal(
            pulse.pressure_at(0.0625),
            2.0e4,
            Tolerances::new(1e-9, 1e-12)
        ));
        assert!(pulse.pressure_at(0.125 - 1e-9) < 1e-8);
        assert!(pulse.pressure_at(0.125 - 1e-9) >= 0.0);
        for t in [0.125, 0.2, 1.0, 100.0] {
            assert_eq!(pulse.pressure_at(t), 0.0);
        }
        assert!(pulse.is_active(0.1));
        assert!(!pulse.is_active(0.125));
    }

    #[test]
    fn pulse_peaks_mid_phase() {
        let pulse = PressurePulse::default();
        let peak = pulse.pressure_at(0.0625);
        for i in 0..125 {
            let t = i as Real * 1e-3;
            assert!(pulse.pressure_at(t) <= peak + 1e-9);
        }
    }

    #[test]
    fn pulse_validation() {
        assert!(PressurePulse::new(1.0e4, 0.0).is_err());
        assert!(PressurePulse::new(Real::NAN, 0.1).is_err());
        assert!(PressurePulse::new(-1.0e3, 0.1).is_ok());
    }

    #[test]
    fn positive_pressure_enlarges_boundary_area() {
        let a0 = 4.0 * PI;
        let u_inner = BloodFlowState::at_rest(1e7, a0);
        let area = inv_pressure(2.0e4, &u_inner, &eq()).unwrap();
        assert!(area > a0);

        let ghost =
            boundary_state_pressure_in(&u_inner, 0.0625, &PressurePulse::default(), &eq())
                .unwrap();
        assert!(ghost.a > 0.0);
        assert_eq!(ghost.q, u_inner.q);
        assert_eq!(ghost.e, u_inner.e);
        assert_eq!(ghost.a0, u_inner.a0);
        let p = pressure(ghost.area(), ghost.e, ghost.a0, &eq()).unwrap();
        assert!(nearly_equal(p, 2.0e4, Tolerances::new(1e-6, 1e-9)));
    }

    #[test]
    fn quiescent_ghost_has_reference_area() {
        let u_inner = BloodFlowState::new(0.3, 5.0, 1e7, PI);
        let ghost =
            boundary_state_pressure_in(&u_inner, 0.5, &PressurePulse::default(), &eq()).unwrap();
        assert!(ghost.a.abs() < 1e-12);
        assert_eq!(ghost.q, 5.0);
    }

    #[test]
    fn direction_parity_selects_left_right() {
        let u_inner = BloodFlowState::new(0.1, 3.0, 1e7, PI);
        let fluxes = FluxPair::default();
        let t = 0.03;
        let ghost =
            boundary_state_pressure_in(&u_inner, t, &PressurePulse::default(), &eq()).unwrap();

        let (f1, f2) = boundary_condition_pressure_in(
            &u_inner,
            Orientation::Positive,
            2,
            1.0,
            t,
            &fluxes,
            &eq(),
        )
        .unwrap();
        assert_eq!(f1, flux1(&u_inner, &ghost, Orientation::Positive, &eq()).unwrap());
        assert_eq!(f2, flux2(&u_inner, &ghost, Orientation::Positive, &eq()).unwrap());

        let (f1, f2) = boundary_condition_pressure_in(
            &u_inner,
            Orientation::Positive,
            1,
            0.0,
            t,
            &fluxes,
            &eq(),
        )
        .unwrap();
        assert_eq!(f1, flux1(&ghost, &u_inner, Orientation::Positive, &eq()).unwrap());
        assert_eq!(f2, flux2(&ghost, &u_inner, Orientation::Positive, &eq()).unwrap());
    }

    #[test]
    fn negative_orientation_mirrors_the_interface() {
        let u_inner = BloodFlowState::new(0.1, 3.0, 1e7, PI);
        let fluxes = FluxPair::default();
        let t = 0.03;
        let ghost =
            boundary_state_pressure_in(&u_inner, t, &PressurePulse::default(), &eq()).unwrap();

        // Odd direction: (ghost, inner) seen with the normal flipped.
        let (f1, f2) = boundary_condition_pressure_in(
            &u_inner,
            Orientation::Negative,
            1,
            0.0,
            t,
            &fluxes,
            &eq(),
        )
        .unwrap();
        assert_eq!(f1, flux1(&ghost, &u_inner, Orientation::Negative, &eq()).unwrap());
        assert_eq!(f2, flux2(&ghost, &u_inner, Orientation::Negative, &eq()).unwrap());
        assert_eq!(f1, -flux1(&u_inner, &ghost, Orientation::Positive, &eq()).unwrap());
        assert_eq!(f2, -flux2(&u_inner, &ghost, Orientation::Positive, &eq()).unwrap());

        // Even direction with a negative normal undoes the odd/positive case.
        let (g1, g2) = boundary_condition_pressure_in(
            &u_inner,
            Orientation::Negative,
            2,
            1.0,
            t,
            &fluxes,
            &eq(),
        )
        .unwrap();
        let (h1, h2) = boundary_condition_pressure_in(
            &u_inner,
            Orientation::Positive,
            1,
            0.0,
            t,
            &fluxes,
            &eq(),
        )
        .unwrap();
        assert_eq!(g1, -h1);
        assert_eq!(g2, -h2);
    }

    #[test]
    fn inflow_pushes_mass_into_domain() {
        // Left boundary of a vessel at rest at peak pressure: the ghost is
        // inflated, so the Lax-Friedrichs mass flux points into the domain.
        let u_inner = BloodFlowState::at_rest(1e7, 4.0 * PI);
        let (f1, _) = boundary_condition_pressure_in(
            &u_inner,
            Orientation::Positive,
            1,
            0.0,
            0.0625,
            &FluxPair::default(),
            &eq(),
        )
        .unwrap();
        assert!(f1.a > 0.0);
    }

    #[test]
    fn outflow_reproduces_physical_flux() {
        let u_inner = BloodFlowState::new(0.2, 11.0, 3e6, 2.0);
        let (f1, f2) = boundary_condition_outflow(
            &u_inner,
            Orientation::Positive,
            2,
            1.0,
            0.4,
            &FluxPair::default(),
            &eq(),
        )
        .unwrap();
        let f = physical_flux(&u_inner, &eq()).unwrap();
        assert!(nearly_equal(f1.q, f.q, Tolerances::new(1e-9, 1e-12)));
        assert_eq!(f1.a, f.a);
        assert_eq!(f2.q, 0.0);
    }

    #[test]
    fn inflow_below_collapse_is_reported() {
        let pulse = PressurePulse::new(-1.0e9, 0.125).unwrap();
        let bc = PressureInflow::new(pulse);
        let u_inner = BloodFlowState::at_rest(1e7, PI);
        let result = bc.surface_flux(
            &u_inner,
            Orientation::Positive,
            1,
            0.0,
            0.0625,
            &FluxPair::default(),
            &eq(),
        );
        assert!(result.is_err());
    }
}
