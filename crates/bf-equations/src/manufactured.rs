//! Manufactured solution for convergence studies.
//!
//! A travelling sine wave in the area perturbation on a uniform vessel:
//!
//! ```text
//! theta = k (x - c t)
//! a     = eps A0 sin(theta)
//! Q     = c a
//! ```
//!
//! With `Q = c a` the mass equation `a_t + Q_x = 0` holds identically. The
//! momentum equation is closed by the forcing returned from
//! [`ConvergenceTest::forcing`], which the convergence source adds on top of
//! the ordinary wall friction.

use crate::common::{check_area, check_finite, check_parameter};
use crate::equations::BloodFlowEquations1D;
use crate::error::ModelResult;
use crate::source::source_term_simple;
use crate::state::{BloodFlowState, SourceVector};
use crate::traits::{InitialCondition, SourceTerm};
use bf_core::Real;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceTest {
    /// `eps`: peak perturbation relative to `A0`. Must stay below 1.
    pub amplitude_ratio: Real,
    /// `k` [1/cm].
    pub wavenumber: Real,
    /// `c` [cm/s].
    pub phase_speed: Real,
    /// Reference radius [cm].
    pub radius: Real,
    /// Wall elasticity [dyn/cm²].
    pub elasticity: Real,
}

impl Default for ConvergenceTest {
    fn default() -> Self {
        Self {
            amplitude_ratio: 0.1,
            wavenumber: 2.0 * PI,
            phase_speed: 1.0,
            radius: 1.0,
            elasticity: 1e7,
        }
    }
}

impl ConvergenceTest {
    pub fn reference_area(&self) -> Real {
        PI * self.radius * self.radius
    }

    fn check(&self) -> ModelResult<()> {
        check_parameter(self.amplitude_ratio, "amplitude ratio")?;
        check_parameter(self.radius, "rest radius")?;
        check_parameter(self.elasticity, "elasticity")?;
        check_finite(self.wavenumber, "wavenumber")?;
        check_finite(self.phase_speed, "phase speed")?;
        // eps >= 1 lets the area touch zero.
        check_parameter(1.0 - self.amplitude_ratio, "1 - amplitude ratio")?;
        Ok(())
    }

    /// `(a, a_x)` at `(x, t)`.
    fn perturbation(&self, x: Real, t: Real) -> (Real, Real) {
        let a0 = self.reference_area();
        let theta = self.wavenumber * (x - self.phase_speed * t);
        let a = self.amplitude_ratio * a0 * theta.sin();
        let a_x = self.amplitude_ratio * a0 * self.wavenumber * theta.cos();
        (a, a_x)
    }

    /// Exact state at `(x, t)`.
    pub fn exact_state(&self, x: Real, t: Real) -> ModelResult<BloodFlowState> {
        self.check()?;
        check_finite(x, "x")?;
        check_finite(t, "t")?;
        let (a, _) = self.perturbation(x, t);
        Ok(BloodFlowState::new(
            a,
            self.phase_speed * a,
            self.elasticity,
            self.reference_area(),
        ))
    }

    /// Momentum forcing that makes [`Self::exact_state`] an exact solution.
    ///
    /// ```text
    /// S = Q_t + d_x(Q^2/A) + (A/rho) d_x P - F
    ///
    /// Q_t             = -c^2 a_x
    /// d_x(Q^2/A)      = c^2 a a_x (A + A0) / A^2
    /// (A/rho) d_x P   = beta sqrt(A) a_x / (2 rho A0)
    /// F               = -2 pi (zeta + 2) nu Q / A
    /// ```
    pub fn forcing(&self, x: Real, t: Real, eq: &BloodFlowEquations1D) -> ModelResult<Real> {
        self.check()?;
        let a0 = self.reference_area();
        let (a, a_x) = self.perturbation(x, t);
        let area = check_area(a0 + a, "area")?;
        let c = self.phase_speed;
        let q = c * a;

        let q_t = -c * c * a_x;
        let convection = c * c * a * a_x * (area + a0) / (area * area);
        let pressure_force =
            eq.beta(self.elasticity) * area.sqrt() * a_x / (2.0 * eq.density() * a0);
        let friction =
            -2.0 * PI * (eq.velocity_profile() + 2.0) * eq.viscosity() * q / area;

        Ok(q_t + convection + pressure_force - friction)
    }
}

impl InitialCondition<BloodFlowEquations1D> for ConvergenceTest {
    fn evaluate(
        &self,
        x: Real,
        t: Real,
        _eq: &BloodFlowEquations1D,
    ) -> ModelResult<BloodFlowState> {
        self.exact_state(x, t)
    }
}

impl SourceTerm<BloodFlowEquations1D> for ConvergenceTest {
    /// Wall friction at `u` plus the manufactured forcing at `(x, t)`.
    fn evaluate(
        &self,
        u: &BloodFlowState,
        x: Real,
        t: Real,
        eq: &BloodFlowEquations1D,
    ) -> ModelResult<SourceVector> {
        let friction = source_term_simple(u, x, t, eq)?;
        let s = self.forcing(x, t, eq)?;
        Ok(friction + BloodFlowState::new(0.0, s, 0.0, 0.0))
    }
}

/// Exact manufactured state with the default wave.
pub fn initial_condition_convergence_test(
    x: Real,
    t: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<BloodFlowState> {
    InitialCondition::evaluate(&ConvergenceTest::default(), x, t, eq)
}

/// Source for the default manufactured problem.
pub fn source_terms_convergence_test(
    u: &BloodFlowState,
    x: Real,
    t: Real,
    eq: &BloodFlowEquations1D,
) -> ModelResult<SourceVector> {
    SourceTerm::evaluate(&ConvergenceTest::default(), u, x, t, eq)
}
