//! Pointwise evaluations over whole meshes, parallelised with rayon.
//!
//! Every function here is a pure map or reduction; the first failing point
//! aborts the batch and its error is returned.

use crate::error::{ModelError, ModelResult};
use crate::traits::{BalanceLaw1D, InitialCondition, Orientation};
use bf_core::Real;
use rayon::prelude::*;

/// Largest [`BalanceLaw1D::max_abs_speed`] over `states`. Zero for an empty slice.
pub fn max_abs_speed_over<L: BalanceLaw1D>(states: &[L::State], eq: &L) -> ModelResult<Real> {
    states
        .par_iter()
        .map(|u| eq.max_abs_speed(u, Orientation::Positive))
        .try_reduce(|| 0.0, |a, b| Ok(a.max(b)))
}

/// Evaluate `ic` at every position in `xs` at time `t`.
pub fn initial_states<L, I>(xs: &[Real], t: Real, ic: &I, eq: &L) -> ModelResult<Vec<L::State>>
where
    L: BalanceLaw1D,
    I: InitialCondition<L>,
{
    xs.par_iter().map(|&x| ic.evaluate(x, t, eq)).collect()
}

/// [`BalanceLaw1D::source_term`] at every point of the mesh.
pub fn source_terms<L: BalanceLaw1D>(
    states: &[L::State],
    xs: &[Real],
    t: Real,
    eq: &L,
) -> ModelResult<Vec<L::State>> {
    if states.len() != xs.len() {
        return Err(ModelError::LengthMismatch {
            states: states.len(),
            positions: xs.len(),
        });
    }
    states
        .par_iter()
        .zip(xs.par_iter())
        .map(|(u, &x)| eq.source_term(u, x, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::BloodFlowEquations1D;
    use crate::flux::max_abs_speed;
    use crate::initial::RestState;
    use crate::manufactured::ConvergenceTest;
    use crate::source::source_term_simple;
    use crate::state::BloodFlowState;
    use std::f64::consts::PI;

    fn mesh(n: usize) -> Vec<Real> {
        (0..n).map(|i| (i as Real + 0.5) / n as Real).collect()
    }

    #[test]
    fn rest_vessel_everywhere() {
        let eq = BloodFlowEquations1D::default();
        let states = initial_states(&mesh(64), 0.0, &RestState::default(), &eq).unwrap();
        assert_eq!(states.len(), 64);
        assert!(
            states
                .iter()
                .all(|u| *u == BloodFlowState::new(0.0, 0.0, 1e7, 4.0 * PI))
        );
    }

    #[test]
    fn max_speed_matches_serial_scan() {
        let eq = BloodFlowEquations1D::default();
        let states = initial_states(&mesh(100), 0.3, &ConvergenceTest::default(), &eq).unwrap();
        let serial = states
            .iter()
            .map(|u| max_abs_speed(u, Orientation::Positive, &eq).unwrap())
            .fold(0.0, Real::max);
        assert_eq!(max_abs_speed_over(&states, &eq).unwrap(), serial);
        assert_eq!(max_abs_speed_over::<BloodFlowEquations1D>(&[], &eq).unwrap(), 0.0);
    }

    #[test]
    fn source_terms_follow_points() {
        let eq = BloodFlowEquations1D::default();
        let xs = mesh(16);
        let states: Vec<_> = xs
            .iter()
            .map(|&x| BloodFlowState::new(0.0, 10.0 * x, 1e7, PI))
            .collect();
        let sources = source_terms(&states, &xs, 0.0, &eq).unwrap();
        for ((u, &x), s) in states.iter().zip(&xs).zip(&sources) {
            assert_eq!(*s, source_term_simple(u, x, 0.0, &eq).unwrap());
        }
    }

    #[test]
    fn errors_short_circuit() {
        let eq = BloodFlowEquations1D::default();
        let mut states = vec![BloodFlowState::at_rest(1e7, PI); 8];
        states[5] = BloodFlowState::new(-2.0 * PI, 0.0, 1e7, PI);
        assert!(max_abs_speed_over(&states, &eq).is_err());
        assert!(source_terms(&states, &mesh(8), 0.0, &eq).is_err());
        assert!(matches!(
            source_terms(&states, &mesh(3), 0.0, &eq),
            Err(ModelError::LengthMismatch {
                states: 8,
                positions: 3
            })
        ));
    }
}
