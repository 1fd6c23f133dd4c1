//! bf-equations: one-dimensional blood flow in elastic vessels.
//!
//! Provides:
//! - State record `(a, Q, E, A0)` with the area perturbation as primary unknown
//! - Thin-wall elastic tube law, its inverse and wave speeds
//! - Well-balanced conservative / nonconservative surface flux split
//! - Viscous wall friction source
//! - Rest-state, pressure-pulse inflow and manufactured-solution generators
//! - `BalanceLaw1D` trait for host discretizations
//!
//! # Architecture
//!
//! The crate is a pure pointwise model: no mesh, no time integration, no
//! storage. A host solver owns those and calls into the model through
//! [`BalanceLaw1D`] and the [`InitialCondition`], [`SourceTerm`] and
//! [`BoundaryCondition`] seams. All evaluators are free of side effects and
//! may run concurrently; [`batch`] shows how with rayon.
//!
//! # Example
//!
//! ```
//! use bf_equations::{BloodFlowEquations1D, BloodFlowState, Orientation, flux1, flux2};
//!
//! let eq = BloodFlowEquations1D::default();
//! let wide = BloodFlowState::at_rest(1.0e7, 4.0 * std::f64::consts::PI);
//! let narrow = BloodFlowState::at_rest(4.0e6, std::f64::consts::PI);
//!
//! let f1 = flux1(&wide, &narrow, Orientation::Positive, &eq).unwrap();
//! let f2 = flux2(&wide, &narrow, Orientation::Positive, &eq).unwrap();
//! assert_eq!(f1.q + f2.q, 0.0);
//! ```

pub mod batch;
pub mod boundary;
pub mod common;
pub mod equations;
pub mod error;
pub mod flux;
pub mod initial;
pub mod manufactured;
pub mod pressure;
pub mod source;
pub mod state;
pub mod traits;

// Re-exports for ergonomics
pub use batch::{initial_states, max_abs_speed_over, source_terms};
pub use boundary::{
    PressureInflow, PressurePulse, TransmissiveOutflow, boundary_condition_outflow,
    boundary_condition_pressure_in, boundary_state_pressure_in,
};
pub use equations::BloodFlowEquations1D;
pub use error::{ModelError, ModelResult};
pub use flux::{
    characteristic_speeds, flux_jacobian, flux1, flux2, max_abs_speed, max_abs_speed_naive,
    physical_flux,
};
pub use initial::{RestState, initial_condition_simple};
pub use manufactured::{
    ConvergenceTest, initial_condition_convergence_test, source_terms_convergence_test,
};
pub use pressure::{
    collapse_pressure, inv_pressure, pressure, pressure_of, pressure_potential, pressure_slope,
    radius, wave_celerity,
};
pub use source::{WallFriction, friction, source_term_simple};
pub use state::{BloodFlowState, FluxVector, SourceVector};
pub use traits::{
    BalanceLaw1D, BoundaryCondition, ElasticVessel, FluxPair, InitialCondition, Orientation,
    SourceTerm, order_by_direction,
};
