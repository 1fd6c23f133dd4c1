//! Capability contract between the equation model and a host solver.

use crate::error::ModelResult;
use bf_core::Real;
use std::ops::Neg;

/// Sign of the interface normal in 1D.
///
/// The left state of a flux evaluation sits on the back side of the normal and
/// the right state on the front side. For `Positive` that makes the left state
/// the one with the smaller coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Positive,
    Negative,
}

impl Orientation {
    /// +1.0 or -1.0.
    pub fn sign(self) -> Real {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

impl Neg for Orientation {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// A one-dimensional hyperbolic balance law as seen by a host discretization.
///
/// Implementations are immutable descriptors; every method is a pure function
/// of its arguments, so a single instance may be shared across threads and
/// evaluated at every point of a mesh concurrently.
pub trait BalanceLaw1D: Send + Sync {
    /// Per-point vector in the system's variable space (state, flux, source).
    type State: Copy + Send + Sync + std::fmt::Debug;

    const NUM_VARIABLES: usize;
    const NUM_DIMENSIONS: usize = 1;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Names of the variables in index order.
    fn variable_names(&self) -> &'static [&'static str];

    /// Conservative surface flux.
    fn flux1(
        &self,
        u_l: &Self::State,
        u_r: &Self::State,
        orientation: Orientation,
    ) -> ModelResult<Self::State>;

    /// Nonconservative surface contribution.
    fn flux2(
        &self,
        u_l: &Self::State,
        u_r: &Self::State,
        orientation: Orientation,
    ) -> ModelResult<Self::State>;

    /// Largest absolute characteristic speed at `u`. Never negative.
    fn max_abs_speed(&self, u: &Self::State, orientation: Orientation) -> ModelResult<Real>;

    /// Volumetric source at `u`, position `x`, time `t`.
    fn source_term(&self, u: &Self::State, x: Real, t: Real) -> ModelResult<Self::State>;
}

/// Constitutive and friction closures of an elastic-vessel model.
pub trait ElasticVessel: BalanceLaw1D {
    /// Transmural pressure for area `area` given the local wall parameters.
    fn pressure(&self, area: Real, elasticity: Real, reference_area: Real) -> ModelResult<Real>;

    /// Area producing `pressure` with the wall parameters carried by `u`.
    fn inv_pressure(&self, pressure: Real, u: &Self::State) -> ModelResult<Real>;

    /// Vessel radius at `u`.
    fn radius(&self, u: &Self::State) -> ModelResult<Real>;

    /// Friction coefficient at `u`, `x`.
    fn friction(&self, u: &Self::State, x: Real) -> ModelResult<Real>;
}

/// Signature shared by the two surface flux evaluators.
pub type SurfaceFluxFn<L> = fn(
    &<L as BalanceLaw1D>::State,
    &<L as BalanceLaw1D>::State,
    Orientation,
    &L,
) -> ModelResult<<L as BalanceLaw1D>::State>;

/// The conservative / nonconservative surface flux pair handed to boundary
/// conditions and used at interior interfaces.
pub struct FluxPair<L: BalanceLaw1D> {
    pub conservative: SurfaceFluxFn<L>,
    pub nonconservative: SurfaceFluxFn<L>,
}

impl<L: BalanceLaw1D> FluxPair<L> {
    pub fn new(conservative: SurfaceFluxFn<L>, nonconservative: SurfaceFluxFn<L>) -> Self {
        Self {
            conservative,
            nonconservative,
        }
    }

    /// Evaluate both fluxes for one interface.
    pub fn evaluate(
        &self,
        u_l: &L::State,
        u_r: &L::State,
        orientation: Orientation,
        eq: &L,
    ) -> ModelResult<(L::State, L::State)> {
        let f1 = (self.conservative)(u_l, u_r, orientation, eq)?;
        let f2 = (self.nonconservative)(u_l, u_r, orientation, eq)?;
        Ok((f1, f2))
    }
}

impl<L: BalanceLaw1D> Clone for FluxPair<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: BalanceLaw1D> Copy for FluxPair<L> {}

impl<L: BalanceLaw1D> std::fmt::Debug for FluxPair<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluxPair").finish_non_exhaustive()
    }
}

/// State generator for `t = t0` (or any point in space-time).
pub trait InitialCondition<L: BalanceLaw1D>: Send + Sync {
    fn evaluate(&self, x: Real, t: Real, eq: &L) -> ModelResult<L::State>;
}

/// Volumetric source generator.
pub trait SourceTerm<L: BalanceLaw1D>: Send + Sync {
    fn evaluate(&self, u: &L::State, x: Real, t: Real, eq: &L) -> ModelResult<L::State>;
}

/// Boundary treatment producing the surface flux pair at a domain boundary.
///
/// `direction` follows the usual 1D convention: odd directions are the lower
/// (x-min) boundary, where the interior state is the right state of the
/// interface; even directions are the upper boundary, where it is the left one.
pub trait BoundaryCondition<L: BalanceLaw1D>: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn surface_flux(
        &self,
        u_inner: &L::State,
        orientation: Orientation,
        direction: usize,
        x: Real,
        t: Real,
        fluxes: &FluxPair<L>,
        eq: &L,
    ) -> ModelResult<(L::State, L::State)>;
}

/// Order `(u_inner, u_boundary)` into `(left, right)` for `direction`.
pub fn order_by_direction<S>(u_inner: S, u_boundary: S, direction: usize) -> (S, S) {
    if direction % 2 == 0 {
        (u_inner, u_boundary)
    } else {
        (u_boundary, u_inner)
    }
}
