//! Augmented state vector of the 1D blood-flow system.

use crate::common::{check_area, check_finite, check_parameter};
use crate::error::ModelResult;
use bf_core::Real;
use nalgebra::SVector;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Number of variables carried per point.
pub const NUM_VARIABLES: usize = 4;

/// Number of spatial dimensions.
pub const NUM_DIMENSIONS: usize = 1;

/// Variable names in index order.
pub const VARIABLE_NAMES: [&str; NUM_VARIABLES] = ["a", "Q", "E", "A0"];

/// Point state `(a, Q, E, A0)`.
///
/// `a` is the area perturbation `A - A0` and `q` the volumetric flow rate.
/// `e` (wall elasticity) and `a0` (reference area) are passive fields: they vary
/// along the vessel but are not evolved by any flux.
///
/// The index order `a, Q, E, A0` is fixed and used by every array conversion.
/// Fluxes and sources live in the same variable space and reuse this type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BloodFlowState {
    pub a: Real,
    pub q: Real,
    pub e: Real,
    pub a0: Real,
}

/// Surface flux in the state's variable space.
pub type FluxVector = BloodFlowState;

/// Volumetric source in the state's variable space.
pub type SourceVector = BloodFlowState;

impl BloodFlowState {
    pub const fn new(a: Real, q: Real, e: Real, a0: Real) -> Self {
        Self { a, q, e, a0 }
    }

    /// Vessel at rest: no perturbation, no flow.
    pub const fn at_rest(e: Real, a0: Real) -> Self {
        Self::new(0.0, 0.0, e, a0)
    }

    /// All-zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// True cross-sectional area `A = a + A0`.
    #[inline]
    pub fn area(&self) -> Real {
        self.a + self.a0
    }

    /// Mean velocity `Q / A`.
    pub fn velocity(&self) -> ModelResult<Real> {
        let area = check_area(self.area(), "area")?;
        Ok(self.q / area)
    }

    /// Check that this is a physically valid state.
    pub fn validate(&self) -> ModelResult<()> {
        check_finite(self.a, "area perturbation")?;
        check_finite(self.q, "flow rate")?;
        check_parameter(self.e, "elasticity")?;
        check_parameter(self.a0, "reference area")?;
        check_area(self.area(), "area")?;
        Ok(())
    }

    pub fn to_array(self) -> [Real; NUM_VARIABLES] {
        [self.a, self.q, self.e, self.a0]
    }

    pub fn to_vector(self) -> SVector<Real, NUM_VARIABLES> {
        SVector::from(self.to_array())
    }

    pub fn from_vector(v: &SVector<Real, NUM_VARIABLES>) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Component by index, `None` past the end.
    pub fn get(&self, index: usize) -> Option<Real> {
        match index {
            0 => Some(self.a),
            1 => Some(self.q),
            2 => Some(self.e),
            3 => Some(self.a0),
            _ => None,
        }
    }
}

impl From<[Real; NUM_VARIABLES]> for BloodFlowState {
    fn from(v: [Real; NUM_VARIABLES]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BloodFlowState> for [Real; NUM_VARIABLES] {
    fn from(u: BloodFlowState) -> Self {
        u.to_array()
    }
}

impl Index<usize> for BloodFlowState {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.a,
            1 => &self.q,
            2 => &self.e,
            3 => &self.a0,
            _ => panic!("BloodFlowState index {index} out of range (len {NUM_VARIABLES})"),
        }
    }
}

impl Add for BloodFlowState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.a + rhs.a,
            self.q + rhs.q,
            self.e + rhs.e,
            self.a0 + rhs.a0,
        )
    }
}

impl Sub for BloodFlowState {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.a - rhs.a,
            self.q - rhs.q,
            self.e - rhs.e,
            self.a0 - rhs.a0,
        )
    }
}

impl Neg for BloodFlowState {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.a, -self.q, -self.e, -self.a0)
    }
}

impl Mul<Real> for BloodFlowState {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.a * rhs, self.q * rhs, self.e * rhs, self.a0 * rhs)
    }
}
