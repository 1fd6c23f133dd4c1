//! Equation descriptor for the 1D blood-flow model.

use crate::common::{check_finite, check_parameter};
use crate::error::{ModelError, ModelResult};
use crate::state::{BloodFlowState, NUM_DIMENSIONS, NUM_VARIABLES, VARIABLE_NAMES};
use crate::traits::{BalanceLaw1D, ElasticVessel, Orientation};
use crate::{flux, pressure, source};
use bf_core::units::{Density, KinVisc, Length, cgs};
use bf_core::Real;
use std::f64::consts::PI;

/// Immutable description of the 1D blood-flow system.
///
/// Carries only constants that are uniform along the vessel. Elasticity `E`
/// and reference area `A0` vary in space and travel inside each
/// [`BloodFlowState`], so one descriptor serves every point of a mesh.
///
/// All values are CGS: cm, g/cm³, cm²/s (stokes).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BloodFlowEquations1D {
    wall_thickness: Real,
    density: Real,
    viscosity: Real,
    poisson_ratio: Real,
    velocity_profile: Real,
}

impl BloodFlowEquations1D {
    pub const DEFAULT_WALL_THICKNESS: Real = 0.1;
    pub const DEFAULT_DENSITY: Real = 1.0;
    pub const DEFAULT_VISCOSITY: Real = 0.04;
    pub const DEFAULT_POISSON_RATIO: Real = 0.5;
    pub const DEFAULT_VELOCITY_PROFILE: Real = 9.0;

    /// Create a descriptor.
    ///
    /// # Arguments
    /// * `wall_thickness` - vessel wall thickness `h` [cm]
    /// * `density` - blood density `rho` [g/cm³]
    /// * `viscosity` - kinematic viscosity `nu` [cm²/s]
    /// * `poisson_ratio` - wall Poisson ratio `xi`, in `[0, 1)`
    /// * `velocity_profile` - order `zeta` of the power-law velocity profile
    ///   (`2` is Poiseuille)
    pub fn new(
        wall_thickness: Real,
        density: Real,
        viscosity: Real,
        poisson_ratio: Real,
        velocity_profile: Real,
    ) -> ModelResult<Self> {
        check_parameter(wall_thickness, "wall thickness")?;
        check_parameter(density, "density")?;
        check_parameter(viscosity, "viscosity")?;
        check_parameter(velocity_profile, "velocity profile order")?;
        let poisson_ratio = check_finite(poisson_ratio, "poisson ratio")?;
        if !(0.0..1.0).contains(&poisson_ratio) {
            return Err(ModelError::NonPositiveParameter {
                what: "1 - poisson ratio^2",
                value: 1.0 - poisson_ratio * poisson_ratio,
            });
        }

        Ok(Self {
            wall_thickness,
            density,
            viscosity,
            poisson_ratio,
            velocity_profile,
        })
    }

    /// Create a descriptor from unit-carrying quantities.
    pub fn from_quantities(
        wall_thickness: Length,
        density: Density,
        viscosity: KinVisc,
        poisson_ratio: Real,
        velocity_profile: Real,
    ) -> ModelResult<Self> {
        Self::new(
            cgs::length(wall_thickness),
            cgs::density(density),
            cgs::kinematic_viscosity(viscosity),
            poisson_ratio,
            velocity_profile,
        )
    }

    pub fn wall_thickness(&self) -> Real {
        self.wall_thickness
    }

    pub fn density(&self) -> Real {
        self.density
    }

    pub fn viscosity(&self) -> Real {
        self.viscosity
    }

    pub fn poisson_ratio(&self) -> Real {
        self.poisson_ratio
    }

    pub fn velocity_profile(&self) -> Real {
        self.velocity_profile
    }

    /// Wall stiffness `beta = sqrt(pi) h E / (1 - xi^2)`.
    #[inline]
    pub fn beta(&self, elasticity: Real) -> Real {
        PI.sqrt() * self.wall_thickness * elasticity
            / (1.0 - self.poisson_ratio * self.poisson_ratio)
    }
}

impl Default for BloodFlowEquations1D {
    fn default() -> Self {
        Self {
            wall_thickness: Self::DEFAULT_WALL_THICKNESS,
            density: Self::DEFAULT_DENSITY,
            viscosity: Self::DEFAULT_VISCOSITY,
            poisson_ratio: Self::DEFAULT_POISSON_RATIO,
            velocity_profile: Self::DEFAULT_VELOCITY_PROFILE,
        }
    }
}

impl BalanceLaw1D for BloodFlowEquations1D {
    type State = BloodFlowState;

    const NUM_VARIABLES: usize = NUM_VARIABLES;
    const NUM_DIMENSIONS: usize = NUM_DIMENSIONS;

    fn name(&self) -> &'static str {
        "BloodFlowEquations1D"
    }

    fn variable_names(&self) -> &'static [&'static str] {
        &VARIABLE_NAMES
    }

    fn flux1(
        &self,
        u_l: &BloodFlowState,
        u_r: &BloodFlowState,
        orientation: Orientation,
    ) -> ModelResult<BloodFlowState> {
        flux::flux1(u_l, u_r, orientation, self)
    }

    fn flux2(
        &self,
        u_l: &BloodFlowState,
        u_r: &BloodFlowState,
        orientation: Orientation,
    ) -> ModelResult<BloodFlowState> {
        flux::flux2(u_l, u_r, orientation, self)
    }

    fn max_abs_speed(&self, u: &BloodFlowState, orientation: Orientation) -> ModelResult<Real> {
        flux::max_abs_speed(u, orientation, self)
    }

    fn source_term(&self, u: &BloodFlowState, x: Real, t: Real) -> ModelResult<BloodFlowState> {
        source::source_term_simple(u, x, t, self)
    }
}

impl ElasticVessel for BloodFlowEquations1D {
    fn pressure(&self, area: Real, elasticity: Real, reference_area: Real) -> ModelResult<Real> {
        pressure::pressure(area, elasticity, reference_area, self)
    }

    fn inv_pressure(&self, p: Real, u: &BloodFlowState) -> ModelResult<Real> {
        pressure::inv_pressure(p, u, self)
    }

    fn radius(&self, u: &BloodFlowState) -> ModelResult<Real> {
        pressure::radius(u, self)
    }

    fn friction(&self, u: &BloodFlowState, x: Real) -> ModelResult<Real> {
        source::friction(u, x, self)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn descriptor_roundtrips_through_json() {
        let eq = BloodFlowEquations1D::new(0.05, 1.06, 0.035, 0.45, 2.0).unwrap();
        let json = serde_json::to_string(&eq).unwrap();
        assert!(json.contains("\"velocity_profile\":2.0"));
        let back: BloodFlowEquations1D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eq);
    }
}
