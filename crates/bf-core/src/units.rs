// bf-core/src/units.rs
//
// Hemodynamics is conventionally written in CGS (cm, g, s, dyn/cm²). The model
// crates compute on raw `Real`s in those units; these helpers are the boundary
// where unit-carrying quantities enter.

use uom::si::f64::{
    Area as UomArea, DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength,
    MassDensity as UomMassDensity, Pressure as UomPressure, Time as UomTime,
};

pub type Area = UomArea;
pub type Density = UomMassDensity;
/// Kinematic viscosity (uom models m²/s as a diffusion coefficient).
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Time = UomTime;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn cm2(v: f64) -> Area {
    use uom::si::area::square_centimeter;
    Area::new::<square_centimeter>(v)
}

#[inline]
pub fn dyn_per_cm2(v: f64) -> Pressure {
    use uom::si::pressure::dyne_per_square_centimeter;
    Pressure::new::<dyne_per_square_centimeter>(v)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

#[inline]
pub fn stokes(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::stokes;
    KinVisc::new::<stokes>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Read-back into the CGS numbers the model works with.
pub mod cgs {
    use super::*;

    #[inline]
    pub fn length(v: Length) -> f64 {
        v.get::<uom::si::length::centimeter>()
    }

    #[inline]
    pub fn area(v: Area) -> f64 {
        v.get::<uom::si::area::square_centimeter>()
    }

    #[inline]
    pub fn pressure(v: Pressure) -> f64 {
        v.get::<uom::si::pressure::dyne_per_square_centimeter>()
    }

    #[inline]
    pub fn density(v: Density) -> f64 {
        v.get::<uom::si::mass_density::gram_per_cubic_centimeter>()
    }

    #[inline]
    pub fn kinematic_viscosity(v: KinVisc) -> f64 {
        v.get::<uom::si::diffusion_coefficient::stokes>()
    }

    #[inline]
    pub fn time(v: Time) -> f64 {
        v.get::<uom::si::time::second>()
    }
}

pub mod constants {
    /// 1 mmHg in dyn/cm².
    pub const MMHG_DYN_PER_CM2: f64 = 1_333.223_874;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = cm(0.1);
        let _a = cm2(12.566);
        let _p = dyn_per_cm2(2.0e4);
        let _rho = g_per_cm3(1.06);
        let _nu = stokes(0.04);
        let _t = s(0.125);
    }

    #[test]
    fn cgs_read_back() {
        assert!((cgs::length(cm(0.1)) - 0.1).abs() < 1e-12);
        assert!((cgs::area(cm2(4.0)) - 4.0).abs() < 1e-12);
        assert!((cgs::pressure(dyn_per_cm2(2.0e4)) - 2.0e4).abs() < 1e-8);
        assert!((cgs::density(g_per_cm3(1.06)) - 1.06).abs() < 1e-12);
        assert!((cgs::kinematic_viscosity(stokes(0.04)) - 0.04).abs() < 1e-12);
        assert!((cgs::time(s(0.125)) - 0.125).abs() < 1e-15);
    }

    #[test]
    fn stokes_is_a_square_centimeter_per_second() {
        use uom::si::diffusion_coefficient::square_meter_per_second;
        let nu = stokes(1.0e4);
        assert!((nu.get::<square_meter_per_second>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dyn_per_cm2_is_a_tenth_of_a_pascal() {
        use uom::si::pressure::pascal;
        let p = dyn_per_cm2(10.0);
        assert!((p.get::<pascal>() - 1.0).abs() < 1e-12);
    }
}
