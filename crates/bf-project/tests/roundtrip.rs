use bf_equations::{BloodFlowState, InitialCondition, PressurePulse};
use bf_project::schema::*;
use bf_project::{ProjectError, build, load_json, load_yaml, save_json, save_yaml, validate_config};

#[test]
fn roundtrip_yaml_default_config() {
    let config = ModelConfig::default();
    validate_config(&config).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("bf_project_roundtrip_default.yaml");

    save_yaml(&path, &config).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn roundtrip_json_custom_config() {
    let config = ModelConfig {
        version: LATEST_VERSION,
        vessel: VesselDef {
            wall_thickness_cm: 0.05,
            density_g_cm3: 1.06,
            viscosity_cm2_s: 0.035,
            poisson_ratio: 0.45,
            velocity_profile: 2.0,
        },
        rest_state: RestStateDef {
            radius_cm: 0.8,
            elasticity_dyn_cm2: 4.0e6,
        },
        inflow: InflowDef::from_mmhg(15.0, 0.3),
    };

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("bf_project_roundtrip_custom.json");

    save_json(&path, &config).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn missing_sections_take_defaults() {
    let yaml = "version: 1\ninflow:\n  duration_s: 0.25\n";
    let config: ModelConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.vessel, VesselDef::default());
    assert_eq!(config.rest_state, RestStateDef::default());
    assert_eq!(config.inflow.amplitude_dyn_cm2, 2.0e4);
    assert_eq!(config.inflow.duration_s, 0.25);
}

#[test]
fn build_default_model() {
    let (eq, rest, inflow) = build(&ModelConfig::default()).unwrap();
    assert!((eq.density() - 1.0).abs() < 1e-12);
    assert!((eq.viscosity() - 0.04).abs() < 1e-12);
    assert_eq!(eq.velocity_profile(), 9.0);
    assert_eq!(inflow.pulse, PressurePulse::default());

    let u = rest.evaluate(0.0, 0.0, &eq).unwrap();
    assert_eq!(u, BloodFlowState::new(0.0, 0.0, 1e7, 4.0 * std::f64::consts::PI));
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("bf_project_invalid.yaml");
    std::fs::write(&path, "version: 1\nrest_state:\n  radius_cm: -2.0\n").unwrap();

    assert!(matches!(load_yaml(&path), Err(ProjectError::Validation(_))));
}

#[test]
fn built_descriptor_roundtrips_through_yaml() {
    let mut config = ModelConfig::default();
    config.vessel.poisson_ratio = 0.45;
    config.vessel.velocity_profile = 2.0;
    let (eq, _, _) = build(&config).unwrap();

    let yaml = serde_yaml::to_string(&eq).unwrap();
    let back: bf_equations::BloodFlowEquations1D = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, eq);
    assert_eq!(back.poisson_ratio(), 0.45);
}
