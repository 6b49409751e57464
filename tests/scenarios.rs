use meteor_madness::config::{find_scenario, load_profile, load_scenarios};
use meteor_madness::physics::{ImpactParameters, ScalingProfile, compute_impact};

#[test]
fn shipped_catalog_loads_and_computes() {
    let catalog = load_scenarios("configs/scenarios.yaml").expect("scenario catalog");
    assert_eq!(catalog.len(), 4);

    for scenario in &catalog {
        let result = compute_impact(&ImpactParameters::from(scenario))
            .unwrap_or_else(|e| panic!("scenario '{}' rejected: {e}", scenario.name));
        assert!(
            result.kinetic_energy_megatons > 0.0,
            "scenario '{}' produced no energy",
            scenario.name
        );
    }
}

#[test]
fn scenario_lookup_is_case_insensitive() {
    let catalog = load_scenarios("configs/scenarios.yaml").expect("scenario catalog");
    let scenario = find_scenario(&catalog, "dinosaur extinction").expect("lookup");
    assert_eq!(scenario.diameter_m, 10_000.0);
    assert!(find_scenario(&catalog, "Planet Nine").is_err());
}

#[test]
fn extinction_scenario_dwarfs_the_baseline() {
    let catalog = load_scenarios("configs/scenarios.yaml").expect("scenario catalog");
    let dino = find_scenario(&catalog, "Dinosaur Extinction").expect("preset");
    let extinction = compute_impact(&ImpactParameters::from(dino)).expect("extinction run");

    let baseline = compute_impact(&ImpactParameters {
        diameter_m: 100.0,
        velocity_km_s: 20.0,
        angle_deg: 90.0,
        density_kg_m3: 2600.0,
    })
    .expect("baseline run");

    // Orders of magnitude apart regardless of scaling-constant tuning.
    assert!(
        extinction.kinetic_energy_megatons > baseline.kinetic_energy_megatons * 1.0e4,
        "extinction = {} Mt, baseline = {} Mt",
        extinction.kinetic_energy_megatons,
        baseline.kinetic_energy_megatons
    );
}

#[test]
fn shipped_profiles_match_builtin_constant_sets() {
    let reference = load_profile("configs/profiles/reference.toml").expect("reference profile");
    assert_eq!(ScalingProfile::from(&reference), ScalingProfile::reference());

    let portal = load_profile("configs/profiles/portal.toml").expect("portal profile");
    assert_eq!(ScalingProfile::from(&portal), ScalingProfile::portal());
}

#[test]
fn catalog_defaults_fill_optional_fields() {
    let yaml = "- name: Bare\n  diameter_m: 75\n  velocity_km_s: 17\n";
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bare.yaml");
    std::fs::write(&path, yaml).expect("write catalog");

    let catalog = load_scenarios(&path).expect("bare catalog");
    assert_eq!(catalog[0].angle_deg, 90.0);
    assert_eq!(catalog[0].density_kg_m3, 2600.0);
}
