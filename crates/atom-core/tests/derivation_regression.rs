use atom_core::common::config::compute;
use atom_core::common::constants::{CUSTOM_CONFIGURATION_TERM_LIMIT, CUSTOM_CONFIGURATION_TEXT};
use atom_core::domain::{ParticleCategory, ParticleCounts, Selection, StabilityClass};
use atom_core::modules::{ElementTable, RecordOrigin, derive};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|path| path.parent())
        .expect("crate should live two levels below the workspace root")
        .to_path_buf()
}

fn read_fixture<T: for<'de> Deserialize<'de>>(relative_path: &str) -> T {
    let path = workspace_root().join(relative_path);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("failed to read {}: {}", path.display(), error));
    serde_json::from_str(&source)
        .unwrap_or_else(|error| panic!("failed to parse {}: {}", path.display(), error))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigurationFixtures {
    configuration_cases: Vec<ConfigurationCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigurationCase {
    id: String,
    electrons: u32,
    expected_shells: Vec<u32>,
    expected_text: String,
    expected_unplaced: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DerivationFixtures {
    derivation_cases: Vec<DerivationCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DerivationCase {
    id: String,
    selected_name: String,
    protons: u32,
    neutrons: u32,
    electrons: u32,
    expected_name: String,
    expected_origin: RecordOrigin,
    expected_shells: Vec<u32>,
    expected_configuration: String,
    expected_isotope: bool,
    expected_charge: i64,
    expected_atomic_weight: f64,
    expected_stability: StabilityClass,
    expected_category: ParticleCategory,
}

#[test]
fn configuration_calculator_matches_fixture_cases() {
    let fixtures: ConfigurationFixtures = read_fixture("fixtures/configuration-cases.json");
    assert!(!fixtures.configuration_cases.is_empty());

    for case in &fixtures.configuration_cases {
        let configuration = compute(case.electrons);
        assert_eq!(
            configuration.shells, case.expected_shells,
            "case {} shells",
            case.id
        );
        assert_eq!(
            configuration.configuration_text, case.expected_text,
            "case {} text",
            case.id
        );
        assert_eq!(
            configuration.unplaced(),
            case.expected_unplaced,
            "case {} unplaced",
            case.id
        );
        assert_eq!(
            configuration.placed() + configuration.unplaced(),
            case.electrons,
            "case {} conserves electrons",
            case.id
        );
    }
}

#[test]
fn derivation_matches_fixture_cases() {
    let fixtures: DerivationFixtures = read_fixture("fixtures/derivation-cases.json");
    let table = ElementTable::bundled().expect("bundled table should load");

    for case in &fixtures.derivation_cases {
        let selection = Selection::new(
            case.selected_name.clone(),
            ParticleCounts::new(case.protons, case.neutrons, case.electrons),
        );
        let view = derive(&table, &selection);

        assert_eq!(view.name(), case.expected_name, "case {} name", case.id);
        assert_eq!(view.origin, case.expected_origin, "case {} origin", case.id);
        assert_eq!(view.shells, case.expected_shells, "case {} shells", case.id);
        assert_eq!(
            view.electron_configuration, case.expected_configuration,
            "case {} configuration",
            case.id
        );
        assert_eq!(
            view.is_isotope, case.expected_isotope,
            "case {} isotope flag",
            case.id
        );
        assert_eq!(view.charge, case.expected_charge, "case {} charge", case.id);
        assert!(
            (view.atomic_weight - case.expected_atomic_weight).abs() < 1e-9,
            "case {} atomic weight: expected {}, got {}",
            case.id,
            case.expected_atomic_weight,
            view.atomic_weight
        );
        assert_eq!(
            view.stability.class, case.expected_stability,
            "case {} stability",
            case.id
        );
        assert_eq!(
            view.category, case.expected_category,
            "case {} category",
            case.id
        );
    }
}

#[test]
fn derivation_is_deterministic_for_repeated_inputs() {
    let table = ElementTable::bundled().expect("bundled table should load");
    let selection = Selection::new("Iron", ParticleCounts::new(26, 31, 24));
    assert_eq!(derive(&table, &selection), derive(&table, &selection));
}

#[test]
fn every_bundled_element_follows_derivation_rules() {
    let table = ElementTable::bundled().expect("bundled table should load");

    for record in table.iter() {
        let protons = record.protons;
        let neutral = derive(
            &table,
            &Selection::new(
                record.name.clone(),
                ParticleCounts::new(protons, record.neutrons, protons),
            ),
        );
        assert_eq!(
            neutral.electron_configuration, record.electron_configuration,
            "{} neutral configuration",
            record.name
        );
        assert_eq!(neutral.shells, record.shells, "{} neutral shells", record.name);
        assert_eq!(neutral.charge, 0, "{} neutral charge", record.name);
        assert!(!neutral.is_isotope, "{} neutral isotope flag", record.name);

        let cation = derive(
            &table,
            &Selection::new(
                record.name.clone(),
                ParticleCounts::new(protons, record.neutrons, protons - 1),
            ),
        );
        let computed = compute(protons - 1);
        let expected_text = if computed.term_count() > CUSTOM_CONFIGURATION_TERM_LIMIT {
            CUSTOM_CONFIGURATION_TEXT.to_string()
        } else {
            computed.configuration_text.clone()
        };
        assert_eq!(cation.charge, 1, "{} cation charge", record.name);
        assert_eq!(
            cation.electron_configuration, expected_text,
            "{} cation configuration",
            record.name
        );
        assert_eq!(cation.shells, computed.shells, "{} cation shells", record.name);

        let isotope = derive(
            &table,
            &Selection::new(
                record.name.clone(),
                ParticleCounts::new(protons, record.neutrons + 1, protons),
            ),
        );
        assert!(isotope.is_isotope, "{} isotope flag", record.name);
        assert_eq!(
            isotope.atomic_weight,
            f64::from(protons + record.neutrons + 1),
            "{} isotope weight",
            record.name
        );
    }
}
