use atom_core::common::config::compute;
use atom_core::common::constants::MAX_KNOWN_ATOMIC_NUMBER;
use atom_core::domain::AtomErrorCategory;
use atom_core::modules::ElementTable;
use std::fs;
use tempfile::TempDir;

#[test]
fn bundled_table_covers_every_known_element_in_order() {
    let table = ElementTable::bundled().expect("bundled table should load");
    assert_eq!(table.len(), MAX_KNOWN_ATOMIC_NUMBER as usize);

    for (index, record) in table.iter().enumerate() {
        assert_eq!(
            record.protons as usize,
            index + 1,
            "{} should sit at its atomic number",
            record.name
        );
    }
}

#[test]
fn bundled_shells_sum_to_atomic_number() {
    let table = ElementTable::bundled().expect("bundled table should load");
    for record in table.iter() {
        assert_eq!(
            record.shells.iter().sum::<u32>(),
            record.protons,
            "{} shells {:?}",
            record.name,
            record.shells
        );
    }
}

#[test]
fn bundled_records_carry_display_metadata() {
    let table = ElementTable::bundled().expect("bundled table should load");
    for record in table.iter() {
        assert!(!record.title.is_empty(), "{} should have a title", record.name);
        assert!(
            !record.description.is_empty(),
            "{} should have a description",
            record.name
        );
        assert!(record.atomic_weight > 0.0, "{} weight", record.name);
        assert!(
            (1..=7).contains(&record.period),
            "{} period {}",
            record.name,
            record.period
        );
    }

    let titanium = table.by_name("Titanium").expect("Titanium should exist");
    assert_eq!(titanium.electron_configuration, "[Ar] 3d2 4s2");
    assert_eq!(titanium.neutrons, 26);
    assert!(titanium.is_stable_neutron_count(26));

    let carbon = table.find("c").expect("carbon should resolve by symbol");
    assert_eq!(carbon.name, "Carbon");
    assert!(carbon.is_stable_neutron_count(6));
    assert!(carbon.is_stable_neutron_count(7));
    assert!(!carbon.is_stable_neutron_count(8));
}

#[test]
fn computed_shells_agree_with_bundled_shells_for_light_elements() {
    // The fixed fill order reproduces canonical shells up to chromium's exception.
    let table = ElementTable::bundled().expect("bundled table should load");
    for protons in 1..=23 {
        let record = table.by_protons(protons).expect("light element should exist");
        assert_eq!(
            compute(protons).shells,
            record.shells,
            "{} computed shells",
            record.name
        );
    }
}

#[test]
fn user_table_file_replaces_bundled_records() {
    let temp = TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("elements.json");
    fs::write(
        &path,
        r#"{
  "elements": [
    {
      "name": "Hydrogen",
      "symbol": "H",
      "protons": 1,
      "neutrons": 0,
      "atomicWeight": 1.008,
      "stableNeutrons": [0, 1],
      "electronConfiguration": "1s1",
      "shells": [1],
      "group": 1,
      "period": 1,
      "stateAtStp": "gas"
    }
  ]
}"#,
    )
    .expect("table file should be written");

    let table = ElementTable::from_json_path(&path).expect("user table should load");
    assert_eq!(table.len(), 1);
    assert_eq!(table.by_symbol("h").map(|record| record.protons), Some(1));
}

#[test]
fn missing_table_file_is_an_io_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let error = ElementTable::from_json_path(&temp.path().join("missing.json"))
        .expect_err("missing file should fail");
    assert_eq!(error.category(), AtomErrorCategory::IoSystemError);
    assert_eq!(error.placeholder(), "IO.TABLE_READ");
    assert_eq!(error.exit_code(), 3);
}
