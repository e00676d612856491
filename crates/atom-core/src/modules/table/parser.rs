use super::model::BaseElementRecord;
use crate::domain::{AtomError, TableResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawTable {
    elements: Vec<BaseElementRecord>,
}

pub(super) fn parse_table_json(source: &str, origin: &str) -> TableResult<Vec<BaseElementRecord>> {
    let raw: RawTable = serde_json::from_str(source).map_err(|error| {
        AtomError::input_validation(
            "INPUT.TABLE_JSON",
            format!("failed to parse element table '{}': {}", origin, error),
        )
    })?;
    validate_records(&raw.elements, origin)?;
    Ok(raw.elements)
}

pub(super) fn read_table_file(path: &Path) -> TableResult<Vec<BaseElementRecord>> {
    let source = fs::read_to_string(path).map_err(|error| {
        AtomError::io_system(
            "IO.TABLE_READ",
            format!(
                "failed to read element table '{}': {}",
                path.display(),
                error
            ),
        )
    })?;
    parse_table_json(&source, &path.display().to_string())
}

pub(super) fn validate_records(records: &[BaseElementRecord], origin: &str) -> TableResult<()> {
    if records.is_empty() {
        return Err(AtomError::input_validation(
            "INPUT.TABLE_EMPTY",
            format!("element table '{}' contains no records", origin),
        ));
    }

    let mut protons = HashSet::new();
    let mut names = HashSet::new();
    let mut symbols = HashSet::new();

    for record in records {
        validate_record(record, origin)?;

        if !protons.insert(record.protons) {
            return Err(duplicate_error(origin, "atomic number", &record.protons.to_string()));
        }
        if !names.insert(record.name.as_str()) {
            return Err(duplicate_error(origin, "name", &record.name));
        }
        if !symbols.insert(record.symbol.to_ascii_lowercase()) {
            return Err(duplicate_error(origin, "symbol", &record.symbol));
        }
    }

    Ok(())
}

fn validate_record(record: &BaseElementRecord, origin: &str) -> TableResult<()> {
    let invalid = |reason: String| {
        AtomError::input_validation(
            "INPUT.TABLE_RECORD",
            format!(
                "element table '{}' record '{}' (Z={}) {}",
                origin, record.name, record.protons, reason
            ),
        )
    };

    if record.name.trim().is_empty() || record.symbol.trim().is_empty() {
        return Err(invalid("must have a name and a symbol".to_string()));
    }
    if record.protons == 0 {
        return Err(invalid("must have at least one proton".to_string()));
    }
    if !(record.atomic_weight.is_finite() && record.atomic_weight > 0.0) {
        return Err(invalid(format!(
            "has non-positive atomic weight {}",
            record.atomic_weight
        )));
    }

    let shell_total: u64 = record.shells.iter().map(|&shell| u64::from(shell)).sum();
    if !record.shells.is_empty() && shell_total != u64::from(record.protons) {
        return Err(invalid(format!(
            "has shells totalling {} electrons",
            shell_total
        )));
    }

    Ok(())
}

fn duplicate_error(origin: &str, field: &str, value: &str) -> AtomError {
    AtomError::input_validation(
        "INPUT.TABLE_DUPLICATE",
        format!(
            "element table '{}' contains duplicate {} '{}'",
            origin, field, value
        ),
    )
}
