use super::CliError;
use anyhow::Context;
use atom_core::common::constants::PARTICLE_LIMIT;
use atom_core::domain::AtomError;
use atom_core::modules::serialization::write_text_artifact;
use atom_core::modules::{BaseElementRecord, ElementTable};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to warnings.
pub(super) fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub(super) fn load_table(path: Option<&Path>) -> Result<ElementTable, CliError> {
    let table = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading element table");
            ElementTable::from_json_path(path)?
        }
        None => {
            tracing::debug!("using bundled element table");
            ElementTable::bundled()?
        }
    };
    tracing::debug!(records = table.len(), "element table ready");
    Ok(table)
}

pub(super) fn resolve_element<'t>(
    table: &'t ElementTable,
    query: &str,
) -> Result<&'t BaseElementRecord, CliError> {
    table.find(query).ok_or_else(|| {
        CliError::Compute(AtomError::input_validation(
            "INPUT.CLI_ELEMENT",
            format!("unknown element '{}'; expected a name or symbol", query),
        ))
    })
}

pub(super) fn checked_particle_count(
    flag: &str,
    value: Option<u32>,
) -> Result<Option<u32>, CliError> {
    match value {
        Some(count) if count > PARTICLE_LIMIT => {
            Err(CliError::Compute(AtomError::input_validation(
                "INPUT.CLI_PARTICLES",
                format!(
                    "--{} {} exceeds the particle limit of {}",
                    flag, count, PARTICLE_LIMIT
                ),
            )))
        }
        other => Ok(other),
    }
}

/// Writes to `output` when given, otherwise prints to stdout.
pub(super) fn emit_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory '{}'", parent.display())
                })?;
            }
            write_text_artifact(path, content)
                .with_context(|| format!("failed to write output file '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            if content.ends_with('\n') {
                print!("{}", content);
            } else {
                println!("{}", content);
            }
        }
    }
    Ok(())
}
