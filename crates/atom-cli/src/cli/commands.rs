use super::CliError;
use super::helpers::{checked_particle_count, emit_output, load_table, resolve_element};
use atom_core::common::config::{ElectronConfiguration, compute};
use atom_core::modules::serialization::render_json;
use atom_core::modules::{
    AtomSession, BaseElementRecord, DerivedElementView, InfoPanel, ParticleUpdate,
    classify_stability,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub(super) struct ShowArgs {
    /// Element name or symbol; defaults to Titanium
    #[arg(long, short = 'e')]
    element: Option<String>,

    /// Proton count override
    #[arg(long, short = 'p')]
    protons: Option<u32>,

    /// Neutron count override
    #[arg(long, short = 'n')]
    neutrons: Option<u32>,

    /// Electron count override
    #[arg(long)]
    electrons: Option<u32>,

    /// Print the derived view and panel as JSON
    #[arg(long)]
    json: bool,

    /// Write the output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ConfigArgs {
    /// Number of electrons to place
    #[arg(value_name = "ELECTRONS")]
    electrons: u32,

    /// Print the configuration as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct ListArgs {
    /// Case-insensitive glob over names and symbols, e.g. "*ium"
    #[arg(long)]
    pattern: Option<String>,

    /// Case-insensitive substring over names and symbols
    #[arg(long)]
    search: Option<String>,
}

#[derive(clap::Args)]
pub(super) struct StabilityArgs {
    #[arg(value_name = "PROTONS")]
    protons: u32,

    #[arg(value_name = "NEUTRONS")]
    neutrons: u32,

    /// Print the classification as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowReport<'a> {
    view: &'a DerivedElementView,
    panel: &'a InfoPanel,
}

pub(super) fn run_show_command(
    table_path: Option<&Path>,
    args: ShowArgs,
) -> Result<i32, CliError> {
    let table = load_table(table_path)?;
    let mut session = AtomSession::new(&table);
    let update = ParticleUpdate {
        protons: checked_particle_count("protons", args.protons)?,
        neutrons: checked_particle_count("neutrons", args.neutrons)?,
        electrons: checked_particle_count("electrons", args.electrons)?,
    };

    // Unspecified counts start from the canonical counts of the chosen nucleus.
    match (args.element.as_deref(), update.protons) {
        (Some(query), _) => {
            let record = resolve_element(&table, query)?;
            session.select(&record.name);
        }
        (None, Some(protons)) => {
            if let Some(record) = table.by_protons(protons) {
                session.select(&record.name);
            } else {
                session.set_particles(ParticleUpdate {
                    protons: Some(protons),
                    neutrons: Some(0),
                    electrons: Some(protons),
                });
            }
        }
        (None, None) => {}
    }
    if update != ParticleUpdate::default() {
        session.set_particles(update);
    }

    let counts = session.counts();
    tracing::info!(
        element = session.selected_name(),
        protons = counts.protons,
        neutrons = counts.neutrons,
        electrons = counts.electrons,
        "deriving element view"
    );
    let view = session.derive();
    if view.unplaced_electrons > 0 {
        tracing::warn!(
            unplaced = view.unplaced_electrons,
            "electron count exceeds the subshell fill table"
        );
    }
    let panel = InfoPanel::from_view(&view);

    let content = if args.json {
        render_json(&ShowReport {
            view: &view,
            panel: &panel,
        })?
    } else {
        panel.render_text()
    };
    emit_output(&content, args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_config_command(args: ConfigArgs) -> Result<i32, CliError> {
    let configuration = compute(args.electrons);
    if configuration.unplaced() > 0 {
        tracing::warn!(
            unplaced = configuration.unplaced(),
            "electron count exceeds the subshell fill table"
        );
    }

    let content = if args.json {
        render_json(&configuration)?
    } else {
        render_configuration_text(args.electrons, &configuration)
    };
    emit_output(&content, None)?;
    Ok(0)
}

pub(super) fn run_list_command(
    table_path: Option<&Path>,
    args: ListArgs,
) -> Result<i32, CliError> {
    let table = load_table(table_path)?;
    let mut records = table.search(args.search.as_deref().unwrap_or_default());

    if let Some(pattern) = args.pattern.as_deref() {
        let matched: BTreeSet<u32> = table
            .matching(pattern)?
            .into_iter()
            .map(|record| record.protons)
            .collect();
        records.retain(|record| matched.contains(&record.protons));
    }

    tracing::debug!(count = records.len(), "listing records");
    let content = render_record_list(&records);
    emit_output(&content, None)?;
    Ok(0)
}

pub(super) fn run_stability_command(
    table_path: Option<&Path>,
    args: StabilityArgs,
) -> Result<i32, CliError> {
    let table = load_table(table_path)?;
    let lookup = table.lookup_protons(args.protons);
    let info = classify_stability(args.protons, args.neutrons, lookup.record());

    let content = if args.json {
        render_json(&info)?
    } else {
        format!("Type: {}\nLabel: {}", info.class, info.label)
    };
    emit_output(&content, None)?;
    Ok(0)
}

fn render_configuration_text(electrons: u32, configuration: &ElectronConfiguration) -> String {
    let shells = configuration
        .shells
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = String::new();
    let _ = writeln!(text, "Electrons: {}", electrons);
    let _ = writeln!(text, "Shells: [{}]", shells);
    let _ = writeln!(text, "Configuration: {}", configuration.configuration_text);
    if configuration.unplaced() > 0 {
        let _ = writeln!(text, "Unplaced: {}", configuration.unplaced());
    }
    text
}

fn render_record_list(records: &[&BaseElementRecord]) -> String {
    let mut text = String::new();
    for record in records {
        let _ = writeln!(
            text,
            "{:>3}  {:<3} {}",
            record.protons, record.symbol, record.name
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{render_configuration_text, render_record_list};
    use atom_core::common::config::compute;
    use atom_core::modules::ElementTable;

    #[test]
    fn configuration_text_lists_shells_and_terms() {
        let text = render_configuration_text(11, &compute(11));
        assert_eq!(
            text,
            "Electrons: 11\nShells: [2, 8, 1]\nConfiguration: [Ne] 3s1\n"
        );

        let overflow = render_configuration_text(300, &compute(300));
        assert!(overflow.ends_with("Unplaced: 38\n"));
    }

    #[test]
    fn record_list_is_column_aligned() {
        let table = ElementTable::bundled().expect("bundled table should load");
        let records = table.search("neon");
        assert_eq!(render_record_list(&records), " 10  Ne  Neon\n");
    }
}
