mod commands;
mod helpers;

use atom_core::domain::AtomError;
use clap::Parser;
use std::path::PathBuf;

const PROGRAM_NAME: &str = "atom-model";

pub fn run_from_env() -> i32 {
    helpers::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let atom_error = error.as_atom_error();
            eprintln!("{}", atom_error.diagnostic_line());
            if let Some(summary_line) = atom_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            atom_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "atom-model",
    version,
    about = "Derive element state from proton, neutron and electron counts"
)]
struct Cli {
    /// Element table JSON replacing the bundled periodic table
    #[arg(long, global = true, value_name = "PATH")]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Derive an element view and print its information panel
    Show(commands::ShowArgs),
    /// Compute the electron configuration for an electron count
    Config(commands::ConfigArgs),
    /// List table records, optionally filtered
    List(commands::ListArgs),
    /// Classify nuclear stability for a proton and neutron count
    Stability(commands::StabilityArgs),
}

fn dispatch_parsed(cli: Cli) -> Result<i32, CliError> {
    let table_path = cli.table.as_deref();
    match cli.command {
        CliCommand::Show(args) => commands::run_show_command(table_path, args),
        CliCommand::Config(args) => commands::run_config_command(args),
        CliCommand::List(args) => commands::run_list_command(table_path, args),
        CliCommand::Stability(args) => commands::run_stability_command(table_path, args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(AtomError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<AtomError> for CliError {
    fn from(error: AtomError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_atom_error(&self) -> AtomError {
        match self {
            Self::Usage(message) => AtomError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => AtomError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
