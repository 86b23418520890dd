use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

use simplebcs::config::Parameters;
use simplebcs::formatting::{self, Identity, Terminal};
use simplebcs::language::{BoundaryTable, ParsingError};
use simplebcs::logging;
use simplebcs::output;
use simplebcs::parsing;
use simplebcs::registry::{Call, Driver, Phase, Recorder, TableCache};
use simplebcs::table::Source;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("simplebcs")
        .version(VERSION)
        .propagate_version(true)
        .about("Select simple boundary conditions for grid functions.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit debugging output on stderr."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse and validate the boundary conditions in a parameter file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The TOML parameter file containing bc_string or [[bcs]] entries."),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply the boundary conditions in a parameter file against a recording host")
                .arg(
                    Arg::new("phase")
                        .long("phase")
                        .value_parser(["local", "level"])
                        .default_value("local")
                        .help("Select boundary conditions (local) or synchronize groups (level)."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The TOML parameter file containing bc_string or [[bcs]] entries."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print a boundary condition string in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("bc_string")
                        .required(true)
                        .help("The boundary condition string, for example \"flat: aa::bb c::dd\"."),
                ),
        )
        .get_matches();

    logging::init(matches.get_flag("debug"));

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            let filename = Path::new(filename);

            debug!(?filename);

            let parameters = load(filename);
            let table = match construct(&parameters) {
                Ok(table) => table,
                Err(error) => {
                    report_parsing_error(&parameters, &error);
                    std::process::exit(1);
                }
            };

            output::announce(&table, parameters.verbose);
            debug!("{} group{} checked", table.len(), if table.len() == 1 { "" } else { "s" });
        }
        Some(("apply", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            let filename = Path::new(filename);

            let phase = match submatches
                .get_one::<String>("phase")
                .map(String::as_str)
            {
                Some("level") => Phase::Level,
                _ => Phase::Local,
            };

            debug!(?filename, ?phase);

            let parameters = load(filename);
            let registry = parameters.registry();

            let cache = TableCache::new();
            let table = match cache.get_or_build(|| construct(&parameters)) {
                Ok(table) => table,
                Err(error) => {
                    report_parsing_error(&parameters, &error);
                    std::process::exit(1);
                }
            };

            output::announce(table, parameters.verbose);

            let mut host = Recorder::new();
            let driver = Driver::new(parameters.verbose);
            let result = driver.run(phase, table, &registry, &mut host);

            for call in &host.calls {
                match call {
                    Call::Select { variable, bc } => println!("select {} -> {}", bc, variable),
                    Call::Sync { group } => println!("sync {}", group),
                }
            }

            match result {
                Ok(count) => debug!("{} call{} succeeded", count, if count == 1 { "" } else { "s" }),
                Err(failures) => {
                    for failure in &failures {
                        eprintln!("{}", problem::concise_registration_error(failure));
                    }
                    std::process::exit(1);
                }
            }
        }
        Some(("format", submatches)) => {
            let content = submatches
                .get_one::<String>("bc_string")
                .unwrap();

            let raw_output = submatches.get_flag("raw-control-chars");

            let parsed = match parsing::parse(content) {
                Ok(parsed) => parsed,
                Err(error) => {
                    eprintln!("{}", problem::full_parsing_error(&error, content));
                    std::process::exit(1);
                }
            };

            for warning in &parsed.warnings {
                eprintln!("{}", problem::full_parsing_warning(warning, content));
            }

            let result = if raw_output || std::io::stdout().is_terminal() {
                formatting::render(&Terminal, &parsed.table)
            } else {
                formatting::render(&Identity, &parsed.table)
            };

            print!("{}", result);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: simplebcs [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn load(filename: &Path) -> Parameters {
    match Parameters::load(filename) {
        Ok(parameters) => parameters,
        Err(error) => {
            eprintln!("{}", problem::concise_config_error(&error));
            std::process::exit(1);
        }
    }
}

/// Build the table, reporting every non-fatal problem found along the way.
/// Only an illegal character in bc_string is returned as an error.
fn construct(parameters: &Parameters) -> Result<BoundaryTable, ParsingError> {
    let source = parameters.source();
    let registry = parameters.registry();

    let outcome = source.construct(&registry)?;

    if let Source::String(content) = &source {
        for warning in &outcome.warnings {
            eprintln!("{}", problem::full_parsing_warning(warning, content));
        }
    }
    for issue in &outcome.problems {
        eprintln!("{}", problem::concise_validation_error(issue));
    }

    Ok(outcome.table)
}

fn report_parsing_error(parameters: &Parameters, error: &ParsingError) {
    match &parameters.bc_string {
        Some(content) => eprintln!("{}", problem::full_parsing_error(error, content)),
        None => eprintln!("{}: {}", "error".bright_red(), error),
    }
}
