// CohortQuery - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Dispatching one roster query and printing its result

use clap::{Parser, Subcommand, ValueEnum};
use cohortquery::app::roster_file;
use cohortquery::core::export;
use cohortquery::platform::config::{self, OutputFormat, PlatformPaths};
use cohortquery::util::{self, constants, error::CohortQueryError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// CohortQuery - roster queries over pipe-delimited student record files.
///
/// Each line of the input file is `first|last|house|adviser|cohort`, where
/// cohort is a label such as "Fall 2015", or `I` for instructors and `G`
/// for ghosts.
#[derive(Parser, Debug)]
#[command(name = "cohortquery", version, about)]
struct Cli {
    /// Roster file to query (overrides [data] file in config.toml).
    #[arg(short = 'f', long = "file", global = true)]
    file: Option<PathBuf>,

    /// Output format (overrides [output] format in config.toml).
    #[arg(long = "format", value_enum, global = true)]
    format: Option<FormatArg>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every distinct house.
    Houses,
    /// List students, sorted, optionally limited to one cohort.
    Students {
        /// Cohort name, e.g. "Fall 2015".
        #[arg(short = 'c', long = "cohort", default_value = constants::ALL_COHORTS)]
        cohort: String,
    },
    /// Print the five house rosters, then ghosts and instructors.
    Rosters,
    /// Print every record in file order.
    Data {
        /// Write the rows as CSV or JSON instead of the normal output.
        #[arg(long = "export", value_enum)]
        export: Option<ExportArg>,
    },
    /// Print the cohort of one person ("First Last").
    Cohort { name: String },
    /// List last names shared by two or more people.
    Dupes,
    /// List housemates of one student ("First Last").
    Housemates { name: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportArg {
    Csv,
    Json,
}

/// One roster in JSON output; an array keeps the fixed group order.
#[derive(Serialize)]
struct RosterJson<'a> {
    group: &'static str,
    names: &'a [String],
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // CLI override > config > default
    let file = cli.file.unwrap_or(app_config.data_file);
    let format = match cli.format {
        Some(FormatArg::Text) => OutputFormat::Text,
        Some(FormatArg::Json) => OutputFormat::Json,
        None => app_config.output_format,
    };

    tracing::debug!(
        version = constants::APP_VERSION,
        file = %file.display(),
        "CohortQuery starting"
    );

    if let Err(e) = run(cli.command, &file, format) {
        tracing::error!(error = %e, "Query failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, file: &Path, format: OutputFormat) -> Result<(), CohortQueryError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Houses => print_list(&mut out, format, roster_file::all_houses(file)?)?,
        Command::Students { cohort } => print_list(
            &mut out,
            format,
            roster_file::students_by_cohort(file, &cohort)?,
        )?,
        Command::Rosters => {
            let rosters = roster_file::all_names_by_house(file)?;
            match format {
                OutputFormat::Json => {
                    let groups: Vec<RosterJson<'_>> = rosters
                        .iter()
                        .map(|(group, names)| RosterJson {
                            group: group.label(),
                            names,
                        })
                        .collect();
                    print_json(&mut out, &groups)?;
                }
                OutputFormat::Text => {
                    for (group, names) in rosters.iter() {
                        writeln!(out, "{group}:").map_err(stdout_err)?;
                        for name in names {
                            writeln!(out, "  {name}").map_err(stdout_err)?;
                        }
                    }
                }
            }
        }
        Command::Data { export: Some(kind) } => {
            let rows = roster_file::all_data(file)?;
            let target = Path::new("<stdout>");
            match kind {
                ExportArg::Csv => export::export_csv(&rows, &mut out, target)?,
                ExportArg::Json => export::export_json(&rows, &mut out, target)?,
            };
            writeln!(out).map_err(stdout_err)?;
        }
        Command::Data { export: None } => {
            let rows = roster_file::all_data(file)?;
            match format {
                OutputFormat::Json => print_json(&mut out, &rows)?,
                OutputFormat::Text => {
                    for row in &rows {
                        writeln!(
                            out,
                            "{}|{}|{}|{}",
                            row.full_name, row.house, row.adviser, row.cohort
                        )
                        .map_err(stdout_err)?;
                    }
                }
            }
        }
        Command::Cohort { name } => {
            let cohort = roster_file::get_cohort_for(file, &name)?;
            match format {
                OutputFormat::Json => print_json(&mut out, &cohort)?,
                OutputFormat::Text => {
                    writeln!(out, "{}", cohort.as_deref().unwrap_or("None")).map_err(stdout_err)?
                }
            }
        }
        Command::Dupes => print_list(&mut out, format, roster_file::find_duped_last_names(file)?)?,
        Command::Housemates { name } => print_list(
            &mut out,
            format,
            roster_file::get_housemates_for(file, &name)?,
        )?,
    }

    out.flush().map_err(stdout_err)
}

/// Print a list of names: one per line, or a JSON array.
fn print_list<W, I>(out: &mut W, format: OutputFormat, items: I) -> Result<(), CohortQueryError>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    match format {
        OutputFormat::Json => print_json(out, &items.into_iter().collect::<Vec<_>>()),
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{item}").map_err(stdout_err)?;
            }
            Ok(())
        }
    }
}

fn print_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), CohortQueryError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| CohortQueryError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write JSON",
        source: e.into(),
    })?;
    writeln!(out).map_err(stdout_err)
}

fn stdout_err(e: std::io::Error) -> CohortQueryError {
    CohortQueryError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write output",
        source: e,
    }
}
