mod report;

use std::path::PathBuf;

use canvas::catalog::EnclosureType;
use canvas::engine::EngineCore;
use canvas::placement::GridSettings;
use canvas::project::{ProjectError, ProjectFile};
use canvas::rotation::Rotation;
use canvas::units::Unit;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid project {path}: {source}")]
    Project { path: String, source: ProjectError },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "drillmap", about = "Enclosure drilling layout inspector")]
struct Cli {
    /// Print JSON instead of text tables.
    #[arg(long, global = true)]
    json: bool,

    /// Unit for printed dimensions (metric or imperial).
    #[arg(long, global = true, env = "DRILLMAP_UNIT")]
    unit: Option<Unit>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the enclosure catalog.
    Enclosures,
    /// Print the unwrapped face rectangles of an enclosure.
    Layout(LayoutArgs),
    /// Load a project file and report where every component sits.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Enclosure key, e.g. 1590B or 125B.
    enclosure: EnclosureType,

    /// Canvas rotation in degrees (0 or 90).
    #[arg(long, value_parser = parse_rotation, default_value = "0")]
    rotation: Rotation,
}

#[derive(Args, Debug)]
struct InspectArgs {
    file: PathBuf,

    /// Canvas rotation in degrees (0 or 90); defaults to the project's saved view.
    #[arg(long, value_parser = parse_rotation)]
    rotation: Option<Rotation>,

    /// Flag components whose offsets are off this grid pitch (mm).
    #[arg(long, env = "DRILLMAP_GRID_MM")]
    grid_mm: Option<f64>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let unit = cli.unit;
    match cli.command {
        Command::Enclosures => run_enclosures(cli.json, unit.unwrap_or_default()),
        Command::Layout(args) => run_layout(cli.json, unit.unwrap_or_default(), args),
        Command::Inspect(args) => run_inspect(cli.json, unit, args),
    }
}

fn run_enclosures(json: bool, unit: Unit) -> Result<(), CliError> {
    let rows = report::enclosure_rows();
    if json {
        return print_json(&rows);
    }
    println!("{}", report::enclosures_table(&rows, unit));
    Ok(())
}

fn run_layout(json: bool, unit: Unit, args: LayoutArgs) -> Result<(), CliError> {
    let rows = report::face_rows(args.enclosure, args.rotation);
    if json {
        return print_json(&rows);
    }
    println!("{}", report::faces_table(&rows, unit));
    Ok(())
}

fn run_inspect(json: bool, unit: Option<Unit>, args: InspectArgs) -> Result<(), CliError> {
    let path = args.file.display().to_string();
    let text = std::fs::read_to_string(&args.file).map_err(|source| CliError::Read { path: path.clone(), source })?;
    let project = ProjectFile::from_json(&text).map_err(|source| CliError::Project { path: path.clone(), source })?;
    tracing::info!(%path, components = project.components.len(), "project loaded");

    let mut core = EngineCore::new();
    core.load_project(project);
    if let Some(rotation) = args.rotation {
        core.set_canvas_rotation(rotation);
    }
    if let Some(unit) = unit {
        core.set_unit(unit);
    }
    let grid = args.grid_mm.map(|size_mm| GridSettings { enabled: true, size_mm });

    let rows = report::component_rows(&core, grid);
    if json {
        return print_json(&rows);
    }
    println!("{}", report::components_table(&rows, core.ui.unit));
    Ok(())
}

fn parse_rotation(value: &str) -> Result<Rotation, String> {
    let degrees: f64 = value.trim().parse().map_err(|_| format!("not a number: {value}"))?;
    Rotation::try_from(degrees).map_err(|e| e.to_string())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
