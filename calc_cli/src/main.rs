//! # Tubeweight CLI
//!
//! Command-line front end for `calc_core`: computes weight per metre and the
//! mother pipe for hollow sections, and keeps a JSON file of saved results.
//!
//! ```text
//! tubeweight calc square --side 25 -t 1.2
//! tubeweight calc scalene --a 30 --b 40 --c 50 -t 2 --save "Bracket"
//! tubeweight list --shape triangle
//! ```

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_core::calculations::{
    calculate, HollowSectionInput, MaterialParams, MotherPipeMethod, SectionSpec, ShapeKind,
};
use calc_core::config::Settings;
use calc_core::constants::PiConstant;
use calc_core::materials::Material;
use calc_core::record::SavedCalculation;
use calc_core::store::{delete_record, save_record, CalculationStore, JsonFileStore};
use calc_core::CalcError;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "tubeweight")]
#[command(about = "Hollow section weight and mother pipe calculator")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, default_value = "tubeweight.toml")]
    config: PathBuf,

    /// Saved-calculation file, overrides the settings file
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Value of π: standard or rational (22/7)
    #[arg(long, global = true)]
    pi: Option<PiConstant>,

    /// Mother pipe rule: perimeter or area
    #[arg(long, global = true)]
    method: Option<MotherPipeMethod>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate one section
    Calc {
        #[command(subcommand)]
        shape: ShapeCommand,
    },
    /// List saved calculations
    List {
        /// Only this shape
        #[arg(long)]
        shape: Option<ShapeKind>,
    },
    /// Recalculate a saved calculation with the current settings
    Show {
        #[arg(long)]
        shape: ShapeKind,
        #[arg(long)]
        index: usize,
    },
    /// Delete a saved calculation
    Delete {
        #[arg(long)]
        shape: ShapeKind,
        #[arg(long)]
        index: usize,
    },
    /// List known materials and densities
    Materials,
    /// Print the effective settings as TOML
    Config,
}

#[derive(Subcommand)]
enum ShapeCommand {
    /// Round tube
    Circle {
        /// Outer diameter (mm)
        #[arg(long)]
        od: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Square tube
    Square {
        /// Outer side (mm)
        #[arg(long)]
        side: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Rectangular tube
    Rectangle {
        /// Outer length (mm)
        #[arg(long)]
        length: f64,
        /// Outer width (mm)
        #[arg(long)]
        width: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Oval (elliptical) tube
    Oval {
        /// Outer major axis (mm)
        #[arg(long)]
        major: f64,
        /// Outer minor axis (mm)
        #[arg(long)]
        minor: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Equilateral triangular tube
    Triangle {
        /// Outer side (mm)
        #[arg(long)]
        side: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Triangular tube with three different sides
    Scalene {
        #[arg(long)]
        a: f64,
        #[arg(long)]
        b: f64,
        #[arg(long)]
        c: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Wall thickness (mm)
    #[arg(short = 't', long)]
    thickness: f64,

    /// Density (kg/m³), overrides --material
    #[arg(long)]
    density: Option<f64>,

    /// Named material (mild-steel, stainless-steel, aluminium, copper, brass)
    #[arg(long)]
    material: Option<Material>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Save the result under this name (empty for the default name)
    #[arg(long)]
    save: Option<String>,
}

impl ShapeCommand {
    fn into_parts(self) -> (SectionSpec, CommonArgs) {
        match self {
            ShapeCommand::Circle { od, common } => (SectionSpec::Circle { od_mm: od }, common),
            ShapeCommand::Square { side, common } => (SectionSpec::Square { od_mm: side }, common),
            ShapeCommand::Rectangle {
                length,
                width,
                common,
            } => (
                SectionSpec::Rectangle {
                    length_mm: length,
                    width_mm: width,
                },
                common,
            ),
            ShapeCommand::Oval {
                major,
                minor,
                common,
            } => (
                SectionSpec::Oval {
                    major_mm: major,
                    minor_mm: minor,
                },
                common,
            ),
            ShapeCommand::Triangle { side, common } => {
                (SectionSpec::TriangleEquilateral { side_mm: side }, common)
            }
            ShapeCommand::Scalene { a, b, c, common } => (
                SectionSpec::TriangleScalene {
                    a_mm: a,
                    b_mm: b,
                    c_mm: c,
                },
                common,
            ),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;
    if let Some(store) = &cli.store {
        settings.store_path = store.clone();
    }
    if let Some(pi) = cli.pi {
        settings.pi = pi;
    }
    if let Some(method) = cli.method {
        settings.mother_pipe_method = method;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = load_settings(&cli)?;
    let mut store = JsonFileStore::new(&settings.store_path);

    match cli.command {
        Command::Calc { shape } => run_calc(shape, &settings, &mut store),
        Command::List { shape } => {
            let saved = store.load().context("failed to load saved calculations")?;
            output::print_saved(&saved, shape);
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { shape, index } => {
            let saved = store.load().context("failed to load saved calculations")?;
            let record = saved.get(shape, index)?;
            let input = record.to_input()?;
            println!("{}", record.name);
            match calculate(&input, settings.calc_options()) {
                Ok(result) => {
                    output::print_result(&input, &result, settings.display_precision);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(report_input_error(&e, false)),
            }
        }
        Command::Delete { shape, index } => {
            let removed = delete_record(&mut store, shape, index)
                .with_context(|| format!("failed to delete {} #{}", shape, index))?;
            println!("Deleted '{}'", removed.name);
            Ok(ExitCode::SUCCESS)
        }
        Command::Materials => {
            output::print_materials();
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            print!("{}", settings.to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_calc(shape: ShapeCommand, settings: &Settings, store: &mut JsonFileStore) -> Result<ExitCode> {
    let (section, common) = shape.into_parts();
    let density = common
        .density
        .unwrap_or_else(|| common.material.unwrap_or(settings.default_material).density_kg_m3());

    let input = HollowSectionInput {
        section,
        params: MaterialParams::new(common.thickness, density),
    };

    let result = match calculate(&input, settings.calc_options()) {
        Ok(result) => result,
        Err(e) => return Ok(report_input_error(&e, common.json)),
    };

    if common.json {
        let doc = serde_json::json!({ "input": input, "result": result });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        output::print_result(&input, &result, settings.display_precision);
    }

    if let Some(name) = common.save.as_deref() {
        let record = SavedCalculation::new(&input, &result, Some(name));
        let record_name = record.name.clone();
        let index = save_record(store, record)
            .with_context(|| format!("failed to save to {}", store.path().display()))?;
        println!(
            "Saved '{}' as {} #{} in {}",
            record_name,
            input.section.kind(),
            index,
            store.path().display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn report_input_error(e: &CalcError, json: bool) -> ExitCode {
    if json {
        if let Ok(text) = serde_json::to_string_pretty(e) {
            println!("{}", text);
        }
    }
    eprintln!("{}", e);
    ExitCode::FAILURE
}
