//! # rcbeam - RC Beam Check CLI
//!
//! Command-line front end for `rcbeam_core`.
//!
//! ## Commands
//!
//! - `check`: Evaluate a beam from flags or a JSON input file
//! - `catalog`: List the main-bar and stirrup catalogs
//! - `equations`: Print the equation reference (markdown)
//!
//! ## Exit codes
//!
//! - 0: design OK
//! - 1: at least one criterion fails
//! - 2: the check could not be carried out (bad input, computation error)

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use rcbeam_core::calculations::rc_beam::evaluate_report;
use rcbeam_core::calculations::{CalcLog, DesignReport};
use rcbeam_core::equations::generate_equations_markdown;
use rcbeam_core::{
    BarSize, BeamDesignInput, Demand, DesignSettings, MaterialProperties, ReinforcementSelection,
    SectionGeometry, StirrupSelection, StirrupSize,
};

const EXIT_FAILED_CHECK: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "rcbeam")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reinforced-concrete beam check, ACI 318 Strength Design Method (kg-cm units)", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a beam section for flexure and shear
    Check(CheckArgs),

    /// List the reinforcing bar catalogs
    Catalog {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Print the equation reference
    Equations {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Args)]
struct CheckArgs {
    /// JSON input file (replaces the section/material/load flags)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON settings file (strength-reduction factors, code label)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Beam label
    #[arg(long)]
    label: Option<String>,

    /// Concrete strength f'c (kg/cm²)
    #[arg(long, default_value_t = 240.0)]
    fc: f64,

    /// Steel yield strength fy (kg/cm²)
    #[arg(long, default_value_t = 4000.0)]
    fy: f64,

    /// Width b (cm)
    #[arg(short, long, default_value_t = 30.0)]
    b: f64,

    /// Overall height h (cm)
    #[arg(long, default_value_t = 50.0)]
    h: f64,

    /// Cover to tension steel centroid (cm); d = h - cover
    #[arg(long, default_value_t = 4.0)]
    cover: f64,

    /// Factored moment Mu (kg-m)
    #[arg(long = "mu", default_value_t = 5500.0)]
    mu: f64,

    /// Factored shear Vu (kg)
    #[arg(long = "vu", default_value_t = 3257.0)]
    vu: f64,

    /// Tension bar size (DB12, DB16, DB20, DB25, DB32)
    #[arg(long, default_value = "DB16")]
    tension_bar: BarSize,

    /// Number of tension bars
    #[arg(long, default_value_t = 3)]
    tension_count: u32,

    /// Add compression steel
    #[arg(long)]
    compression: bool,

    /// Compression bar size
    #[arg(long, default_value = "DB16")]
    compression_bar: BarSize,

    /// Number of compression bars
    #[arg(long, default_value_t = 2)]
    compression_count: u32,

    /// Depth to compression steel centroid d' (cm)
    #[arg(long, default_value_t = 4.0)]
    d_prime: f64,

    /// Stirrup size (RB6, RB9, DB12)
    #[arg(long, default_value = "RB6")]
    stirrup: StirrupSize,

    /// Number of stirrup legs
    #[arg(long, default_value_t = 2)]
    legs: u32,

    /// Stirrup spacing (cm)
    #[arg(long, default_value_t = 15.0)]
    spacing: f64,

    /// Override the flexure strength-reduction factor
    #[arg(long)]
    phi_b: Option<f64>,

    /// Override the shear strength-reduction factor
    #[arg(long)]
    phi_s: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match cli.command {
        Commands::Check(args) => Ok(cmd_check(&args)),
        Commands::Catalog { format } => cmd_catalog(format),
        Commands::Equations { output } => cmd_equations(output.as_deref()),
    }
}

/// Run the check and map the outcome to an exit code
fn cmd_check(args: &CheckArgs) -> ExitCode {
    let input = match build_input(args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    info!(
        label = %input.label,
        b = input.section.b_cm,
        h = input.section.h_cm,
        tension = %input.tension.label(),
        "Evaluating beam"
    );
    let report = evaluate_report(&input);

    let printed = match args.format {
        OutputFormat::Human => {
            print_human(&input, &report);
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
    };
    if let Err(e) = printed {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    match (&report.error, report.design_ok) {
        (Some(_), _) => ExitCode::from(EXIT_ERROR),
        (None, true) => ExitCode::SUCCESS,
        (None, false) => ExitCode::from(EXIT_FAILED_CHECK),
    }
}

/// Input from file or flags, then settings file, then φ flags
fn build_input(args: &CheckArgs) -> Result<BeamDesignInput> {
    let mut input = match &args.input {
        Some(path) => {
            let json = read_file(path)?;
            BeamDesignInput::from_json(&json)
                .with_context(|| format!("Invalid beam input in {}", path.display()))?
        }
        None => input_from_flags(args),
    };

    if let Some(label) = &args.label {
        input.label = label.clone();
    }

    if let Some(path) = &args.settings {
        let json = read_file(path)?;
        input.settings = DesignSettings::from_json(&json)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
    }
    if let Some(phi_b) = args.phi_b {
        input.settings = input.settings.with_phi_b(phi_b);
    }
    if let Some(phi_s) = args.phi_s {
        input.settings = input.settings.with_phi_s(phi_s);
    }
    input.settings.validate().context("Invalid strength-reduction factor")?;

    debug!(settings = ?input.settings, "Settings resolved");
    Ok(input)
}

fn input_from_flags(args: &CheckArgs) -> BeamDesignInput {
    let mut section = SectionGeometry::new(args.b, args.h, args.cover);
    let mut input = BeamDesignInput::default()
        .with_material(MaterialProperties::new(args.fc, args.fy))
        .with_demand(Demand::new(args.mu, args.vu))
        .with_tension(ReinforcementSelection::new(args.tension_bar, args.tension_count))
        .with_stirrups(StirrupSelection::new(args.stirrup, args.legs, args.spacing));

    if args.compression {
        section = section.with_d_prime(args.d_prime);
        input = input.with_compression(ReinforcementSelection::new(
            args.compression_bar,
            args.compression_count,
        ));
    }
    input.with_section(section)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

// ============================================================================
// Output
// ============================================================================

#[derive(Serialize)]
struct JsonOutput<'a> {
    generated_at: chrono::DateTime<Utc>,
    #[serde(flatten)]
    report: &'a DesignReport,
}

fn print_json(report: &DesignReport) -> Result<()> {
    let output = JsonOutput {
        generated_at: Utc::now(),
        report,
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

fn print_human(input: &BeamDesignInput, report: &DesignReport) {
    println!("═══════════════════════════════════════════════════════");
    if input.label.is_empty() {
        println!("  RC BEAM DESIGN REPORT");
    } else {
        println!("  RC BEAM DESIGN REPORT - {}", input.label);
    }
    println!("═══════════════════════════════════════════════════════");
    println!("Date: {}", Local::now().format("%d/%m/%Y %H:%M"));
    println!("Code: {}", input.settings.code);
    println!();
    println!("Input:");
    println!("  f'c = {} kg/cm², fy = {} kg/cm²", input.material.fc_kgcm2, input.material.fy_kgcm2);
    println!(
        "  b = {} cm, h = {} cm, d = {} cm, cover = {} cm",
        input.section.b_cm, input.section.h_cm, input.section.d_cm, input.section.cover_cm
    );
    println!("  Mu = {:.0} kg-m, Vu = {:.0} kg", input.demand.mu_kgm, input.demand.vu_kg);
    println!();

    if let Some(result) = &report.result {
        println!("Check Summary:");
        for row in result.check_rows() {
            println!(
                "  {:<30} {:>14} {:>14}  {}",
                row.label,
                row.provided,
                row.required,
                status_icon(row.passed)
            );
        }
        println!();
        println!("Reinforcement:");
        for row in result.steel_summary() {
            let area = row
                .area_cm2
                .map(|a| format!("{:.3} cm²", a))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<12} {:<24} {:>12}  {}",
                row.kind,
                row.designation.as_deref().unwrap_or("-"),
                area,
                row.status
            );
        }
        println!();
    }

    println!("Calculation:");
    print_log(&report.log);
    println!();

    println!("═══════════════════════════════════════════════════════");
    match (&report.error, &report.result) {
        (Some(e), _) => println!("  RESULT: ERROR ({})", e.error_code()),
        (None, Some(result)) => match result.governing_criterion() {
            None => println!("  RESULT: DESIGN OK"),
            Some(c) => println!("  RESULT: DESIGN NOT OK (governs: {})", c),
        },
        (None, None) => println!("  RESULT: DESIGN NOT OK"),
    }
    println!("═══════════════════════════════════════════════════════");
}

fn print_log(log: &CalcLog) {
    for line in log.lines() {
        if CalcLog::is_header(&line) {
            println!();
            println!("  {}", line);
        } else {
            println!("    {}", line);
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

// ============================================================================
// Catalog and equations
// ============================================================================

#[derive(Serialize)]
struct CatalogEntry {
    designation: &'static str,
    diameter_mm: u32,
    area_cm2: f64,
}

#[derive(Serialize)]
struct Catalog {
    main_bars: Vec<CatalogEntry>,
    stirrups: Vec<CatalogEntry>,
}

fn cmd_catalog(format: OutputFormat) -> Result<ExitCode> {
    let catalog = Catalog {
        main_bars: BarSize::ALL
            .iter()
            .map(|s| CatalogEntry {
                designation: s.designation(),
                diameter_mm: s.diameter_mm(),
                area_cm2: s.area_cm2(),
            })
            .collect(),
        stirrups: StirrupSize::ALL
            .iter()
            .map(|s| CatalogEntry {
                designation: s.designation(),
                diameter_mm: s.diameter_mm(),
                area_cm2: s.area_cm2(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Human => {
            for (title, entries) in [("Main bars", &catalog.main_bars), ("Stirrups", &catalog.stirrups)] {
                println!("{}:", title);
                for e in entries {
                    println!("  {:<6} {:>3} mm  {:>6.3} cm²", e.designation, e.diameter_mm, e.area_cm2);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_equations(output: Option<&Path>) -> Result<ExitCode> {
    let markdown = generate_equations_markdown();
    match output {
        Some(path) => {
            fs::write(path, &markdown).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", markdown.len(), path.display());
        }
        None => print!("{}", markdown),
    }
    Ok(ExitCode::SUCCESS)
}
