//! printcalc CLI - 3D print cost estimator
//!
//! Estimates material cost, electricity cost, print time and filament weight
//! from an object's bounding box and process settings.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use printcalc::{
    completion_notice, Calculator, Estimate, EstimateDetails, InputParameters, Report, ResultSet,
    MATERIALS, PRINTERS,
};

#[derive(Parser)]
#[command(name = "printcalc")]
#[command(about = "Estimate cost and time for a 3D print", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a print from its bounding box and settings
    Estimate(EstimateArgs),
    /// List the material catalog
    Materials,
    /// List the printer catalog
    Printers,
}

#[derive(Args, Default)]
struct EstimateArgs {
    /// Parameter file (.toml or .json); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Bounding box length (mm)
    #[arg(long)]
    length: Option<f64>,
    /// Bounding box width (mm)
    #[arg(long)]
    width: Option<f64>,
    /// Bounding box height (mm)
    #[arg(long)]
    height: Option<f64>,
    /// Infill density (%)
    #[arg(long)]
    infill: Option<f64>,
    /// Material name (see `printcalc materials`)
    #[arg(short, long)]
    material: Option<String>,
    /// Printer name (see `printcalc printers`)
    #[arg(short, long)]
    printer: Option<String>,
    /// Layer height (mm)
    #[arg(long)]
    layer_height: Option<f64>,
    /// Print speed (mm/s)
    #[arg(long)]
    speed: Option<f64>,
    /// Electricity price per kWh
    #[arg(long)]
    rate: Option<f64>,
    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,
    /// Reject material and printer names missing from the catalogs
    #[arg(long)]
    strict: bool,
}

/// JSON output of the `estimate` command.
#[derive(Serialize)]
struct EstimateOutput<'a> {
    parameters: &'a InputParameters,
    result: &'a ResultSet,
    details: EstimateDetails,
    report: Report,
}

impl<'a> EstimateOutput<'a> {
    fn new(parameters: &'a InputParameters, estimate: &'a Estimate) -> Self {
        Self {
            parameters,
            result: &estimate.result,
            details: estimate.details,
            report: Report::new(&estimate.result),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Estimate(args)) => run_estimate(&args)?,
        Some(Commands::Materials) => list_materials(),
        Some(Commands::Printers) => list_printers(),
        None => run_estimate(&EstimateArgs::default())?,
    }

    Ok(())
}

fn run_estimate(args: &EstimateArgs) -> Result<()> {
    let params = build_params(args)?;
    if args.strict {
        params.check_names()?;
    }

    debug!(json = args.json, strict = args.strict, "Running estimate");

    let (params, estimate) = Calculator::new(params).into_parts();
    let result = estimate.result;
    eprintln!("{}", completion_notice(&result));

    if args.json {
        let output = EstimateOutput::new(&params, &estimate);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let material = params.material();
        let printer = params.printer();
        println!(
            "{} x {} x {} mm, {}% infill, {} on {}",
            params.length_mm,
            params.width_mm,
            params.height_mm,
            params.infill_percent,
            material.name,
            printer.name
        );
        println!();
        println!("{}", Report::new(&result));
    }

    Ok(())
}

fn build_params(args: &EstimateArgs) -> Result<InputParameters> {
    let mut params = match &args.config {
        Some(path) => load_params(path)?,
        None => InputParameters::default(),
    };
    apply_overrides(&mut params, args);
    Ok(params)
}

fn load_params(path: &Path) -> Result<InputParameters> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parse: fn(&str) -> printcalc::Result<InputParameters> =
        match ext.to_lowercase().as_str() {
            "json" => InputParameters::from_json,
            "toml" | "" => InputParameters::from_toml,
            _ => anyhow::bail!("Unknown parameter file format: {}", ext),
        };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing {}", path.display()))
}

fn apply_overrides(params: &mut InputParameters, args: &EstimateArgs) {
    let numbers = [
        (args.length, &mut params.length_mm),
        (args.width, &mut params.width_mm),
        (args.height, &mut params.height_mm),
        (args.infill, &mut params.infill_percent),
        (args.layer_height, &mut params.layer_height_mm),
        (args.speed, &mut params.print_speed_mm_per_sec),
        (args.rate, &mut params.electricity_rate_per_kwh),
    ];
    for (value, field) in numbers {
        if let Some(value) = value {
            *field = value;
        }
    }
    if let Some(material) = &args.material {
        params.material_name.clone_from(material);
    }
    if let Some(printer) = &args.printer {
        params.printer_name.clone_from(printer);
    }
}

fn list_materials() {
    println!("{:<8} {:>10} {:>14}", "Material", "Cost/kg", "Density g/cm³");
    for material in MATERIALS {
        println!(
            "{:<8} {:>10} {:>14.2}",
            material.name,
            format!("${:.2}", material.cost_per_kg),
            material.density
        );
    }
}

fn list_printers() {
    println!("{:<20} {:>8} {:>14}", "Printer", "Power W", "Max mm/s");
    for printer in PRINTERS {
        println!(
            "{:<20} {:>8} {:>14}",
            printer.name, printer.power_consumption_watts, printer.max_speed_mm_per_sec
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate_flags() {
        let cli = Cli::try_parse_from([
            "printcalc",
            "estimate",
            "--length",
            "120",
            "--material",
            "PETG",
            "--printer",
            "Creality K1",
            "--layer-height",
            "0.12",
            "--json",
        ])
        .unwrap();

        let Some(Commands::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        let params = build_params(&args).unwrap();
        assert_eq!(params.length_mm, 120.0);
        assert_eq!(params.width_mm, 50.0);
        assert_eq!(params.material_name, "PETG");
        assert_eq!(params.printer_name, "Creality K1");
        assert_eq!(params.layer_height_mm, 0.12);
        assert!(args.json);
        assert!(!args.strict);
    }

    #[test]
    fn test_json_output_from_one_estimate() {
        let (params, estimate) = Calculator::default().into_parts();
        let output = EstimateOutput::new(&params, &estimate);
        assert_eq!(output.details, estimate.details);
        assert_eq!(output.report.total_cost, "$0.58");

        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["parameters"]["material_name"], "PLA");
        assert_eq!(json["report"]["print_time"], "6h 42m");
        assert!(json["details"]["layers"].as_f64().unwrap() > 99.9);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let params = build_params(&EstimateArgs::default()).unwrap();
        assert_eq!(params, InputParameters::default());
    }

    #[test]
    fn test_config_file_then_overrides() {
        let dir = std::env::temp_dir().join(format!("printcalc-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("part.toml");
        std::fs::write(&path, "height_mm = 80.0\ninfill_percent = 50.0\n").unwrap();

        let args = EstimateArgs {
            config: Some(path),
            infill: Some(15.0),
            ..Default::default()
        };
        let params = build_params(&args).unwrap();
        assert_eq!(params.height_mm, 80.0);
        assert_eq!(params.infill_percent, 15.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_config_extension() {
        let err = load_params(Path::new("params.yaml")).unwrap_err();
        assert!(err.to_string().contains("Unknown parameter file format"));

        let err = load_params(Path::new("/nonexistent/params.toml")).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
