use clap::{Parser, Subcommand};
use ocu_report::{SizingReport, build_report};
use ocu_sizing::size_unit;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ocu-cli")]
#[command(about = "OCU sizing CLI - capacity, vessel, media and fan selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case file (YAML, or JSON by extension)
        case_path: PathBuf,
    },
    /// List tanks configured in a case
    Tanks {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Run the sizing pipeline for a case
    Size {
        /// Path to the case file
        case_path: PathBuf,
        /// Emit the report as pretty JSON instead of text
        #[arg(long)]
        json: bool,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Case error: {0}")]
    Project(#[from] ocu_project::ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Tanks { case_path } => cmd_tanks(&case_path),
        Commands::Size {
            case_path,
            json,
            output,
        } => cmd_size(&case_path, json, output.as_deref()),
    }
}

fn load_case(path: &Path) -> CliResult<ocu_project::SizingCase> {
    let case = if path.extension().is_some_and(|e| e == "json") {
        ocu_project::load_json(path)?
    } else {
        ocu_project::load_yaml(path)?
    };
    tracing::debug!(case = %case.name, tanks = case.tanks.len(), "case loaded");
    Ok(case)
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    load_case(case_path)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_tanks(case_path: &Path) -> CliResult<()> {
    let case = load_case(case_path)?;
    let compiled = ocu_project::compile_case(&case);

    if case.tanks.is_empty() {
        println!("No tanks configured in case");
    } else {
        println!("Tanks in case '{}':", case.name);
        for (def, spec) in case.tanks.iter().zip(&compiled.tanks) {
            println!(
                "  {} - {} ({} × {} × {} m, freeboard: {})",
                def.id,
                spec.kind.label(),
                def.length_m,
                def.breadth_m,
                def.height_m,
                spec.rule.label()
            );
        }
    }
    Ok(())
}

fn cmd_size(case_path: &Path, json: bool, output: Option<&Path>) -> CliResult<()> {
    let case = load_case(case_path)?;
    let compiled = ocu_project::compile_case(&case);
    let outcome = size_unit(
        &compiled.tanks,
        compiled.air_changes_per_hour,
        compiled.contact_time,
    );
    let report = build_report(&case.name, &outcome);

    if json {
        let content = serde_json::to_string_pretty(&report)?;
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("✓ Report written to {}", path.display());
            }
            None => println!("{content}"),
        }
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SizingReport) {
    println!("Sizing report for '{}'", report.case_name);

    if report.tanks.is_empty() {
        println!("\nNo tanks configured; sizing for zero flow");
    } else {
        println!("\nTank flowrates:");
        for row in &report.tanks {
            println!(
                "  {:<22} {:<14} freeboard={:.2} m  volume={:.2} m³  flow={:.2} m³/hr",
                row.tank, row.dimensions_m, row.freeboard_m, row.freeboard_volume_m3,
                row.flowrate_m3_hr
            );
        }
    }

    println!("\nVentilation:");
    println!(
        "  Total flow:        {:.2} m³/hr",
        report.ventilation.total_flow_m3_hr
    );
    println!(
        "  Required capacity: {} m³/hr",
        report.ventilation.required_capacity_m3_hr
    );

    println!("\nSelected vessel:");
    println!("  Diameter:     {:.1} m", report.vessel.diameter_m);
    println!("  Shell height: {:.1} m", report.vessel.shell_height_m);
    println!("  Bed height:   {:.3} m", report.vessel.bed_height_m);
    println!("  Media volume: {:.3} m³", report.vessel.media_volume_m3);

    println!("\nActivated carbon:");
    println!("  Carbon mass:   {:.1} kg", report.media.carbon_mass_kg);
    println!("  In 25 kg bags: {} kg", report.media.packaged_mass_kg);

    let dp = &report.pressure_drop;
    println!("\nPressure drop:");
    println!("  Phase velocity:  {:.2} m/s", dp.phase_velocity_m_s);
    println!("  Bed drop per m:  {:.0} Pa", dp.bed_drop_per_m_pa);
    println!("  Bed drop:        {:.0} Pa", dp.bed_drop_pa);
    println!("  Prefilter:       {:.0} Pa", dp.prefilter_drop_pa);
    println!("  Duct & fittings: {:.0} Pa", dp.duct_drop_pa);
    println!("  Suction:         {:.0} Pa", dp.suction_drop_pa);
    println!("  Total:           {:.0} Pa", dp.total_drop_pa);

    println!(
        "\nRecommended fan: {} ({})",
        dp.fan_type, dp.fan_class
    );
}
