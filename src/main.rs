//! KPI calculator entry point — CLI wiring and config-driven report output.

use std::path::Path;
use std::process;

use dmfc_kpi::config::ScenarioConfig;
use dmfc_kpi::io::export::{export_kpi_csv, export_summary_csv};
use dmfc_kpi::kpi::KpiReport;
use dmfc_kpi::reporting;
use dmfc_kpi::types::LoadSummary;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    tank: Option<String>,
    summary_out: Option<String>,
    kpi_out: Option<String>,
}

fn print_help() {
    eprintln!("dmfc-kpi — DMFC + battery energy-balance KPI calculator");
    eprintln!();
    eprintln!("Usage: dmfc-kpi [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>     Load scenario from TOML config file");
    eprintln!("  --preset <name>       Use a built-in load preset (base_500w, moderate_750w, peak_1000w)");
    eprintln!("  --tank <name|liters>  Methanol tank: m5, m10, m20, or a liter value");
    eprintln!("  --summary-out <path>  Export the appliance energy summary to CSV");
    eprintln!("  --kpi-out <path>      Export the KPI values to CSV");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the base_500w preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        tank: None,
        summary_out: None,
        kpi_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--tank" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --tank requires a name or liter argument");
                    process::exit(1);
                }
                cli.tank = Some(args[i].clone());
            }
            "--summary-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --summary-out requires a path argument");
                    process::exit(1);
                }
                cli.summary_out = Some(args[i].clone());
            }
            "--kpi-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --kpi-out requires a path argument");
                    process::exit(1);
                }
                cli.kpi_out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then base_500w
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::base_500w()
    };

    // Apply tank override
    if let Some(ref tank) = cli.tank {
        match ScenarioConfig::tank_liters_from_name(tank) {
            Ok(liters) => scenario.tank.liters = liters,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Compute
    let params = scenario.to_params();
    let appliances = scenario.to_appliances();
    let summary = LoadSummary::from_appliances(&appliances, params.battery_voltage);
    let kpi = KpiReport::from_loads(&appliances, scenario.tank.liters, &params);

    reporting::print_report(&params, &summary, &kpi);

    // Export CSVs if requested
    if let Some(ref path) = cli.summary_out {
        if let Err(e) = export_summary_csv(&summary, Path::new(path)) {
            eprintln!("error: failed to write summary CSV: {e}");
            process::exit(1);
        }
        eprintln!("Appliance summary written to {path}");
    }
    if let Some(ref path) = cli.kpi_out {
        if let Err(e) = export_kpi_csv(&kpi, Path::new(path)) {
            eprintln!("error: failed to write KPI CSV: {e}");
            process::exit(1);
        }
        eprintln!("KPI values written to {path}");
    }
}
