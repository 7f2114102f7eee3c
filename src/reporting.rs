//! Plain-text rendering of KPI reports, load summaries, and the constants panel.
//!
//! All unit labeling and display rounding happens here; the calculator hands
//! over raw numeric values only.

use crate::kpi::{KpiReport, SystemParams};
use crate::types::LoadSummary;

/// Rows for the system constants reference panel, as label/value pairs.
pub fn constants_table(params: &SystemParams) -> Vec<(String, String)> {
    vec![
        (
            "Battery Capacity".to_string(),
            format!("{} Ah", params.battery_capacity_ah),
        ),
        (
            "Battery Voltage".to_string(),
            format!("{} V", params.battery_voltage),
        ),
        (
            "Battery Energy".to_string(),
            format!("{} Wh", params.battery_capacity_wh()),
        ),
        (
            "Fuel Cell Output".to_string(),
            format!("{} W", params.fuel_cell_output_w),
        ),
        (
            "Fuel Cell Efficiency".to_string(),
            format!("{:.1}%", params.fuel_cell_efficiency * 100.0),
        ),
        (
            "Methanol Energy Density".to_string(),
            format!("{:.2} kWh/L", params.methanol_energy_density),
        ),
        (
            "Methanol Consumption".to_string(),
            format!("{} L/kWh", params.methanol_consumption_per_kwh),
        ),
    ]
}

/// Renders the constants reference panel as aligned text lines.
pub fn render_constants_table(params: &SystemParams) -> String {
    let mut out = String::from("--- System Constants ---\n");
    for (label, value) in constants_table(params) {
        out.push_str(&format!("{label:<26}{value}\n"));
    }
    out
}

/// Renders the per-appliance energy summary with a total row.
pub fn render_load_summary(summary: &LoadSummary) -> String {
    let mut out = String::from("--- Appliance Energy Summary ---\n");
    out.push_str(&format!(
        "{:<26}{:>10}{:>8}{:>13}{:>11}\n",
        "Device", "Power (W)", "Hours", "Energy (Wh)", "Used (Ah)"
    ));
    for row in &summary.rows {
        out.push_str(&format!(
            "{:<26}{:>10.0}{:>8.1}{:>13.1}{:>11.2}\n",
            row.name, row.power_w, row.hours, row.energy_wh, row.capacity_used_ah
        ));
    }
    out.push_str(&format!(
        "{:<26}{:>10.0}{:>8}{:>13.1}{:>11.2}\n",
        "TOTAL", summary.total_power_w, "-", summary.total_energy_wh, summary.total_capacity_used_ah
    ));
    out
}

/// Prints the full report to stdout: constants, load summary, then KPIs.
pub fn print_report(params: &SystemParams, summary: &LoadSummary, kpi: &KpiReport) {
    println!("{}", render_constants_table(params));
    println!("{}", render_load_summary(summary));
    println!("{kpi}");
}
