//! CSV export for appliance summaries and KPI values.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::kpi::KpiReport;
use crate::types::LoadSummary;

/// Column header for the appliance summary CSV.
const SUMMARY_HEADER: &str = "name,power_w,hours,energy_wh,capacity_used_ah";

/// Column header for the KPI CSV.
const KPI_HEADER: &str = "metric,value,unit";

/// Exports the appliance energy summary to a CSV file at the given path.
///
/// Writes a header row, one row per appliance, and a final `TOTAL` row.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_summary_csv(summary: &LoadSummary, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_summary_csv(summary, buf)
}

/// Writes the appliance energy summary as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_summary_csv(summary: &LoadSummary, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(SUMMARY_HEADER.split(','))?;

    for row in &summary.rows {
        wtr.write_record(&[
            row.name.clone(),
            format!("{:.1}", row.power_w),
            format!("{:.2}", row.hours),
            format!("{:.2}", row.energy_wh),
            format!("{:.3}", row.capacity_used_ah),
        ])?;
    }
    wtr.write_record(&[
        "TOTAL".to_string(),
        format!("{:.1}", summary.total_power_w),
        String::new(),
        format!("{:.2}", summary.total_energy_wh),
        format!("{:.3}", summary.total_capacity_used_ah),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Exports the KPI values to a CSV file at the given path.
///
/// One `metric,value,unit` row per KPI; infinite autonomy values are written
/// as `inf`.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_kpi_csv(kpi: &KpiReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_kpi_csv(kpi, buf)
}

/// Writes the KPI values as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_kpi_csv(kpi: &KpiReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(KPI_HEADER.split(','))?;

    let rows: [(&str, f32, &str); 6] = [
        ("daily_energy_demand", kpi.daily_demand_wh, "Wh"),
        ("methanol_consumption", kpi.methanol_l_per_day, "L/day"),
        ("tank_autonomy", kpi.tank_autonomy_days, "days"),
        ("battery_autonomy", kpi.battery_autonomy_h, "h"),
        ("battery_charge_time", kpi.charge_time_h, "h"),
        ("system_efficiency", kpi.system_efficiency, "fraction"),
    ];
    for (metric, value, unit) in rows {
        wtr.write_record(&[metric.to_string(), format!("{value}"), unit.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
