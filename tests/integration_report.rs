//! Integration tests for the full report path: loads through KPIs to CSV.

mod common;

use dmfc_kpi::io::export::{write_kpi_csv, write_summary_csv};
use dmfc_kpi::kpi::KpiReport;
use dmfc_kpi::types::{Appliance, LoadSummary};

#[test]
fn base_scenario_kpis_match_hand_computed_values() {
    let params = common::default_params();
    let apps = common::base_appliances();
    let report = KpiReport::from_loads(&apps, 10.0, &params);

    assert!((report.daily_demand_wh - 1165.0).abs() < 1e-3);
    // 1.165 kWh * 0.9 L/kWh
    assert!((report.methanol_l_per_day - 1.0485).abs() < 1e-4);
    // 10 L / 1.0485 L/day
    assert!((report.tank_autonomy_days - 9.5374).abs() < 1e-3);
    // 1344 Wh / 1165 Wh * 24 h
    assert!((report.battery_autonomy_h - 27.6875).abs() < 1e-3);
    assert_eq!(report.charge_time_h, 0.0);
    assert_eq!(report.system_efficiency, 0.0);
}

#[test]
fn report_is_deterministic_across_invocations() {
    let params = common::default_params();
    let apps = common::base_appliances();
    let a = KpiReport::from_loads(&apps, 10.0, &params);
    let b = KpiReport::from_loads(&apps, 10.0, &params);

    assert_eq!(a.daily_demand_wh, b.daily_demand_wh);
    assert_eq!(a.methanol_l_per_day, b.methanol_l_per_day);
    assert_eq!(a.tank_autonomy_days, b.tank_autonomy_days);
    assert_eq!(a.battery_autonomy_h, b.battery_autonomy_h);
    assert_eq!(a.charge_time_h, b.charge_time_h);
    assert_eq!(a.system_efficiency, b.system_efficiency);
}

#[test]
fn zero_load_report_uses_the_infinity_policy() {
    let params = common::default_params();
    let report = KpiReport::from_loads(&[], 10.0, &params);

    assert_eq!(report.daily_demand_wh, 0.0);
    assert!(report.tank_autonomy_days.is_infinite());
    assert!(report.battery_autonomy_h.is_infinite());
    assert_eq!(report.system_efficiency, 0.0);
    assert_eq!(report.charge_time_h, 0.0);
}

#[test]
fn no_kpi_is_ever_nan() {
    let params = common::default_params();
    let cases: [Vec<Appliance>; 3] = [
        vec![],
        vec![Appliance::new("idle", 100.0, 0.0)],
        vec![Appliance::new("heavy", 2000.0, 24.0)],
    ];
    for apps in &cases {
        let report = KpiReport::from_loads(apps, 10.0, &params);
        assert!(!report.daily_demand_wh.is_nan());
        assert!(!report.methanol_l_per_day.is_nan());
        assert!(!report.tank_autonomy_days.is_nan());
        assert!(!report.battery_autonomy_h.is_nan());
        assert!(!report.charge_time_h.is_nan());
        assert!(!report.system_efficiency.is_nan());
    }
}

#[test]
fn adding_hours_never_lowers_demand() {
    let params = common::default_params();
    let mut apps = common::base_appliances();
    let before = params.daily_energy_demand(&apps);
    apps[2].hours += 4.0;
    let after = params.daily_energy_demand(&apps);
    assert!(after >= before);
}

#[test]
fn display_report_carries_every_kpi_line() {
    let params = common::default_params();
    let report = KpiReport::from_loads(&common::base_appliances(), 10.0, &params);
    let text = report.to_string();

    assert!(text.contains("Daily energy demand:  1165 Wh"));
    assert!(text.contains("Methanol needed/day:  1.05 L"));
    assert!(text.contains("Tank autonomy:        9.5 days"));
    assert!(text.contains("Battery autonomy:     27.7 h"));
    assert!(text.contains("Battery charge time:  0.0 h"));
    assert!(text.contains("System efficiency:    0.0%"));
}

#[test]
fn csv_exports_agree_with_the_report() {
    let params = common::default_params();
    let apps = common::base_appliances();
    let summary = LoadSummary::from_appliances(&apps, params.battery_voltage);
    let report = KpiReport::from_loads(&apps, 10.0, &params);

    let mut buf = Vec::new();
    write_summary_csv(&summary, &mut buf).unwrap();
    let summary_csv = String::from_utf8(buf).unwrap();
    // Header, six appliances, total row
    assert_eq!(summary_csv.lines().count(), 8);
    assert!(summary_csv.lines().last().unwrap().starts_with("TOTAL,"));

    let mut buf = Vec::new();
    write_kpi_csv(&report, &mut buf).unwrap();
    let kpi_csv = String::from_utf8(buf).unwrap();
    assert!(kpi_csv.contains("daily_energy_demand,1165,Wh"));
    assert!(kpi_csv.contains("battery_charge_time,0,h"));
}

#[test]
fn peak_coverage_contract_holds_at_the_limit() {
    let params = common::default_params();
    // 2560 W is exactly 200 A at 12.8 V
    assert_eq!(params.peak_load_coverage(2560.0), 100.0);
    // 3000 W implies 234.4 A; coverable share is 2560/3000 = 85.333…%
    assert_eq!(params.peak_load_coverage(3000.0), 85.3);
}
