//! Integration tests for scenario presets and TOML loading.

use std::path::Path;

use dmfc_kpi::config::ScenarioConfig;
use dmfc_kpi::kpi::KpiReport;

#[test]
fn base_preset_demand_is_1165_wh() {
    let cfg = ScenarioConfig::base_500w();
    let params = cfg.to_params();
    let demand = params.daily_energy_demand(&cfg.to_appliances());
    // 95*4 + 15*6 + 60*8 + 25*2 + 300*0.5 + 5*3
    assert!((demand - 1165.0).abs() < 1e-3);
}

#[test]
fn moderate_preset_demand_is_1905_wh() {
    let cfg = ScenarioConfig::moderate_750w();
    let params = cfg.to_params();
    let demand = params.daily_energy_demand(&cfg.to_appliances());
    assert!((demand - 1905.0).abs() < 1e-3);
}

#[test]
fn peak_preset_demand_is_2165_wh() {
    let cfg = ScenarioConfig::peak_1000w();
    let params = cfg.to_params();
    let demand = params.daily_energy_demand(&cfg.to_appliances());
    assert!((demand - 2165.0).abs() < 1e-3);
}

#[test]
fn presets_rank_by_installed_load() {
    let demands: Vec<f32> = ScenarioConfig::PRESETS
        .iter()
        .map(|name| {
            let cfg = ScenarioConfig::from_preset(name).unwrap();
            cfg.to_params().daily_energy_demand(&cfg.to_appliances())
        })
        .collect();
    assert!(demands[0] < demands[1]);
    assert!(demands[1] < demands[2]);
}

#[test]
fn heavier_presets_need_more_methanol_and_less_autonomy() {
    let base = report_for(ScenarioConfig::base_500w());
    let peak = report_for(ScenarioConfig::peak_1000w());

    assert!(peak.methanol_l_per_day > base.methanol_l_per_day);
    assert!(peak.tank_autonomy_days < base.tank_autonomy_days);
    assert!(peak.battery_autonomy_h < base.battery_autonomy_h);
}

#[test]
fn base_preset_fits_inside_the_battery() {
    let report = report_for(ScenarioConfig::base_500w());
    // 1165 Wh < 1344 Wh capacity: no deficit, no fuel-cell share
    assert_eq!(report.charge_time_h, 0.0);
    assert_eq!(report.system_efficiency, 0.0);
}

#[test]
fn moderate_preset_runs_the_fuel_cell() {
    let report = report_for(ScenarioConfig::moderate_750w());
    // 1905 Wh demand, 1344 Wh capacity: 561 Wh deficit at 125 W
    assert!((report.charge_time_h - 561.0 / 125.0).abs() < 1e-3);
    assert!((report.system_efficiency - 0.2677).abs() < 1e-3);
}

#[test]
fn tank_presets_scale_autonomy_linearly() {
    let mut cfg = ScenarioConfig::base_500w();
    cfg.tank.liters = ScenarioConfig::tank_liters_from_name("m5").unwrap();
    let small = report_for(cfg.clone());
    cfg.tank.liters = ScenarioConfig::tank_liters_from_name("m20").unwrap();
    let large = report_for(cfg);

    assert!((large.tank_autonomy_days - 4.0 * small.tank_autonomy_days).abs() < 1e-3);
}

#[test]
fn sample_scenario_file_loads_and_validates() {
    let cfg = ScenarioConfig::from_toml_file(Path::new("scenarios/winter_weekend.toml")).unwrap();
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg.tank.liters, 20.0);
    assert!(!cfg.appliances.is_empty());

    let report = report_for(cfg);
    assert!(report.daily_demand_wh > 0.0);
    assert!(report.tank_autonomy_days.is_finite());
}

#[test]
fn toml_appliance_list_replaces_the_default() {
    let cfg = ScenarioConfig::from_toml_str(
        r#"
        [[appliances]]
        name = "Cool box (12 V)"
        power_w = 60.0
        hours = 8.0
        "#,
    )
    .unwrap();
    assert_eq!(cfg.appliances.len(), 1);
    let report = report_for(cfg);
    assert!((report.daily_demand_wh - 480.0).abs() < 1e-3);
}

fn report_for(cfg: ScenarioConfig) -> KpiReport {
    let params = cfg.to_params();
    KpiReport::from_loads(&cfg.to_appliances(), cfg.tank.liters, &params)
}
