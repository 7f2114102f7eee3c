//! Shared test fixtures for integration tests.

use dmfc_kpi::kpi::SystemParams;
use dmfc_kpi::types::Appliance;

/// Default system parameters (EFOY Pro 2800 / EFOY Li 105 datasheet values).
pub fn default_params() -> SystemParams {
    SystemParams::default()
}

/// The base camping appliance list (1165 Wh/day total).
pub fn base_appliances() -> Vec<Appliance> {
    vec![
        Appliance::new("Laptop (230 V)", 95.0, 4.0),
        Appliance::new("Led Lighting (12 V)", 15.0, 6.0),
        Appliance::new("Cool box (12 V)", 60.0, 8.0),
        Appliance::new("Smartphone (2 chargers)", 25.0, 2.0),
        Appliance::new("Electric kettle (12 V)", 300.0, 0.5),
        Appliance::new("Radio (12 V)", 5.0, 3.0),
    ]
}
