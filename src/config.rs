//! TOML-based scenario configuration and preset definitions.
//!
//! All input validation lives here, at the boundary: the KPI calculator in
//! [`crate::kpi`] assumes well-formed inputs and performs none itself.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants;
use crate::kpi::SystemParams;
use crate::types::Appliance;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the base camping scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use one of the built-in
/// presets via [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Battery parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Fuel cell parameters.
    #[serde(default)]
    pub fuel_cell: FuelCellConfig,
    /// Methanol fuel parameters.
    #[serde(default)]
    pub methanol: MethanolConfig,
    /// Methanol tank selection.
    #[serde(default)]
    pub tank: TankConfig,
    /// Ordered appliance load list.
    #[serde(default = "base_appliances")]
    pub appliances: Vec<ApplianceConfig>,
}

/// Battery parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Capacity (Ah).
    pub capacity_ah: f32,
    /// Nominal voltage (V).
    pub voltage: f32,
    /// Round-trip efficiency (0.0–1.0).
    pub round_trip_efficiency: f32,
    /// Peak discharge current limit (A).
    pub peak_current_a: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_ah: constants::BATTERY_CAPACITY_AH,
            voltage: constants::BATTERY_VOLTAGE,
            round_trip_efficiency: constants::BATTERY_EFFICIENCY,
            peak_current_a: constants::BATTERY_PEAK_CURRENT_A,
        }
    }
}

/// Fuel cell parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FuelCellConfig {
    /// Constant power output (W).
    pub output_w: f32,
    /// Conversion efficiency (0.0–1.0).
    pub efficiency: f32,
}

impl Default for FuelCellConfig {
    fn default() -> Self {
        Self {
            output_w: constants::FUEL_CELL_OUTPUT_W,
            efficiency: constants::FUEL_CELL_EFFICIENCY,
        }
    }
}

/// Methanol fuel parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MethanolConfig {
    /// Energy density (kWh/L).
    pub energy_density_kwh_per_l: f32,
    /// Consumption per delivered kWh (L/kWh).
    pub consumption_l_per_kwh: f32,
}

impl Default for MethanolConfig {
    fn default() -> Self {
        Self {
            energy_density_kwh_per_l: constants::METHANOL_ENERGY_DENSITY,
            consumption_l_per_kwh: constants::METHANOL_CONSUMPTION_PER_KWH,
        }
    }
}

/// Methanol tank selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TankConfig {
    /// Tank capacity (L).
    pub liters: f32,
}

impl Default for TankConfig {
    fn default() -> Self {
        // M10 cartridge
        Self { liters: 10.0 }
    }
}

/// One appliance entry as it appears in scenario TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceConfig {
    /// Display label.
    pub name: String,
    /// Rated power draw (W).
    pub power_w: f32,
    /// Daily operating hours (0–24).
    pub hours: f32,
}

impl ApplianceConfig {
    fn new(name: &str, power_w: f32, hours: f32) -> Self {
        Self {
            name: name.to_string(),
            power_w,
            hours,
        }
    }
}

fn base_appliances() -> Vec<ApplianceConfig> {
    vec![
        ApplianceConfig::new("Laptop (230 V)", 95.0, 4.0),
        ApplianceConfig::new("Led Lighting (12 V)", 15.0, 6.0),
        ApplianceConfig::new("Cool box (12 V)", 60.0, 8.0),
        ApplianceConfig::new("Smartphone (2 chargers)", 25.0, 2.0),
        ApplianceConfig::new("Electric kettle (12 V)", 300.0, 0.5),
        ApplianceConfig::new("Radio (12 V)", 5.0, 3.0),
    ]
}

fn moderate_appliances() -> Vec<ApplianceConfig> {
    vec![
        ApplianceConfig::new("Laptop (230 V)", 95.0, 4.0),
        ApplianceConfig::new("Led Lighting (12 V)", 15.0, 6.0),
        ApplianceConfig::new("Cool box (12 V)", 60.0, 8.0),
        ApplianceConfig::new("Bed warmer (12 V)", 240.0, 3.0),
        ApplianceConfig::new("Smartphone (3 chargers)", 35.0, 2.0),
        ApplianceConfig::new("Electric kettle (12 V)", 300.0, 0.5),
        ApplianceConfig::new("Radio (12 V)", 5.0, 3.0),
    ]
}

fn peak_appliances() -> Vec<ApplianceConfig> {
    vec![
        ApplianceConfig::new("Laptop (230 V)", 95.0, 4.0),
        ApplianceConfig::new("Led Lighting (12 V)", 15.0, 6.0),
        ApplianceConfig::new("Cool box (12 V)", 60.0, 8.0),
        ApplianceConfig::new("Fan Heater (12 V)", 490.0, 2.0),
        ApplianceConfig::new("Smartphone (3 chargers)", 35.0, 2.0),
        ApplianceConfig::new("Electric kettle (12 V)", 300.0, 0.5),
        ApplianceConfig::new("Radio (12 V)", 5.0, 3.0),
    ]
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"appliances[2].power_w"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the base camping scenario (≈500 W installed load).
    pub fn base_500w() -> Self {
        Self {
            battery: BatteryConfig::default(),
            fuel_cell: FuelCellConfig::default(),
            methanol: MethanolConfig::default(),
            tank: TankConfig::default(),
            appliances: base_appliances(),
        }
    }

    /// Returns the moderate scenario (≈750 W): base loads plus a bed warmer.
    pub fn moderate_750w() -> Self {
        Self {
            appliances: moderate_appliances(),
            ..Self::base_500w()
        }
    }

    /// Returns the peak scenario (≈1000 W): base loads plus a fan heater.
    pub fn peak_1000w() -> Self {
        Self {
            appliances: peak_appliances(),
            ..Self::base_500w()
        }
    }

    /// Available load-scenario preset names.
    pub const PRESETS: &[&str] = &["base_500w", "moderate_750w", "peak_1000w"];

    /// Available tank preset names and their capacities (L).
    pub const TANKS: &[(&str, f32)] = &[("m5", 5.0), ("m10", 10.0), ("m20", 20.0)];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "base_500w" => Ok(Self::base_500w()),
            "moderate_750w" => Ok(Self::moderate_750w()),
            "peak_1000w" => Ok(Self::peak_1000w()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Resolves a tank selection: a preset name (`m5`, `m10`, `m20`) or a
    /// plain liter value.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the name is neither a known cartridge nor a
    /// number.
    pub fn tank_liters_from_name(name: &str) -> Result<f32, ConfigError> {
        let lowered = name.to_ascii_lowercase();
        if let Some(&(_, liters)) = Self::TANKS.iter().find(|(n, _)| *n == lowered) {
            return Ok(liters);
        }
        lowered.parse::<f32>().map_err(|_| ConfigError {
            field: "tank".to_string(),
            message: format!(
                "unknown tank \"{name}\", available: {} or a liter value",
                Self::TANKS
                    .iter()
                    .map(|(n, _)| *n)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid. Malformed
    /// appliance entries are rejected here rather than coerced; the
    /// calculator never sees them.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.battery.capacity_ah <= 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity_ah".into(),
                message: "must be > 0".into(),
            });
        }
        if self.battery.voltage <= 0.0 {
            errors.push(ConfigError {
                field: "battery.voltage".into(),
                message: "must be > 0".into(),
            });
        }
        if self.battery.round_trip_efficiency <= 0.0 || self.battery.round_trip_efficiency > 1.0 {
            errors.push(ConfigError {
                field: "battery.round_trip_efficiency".into(),
                message: "must be in (0, 1]".into(),
            });
        }
        if self.battery.peak_current_a <= 0.0 {
            errors.push(ConfigError {
                field: "battery.peak_current_a".into(),
                message: "must be > 0".into(),
            });
        }
        if self.fuel_cell.output_w <= 0.0 {
            errors.push(ConfigError {
                field: "fuel_cell.output_w".into(),
                message: "must be > 0".into(),
            });
        }
        if self.fuel_cell.efficiency <= 0.0 || self.fuel_cell.efficiency > 1.0 {
            errors.push(ConfigError {
                field: "fuel_cell.efficiency".into(),
                message: "must be in (0, 1]".into(),
            });
        }
        if self.methanol.energy_density_kwh_per_l <= 0.0 {
            errors.push(ConfigError {
                field: "methanol.energy_density_kwh_per_l".into(),
                message: "must be > 0".into(),
            });
        }
        if self.methanol.consumption_l_per_kwh <= 0.0 {
            errors.push(ConfigError {
                field: "methanol.consumption_l_per_kwh".into(),
                message: "must be > 0".into(),
            });
        }
        if self.tank.liters <= 0.0 {
            errors.push(ConfigError {
                field: "tank.liters".into(),
                message: "must be > 0".into(),
            });
        }

        for (i, app) in self.appliances.iter().enumerate() {
            if app.power_w < 0.0 {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].power_w"),
                    message: "must be >= 0".into(),
                });
            }
            if !(0.0..=24.0).contains(&app.hours) {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].hours"),
                    message: "must be in [0, 24]".into(),
                });
            }
        }

        errors
    }

    /// Builds the immutable calculator parameters from this configuration.
    pub fn to_params(&self) -> SystemParams {
        SystemParams {
            battery_capacity_ah: self.battery.capacity_ah,
            battery_voltage: self.battery.voltage,
            fuel_cell_output_w: self.fuel_cell.output_w,
            fuel_cell_efficiency: self.fuel_cell.efficiency,
            methanol_energy_density: self.methanol.energy_density_kwh_per_l,
            methanol_consumption_per_kwh: self.methanol.consumption_l_per_kwh,
            battery_efficiency: self.battery.round_trip_efficiency,
            battery_peak_current_a: self.battery.peak_current_a,
        }
    }

    /// Builds the typed appliance list from this configuration.
    pub fn to_appliances(&self) -> Vec<Appliance> {
        self.appliances
            .iter()
            .map(|a| Appliance::new(a.name.clone(), a.power_w, a.hours))
            .collect()
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::base_500w()
    }
}
