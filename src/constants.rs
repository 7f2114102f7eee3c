//! Datasheet reference constants for the EFOY Pro 2800 / EFOY Li 105 system.
//!
//! Published values from SFC Energy AG, exposed as named constants so a
//! display layer can show them verbatim in a reference panel.

/// Battery capacity (Ah), EFOY Li 105.
pub const BATTERY_CAPACITY_AH: f32 = 105.0;

/// Battery nominal voltage (V).
pub const BATTERY_VOLTAGE: f32 = 12.8;

/// Battery energy content (Wh), capacity times voltage.
pub const BATTERY_CAPACITY_WH: f32 = BATTERY_CAPACITY_AH * BATTERY_VOLTAGE;

/// Fuel cell constant power output (W), EFOY Pro 2800.
pub const FUEL_CELL_OUTPUT_W: f32 = 125.0;

/// Fuel cell electrical conversion efficiency (fraction, typical value).
pub const FUEL_CELL_EFFICIENCY: f32 = 0.35;

/// Methanol energy density (kWh per liter, approx.).
pub const METHANOL_ENERGY_DENSITY: f32 = 1.1;

/// Methanol consumed per kWh of electrical output (L/kWh, EFOY Pro 2800).
///
/// Sourced independently of [`METHANOL_ENERGY_DENSITY`]; the two are not
/// exact reciprocals (0.9 × 1.1 ≈ 0.99) and must not be derived from each
/// other.
pub const METHANOL_CONSUMPTION_PER_KWH: f32 = 0.9;

/// Lithium battery round-trip efficiency (fraction).
pub const BATTERY_EFFICIENCY: f32 = 0.90;

/// Peak battery discharge current limit (A).
pub const BATTERY_PEAK_CURRENT_A: f32 = 200.0;
