//! KPI calculator core: pure energy-balance formulas over appliance loads.
//!
//! Every operation here is a stateless, total transformation: defined for all
//! numeric inputs including zero, no side effects, no I/O, never panics.
//! Degenerate inputs map to defined numeric outputs — autonomy and discharge
//! time with a zero denominator are positive infinity (the resource never
//! depletes), efficiency with zero methanol is exactly `0.0`. A caller never
//! needs error handling on the calculation path.

use std::fmt;

use serde::Serialize;

use crate::constants;
use crate::types::Appliance;

/// Fixed physical parameters of the fuel-cell / battery system.
///
/// Values never change after startup; the struct is held immutably by the
/// caller for the duration of a calculation pass. `Default` mirrors the
/// EFOY Pro 2800 / EFOY Li 105 datasheet constants in [`crate::constants`].
#[derive(Debug, Clone, Serialize)]
pub struct SystemParams {
    /// Battery capacity (Ah).
    pub battery_capacity_ah: f32,
    /// Battery nominal voltage (V).
    pub battery_voltage: f32,
    /// Fuel cell constant power output (W).
    pub fuel_cell_output_w: f32,
    /// Fuel cell conversion efficiency (fraction).
    pub fuel_cell_efficiency: f32,
    /// Methanol energy density (kWh/L).
    pub methanol_energy_density: f32,
    /// Methanol consumed per kWh delivered (L/kWh).
    pub methanol_consumption_per_kwh: f32,
    /// Battery round-trip efficiency (fraction).
    pub battery_efficiency: f32,
    /// Peak battery discharge current limit (A).
    pub battery_peak_current_a: f32,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            battery_capacity_ah: constants::BATTERY_CAPACITY_AH,
            battery_voltage: constants::BATTERY_VOLTAGE,
            fuel_cell_output_w: constants::FUEL_CELL_OUTPUT_W,
            fuel_cell_efficiency: constants::FUEL_CELL_EFFICIENCY,
            methanol_energy_density: constants::METHANOL_ENERGY_DENSITY,
            methanol_consumption_per_kwh: constants::METHANOL_CONSUMPTION_PER_KWH,
            battery_efficiency: constants::BATTERY_EFFICIENCY,
            battery_peak_current_a: constants::BATTERY_PEAK_CURRENT_A,
        }
    }
}

impl SystemParams {
    /// Battery energy content (Wh), capacity times voltage.
    pub fn battery_capacity_wh(&self) -> f32 {
        self.battery_capacity_ah * self.battery_voltage
    }

    /// Total daily energy demand (Wh): Σ power × hours over all appliances.
    ///
    /// Empty list yields `0.0`; the result is unbounded above.
    pub fn daily_energy_demand(&self, appliances: &[Appliance]) -> f32 {
        appliances.iter().map(Appliance::energy_wh).sum()
    }

    /// Methanol consumed per day (L) to deliver `energy_wh`.
    pub fn methanol_consumption(&self, energy_wh: f32) -> f32 {
        (energy_wh / 1000.0) * self.methanol_consumption_per_kwh
    }

    /// Days the available methanol lasts at the given daily consumption.
    ///
    /// Zero consumption yields positive infinity: the tank never depletes.
    pub fn tank_autonomy(&self, liters_available: f32, daily_consumption_l: f32) -> f32 {
        if daily_consumption_l == 0.0 {
            return f32::INFINITY;
        }
        liters_available / daily_consumption_l
    }

    /// Hours the battery alone covers a daily demand of `energy_wh`.
    ///
    /// This is the normalized ratio `capacity_wh / energy_wh * 24`, modelling
    /// the demand repeated at the same daily rate; it is not a discharge-curve
    /// simulation. Zero demand yields positive infinity.
    pub fn battery_discharge_time(&self, energy_wh: f32) -> f32 {
        if energy_wh == 0.0 {
            return f32::INFINITY;
        }
        self.battery_capacity_wh() / energy_wh * 24.0
    }

    /// Hours of fuel-cell runtime needed to replace `energy_to_charge_wh`,
    /// using the configured fuel-cell output.
    ///
    /// The output is assumed positive; no zero-guard is applied.
    pub fn battery_charge_time_needed(&self, energy_to_charge_wh: f32) -> f32 {
        self.battery_charge_time_needed_with(energy_to_charge_wh, self.fuel_cell_output_w)
    }

    /// Hours of fuel-cell runtime needed to replace `energy_to_charge_wh` at
    /// an explicit output power (W).
    pub fn battery_charge_time_needed_with(
        &self,
        energy_to_charge_wh: f32,
        fuel_cell_output_w: f32,
    ) -> f32 {
        energy_to_charge_wh / fuel_cell_output_w
    }

    /// Global system efficiency: net usable energy after battery round-trip
    /// loss divided by the chemical energy of the methanol consumed.
    ///
    /// `_battery_energy_wh` is part of the published signature but does not
    /// enter the formula; only the fuel-cell share is derated by the battery
    /// round-trip efficiency. Zero methanol yields exactly `0.0`, not
    /// infinity — the asymmetric policy versus the autonomy functions is
    /// deliberate.
    pub fn global_system_efficiency(
        &self,
        _battery_energy_wh: f32,
        fuel_cell_energy_wh: f32,
        methanol_used_l: f32,
    ) -> f32 {
        if methanol_used_l == 0.0 {
            return 0.0;
        }
        let net_energy_kwh = (fuel_cell_energy_wh / 1000.0) * self.battery_efficiency;
        let chemical_energy_kwh = methanol_used_l * self.methanol_energy_density;
        net_energy_kwh / chemical_energy_kwh
    }

    /// Fuel-cell conversion efficiency: useful electrical energy divided by
    /// the chemical energy of the methanol consumed, without the battery-loss
    /// term. Zero methanol yields `0.0`.
    ///
    /// Not called by the report path; kept in the public contract for
    /// external callers.
    pub fn fuel_cell_efficiency(&self, useful_energy_kwh: f32, methanol_used_l: f32) -> f32 {
        if methanol_used_l == 0.0 {
            return 0.0;
        }
        let chemical_energy_kwh = methanol_used_l * self.methanol_energy_density;
        useful_energy_kwh / chemical_energy_kwh
    }

    /// System-level delivery efficiency: energy delivered divided by the
    /// chemical energy of the methanol consumed. Zero methanol yields `0.0`.
    ///
    /// Not called by the report path; kept in the public contract for
    /// external callers.
    pub fn system_efficiency(&self, energy_delivered_kwh: f32, methanol_liters: f32) -> f32 {
        if methanol_liters == 0.0 {
            return 0.0;
        }
        let chemical_energy_kwh = methanol_liters * self.methanol_energy_density;
        energy_delivered_kwh / chemical_energy_kwh
    }

    /// Percentage of a peak power demand the battery's current limit covers.
    ///
    /// Implied current at or below the peak limit returns `100.0`; above it,
    /// the coverable fraction `limit_a × voltage / peak_power_w`, as a
    /// percentage rounded to one decimal place. The rounding is contractual.
    pub fn peak_load_coverage(&self, peak_power_w: f32) -> f32 {
        let peak_current_a = peak_power_w / self.battery_voltage;
        if peak_current_a <= self.battery_peak_current_a {
            return 100.0;
        }
        let pct = self.battery_peak_current_a * self.battery_voltage / peak_power_w * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

/// The KPI bundle derived from one appliance list and tank size.
///
/// Computed fresh on every invocation; no caching. All values carry the
/// degenerate-case policy of the individual calculator operations, so fields
/// may be positive infinity but never NaN for valid (non-negative) inputs.
#[derive(Debug, Clone, Serialize)]
pub struct KpiReport {
    /// Total daily energy demand (Wh).
    pub daily_demand_wh: f32,
    /// Methanol consumed per day (L).
    pub methanol_l_per_day: f32,
    /// Days the selected tank lasts (may be infinite).
    pub tank_autonomy_days: f32,
    /// Hours the battery alone covers the demand (may be infinite).
    pub battery_autonomy_h: f32,
    /// Fuel-cell hours needed to replace the daily battery deficit.
    pub charge_time_h: f32,
    /// Global system efficiency (fraction, 0 when no fuel-cell share).
    pub system_efficiency: f32,
}

impl KpiReport {
    /// Computes all KPIs for one appliance list and tank size.
    ///
    /// The battery covers demand up to its capacity; the remainder is the
    /// fuel-cell share, which also equals the daily charge deficit.
    ///
    /// # Arguments
    ///
    /// * `appliances` - Ordered appliance list
    /// * `tank_liters` - Selected methanol tank capacity (L)
    /// * `params` - Fixed system parameters
    pub fn from_loads(appliances: &[Appliance], tank_liters: f32, params: &SystemParams) -> Self {
        let daily_demand_wh = params.daily_energy_demand(appliances);
        let methanol_l_per_day = params.methanol_consumption(daily_demand_wh);
        let tank_autonomy_days = params.tank_autonomy(tank_liters, methanol_l_per_day);
        let battery_autonomy_h = params.battery_discharge_time(daily_demand_wh);

        let capacity_wh = params.battery_capacity_wh();
        let battery_energy_wh = daily_demand_wh.min(capacity_wh);
        let fuel_cell_energy_wh = (daily_demand_wh - capacity_wh).max(0.0);
        let system_efficiency = params.global_system_efficiency(
            battery_energy_wh,
            fuel_cell_energy_wh,
            methanol_l_per_day,
        );

        let deficit_wh = (daily_demand_wh - capacity_wh).max(0.0);
        let charge_time_h = params.battery_charge_time_needed(deficit_wh);

        Self {
            daily_demand_wh,
            methanol_l_per_day,
            tank_autonomy_days,
            battery_autonomy_h,
            charge_time_h,
            system_efficiency,
        }
    }
}

impl fmt::Display for KpiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- KPI Report ---")?;
        writeln!(f, "Daily energy demand:  {:.0} Wh", self.daily_demand_wh)?;
        writeln!(f, "Methanol needed/day:  {:.2} L", self.methanol_l_per_day)?;
        writeln!(f, "Tank autonomy:        {:.1} days", self.tank_autonomy_days)?;
        writeln!(f, "Battery autonomy:     {:.1} h", self.battery_autonomy_h)?;
        writeln!(f, "Battery charge time:  {:.1} h", self.charge_time_h)?;
        write!(
            f,
            "System efficiency:    {:.1}%",
            self.system_efficiency * 100.0
        )
    }
}
