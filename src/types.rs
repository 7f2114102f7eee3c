//! Appliance load records and per-device energy summaries.

use serde::{Deserialize, Serialize};

/// One electrical load: rated power draw and daily usage hours.
///
/// Immutable once constructed; carries no identity beyond its position in the
/// appliance list. Field validity (non-negative power and hours, hours within
/// a day) is checked at the configuration boundary, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    /// Display label, informational only.
    pub name: String,
    /// Rated power draw (W, non-negative).
    pub power_w: f32,
    /// Daily operating hours (0–24 by convention, not enforced).
    pub hours: f32,
}

impl Appliance {
    /// Creates a new appliance record.
    pub fn new(name: impl Into<String>, power_w: f32, hours: f32) -> Self {
        Self {
            name: name.into(),
            power_w,
            hours,
        }
    }

    /// Daily energy consumed by this appliance (Wh).
    pub fn energy_wh(&self) -> f32 {
        self.power_w * self.hours
    }
}

/// One row of the appliance energy summary table.
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceEnergy {
    /// Appliance label.
    pub name: String,
    /// Rated power draw (W).
    pub power_w: f32,
    /// Daily operating hours.
    pub hours: f32,
    /// Daily energy (Wh).
    pub energy_wh: f32,
    /// Battery capacity used at nominal voltage (Ah).
    pub capacity_used_ah: f32,
}

/// Per-appliance energy rows plus totals, as shown in the device summary.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    /// One row per appliance, in input order.
    pub rows: Vec<ApplianceEnergy>,
    /// Sum of rated power over all appliances (W).
    pub total_power_w: f32,
    /// Sum of daily energy over all appliances (Wh).
    pub total_energy_wh: f32,
    /// Sum of battery capacity used over all appliances (Ah).
    pub total_capacity_used_ah: f32,
}

impl LoadSummary {
    /// Builds the summary table from an appliance list.
    ///
    /// # Arguments
    ///
    /// * `appliances` - Ordered appliance list
    /// * `battery_voltage` - Nominal battery voltage (V) for the Ah column
    pub fn from_appliances(appliances: &[Appliance], battery_voltage: f32) -> Self {
        let mut rows = Vec::with_capacity(appliances.len());
        let mut total_power_w = 0.0_f32;
        let mut total_energy_wh = 0.0_f32;
        let mut total_capacity_used_ah = 0.0_f32;

        for app in appliances {
            let energy_wh = app.energy_wh();
            let capacity_used_ah = energy_wh / battery_voltage;
            total_power_w += app.power_w;
            total_energy_wh += energy_wh;
            total_capacity_used_ah += capacity_used_ah;
            rows.push(ApplianceEnergy {
                name: app.name.clone(),
                power_w: app.power_w,
                hours: app.hours,
                energy_wh,
                capacity_used_ah,
            });
        }

        Self {
            rows,
            total_power_w,
            total_energy_wh,
            total_capacity_used_ah,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appliance_energy_is_power_times_hours() {
        let app = Appliance::new("Cool box (12 V)", 60.0, 8.0);
        assert_eq!(app.energy_wh(), 480.0);
    }

    #[test]
    fn summary_totals_match_row_sums() {
        let apps = vec![
            Appliance::new("Laptop (230 V)", 95.0, 4.0),
            Appliance::new("Radio (12 V)", 5.0, 3.0),
        ];
        let summary = LoadSummary::from_appliances(&apps, 12.8);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.total_power_w, 100.0);
        assert_eq!(summary.total_energy_wh, 395.0);
        assert!((summary.total_capacity_used_ah - 395.0 / 12.8).abs() < 1e-5);
    }

    #[test]
    fn empty_list_yields_zero_totals() {
        let summary = LoadSummary::from_appliances(&[], 12.8);
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_energy_wh, 0.0);
        assert_eq!(summary.total_capacity_used_ah, 0.0);
    }
}
