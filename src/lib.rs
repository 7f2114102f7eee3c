//! Energy-balance KPI calculator for a hybrid DMFC + lithium-battery
//! camping power system.

/// Scenario configuration, presets, and boundary validation.
pub mod config;
/// Datasheet reference constants.
pub mod constants;
pub mod io;
/// The pure KPI calculator core.
pub mod kpi;
pub mod reporting;
/// Appliance records and energy summaries.
pub mod types;
