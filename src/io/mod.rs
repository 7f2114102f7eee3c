//! File output: CSV export of summaries and KPI values.

pub mod export;
