//! Concrete view kinds: collaborator-backed charts and KPI tile panels.

pub mod chart;
pub mod kpi;

pub use chart::{chart_mount, ChartSpec, ChartView};
pub use kpi::{KpiMetric, KpiPanel, ValueFormat};
