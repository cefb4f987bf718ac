//! Chart specs for the five theses, keyed by their element ids.

pub mod compliance;
pub mod consolidation;
pub mod data_clarity;
pub mod price_variance;
pub mod working_capital;

use dashboard_core::views::ChartSpec;
use shared::domain::ViewId;

use crate::jitter::Jitter;

pub const CHART_IDS: [&str; 10] = [
    "t1-treemap",
    "t1-sankey",
    "t2-pareto",
    "t2-suppliers",
    "t3-complianceStack",
    "t3-heatmap",
    "t4-boxplot",
    "t4-controlChart",
    "t5-termsHistogram",
    "t5-waterfall",
];

/// Every chart spec in page order.
pub fn chart_catalog(jitter: Jitter) -> Vec<(ViewId, Box<dyn ChartSpec>)> {
    let specs: [Box<dyn ChartSpec>; 10] = [
        Box::new(data_clarity::SpendTreemap),
        Box::new(data_clarity::SpendSankey),
        Box::new(consolidation::SupplierPareto),
        Box::new(consolidation::SupplierCounts),
        Box::new(compliance::ComplianceStack),
        Box::new(compliance::MaverickHeatmap::new(jitter)),
        Box::new(price_variance::PriceBoxplot),
        Box::new(price_variance::PriceControlChart::new(jitter)),
        Box::new(working_capital::TermsHistogram),
        Box::new(working_capital::CapitalWaterfall),
    ];
    CHART_IDS
        .into_iter()
        .map(ViewId::from)
        .zip(specs)
        .collect()
}

#[cfg(test)]
#[path = "../tests/charts_tests.rs"]
mod tests;
