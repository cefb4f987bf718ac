//! KPI tiles for the five theses.

use dashboard_core::{
    views::{KpiMetric, KpiPanel, ValueFormat},
    ImprovementRule, SharedSurface,
};
use shared::domain::ViewId;

use ImprovementRule::{WhenAfter, WhenBefore};
use ValueFormat::{Count, Millions, Percent, Plain};

type Row = (
    &'static str,
    &'static str,
    f64,
    f64,
    &'static str,
    ValueFormat,
    ImprovementRule,
);

/// `(value element, delta element, before, after, unit, format, rule)`
///
/// `WhenBefore` rows style their After delta as negative.
const KPI_TABLES: [(&str, [Row; 3]); 5] = [
    (
        "t1-kpis",
        [
            ("t1-classification-coverage", "t1-classification-delta", 70.0, 98.0, "%", Percent, WhenAfter),
            ("t1-duplicates", "t1-duplicates-delta", 487.0, 87.0, " duplicates", Count, WhenAfter),
            ("t1-missing-category", "t1-missing-delta", 2.3, 0.2, "M", Millions, WhenAfter),
        ],
    ),
    (
        "t2-kpis",
        [
            ("t2-supplier-count", "t2-supplier-delta", 1247.0, 763.0, " suppliers", Count, WhenAfter),
            ("t2-top20-share", "t2-top20-delta", 76.0, 84.0, "%", Percent, WhenBefore),
            ("t2-price-improvement", "t2-price-delta", 0.0, 5.2, "% savings", Percent, WhenBefore),
        ],
    ),
    (
        "t3-kpis",
        [
            ("t3-maverick-spend", "t3-maverick-delta", 22.0, 7.0, "%", Percent, WhenAfter),
            ("t3-contract-coverage", "t3-contract-delta", 64.0, 91.0, "%", Percent, WhenBefore),
            ("t3-exceptions-rate", "t3-exceptions-delta", 18.0, 7.0, "%", Percent, WhenAfter),
        ],
    ),
    (
        "t4-kpis",
        [
            ("t4-price-variance", "t4-variance-delta", 18.0, 6.0, "%", Percent, WhenAfter),
            ("t4-above-benchmark", "t4-benchmark-delta", 342.0, 89.0, " items", Count, WhenAfter),
            ("t4-standardization", "t4-standard-delta", 67.0, 94.0, "%", Percent, WhenBefore),
        ],
    ),
    (
        "t5-kpis",
        [
            ("t5-avg-terms", "t5-terms-delta", 42.0, 50.0, " days", Plain, WhenBefore),
            ("t5-discount-capture", "t5-discount-delta", 23.0, 65.0, "%", Percent, WhenBefore),
            ("t5-dpo-trend", "t5-dpo-delta", 45.0, 53.0, " days", Plain, WhenBefore),
        ],
    ),
];

fn metric(row: &Row) -> KpiMetric {
    let (value, delta, before, after, unit, format, rule) = *row;
    KpiMetric {
        value_element: value.into(),
        delta_element: delta.into(),
        before,
        after,
        unit: unit.to_string(),
        format,
        rule,
    }
}

/// All KPI metrics, grouped by panel id.
pub fn kpi_metrics() -> Vec<(ViewId, Vec<KpiMetric>)> {
    KPI_TABLES
        .iter()
        .map(|(panel, rows)| (ViewId::from(*panel), rows.iter().map(metric).collect()))
        .collect()
}

/// One panel per thesis, all writing to `surface`.
pub fn kpi_panels(surface: &SharedSurface) -> Vec<(ViewId, KpiPanel)> {
    kpi_metrics()
        .into_iter()
        .map(|(id, metrics)| (id, KpiPanel::new(metrics, surface.clone())))
        .collect()
}
