//! t2: supplier concentration and consolidation.

use dashboard_core::{cumulative_percent, views::ChartSpec};
use serde_json::{json, Value};
use shared::domain::ScenarioState;

use crate::palette::{with_common, AMBER, GREEN};

pub const SUPPLIER_NAMES: [&str; 10] = [
    "IBM",
    "Microsoft",
    "Accenture",
    "McKinsey",
    "Deloitte",
    "PwC",
    "Oracle",
    "SAP",
    "Cisco",
    "Others",
];

/// Spend in $M, ranked descending except the trailing "Others" bucket.
pub const SUPPLIER_SPEND: [f64; 10] = [45.2, 38.7, 22.4, 18.9, 15.6, 12.3, 9.8, 7.5, 6.2, 23.4];

pub const CATEGORY_NAMES: [&str; 6] = [
    "IT Services",
    "Professional Services",
    "Marketing",
    "Facilities",
    "Travel",
    "Office Supplies",
];

pub const SUPPLIER_COUNT_BEFORE: [u32; 6] = [89, 67, 45, 32, 28, 21];
pub const SUPPLIER_COUNT_AFTER: [u32; 6] = [52, 38, 28, 19, 18, 12];

pub fn pareto_cumulative() -> Vec<f64> {
    cumulative_percent(&SUPPLIER_SPEND)
}

pub struct SupplierPareto;

impl ChartSpec for SupplierPareto {
    fn options(&self, _state: &ScenarioState) -> Value {
        with_common(json!({
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "cross" } },
            "legend": { "data": ["Spend ($M)", "Cumulative %"], "top": 10 },
            "xAxis": [{
                "type": "category",
                "data": SUPPLIER_NAMES,
                "axisPointer": { "type": "shadow" },
                "axisLabel": { "rotate": 45, "fontSize": 10 },
            }],
            "yAxis": [
                { "type": "value", "name": "Spend ($M)", "min": 0 },
                { "type": "value", "name": "Cumulative %", "min": 0, "max": 100, "axisLabel": { "formatter": "{value}%" } },
            ],
            "series": [
                { "name": "Spend ($M)", "type": "bar", "data": SUPPLIER_SPEND, "itemStyle": { "color": GREEN } },
                {
                    "name": "Cumulative %",
                    "type": "line",
                    "yAxisIndex": 1,
                    "data": pareto_cumulative(),
                    "itemStyle": { "color": AMBER },
                    "lineStyle": { "width": 3 },
                },
            ],
        }))
    }

    fn update(&self, _state: &ScenarioState) -> Value {
        json!({ "series": [{ "data": SUPPLIER_SPEND }, { "data": pareto_cumulative() }] })
    }
}

/// Shows both scenarios side by side, so the state does not change it.
pub struct SupplierCounts;

impl ChartSpec for SupplierCounts {
    fn options(&self, _state: &ScenarioState) -> Value {
        with_common(json!({
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
            "legend": { "data": ["Before", "After"] },
            "xAxis": { "type": "category", "data": CATEGORY_NAMES },
            "yAxis": { "type": "value", "name": "Supplier Count" },
            "series": [
                { "name": "Before", "type": "bar", "data": SUPPLIER_COUNT_BEFORE, "itemStyle": { "color": AMBER } },
                { "name": "After", "type": "bar", "data": SUPPLIER_COUNT_AFTER, "itemStyle": { "color": GREEN } },
            ],
        }))
    }

    fn update(&self, _state: &ScenarioState) -> Value {
        json!({ "series": [{ "data": SUPPLIER_COUNT_BEFORE }, { "data": SUPPLIER_COUNT_AFTER }] })
    }
}
